//! The user's current filter selection.

use chrono::NaiveDate;
use crop_survey::{crop::Crop, date_range::DateRange, record::SurveyRecord, status::SurveyStatus};
use std::collections::BTreeSet;

/// Default lower NDVI bound on session start.
pub const DEFAULT_NDVI_MIN: f64 = 0.3;

/// Default upper NDVI bound on session start.
pub const DEFAULT_NDVI_MAX: f64 = 1.0;

/// Constraints a survey record must satisfy to be shown.
///
/// Ranges are inclusive on both ends and are not validated; an inverted
/// range simply matches nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub crops: BTreeSet<Crop>,
    pub statuses: BTreeSet<SurveyStatus>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub ndvi_min: f64,
    pub ndvi_max: f64,
    /// Keep only records whose classified crop equals the surveyed crop.
    pub exact_match_only: bool,
}

impl FilterCriteria {
    /// Session-start selection for `records`: every crop and status, the
    /// dataset's full date span, NDVI [0.3, 1.0], exact match off.
    ///
    /// An empty dataset gets an unbounded date range.
    pub fn defaults_for(records: &[SurveyRecord]) -> Self {
        let span = DateRange::spanning(records.iter().map(|r| r.survey_date))
            .unwrap_or(DateRange(NaiveDate::MIN, NaiveDate::MAX));
        Self {
            crops: Crop::ALL.into_iter().collect(),
            statuses: SurveyStatus::ALL.into_iter().collect(),
            start_date: span.start(),
            end_date: span.end(),
            ndvi_min: DEFAULT_NDVI_MIN,
            ndvi_max: DEFAULT_NDVI_MAX,
            exact_match_only: false,
        }
    }

    pub fn date_range(&self) -> DateRange {
        DateRange(self.start_date, self.end_date)
    }

    /// True when `ndvi` lies within [ndvi_min, ndvi_max].
    pub fn accepts_ndvi(&self, ndvi: f64) -> bool {
        self.ndvi_min <= ndvi && ndvi <= self.ndvi_max
    }
}
