//! Summary statistics and chart-ready groupings of a filtered record set.

use chrono::NaiveDate;
use crop_survey::{crop::Crop, record::SurveyRecord};
use crop_utils::numeric::mean_round2;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Whether the classified crop agreed with the surveyed crop.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum MatchLabel {
    Yes,
    No,
}

impl MatchLabel {
    pub fn for_record(record: &SurveyRecord) -> Self {
        if record.is_match() {
            MatchLabel::Yes
        } else {
            MatchLabel::No
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MatchLabel::Yes => "Yes",
            MatchLabel::No => "No",
        }
    }
}

impl fmt::Display for MatchLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Everything the metric cards and charts need from a filtered set.
///
/// An empty input produces `Aggregates::default()`: zero counts, a mean of
/// `0.0` and empty maps.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Aggregates {
    pub total_count: usize,
    pub unique_field_count: usize,
    pub match_count: usize,
    /// Mean NDVI rounded to two decimals.
    pub mean_ndvi: f64,
    pub crop_distribution: BTreeMap<Crop, usize>,
    pub match_distribution: BTreeMap<MatchLabel, usize>,
    /// NDVI values per surveyed crop, in record order.
    pub ndvi_by_crop: BTreeMap<Crop, Vec<f64>>,
    pub daily_counts: BTreeMap<NaiveDate, usize>,
}

impl Aggregates {
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    pub fn mismatch_count(&self) -> usize {
        self.total_count - self.match_count
    }

    /// Per-day counts in chronological order.
    pub fn timeline(&self) -> Vec<(NaiveDate, usize)> {
        self.daily_counts
            .iter()
            .map(|(date, count)| (*date, *count))
            .collect()
    }
}

/// Derive [`Aggregates`] from `filtered`.
pub fn aggregate(filtered: &[SurveyRecord]) -> Aggregates {
    if filtered.is_empty() {
        return Aggregates::default();
    }

    let mut crop_distribution: BTreeMap<Crop, usize> = BTreeMap::new();
    let mut ndvi_by_crop: BTreeMap<Crop, Vec<f64>> = BTreeMap::new();
    let mut daily_counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    let mut field_ids: HashSet<&str> = HashSet::new();
    // Both labels are reported for a non-empty set, even at zero
    let mut match_distribution: BTreeMap<MatchLabel, usize> =
        [(MatchLabel::Yes, 0), (MatchLabel::No, 0)].into_iter().collect();

    for record in filtered {
        *crop_distribution.entry(record.surveyed_crop).or_insert(0) += 1;
        ndvi_by_crop
            .entry(record.surveyed_crop)
            .or_default()
            .push(record.ndvi);
        *daily_counts.entry(record.survey_date).or_insert(0) += 1;
        field_ids.insert(record.field_id.as_str());
        *match_distribution
            .entry(MatchLabel::for_record(record))
            .or_insert(0) += 1;
    }

    let ndvi_values: Vec<f64> = filtered.iter().map(|r| r.ndvi).collect();
    let match_count = match_distribution[&MatchLabel::Yes];

    Aggregates {
        total_count: filtered.len(),
        unique_field_count: field_ids.len(),
        match_count,
        mean_ndvi: mean_round2(&ndvi_values),
        crop_distribution,
        match_distribution,
        ndvi_by_crop,
        daily_counts,
    }
}
