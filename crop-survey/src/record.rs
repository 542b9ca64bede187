use crate::{crop::Crop, status::SurveyStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A single simulated ground-truth observation of a field.
///
/// `classified_crop` is the label an automated classifier assigned to the
/// same field; validation compares it against `surveyed_crop`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyRecord {
    /// Unique field identifier, `F001`, `F002`, ...
    pub field_id: String,
    pub surveyed_crop: Crop,
    pub survey_status: SurveyStatus,
    pub survey_date: NaiveDate,
    pub latitude: f64,
    pub longitude: f64,
    /// Vegetation index in [0, 1], two decimals.
    pub ndvi: f64,
    pub classified_crop: Crop,
    pub farmer_name: String,
}

impl SurveyRecord {
    /// True when the classifier agrees with the field survey.
    pub fn is_match(&self) -> bool {
        self.surveyed_crop == self.classified_crop
    }

    /// Field identifier for the 1-based record `index`.
    pub fn field_id_for(index: usize) -> String {
        format!("F{:03}", index)
    }

    /// Farmer name for the 1-based record `index`.
    pub fn farmer_name_for(index: usize) -> String {
        format!("Farmer_{}", index)
    }

    /// Order by survey date, most recent first. Used for table display.
    pub fn cmp_newest_first(&self, other: &Self) -> Ordering {
        other.survey_date.cmp(&self.survey_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(surveyed: Crop, classified: Crop, day: u32) -> SurveyRecord {
        SurveyRecord {
            field_id: SurveyRecord::field_id_for(7),
            surveyed_crop: surveyed,
            survey_status: SurveyStatus::Planted,
            survey_date: NaiveDate::from_ymd_opt(2025, 2, day).unwrap(),
            latitude: 21.0,
            longitude: 76.0,
            ndvi: 0.5,
            classified_crop: classified,
            farmer_name: SurveyRecord::farmer_name_for(7),
        }
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(SurveyRecord::field_id_for(1), "F001");
        assert_eq!(SurveyRecord::field_id_for(42), "F042");
        assert_eq!(SurveyRecord::field_id_for(200), "F200");
        assert_eq!(SurveyRecord::farmer_name_for(7), "Farmer_7");
    }

    #[test]
    fn test_is_match() {
        assert!(record(Crop::Rice, Crop::Rice, 1).is_match());
        assert!(!record(Crop::Rice, Crop::Maize, 1).is_match());
    }

    #[test]
    fn test_newest_first() {
        let older = record(Crop::Rice, Crop::Rice, 1);
        let newer = record(Crop::Rice, Crop::Rice, 9);
        assert_eq!(older.cmp_newest_first(&newer), Ordering::Greater);
        assert_eq!(newer.cmp_newest_first(&older), Ordering::Less);
    }
}
