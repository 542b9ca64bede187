//! Filter engine: the boolean mask over the session dataset.

use crate::criteria::FilterCriteria;
use crop_survey::record::SurveyRecord;

/// True if `record` satisfies every constraint in `criteria`.
pub fn matches(record: &SurveyRecord, criteria: &FilterCriteria) -> bool {
    criteria.crops.contains(&record.surveyed_crop)
        && criteria.statuses.contains(&record.survey_status)
        && criteria.date_range().contains(&record.survey_date)
        && criteria.accepts_ndvi(record.ndvi)
        && (!criteria.exact_match_only || record.is_match())
}

/// Select the records that satisfy `criteria`, keeping input order.
///
/// No match is a normal outcome and yields an empty vector.
pub fn filter(records: &[SurveyRecord], criteria: &FilterCriteria) -> Vec<SurveyRecord> {
    let filtered: Vec<SurveyRecord> = records
        .iter()
        .filter(|record| matches(record, criteria))
        .cloned()
        .collect();
    log::info!(
        "Showing {} survey points after filters ({} in dataset)",
        filtered.len(),
        records.len()
    );
    filtered
}
