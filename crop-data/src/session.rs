//! Session context: the dataset a user works against.
//!
//! A session generates its survey points once and owns them for its whole
//! lifetime. Every interaction passes new criteria to
//! [`Session::on_criteria_changed`], which returns a fresh view without
//! touching the records.

use crate::criteria::FilterCriteria;
use crate::view::FilteredView;
use crop_survey::generator::{generate, generate_seeded, SimulationConfig};
use crop_survey::record::SurveyRecord;

#[derive(Debug, Clone)]
pub struct Session {
    records: Vec<SurveyRecord>,
}

impl Session {
    /// Start a session with a freshly simulated, unseeded dataset.
    pub fn new(config: &SimulationConfig) -> Self {
        Self::from_records(generate(config))
    }

    /// Start a session whose dataset is reproducible from `seed`.
    pub fn seeded(config: &SimulationConfig, seed: u64) -> Self {
        Self::from_records(generate_seeded(config, seed))
    }

    pub fn from_records(records: Vec<SurveyRecord>) -> Self {
        log::debug!("session: Started with {} survey points", records.len());
        Self { records }
    }

    /// The full, unfiltered dataset.
    pub fn records(&self) -> &[SurveyRecord] {
        &self.records
    }

    /// Criteria a fresh dashboard starts with.
    pub fn default_criteria(&self) -> FilterCriteria {
        FilterCriteria::defaults_for(&self.records)
    }

    /// Re-run filter and aggregation for `criteria`.
    pub fn on_criteria_changed(&self, criteria: &FilterCriteria) -> FilteredView {
        FilteredView::build(&self.records, criteria)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&SimulationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::three_records;
    use crop_survey::generator::RECORD_COUNT;

    #[test]
    fn test_default_session_has_full_dataset() {
        let session = Session::default();
        assert_eq!(session.records().len(), RECORD_COUNT);
    }

    #[test]
    fn test_default_criteria_span_dataset() {
        let session = Session::seeded(&SimulationConfig::default(), 8);
        let criteria = session.default_criteria();
        let min = session.records().iter().map(|r| r.survey_date).min().unwrap();
        let max = session.records().iter().map(|r| r.survey_date).max().unwrap();
        assert_eq!(criteria.start_date, min);
        assert_eq!(criteria.end_date, max);

        // Default NDVI floor of 0.3 drops the simulated points below it
        let view = session.on_criteria_changed(&criteria);
        let below = session.records().iter().filter(|r| r.ndvi < 0.3).count();
        assert_eq!(view.records.len(), session.records().len() - below);
    }

    #[test]
    fn test_criteria_changes_do_not_mutate_dataset() {
        let session = Session::from_records(three_records());
        let before = session.records().to_vec();

        let mut criteria = session.default_criteria();
        criteria.exact_match_only = true;
        let narrow = session.on_criteria_changed(&criteria);
        assert_eq!(narrow.records.len(), 2);

        criteria.exact_match_only = false;
        criteria.ndvi_min = 0.0;
        let wide = session.on_criteria_changed(&criteria);
        assert_eq!(wide.records.len(), 3);
        assert_eq!(session.records(), before.as_slice());
    }
}
