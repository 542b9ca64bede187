//! The result of one criteria change.

use crate::aggregate::{aggregate, Aggregates};
use crate::criteria::FilterCriteria;
use crate::export::export_csv;
use crate::filter::filter;
use crate::models::HeatPoint;
use crop_survey::record::SurveyRecord;

/// Message shown in place of the charts when nothing matched.
pub const NO_DATA_MESSAGE: &str = "No data available for the selected filters.";

/// Filtered records plus the aggregates derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView {
    pub criteria: FilterCriteria,
    /// Matching records in dataset order.
    pub records: Vec<SurveyRecord>,
    pub aggregates: Aggregates,
}

impl FilteredView {
    /// Filter `records` with `criteria` and aggregate the result.
    pub fn build(records: &[SurveyRecord], criteria: &FilterCriteria) -> Self {
        let filtered = filter(records, criteria);
        let aggregates = aggregate(&filtered);
        Self {
            criteria: criteria.clone(),
            records: filtered,
            aggregates,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sidebar line reporting how many points survived the filters.
    pub fn status_line(&self) -> String {
        format!(
            "✅ Showing {} survey points after filters",
            self.records.len()
        )
    }

    /// Records for the data table, most recent survey first.
    ///
    /// Records surveyed on the same day keep their dataset order.
    pub fn table_rows(&self) -> Vec<&SurveyRecord> {
        let mut rows: Vec<&SurveyRecord> = self.records.iter().collect();
        rows.sort_by(|a, b| a.cmp_newest_first(b));
        rows
    }

    /// `(latitude, longitude, ndvi)` samples for heatmap weighting.
    pub fn heat_points(&self) -> Vec<HeatPoint> {
        self.records
            .iter()
            .map(|r| HeatPoint {
                latitude: r.latitude,
                longitude: r.longitude,
                weight: r.ndvi,
            })
            .collect()
    }

    /// CSV bytes for the download surface.
    pub fn export_csv(&self) -> anyhow::Result<Vec<u8>> {
        export_csv(&self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{three_records, ymd};

    fn view() -> FilteredView {
        let records = three_records();
        let mut criteria = FilterCriteria::defaults_for(&records);
        criteria.ndvi_min = 0.0;
        FilteredView::build(&records, &criteria)
    }

    #[test]
    fn test_build() {
        let view = view();
        assert!(!view.is_empty());
        assert_eq!(view.records.len(), 3);
        assert_eq!(view.aggregates.total_count, 3);
        assert_eq!(view.status_line(), "✅ Showing 3 survey points after filters");
    }

    #[test]
    fn test_table_rows_newest_first() {
        let view = view();
        let rows = view.table_rows();
        let ids: Vec<&str> = rows.iter().map(|r| r.field_id.as_str()).collect();
        assert_eq!(ids, vec!["F002", "F001", "F003"]);
        assert_eq!(rows[0].survey_date, ymd(2025, 3, 4));
        // Filter output itself keeps dataset order
        assert_eq!(view.records[0].field_id, "F001");
    }

    #[test]
    fn test_heat_points_weighted_by_ndvi() {
        let view = view();
        let heat = view.heat_points();
        assert_eq!(heat.len(), 3);
        assert_eq!(heat[1].weight, 0.6);
        assert_eq!(heat[1].latitude, view.records[1].latitude);
    }

    #[test]
    fn test_empty_view() {
        let records = three_records();
        let mut criteria = FilterCriteria::defaults_for(&records);
        criteria.ndvi_min = 0.8;
        let view = FilteredView::build(&records, &criteria);
        assert!(view.is_empty());
        assert!(view.heat_points().is_empty());
        assert!(view.table_rows().is_empty());
        assert_eq!(view.aggregates, Aggregates::default());
        assert_eq!(view.status_line(), "✅ Showing 0 survey points after filters");
    }
}
