//! CSV export of filtered survey points.
//!
//! # CSV Format
//!
//! Header row, then one row per record, no index column:
//!
//! ```text
//! Field_ID,Crop,Survey_Status,Survey_Date,Latitude,Longitude,NDVI,Classified_Crop,Farmer_Name
//! F001,Wheat,Field Visit Done,2025-03-14,21.37,75.92,0.64,Rice,Farmer_1
//! ```

use crop_survey::{crop::Crop, record::SurveyRecord, status::SurveyStatus};
use crop_utils::dates::format_date;
use serde::{Deserialize, Serialize};

/// File name offered by the download surface.
pub const EXPORT_FILE_NAME: &str = "crop_survey_validation.csv";

/// MIME type of the exported bytes.
pub const EXPORT_MIME_TYPE: &str = "text/csv";

/// Column names, in output order.
pub const EXPORT_HEADERS: [&str; 9] = [
    "Field_ID",
    "Crop",
    "Survey_Status",
    "Survey_Date",
    "Latitude",
    "Longitude",
    "NDVI",
    "Classified_Crop",
    "Farmer_Name",
];

/// One exported CSV row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    #[serde(rename = "Field_ID")]
    pub field_id: String,
    #[serde(rename = "Crop")]
    pub crop: Crop,
    #[serde(rename = "Survey_Status")]
    pub survey_status: SurveyStatus,
    /// `YYYY-MM-DD`
    #[serde(rename = "Survey_Date")]
    pub survey_date: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "NDVI")]
    pub ndvi: f64,
    #[serde(rename = "Classified_Crop")]
    pub classified_crop: Crop,
    #[serde(rename = "Farmer_Name")]
    pub farmer_name: String,
}

impl From<&SurveyRecord> for ExportRow {
    fn from(record: &SurveyRecord) -> Self {
        Self {
            field_id: record.field_id.clone(),
            crop: record.surveyed_crop,
            survey_status: record.survey_status,
            survey_date: format_date(&record.survey_date),
            latitude: record.latitude,
            longitude: record.longitude,
            ndvi: record.ndvi,
            classified_crop: record.classified_crop,
            farmer_name: record.farmer_name.clone(),
        }
    }
}

/// Serialize `records` to CSV bytes in the order given.
///
/// The header row is always written, so an empty selection exports a
/// header-only file. Any failure aborts the whole export.
pub fn export_csv(records: &[SurveyRecord]) -> anyhow::Result<Vec<u8>> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    wtr.write_record(EXPORT_HEADERS)?;
    for record in records {
        wtr.serialize(ExportRow::from(record))?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    log::info!(
        "export: Serialized {} survey points ({} bytes)",
        records.len(),
        bytes.len()
    );
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{record, three_records, ymd};
    use crop_survey::generator::{generate_seeded, SimulationConfig};
    use crop_utils::dates::parse_date;

    fn parse_rows(bytes: &[u8]) -> Vec<ExportRow> {
        csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(bytes)
            .deserialize()
            .collect::<Result<Vec<ExportRow>, _>>()
            .unwrap()
    }

    #[test]
    fn test_header_only_for_empty_selection() {
        let bytes = export_csv(&[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "Field_ID,Crop,Survey_Status,Survey_Date,Latitude,Longitude,NDVI,Classified_Crop,Farmer_Name\n"
        );
    }

    #[test]
    fn test_row_layout() {
        let records = vec![record(
            1,
            Crop::Rice,
            Crop::Maize,
            SurveyStatus::FieldVisitDone,
            ymd(2025, 3, 4),
            0.6,
        )];
        let text = String::from_utf8(export_csv(&records).unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "F001,Rice,Field Visit Done,2025-03-04,20.75,75.625,0.6,Maize,Farmer_1"
        );
    }

    #[test]
    fn test_fields_with_delimiter_are_quoted() {
        let mut records = three_records();
        records[0].farmer_name = "Patil, R.".to_string();
        let text = String::from_utf8(export_csv(&records).unwrap()).unwrap();
        assert!(text.contains("\"Patil, R.\""));
        let rows = parse_rows(text.as_bytes());
        assert_eq!(rows[0].farmer_name, "Patil, R.");
    }

    #[test]
    fn test_round_trip_preserves_values_and_order() {
        let records = generate_seeded(&SimulationConfig::default(), 3);
        let bytes = export_csv(&records).unwrap();
        let rows = parse_rows(&bytes);
        assert_eq!(rows.len(), records.len());
        for (row, record) in rows.iter().zip(&records) {
            assert_eq!(row, &ExportRow::from(record));
            assert_eq!(parse_date(&row.survey_date).unwrap(), record.survey_date);
        }
    }

    #[test]
    fn test_export_is_deterministic() {
        let records = three_records();
        assert_eq!(export_csv(&records).unwrap(), export_csv(&records).unwrap());
    }
}
