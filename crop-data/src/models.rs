//! Payload structs for the map, table, metric and chart renderers.
//!
//! All structs derive `Serialize` so they can be handed to a front-end as JSON.

use crop_survey::record::SurveyRecord;
use crop_utils::dates::format_date;
use serde::Serialize;

/// A survey point as shown in the data table and in map popups.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SurveyPoint {
    pub field_id: String,
    pub crop: String,
    pub classified_crop: String,
    pub survey_status: String,
    /// `YYYY-MM-DD`
    pub survey_date: String,
    pub latitude: f64,
    pub longitude: f64,
    pub ndvi: f64,
    pub farmer_name: String,
}

impl From<&SurveyRecord> for SurveyPoint {
    fn from(record: &SurveyRecord) -> Self {
        Self {
            field_id: record.field_id.clone(),
            crop: record.surveyed_crop.to_string(),
            classified_crop: record.classified_crop.to_string(),
            survey_status: record.survey_status.to_string(),
            survey_date: format_date(&record.survey_date),
            latitude: record.latitude,
            longitude: record.longitude,
            ndvi: record.ndvi,
            farmer_name: record.farmer_name.clone(),
        }
    }
}

/// A heatmap sample weighted by NDVI.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct HeatPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub weight: f64,
}

/// A layer drawn on the survey map.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MapLayer {
    /// Clustered circle markers with popups.
    Points {
        name: String,
        radius: u32,
        fill_color: String,
        clustered: bool,
        points: Vec<SurveyPoint>,
    },
    Heatmap {
        name: String,
        radius: u32,
        blur: u32,
        points: Vec<HeatPoint>,
    },
}

/// Map viewport and layers. `layers` is empty when nothing matched.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MapView {
    /// `[latitude, longitude]`
    pub center: [f64; 2],
    pub zoom: u8,
    pub layers: Vec<MapLayer>,
}

/// A labelled scalar shown as a metric card.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Metric {
    pub label: String,
    pub value: f64,
}

/// A (category, count) pair for pie and bar charts.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// The NDVI samples of one crop, for a box plot.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CropNdvi {
    pub crop: String,
    pub values: Vec<f64>,
}

/// A (date, count) pair for the survey timeline.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DateCount {
    pub date: String,
    pub count: usize,
}

/// A titled chart series.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Chart<T> {
    pub title: String,
    pub data: Vec<T>,
}

/// The four validation charts.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartSet {
    pub crop_distribution: Chart<CategoryCount>,
    pub match_counts: Chart<CategoryCount>,
    pub ndvi_by_crop: Chart<CropNdvi>,
    pub timeline: Chart<DateCount>,
}
