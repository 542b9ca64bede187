//! The complete page payload for one filtered view.
//!
//! A [`Dashboard`] bundles everything the rendering layer draws: the status
//! line, the map, the data table, the four metric cards and either the four
//! charts or the no-data notice.

use crate::aggregate::Aggregates;
use crate::models::{
    CategoryCount, Chart, ChartSet, CropNdvi, DateCount, MapLayer, MapView, Metric, SurveyPoint,
};
use crate::view::{FilteredView, NO_DATA_MESSAGE};
use crop_utils::dates::format_date;
use serde::Serialize;

/// Map center over the simulation area, `[latitude, longitude]`.
pub const MAP_CENTER: [f64; 2] = [21.5, 76.0];
pub const MAP_ZOOM: u8 = 6;

pub const POINTS_LAYER_NAME: &str = "Survey Points";
pub const HEATMAP_LAYER_NAME: &str = "NDVI Heatmap";

pub const CROP_DISTRIBUTION_TITLE: &str = "Survey Crop Distribution";
pub const MATCH_COUNT_TITLE: &str = "Survey vs Classified Crop Match Count";
pub const NDVI_BY_CROP_TITLE: &str = "NDVI Distribution per Crop";
pub const TIMELINE_TITLE: &str = "Survey Points Over Time";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Dashboard {
    pub status_line: String,
    pub map: MapView,
    /// Most recent survey first.
    pub table: Vec<SurveyPoint>,
    pub metrics: Vec<Metric>,
    /// `None` when nothing matched; `notice` explains why.
    pub charts: Option<ChartSet>,
    pub notice: Option<String>,
}

impl Dashboard {
    pub fn from_view(view: &FilteredView) -> Self {
        let (charts, notice) = if view.is_empty() {
            (None, Some(NO_DATA_MESSAGE.to_string()))
        } else {
            (Some(chart_set(&view.aggregates)), None)
        };
        Self {
            status_line: view.status_line(),
            map: map_view(view),
            table: view
                .table_rows()
                .into_iter()
                .map(SurveyPoint::from)
                .collect(),
            metrics: metrics(&view.aggregates),
            charts,
            notice,
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn map_view(view: &FilteredView) -> MapView {
    let layers = if view.is_empty() {
        Vec::new()
    } else {
        vec![
            MapLayer::Points {
                name: POINTS_LAYER_NAME.to_string(),
                radius: 5,
                fill_color: "green".to_string(),
                clustered: true,
                points: view.records.iter().map(SurveyPoint::from).collect(),
            },
            MapLayer::Heatmap {
                name: HEATMAP_LAYER_NAME.to_string(),
                radius: 20,
                blur: 25,
                points: view.heat_points(),
            },
        ]
    };
    MapView {
        center: MAP_CENTER,
        zoom: MAP_ZOOM,
        layers,
    }
}

fn metrics(aggregates: &Aggregates) -> Vec<Metric> {
    [
        ("Total Survey Points", aggregates.total_count as f64),
        ("Unique Fields", aggregates.unique_field_count as f64),
        ("Matching Crop Points", aggregates.match_count as f64),
        ("Average NDVI", aggregates.mean_ndvi),
    ]
    .into_iter()
    .map(|(label, value)| Metric {
        label: label.to_string(),
        value,
    })
    .collect()
}

fn chart_set(aggregates: &Aggregates) -> ChartSet {
    ChartSet {
        crop_distribution: Chart {
            title: CROP_DISTRIBUTION_TITLE.to_string(),
            data: aggregates
                .crop_distribution
                .iter()
                .map(|(crop, count)| CategoryCount {
                    category: crop.to_string(),
                    count: *count,
                })
                .collect(),
        },
        match_counts: Chart {
            title: MATCH_COUNT_TITLE.to_string(),
            data: aggregates
                .match_distribution
                .iter()
                .map(|(label, count)| CategoryCount {
                    category: label.to_string(),
                    count: *count,
                })
                .collect(),
        },
        ndvi_by_crop: Chart {
            title: NDVI_BY_CROP_TITLE.to_string(),
            data: aggregates
                .ndvi_by_crop
                .iter()
                .map(|(crop, values)| CropNdvi {
                    crop: crop.to_string(),
                    values: values.clone(),
                })
                .collect(),
        },
        timeline: Chart {
            title: TIMELINE_TITLE.to_string(),
            data: aggregates
                .timeline()
                .into_iter()
                .map(|(date, count)| DateCount {
                    date: format_date(&date),
                    count,
                })
                .collect(),
        },
    }
}
