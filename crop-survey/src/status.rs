use crop_utils::error::ParseError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Progress of a field survey.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum SurveyStatus {
    Planted,
    Harvested,
    #[serde(rename = "Field Visit Done")]
    FieldVisitDone,
    Pending,
}

impl SurveyStatus {
    pub const ALL: [SurveyStatus; 4] = [
        SurveyStatus::Planted,
        SurveyStatus::Harvested,
        SurveyStatus::FieldVisitDone,
        SurveyStatus::Pending,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SurveyStatus::Planted => "Planted",
            SurveyStatus::Harvested => "Harvested",
            SurveyStatus::FieldVisitDone => "Field Visit Done",
            SurveyStatus::Pending => "Pending",
        }
    }
}

impl fmt::Display for SurveyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for SurveyStatus {
    type Err = ParseError;

    /// Accepts the display name ("Field Visit Done") or a compact spelling
    /// without separators ("field-visit-done", "FieldVisitDone").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact = |v: &str| -> String {
            v.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .map(|c| c.to_ascii_lowercase())
                .collect()
        };
        let needle = compact(s);
        SurveyStatus::ALL
            .iter()
            .copied()
            .find(|status| compact(status.name()) == needle)
            .ok_or_else(|| ParseError::new("survey status", s))
    }
}
