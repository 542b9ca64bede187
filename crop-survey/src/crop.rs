use crop_utils::error::ParseError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Crops that can be surveyed in the field or assigned by the classifier.
///
/// Variant order is the display order used by selection lists and charts.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Crop {
    Wheat,
    Rice,
    Maize,
    Soybean,
    Sugarcane,
}

impl Crop {
    pub const ALL: [Crop; 5] = [
        Crop::Wheat,
        Crop::Rice,
        Crop::Maize,
        Crop::Soybean,
        Crop::Sugarcane,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Crop::Wheat => "Wheat",
            Crop::Rice => "Rice",
            Crop::Maize => "Maize",
            Crop::Soybean => "Soybean",
            Crop::Sugarcane => "Sugarcane",
        }
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Crop {
    type Err = ParseError;

    /// Case-insensitive lookup by crop name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Crop::ALL
            .iter()
            .copied()
            .find(|crop| crop.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseError::new("crop", s))
    }
}
