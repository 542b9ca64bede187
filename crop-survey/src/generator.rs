//! Synthetic ground-truth survey points.
//!
//! Every field of a record is sampled independently and uniformly. In
//! particular the classified crop does not depend on the surveyed crop, so
//! agreement between the two is pure chance (about one in five).

use crate::{crop::Crop, record::SurveyRecord, status::SurveyStatus};
use chrono::NaiveDate;
use crop_utils::numeric::round2;
use log::{info, warn};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Number of survey points in a session dataset.
pub const RECORD_COUNT: usize = 200;

/// Calendar year every simulated survey falls in.
pub const SIMULATION_YEAR: i32 = 2025;

/// Parameters for the simulated dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub count: usize,
    pub year: i32,
    /// Survey months are drawn from 1 through `max_month`.
    pub max_month: u32,
    /// Survey days are drawn from 1 through `max_day`.
    pub max_day: u32,
    pub latitude: (f64, f64),
    pub longitude: (f64, f64),
    /// Sampling range for NDVI. Narrower than the [0, 1] range filters accept.
    pub ndvi: (f64, f64),
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            count: RECORD_COUNT,
            year: SIMULATION_YEAR,
            max_month: 8,
            max_day: 28,
            latitude: (20.0, 23.0),
            longitude: (75.0, 77.0),
            ndvi: (0.2, 0.9),
        }
    }
}

fn pick<T: Copy>(rng: &mut impl Rng, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}

/// Sample the record with 1-based position `index`.
fn sample_record(config: &SimulationConfig, index: usize, rng: &mut impl Rng) -> Option<SurveyRecord> {
    let surveyed_crop = pick(rng, &Crop::ALL);
    let survey_status = pick(rng, &SurveyStatus::ALL);
    let month = rng.gen_range(1..=config.max_month);
    let day = rng.gen_range(1..=config.max_day);
    let survey_date = NaiveDate::from_ymd_opt(config.year, month, day)?;
    let latitude = rng.gen_range(config.latitude.0..=config.latitude.1);
    let longitude = rng.gen_range(config.longitude.0..=config.longitude.1);
    let ndvi = round2(rng.gen_range(config.ndvi.0..=config.ndvi.1));
    let classified_crop = pick(rng, &Crop::ALL);

    Some(SurveyRecord {
        field_id: SurveyRecord::field_id_for(index),
        surveyed_crop,
        survey_status,
        survey_date,
        latitude,
        longitude,
        ndvi,
        classified_crop,
        farmer_name: SurveyRecord::farmer_name_for(index),
    })
}

/// Generate `config.count` survey records from the given random source.
///
/// A sample whose date does not exist in `config.year` is skipped with a
/// warning; with the default month/day bounds this never happens.
pub fn generate_with<R: Rng>(config: &SimulationConfig, rng: &mut R) -> Vec<SurveyRecord> {
    let mut records = Vec::with_capacity(config.count);
    for index in 1..=config.count {
        match sample_record(config, index, rng) {
            Some(record) => records.push(record),
            None => warn!(
                "Skipping survey point {}: no valid date in year {}",
                SurveyRecord::field_id_for(index),
                config.year
            ),
        }
    }
    info!(
        "Generated {} survey points for {}",
        records.len(),
        config.year
    );
    records
}

/// Generate a dataset from an unseeded source. Every call differs.
pub fn generate(config: &SimulationConfig) -> Vec<SurveyRecord> {
    generate_with(config, &mut rand::thread_rng())
}

/// Generate a reproducible dataset from `seed`.
pub fn generate_seeded(config: &SimulationConfig, seed: u64) -> Vec<SurveyRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_with(config, &mut rng)
}
