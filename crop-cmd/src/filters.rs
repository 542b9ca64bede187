//! Command-line options shared by the subcommands.

use chrono::NaiveDate;
use clap::Args;
use crop_data::criteria::{DEFAULT_NDVI_MAX, DEFAULT_NDVI_MIN};
use crop_data::{FilterCriteria, Session};
use crop_survey::crop::Crop;
use crop_survey::generator::{SimulationConfig, RECORD_COUNT};
use crop_survey::status::SurveyStatus;
use crop_utils::dates::parse_date;

/// How the session dataset is simulated.
#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    /// Number of survey points to simulate
    #[arg(long, default_value_t = RECORD_COUNT)]
    pub count: usize,

    /// Seed for a reproducible dataset (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SessionArgs {
    pub fn session(&self) -> Session {
        let config = SimulationConfig {
            count: self.count,
            ..SimulationConfig::default()
        };
        match self.seed {
            Some(seed) => {
                log::info!("Simulating {} survey points with seed {}", self.count, seed);
                Session::seeded(&config, seed)
            }
            None => {
                log::info!("Simulating {} survey points", self.count);
                Session::new(&config)
            }
        }
    }
}

/// Filter selection. Options left out keep the session defaults.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Surveyed crop to include (repeatable; all crops if omitted)
    #[arg(long = "crop")]
    pub crops: Vec<Crop>,

    /// Survey status to include (repeatable; all statuses if omitted)
    #[arg(long = "status")]
    pub statuses: Vec<SurveyStatus>,

    /// First survey date to include, YYYY-MM-DD (earliest in dataset if omitted)
    #[arg(long, value_parser = parse_date)]
    pub start_date: Option<NaiveDate>,

    /// Last survey date to include, YYYY-MM-DD (latest in dataset if omitted)
    #[arg(long, value_parser = parse_date)]
    pub end_date: Option<NaiveDate>,

    /// Minimum NDVI
    #[arg(long, default_value_t = DEFAULT_NDVI_MIN)]
    pub ndvi_min: f64,

    /// Maximum NDVI
    #[arg(long, default_value_t = DEFAULT_NDVI_MAX)]
    pub ndvi_max: f64,

    /// Show only points where the classified crop matches the surveyed crop
    #[arg(long)]
    pub exact_match: bool,
}

impl FilterArgs {
    /// Overlay these options on the session's default criteria.
    pub fn criteria(&self, session: &Session) -> FilterCriteria {
        let mut criteria = session.default_criteria();
        if !self.crops.is_empty() {
            criteria.crops = self.crops.iter().copied().collect();
        }
        if !self.statuses.is_empty() {
            criteria.statuses = self.statuses.iter().copied().collect();
        }
        if let Some(start) = self.start_date {
            criteria.start_date = start;
        }
        if let Some(end) = self.end_date {
            criteria.end_date = end;
        }
        criteria.ndvi_min = self.ndvi_min;
        criteria.ndvi_max = self.ndvi_max;
        criteria.exact_match_only = self.exact_match;
        if criteria.ndvi_min > criteria.ndvi_max || criteria.start_date > criteria.end_date {
            log::warn!("Filter ranges are inverted; no survey points will match");
        }
        criteria
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        filters: FilterArgs,
    }

    fn parse(args: &[&str]) -> FilterArgs {
        let argv = std::iter::once("crop-cli").chain(args.iter().copied());
        TestCli::try_parse_from(argv).unwrap().filters
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["--seed", "4"]);
        let session = args.session.session();
        assert_eq!(session.records().len(), RECORD_COUNT);
        assert_eq!(args.criteria(&session), session.default_criteria());
    }

    #[test]
    fn test_overrides() {
        let args = parse(&[
            "--seed",
            "4",
            "--count",
            "25",
            "--crop",
            "wheat",
            "--crop",
            "Rice",
            "--status",
            "field-visit-done",
            "--start-date",
            "2025-02-01",
            "--end-date",
            "2025-05-31",
            "--ndvi-min",
            "0.45",
            "--exact-match",
        ]);
        let session = args.session.session();
        assert_eq!(session.records().len(), 25);

        let criteria = args.criteria(&session);
        assert_eq!(criteria.crops.len(), 2);
        assert!(criteria.crops.contains(&Crop::Wheat));
        assert!(criteria.crops.contains(&Crop::Rice));
        assert_eq!(criteria.statuses.len(), 1);
        assert!(criteria.statuses.contains(&SurveyStatus::FieldVisitDone));
        assert_eq!(
            criteria.start_date,
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
        );
        assert_eq!(
            criteria.end_date,
            NaiveDate::from_ymd_opt(2025, 5, 31).unwrap()
        );
        assert_eq!(criteria.ndvi_min, 0.45);
        assert_eq!(criteria.ndvi_max, DEFAULT_NDVI_MAX);
        assert!(criteria.exact_match_only);
    }

    #[test]
    fn test_rejects_unknown_values() {
        let argv = ["crop-cli", "--crop", "Barley"];
        assert!(TestCli::try_parse_from(argv).is_err());
        let argv = ["crop-cli", "--start-date", "03/01/2025"];
        assert!(TestCli::try_parse_from(argv).is_err());
    }
}
