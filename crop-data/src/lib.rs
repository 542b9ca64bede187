//! Filtering, aggregation and export of simulated crop survey points.
//!
//! This crate turns a session's survey records plus the user's current
//! [`FilterCriteria`] into a [`FilteredView`]: the matching records, the
//! summary statistics and chart aggregates derived from them, and the
//! payloads a map/table/chart front-end renders.
//!
//! # Architecture
//!
//! - [`filter`]: conjunction of crop, status, date, NDVI and exact-match predicates
//! - [`aggregate`]: counts, mean NDVI, per-crop and per-day groupings
//! - [`export`]: CSV serialization of the filtered records
//! - [`session`]: owned dataset with a single `on_criteria_changed` entry point
//! - [`dashboard`] and [`models`]: serializable payloads for the rendering layer
//!
//! Each stage is a pure function of its inputs; nothing mutates the records.
//!
//! # Usage
//!
//! ```rust
//! use crop_data::Session;
//! use crop_survey::generator::SimulationConfig;
//!
//! let session = Session::seeded(&SimulationConfig::default(), 42);
//!
//! let mut criteria = session.default_criteria();
//! criteria.exact_match_only = true;
//!
//! let view = session.on_criteria_changed(&criteria);
//! assert!(view.records.iter().all(|r| r.surveyed_crop == r.classified_crop));
//! assert_eq!(view.aggregates.match_count, view.aggregates.total_count);
//!
//! let csv = view.export_csv().unwrap();
//! assert!(csv.starts_with(b"Field_ID,Crop,Survey_Status"));
//! ```

pub mod aggregate;
pub mod criteria;
pub mod dashboard;
pub mod export;
pub mod filter;
pub mod models;
pub mod session;
pub mod view;

pub use aggregate::{aggregate, Aggregates, MatchLabel};
pub use criteria::FilterCriteria;
pub use export::export_csv;
pub use filter::filter;
pub use session::Session;
pub use view::FilteredView;
