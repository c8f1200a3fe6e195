//! Guard duty rostering engine.
//!
//! Builds a multi-week roster of one day shift and two night shifts per
//! day for a pool of guards with preferred and forbidden weekdays, then
//! improves it.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Guard`, `WeekdaySet`, `Quotas`, `Slot`, `Schedule`
//! - **`validation`**: Input checks (empty pool, id order, horizon) and roster legality
//! - **`scoring`**: Preference, coverage and fairness objectives; `Evaluator`
//! - **`construction`**: Difficulty ordering and the quota-driven `GreedyConstructor`
//! - **`search`**: Lexicographic swap `LocalSearch` and night-fairness repair
//! - **`pipeline`**: `RosterPipeline` running every stage end to end
//! - **`report`**: Before/after `RosterReport`
//! - **`config`**, **`io`**: Run parameters and guard/roster files
//!
//! # Example
//!
//! ```
//! use u_roster::io::parse_guards;
//! use u_roster::{RosterConfig, RosterPipeline, RosterReport};
//!
//! let guards = parse_guards("1 2\n3 E7\n4\n5 E1\n6\n-\n").unwrap();
//! let config = RosterConfig::new().with_days(14).with_max_iter(500);
//!
//! let outcome = RosterPipeline::new(&guards, config).run().unwrap();
//! let report = RosterReport::from_outcome(&outcome, guards.len());
//! assert!(report.to_string().contains("Time taken"));
//! ```
//!
//! # References
//!
//! - Burke et al. (2004), "The State of the Art of Nurse Rostering"
//! - Ernst et al. (2004), "Staff scheduling and rostering: A review of
//!   applications, methods and models"

pub mod config;
pub mod construction;
pub mod error;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod scoring;
pub mod search;
pub mod validation;

pub use config::{ConfigError, RosterConfig};
pub use error::RosterError;
pub use pipeline::{RosterOutcome, RosterPipeline};
pub use report::RosterReport;
