//! parkade-sim library.
//!
//! Deterministic hour-by-hour simulation of parking lots: vehicles arrive
//! during the day, park for a drawn number of hours, pay on departure, and
//! are refused when the lot is full.
//!
//! # Conventions
//!
//! - **Errors**: Core operations are total. Configuration errors are
//!   [`ConfigError`]; driver entry points return `anyhow::Result`.
//! - **Logging**: Use `tracing` macros (`info!`, `debug!`, `trace!`).

pub mod campaign;
pub mod clock;
pub mod config;
pub mod cost;
pub mod engine;
pub mod error;
pub mod lot;
pub mod rng;
pub mod run;
pub mod stats;

pub use campaign::{CampaignReport, LotReport, replay_lot, run_campaign};
pub use config::{SimulationConfig, load_config};
pub use error::ConfigError;
pub use rng::RandomSource;
pub use run::{LotTrace, TracedHour, run_lot_simulation, run_lot_traced};
pub use stats::LotStatistics;
