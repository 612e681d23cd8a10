//! Ranking core for the SomaLux library admin dashboards.

pub mod config;
pub mod error;
pub mod rankings;
pub mod telemetry;
