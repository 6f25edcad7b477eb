//! Data models for tariff records and configuration.

pub mod config;
pub mod record;

pub use config::ScheduleConfig;
pub use record::{RateTable, Regime, TariffRecord};
