//! Core library for the `geoweather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Weather and time sources behind async traits
//! - Display formatting, input validation and lookup history
//! - A single-instance map adapter
//! - The [`App`] controller that ties a lookup together
//!
//! It is used by `geoweather-cli`, but rendering goes through the [`View`]
//! trait so other front ends can reuse it.

pub mod app;
pub mod config;
pub mod error;
pub mod format;
pub mod history;
pub mod map;
pub mod model;
pub mod provider;
pub mod time;
pub mod validate;
pub mod view;

pub use app::{App, LookupOutcome};
pub use config::Config;
pub use error::{AppError, FetchError, MapError};
pub use history::{History, HistoryEntry, HistoryPanel};
pub use map::{MapAdapter, MapBackend, MapOptions, MapState};
pub use model::{Coordinate, WeatherReading};
pub use provider::{TimeSource, WeatherSource};
pub use time::TimeReading;
pub use view::{Region, Screen, View};
