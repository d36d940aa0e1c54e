pub mod app;
pub mod chat;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod event;
pub mod history;
pub mod ui;

pub use error::{CityRiskError, Result};
