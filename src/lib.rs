#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;

pub mod config;
pub mod error;
pub mod export_data;
pub mod import_data;
pub mod logs;
pub mod summary;
pub mod track;
pub mod track_metrics;
pub mod track_simplifier;
pub mod utils;
