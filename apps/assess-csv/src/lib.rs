//! assess-csv core library.
//!
//! This crate exposes the pipeline that turns a JSON assessment report into
//! a CSV of the incidents applying to one deployment target.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Config file discovery and effective settings resolution.
//! - `report`: Report loading, structural validation, target enumeration.
//! - `project`: Target filtering and row projection.
//! - `export`: CSV serialization and output sinks.
//! - `convert`: The end-to-end export pipeline.
//! - `models`: Report schema, rule index, and CSV row structs.
//! - `output`: Console printers for target lists and summaries.
//! - `error`: Error type and exit codes.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod export;
pub mod models;
pub mod output;
pub mod project;
pub mod report;
pub mod utils;
