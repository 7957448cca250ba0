//! cloudctl CLI
//!
//! Read-only command-line interface over a cloud platform inventory, with
//! table, JSON, YAML and text output and `--fields` projection.

pub mod client;
pub mod commands;
pub mod config;
pub mod display;
pub mod output;
