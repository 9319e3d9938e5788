// piispan/src/lib.rs
//! # piispan CLI
//!
//! Command-line front end for `piispan-core`: batch extraction from JSONL
//! classifier predictions and single-span inspection.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
