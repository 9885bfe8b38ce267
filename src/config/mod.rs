// src/config/mod.rs

//! Configuration loading and validation for statusrun.
//!
//! Responsibilities:
//! - Define the optional TOML defaults file and the run request types
//!   (`model.rs`).
//! - Load the file from disk and merge it with CLI input (`loader.rs`).
//! - Validate required fields before anything touches the network
//!   (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_from_path, merge_sources, resolve_run_request};
pub use model::{
    ConfigFile, DEFAULT_API_URL, RawRunRequest, RunRequest, SinkSection, StatusSection,
    default_user_agent,
};
