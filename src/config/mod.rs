// src/config/mod.rs

//! Configuration loading and validation for ecs-exec-pf.
//!
//! Responsibilities:
//! - Define the TOML-backed defaults file and the validated options (`model.rs`).
//! - Load the optional defaults file from disk (`loader.rs`).
//! - Merge CLI flags over file defaults and enforce required inputs (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{config_path_from_env, load_from_path, load_optional};
pub use model::{ConfigFile, DEFAULT_AWS_CLI, DefaultsSection, SessionOptions};
pub use validate::build_session_options;
