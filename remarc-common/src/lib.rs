//! # Remarc Common Library
//!
//! Shared code for the Remarc content services including:
//! - Error types
//! - Configuration loading and root folder resolution
//! - Environment lookup capability
//! - Logging initialisation
//! - Database initialisation for the content collections

pub mod config;
pub mod db;
pub mod env;
pub mod error;
pub mod logging;

pub use env::{EnvLookup, MapEnv, SystemEnv};
pub use error::{Error, Result};
