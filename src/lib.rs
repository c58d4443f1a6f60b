//! # tokenhue
//!
//! Command line export of OKLCH color tokens. Reads a stylesheet, runs it
//! through [`tokencss::extract_palette`] and writes one pretty-printed JSON
//! file for the grouped tokens plus one per flat family.
//!
//! ```no_run
//! use tokenhue::config::ExportConfig;
//!
//! let report = tokenhue::export::run(&ExportConfig::default())?;
//! print!("{}", report);
//! # Ok::<(), tokenhue::error::ExportError>(())
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod log_init;

pub use config::{Cli, ExportConfig};
pub use error::{ExportError, Result};
pub use export::{ExportReport, run};
