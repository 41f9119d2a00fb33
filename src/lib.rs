#![forbid(unsafe_code)]

//! @acp:module "windsurfrules Library"
//! @acp:summary "Rebuild .windsurfrules from the fragments in .cursor/rules"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # windsurfrules
//!
//! Concatenates every file in a rules directory into one aggregate file.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! fn main() -> windsurfrules::Result<()> {
//!     let report = windsurfrules::aggregate(
//!         Path::new(".cursor/rules"),
//!         Path::new(".windsurfrules"),
//!     )?;
//!     println!("{} fragments", report.fragments.len());
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod sync;

// Re-exports
pub use config::Config;
pub use error::{Result, RulesError};
pub use sync::{aggregate, AggregateReport, RuleFragment};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
