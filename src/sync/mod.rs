//! @acp:module "Rules Sync"
//! @acp:summary "Regenerate an aggregate rules file from a directory of fragments"
//! @acp:domain cli
//! @acp:layer service
//!
//! Cursor keeps its rules as one file per topic under `.cursor/rules`, while
//! Windsurf reads a single `.windsurfrules` file. This module rebuilds the
//! latter from the former.
//!
//! ## Output format
//!
//! Plain text with no header. Each fragment's content appears in file name
//! order and is followed by exactly one `\n`, including the last one.

pub mod aggregate;
pub mod fragment;

pub use aggregate::{aggregate, AggregateReport, SEPARATOR};
pub use fragment::{list_fragments, normalize_newlines, RuleFragment};
