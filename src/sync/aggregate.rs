//! @acp:module "Aggregator"
//! @acp:summary "Concatenate rule fragments into a single output file"
//! @acp:domain cli
//! @acp:layer service

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, RulesError};
use super::fragment::{list_fragments, RuleFragment};

/// Written after every fragment, including the last
pub const SEPARATOR: &str = "\n";

/// Outcome of a successful aggregation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateReport {
    pub output_path: PathBuf,
    /// Fragment file names in the order they were written
    pub fragments: Vec<String>,
    pub bytes_written: u64,
}

/// Overwrite `output_file` with every file in `rules_dir`, in name order,
/// each followed by a newline.
///
/// Nothing is written when `rules_dir` is missing. A failure after the
/// output has been opened leaves it truncated or partly written.
pub fn aggregate(rules_dir: &Path, output_file: &Path) -> Result<AggregateReport> {
    if !rules_dir.is_dir() {
        return Err(RulesError::RulesDirNotFound {
            path: rules_dir.to_path_buf(),
        });
    }

    let sources = list_fragments(rules_dir)?;
    tracing::debug!(
        "Found {} fragment(s) in {}",
        sources.len(),
        rules_dir.display()
    );

    let file = File::create(output_file).map_err(|e| RulesError::io(output_file, e))?;
    let mut writer = BufWriter::new(file);
    let mut fragments = Vec::with_capacity(sources.len());
    let mut bytes_written = 0u64;

    for source in &sources {
        let fragment = RuleFragment::read(source)?;

        writer
            .write_all(fragment.content.as_bytes())
            .and_then(|_| writer.write_all(SEPARATOR.as_bytes()))
            .map_err(|e| RulesError::io(output_file, e))?;

        bytes_written += (fragment.content.len() + SEPARATOR.len()) as u64;
        tracing::debug!("Appended {} ({} bytes)", fragment.name, fragment.content.len());
        fragments.push(fragment.name);
    }

    writer.flush().map_err(|e| RulesError::io(output_file, e))?;

    tracing::info!(
        "Wrote {} fragment(s), {} bytes to {}",
        fragments.len(),
        bytes_written,
        output_file.display()
    );

    Ok(AggregateReport {
        output_path: output_file.to_path_buf(),
        fragments,
        bytes_written,
    })
}
