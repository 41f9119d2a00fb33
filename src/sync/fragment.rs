//! @acp:module "Rule Fragments"
//! @acp:summary "Discovery and decoding of rule fragment files"
//! @acp:domain cli
//! @acp:layer service

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, RulesError};

/// One input file of the rules directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFragment {
    pub name: String,
    pub content: String,
}

impl RuleFragment {
    /// Read a fragment as UTF-8 text with newlines normalized to `\n`
    pub fn read(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| RulesError::io(path, e))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            name,
            content: normalize_newlines(&raw).into_owned(),
        })
    }
}

/// List the regular files directly under `rules_dir`, sorted by file name.
///
/// Symlinks are followed to decide whether they point at a file. Dangling
/// links and links to directories are skipped.
pub fn list_fragments(rules_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(rules_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let is_file = if entry.path_is_symlink() {
            std::fs::metadata(entry.path())
                .map(|m| m.is_file())
                .unwrap_or(false)
        } else {
            entry.file_type().is_file()
        };

        if is_file {
            files.push(entry.into_path());
        } else {
            tracing::debug!("Skipping non-file entry {}", entry.path().display());
        }
    }

    Ok(files)
}

/// Translate `\r\n` and lone `\r` line endings to `\n`
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}
