//! @acp:module "Generate Command"
//! @acp:summary "Regenerate the aggregate rules file"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::sync::{aggregate, AggregateReport};

/// Options for the generate command
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Project root that relative paths resolve against
    pub root: PathBuf,
    /// Config file, defaults to `<root>/.windsurfrules.config.json`
    pub config: Option<PathBuf>,
    /// Overrides the configured rules directory
    pub rules_dir: Option<PathBuf>,
    /// Overrides the configured output file
    pub output: Option<PathBuf>,
    /// List each fragment after the confirmation line
    pub verbose: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            config: None,
            rules_dir: None,
            output: None,
            verbose: false,
        }
    }
}

impl GenerateOptions {
    /// Merge CLI overrides on top of the config file
    pub fn resolve_config(&self) -> crate::Result<Config> {
        let config_path = self
            .config
            .clone()
            .unwrap_or_else(|| self.root.join(DEFAULT_CONFIG_FILE));
        let mut config = Config::load_or_default(&config_path)?;

        if let Some(rules_dir) = &self.rules_dir {
            config.rules_dir = rules_dir.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        Ok(config)
    }
}

/// Execute the generate command
pub fn execute_generate(options: GenerateOptions) -> Result<AggregateReport> {
    let config = options.resolve_config()?;
    let rules_dir = config.rules_path(&options.root);
    let output = config.output_path(&options.root);

    tracing::debug!(
        "Aggregating {} into {}",
        rules_dir.display(),
        output.display()
    );

    let report = aggregate(&rules_dir, &output)?;

    let name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| output.display().to_string());
    println!("{} generated at {}", name, style(output.display()).green());

    if options.verbose {
        for fragment in &report.fragments {
            println!("  {} {}", style("+").cyan(), fragment);
        }
    }

    Ok(report)
}
