//! The sync pipeline: load, reconcile, write rules, render, write schemes

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::{reconcile, ReconcileSummary, RulesDocument};
use crate::rules::RuleSet;
use crate::scheme::render_color_schemes;

/// Files a run reads and writes
#[derive(Debug, Clone)]
pub struct SyncPaths {
    /// kwinrulesrc, read then overwritten (created if missing)
    pub kwinrulesrc: PathBuf,
    /// Color-scheme template, read only
    pub template: PathBuf,
    /// Existing directory receiving `titlebar-<name>.colors`
    pub color_scheme_dest: PathBuf,
}

/// Outcome of a successful run
#[derive(Debug)]
pub struct SyncReport {
    pub reconcile: ReconcileSummary,
    pub schemes_written: Vec<PathBuf>,
}

/// Run the whole pipeline
///
/// The rules file is written before any color scheme is rendered; a failure
/// later on leaves it updated.
pub fn run(paths: &SyncPaths, rules: &RuleSet) -> Result<SyncReport> {
    if rules.is_empty() {
        warn!("Rule set is empty, only renumbering existing rule sections");
    }

    let rules_contents = load_rules_file(&paths.kwinrulesrc)?;
    let template = load_template(&paths.template)?;

    let mut document = RulesDocument::parse(&rules_contents)
        .with_context(|| format!("Failed to parse rules file {}", paths.kwinrulesrc.display()))?;
    info!(
        path = %paths.kwinrulesrc.display(),
        sections = document.len(),
        "Loaded window rules"
    );

    let summary = reconcile(&mut document, rules);
    info!(
        rules = summary.rules_written,
        replaced = summary.rules_replaced,
        preserved = summary.sections_preserved,
        count = summary.total(),
        "Reconciled titlebar rules"
    );

    write_rules_file(&paths.kwinrulesrc, &document)?;

    let schemes = render_color_schemes(rules, &template)?;
    let schemes_written = write_color_schemes(&paths.color_scheme_dest, &schemes)?;
    info!(
        dest = %paths.color_scheme_dest.display(),
        count = schemes_written.len(),
        "Wrote color schemes"
    );

    Ok(SyncReport {
        reconcile: summary,
        schemes_written,
    })
}

/// Read kwinrulesrc; a missing file reads as an empty document
pub fn load_rules_file(path: &Path) -> Result<String> {
    if !path.exists() {
        info!(path = %path.display(), "Rules file not found, starting from an empty one");
        return Ok(String::new());
    }
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read rules file {}", path.display()))
}

pub fn load_template(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read color scheme template {}", path.display()))
}

/// Overwrite kwinrulesrc with the serialized document
pub fn write_rules_file(path: &Path, document: &RulesDocument) -> Result<()> {
    fs::write(path, document.to_ini_string())
        .with_context(|| format!("Failed to write rules file {}", path.display()))?;
    info!(path = %path.display(), "Saved window rules");
    Ok(())
}

/// Write each rendered scheme into `dest`, which must already exist
pub fn write_color_schemes(dest: &Path, schemes: &BTreeMap<String, String>) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(schemes.len());
    for (filename, contents) in schemes {
        let path = dest.join(filename);
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write color scheme {}", path.display()))?;
        debug!(path = %path.display(), "Wrote color scheme");
        written.push(path);
    }
    Ok(written)
}
