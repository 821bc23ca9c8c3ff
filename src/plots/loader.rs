use std::collections::HashSet;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::plots::defs::PlotSet;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("no plots found in {0}")]
    Empty(String),
    #[error("duplicate plot id: {0}")]
    DuplicateId(String),
}

pub fn load_manifest(path: &Path) -> Result<PlotSet, ManifestError> {
    let text = fs::read_to_string(path)?;
    let set: PlotSet = toml::from_str(&text)?;

    if set.plots.is_empty() {
        return Err(ManifestError::Empty(path.to_string_lossy().to_string()));
    }

    let mut seen = HashSet::new();
    for plot in &set.plots {
        if !seen.insert(plot.id.as_str()) {
            return Err(ManifestError::DuplicateId(plot.id.clone()));
        }
    }

    Ok(set)
}

/// The manifest at `path` when given, otherwise the built-in plot set.
pub fn resolve_plot_set(path: Option<&Path>) -> Result<PlotSet, ManifestError> {
    match path {
        Some(p) => load_manifest(p),
        None => Ok(PlotSet::builtin()),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/plots/loader.rs"]
mod tests;
