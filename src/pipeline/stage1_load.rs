use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::input::InputError;
use crate::input::dataset::read_dataset;
use crate::input::query::read_query;
use crate::model::dataset::Dataset;
use crate::plots::defs::PlotSet;

#[derive(Debug, Error)]
pub enum Stage1Error {
    #[error("input error: {0}")]
    Input(#[from] InputError),
}

#[derive(Debug, Clone)]
pub struct PlotCtx {
    pub input_dir: PathBuf,
    pub query_path: PathBuf,
    pub actual_path: PathBuf,
    pub query: f64,
    pub actual: Dataset,
}

pub fn run_stage1(input_dir: &Path, plots: &PlotSet) -> Result<PlotCtx, Stage1Error> {
    let query_path = input_dir.join(&plots.query);
    let actual_path = input_dir.join(&plots.actual);

    let query = read_query(&query_path)?;
    let actual = read_dataset(&actual_path)?;
    if actual.is_empty() {
        warn!(
            actual = %actual_path.to_string_lossy(),
            "actual data file is empty, plots will show the interpolated curve only"
        );
    }
    debug!(query, actual_points = actual.len(), "loaded query and actual data");

    Ok(PlotCtx {
        input_dir: input_dir.to_path_buf(),
        query_path,
        actual_path,
        query,
        actual,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_load.rs"]
mod tests;
