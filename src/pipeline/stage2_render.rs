use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::input::InputError;
use crate::input::dataset::read_dataset;
use crate::model::dataset::{Dataset, Marker, Range};
use crate::pipeline::stage1_load::PlotCtx;
use crate::plots::defs::{PlotDef, PlotSet};
use crate::render::chart::{ChartSize, Comparison, PlotError, render_comparison};

#[derive(Debug, Error)]
pub enum Stage2Error {
    #[error("input error: {0}")]
    Input(#[from] InputError),
    #[error("plot {id}: {source}")]
    Plot {
        id: String,
        #[source]
        source: PlotError,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderOutcome {
    pub id: String,
    pub title: String,
    pub input: PathBuf,
    pub output: PathBuf,
    pub n_points: usize,
    pub x_range: Option<Range>,
    pub marker: Option<Marker>,
}

/// Interpolated data and marker for one plot, without drawing anything.
#[derive(Debug, Clone)]
pub struct PreparedPlot {
    pub def: PlotDef,
    pub input: PathBuf,
    pub data: Dataset,
    pub marker: Option<Marker>,
}

pub fn prepare_plot(ctx: &PlotCtx, def: &PlotDef) -> Result<PreparedPlot, InputError> {
    let input = ctx.input_dir.join(&def.input);
    let data = read_dataset(&input)?;
    let marker = data.value_at_query(ctx.query);
    Ok(PreparedPlot {
        def: def.clone(),
        input,
        data,
        marker,
    })
}

pub fn run_stage2(
    ctx: &PlotCtx,
    plots: &PlotSet,
    out_dir: &Path,
    size: ChartSize,
) -> Result<Vec<RenderOutcome>, Stage2Error> {
    let mut outcomes = Vec::with_capacity(plots.plots.len());
    for def in &plots.plots {
        let prepared = prepare_plot(ctx, def)?;
        if prepared.marker.is_none() {
            warn!(
                plot = def.id.as_str(),
                query = ctx.query,
                "query outside interpolated range, no marker drawn"
            );
        }

        let output = out_dir.join(&def.output);
        let cmp = Comparison {
            title: &def.title,
            actual: &ctx.actual,
            interpolated: &prepared.data,
            marker: prepared.marker,
        };
        render_comparison(&cmp, &output, size).map_err(|source| Stage2Error::Plot {
            id: def.id.clone(),
            source,
        })?;
        info!(
            plot = def.id.as_str(),
            points = prepared.data.len(),
            output = %output.to_string_lossy(),
            "rendered plot"
        );

        outcomes.push(outcome_for(&prepared, output));
    }
    Ok(outcomes)
}

pub fn outcome_for(prepared: &PreparedPlot, output: PathBuf) -> RenderOutcome {
    RenderOutcome {
        id: prepared.def.id.clone(),
        title: prepared.def.title.clone(),
        input: prepared.input.clone(),
        output,
        n_points: prepared.data.len(),
        x_range: prepared.data.x_range(),
        marker: prepared.marker,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_render.rs"]
mod tests;
