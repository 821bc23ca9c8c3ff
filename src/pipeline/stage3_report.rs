use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::pipeline::stage1_load::PlotCtx;
use crate::pipeline::stage2_render::RenderOutcome;
use crate::report::json::write_summary;
use crate::report::text::render_report;

#[derive(Debug, Error)]
pub enum Stage3Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct FinalSummary {
    pub tool: ToolSummary,
    pub input: InputSummary,
    pub plots: Vec<RenderOutcome>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolSummary {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputSummary {
    pub query_file: String,
    pub actual_file: String,
    pub query: f64,
    pub actual_points: usize,
}

pub fn build_summary(ctx: &PlotCtx, outcomes: &[RenderOutcome]) -> FinalSummary {
    FinalSummary {
        tool: ToolSummary {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        input: InputSummary {
            query_file: ctx.query_path.to_string_lossy().to_string(),
            actual_file: ctx.actual_path.to_string_lossy().to_string(),
            query: ctx.query,
            actual_points: ctx.actual.len(),
        },
        plots: outcomes.to_vec(),
    }
}

pub fn run_stage3_report(
    ctx: &PlotCtx,
    outcomes: &[RenderOutcome],
    out_dir: &Path,
) -> Result<FinalSummary, Stage3Error> {
    let summary = build_summary(ctx, outcomes);
    write_summary(out_dir, &summary)?;
    std::fs::write(out_dir.join("summary.txt"), render_report(&summary))?;
    Ok(summary)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_report.rs"]
mod tests;
