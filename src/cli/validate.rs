use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::pipeline::stage1_load::run_stage1;
use crate::pipeline::stage2_render::{PreparedPlot, prepare_plot};
use crate::plots::loader::resolve_plot_set;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Directory holding the query and data files
    #[arg(long, default_value = ".")]
    input: PathBuf,

    /// Optional TOML plot manifest
    #[arg(long)]
    manifest: Option<PathBuf>,
}

pub fn handle(args: ValidateArgs) -> anyhow::Result<()> {
    let plots = resolve_plot_set(args.manifest.as_deref())?;

    let start = Instant::now();
    info!(stage = "stage1_load", "starting stage");
    let ctx = run_stage1(&args.input, &plots)?;
    info!(
        stage = "stage1_load",
        elapsed_ms = start.elapsed().as_millis(),
        "finished stage"
    );

    println!("plot_id\tn_points\tx_min\tx_max\tbracket\tmarker_y");
    for def in &plots.plots {
        let prepared = prepare_plot(&ctx, def)?;
        println!("{}", validate_row(&prepared));
    }
    Ok(())
}

fn validate_row(prepared: &PreparedPlot) -> String {
    let (x_min, x_max) = match prepared.data.x_range() {
        Some(r) => (r.min.to_string(), r.max.to_string()),
        None => (".".to_string(), ".".to_string()),
    };
    let (bracket, marker_y) = match prepared.marker {
        Some(m) => (m.interval.to_string(), m.y.to_string()),
        None => (".".to_string(), ".".to_string()),
    };
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        prepared.def.id,
        prepared.data.len(),
        x_min,
        x_max,
        bracket,
        marker_y
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/validate.rs"]
mod tests;
