use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::pipeline::stage1_load::run_stage1;
use crate::pipeline::stage2_render::run_stage2;
use crate::pipeline::stage3_report::run_stage3_report;
use crate::plots::loader::resolve_plot_set;
use crate::render::chart::ChartSize;

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Directory holding the query and data files
    #[arg(long, default_value = ".")]
    pub(crate) input: PathBuf,

    /// Output directory for images and reports
    #[arg(long, default_value = ".")]
    pub(crate) out: PathBuf,

    /// Optional TOML plot manifest (defaults to the built-in plot set)
    #[arg(long)]
    pub(crate) manifest: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long, default_value_t = ChartSize::default().width)]
    pub(crate) width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = ChartSize::default().height)]
    pub(crate) height: u32,

    /// Skip summary.json / summary.txt
    #[arg(long)]
    pub(crate) no_report: bool,
}

pub fn handle(args: RenderArgs) -> anyhow::Result<()> {
    let plots = resolve_plot_set(args.manifest.as_deref())?;
    std::fs::create_dir_all(&args.out)?;

    let start = Instant::now();
    info!(stage = "stage1_load", "starting stage");
    let ctx = run_stage1(&args.input, &plots)?;
    info!(
        stage = "stage1_load",
        elapsed_ms = start.elapsed().as_millis(),
        query = ctx.query,
        actual_points = ctx.actual.len(),
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "stage2_render", "starting stage");
    let size = ChartSize {
        width: args.width,
        height: args.height,
    };
    let outcomes = run_stage2(&ctx, &plots, &args.out, size)?;
    info!(
        stage = "stage2_render",
        elapsed_ms = start.elapsed().as_millis(),
        plots = outcomes.len(),
        markers = outcomes.iter().filter(|o| o.marker.is_some()).count(),
        "finished stage"
    );

    if args.no_report {
        return Ok(());
    }

    let start = Instant::now();
    info!(stage = "stage3_report", "starting stage");
    run_stage3_report(&ctx, &outcomes, &args.out)?;
    info!(
        stage = "stage3_report",
        elapsed_ms = start.elapsed().as_millis(),
        "finished stage"
    );
    Ok(())
}
