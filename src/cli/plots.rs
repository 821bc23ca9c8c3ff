use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::plots::loader::resolve_plot_set;

#[derive(Args, Debug)]
pub struct PlotsArgs {
    #[command(subcommand)]
    command: PlotsCommand,
}

#[derive(Subcommand, Debug)]
enum PlotsCommand {
    List(PlotsListArgs),
    Dump(PlotsDumpArgs),
}

#[derive(Args, Debug)]
pub struct PlotsListArgs {
    /// Optional TOML plot manifest
    #[arg(long)]
    manifest: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct PlotsDumpArgs {
    /// Output directory
    #[arg(long)]
    out: PathBuf,

    /// Optional TOML plot manifest
    #[arg(long)]
    manifest: Option<PathBuf>,
}

pub fn handle(args: PlotsArgs) -> anyhow::Result<()> {
    match args.command {
        PlotsCommand::List(args) => list_plots(args),
        PlotsCommand::Dump(args) => dump_plots(args),
    }
}

fn list_plots(args: PlotsListArgs) -> anyhow::Result<()> {
    let set = resolve_plot_set(args.manifest.as_deref())?;
    println!("plot_id\ttitle\tinput\toutput");
    for plot in set.plots {
        println!(
            "{}\t{}\t{}\t{}",
            plot.id, plot.title, plot.input, plot.output
        );
    }
    Ok(())
}

fn dump_plots(args: PlotsDumpArgs) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.out)?;
    let set = resolve_plot_set(args.manifest.as_deref())?;
    let json = serde_json::to_string_pretty(&set)?;
    let path = args.out.join("plots_manifest.json");
    std::fs::write(path, json)?;
    Ok(())
}
