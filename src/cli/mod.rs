use clap::{Parser, Subcommand};

mod plots;
mod render;
mod validate;

#[derive(Parser, Debug)]
#[command(
    name = "interp-plot",
    version,
    about = "Plot precomputed interpolation results against actual data"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Render(render::RenderArgs),
    Validate(validate::ValidateArgs),
    Plots(plots::PlotsArgs),
}

impl Cli {
    pub fn dispatch(self) -> anyhow::Result<()> {
        match self.command {
            Command::Render(args) => render::handle(args),
            Command::Validate(args) => validate::handle(args),
            Command::Plots(args) => plots::handle(args),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/mod.rs"]
mod tests;
