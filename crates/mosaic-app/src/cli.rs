use clap::Parser;

/// Mosaic: a grid of web panels in one window.
#[derive(Parser, Debug)]
#[command(name = "mosaic", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter directive override (e.g. `mosaic=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Open a panel at this address. Repeat for more panels.
    #[arg(long = "url", value_name = "URL")]
    pub urls: Vec<String>,

    /// Print the generated fullscreen shim script and exit.
    #[arg(long)]
    pub print_shim: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
