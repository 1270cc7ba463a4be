mod config;
mod prompt;
mod scaffold;

use anyhow::Result;
use clap::{ArgAction, Parser};

use crate::config::Config;

#[derive(Parser)]
#[command(version)]
#[command(disable_help_flag = true)]
#[command(disable_version_flag = true)]
#[command(about = "Scaffold a Next.js + Express + MongoDB starter project.")]
struct Cli {
    #[arg(
        short = 'h',
        long = "help",
        help = "Print this help message.",
        action = ArgAction::Help,
    )]
    help: Option<bool>,

    #[arg(
        short = 'V',
        long = "version",
        help = "Print version information.",
        action = ArgAction::Version,
    )]
    version: Option<bool>,
}

pub(crate) struct App {
    config: Config,
}

impl App {
    fn init() -> Self {
        Cli::parse();
        let config = Config::init().expect("failed to initialize config");
        Self { config }
    }
}

fn main() -> Result<()> {
    App::init().scaffold()
}
