pub mod init;
pub mod interactive;
pub mod split;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Split a worked duration across weighted tasks")]
    Split(split::SplitArgs),
    #[command(about = "Enter durations and weights interactively", visible_alias = "i")]
    Interactive,
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Split(args) => split::cmd(args),
            Commands::Interactive => interactive::cmd(),
            Commands::Init(args) => init::cmd(args),
        }
    }
}
