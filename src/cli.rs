use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitlog")]
#[command(about = "Export git commit history as CSV or YAML")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk a directory tree and emit a CSV summary for every repository found
    Scan {
        #[arg(help = "Directory to scan", default_value = ".")]
        dir: PathBuf,
    },
    /// Emit the full commit history of one repository as YAML
    Yaml {
        #[arg(help = "Path to git repository", default_value = ".")]
        dir: PathBuf,
    },
    /// Emit a CSV summary of one repository's history
    Csv {
        #[arg(help = "Path to git repository", default_value = ".")]
        dir: PathBuf,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Scan { dir } => crate::scan::exec(&dir),
            Commands::Yaml { dir } => crate::emit::exec_yaml(&dir),
            Commands::Csv { dir } => crate::emit::exec_csv(&dir),
        }
    }
}
