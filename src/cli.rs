use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "deskhive")]
#[command(author, version, about)]
#[command(long_about = "Inspect and convert DeskHive floor-map files.\n\n\
    Examples:\n  \
    deskhive new office.json --floors 3     Create a map with three empty floors\n  \
    deskhive inspect office.json            List floors and object counts\n  \
    deskhive pack plan.json office.json     Wrap a backend floor plan into a map file\n  \
    deskhive unpack office.json plan.json   Extract the floor plan from a map file")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a floor-map file with empty floors
    New {
        /// Output file
        file: PathBuf,

        /// Number of floors
        #[arg(long, default_value = "1")]
        floors: usize,
    },

    /// List the floors of a floor-map file and what is on them
    Inspect {
        /// Floor-map file
        file: PathBuf,
    },

    /// Wrap a bare floor plan into a floor-map file
    Pack {
        /// Floor plan JSON (`{ floors, activeFloorId }`)
        plan: PathBuf,

        /// Output floor-map file
        output: PathBuf,

        /// Name stored in the file metadata (defaults to the output file name)
        #[arg(long)]
        name: Option<String>,
    },

    /// Extract the bare floor plan from a floor-map file
    Unpack {
        /// Floor-map file
        file: PathBuf,

        /// Output floor plan JSON
        output: PathBuf,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Print the config file location
    Path,

    /// Write a default config file if none exists
    Init,

    /// List recently inspected floor-map files
    Recent,
}
