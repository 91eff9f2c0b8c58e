mod cli;

use anyhow::Context;
use clap::Parser;
use deskhive::{commands, init_logging, Config, BUILD_DATE, VERSION};

use cli::{Cli, Commands, ConfigCommands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    init_logging(level)?;

    let (mut config, config_path) = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::New { file, floors } => {
            commands::create(&file, floors, &config)?;
            println!("Created {} with {} floors", file.display(), floors);
        }
        Commands::Inspect { file } => {
            print!("{}", commands::inspect(&file)?);
            commands::remember(&mut config, &config_path, &file)?;
        }
        Commands::Pack { plan, output, name } => {
            let floors = commands::pack(&plan, &output, name.as_deref())?;
            println!("Packed {} floors into {}", floors, output.display());
        }
        Commands::Unpack { file, output } => {
            let floors = commands::unpack(&file, &output)?;
            println!("Unpacked {} floors into {}", floors, output.display());
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                let json = serde_json::to_string_pretty(&config)
                    .context("Failed to serialize config")?;
                println!("{}", json);
            }
            ConfigCommands::Path => println!("{}", config_path.display()),
            ConfigCommands::Init => {
                if config_path.exists() {
                    println!("Config already exists at {}", config_path.display());
                } else {
                    Config::default().save_to_file(&config_path)?;
                    println!("Wrote default config to {}", config_path.display());
                }
            }
            ConfigCommands::Recent => {
                for file in &config.recent_files {
                    println!("{}", file.display());
                }
            }
        },
        Commands::Version => println!("deskhive {} (built {})", VERSION, BUILD_DATE),
    }

    Ok(())
}
