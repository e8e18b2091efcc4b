use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use taskpad::LogLevel;
use taskpad::core::config::{CliOverrides, ConfigSource, load_config, resolve};

#[derive(Parser)]
#[command(name = "taskpad", about = "Single-screen terminal task list")]
struct Args {
    /// Config file to read instead of ~/.taskpad/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log verbosity
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, source) =
        load_config(args.config.as_deref()).map_err(std::io::Error::other)?;
    let config = resolve(
        &file_config,
        &CliOverrides {
            log_level: args.log_level,
            log_file: args.log_file,
        },
    );

    // The TUI owns stdout, so logs go to a file
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    match File::create(&config.log_file) {
        Ok(log_file) => {
            let _ = WriteLogger::init(config.log_level.to_filter(), log_config, log_file);
        }
        Err(e) => eprintln!(
            "taskpad: cannot open log file {}: {}",
            config.log_file.display(),
            e
        ),
    }

    match &source {
        ConfigSource::File(path) => log::info!("Loaded config from {}", path.display()),
        ConfigSource::Generated(path) => {
            log::info!("Wrote default config to {}", path.display())
        }
        ConfigSource::GenerateFailed { path, reason } => log::warn!(
            "Failed to write default config to {}: {}",
            path.display(),
            reason
        ),
        ConfigSource::Defaults => log::info!("No home directory, using built-in defaults"),
    }
    for warning in &config.warnings {
        log::warn!("{}", warning);
    }
    log::info!("taskpad starting up (log level {:?})", config.log_level);

    taskpad::tui::run(config)
}
