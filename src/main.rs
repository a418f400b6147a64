use clap::Parser;
use focusbox::core::config;
use focusbox::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "focusbox", about = "Arrow-key focus across terminal widgets")]
struct Args {
    /// Config file (defaults to ~/.focusbox/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the debug log
    #[arg(long, default_value = "focusbox.log")]
    log_file: PathBuf,

    /// Keep selections in memory instead of the store file
    #[arg(long)]
    ephemeral: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The terminal belongs to the UI, so logs only go to a file
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("focusbox starting up");

    let file_config = config::load_config(args.config.as_deref()).map_err(|e| {
        log::warn!("Config load failed: {}", e);
        io::Error::other(e)
    })?;
    let resolved = config::resolve(&file_config, args.ephemeral);
    log::info!(
        "Select key {:?}, store {:?}, {} widgets",
        resolved.select_key,
        resolved.store_path,
        resolved.widgets.len()
    );

    tui::run(resolved)
}
