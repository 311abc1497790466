use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use quakewatch::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "quakewatch", about = "Live terminal table of the latest GeoNet earthquakes")]
struct Args {
    /// Only show quakes with at least this MMI (-1 shows all)
    #[arg(short, long, allow_negative_numbers = true,
          value_parser = clap::value_parser!(i8).range(-1..=8))]
    mmi_threshold: Option<i8>,

    /// How many quakes to display at a time [default: 20]
    #[arg(short = 'n', long)]
    display_n: Option<usize>,

    /// How often to update the feed, in minutes [default: 5, max: 10080]
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..=config::MAX_POLL_MINUTES))]
    update_frequency: Option<u64>,

    /// Decimal places for magnitude and depth [default: 1, max: 6]
    #[arg(short, long)]
    decimal_precision: Option<u8>,

    /// Colour depth values by how shallow they are
    #[arg(short = 'D', long)]
    highlight_depth: bool,

    /// Highlight quakes whose locality contains this text
    #[arg(short = 'L', long)]
    highlight_locality: Option<String>,

    /// Base URL of the quake feed
    #[arg(long)]
    feed_url: Option<String>,

    /// IANA timezone for absolute times [default: Pacific/Auckland]
    #[arg(long)]
    timezone: Option<String>,

    /// Write a debug log to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Config file [default: ~/.quakewatch/config.toml]
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            mmi_threshold: self.mmi_threshold,
            rows: self.display_n,
            poll_minutes: self.update_frequency,
            precision: self.decimal_precision,
            highlight_depth: self.highlight_depth.then_some(true),
            highlight_locality: self.highlight_locality.clone(),
            feed_url: self.feed_url.clone(),
            timezone: self.timezone.clone(),
            log_file: self.log_file.clone(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("quakewatch: {e}; using defaults");
            config::QuakeConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, &args.overrides());

    // File logger only when asked for; the terminal belongs to the canvas
    if let Some(path) = &resolved.log_file {
        let log_config = ConfigBuilder::new()
            .set_time_format_rfc3339()
            .build();
        let level = resolved
            .log_level
            .parse::<LevelFilter>()
            .unwrap_or(LevelFilter::Info);

        match File::create(path) {
            Ok(log_file) => {
                let _ = WriteLogger::init(level, log_config, log_file);
            }
            Err(e) => eprintln!("quakewatch: cannot open log file {}: {e}", path.display()),
        }
    }

    log::info!("Quakewatch starting up: {:?}", resolved);

    quakewatch::tui::run(resolved).await
}
