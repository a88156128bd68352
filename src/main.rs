//! hue-log demo
//!
//! Emits a handful of sample lines through every kind of colorizer, or lists
//! the colorizer registry.
//!
//! # Architecture Overview
//!
//! ```text
//!   caller ──▶ Logger::emit(level, colorizer, format, args)
//!                 │
//!                 ├── sanitize args ──▶ LogLine ──▶ JSONL file   (always, if path set)
//!                 │
//!                 └── level gate ──▶ pretty ──▶ printf (pad, colorize) ──▶ console
//!
//!   config.toml ──▶ loader ──▶ validation ──▶ Logger::reconfigure   (optional watcher)
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use hue_log::config::{load_config, ConfigWatcher, LoggerConfig};
use hue_log::observability::logging::init_tracing;
use hue_log::{emit, Arg, Level, Logger};

#[derive(Parser)]
#[command(name = "hue-log")]
#[command(about = "Colorized leveled logging demo", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Console threshold (error, warn, info, debug, trace)
    #[arg(short, long)]
    level: Option<Level>,

    /// Mirror every line to this JSON Lines file
    #[arg(long)]
    log_file: Option<String>,

    /// Include thread ids
    #[arg(long)]
    tid: bool,

    /// strftime pattern for timestamps ("" disables them)
    #[arg(long)]
    time_format: Option<String>,

    /// Print every registered colorizer in its own colors and exit
    #[arg(long)]
    list: bool,

    /// Keep running, reloading the config file on change
    #[arg(long, requires = "config")]
    watch: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("hue_log=info");
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LoggerConfig::default(),
    };
    if let Some(level) = cli.level {
        config.level = level;
    }
    if let Some(path) = cli.log_file {
        config.file_path = path;
    }
    if let Some(format) = cli.time_format {
        config.time_format = format;
    }
    config.use_tid |= cli.tid;

    let logger = Arc::new(Logger::new(config));

    if cli.list {
        for name in logger.registry().names() {
            let colorizer = logger.colorizer(&name);
            println!("{}", colorizer.apply(&name));
        }
        return Ok(());
    }

    run_samples(&logger);

    if cli.watch {
        if let Some(path) = &cli.config {
            let _watcher = ConfigWatcher::new(path, logger.clone()).run()?;
            let mut tick: u64 = 0;
            loop {
                std::thread::sleep(Duration::from_secs(2));
                tick += 1;
                let c = logger.colorizer("CyanDim");
                emit!(logger, Level::Debug, &c, "heartbeat %d", tick);
                emit!(logger, Level::Info, &c, "still watching %s", path.display().to_string());
            }
        }
    }

    Ok(())
}

fn run_samples(logger: &Logger) {
    let green = logger.colorizer("Green");
    let red = logger.colorizer("Red");
    let blue_bold = logger.colorizer("BlueBold");
    let red_bg = logger.colorizer("RedBackground");
    let red_bold_bg = logger.colorizer("RedBoldBackground");

    emit!(
        logger,
        Level::Info,
        &green,
        "\n\n\nRegular color text %s, more regular text\nmore text: %s",
        "text printed with a colorizer\nstill the same colorizer",
        "more color text\nnew line colored"
    );
    emit!(logger, Level::Info, &red, "error: %s\n%s", "something", "went wrong");
    logger.emit(
        Level::Info,
        &blue_bold,
        "Here's config:\n'''\n%s\n'''",
        &[Arg::serialize(&*logger.config())],
    );
    emit!(logger, Level::Info, &red_bg, "error: %s\n%s", "something", "went wrong");
    emit!(logger, Level::Info, &red_bold_bg, "error: %s\n%s", "something", "went wrong");
    emit!(
        logger,
        Level::Debug,
        &logger.colorizer("PurpleBright"),
        "binary payload %s",
        vec![0xde_u8, 0xad, 0xbe, 0xef]
    );
}
