//! UI Monitor Binary
//!
//! Polls the game client's UI tree and runs the configured bots on every
//! snapshot:
//! - Local chat monitor (alarms on pilots without good standing)
//! - Overview watcher (alarms on listed targets)
//! - Monitor-down alarm when no cycle succeeds for too long
//!
//! ## Configuration
//!
//! Bots and timings come from `config/<name>.json` (see `MonitorConfig`).
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default: info)
//! - `LOG_FORMAT`: "json" for structured logs, "pretty" for a terminal (default: pretty)
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin ui_monitor --features monitor -- -c ratting -p 12345
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use eve_ui_parser::monitor::{
    dump_file_name, CycleOutcome, DumpSource, FileDump, LogAlarmSink, Monitor, MonitorConfig,
    ProcessDump,
};

#[derive(Parser)]
#[command(name = "ui_monitor")]
#[command(about = "Watches EVE Online UI snapshots and raises alarms", long_about = None)]
struct Cli {
    /// Bot configuration name (reads config/<NAME>.json)
    #[arg(short = 'c', value_name = "NAME")]
    config: String,

    /// Game client process ID
    #[arg(short = 'p', required_unless_present = "replay")]
    pid: Option<u32>,

    /// Save the dump to tmp/ whenever a cycle fails
    #[arg(short = 'd')]
    debug: bool,

    /// Replay a saved dump file instead of reading the client
    #[arg(long, value_name = "FILE")]
    replay: Option<PathBuf>,

    /// Do not ring the terminal bell on alarms
    #[arg(long)]
    quiet: bool,
}

/// Initialize the tracing subscriber with JSON or pretty format
fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ui_monitor=info,eve_ui_parser=info".into());

    if log_format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_target(true).flatten_event(true))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}

fn run<S: DumpSource>(mut monitor: Monitor<S>, config: &MonitorConfig) -> ! {
    let mut previous = CycleOutcome::Success;
    loop {
        let outcome = monitor.run_cycle();
        if outcome == CycleOutcome::Success && previous != CycleOutcome::Success {
            info!("bots running normally again");
        }
        previous = outcome;
        std::thread::sleep(config.poll_interval());
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    let config_path = MonitorConfig::path_for(&cli.config);
    let config = MonitorConfig::load(&config_path)?;
    let bots = config.build_bots()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_path.display(),
        character = %config.character_name,
        bots = ?bots.iter().map(|b| b.name().to_string()).collect::<Vec<_>>(),
        "Starting bots"
    );
    if cli.debug {
        info!("Debug mode enabled: dumps are saved when a cycle fails");
    }

    let sink = Box::new(LogAlarmSink::new(!cli.quiet));
    let debug_dir = cli.debug.then(|| PathBuf::from("tmp"));

    match (&cli.replay, cli.pid) {
        (Some(path), _) => {
            info!(file = %path.display(), "replaying saved dump");
            let mut monitor = Monitor::new(FileDump::new(path), bots, sink, config.monitor_down_after());
            if let Some(dir) = debug_dir {
                monitor = monitor.with_debug_dir(dir);
            }
            run(monitor, &config)
        }
        (None, Some(pid)) => {
            info!(pid = pid, "using game client process");
            let source = ProcessDump::new(&config.dump_executable, pid, dump_file_name(&cli.config));
            let mut monitor = Monitor::new(source, bots, sink, config.monitor_down_after());
            if let Some(dir) = debug_dir {
                monitor = monitor.with_debug_dir(dir);
            }
            run(monitor, &config)
        }
        (None, None) => Err("either -p <PID> or --replay <FILE> is required".into()),
    }
}
