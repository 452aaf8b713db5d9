//! CLI tool to evaluate the environment probes against a described host.
//!
//! Usage:
//!   envprobe [--snapshot env.json] [--ua UA] [--navigator-ua UA] [--weex-platform P]
//!            [--window] [--signal chrome.runtime ...] [--hidden true|false] [--compact]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use helperkit::{EnvSnapshot, ProbeReport, Signal};

#[derive(Parser, Debug)]
#[command(
    name = "envprobe",
    about = "Evaluate browser and platform probes against an environment snapshot",
    version
)]
struct Args {
    /// JSON snapshot of the environment (defaults to a host with no globals)
    #[arg(short, long, env = "ENVPROBE_SNAPSHOT")]
    snapshot: Option<PathBuf>,

    /// Value of the `UA` global
    #[arg(long)]
    ua: Option<String>,

    /// Value of `navigator.userAgent`
    #[arg(long)]
    navigator_ua: Option<String>,

    /// Alternate-runtime platform (`WXEnvironment.platform`)
    #[arg(long)]
    weex_platform: Option<String>,

    /// Mark a window global as present
    #[arg(long, default_value = "false")]
    window: bool,

    /// Define a vendor global as a truthy object (e.g. `chrome.runtime`);
    /// nested globals also define their parent object
    #[arg(long = "signal", value_parser = parse_signal)]
    signals: Vec<Signal>,

    /// Set `document.hidden`
    #[arg(long)]
    hidden: Option<bool>,

    /// Print the report on a single line
    #[arg(long, default_value = "false")]
    compact: bool,
}

fn parse_signal(name: &str) -> Result<Signal, String> {
    serde_json::from_value(serde_json::Value::String(name.to_string())).map_err(|_| {
        let known: Vec<String> = Signal::ALL
            .iter()
            .filter_map(|signal| serde_json::to_value(signal).ok())
            .filter_map(|value| value.as_str().map(str::to_string))
            .collect();
        format!("unknown signal `{}` (expected one of: {})", name, known.join(", "))
    })
}

fn load_snapshot(args: &Args) -> Result<EnvSnapshot> {
    let mut snapshot = match &args.snapshot {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
            EnvSnapshot::from_json(&json).context("Failed to parse snapshot")?
        }
        None => EnvSnapshot::default(),
    };

    // Command-line flags override the file
    if let Some(ua) = &args.ua {
        snapshot = snapshot.with_ua(ua);
    }
    if let Some(ua) = &args.navigator_ua {
        snapshot = snapshot.with_navigator_user_agent(ua);
    }
    if let Some(platform) = &args.weex_platform {
        snapshot = snapshot.with_weex_platform(platform);
    }
    if args.window {
        snapshot = snapshot.with_window();
    }
    for signal in &args.signals {
        if let Some(parent) = signal.parent() {
            if !snapshot.signals.contains_key(&parent) {
                snapshot = snapshot.with_flag(parent);
            }
        }
        snapshot = snapshot.with_flag(*signal);
    }
    if let Some(hidden) = args.hidden {
        snapshot = snapshot.with_document_hidden(hidden);
    }

    Ok(snapshot)
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let snapshot = load_snapshot(&args)?;

    let report = ProbeReport::collect(&snapshot);
    info!(browser = report.browser().unwrap_or("none"), "Probes evaluated");

    let output = if args.compact {
        serde_json::to_string(&report)
    } else {
        serde_json::to_string_pretty(&report)
    }
    .context("Failed to serialize report")?;

    println!("{}", output);
    Ok(())
}
