use std::io::Read;
use std::path::PathBuf;

use clap::ArgMatches;
use tracing::{error, info, warn};

use tempin_core::config::TempinConfig;
use tempin_core::errors::TempinError;
use tempin_core::{RawAppRecord, SystemPorts, WindowHandle, resolve_identities, resolve_identity};

/// Input accepted by `resolve --stdin`.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum StdinRecords {
    Many(Vec<RawAppRecord>),
    One(Box<RawAppRecord>),
}

/// Load configuration with warning on errors.
///
/// Falls back to defaults on failure, with a stderr notice and a
/// `cli.config.load_failed` event.
fn load_config_with_warning() -> TempinConfig {
    match TempinConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Could not load config: {}. Using defaults.", e);
            if e.is_user_error() {
                eprintln!(
                    "Tip: Check ~/.tempin/config.toml and ./.tempin/config.toml for mistakes."
                );
            }
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                error_code = e.error_code(),
                "Config load failed, using defaults"
            );
            TempinConfig::default()
        }
    }
}

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        event = "cli.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );

    match matches.subcommand() {
        Some(("resolve", sub_matches)) => handle_resolve_command(sub_matches),
        Some(("config", sub_matches)) => handle_config_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

fn record_from_flags(matches: &ArgMatches) -> Result<RawAppRecord, Box<dyn std::error::Error>> {
    let exe = matches
        .get_one::<String>("exe")
        .ok_or("--exe is required")?;
    let icon_path = matches
        .get_one::<String>("icon-path")
        .ok_or("--icon-path is required")?;
    let execution_path = matches
        .get_one::<String>("execution-path")
        .cloned()
        .unwrap_or_else(|| exe.clone());
    let hwnd = matches.get_one::<isize>("hwnd").copied().unwrap_or(0);

    Ok(RawAppRecord {
        exe: PathBuf::from(exe),
        execution_path,
        window_handle: WindowHandle(hwnd),
        icon_path: PathBuf::from(icon_path),
        icon: None,
    })
}

fn read_stdin_records() -> Result<StdinRecords, Box<dyn std::error::Error>> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let records: StdinRecords = serde_json::from_str(input.trim())
        .map_err(|e| format!("Invalid record JSON on stdin: {}", e))?;
    Ok(records)
}

fn handle_resolve_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let input = if matches.get_flag("stdin") {
        match read_stdin_records() {
            Ok(records) => records,
            Err(e) => {
                eprintln!("Failed to read records: {}", e);
                error!(event = "cli.resolve_failed", error = %e);
                return Err(e);
            }
        }
    } else {
        StdinRecords::One(Box::new(record_from_flags(matches)?))
    };

    let config = load_config_with_warning();
    let ports = SystemPorts::from_config(&config);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    info!(event = "cli.resolve_started");

    let output = match input {
        StdinRecords::One(record) => {
            let resolved = runtime.block_on(resolve_identity(&ports, *record));
            serde_json::to_string_pretty(&resolved)?
        }
        StdinRecords::Many(records) => {
            let resolved = runtime.block_on(resolve_identities(&ports, records));
            serde_json::to_string_pretty(&resolved)?
        }
    };

    println!("{}", output);

    info!(event = "cli.resolve_completed");

    Ok(())
}

fn handle_config_command(_matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    print!("{}", toml::to_string_pretty(&config)?);

    info!(event = "cli.config_completed");

    Ok(())
}
