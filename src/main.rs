//! Terminal Configuration Lookup Tool - CLI Interface
//! Author: kartik4091
//! Created: 2025-06-06
//!
//! Loads a saved session plus optional Xresources overlays into the
//! fixed-bucket map and prints the effective value of each requested key.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use confmap::observe::{MetricsObserver, ObserverSet, TracingObserver};
use confmap::utils::logger;
use confmap::{MapConfig, Metrics, Result, Settings, SettingsLoader};
use serde_json::{json, Map, Value};
use std::process;
use std::sync::Arc;
use tracing::{error, info, warn};

const EXIT_ERROR: i32 = 1;
const EXIT_MISSING_KEY: i32 = 2;

fn main() {
    let matches = build_cli().get_matches();

    let level = matches
        .get_one::<String>("verbose")
        .map(String::as_str)
        .unwrap_or("warn");
    logger::init(level);

    match run(&matches) {
        Ok(0) => {}
        Ok(code) => process::exit(code),
        Err(e) => {
            error!("❌ {}", e);
            eprintln!("confmap: {}", e);
            process::exit(EXIT_ERROR);
        }
    }
}

fn run(matches: &ArgMatches) -> Result<i32> {
    let config = build_config(matches)?;
    let metrics = Arc::new(Metrics::new());
    let trace_lookups = config.trace_lookups;

    let mut loader = SettingsLoader::new(config)?.with_metrics(metrics.clone());

    if let Some(session) = matches.get_one::<String>("session") {
        loader.load_session_file(session)?;
    }
    if let Some(overlays) = matches.get_many::<String>("xresources") {
        for overlay in overlays {
            loader.overlay_xresources_file(overlay)?;
        }
    }

    let mut settings = loader.finish();
    let mut observers = ObserverSet::new().with(Arc::new(MetricsObserver::new(metrics.clone())));
    if trace_lookups {
        observers = observers.with(Arc::new(TracingObserver));
    }
    settings.set_observer(Arc::new(observers));
    info!("📁 Loaded {} settings", settings.len());

    let keys: Vec<&String> = matches
        .get_many::<String>("keys")
        .map(|keys| keys.collect())
        .unwrap_or_default();
    let default = matches.get_one::<String>("default").map(String::as_str);
    let (values, missing) = resolve_keys(&settings, &keys, default)?;

    let json_output = matches
        .get_one::<String>("format")
        .is_some_and(|format| format == "json");
    let show_stats = matches.get_flag("stats");

    if json_output {
        let mut body = Map::new();
        body.insert("values".into(), Value::Object(values.into_iter().collect()));
        if show_stats {
            body.insert("stats".into(), json!(settings.stats()));
            body.insert("metrics".into(), json!(metrics.get_all_metrics()));
        }
        println!("{}", Value::Object(body));
    } else {
        for (key, value) in &values {
            match value {
                Value::String(value) => println!("{}={}", key, value),
                _ => println!("{}", key),
            }
        }
        if show_stats {
            print_stats(&settings, &metrics);
        }
    }

    if missing > 0 {
        warn!("⚠️ {} requested key(s) not set and no --default given", missing);
        return Ok(EXIT_MISSING_KEY);
    }
    Ok(0)
}

/// Values for each key in request order; `Null` marks a miss with no default.
fn resolve_keys(
    settings: &Settings,
    keys: &[&String],
    default: Option<&str>,
) -> Result<(Vec<(String, Value)>, usize)> {
    let mut values = Vec::with_capacity(keys.len());
    let mut missing = 0;

    for key in keys {
        let value = match settings.get(key) {
            Ok(value) => Value::String(value.to_string()),
            Err(e) if e.is_not_found() => match default {
                Some(default) => Value::String(default.to_string()),
                None => {
                    warn!("⚠️ {} is not set", key);
                    missing += 1;
                    Value::Null
                }
            },
            Err(e) => return Err(e),
        };
        values.push((key.to_string(), value));
    }

    Ok((values, missing))
}

fn build_config(matches: &ArgMatches) -> Result<MapConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => MapConfig::from_file(path)?,
        None => MapConfig::default(),
    };

    if let Some(&buckets) = matches.get_one::<usize>("buckets") {
        config.bucket_count = buckets;
    }
    if let Some(class) = matches.get_one::<String>("class") {
        config.resource_class = class.clone();
    }
    if matches.get_flag("trace-lookups") {
        config.trace_lookups = true;
    }

    config.validate()?;
    Ok(config)
}

fn print_stats(settings: &Settings, metrics: &Metrics) {
    let stats = settings.stats();
    println!("buckets:          {}", stats.bucket_count);
    println!("entries:          {}", stats.entries);
    println!("occupied buckets: {}", stats.occupied_buckets);
    println!("longest chain:    {}", stats.longest_chain);

    let snapshot = metrics.get_all_metrics();
    let mut counters: Vec<_> = snapshot.counters.into_iter().collect();
    counters.sort();
    for (name, value) in counters {
        println!("{:<18}{}", format!("{}:", name), value);
    }
}

fn build_cli() -> Command {
    Command::new("confmap")
        .version(env!("CARGO_PKG_VERSION"))
        .author("kartik4091")
        .about("Look up terminal settings from a saved session and Xresources overlays")

        // Sources
        .arg(Arg::new("session")
            .short('s')
            .long("session")
            .value_name("FILE")
            .help("Saved session file (Key=value lines)"))

        .arg(Arg::new("xresources")
            .short('x')
            .long("xresources")
            .value_name("FILE")
            .action(ArgAction::Append)
            .help("Xresources overlay; may be repeated, later files win"))

        // Configuration
        .arg(Arg::new("config")
            .short('c')
            .long("config")
            .value_name("FILE")
            .help("Map configuration file (YAML)"))

        .arg(Arg::new("buckets")
            .short('b')
            .long("buckets")
            .value_name("N")
            .value_parser(value_parser!(usize))
            .help("Bucket count, overrides the configuration file"))

        .arg(Arg::new("class")
            .long("class")
            .value_name("NAME")
            .help("Xresources class to read (default: putty)"))

        // Output
        .arg(Arg::new("format")
            .short('f')
            .long("format")
            .value_parser(["text", "json"])
            .default_value("text")
            .help("Output format"))

        .arg(Arg::new("default")
            .short('d')
            .long("default")
            .value_name("VALUE")
            .help("Value printed for keys that are not set"))

        .arg(Arg::new("stats")
            .long("stats")
            .action(ArgAction::SetTrue)
            .help("Print map and lookup statistics"))

        .arg(Arg::new("trace-lookups")
            .long("trace-lookups")
            .action(ArgAction::SetTrue)
            .help("Log the bucket and chain depth of every lookup (needs -v debug)"))

        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .value_parser(logger::LEVELS)
            .default_value("warn")
            .help("Log level"))

        .arg(Arg::new("keys")
            .value_name("KEY")
            .num_args(0..)
            .help("Setting names to look up"))
}
