use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use std::{env, fs};
use vitrolab::dashboard::DashboardSummary;
use vitrolab::persistence::FileStorage;
use vitrolab::state::{Erp, Operation};
use vitrolab::{StatusFilter, StoreKey};

const DEFAULT_DATA_DIR: &str = ".vitrolab_data";

fn usage() {
    eprintln!(
        "Usage:\n  \
  vitrolab_cli [--data-dir PATH] stores\n  \
  vitrolab_cli [--data-dir PATH] list STORE [SEARCH] [STATUS|all]\n  \
  vitrolab_cli [--data-dir PATH] counts STORE\n  \
  vitrolab_cli [--data-dir PATH] op '<operation-json>'\n  \
  vitrolab_cli [--data-dir PATH] summary\n  \
  vitrolab_cli [--data-dir PATH] reseed\n\n  \
  Tip: pass @file.json instead of inline JSON"
    );
}

fn load_json_arg(value: &str) -> Result<String> {
    if let Some(path) = value.strip_prefix('@') {
        fs::read_to_string(path).with_context(|| format!("Could not read JSON file '{path}'"))
    } else {
        Ok(value.to_string())
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text =
        serde_json::to_string_pretty(value).context("Could not serialize JSON output")?;
    println!("{text}");
    Ok(())
}

fn parse_global_data_dir_arg(args: &[String]) -> (String, usize) {
    if args.len() >= 3 && args[1] == "--data-dir" {
        return (args[2].clone(), 3);
    }
    (DEFAULT_DATA_DIR.to_string(), 1)
}

fn parse_store_arg(text: &str) -> Result<StoreKey> {
    StoreKey::parse(text).ok_or_else(|| {
        anyhow!(
            "Unknown store '{text}'; expected one of: {}",
            StoreKey::ALL
                .iter()
                .map(|k| k.slot_name())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
    if let Err(e) = run() {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        usage();
        return Err(anyhow!("Missing command"));
    }

    let (data_dir, cmd_idx) = parse_global_data_dir_arg(&args);
    if args.len() <= cmd_idx {
        usage();
        return Err(anyhow!("Missing command"));
    }

    let command = &args[cmd_idx];

    match command.as_str() {
        "stores" => {
            let rows: Vec<serde_json::Value> = StoreKey::ALL
                .iter()
                .map(|k| {
                    serde_json::json!({
                        "key": k.slot_name(),
                        "label": k.label(),
                    })
                })
                .collect();
            print_json(&rows)
        }
        "list" => {
            if args.len() <= cmd_idx + 1 {
                usage();
                return Err(anyhow!("list requires: STORE [SEARCH] [STATUS|all]"));
            }
            let store = parse_store_arg(&args[cmd_idx + 1])?;
            let search = args.get(cmd_idx + 2).map(String::as_str).unwrap_or("");
            let filter_text = args.get(cmd_idx + 3).map(String::as_str).unwrap_or("all");
            let filter = StatusFilter::parse(filter_text).ok_or_else(|| {
                anyhow!("Unknown status '{filter_text}', expected pending|active|completed|contaminated|all")
            })?;

            let erp = Erp::open(FileStorage::new(&data_dir));
            let rows = erp.state().rows(store, search, filter)?;
            print_json(&rows)
        }
        "counts" => {
            if args.len() <= cmd_idx + 1 {
                usage();
                return Err(anyhow!("counts requires: STORE"));
            }
            let store = parse_store_arg(&args[cmd_idx + 1])?;
            let erp = Erp::open(FileStorage::new(&data_dir));
            print_json(&erp.state().status_counts(store))
        }
        "op" => {
            if args.len() <= cmd_idx + 1 {
                usage();
                return Err(anyhow!("Missing operation JSON"));
            }
            let json = load_json_arg(&args[cmd_idx + 1])?;
            let op: Operation =
                serde_json::from_str(&json).context("Invalid operation JSON")?;

            let mut erp = Erp::open(FileStorage::new(&data_dir));
            let receipt = erp.apply(op)?;
            print_json(&receipt)
        }
        "summary" => {
            let erp = Erp::open(FileStorage::new(&data_dir));
            print_json(&DashboardSummary::from_state(erp.state()))
        }
        "reseed" => {
            let mut erp = Erp::open(FileStorage::new(&data_dir));
            erp.reseed();
            println!("Reseeded all stores in '{data_dir}'");
            Ok(())
        }
        _ => {
            usage();
            Err(anyhow!("Unknown command '{command}'"))
        }
    }
}
