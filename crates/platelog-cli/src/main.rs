//! Platelog: meal logging and calorie estimation from free text.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::Context;

fn resolve_data_dir() -> PathBuf {
    std::env::var("PLATELOG_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

fn print_help() {
    println!("Platelog: meal calorie estimation");
    println!();
    println!("Usage: platelog <command> [--date YYYY-MM-DD]");
    println!();
    println!("Commands:");
    println!("  estimate                 Estimate the day's calories, asking about unknown foods");
    println!("  meal <slot> <text...>    Save a meal (breakfast, lunch, dinner, snack)");
    println!("  learn <kcal> <name...>   Teach the calories of one portion of a food");
    println!("  calories <kcal>          Record the day's calories by hand");
    println!("  foods                    List known foods");
    println!("  export                   Write all data to a JSON file");
    println!("  help                     Show this help message");
}

/// Pull `--date YYYY-MM-DD` out of `args`, defaulting to today.
fn take_date(args: &mut Vec<String>) -> anyhow::Result<NaiveDate> {
    match args.iter().position(|a| a == "--date") {
        Some(idx) => {
            let value = args
                .get(idx + 1)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("--date needs a value"))?;
            args.drain(idx..=idx + 1);
            NaiveDate::parse_from_str(&value, "%Y-%m-%d")
                .map_err(|e| anyhow::anyhow!("Invalid date {:?}: {}", value, e))
        }
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so prompts on stdout stay readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let date = take_date(&mut args)?;

    let command = match args.first() {
        Some(c) => c.clone(),
        None => {
            print_help();
            return Ok(());
        }
    };
    if matches!(command.as_str(), "--help" | "-h" | "help") {
        print_help();
        return Ok(());
    }

    let data_dir = resolve_data_dir();
    info!("Data directory: {}", data_dir.display());

    let config = platelog_core::PlatelogConfig::from_env(&data_dir)?;
    let store = platelog_store::SqliteStore::open(&config.data_paths.db_file)
        .map_err(|e| anyhow::anyhow!("Failed to open store: {}", e))?;
    let ctx = Context::new(config, Arc::new(store));

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();

    match command.as_str() {
        "estimate" => commands::estimate(&ctx, date, &mut input, &mut out),
        "meal" => {
            if args.len() < 3 {
                eprintln!("Usage: platelog meal <slot> <text...> [--date YYYY-MM-DD]");
                std::process::exit(1);
            }
            let slot = args[1].parse()?;
            commands::save_meal(&ctx, date, slot, &args[2..].join(" "), &mut out)
        }
        "learn" => {
            if args.len() < 3 {
                eprintln!("Usage: platelog learn <kcal> <name...>");
                std::process::exit(1);
            }
            let kcal: f64 = args[1]
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid calories: {:?}", args[1]))?;
            commands::learn(&ctx, &args[2..].join(" "), kcal, &mut out)
        }
        "calories" => {
            if args.len() != 2 {
                eprintln!("Usage: platelog calories <kcal> [--date YYYY-MM-DD]");
                std::process::exit(1);
            }
            commands::record_calories(&ctx, date, &args[1], &mut out)
        }
        "foods" => commands::list_foods(&ctx, &mut out),
        "export" => commands::export(&ctx, &mut out),
        other => {
            eprintln!("Unknown command: {}. Use 'platelog help' for usage.", other);
            std::process::exit(1);
        }
    }
}
