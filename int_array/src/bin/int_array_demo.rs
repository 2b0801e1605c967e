use anyhow::{Context, Result};
use clap::Parser;
use int_array::DynamicIntArray;
use log::{debug, info};

/// Builds an array from the given values, sorts it and prints it.
#[derive(Parser, Debug)]
#[command(name = "int_array_demo")]
#[command(version, about, long_about = None)]
struct Cli {
    /// The integers to add, in order
    #[arg(value_name = "VALUES", allow_negative_numbers = true, default_values_t = [3, 7, 6, -2])]
    values: Vec<i64>,

    /// Binary search for this key after sorting
    #[arg(short, long, allow_negative_numbers = true)]
    search: Option<i64>,

    /// Also print the array in reverse order
    #[arg(short, long)]
    reverse: bool,

    /// Set verbose level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let mut ar = DynamicIntArray::new();
    for &v in &cli.values {
        ar.add(v);
        debug!("added {v}, size {} capacity {}", ar.size(), ar.capacity());
    }

    ar.sort();
    info!("sorted {} values", ar.size());

    for i in 0..ar.size() {
        let v = ar.get(i).with_context(|| format!("reading index {i}"))?;
        println!("{v}");
    }

    println!("{ar}");

    if let Some(key) = cli.search {
        match ar.binary_search(key) {
            Some(i) => println!("found {key} at index {i}"),
            None => println!("{key} not found"),
        }
    }

    if cli.reverse {
        ar.reverse();
        println!("{ar}");
    }

    Ok(())
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    pretty_env_logger::formatted_builder()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .init();
}
