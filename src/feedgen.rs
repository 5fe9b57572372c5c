use anyhow::Result;
use quakemap::{FeedWriter, SyntheticFeedReader};
use std::env;

struct Config {
    seed: u64,
    min_events: usize,
    max_events: usize,
    output_file: Option<String>,
    use_brotli: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed: 42,
            min_events: 40,
            max_events: 240,
            output_file: None,
            use_brotli: false,
        }
    }
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-seed" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-seed requires an argument");
                }
                config.seed = args[i].parse()?;
            }
            "-events" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-events requires at least one argument");
                }
                config.min_events = args[i].parse()?;
                config.max_events = config.min_events;
                // Optional second number makes it a range
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    if let Ok(max) = args[i + 1].parse::<usize>() {
                        i += 1;
                        config.max_events = max;
                    }
                }
            }
            "-out" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-out requires a file path argument");
                }
                config.output_file = Some(args[i].clone());
            }
            "-br" => {
                config.use_brotli = true;
            }
            "-h" | "-help" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                anyhow::bail!("Unknown argument: {}", other);
            }
        }
        i += 1;
    }

    if config.max_events < config.min_events {
        anyhow::bail!("-events range is empty: {}..{}", config.min_events, config.max_events);
    }

    Ok(config)
}

fn print_usage() {
    println!("Usage: quakemap-feedgen [-seed N] [-events MIN [MAX]] [-out FILE] [-br]");
    println!();
    println!("Writes a synthetic earthquake feed as GeoJSON.");
    println!("  -seed N          RNG seed (default 42)");
    println!("  -events MIN MAX  number of events, fixed or a range (default 40 240)");
    println!("  -out FILE        output path (default synthetic.geojson)");
    println!("  -br              Brotli-compress the output");
}

fn main() -> Result<()> {
    let config = parse_args()?;

    let output_path = config.output_file.clone().unwrap_or_else(|| {
        if config.use_brotli {
            "synthetic.geojson.br".to_string()
        } else {
            "synthetic.geojson".to_string()
        }
    });

    let reader = SyntheticFeedReader::with_config(config.min_events, config.max_events, 0, config.seed);
    let feed = reader.generate_earthquakes();

    let mut writer = FeedWriter::new(&output_path)?;
    writer.write_feed(&feed)?;

    println!("{} earthquakes written to: {}", writer.feature_count(), output_path);
    Ok(())
}
