use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_NO_DATA: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a sample sheet and print the water quality summary
    Rate {
        /// Path to the sample sheet (YAML)
        file: PathBuf,

        /// Emit the summary as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the contaminant rules and effective weights
    Limits,
    /// Write a starter config file
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "waterscore")]
#[command(about = "Water quality scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/waterscore/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.clone().map(PathBuf::from);

    match cli.command {
        Commands::Rate { ref file, json } => run_rate(config_path, file, json, cli.verbose),
        Commands::Limits => run_limits(config_path, cli.verbose),
        Commands::Init => run_init(config_path),
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Load the config file and validate its scoring section, exiting with the
/// config error code on any problem.
fn load_validated_config(config_path: Option<PathBuf>, verbose: bool) -> waterscore::config::Config {
    let config = match waterscore::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let scoring = config.scoring.clone().unwrap_or_default();
    if let Err(errors) = waterscore::scoring::validate_scoring(&scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if verbose {
        let overrides = scoring.weights.as_ref().map_or(0, |weights| weights.len());
        eprintln!("Config loaded ({} weight overrides)", overrides);
    }

    config
}

fn run_rate(config_path: Option<PathBuf>, file: &Path, json: bool, verbose: bool) {
    let config = load_validated_config(config_path, verbose);
    let scoring_config = config.scoring.clone().unwrap_or_default();

    let sheet = match waterscore::samples::load_samples(file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Input error: {}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    if verbose {
        eprintln!(
            "Loaded {} sample records from {}",
            sheet.samples.len(),
            file.display()
        );
    }

    let observations = sheet.observations();
    let result = match waterscore::scoring::score(&observations, &scoring_config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(EXIT_NO_DATA);
        }
    };

    if verbose {
        eprintln!(
            "Scored {} of {} configured contaminants",
            result.subscores.len(),
            waterscore::scoring::CONTAMINANTS.len()
        );
    }

    let summary = waterscore::output::Summary {
        location: sheet.location.as_deref().or(config.location.as_deref()),
        date: sheet.date,
        result: &result,
    };

    if json {
        match waterscore::output::format_summary_json(&summary) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Output error: {}", e);
                std::process::exit(EXIT_INPUT);
            }
        }
    } else {
        let use_colors = waterscore::output::should_use_colors();
        println!("{}", waterscore::output::format_summary(&summary, use_colors));
    }
}

fn run_limits(config_path: Option<PathBuf>, verbose: bool) {
    let config = load_validated_config(config_path, verbose);
    let scoring_config = config.scoring.clone().unwrap_or_default();
    println!("{}", waterscore::output::format_limits(&scoring_config));
}

fn run_init(config_path: Option<PathBuf>) {
    match waterscore::config::write_starter_config(config_path) {
        Ok(path) => println!("Config written to {}", path.display()),
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    }
}
