use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use query_manager_core::QueryRegistry;
use query_manager_files::RegistryLoader;

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "query-manager")]
#[command(about = "Extract and look up SQL query templates from marked SQL files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the query identifiers extracted from the inputs.
    List(ListArgs),
    /// Print a single query, optionally with parameters substituted.
    Get(GetArgs),
    /// Print the whole identifier-to-query mapping.
    Dump(DumpArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Template files and/or directories containing *.sql files.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

#[derive(Debug, Args)]
struct GetArgs {
    /// Dotted query identifier (e.g. users.getAll).
    key: String,
    /// Template files and/or directories containing *.sql files.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Substitution parameter as name=value (repeatable).
    #[arg(long = "param", value_name = "NAME=VALUE")]
    params: Vec<String>,
}

#[derive(Debug, Args)]
struct DumpArgs {
    /// Template files and/or directories containing *.sql files.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::List(args) => run_list(args),
        Command::Get(args) => run_get(args),
        Command::Dump(args) => run_dump(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_list(args: ListArgs) -> Result<(), String> {
    let registry = load_inputs(&args.inputs)?;
    let mut keys: Vec<&str> = registry.keys().collect();
    keys.sort_unstable();
    for key in keys {
        println!("{key}");
    }
    Ok(())
}

fn run_get(args: GetArgs) -> Result<(), String> {
    let registry = load_inputs(&args.inputs)?;
    let query = if args.params.is_empty() {
        registry
            .get(&args.key)
            .map_err(|err| err.to_string())?
            .to_string()
    } else {
        let params = parse_param_pairs(&args.params)?;
        registry
            .get_with(&args.key, &params)
            .map_err(|err| err.to_string())?
    };
    println!("{query}");
    Ok(())
}

fn run_dump(args: DumpArgs) -> Result<(), String> {
    let registry = load_inputs(&args.inputs)?;
    // BTreeMap keeps dump output stable across runs.
    let mapping: BTreeMap<&str, &str> = registry.entries().collect();

    let rendered = match args.format {
        CliOutputFormat::Json => serde_json::to_string_pretty(&mapping)
            .map_err(|err| format!("failed to serialize mapping: {err}"))?,
        CliOutputFormat::Yaml => serde_yaml::to_string(&mapping)
            .map_err(|err| format!("failed to serialize mapping: {err}"))?,
    };
    println!("{rendered}");
    Ok(())
}

fn load_inputs(inputs: &[PathBuf]) -> Result<QueryRegistry, String> {
    let mut loader = RegistryLoader::new();
    for input in inputs {
        if input.is_dir() {
            loader = loader.from_dir(input);
        } else {
            loader = loader.from_file(input);
        }
    }
    loader
        .build()
        .map_err(|err| format!("failed to load templates: {err}"))
}

fn parse_param_pairs(pairs: &[String]) -> Result<HashMap<String, String>, String> {
    let mut params = HashMap::new();
    for pair in pairs {
        let Some((name, value)) = pair.split_once('=') else {
            return Err(format!("invalid --param '{pair}': expected NAME=VALUE"));
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(format!("invalid --param '{pair}': empty name"));
        }
        params.insert(name.to_string(), value.to_string());
    }
    Ok(params)
}
