//! degrees CLI — how many co-authorship hops separate two scientists.
//!
//! Usage:
//!   degrees [--data dataset.json] [--json] [--max-degrees N] [SOURCE] [TARGET]
//!
//! Names left off the command line are prompted for on stdin.

use clap::Parser;
use coauthor_degrees::{
    Candidate, DegreesApi, Disambiguator, FileSource, GraphError, OpenSource, PathQuery, PersonId,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "degrees",
    version,
    about = "Degrees of separation between scientists through co-authored papers"
)]
struct Cli {
    /// Dataset file (.json, .yaml or .yml) with scientists, papers and authors
    #[arg(long, default_value = "dataset.json")]
    data: PathBuf,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
    /// Stop searching beyond this many hops
    #[arg(long)]
    max_degrees: Option<usize>,
    /// Log search details to stderr (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
    /// Name of the first scientist
    source: Option<String>,
    /// Name of the second scientist
    target: Option<String>,
}

/// Asks on the terminal which of several same-named scientists was meant
struct PromptDisambiguator;

impl Disambiguator for PromptDisambiguator {
    fn choose(&self, name: &str, candidates: &[Candidate]) -> Option<String> {
        println!("Which '{}'?", name);
        for candidate in candidates {
            println!("ID: {}, Name: {}", candidate.id, candidate.name);
        }
        prompt("Intended Scientist ID: ")
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Print `label` and read one line from stdin; `None` on EOF or read error
fn prompt(label: &str) -> Option<String> {
    print!("{}", label);
    io::stdout().flush().ok()?;
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}

fn resolve(api: &DegreesApi, given: Option<String>) -> Result<PersonId, i32> {
    let Some(name) = given.or_else(|| prompt("Name: ")) else {
        eprintln!("Scientist not found.");
        return Err(1);
    };
    match api.resolve_with(&name, &PromptDisambiguator) {
        Ok(id) => Ok(id),
        Err(
            GraphError::NameNotFound(_)
            | GraphError::NotACandidate(_)
            | GraphError::AmbiguousName { .. },
        ) => {
            eprintln!("Scientist not found.");
            Err(1)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            Err(1)
        }
    }
}

fn open_api(path: &Path) -> Result<DegreesApi, String> {
    let source = FileSource::open(path).map_err(|e| format!("Failed to open dataset: {}", e))?;
    DegreesApi::load(&source).map_err(|e| format!("Failed to load dataset: {}", e))
}

fn run(cli: Cli) -> i32 {
    println!("Loading data...");
    let api = match open_api(&cli.data) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    println!("Data loaded.");

    let source = match resolve(&api, cli.source) {
        Ok(id) => id,
        Err(code) => return code,
    };
    let target = match resolve(&api, cli.target) {
        Ok(id) => id,
        Err(code) => return code,
    };

    let mut query = PathQuery::between(source, target);
    if let Some(max) = cli.max_degrees {
        query = query.max_degrees(max);
    }

    let separation = match api.find_path(&query) {
        Ok(Some(separation)) => separation,
        Ok(None) => {
            println!("Not connected.");
            return 0;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&separation) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        }
    } else {
        println!("{}", separation);
    }
    0
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    std::process::exit(run(cli));
}
