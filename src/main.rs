//! Word Ladder - CLI
//!
//! Serves the shortest-ladder endpoint by default; the other subcommands
//! query the same dictionary from the terminal.

use anyhow::{Context, Result};
use clap::{Args, Command, FromArgMatches, Parser, Subcommand};
use std::sync::Arc;
use tracing::info;
use word_ladder::{
    commands::{
        BenchmarkConfig, SolveConfig, analyze_word, list_neighbors, run_benchmark, run_serve,
        solve_ladder,
    },
    dictionary::{Dictionary, DictionarySource, loader},
    ladder::SearchLimits,
    output::{
        print_analysis_result, print_benchmark_result, print_neighbors_result, print_solve_result,
    },
    service::{DEFAULT_HOST, DEFAULT_PORT, ServerConfig, config::default_workers},
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Shortest word ladders between dictionary words, over HTTP or the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'default' (embedded list) or path to a file, one word per line
    #[arg(
        short,
        long,
        global = true,
        env = "WORD_LADDER_DICTIONARY",
        default_value = "default"
    )]
    dictionary: DictionarySource,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default)
    Serve(ServeArgs),

    /// Find the shortest ladder between two words
    Solve {
        first: String,
        last: String,

        /// Print the HTTP response body instead of the ladder
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        limits: LimitArgs,
    },

    /// List the one-letter neighbors of a word
    Neighbors { word: String },

    /// Show how far the ladder graph reaches from a word
    Analyze { word: String },

    /// Solve random pairs and report timing and distances
    Benchmark {
        /// Number of pairs to solve
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Word length to sample (default: the most common length)
        #[arg(short, long)]
        length: Option<usize>,

        /// Seed for pair sampling
        #[arg(long, default_value = "42")]
        seed: u64,

        #[command(flatten)]
        limits: LimitArgs,
    },
}

#[derive(Args)]
struct ServeArgs {
    /// Interface to bind
    #[arg(long, env = "WORD_LADDER_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "WORD_LADDER_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Request worker threads (default: available cores)
    #[arg(short, long, env = "WORD_LADDER_WORKERS")]
    workers: Option<usize>,

    #[command(flatten)]
    limits: LimitArgs,
}

#[derive(Args, Clone, Copy)]
struct LimitArgs {
    /// Give up after this many steps
    #[arg(long)]
    max_depth: Option<usize>,

    /// Give up after discovering this many words
    #[arg(long)]
    max_visited: Option<usize>,
}

impl From<LimitArgs> for SearchLimits {
    fn from(args: LimitArgs) -> Self {
        Self {
            max_depth: args.max_depth,
            max_visited: args.max_visited,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let dictionary = load_dictionary(&cli.dictionary)?;

    // Default to serving if no command given
    let command = match cli.command {
        Some(command) => command,
        None => Commands::Serve(default_serve_args()?),
    };

    match command {
        Commands::Serve(args) => run_serve_command(args, dictionary),
        Commands::Solve {
            first,
            last,
            json,
            limits,
        } => run_solve_command(first, last, json, limits.into(), dictionary, cli.verbose),
        Commands::Neighbors { word } => {
            let result = list_neighbors(&word, &dictionary)?;
            print_neighbors_result(&result);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &dictionary)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark {
            count,
            length,
            seed,
            limits,
        } => {
            let config = BenchmarkConfig {
                count,
                length,
                seed,
                limits: limits.into(),
                progress: true,
            };
            println!("Running benchmark on {count} random pairs (seed {seed})...");
            let result = run_benchmark(&dictionary, &config)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

/// Load the dictionary once; every command shares it read-only
fn load_dictionary(source: &DictionarySource) -> Result<Arc<Dictionary>> {
    let (dictionary, _) =
        loader::load(source).with_context(|| format!("failed to load dictionary {source}"))?;
    Ok(Arc::new(dictionary))
}

/// Serve settings when no subcommand is given, still honoring the environment
fn default_serve_args() -> Result<ServeArgs> {
    let matches = ServeArgs::augment_args(Command::new("serve")).try_get_matches_from(["serve"])?;
    Ok(ServeArgs::from_arg_matches(&matches)?)
}

fn run_serve_command(args: ServeArgs, dictionary: Arc<Dictionary>) -> Result<()> {
    let config = ServerConfig {
        host: args.host,
        port: args.port,
        workers: args.workers.unwrap_or_else(default_workers),
        limits: args.limits.into(),
    };

    info!(address = %config.address(), "starting word ladder server");
    run_serve(&config, dictionary).context("server stopped")
}

fn run_solve_command(
    first: String,
    last: String,
    json: bool,
    limits: SearchLimits,
    dictionary: Arc<Dictionary>,
    verbose: bool,
) -> Result<()> {
    let config = SolveConfig {
        limits,
        ..SolveConfig::new(first, last)
    };
    let result = solve_ladder(config, dictionary)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result.response)?);
    } else {
        print_solve_result(&result, verbose);
    }
    Ok(())
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("word_ladder=debug,warn")
        } else {
            EnvFilter::new("word_ladder=info,warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
