//! Command-line front end: generate a random graph, run one search several
//! times, and report each result plus timing statistics.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hamiltonian_search::tabu::{SelectionStrategy, TabuConfig, TabuMatching};
use hamiltonian_search::{Graph, GraphConfig, RunStats, SearchResult, Solver};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// Exhaustive depth-first search
    Exhaustive,
    /// Tabu search growing branches by highest degree
    GreedyTabu,
    /// Tabu search growing branches at random
    RandomTabu,
}

/// Search random graphs for Hamiltonian paths.
#[derive(Parser)]
#[command(name = "hamiltonian")]
#[command(author, version)]
#[command(about = "Search random graphs for Hamiltonian paths")]
struct Cli {
    /// Number of nodes in the generated graph
    #[arg(short, long, default_value_t = 20)]
    nodes: usize,

    /// Upper bound for each node's edge budget (must be below --nodes)
    #[arg(short = 'e', long, default_value_t = 5)]
    max_edges: usize,

    /// Seed for graph generation and tabu search
    #[arg(long)]
    seed: Option<u64>,

    /// Search algorithm to run
    #[arg(short, long, value_enum, default_value_t = Algorithm::Exhaustive)]
    algorithm: Algorithm,

    /// How many times to repeat the search
    #[arg(short, long, default_value_t = 20)]
    runs: usize,

    /// Tabu iteration budget per run
    #[arg(short, long, default_value_t = 1000)]
    iterations: usize,

    /// Match tabu moves exactly instead of by substring
    #[arg(long)]
    exact_tabu: bool,

    /// Enable verbose output (debug logging)
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn run_once(solver: &Solver<'_>, cli: &Cli, run: usize) -> anyhow::Result<SearchResult> {
    let tabu = |strategy| {
        let matching = if cli.exact_tabu {
            TabuMatching::Exact
        } else {
            TabuMatching::Substring
        };
        let mut config = TabuConfig::default()
            .with_max_iterations(cli.iterations)
            .with_strategy(strategy)
            .with_matching(matching);
        if let Some(seed) = cli.seed {
            config = config.with_seed(seed.wrapping_add(run as u64));
        }
        solver.tabu(&config)
    };

    let result = match cli.algorithm {
        Algorithm::Exhaustive => solver.exhaustive_search(),
        Algorithm::GreedyTabu => tabu(SelectionStrategy::Greedy)?,
        Algorithm::RandomTabu => tabu(SelectionStrategy::Random)?,
    };
    Ok(result)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let mut graph_config = GraphConfig::new(cli.nodes).with_max_edges(cli.max_edges);
    if let Some(seed) = cli.seed {
        graph_config = graph_config.with_seed(seed);
    }

    info!(nodes = cli.nodes, max_edges = cli.max_edges, "generating graph");
    let graph = Graph::random(&graph_config).context("failed to generate graph")?;
    println!("{graph}");

    let solver = Solver::new(&graph);
    let mut elapsed = Vec::with_capacity(cli.runs);

    for run in 0..cli.runs {
        println!("Running {:?} search #{}...", cli.algorithm, run + 1);
        let result = run_once(&solver, &cli, run)
            .with_context(|| format!("search run #{} failed", run + 1))?;
        elapsed.push(result.elapsed);
        println!("Search completed. Results return:\n{result}\n");
    }

    if let Some(stats) = RunStats::from_durations(&elapsed) {
        println!("Search iteration ended\n{stats}");
    }
    Ok(())
}
