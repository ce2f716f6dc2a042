use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tp_app::{AppError, AppResult, list_providers, load_network, summarize, validate_network};
use tp_topology::{PathResult, PolicyRegistry};

#[derive(Parser)]
#[command(name = "tp-cli")]
#[command(about = "TrustPath CLI - Federation trust path inspection tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a network file and its topology
    Validate {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
    },
    /// List providers and the providers they trust
    Providers {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
    },
    /// Compute the trust path between two providers
    Path {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
        /// Provider the request originates at
        source: String,
        /// The user's home provider
        target: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { network_path } => cmd_validate(&network_path),
        Commands::Providers { network_path } => cmd_providers(&network_path),
        Commands::Path {
            network_path,
            source,
            target,
            json,
        } => cmd_path(&network_path, &source, &target, json),
    }
}

fn cmd_validate(network_path: &Path) -> AppResult<()> {
    println!("Validating network: {}", network_path.display());
    let graph = load_network(network_path)?;
    let registry = PolicyRegistry::default();
    let summary = summarize(&graph, &registry);

    println!(
        "  {} ({}): {} providers, {} trust edges",
        summary.network_id, summary.topology_type, summary.provider_count, summary.edge_count
    );
    if let Some(version) = &summary.version {
        println!("  registry version: {}", version);
    }
    if !summary.hubs.is_empty() {
        println!("  hubs: {}", summary.hubs.join(", "));
    }
    if summary.has_cycle {
        println!("  note: trust graph contains a cycle");
    }

    validate_network(&graph, &registry)?;
    println!("✓ Network is valid");
    Ok(())
}

fn cmd_providers(network_path: &Path) -> AppResult<()> {
    let graph = load_network(network_path)?;
    let providers = list_providers(&graph);

    if providers.is_empty() {
        println!("No providers found in network");
    } else {
        println!("Providers in {}:", graph.network_id());
        for provider in providers {
            let trusts = if provider.trusts.is_empty() {
                "-".to_string()
            } else {
                provider.trusts.join(", ")
            };
            println!(
                "  {} [{}] {} -> {}",
                provider.id, provider.role, provider.issuer, trusts
            );
        }
    }
    Ok(())
}

fn cmd_path(network_path: &Path, source: &str, target: &str, json: bool) -> AppResult<()> {
    let graph = load_network(network_path)?;
    let registry = PolicyRegistry::default();
    let policy = registry
        .for_graph(&graph)
        .ok_or_else(|| AppError::UnknownTopology(graph.topology_type().to_string()))?;

    tracing::debug!(
        network = graph.network_id(),
        policy = policy.topology_type(),
        "computing trust path"
    );
    let result = policy.trust_path(&graph, source, target);

    if json {
        let out = serde_json::to_string_pretty(&result)
            .map_err(|e| AppError::InvalidInput(format!("Failed to serialize result: {}", e)))?;
        println!("{}", out);
    } else {
        print_result(&result);
    }
    Ok(())
}

fn print_result(result: &PathResult) {
    if result.is_reachable() {
        let route: Vec<&str> = result.path().iter().map(|id| id.as_str()).collect();
        println!(
            "✓ {} -> {}: {} hop(s) via {}",
            result.source(),
            result.target(),
            result.hop_count(),
            route.join(" -> ")
        );
    } else {
        println!(
            "✗ {} -> {}: no trust path (deny)",
            result.source(),
            result.target()
        );
    }
}
