//! orggraph - render Salesforce metadata dependencies as a graph
//!
//! Connects to an org's Tooling API, builds the dependency graph over its
//! metadata components, and prints it as DOT or JSON. With `--seed`, output
//! is restricted to the components reachable from the given ids.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use orggraph::models::ComponentType;
use orggraph::{GraphBuilder, NodeAttributes, RecordSource, SeedNode, ToolingApiSource};

/// Render Salesforce metadata dependencies as a graph
#[derive(Parser, Debug)]
#[command(name = "orggraph")]
#[command(about = "Render Salesforce metadata dependencies as a graph", long_about = None)]
struct Args {
    /// Org instance URL, e.g. https://myorg.my.salesforce.com
    #[arg(long)]
    instance_url: String,

    /// Environment variable holding the Tooling API access token
    #[arg(long, default_value = "SF_ACCESS_TOKEN")]
    token_env: String,

    /// Tooling API version
    #[arg(long, default_value = "56.0")]
    api_version: String,

    /// Output format
    #[arg(long, value_enum, default_value = "dot")]
    format: Format,

    /// Restrict output to components reachable from this id (repeatable)
    #[arg(long = "seed")]
    seeds: Vec<String>,

    /// Enable debug logging
    #[arg(long, short = 'd')]
    debug: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Dot,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    orggraph::cli::init_logging(args.debug);

    let source = ToolingApiSource::from_env(&args.instance_url, &args.token_env, &args.api_version)?;

    let builder = GraphBuilder::init(&source)
        .await
        .context("Failed to initialize graph builder")?;
    let records = source
        .dependency_records()
        .await
        .context("Failed to fetch dependency records")?;
    let mut graph = builder.build_graph(&records);

    if !args.seeds.is_empty() {
        let seeds: Vec<SeedNode> = args
            .seeds
            .iter()
            .map(|id| SeedNode {
                id: id.clone(),
                attributes: graph
                    .node_by_id(id)
                    .map(|node| node.attributes())
                    .unwrap_or_else(|| NodeAttributes {
                        name: id.clone(),
                        kind: ComponentType::new("Unknown"),
                        parent: String::new(),
                    }),
            })
            .collect();
        graph.run_dfs(&seeds);
    }

    match args.format {
        Format::Dot => println!("{}", graph.to_dot()),
        Format::Json => println!("{}", serde_json::to_string_pretty(&graph.to_export())?),
    }

    Ok(())
}
