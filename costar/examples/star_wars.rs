//! Loads the bundled Episode IV interaction network and prints the headline
//! centrality rankings.
//!
//! Run with `cargo run --example star_wars`; set `RUST_LOG=costar=debug` to
//! see the algorithm entries.

use costar::{
    algorithms::{
        centrality::{
            betweenness::betweenness_centrality, closeness_centrality::closeness_centrality,
            degree_centrality::degree_centrality,
        },
        metrics::density::graph_density,
        pathing::dijkstra::dijkstra_single_source_shortest_paths,
    },
    datasets::star_wars::star_wars_graph,
    errors::GraphError,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), GraphError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("costar=debug")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let graph = star_wars_graph();
    println!(
        "Episode IV: {} characters, {} relationships, density {:.3}",
        graph.count_nodes(),
        graph.count_edges(),
        graph_density(&graph)
    );

    let strength = degree_centrality(&graph)?;
    println!("\nMost scenes shared:");
    for (node, value) in strength.top_k(5, false, true) {
        println!("  {:<12} {:>6.1}", node.name(), value);
    }

    let betweenness = betweenness_centrality(&graph, true)?;
    println!("\nBiggest go-betweens:");
    for (node, value) in betweenness.top_k(5, false, true) {
        println!("  {:<12} {:>6.3}", node.name(), value);
    }

    let closeness = closeness_centrality(&graph)?;
    println!("\nClosest to the rest of the cast:");
    for (node, value) in closeness.top_k(5, false, true) {
        println!("  {:<12} {:>6.3}", node.name(), value);
    }

    let paths = dijkstra_single_source_shortest_paths(&graph, "JABBA", vec!["DODONNA"])?;
    if let Some((cost, path)) = paths.get("DODONNA") {
        println!("\nJABBA reaches DODONNA at cost {cost} through {path:?}");
    }

    Ok(())
}
