use keygraph::{Edge, Graph, Vertex};
use tracing::info;

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("Keygraph v{}", keygraph::version());
    println!("==========================================");
    println!();

    demo_edges();
    demo_integrity();
}

fn demo_edges() {
    println!("=== Demo 1: Edges ===");
    let mut graph: Graph<&str, u32> = Graph::new();
    graph.add_vertices([
        Vertex::of(30, "alice"),
        Vertex::of(25, "bob"),
        Vertex::of(35, "charlie"),
    ]);

    graph.add_edge(Edge::bidirectional("alice", "bob"));
    graph.add_edge(Edge::directional("alice", "charlie"));
    println!("✓ alice <-> bob");
    println!("✓ alice -> charlie");

    println!("\nLookups:");
    println!("  bob to alice: {:?}", graph.get_edge(&"bob", &"alice").map(ToString::to_string));
    println!("  charlie to alice: {:?}", graph.get_edge(&"charlie", &"alice").map(ToString::to_string));
    println!("  edges touching alice: {}", graph.get_edges(&"alice").len());

    println!("\n{}", graph);
}

fn demo_integrity() {
    println!("\n=== Demo 2: Referential Integrity ===");
    let mut graph = Graph::with_vertices([(0, "Teste0"), (1, "Teste1"), (2, "Teste2")]);

    let added = graph.add_edges([
        Edge::bidirectional(0, 1),
        Edge::bidirectional(1, 2),
        Edge::directional(2, 7),
    ]);
    info!(added, "Bulk edge load finished");
    println!("✓ Loaded {} of 3 edges (2 -> 7 has no vertex 7)", added);

    match graph.remove_vertex(&1) {
        Ok(vertex) => println!("✓ Removed vertex {} ({})", vertex.key(), vertex.content()),
        Err(e) => println!("✗ {}", e),
    }
    println!("  Remaining edges: {}", graph.edge_count());

    if let Err(e) = graph.remove_vertex(&1) {
        println!("✓ Second removal rejected: {}", e);
    }

    println!("\nGraph Statistics:");
    println!("  Total vertices: {}", graph.vertex_count());
    println!("  Total edges: {}", graph.edge_count());
}
