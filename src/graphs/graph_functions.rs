use itertools::Itertools;

use super::Graph;

/// Renders the adjacency lists, one vertex per line.
pub fn adjacency_listing(graph: &dyn Graph) -> String {
    let header = if graph.is_directed() {
        "Adjacency lists for directed graph:"
    } else {
        "Adjacency lists for undirected graph:"
    };

    let lines = (0..graph.number_of_vertices()).map(|tail| {
        let edges = graph
            .edges(tail)
            .map(|edge| format!("({} -> {} ({}))", tail, edge.head(), edge.weight()))
            .join("  ");
        format!("{}: {}", tail, edges).trim_end().to_string()
    });

    std::iter::once(header.to_string()).chain(lines).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::{vec_vec_graph::VecVecGraph, WeightedEdge};

    #[test]
    fn listing_of_directed_graph() {
        let edges = [WeightedEdge::new(0, 1, 3), WeightedEdge::new(0, 2, 4)];
        let graph = VecVecGraph::from_edges(3, &edges, true).unwrap();

        let expected = "Adjacency lists for directed graph:\n\
                        0: (0 -> 1 (3))  (0 -> 2 (4))\n\
                        1:\n\
                        2:";
        assert_eq!(adjacency_listing(&graph), expected);
    }

    #[test]
    fn listing_of_undirected_graph() {
        let graph = VecVecGraph::from_edges(2, &[WeightedEdge::new(1, 0, 8)], false).unwrap();
        let listing = adjacency_listing(&graph);
        assert!(listing.starts_with("Adjacency lists for undirected graph:"));
        assert!(listing.contains("0: (0 -> 1 (8))"));
        assert!(listing.contains("1: (1 -> 0 (8))"));
    }
}
