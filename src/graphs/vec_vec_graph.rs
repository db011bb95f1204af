use serde::{Deserialize, Serialize};

use super::{
    number_of_adjacency_entries, validate_edges, Graph, TaillessWeightedEdge, VertexId,
    WeightedEdge,
};
use crate::error::GraphResult;

/// One growable vector of adjacency entries per vertex.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VecVecGraph {
    edges: Vec<Vec<TaillessWeightedEdge>>,
    directed: bool,
}

impl VecVecGraph {
    /// Builds the graph over `[0, number_of_vertices)`. Parallel edges are kept
    /// in insertion order. For undirected graphs every edge is also inserted
    /// reversed, right after the forward entry.
    #[tracing::instrument(skip(edges), fields(number_of_edges = edges.len()))]
    pub fn from_edges(
        number_of_vertices: u32,
        edges: &[WeightedEdge],
        directed: bool,
    ) -> GraphResult<VecVecGraph> {
        validate_edges(number_of_vertices, edges)?;
        let number_of_entries = number_of_adjacency_entries(edges.len(), directed)?;

        let mut graph = VecVecGraph {
            edges: vec![Vec::new(); number_of_vertices as usize],
            directed,
        };

        for edge in edges {
            graph.insert(edge);
            if !directed {
                graph.insert(&edge.reversed());
            }
        }

        tracing::debug!(
            number_of_adjacency_entries = number_of_entries,
            "built vec vec graph"
        );
        Ok(graph)
    }

    fn insert(&mut self, edge: &WeightedEdge) {
        self.edges[edge.tail() as usize].push(edge.tailless());
    }
}

impl Graph for VecVecGraph {
    fn number_of_vertices(&self) -> u32 {
        self.edges.len() as u32
    }

    fn number_of_edges(&self) -> u32 {
        // at most u32::MAX, checked in from_edges
        self.edges.iter().map(|edges| edges.len() as u32).sum()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn edges(&self, tail: VertexId) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        // Struct is needed as tail would otherwise not live long enough.
        struct EdgeIterator<'a> {
            edge_iter: std::slice::Iter<'a, TaillessWeightedEdge>,
            tail: VertexId,
        }

        impl<'a> Iterator for EdgeIterator<'a> {
            type Item = WeightedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                self.edge_iter
                    .next()
                    .map(|tailless_edge| tailless_edge.set_tail(self.tail))
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.edge_iter.size_hint()
            }
        }

        impl<'a> ExactSizeIterator for EdgeIterator<'a> {}

        let edge_iter = self
            .edges
            .get(tail as usize)
            .map(|edges| edges.iter())
            .unwrap_or_default();

        Box::new(EdgeIterator { edge_iter, tail })
    }
}
