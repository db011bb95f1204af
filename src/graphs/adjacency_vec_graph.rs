use std::slice::Iter;

use serde::{Deserialize, Serialize};

use super::{
    number_of_adjacency_entries, validate_edges, Graph, TaillessWeightedEdge, VertexId,
    WeightedEdge,
};
use crate::error::GraphResult;

/// Graph that is optimized for cache efficency. All adjacency entries live in
/// one vector, `indices[vertex]` is the `(start, end)` range of its entries.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct AdjacencyVecGraph {
    edges: Vec<TaillessWeightedEdge>,
    indices: Vec<(u32, u32)>,
    directed: bool,
}

impl AdjacencyVecGraph {
    /// Same adjacency order as [`super::vec_vec_graph::VecVecGraph::from_edges`].
    #[tracing::instrument(skip(edges), fields(number_of_edges = edges.len()))]
    pub fn from_edges(
        number_of_vertices: u32,
        edges: &[WeightedEdge],
        directed: bool,
    ) -> GraphResult<AdjacencyVecGraph> {
        validate_edges(number_of_vertices, edges)?;
        // bounds every degree and offset below by u32::MAX
        let number_of_entries = number_of_adjacency_entries(edges.len(), directed)?;

        let entries: Vec<WeightedEdge> = if directed {
            edges.to_vec()
        } else {
            edges
                .iter()
                .flat_map(|edge| [*edge, edge.reversed()])
                .collect()
        };

        let mut degrees = vec![0u32; number_of_vertices as usize];
        for entry in &entries {
            degrees[entry.tail() as usize] += 1;
        }

        let mut indices = Vec::with_capacity(number_of_vertices as usize);
        let mut start = 0;
        for degree in degrees {
            indices.push((start, start + degree));
            start += degree;
        }

        // counting sort by tail, stable so insertion order survives
        let mut cursors: Vec<u32> = indices.iter().map(|&(start, _)| start).collect();
        let mut slots = vec![None; number_of_entries as usize];
        for entry in &entries {
            let cursor = &mut cursors[entry.tail() as usize];
            slots[*cursor as usize] = Some(entry.tailless());
            *cursor += 1;
        }
        let edges = slots.into_iter().flatten().collect();

        let graph = AdjacencyVecGraph {
            edges,
            indices,
            directed,
        };
        tracing::debug!(
            number_of_adjacency_entries = number_of_entries,
            "built adjacency vec graph"
        );
        Ok(graph)
    }
}

impl Graph for AdjacencyVecGraph {
    fn edges(&self, source: VertexId) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        struct OutEdgeIterator<'a> {
            source: VertexId,
            tailless_edge_iterator: Iter<'a, TaillessWeightedEdge>,
        }

        impl<'a> Iterator for OutEdgeIterator<'a> {
            type Item = WeightedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                let edge = self.tailless_edge_iterator.next()?;
                Some(edge.set_tail(self.source))
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.tailless_edge_iterator.size_hint()
            }
        }

        impl<'a> ExactSizeIterator for OutEdgeIterator<'a> {}

        let tailless_edge_iterator = self
            .indices
            .get(source as usize)
            .map(|&(start, end)| self.edges[start as usize..end as usize].iter())
            .unwrap_or_default();

        Box::new(OutEdgeIterator {
            source,
            tailless_edge_iterator,
        })
    }

    fn number_of_vertices(&self) -> u32 {
        self.indices.len() as u32
    }

    fn number_of_edges(&self) -> u32 {
        // at most u32::MAX, checked in from_edges
        self.edges.len() as u32
    }

    fn is_directed(&self) -> bool {
        self.directed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::GraphError, graphs::vec_vec_graph::VecVecGraph};

    fn sample_edges() -> Vec<WeightedEdge> {
        [
            (0, 2, 5),
            (0, 3, 1),
            (1, 2, 2),
            (2, 4, 2),
            (3, 1, 7),
            (4, 0, 5),
            (5, 4, 1),
            (5, 3, 4),
            (1, 5, 1),
            (1, 5, 3),
        ]
        .into_iter()
        .map(WeightedEdge::from)
        .collect()
    }

    #[test]
    fn matches_vec_vec_graph() {
        for directed in [true, false] {
            let compressed = AdjacencyVecGraph::from_edges(6, &sample_edges(), directed).unwrap();
            let nested = VecVecGraph::from_edges(6, &sample_edges(), directed).unwrap();

            assert_eq!(compressed.number_of_vertices(), nested.number_of_vertices());
            assert_eq!(compressed.number_of_edges(), nested.number_of_edges());
            for vertex in 0..6 {
                let compressed_edges: Vec<_> = compressed.edges(vertex).collect();
                let nested_edges: Vec<_> = nested.edges(vertex).collect();
                assert_eq!(compressed_edges, nested_edges);
                assert_eq!(compressed.edges(vertex).len(), compressed_edges.len());
            }
        }
    }

    #[test]
    fn undirected_entries_mirror_each_other() {
        let graph = AdjacencyVecGraph::from_edges(6, &sample_edges(), false).unwrap();
        for tail in 0..6 {
            for edge in graph.edges(tail) {
                assert!(graph
                    .edges(edge.head())
                    .any(|back| back.head() == tail && back.weight() == edge.weight()));
            }
        }
    }

    #[test]
    fn empty_graph() {
        let graph = AdjacencyVecGraph::from_edges(0, &[], true).unwrap();
        assert_eq!(graph.number_of_vertices(), 0);
        assert_eq!(graph.number_of_edges(), 0);
        assert_eq!(graph.edges(0).len(), 0);
    }

    #[test]
    fn out_of_range_endpoint_is_rejected() {
        assert!(matches!(
            AdjacencyVecGraph::from_edges(2, &[WeightedEdge::new(0, 2, 1)], false),
            Err(GraphError::InvalidEndpoint { head: 2, .. })
        ));
    }
}
