use super::collections::{
    distance_table::DistanceTable, vertex_expanded_data::VertexExpandedDataVec,
};
use crate::{
    error::{GraphError, GraphResult},
    graphs::{Distance, Graph, VertexId, UNREACHABLE},
};

/// Selection based Dijkstra without a priority queue. Each round expands one
/// vertex, relaxes its outgoing edges and then picks the closest unexpanded
/// head among the outgoing edges of all expanded vertices. O(N * E).
#[derive(Clone)]
pub struct Dijkstra<'a> {
    graph: &'a dyn Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a dyn Graph) -> Dijkstra<'a> {
        Dijkstra { graph }
    }

    #[tracing::instrument(skip(self), fields(number_of_vertices = self.graph.number_of_vertices()))]
    pub fn single_source(&self, source: VertexId) -> GraphResult<DistanceTable> {
        let number_of_vertices = self.graph.number_of_vertices();
        if source >= number_of_vertices {
            return Err(GraphError::InvalidSource {
                vertex: source,
                number_of_vertices,
            });
        }

        let mut distances = DistanceTable::new(number_of_vertices, source);
        let mut expanded = VertexExpandedDataVec::new(number_of_vertices);
        let mut current = source;

        loop {
            expanded.expand(current);
            self.relax_out_edges(current, &mut distances);

            if expanded.all_expanded() {
                break;
            }

            match self.select_next(&distances, &expanded) {
                Some(next) => {
                    tracing::trace!(vertex = next, distance = distances.get_raw(next), "selected");
                    current = next;
                }
                None => {
                    // remaining vertices have no path from the source
                    tracing::debug!(
                        unreachable = expanded.number_of_unexpanded(),
                        "no unexpanded vertex reachable, stopping early"
                    );
                    break;
                }
            }
        }

        Ok(distances)
    }

    fn relax_out_edges(&self, tail: VertexId, distances: &mut DistanceTable) {
        let distance_tail = distances.get_raw(tail);
        for edge in self.graph.edges(tail) {
            if let Some(alternative_distance_head) =
                distance_tail.checked_add(edge.weight() as Distance)
            {
                distances.relax(edge.head(), alternative_distance_head);
            }
        }
    }

    /// Closest unexpanded head over the out edges of all expanded vertices.
    /// Ties go to the first candidate in ascending tail and adjacency order.
    fn select_next(
        &self,
        distances: &DistanceTable,
        expanded: &VertexExpandedDataVec,
    ) -> Option<VertexId> {
        let mut best: Option<(Distance, VertexId)> = None;

        for edge in expanded.expanded().flat_map(|tail| self.graph.edges(tail)) {
            let head = edge.head();
            if expanded.is_expanded(head) {
                continue;
            }

            let distance_head = distances.get_raw(head);
            if distance_head == UNREACHABLE {
                continue;
            }

            if best.map_or(true, |(best_distance, _)| distance_head < best_distance) {
                best = Some((distance_head, head));
            }
        }

        best.map(|(_, vertex)| vertex)
    }
}

/// Distances from `source` to every vertex of `graph`.
pub fn shortest_paths(graph: &dyn Graph, source: VertexId) -> GraphResult<DistanceTable> {
    Dijkstra::new(graph).single_source(source)
}
