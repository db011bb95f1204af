use std::fmt;

use serde::{Serialize, Serializer};

use crate::graphs::{Distance, VertexId, UNREACHABLE};

/// Distances from one source to every vertex of the graph, indexed by vertex
/// id. Unreachable vertices hold [`UNREACHABLE`] and serialize as `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DistanceTable {
    source: VertexId,
    #[serde(serialize_with = "serialize_distances")]
    distances: Vec<Distance>,
}

fn serialize_distances<S: Serializer>(distances: &[Distance], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(
        distances
            .iter()
            .map(|&distance| Some(distance).filter(|&distance| distance != UNREACHABLE)),
    )
}

impl DistanceTable {
    /// Every vertex unreachable except `source`, which is at 0.
    pub(crate) fn new(number_of_vertices: u32, source: VertexId) -> Self {
        let mut distances = vec![UNREACHABLE; number_of_vertices as usize];
        distances[source as usize] = 0;
        DistanceTable { source, distances }
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// `None` if `vertex` is unreachable or outside of the table.
    pub fn get(&self, vertex: VertexId) -> Option<Distance> {
        self.distances
            .get(vertex as usize)
            .copied()
            .filter(|&distance| distance != UNREACHABLE)
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.get(vertex).is_some()
    }

    pub fn number_of_reachable(&self) -> usize {
        self.distances
            .iter()
            .filter(|&&distance| distance != UNREACHABLE)
            .count()
    }

    /// Raw distances, [`UNREACHABLE`] included.
    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (VertexId, Option<Distance>)> + '_ {
        self.distances.iter().enumerate().map(|(vertex, &distance)| {
            (
                vertex as VertexId,
                Some(distance).filter(|&distance| distance != UNREACHABLE),
            )
        })
    }

    pub(crate) fn get_raw(&self, vertex: VertexId) -> Distance {
        self.distances[vertex as usize]
    }

    /// Lowers the distance of `vertex` if `distance` is smaller.
    pub(crate) fn relax(&mut self, vertex: VertexId, distance: Distance) {
        let current = &mut self.distances[vertex as usize];
        if distance < *current {
            *current = distance;
        }
    }
}

impl fmt::Display for DistanceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shortest distance from node {}:", self.source)?;
        for (vertex, distance) in self.iter() {
            match distance {
                Some(distance) => write!(f, "\n{}: {}", vertex, distance)?,
                None => write!(f, "\n{}: unreachable", vertex)?,
            }
        }
        Ok(())
    }
}
