use crate::graphs::VertexId;

/// Visited flags of a single search, sized to the graph.
pub struct VertexExpandedDataVec {
    expanded: Vec<bool>,
    number_of_expanded: usize,
}

impl VertexExpandedDataVec {
    pub fn new(number_of_vertices: u32) -> Self {
        VertexExpandedDataVec {
            expanded: vec![false; number_of_vertices as usize],
            number_of_expanded: 0,
        }
    }

    /// Marks `vertex` as expanded. Expanding it again is a no-op.
    pub fn expand(&mut self, vertex: VertexId) {
        if !self.expanded[vertex as usize] {
            self.expanded[vertex as usize] = true;
            self.number_of_expanded += 1;
        }
    }

    pub fn is_expanded(&self, vertex: VertexId) -> bool {
        self.expanded[vertex as usize]
    }

    pub fn all_expanded(&self) -> bool {
        self.number_of_expanded == self.expanded.len()
    }

    pub fn number_of_unexpanded(&self) -> usize {
        self.expanded.len() - self.number_of_expanded
    }

    /// Expanded vertices in ascending order.
    pub fn expanded(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.expanded
            .iter()
            .enumerate()
            .filter(|(_, &is_expanded)| is_expanded)
            .map(|(vertex, _)| vertex as VertexId)
    }
}
