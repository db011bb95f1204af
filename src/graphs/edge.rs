use serde::{Deserialize, Serialize};

use super::{VertexId, Weight};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord, Debug, Hash)]
pub struct WeightedEdge {
    tail: VertexId,
    head: VertexId,
    weight: Weight,
}

impl WeightedEdge {
    /// Self loops are allowed; they never shorten a distance.
    pub fn new(tail: VertexId, head: VertexId, weight: Weight) -> WeightedEdge {
        WeightedEdge { tail, head, weight }
    }

    pub fn tail(&self) -> VertexId {
        self.tail
    }

    pub fn head(&self) -> VertexId {
        self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn reversed(&self) -> WeightedEdge {
        WeightedEdge {
            tail: self.head,
            head: self.tail,
            weight: self.weight,
        }
    }

    pub fn tailless(&self) -> TaillessWeightedEdge {
        TaillessWeightedEdge {
            head: self.head,
            weight: self.weight,
        }
    }
}

impl From<(VertexId, VertexId, Weight)> for WeightedEdge {
    fn from((tail, head, weight): (VertexId, VertexId, Weight)) -> Self {
        WeightedEdge::new(tail, head, weight)
    }
}

/// One adjacency entry. The tail is implied by the collection owning it.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaillessWeightedEdge {
    head: VertexId,
    weight: Weight,
}

impl TaillessWeightedEdge {
    pub fn head(&self) -> VertexId {
        self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn set_tail(&self, tail: VertexId) -> WeightedEdge {
        WeightedEdge::new(tail, self.head, self.weight)
    }
}
