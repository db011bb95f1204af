use clap::ValueEnum;
use graphs::{
    adjacency_vec_graph::AdjacencyVecGraph, vec_vec_graph::VecVecGraph, EdgeList, Graph,
};

pub mod error;
pub mod graphs;
pub mod search;
pub mod utility;

pub use error::{GraphError, GraphResult};

/// In-memory layout of the adjacency lists.
#[derive(Debug, ValueEnum, Clone, Copy, Default, PartialEq, Eq)]
pub enum GraphLayout {
    #[default]
    VecVec,
    AdjacencyVec,
}

pub fn build_graph(
    edge_list: &EdgeList,
    directed: bool,
    layout: GraphLayout,
) -> GraphResult<Box<dyn Graph>> {
    let graph: Box<dyn Graph> = match layout {
        GraphLayout::VecVec => Box::new(VecVecGraph::from_edges(
            edge_list.number_of_vertices,
            &edge_list.edges,
            directed,
        )?),
        GraphLayout::AdjacencyVec => Box::new(AdjacencyVecGraph::from_edges(
            edge_list.number_of_vertices,
            &edge_list.edges,
            directed,
        )?),
    };
    Ok(graph)
}
