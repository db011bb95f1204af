use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use indicatif::ProgressBar;

use crate::{
    error::{GraphError, GraphResult},
    utility::get_progressbar,
};

pub mod adjacency_vec_graph;
pub mod edge;
pub mod graph_functions;
pub mod vec_vec_graph;

pub use edge::{TaillessWeightedEdge, WeightedEdge};

pub type VertexId = u32;
pub type Weight = u32;
pub type Distance = u64;

/// Distance of a vertex that has no path from the source.
pub const UNREACHABLE: Distance = Distance::MAX;

/// Read-only adjacency over the vertex universe `[0, number_of_vertices)`.
/// Implementations hold at most `u32::MAX` adjacency entries.
pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    fn number_of_edges(&self) -> u32 {
        (0..self.number_of_vertices())
            .map(|vertex| self.edges(vertex).len() as u32)
            .sum::<u32>()
    }

    fn is_directed(&self) -> bool;

    /// Outgoing edges of `source` in insertion order. Empty for vertices
    /// without outgoing edges and for vertices outside of the universe.
    fn edges(&self, source: VertexId)
        -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_>;
}

/// Edges together with the size of the universe they live in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeList {
    pub number_of_vertices: u32,
    pub edges: Vec<WeightedEdge>,
}

/// Fails on the first edge with an endpoint outside of `[0, number_of_vertices)`.
pub fn validate_edges(number_of_vertices: u32, edges: &[WeightedEdge]) -> GraphResult<()> {
    match edges
        .iter()
        .find(|edge| edge.tail() >= number_of_vertices || edge.head() >= number_of_vertices)
    {
        Some(edge) => Err(GraphError::InvalidEndpoint {
            tail: edge.tail(),
            head: edge.head(),
            number_of_vertices,
        }),
        None => Ok(()),
    }
}

/// Upper bound on the edge capacity reserved from an `.fmi` header.
const MAX_PREALLOCATED_EDGES: usize = 1 << 20;

/// Number of adjacency entries `number_of_edges` edges expand to. Entry
/// counts and offsets are stored as `u32`, so more than `u32::MAX` entries
/// are rejected.
pub fn number_of_adjacency_entries(number_of_edges: usize, directed: bool) -> GraphResult<u32> {
    let factor = if directed { 1 } else { 2 };
    number_of_edges
        .checked_mul(factor)
        .and_then(|entries| u32::try_from(entries).ok())
        .ok_or(GraphError::TooManyEdges {
            number_of_edges,
            directed,
        })
}

pub fn read_edges_from_fmi_file(file: &Path) -> GraphResult<EdgeList> {
    let reader = BufReader::new(File::open(file)?);
    let bar = get_progressbar("Reading edges", 0);
    let edge_list = parse_fmi_with_progress(reader, &bar);
    bar.finish_and_clear();
    edge_list
}

pub fn parse_fmi(reader: impl BufRead) -> GraphResult<EdgeList> {
    parse_fmi_with_progress(reader, &ProgressBar::hidden())
}

fn parse_fmi_with_progress(reader: impl BufRead, bar: &ProgressBar) -> GraphResult<EdgeList> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(index, line)| line.map(|line| (index + 1, line)));

    // skip comment lines and the blank line separating them from the header
    let mut last_line = 0;
    let mut next_content_line = || -> GraphResult<(usize, String)> {
        for line in lines.by_ref() {
            let (number, line) = line?;
            last_line = number;
            let trimmed = line.trim();
            if !trimmed.is_empty() && !trimmed.starts_with('#') {
                return Ok((number, trimmed.to_string()));
            }
        }
        Err(GraphError::Parse {
            line: last_line + 1,
            reason: "unexpected end of input".to_string(),
        })
    };

    let number_of_vertices: u32 = {
        let (number, line) = next_content_line()?;
        parse_field(&line, number, "number of vertices")?
    };
    let number_of_edges: usize = {
        let (number, line) = next_content_line()?;
        let number_of_edges = parse_field(&line, number, "number of edges")?;
        let number_of_lines = u64::try_from(number_of_edges)
            .ok()
            .and_then(|edges| edges.checked_add(number_of_vertices as u64))
            .ok_or_else(|| GraphError::Parse {
                line: number,
                reason: format!("edge count {} is too large", number_of_edges),
            })?;
        bar.set_length(number_of_lines);
        number_of_edges
    };

    for _ in 0..number_of_vertices {
        next_content_line()?;
        bar.inc(1);
    }

    // the header is untrusted, grow past this on demand
    let mut edges = Vec::with_capacity(number_of_edges.min(MAX_PREALLOCATED_EDGES));
    for _ in 0..number_of_edges {
        // srcIDX trgIDX cost [type maxspeed]
        let (number, line) = next_content_line()?;
        let mut values = line.split_whitespace();
        let mut next_value = |name: &str| {
            values.next().ok_or_else(|| GraphError::Parse {
                line: number,
                reason: format!("no {} found", name),
            })
        };
        let tail = parse_field(next_value("tail")?, number, "tail")?;
        let head = parse_field(next_value("head")?, number, "head")?;
        let weight = parse_field(next_value("weight")?, number, "weight")?;
        edges.push(WeightedEdge::new(tail, head, weight));
        bar.inc(1);
    }

    tracing::debug!(number_of_vertices, number_of_edges, "parsed fmi edge list");

    Ok(EdgeList {
        number_of_vertices,
        edges,
    })
}

fn parse_field<T: std::str::FromStr>(value: &str, line: usize, name: &str) -> GraphResult<T> {
    value.trim().parse().map_err(|_| GraphError::Parse {
        line,
        reason: format!("unable to parse {} from {:?}", name, value),
    })
}
