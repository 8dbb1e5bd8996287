use std::{io::Read, iter::Peekable, str::FromStr, str::SplitWhitespace};

use crate::{
    core::{error::BuildError, metric::Metric, point::Point},
    graph::{EdgeRecord, RoadGraph, VertexRecord},
    Haversine,
};

use super::LoadError;

// Upper bound on preallocation driven by the header, which is untrusted.
const MAX_PREALLOC: usize = 1 << 16;

/// Vertex and edge records of a graph as read from the input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphRecords {
    pub vertices: Vec<VertexRecord>,
    pub edges: Vec<EdgeRecord>,
}

impl GraphRecords {
    /// Builds a graph with the default metric.
    pub fn into_graph(self) -> Result<RoadGraph<Haversine>, BuildError> {
        self.into_graph_with(Haversine)
    }

    pub fn into_graph_with<M: Metric>(self, metric: M) -> Result<RoadGraph<M>, BuildError> {
        RoadGraph::from_records_with(metric, self.vertices, self.edges)
    }
}

struct Tokens<'a> {
    inner: Peekable<SplitWhitespace<'a>>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_whitespace().peekable(),
        }
    }

    fn next(&mut self, expected: &'static str) -> Result<&'a str, LoadError> {
        self.inner.next().ok_or(LoadError::UnexpectedEnd { expected })
    }

    fn parse<T: FromStr>(&mut self, expected: &'static str) -> Result<T, LoadError> {
        let token = self.next(expected)?;
        token.parse().map_err(|_| LoadError::InvalidNumber {
            token: token.to_owned(),
            expected,
        })
    }

    /// Consumes the next token if it is not an integer.
    fn next_if_not_integer(&mut self) -> Option<&'a str> {
        self.inner.next_if(|token| token.parse::<i64>().is_err())
    }
}

/// Parses the `.graph` format. See [module](super) documentation.
pub fn parse_graph(input: &str) -> Result<GraphRecords, LoadError> {
    let mut tokens = Tokens::new(input);

    let vertex_count: usize = tokens.parse("vertex count")?;
    let edge_count: usize = tokens.parse("edge count")?;

    let mut vertices = Vec::with_capacity(vertex_count.min(MAX_PREALLOC));
    for _ in 0..vertex_count {
        let name = tokens.next("vertex name")?;
        let x = tokens.parse("vertex coordinate")?;
        let y = tokens.parse("vertex coordinate")?;
        vertices.push(VertexRecord::new(name, Point::new(x, y)));
    }

    let mut edges = Vec::with_capacity(edge_count.min(MAX_PREALLOC));
    for _ in 0..edge_count {
        let from = tokens.parse("edge endpoint")?;
        let to = tokens.parse("edge endpoint")?;
        let name = tokens.next_if_not_integer().map(str::to_owned);
        edges.push(EdgeRecord { from, to, name });
    }

    tracing::debug!(
        vertices = vertices.len(),
        edges = edges.len(),
        "parsed graph records"
    );

    Ok(GraphRecords { vertices, edges })
}

/// Reads the whole input and parses it as the `.graph` format.
pub fn read_graph<R: Read>(mut reader: R) -> Result<GraphRecords, LoadError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_graph(&input)
}

/// Reads the `.graph` format and builds the graph with the given metric.
pub fn load_graph<M: Metric, R: Read>(reader: R, metric: M) -> Result<RoadGraph<M>, LoadError> {
    let graph = read_graph(reader)?.into_graph_with(metric)?;
    Ok(graph)
}
