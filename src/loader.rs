//! Reading road networks and city tables from text.
//!
//! # The `.graph` format
//!
//! Whitespace separated tokens. The header holds the vertex count `n` and the
//! edge count `m`. Then follow `n` vertex records `name x y` and `m` edge
//! records `from to [name]`, where `from` and `to` are zero-based indices into
//! the vertex list. The optional edge name is any token after the endpoint
//! pair that is not an integer.
//!
//! ```text
//! 3 2
//! raleigh 35.7796 -78.6382
//! durham 35.9940 -78.8986
//! greensboro 36.0726 -79.7920
//! 0 1 I-40
//! 1 2
//! ```
//!
//! # City tables
//!
//! One city per line, comma separated `city,state,latitude,longitude`, with
//! possibly more fields that are ignored. Cities are looked up by
//! `"city state"`.

use std::io;

use thiserror::Error;

use crate::core::error::BuildError;

mod cities;
mod graph_format;

pub use cities::{parse_cities, read_cities, Cities};
pub use graph_format::{load_graph, parse_graph, read_graph, GraphRecords};

/// The error encountered when loading a graph.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading input failed: {0}")]
    Io(#[from] io::Error),

    /// The input ended before all records announced in the header were read.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    /// A token could not be parsed as a number.
    #[error("invalid {expected} `{token}`")]
    InvalidNumber {
        token: String,
        expected: &'static str,
    },

    #[error("{0}")]
    Build(#[from] BuildError),
}
