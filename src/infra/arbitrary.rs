use arbitrary::{Arbitrary, Unstructured};

use crate::{
    core::Point,
    graph::{EdgeRecord, VertexRecord},
    loader::GraphRecords,
};

const MAX_VERTICES: u16 = 256;

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }
}

/// A query against a road graph, with vertices addressed by [`Index`] modulo
/// the vertex count.
#[derive(Debug, Arbitrary, Clone, Copy)]
pub enum Query {
    Nearest { x: i16, y: i16 },
    Connected(Index, Index),
    Route(Index, Index),
}

impl<'a> Arbitrary<'a> for GraphRecords {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let vertex_count = usize::from(u.int_in_range(0..=MAX_VERTICES)?);

        let mut vertices = Vec::with_capacity(vertex_count);
        for index in 0..vertex_count {
            // Tenths of a degree keep the coordinates in the valid range and
            // make coincident vertices likely.
            let x = f64::from(u.int_in_range(-900i16..=900)?) / 10.0;
            let y = f64::from(u.int_in_range(-1800i16..=1800)?) / 10.0;
            vertices.push(VertexRecord::new(format!("v{index}"), Point::new(x, y)));
        }

        let mut edges = Vec::new();
        if vertex_count > 0 {
            for pair in u.arbitrary_iter::<(Index, Index)>()? {
                let (from, to) = pair?;
                edges.push(EdgeRecord::new(
                    from.0 % vertex_count,
                    to.0 % vertex_count,
                ));
            }
        }

        Ok(Self { vertices, edges })
    }
}
