#![no_main]

use libfuzzer_sys::fuzz_target;

use roadnet::{
    infra::arbitrary::Query,
    loader::GraphRecords,
    prelude::*,
    Error, Point, VertexId,
};

fuzz_target!(|input: (GraphRecords, Vec<Query>)| {
    let (records, queries) = input;
    let graph = records.into_graph().unwrap();
    let n = graph.vertex_count();

    let vertex = |index: roadnet::infra::arbitrary::Index| index.get(n).map(VertexId::from_usize);

    for query in queries {
        match query {
            Query::Nearest { x, y } => {
                let query = Point::new(f64::from(x) / 100.0, f64::from(y) / 100.0);
                match graph.nearest_point(query) {
                    Ok(point) => assert!(graph.vertex_of(point).is_some()),
                    Err(error) => assert_eq!((error, n), (Error::EmptyGraph, 0)),
                }
            }
            Query::Connected(u, v) => {
                let (Some(u), Some(v)) = (vertex(u), vertex(v)) else {
                    continue;
                };
                let forward = graph.connected(graph[u], graph[v]).unwrap();
                let backward = graph.connected(graph[v], graph[u]).unwrap();
                assert_eq!(forward, backward);
            }
            Query::Route(u, v) => {
                let (Some(u), Some(v)) = (vertex(u), vertex(v)) else {
                    continue;
                };
                let (start, end) = (graph[u], graph[v]);
                match graph.route(start, end) {
                    Ok(route) if route.is_empty() => assert_eq!(start, end),
                    Ok(route) => {
                        assert_eq!(route.start(), Some(start));
                        assert_eq!(route.end(), Some(end));
                    }
                    Err(error) => {
                        assert_eq!(error, Error::NoRouteFound);
                        assert!(!graph.connected(start, end).unwrap());
                    }
                }
            }
        }
    }
});
