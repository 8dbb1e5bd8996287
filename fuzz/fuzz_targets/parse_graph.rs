#![no_main]

use libfuzzer_sys::fuzz_target;

use roadnet::loader::parse_graph;

fuzz_target!(|input: &str| {
    if let Ok(records) = parse_graph(input) {
        let _ = records.into_graph();
    }
});
