use std::io::{BufRead, BufReader, Read};

use rustc_hash::FxHashMap;

use crate::core::point::Point;

use super::LoadError;

/// Lookup table from city names to their coordinates.
#[derive(Debug, Clone, Default)]
pub struct Cities {
    by_name: FxHashMap<String, Point>,
}

impl Cities {
    /// Coordinates of the city, looked up by `"city state"`.
    pub fn get(&self, name: &str) -> Option<Point> {
        self.by_name.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Point)> + '_ {
        self.by_name
            .iter()
            .map(|(name, point)| (name.as_str(), *point))
    }

    fn insert_line(&mut self, line_no: usize, line: &str) {
        if line.trim().is_empty() {
            return;
        }

        match parse_city(line) {
            Some((name, point)) => {
                // Later records win.
                self.by_name.insert(name, point);
            }
            None => {
                tracing::warn!(line = line_no, "skipping malformed city record");
            }
        }
    }
}

fn parse_city(line: &str) -> Option<(String, Point)> {
    let mut fields = line.split(',');

    let city = fields.next()?;
    let state = fields.next()?;
    let x = fields.next()?.trim().parse().ok()?;
    let y = fields.next()?.trim().parse().ok()?;

    Some((format!("{city} {state}"), Point::new(x, y)))
}

/// Parses a city table. Malformed lines are skipped.
pub fn parse_cities(input: &str) -> Cities {
    let mut cities = Cities::default();

    for (index, line) in input.lines().enumerate() {
        cities.insert_line(index + 1, line);
    }

    cities
}

/// Reads a city table line by line. Malformed lines are skipped, only a
/// failure of the reader is an error.
pub fn read_cities<R: Read>(reader: R) -> Result<Cities, LoadError> {
    let mut cities = Cities::default();

    for (index, line) in BufReader::new(reader).lines().enumerate() {
        cities.insert_line(index + 1, &line?);
    }

    tracing::debug!(cities = cities.len(), "read city table");

    Ok(cities)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Raleigh,NC,35.7796,-78.6382
Durham,NC,35.9940,-78.8986,extra,fields

city,state,lat,lon
Portland,OR,45.5152,-122.6784
Portland,ME,43.6591,-70.2568
Broken,XX,12.0
";

    #[test]
    fn parse_sample() {
        let cities = parse_cities(SAMPLE);

        assert_eq!(cities.len(), 4);
        assert_eq!(cities.get("Raleigh NC"), Some(Point::new(35.7796, -78.6382)));
        assert_eq!(cities.get("Durham NC"), Some(Point::new(35.9940, -78.8986)));
        assert_eq!(cities.get("Portland ME"), Some(Point::new(43.6591, -70.2568)));
        assert!(cities.contains("Portland OR"));
        assert!(!cities.contains("city state"));
        assert!(!cities.contains("Broken XX"));
    }

    #[test]
    fn later_record_wins() {
        let cities = parse_cities("A,B,1,2\nA,B,3,4\n");

        assert_eq!(cities.len(), 1);
        assert_eq!(cities.get("A B"), Some(Point::new(3.0, 4.0)));
    }

    #[test]
    fn read_matches_parse() {
        let read = read_cities(SAMPLE.as_bytes()).unwrap();
        let parsed = parse_cities(SAMPLE);

        let mut read = read.iter().collect::<Vec<_>>();
        let mut parsed = parsed.iter().collect::<Vec<_>>();
        read.sort_by(|a, b| a.0.cmp(b.0));
        parsed.sort_by(|a, b| a.0.cmp(b.0));

        assert_eq!(read, parsed);
    }

    #[test]
    fn empty() {
        assert!(parse_cities("").is_empty());
    }
}
