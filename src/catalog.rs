//! Catalog files of candidate graphs.
//!
//! A catalog holds one graph per line. Two encodings are accepted and
//! auto-detected per line:
//!
//! - the comma-separated binary-matrix form also used on the command
//!   line (any line containing a comma, or consisting only of `0`/`1`
//!   digits);
//! - graph6, the format emitted by `geng` and friends: a header byte
//!   `n + 63` followed by the upper-triangle adjacency bits packed six
//!   per byte, each byte offset by 63. graph6 is undirected, so every
//!   decoded edge is stored in both directions.
//!
//! The two are disjoint: graph6 bytes are all in `63..=126`, so a
//! graph6 line can never look like a binary matrix. A malformed line is
//! fatal; there is no skip-and-continue mode.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::OutbreakError;
use crate::graph::{Graph, MAX_VERTICES};

/// Streaming reader over a catalog file.
///
/// Iteration yields decoded graphs; the first error aborts the scan.
pub struct Catalog {
    reader: BufReader<File>,
    line: usize,
}

impl Catalog {
    /// Open a catalog file for streaming.
    pub fn open(path: &Path) -> Result<Self, OutbreakError> {
        let file = File::open(path)?;
        Ok(Catalog {
            reader: BufReader::new(file),
            line: 0,
        })
    }

    /// Count the entries of a catalog (one full pass over the file).
    pub fn count_entries(path: &Path) -> Result<usize, OutbreakError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        let mut buf = String::new();
        let mut count = 0;
        loop {
            buf.clear();
            if reader.read_line(&mut buf)? == 0 {
                return Ok(count);
            }
            count += 1;
        }
    }
}

impl Iterator for Catalog {
    type Item = Result<Graph, OutbreakError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = String::new();
        match self.reader.read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line += 1;
                let line = buf.trim_end_matches(['\r', '\n']);
                Some(decode_entry(line).map_err(|e| OutbreakError::InvalidCatalogEntry {
                    line: self.line,
                    source: Box::new(e),
                }))
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}

/// Decode a single catalog line into a graph.
pub fn decode_entry(line: &str) -> Result<Graph, OutbreakError> {
    if line.contains(',') || line.bytes().all(|b| b == b'0' || b == b'1') {
        line.parse()
    } else {
        decode_graph6(line)
    }
}

/// Decode a graph6 string into a graph of at most 8 vertices.
pub fn decode_graph6(line: &str) -> Result<Graph, OutbreakError> {
    let bytes = line.as_bytes();
    let &header = bytes.first().ok_or_else(|| OutbreakError::MalformedGraph6 {
        reason: "empty line".to_string(),
    })?;
    if header == b'~' {
        // extended-size header: the graph has more than 62 vertices
        return Err(OutbreakError::MalformedGraph6 {
            reason: "extended-size header".to_string(),
        });
    }
    if !(63..=125).contains(&header) {
        return Err(OutbreakError::MalformedGraph6 {
            reason: format!("header byte {} out of range", header),
        });
    }

    let size = header - 63;
    if size > MAX_VERTICES {
        return Err(OutbreakError::SizeExceeded {
            size: size as usize,
        });
    }

    let pairs = size as usize * (size as usize - 1) / 2;
    let expected = (pairs + 5) / 6;
    let body = &bytes[1..];
    if body.len() != expected {
        return Err(OutbreakError::MalformedGraph6 {
            reason: format!("{} data bytes but expecting {}", body.len(), expected),
        });
    }
    for &b in body {
        if !(63..=126).contains(&b) {
            return Err(OutbreakError::MalformedGraph6 {
                reason: format!("data byte {} out of range", b),
            });
        }
    }

    // upper-triangle bits in column order: (0,1), (0,2), (1,2), (0,3), ...
    let mut g = Graph::new(size)?;
    let mut k = 0;
    for u in 1..size {
        for v in 0..u {
            let bit = (body[k / 6] - 63) >> (5 - k % 6) & 1;
            if bit != 0 {
                g.add_edge(v, u);
                g.add_edge(u, v);
            }
            k += 1;
        }
    }
    Ok(g)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;
    use std::path::PathBuf;

    fn write_catalog(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("outbreak-{}-{}", std::process::id(), name));
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_decode_matrix_entry() {
        let g = decode_entry("011,100,010").unwrap();
        assert_eq!(g.size(), 3);
        assert!(g.has_edge(0, 1));
        assert!(g.has_edge(2, 1));
        assert!(!g.has_edge(2, 0));
    }

    #[test]
    fn test_decode_single_vertex_matrix() {
        // no comma, but all binary digits: still the matrix form
        let g = decode_entry("0").unwrap();
        assert_eq!(g.size(), 1);
    }

    #[test]
    fn test_decode_graph6_k4() {
        // "C~" is the complete graph on 4 vertices
        let g = decode_entry("C~").unwrap();
        assert_eq!(g.size(), 4);
        for v in 0..4 {
            for u in 0..4 {
                assert_eq!(g.has_edge(v, u), v != u, "edge {} {}", v, u);
            }
        }
    }

    #[test]
    fn test_decode_graph6_triangle() {
        // "Bw" is the triangle
        let g = decode_graph6("Bw").unwrap();
        assert_eq!(g.size(), 3);
        for v in 0..3 {
            for u in 0..3 {
                assert_eq!(g.has_edge(v, u), v != u);
            }
        }
    }

    #[test]
    fn test_decode_graph6_path() {
        // "Bg" is the path 0-1-2
        let g = decode_graph6("Bg").unwrap();
        assert!(g.has_edge(0, 1) && g.has_edge(1, 0));
        assert!(g.has_edge(1, 2) && g.has_edge(2, 1));
        assert!(!g.has_edge(0, 2) && !g.has_edge(2, 0));
    }

    #[test]
    fn test_decode_graph6_too_large() {
        // header 'H' encodes 9 vertices
        match decode_graph6("H") {
            Err(OutbreakError::SizeExceeded { size: 9 }) => {}
            other => panic!("expected SizeExceeded, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_graph6_wrong_length() {
        match decode_graph6("B") {
            Err(OutbreakError::MalformedGraph6 { .. }) => {}
            other => panic!("expected MalformedGraph6, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_graph6_bad_byte() {
        match decode_graph6("B!") {
            Err(OutbreakError::MalformedGraph6 { .. }) => {}
            other => panic!("expected MalformedGraph6, got {:?}", other),
        }
    }

    #[test]
    fn test_count_and_stream() {
        let path = write_catalog("stream", "011,100,010\nBw\nC~\n");
        assert_eq!(Catalog::count_entries(&path).unwrap(), 3);

        let graphs: Result<Vec<_>, _> = Catalog::open(&path).unwrap().collect();
        let graphs = graphs.unwrap();
        assert_eq!(graphs.len(), 3);
        assert_eq!(graphs[0].size(), 3);
        assert_eq!(graphs[1].size(), 3);
        assert_eq!(graphs[2].size(), 4);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_bad_entry_reports_line() {
        let path = write_catalog("bad-line", "011,100,010\n011,1x0,010\n");
        let result: Result<Vec<_>, _> = Catalog::open(&path).unwrap().collect();
        match result {
            Err(OutbreakError::InvalidCatalogEntry { line: 2, source }) => {
                match *source {
                    OutbreakError::InvalidCharacter { ch: 'x' } => {}
                    other => panic!("unexpected source: {:?}", other),
                }
            }
            other => panic!("expected InvalidCatalogEntry, got {:?}", other),
        }
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("outbreak-does-not-exist");
        match Catalog::open(&path) {
            Err(OutbreakError::CatalogRead(_)) => {}
            other => panic!("expected CatalogRead, got {:?}", other.map(|_| ())),
        }
    }
}
