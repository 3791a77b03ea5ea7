//! Plaintext edgelist file loader.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::edgelist::EdgeList;
use crate::error::Result;
use crate::io::format::format_weight;

/// Loads an edgelist in the `"src dest [weight]"` line format. Weighted
/// lines need all three fields; unweighted lines default weight to `1.0`.
/// Lines that don't parse are silently skipped.
pub fn edgelist_from_file(weighted: bool, path: impl AsRef<Path>) -> Result<EdgeList> {
	let file = File::open(path)?;
	let mut edges = EdgeList::new(true);
	for line in BufReader::new(file).lines() {
		let line = line?;
		if let Some((src, dest, weight)) = parse_line(weighted, &line) {
			edges.insert_edge(src, dest, weight);
		} else {
			log::trace!("skipping unparseable edgelist line: {:?}", line);
		}
	}
	Ok(edges)
}

/// Writes every edge in `edges` as `"src dest weight"` lines, weight in
/// scientific notation for round-trip fidelity.
pub fn write_edgelist_to_file(edges: &EdgeList, path: impl AsRef<Path>) -> Result<()> {
	let mut file = File::create(path)?;
	for e in edges.all_edges() {
		writeln!(file, "{} {} {}", e.src, e.dest, format_weight(e.weight))?;
	}
	Ok(())
}

fn parse_line(weighted: bool, line: &str) -> Option<(i64, i64, f64)> {
	let mut fields = line.split_whitespace();
	let src = fields.next()?.parse().ok()?;
	let dest = fields.next()?.parse().ok()?;
	if weighted {
		let weight = fields.next()?.parse().ok()?;
		Some((src, dest, weight))
	} else {
		Some((src, dest, 1.0))
	}
}
