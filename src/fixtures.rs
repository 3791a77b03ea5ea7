//! Shared graph fixtures for unit tests.

#![cfg(test)]

use crate::edgelist::EdgeList;

/// An 8-vertex worked-example graph, undirected, with a known negative
/// Laplacian diagonal and known bounded-search results.
pub fn manual_8_vertex_graph() -> EdgeList {
	let mut g = EdgeList::new(false);
	for &(s, d, w) in &[
		(1, 2, 1.2), (2, 3, 0.7), (3, 4, 0.9), (4, 5, 0.1), (5, 6, 1.6),
		(6, 7, 1.3), (7, 1, 0.85), (1, 5, 0.7), (2, 6, 0.3), (3, 7, 0.8),
		(4, 1, 0.8), (5, 8, 1.6),
	] {
		g.insert_edge(s, d, w);
	}
	g
}

/// A star graph: center `0`, leaves `1..=leaves`, unit weights, undirected.
pub fn star_graph(leaves: i64) -> EdgeList {
	let mut g = EdgeList::new(false);
	for leaf in 1..=leaves {
		g.insert_edge(0, leaf, 1.0);
	}
	g
}
