//! Weighted multigraph container.
//!
//! `Edges`/`RevEdges` are ordered maps of ordered maps of weight sequences,
//! which gives deterministic ascending `(s, d)` iteration without an extra
//! sort step, mirroring the nested-map adjacency structure more directly
//! than a hash map would.

use std::collections::BTreeMap;

pub type VertexId = i64;

/// A single recorded `(src, dest, weight)` triple.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
	pub src: VertexId,
	pub dest: VertexId,
	pub weight: f64,
}

/// Weighted multigraph: a forward and a reverse adjacency, each a sparse
/// 2-D index of multi-valued weight buckets.
#[derive(Clone, Debug)]
pub struct EdgeList {
	edges: BTreeMap<VertexId, BTreeMap<VertexId, Vec<f64>>>,
	rev_edges: BTreeMap<VertexId, BTreeMap<VertexId, Vec<f64>>>,
	directional: bool,
}

impl Default for EdgeList {
	fn default() -> Self {
		EdgeList::new(false)
	}
}

impl EdgeList {
	pub fn new(directional: bool) -> Self {
		EdgeList { edges: BTreeMap::new(), rev_edges: BTreeMap::new(), directional }
	}

	pub fn is_directional(&self) -> bool {
		self.directional
	}

	pub fn set_directional(&mut self, directional: bool) {
		self.directional = directional;
	}

	/// Appends `weight` to the `(src, dest)` bucket, mirroring it into
	/// `RevEdges[dest][src]`. Not deduplicating: repeated calls append.
	pub fn insert_edge(&mut self, src: VertexId, dest: VertexId, weight: f64) {
		self.edges.entry(src).or_default().entry(dest).or_default().push(weight);
		self.rev_edges.entry(dest).or_default().entry(src).push(weight);
	}

	/// Removes the entire weight sequence for `(src, dest)`, in both
	/// `Edges` and `RevEdges`. No-op if absent.
	pub fn rm_edge(&mut self, src: VertexId, dest: VertexId) {
		if let Some(row) = self.edges.get_mut(&src) {
			row.remove(&dest);
		}
		if let Some(row) = self.rev_edges.get_mut(&dest) {
			row.remove(&src);
		}
	}

	/// Flattens `Edges` into `(s, d, w)` records in `(s, d, insertion)`
	/// order. Reverse edges are never added here, even when undirected.
	pub fn all_edges(&self) -> Vec<Edge> {
		let mut out = Vec::new();
		for (&src, row) in &self.edges {
			for (&dest, weights) in row {
				for &weight in weights {
					out.push(Edge { src, dest, weight });
				}
			}
		}
		out
	}

	/// Same as [`EdgeList::all_edges`], but when undirected also emits each
	/// reverse-side record, so each physical weight appears twice.
	pub fn all_edges_duplicate_on_undirected(&self) -> Vec<Edge> {
		let mut out = self.all_edges();
		if !self.directional {
			for (&src, row) in &self.rev_edges {
				for (&dest, weights) in row {
					for &weight in weights {
						out.push(Edge { src, dest, weight });
					}
				}
			}
		}
		out
	}

	/// Forward out-edges from `src`; if undirected, also the reverse side
	/// at `src` (what points into `src`, treated as outgoing).
	pub fn edges_from(&self, src: VertexId) -> Vec<Edge> {
		let mut out = Vec::new();
		if let Some(row) = self.edges.get(&src) {
			for (&dest, weights) in row {
				for &weight in weights {
					out.push(Edge { src, dest, weight });
				}
			}
		}
		if !self.directional {
			if let Some(row) = self.rev_edges.get(&src) {
				for (&dest, weights) in row {
					for &weight in weights {
						out.push(Edge { src, dest, weight });
					}
				}
			}
		}
		out
	}

	/// Destinations reachable from `src` via forward and (if undirected)
	/// reverse adjacency. May contain duplicates.
	pub fn adjacent_vertices(&self, src: VertexId) -> Vec<VertexId> {
		let mut out = Vec::new();
		if let Some(row) = self.edges.get(&src) {
			out.extend(row.keys().copied());
		}
		if !self.directional {
			if let Some(row) = self.rev_edges.get(&src) {
				out.extend(row.keys().copied());
			}
		}
		out
	}

	/// All weights recorded under `Edges[src][dest]`, plus — if
	/// undirected — `RevEdges[src][dest]` (not `RevEdges[dest][src]`: this
	/// is the "all weights between src and dest, looking from src" fetch).
	pub fn edge_weights(&self, src: VertexId, dest: VertexId) -> Vec<f64> {
		let mut out = Vec::new();
		if let Some(row) = self.edges.get(&src) {
			if let Some(weights) = row.get(&dest) {
				out.extend(weights.iter().copied());
			}
		}
		if !self.directional {
			if let Some(row) = self.rev_edges.get(&src) {
				if let Some(weights) = row.get(&dest) {
					out.extend(weights.iter().copied());
				}
			}
		}
		out
	}

	/// The raw `Edges[src][dest]` bucket only, ignoring directionality —
	/// used by the g-tilde transform's explicit symmetric union.
	pub fn raw_forward_weights(&self, src: VertexId, dest: VertexId) -> &[f64] {
		self.edges.get(&src).and_then(|row| row.get(&dest)).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Max-absolute-value reduction of a weight bucket; this is the
	/// multigraph's implicit "take the weight of an edge" convention.
	pub fn max_abs_edge_weight(&self, src: VertexId, dest: VertexId) -> Option<f64> {
		self.edge_weights(src, dest).into_iter().map(f64::abs).fold(None, |acc, w| {
			Some(match acc {
				Some(m) if m >= w => m,
				_ => w,
			})
		})
	}

	/// Largest id among the top-level keys of `Edges` or `RevEdges`, or
	/// `-1` if empty.
	pub fn max_vertex(&self) -> VertexId {
		let max_fwd = self.edges.keys().next_back().copied();
		let max_rev = self.rev_edges.keys().next_back().copied();
		match (max_fwd, max_rev) {
			(Some(a), Some(b)) => a.max(b),
			(Some(a), None) => a,
			(None, Some(b)) => b,
			(None, None) => -1,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.max_vertex() < 0
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::fixtures::manual_8_vertex_graph;

	#[test]
	fn mirror_consistency_after_inserts_and_removes() {
		let mut g = EdgeList::new(true);
		g.insert_edge(0, 1, 1.0);
		g.insert_edge(0, 1, 2.0);
		g.insert_edge(2, 1, 5.0);
		assert_eq!(g.edge_weights(0, 1), vec![1.0, 2.0]);
		assert_eq!(g.raw_forward_weights(0, 1), &[1.0, 2.0]);
		g.rm_edge(0, 1);
		assert!(g.edge_weights(0, 1).is_empty());
		assert!(g.raw_forward_weights(0, 1).is_empty());
		// (2,1) untouched
		assert_eq!(g.edge_weights(2, 1), vec![5.0]);
	}

	#[test]
	fn empty_graph_max_vertex_is_minus_one() {
		let g = EdgeList::new(false);
		assert_eq!(g.max_vertex(), -1);
		assert!(g.is_empty());
	}

	#[test]
	fn self_loop_present_in_edges_from() {
		let mut g = EdgeList::new(true);
		g.insert_edge(3, 3, 0.5);
		let es = g.edges_from(3);
		assert_eq!(es.len(), 1);
		assert_eq!(es[0].dest, 3);
	}

	#[test]
	fn multi_edge_weight_reduction_is_max_abs() {
		let mut g = EdgeList::new(true);
		g.insert_edge(1, 2, 0.3);
		g.insert_edge(1, 2, -0.9);
		assert_eq!(g.max_abs_edge_weight(1, 2), Some(0.9));
	}

	#[test]
	fn manual_graph_max_vertex_is_eight() {
		let g = manual_8_vertex_graph();
		assert_eq!(g.max_vertex(), 8);
	}

	#[test]
	fn undirected_edges_from_includes_reverse_side() {
		let g = manual_8_vertex_graph();
		let neighbors: Vec<_> = g.edges_from(1).into_iter().map(|e| e.dest).collect();
		// 1 has forward edges to 2 and 5, and is a destination of 7->1 and 4->1
		assert!(neighbors.contains(&2));
		assert!(neighbors.contains(&5));
		assert!(neighbors.contains(&7));
		assert!(neighbors.contains(&4));
	}
}
