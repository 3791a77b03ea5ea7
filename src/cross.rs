//! Cross-pair driver.
//!
//! Fans `geodesic_distance_k`/`geodesic_distance_tau` out over every
//! source vertex on the `rayon` global pool. Each source's search only
//! reads the input graph and returns an owned `Dtv`, so `rayon`'s
//! `collect` over an indexed range already places each result at its
//! source index without any extra bookkeeping.

use rayon::prelude::*;

use crate::edgelist::EdgeList;
use crate::search::{self, Dbv};

pub fn cross_geodesic_distance_k(edges: &EdgeList, k: i64) -> Dbv {
	let dim = edges.max_vertex();
	if dim < 0 {
		return Dbv::new();
	}
	(0..=dim).into_par_iter().map(|src| (src, search::geodesic_distance_k(edges, src, k))).collect()
}

pub fn cross_geodesic_distance_tau(edges: &EdgeList, tau: f64) -> Dbv {
	let dim = edges.max_vertex();
	if dim < 0 {
		return Dbv::new();
	}
	(0..=dim).into_par_iter().map(|src| (src, search::geodesic_distance_tau(edges, src, tau))).collect()
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::fixtures::manual_8_vertex_graph;

	#[test]
	fn cross_k_has_one_entry_per_vertex_in_range() {
		let g = manual_8_vertex_graph();
		let dbv = cross_geodesic_distance_k(&g, 2);
		assert_eq!(dbv.len(), (g.max_vertex() + 1) as usize);
		for src in 0..=g.max_vertex() {
			assert!(dbv.contains_key(&src));
		}
	}

	#[test]
	fn cross_k_matches_single_source_call() {
		let g = manual_8_vertex_graph();
		let dbv = cross_geodesic_distance_k(&g, 2);
		let direct = search::geodesic_distance_k(&g, 1, 2);
		assert_eq!(dbv[&1], direct);
	}

	#[test]
	fn empty_graph_cross_search_is_empty() {
		let g = EdgeList::new(true);
		assert!(cross_geodesic_distance_k(&g, 3).is_empty());
		assert!(cross_geodesic_distance_tau(&g, 1.0).is_empty());
	}
}
