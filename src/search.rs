//! Bounded shortest-path kernel.
//!
//! A single-source FIFO relaxation search, not Dijkstra: the admission
//! predicate prunes non-monotonically, so a vertex may be re-enqueued
//! whenever a strictly better or equally-good-but-fewer-hops path is
//! found.

use std::collections::{BTreeMap, HashSet, VecDeque};

use crate::edgelist::{EdgeList, VertexId};
use crate::scalar;

/// Relative tolerance for the improvement test: edge weights in g~ can be
/// extremely close after the inverse-v mapping, so strict `<` comparisons
/// on floats oscillate under rounding.
pub const RELATIVE_TOLERANCE: f64 = 1e-5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistancePair {
	pub info_distance: f64,
	pub net_distance: i64,
}

/// `dest_vertex -> distance_pair`, relative to an implicit source.
pub type Dtv = BTreeMap<VertexId, DistancePair>;
/// `src_vertex -> dtv`.
pub type Dbv = BTreeMap<VertexId, Dtv>;

/// Shared FIFO relaxation loop. `admit(from_net_distance, candidate_info,
/// candidate_net)` decides whether a candidate edge traversal is allowed
/// at all; the improvement test with tolerance then decides whether it's
/// actually better than what's currently known.
fn relax(edges: &EdgeList, src: VertexId, mut admit: impl FnMut(i64, f64, i64) -> bool) -> Dtv {
	let mut dtv: Dtv = BTreeMap::new();
	dtv.insert(src, DistancePair { info_distance: 0.0, net_distance: 0 });

	let mut queue: VecDeque<VertexId> = VecDeque::new();
	let mut in_queue: HashSet<VertexId> = HashSet::new();
	queue.push_back(src);
	in_queue.insert(src);

	while let Some(u) = queue.pop_front() {
		in_queue.remove(&u);
		let (from_info, from_net) = {
			let p = dtv[&u];
			(p.info_distance, p.net_distance)
		};

		for e in edges.edges_from(u) {
			if e.dest == u {
				continue; // self-loops are skipped
			}
			let cand_info = from_info + e.weight;
			let cand_net = from_net + 1;
			if !admit(from_net, cand_info, cand_net) {
				continue;
			}

			let (cur_info, cur_net) = dtv
				.get(&e.dest)
				.map(|p| (p.info_distance, p.net_distance))
				.unwrap_or((f64::INFINITY, i64::MAX));
			let tolerance = cand_info * RELATIVE_TOLERANCE;

			if cur_info - cand_info > tolerance {
				dtv.insert(e.dest, DistancePair { info_distance: cand_info, net_distance: cand_net });
				if in_queue.insert(e.dest) {
					queue.push_back(e.dest);
				}
			} else if (cur_info - cand_info).abs() <= tolerance && cur_net > cand_net {
				dtv.get_mut(&e.dest).unwrap().net_distance = cand_net;
				if in_queue.insert(e.dest) {
					queue.push_back(e.dest);
				}
			}
		}
	}

	dtv
}

/// k-bounded geodesic distance: admits a candidate edge iff the current
/// hop-count is strictly below `k` (so `cand_net <= k`).
pub fn geodesic_distance_k(edges: &EdgeList, src: VertexId, k: i64) -> Dtv {
	relax(edges, src, |from_net, _cand_info, _cand_net| from_net < k)
}

/// tau-bounded geodesic distance: admits a candidate edge iff its total
/// info-distance does not exceed `tau`.
pub fn geodesic_distance_tau(edges: &EdgeList, src: VertexId, tau: f64) -> Dtv {
	relax(edges, src, |_from_net, cand_info, _cand_net| cand_info <= tau)
}

/// gamma-bounded geodesic distance, used by the gamma-neighborhood:
/// admits a candidate edge iff it's still inside the table's
/// interpolation range, or the geometric test `kappa/v(cand) > gamma*mu`
/// holds. Rejects (rather than fails) if `v(cand_info)` would overflow.
pub fn gamma_bounded_search(
	g_tilde: &EdgeList,
	src: VertexId,
	kappa: f64,
	mu: f64,
	gamma: f64,
	max_approx_x: f64,
) -> Dtv {
	relax(g_tilde, src, |_from_net, cand_info, _cand_net| {
		if cand_info < max_approx_x {
			true
		} else if scalar::v_overflows(cand_info) {
			false
		} else {
			match scalar::v(cand_info) {
				Ok(v) => kappa / v > gamma * mu,
				Err(_) => false,
			}
		}
	})
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::fixtures::manual_8_vertex_graph;

	#[test]
	fn k_bounded_reaches_vertex_8_in_two_hops() {
		let g = manual_8_vertex_graph();
		let dtv = geodesic_distance_k(&g, 1, 2);
		let p8 = dtv.get(&8).expect("vertex 8 reachable within 2 hops via 1->5->8");
		assert!((p8.info_distance - 2.3).abs() < 1e-9);
		assert_eq!(p8.net_distance, 2);
	}

	#[test]
	fn k_bounded_respects_hop_cap() {
		let g = manual_8_vertex_graph();
		let dtv = geodesic_distance_k(&g, 1, 2);
		for (_, p) in &dtv {
			assert!(p.net_distance <= 2);
		}
	}

	#[test]
	fn tau_bounded_matches_spec_example() {
		let g = manual_8_vertex_graph();
		let dtv = geodesic_distance_tau(&g, 1, 1.0);
		assert_eq!(dtv.len(), 3);
		assert!((dtv[&1].info_distance - 0.0).abs() < 1e-9);
		assert!((dtv[&5].info_distance - 0.7).abs() < 1e-9);
		assert_eq!(dtv[&5].net_distance, 1);
		assert!((dtv[&7].info_distance - 0.85).abs() < 1e-9);
		assert_eq!(dtv[&7].net_distance, 1);
		assert!(!dtv.contains_key(&2), "1->2 costs 1.2 > tau=1.0");
	}

	#[test]
	fn tau_bounded_is_symmetric_on_undirected_graph() {
		let g = manual_8_vertex_graph();
		let from_1 = geodesic_distance_tau(&g, 1, 2.0);
		let from_5 = geodesic_distance_tau(&g, 5, 2.0);
		if let (Some(p15), Some(p51)) = (from_1.get(&5), from_5.get(&1)) {
			assert!((p15.info_distance - p51.info_distance).abs() < 1e-9);
		} else {
			panic!("expected mutual reachability within tau=2.0");
		}
	}

	#[test]
	fn single_self_loop_is_skipped() {
		let mut g = crate::edgelist::EdgeList::new(true);
		g.insert_edge(1, 1, 3.0);
		g.insert_edge(1, 2, 1.0);
		let dtv = geodesic_distance_k(&g, 1, 5);
		assert_eq!(dtv[&1].net_distance, 0);
		assert_eq!(dtv[&1].info_distance, 0.0);
		assert!(dtv.contains_key(&2));
	}

	#[test]
	fn empty_graph_search_returns_only_source() {
		let g = crate::edgelist::EdgeList::new(true);
		let dtv = geodesic_distance_k(&g, 0, 5);
		assert_eq!(dtv.len(), 1);
		assert_eq!(dtv[&0], DistancePair { info_distance: 0.0, net_distance: 0 });
	}
}
