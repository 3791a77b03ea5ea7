//! Watts-Strogatz small-world network generator, used as a synthetic test
//! input for the CLI.

use rand::Rng;

use crate::edgelist::{EdgeList, VertexId};

/// Builds an undirected Watts-Strogatz small-world network: a circular
/// lattice of `size` vertices each connected to its `avg_deg/2` nearest
/// neighbors on both sides, then randomly rewired with probability
/// `rewiring_prob` per original edge.
pub fn generate(size: i64, avg_deg: i64, rewiring_prob: f64) -> EdgeList {
	assert!(size > 0, "network size must be positive");
	assert!(avg_deg > 0 && avg_deg % 2 == 0, "avg_deg must be a positive even number");
	assert!((0.0..=1.0).contains(&rewiring_prob), "rewiring_prob must be in [0, 1]");

	let mut edges = EdgeList::new(false);
	let mut rng = rand::thread_rng();

	for src in 0..size {
		for offset in 1..=avg_deg / 2 {
			let dest = (src + offset) % size;
			let weight = rng.gen_range(0.0..=1.0);
			edges.insert_edge(src, dest, weight);
		}
	}

	for src in 0..size {
		for offset in 1..=avg_deg / 2 {
			let dest_org = (src + offset) % size;
			let weight = rng.gen_range(0.0..=1.0);
			if rng.gen_range(0.0..=1.0) <= rewiring_prob {
				let new_dest = pick_rewire_target(&edges, &mut rng, src, size);
				edges.insert_edge(src, new_dest, weight);
				edges.rm_edge(src, dest_org);
			}
		}
	}

	edges
}

fn pick_rewire_target(edges: &EdgeList, rng: &mut impl Rng, src: VertexId, size: i64) -> VertexId {
	loop {
		let candidate = rng.gen_range(0..size);
		if candidate == src {
			continue;
		}
		if !edges.adjacent_vertices(src).contains(&candidate) {
			return candidate;
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn generates_an_undirected_network_of_requested_size() {
		let g = generate(20, 4, 0.1);
		assert!(!g.is_directional());
		assert_eq!(g.max_vertex(), 19);
	}

	#[test]
	fn zero_rewiring_keeps_the_circular_lattice() {
		let g = generate(10, 4, 0.0);
		for src in 0..10 {
			let neighbors = g.adjacent_vertices(src);
			assert!(neighbors.contains(&((src + 1) % 10)));
			assert!(neighbors.contains(&((src + 2) % 10)));
		}
	}

	#[test]
	#[should_panic]
	fn rejects_odd_avg_degree() {
		generate(10, 3, 0.1);
	}
}
