//! Gamma-neighborhoods and their reduction statistics, derived from the
//! scalar transform and the bounded search kernel.

use rayon::prelude::*;

use crate::edgelist::{EdgeList, VertexId};
use crate::error::{NetError, Result};
use crate::scalar::{self, ScalarTable};
use crate::search::{self, Dtv};

/// Global max-abs weight over every edge in `l`. Zero for an empty graph.
pub fn kappa(l: &EdgeList) -> f64 {
	l.all_edges().iter().map(|e| e.weight.abs()).fold(0.0, f64::max)
}

/// Max-abs weight over edges in `l` incident to `src` (either endpoint).
/// Zero if `src` has no incident edges.
pub fn mu(l: &EdgeList, src: VertexId) -> f64 {
	l.all_edges()
		.iter()
		.filter(|e| e.src == src || e.dest == src)
		.map(|e| e.weight.abs())
		.fold(0.0, f64::max)
}

/// The gamma-neighborhood of `src` on `g_tilde`: every vertex reachable
/// under the gamma-bounded admission predicate, keyed by distance pair.
///
/// If `src` is isolated in `l` (mu == 0), the neighborhood is defined to
/// be just `{src}`.
pub fn n_tilde_gamma(
	l: &EdgeList,
	g_tilde: &EdgeList,
	table: &ScalarTable,
	src: VertexId,
	gamma: f64,
) -> Result<Dtv> {
	let kappa_val = kappa(l);
	let mu_val = mu(l, src);
	if mu_val == 0.0 {
		let mut dtv = Dtv::new();
		dtv.insert(src, search::DistancePair { info_distance: 0.0, net_distance: 0 });
		return Ok(dtv);
	}
	let (max_approx_x, _) = table.max_approximation_threshold_w(kappa_val / (gamma * mu_val))?;
	Ok(search::gamma_bounded_search(g_tilde, src, kappa_val, mu_val, gamma, max_approx_x))
}

/// `S_avg(gamma)`: the mean cardinality of `n_tilde_gamma(s)` over every
/// `s` in `[0, max_vertex(l)]`, with an overflow warning logged (not
/// fatal) if the running sum crosses `1e300`.
pub fn s_avg_gamma(l: &EdgeList, g_tilde: &EdgeList, table: &ScalarTable, gamma: f64) -> Result<f64> {
	let dim = l.max_vertex();
	if dim < 0 {
		return Err(NetError::EmptyGraph);
	}
	let sizes: Vec<usize> = (0..=dim)
		.into_par_iter()
		.map(|s| n_tilde_gamma(l, g_tilde, table, s, gamma).map(|dtv| dtv.len()))
		.collect::<Result<Vec<usize>>>()?;

	let mut total = 0f64;
	for sz in &sizes {
		total += *sz as f64;
		if total > 1e300 {
			log::warn!("s_avg_gamma: running sum of neighborhood sizes exceeded 1e300");
		}
	}
	Ok(total / (dim + 1) as f64)
}

/// L-neighborhood reduction rate at `src`: `kappa / (v(max_distance) *
/// mu)`, where `max_distance` is the largest info-distance among the `L`
/// nearest vertices to `src` on `g_tilde`. Returns `+inf` if `src` is
/// isolated in `l`.
pub fn l_neighborhood_reduction_rate(
	l: &EdgeList,
	g_tilde: &EdgeList,
	ell: i64,
	src: VertexId,
) -> Result<f64> {
	let dtv = search::geodesic_distance_k(g_tilde, src, ell - 1);
	let mut distances: Vec<f64> = dtv.values().map(|p| p.info_distance).collect();
	distances.sort_by(|a, b| a.partial_cmp(b).unwrap());
	let idx = (ell - 1).max(0).min(distances.len() as i64 - 1) as usize;
	let max_distance = distances[idx];

	let kappa_val = kappa(l);
	let mu_val = mu(l, src);
	if mu_val == 0.0 {
		return Ok(f64::INFINITY);
	}

	match scalar::v(max_distance) {
		Ok(v) => {
			let res = kappa_val / (v * mu_val);
			if res.is_infinite() {
				log::warn!("L_neighborhood_reduction_rate resulted in infinity (kappa={}, v={}, mu={})", kappa_val, v, mu_val);
				Ok(0.0)
			} else {
				Ok(res)
			}
		}
		Err(_) => {
			log::warn!("L_neighborhood_reduction_rate: v(max_distance={}) overflowed", max_distance);
			Ok(0.0)
		}
	}
}

/// Arithmetic mean of [`l_neighborhood_reduction_rate`] over every source,
/// excluding `+inf` (isolated-vertex) contributions. Fails hard if every
/// source was excluded.
pub fn l_neighborhood_reduction_rate_average(l: &EdgeList, g_tilde: &EdgeList, ell: i64) -> Result<f64> {
	let dim = l.max_vertex();
	if dim < 0 {
		return Err(NetError::EmptyGraph);
	}
	let rates: Vec<f64> = (0..=dim)
		.into_par_iter()
		.map(|src| l_neighborhood_reduction_rate(l, g_tilde, ell, src))
		.collect::<Result<Vec<f64>>>()?;

	let mut total = 0f64;
	let mut count = 0usize;
	for &rate in &rates {
		if rate.is_finite() {
			total += rate;
			count += 1;
		}
	}
	if count == 0 {
		return Err(NetError::NoValidSamples);
	}
	if total.is_infinite() {
		panic!("l_neighborhood_reduction_rate_average: sum of finite contributions overflowed");
	}
	Ok(total / count as f64)
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::fixtures::manual_8_vertex_graph;
	use crate::laplacian::take_neg_laplacian;
	use crate::gtilde::neg_laplacian_to_g;

	fn manual_l_and_g() -> (EdgeList, EdgeList, ScalarTable) {
		let a = manual_8_vertex_graph();
		let l = take_neg_laplacian(&a);
		let table = ScalarTable::new();
		table.build_to(50.0);
		let g = neg_laplacian_to_g(&l, &table).unwrap();
		(l, g, table)
	}

	#[test]
	fn s_avg_gamma_is_finite_and_matches_mean_of_neighborhood_sizes() {
		let (l, g, table) = manual_l_and_g();
		let gamma = 0.05;
		let avg = s_avg_gamma(&l, &g, &table, gamma).unwrap();
		assert!(avg.is_finite());

		let dim = l.max_vertex();
		let sum: usize = (0..=dim).map(|s| n_tilde_gamma(&l, &g, &table, s, gamma).unwrap().len()).sum();
		let expected = sum as f64 / (dim + 1) as f64;
		assert!((avg - expected).abs() < 1e-9);
	}

	#[test]
	fn l_reduction_average_for_l_equals_one_matches_kappa_over_mu() {
		let (l, g, _table) = manual_l_and_g();
		let dim = l.max_vertex();
		let kappa_val = kappa(&l);
		let mut total = 0.0;
		let mut count = 0;
		for s in 0..=dim {
			let mu_val = mu(&l, s);
			if mu_val != 0.0 {
				total += kappa_val / mu_val;
				count += 1;
			}
		}
		let expected = total / count as f64;
		let actual = l_neighborhood_reduction_rate_average(&l, &g, 1).unwrap();
		assert!((actual - expected).abs() < 1e-6, "actual {} expected {}", actual, expected);
	}

	#[test]
	fn isolated_vertex_neighborhood_is_singleton_and_reduction_is_infinite() {
		let mut a = EdgeList::new(false);
		a.insert_edge(0, 1, 1.0);
		a.insert_edge(2, 2, 0.0); // vertex 2 present but isolated (no non-self edge)
		let l = take_neg_laplacian(&a);
		let table = ScalarTable::new();
		table.build_to(50.0);
		let g = neg_laplacian_to_g(&l, &table).unwrap();
		let dtv = n_tilde_gamma(&l, &g, &table, 2, 0.05).unwrap();
		assert_eq!(dtv.len(), 1);
		assert!(dtv.contains_key(&2));
		assert!(l_neighborhood_reduction_rate(&l, &g, 2, 2).unwrap().is_infinite());
	}
}
