//! g-tilde transform: maps the negative Laplacian back into an undirected
//! graph via the inverse of the scalar v/w mapping.

use rayon::prelude::*;

use crate::edgelist::{EdgeList, VertexId};
use crate::error::Result;
use crate::scalar::{self, ScalarTable, EPSILON};

/// Produces the undirected graph `g~` from `l` (expected to be the
/// negative Laplacian, though the transform works on any `EdgeList`).
///
/// For every unordered pair `(i, j)` (including `i == j`) with a non-empty
/// weight between them, emits `g = max(w(M / W(i,j)), epsilon)`, where `M`
/// is the global max-abs weight in `l` and `W(i,j)` is the max-abs weight
/// of the symmetric union `edge_weights(i,j) U edge_weights(j,i)`.
pub fn neg_laplacian_to_g(l: &EdgeList, table: &ScalarTable) -> Result<EdgeList> {
	let mut g = EdgeList::new(false);
	let dim = l.max_vertex();
	if dim < 0 {
		return Ok(g);
	}

	let m = l
		.all_edges()
		.iter()
		.map(|e| e.weight.abs())
		.fold(f64::NEG_INFINITY, f64::max);

	let pairs: Vec<(VertexId, VertexId)> =
		(0..=dim).flat_map(|i| (i..=dim).map(move |j| (i, j))).collect();

	let weighted: Vec<(VertexId, VertexId, f64)> = pairs
		.par_iter()
		.filter_map(|&(i, j)| {
			let mut weights = l.edge_weights(i, j);
			weights.extend(l.edge_weights(j, i));
			let w_ij = weights.into_iter().map(f64::abs).fold(None, |acc, w| {
				Some(match acc {
					Some(m) if m >= w => m,
					_ => w,
				})
			})?;
			if w_ij == 0.0 {
				// W(i,j) == 0 means y = M/W(i,j) would diverge; there is no
				// finite x with v(x) that large, so the floor applies directly.
				return Some(Ok((i, j, EPSILON)));
			}
			let y = m / w_ij;
			Some(table.w(y).map(|x| (i, j, x.max(EPSILON))))
		})
		.collect::<Result<Vec<_>>>()?;

	for &(i, j, gw) in &weighted {
		g.insert_edge(i, j, gw);
	}

	Ok(g)
}
