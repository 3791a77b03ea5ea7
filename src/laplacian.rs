//! Negative-Laplacian transform.

use rayon::prelude::*;

use crate::edgelist::{EdgeList, VertexId};

/// Produces the directed negative-Laplacian graph `L` from `a`: one
/// off-diagonal weight per `(i, j)`, `i != j`, equal to the max-abs weight
/// between `i` and `j` in `a`; and one diagonal weight per `i`, equal to
/// the negated row-sum of those off-diagonal weights.
///
/// The `(i, j)` pair scan runs on the `rayon` global pool; insertion into
/// the output graph happens serially afterward, since `EdgeList` is not
/// reentrant.
pub fn take_neg_laplacian(a: &EdgeList) -> EdgeList {
	let mut l = EdgeList::new(true);
	let dim = a.max_vertex();
	if dim < 0 {
		return l;
	}

	let pairs: Vec<(VertexId, VertexId)> =
		(0..=dim).flat_map(|i| (0..=dim).map(move |j| (i, j))).filter(|&(i, j)| i != j).collect();

	let off_diagonal: Vec<(VertexId, VertexId, f64)> = pairs
		.par_iter()
		.filter_map(|&(i, j)| a.max_abs_edge_weight(i, j).map(|w| (i, j, w)))
		.collect();
	for &(i, j, w) in &off_diagonal {
		l.insert_edge(i, j, w);
	}

	let diagonal: Vec<(VertexId, f64)> = (0..=dim)
		.into_par_iter()
		.map(|i| {
			let row_sum: f64 =
				(0..=dim).filter(|&j| j != i).filter_map(|j| a.max_abs_edge_weight(i, j)).sum();
			(i, -row_sum)
		})
		.collect();
	for &(i, d) in &diagonal {
		l.insert_edge(i, i, d);
	}

	l
}
