//! Monotone scalar `v`/`w` table.
//!
//! `v(x) = exp(alpha * x^beta) * (1+x)^q` is strictly increasing for `x >=
//! 0`. `w(y)` approximates its inverse by linear interpolation over a
//! lazily-built, append-only lookup table keyed by `y`.
//!
//! The table is an explicit handle (`ScalarTable`), not a process-wide
//! singleton: an explicit handle composes with `rayon`'s shared-reference
//! fan-out and is trivially unit-testable in isolation.

use std::collections::BTreeMap;
use std::sync::RwLock;

use noisy_float::prelude::{n64, N64};

use crate::error::{NetError, Result};

pub const ALPHA: f64 = 1.0;
pub const BETA: f64 = 0.9;
pub const Q: f64 = 1.2;
pub const EPSILON: f64 = 1e-12;
pub const STEP_SIZE: f64 = 1e-3;
pub const DEFAULT_MAX_X: f64 = 10000.0;
pub const EXTEND_STEPS: f64 = 1000.0;
pub const OVERFLOW_CAP: f64 = 705.0;

/// `v(x) = exp(alpha * x^beta) * (1+x)^q`, for `x >= 0`.
///
/// Fails with `VOverflow` rather than silently overflow toward infinity.
pub fn v(x: f64) -> Result<f64> {
	let exponent = ALPHA * x.powf(BETA);
	if exponent > OVERFLOW_CAP {
		return Err(NetError::VOverflow(exponent));
	}
	Ok(exponent.exp() * (1.0 + x).powf(Q))
}

/// Whether `v(x)` would overflow, without actually computing it.
pub fn v_overflows(x: f64) -> bool {
	ALPHA * x.powf(BETA) > OVERFLOW_CAP
}

struct Inner {
	table: BTreeMap<N64, f64>,
	max_x: f64,
}

impl Inner {
	fn empty() -> Self {
		Inner { table: BTreeMap::new(), max_x: 0.0 }
	}

	/// Extends the table from its current `max_x` up to `to`, skipping any
	/// `x` for which `v(x)` would overflow. Idempotent: calling with a
	/// smaller or equal `to` is a no-op.
	fn extend_to(&mut self, to: f64) {
		if !self.table.is_empty() && to <= self.max_x {
			return;
		}
		let start = if self.table.is_empty() { 0.0 } else { self.max_x + STEP_SIZE };
		let mut x = start;
		while x <= to {
			if v_overflows(x) {
				break;
			}
			let y = v(x).expect("checked by v_overflows above");
			self.table.insert(n64(y), x);
			x += STEP_SIZE;
		}
		self.max_x = to.min(x - STEP_SIZE).max(self.max_x);
	}
}

/// The v/w table, passed explicitly rather than hidden behind a singleton.
pub struct ScalarTable {
	inner: RwLock<Inner>,
}

impl Default for ScalarTable {
	fn default() -> Self {
		Self::new()
	}
}

impl ScalarTable {
	pub fn new() -> Self {
		ScalarTable { inner: RwLock::new(Inner::empty()) }
	}

	/// Eagerly builds (or extends) the table up to `max_x`. Useful to warm
	/// up the table once before entering a `rayon` parallel region.
	pub fn build_to(&self, max_x: f64) {
		self.inner.write().unwrap().extend_to(max_x);
	}

	fn ensure_built(&self) {
		let needs_init = self.inner.read().unwrap().table.is_empty();
		if needs_init {
			self.build_to(DEFAULT_MAX_X);
		}
	}

	/// `w(y) ~= v^-1(y)` via linear interpolation over the table,
	/// auto-extending the table when `y` exceeds the tabulated range, up to
	/// the point where `v(x)` itself would overflow.
	pub fn w(&self, y: f64) -> Result<f64> {
		if y < 0.0 {
			return Err(NetError::WNegativeInput(y));
		}
		self.ensure_built();
		let key = n64(y);
		loop {
			let (found, cur_max_x) = {
				let inner = self.inner.read().unwrap();
				(inner.table.range(key..).next().map(|(&y2, &x2)| (y2, x2)), inner.max_x)
			};
			match found {
				Some((y2, x2)) if y2.raw() == y => return Ok(x2),
				Some((y2, x2)) => {
					let pred = {
						let inner = self.inner.read().unwrap();
						inner.table.range(..key).next_back().map(|(&y1, &x1)| (y1, x1))
					};
					return Ok(match pred {
						Some((y1, x1)) => x1 + (x2 - x1) * (y - y1.raw()) / (y2.raw() - y1.raw()),
						// y sits below the table's domain (y < v(0) = 1): clamp to the smallest tabulated x.
						None => x2,
					});
				}
				None => {
					if v_overflows(cur_max_x + STEP_SIZE) {
						return Err(NetError::WOutOfRange(y));
					}
					self.build_to(cur_max_x + EXTEND_STEPS * STEP_SIZE);
				}
			}
		}
	}

	/// Largest tabulated `(x, y)` pair with `y <= input y`; used to decide
	/// when a caller can keep trusting the interpolation versus switching
	/// to direct `v()` evaluation.
	pub fn max_approximation_threshold_w(&self, y: f64) -> Result<(f64, f64)> {
		if y < 0.0 {
			return Err(NetError::WNegativeInput(y));
		}
		self.ensure_built();
		let key = n64(y);
		loop {
			let (found, cur_max_x) = {
				let inner = self.inner.read().unwrap();
				(inner.table.range(key..).next().map(|(&y2, &x2)| (y2, x2)), inner.max_x)
			};
			match found {
				Some((y2, x2)) if y2.raw() == y => return Ok((x2, y2.raw())),
				Some(_) => {
					let pred = {
						let inner = self.inner.read().unwrap();
						inner.table.range(..key).next_back().map(|(&y1, &x1)| (x1, y1.raw()))
					};
					return Ok(pred.unwrap_or((0.0, 0.0)));
				}
				None => {
					if v_overflows(cur_max_x + STEP_SIZE) {
						// Table's domain is exhausted; the largest tabulated entry is the best we have.
						let inner = self.inner.read().unwrap();
						return Ok(inner
							.table
							.iter()
							.next_back()
							.map(|(&y1, &x1)| (x1, y1.raw()))
							.unwrap_or((0.0, 0.0)));
					}
					self.build_to(cur_max_x + EXTEND_STEPS * STEP_SIZE);
				}
			}
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn v_at_zero_is_one() {
		assert!((v(0.0).unwrap() - 1.0).abs() < 1e-12);
	}

	#[test]
	fn v_is_increasing() {
		let mut prev = v(0.0).unwrap();
		for i in 1..100 {
			let x = i as f64 * 0.25;
			let cur = v(x).unwrap();
			assert!(cur > prev, "v({}) = {} should exceed previous {}", x, cur, prev);
			prev = cur;
		}
	}

	#[test]
	fn v_overflow_detected() {
		assert!(v(1e6).is_err());
	}

	#[test]
	fn w_negative_input_fails() {
		let t = ScalarTable::new();
		assert!(matches!(t.w(-1.0), Err(NetError::WNegativeInput(_))));
	}

	#[test]
	fn w_round_trips_v_within_interpolation_error() {
		let t = ScalarTable::new();
		t.build_to(100.0);
		for i in 1..50 {
			let x = i as f64 * 1.7;
			let y = v(x).unwrap();
			let w = t.w(y).unwrap();
			// linear-interpolation error bound: within a couple of step sizes
			assert!((w - x).abs() < 4.0 * STEP_SIZE, "w(v({})) = {} too far from {}", x, w, x);
		}
	}

	#[test]
	fn w_exact_hit_returns_exact_x() {
		let t = ScalarTable::new();
		t.build_to(10.0);
		let x = 3.0;
		let y = v(x).unwrap();
		assert!((t.w(y).unwrap() - x).abs() < 1e-9);
	}

	#[test]
	fn w_auto_extends_beyond_default_max_x() {
		let t = ScalarTable::new();
		t.build_to(1.0);
		let y = v(50.0).unwrap();
		let x = t.w(y).unwrap();
		assert!((x - 50.0).abs() < 1.0);
	}
}
