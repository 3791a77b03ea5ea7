//! Scientific-notation weight formatting for round-trip-faithful output.

/// Formats `w` as 10-significant-digit scientific notation with a signed,
/// zero-padded (>=2-digit) exponent, e.g. `1.2000000000E+00` or
/// `1.2000000000E-03`, matching C's fixed-mantissa `"%.10E"` convention used
/// by the text and SQLite sinks.
pub fn format_weight(w: f64) -> String {
	if w == 0.0 {
		return "0.0000000000E+00".to_string();
	}
	let sign = if w.is_sign_negative() { "-" } else { "" };
	let abs = w.abs();
	let exponent = abs.log10().floor() as i32;
	let mantissa = abs / 10f64.powi(exponent);
	// Guard against log10/rounding pushing the mantissa to exactly 10.
	let (mantissa, exponent) = if mantissa >= 10.0 {
		(mantissa / 10.0, exponent + 1)
	} else {
		(mantissa, exponent)
	};
	let exp_sign = if exponent < 0 { "-" } else { "+" };
	format!("{}{:.10}E{}{:02}", sign, mantissa, exp_sign, exponent.abs())
}
