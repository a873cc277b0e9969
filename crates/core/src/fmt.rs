//! Fixed-point display formatting.
//!
//! Rust's core float-to-decimal formatting has had wasm-facing panics in
//! some toolchain/browser combinations (see `dragon.rs` panics). To avoid
//! that class of issues, these helpers do **not** use `format!` on floats.
//!
//! They:
//! - Handle `NaN`/`±Inf` explicitly.
//! - For finite values, scale + round into an `i64`, then format integers.

#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};

/// Rendered in place of a value that has no finite representation, e.g. the
/// profit margin at a sale price of zero.
pub const NON_FINITE_PLACEHOLDER: &str = "—";

/// Format `v` with exactly `decimals` fractional digits.
///
/// Rounding is half-away-from-zero, matching what `toFixed`-style display
/// layers produce for ordinary monetary values.
pub fn fmt_f64_fixed(v: f64, decimals: usize) -> String {
    if !v.is_finite() {
        return if v.is_nan() {
            "NaN".to_string()
        } else if v.is_sign_positive() {
            "Inf".to_string()
        } else {
            "-Inf".to_string()
        };
    }

    // Clamp decimals to something reasonable to avoid huge powers.
    let decimals = decimals.min(9);

    // Compute 10^decimals as both f64 (for scaling) and i64 (for splitting).
    let scale_i64 = 10_i64.checked_pow(decimals as u32).unwrap_or(1_i64);
    let scale_f = scale_i64 as f64;

    // Scale + round into an integer.
    let scaled = (v * scale_f).round();
    if !scaled.is_finite() {
        // Extremely large values can overflow the scale.
        return if v.is_sign_negative() {
            "-Inf".to_string()
        } else {
            "Inf".to_string()
        };
    }

    // Keep within i64 range. If it doesn't fit, degrade gracefully.
    if scaled.abs() > (i64::MAX as f64) {
        return if v.is_sign_negative() {
            "-Inf".to_string()
        } else {
            "Inf".to_string()
        };
    }

    let scaled_i = scaled as i64;

    // -0.004 rounds to a zero that still carries its sign; drop it.
    let negative = scaled_i < 0;

    let abs_i = scaled_i.abs();
    let int_part = abs_i / scale_i64;
    let frac_part = abs_i % scale_i64;

    let mut out = String::new();

    if negative {
        out.push('-');
    }

    out.push_str(&int_part.to_string());

    if decimals > 0 {
        out.push('.');
        let frac_str = frac_part.to_string();
        // Left-pad with zeros.
        for _ in 0..decimals.saturating_sub(frac_str.len()) {
            out.push('0');
        }
        out.push_str(&frac_str);
    }

    out
}
