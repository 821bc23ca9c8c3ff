/// Index `i` of the first interval with `xs[i] <= query <= xs[i + 1]`.
///
/// Intervals are scanned in file order, so a query sitting exactly on a
/// shared knot resolves to the earlier interval. Fewer than two knots, or a
/// NaN query, never bracket.
pub fn find_bracket(xs: &[f64], query: f64) -> Option<usize> {
    xs.windows(2)
        .position(|w| w[0] <= query && query <= w[1])
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/bracket.rs"]
mod tests;
