//! History-based skip signal

/// Share of historical samples below `angle_min` above which an exercise is
/// flagged as one the user cannot perform
pub const SKIP_FRACTION: f64 = 0.85;

/// `true` when more than `SKIP_FRACTION` of `history` lies below
/// `angle_min`. An empty history never skips.
pub fn evaluate_skip<I>(history: I, angle_min: f64) -> bool
where
    I: IntoIterator<Item = f64>,
{
    let (below, total) = history
        .into_iter()
        .fold((0usize, 0usize), |(below, total), angle| {
            (below + usize::from(angle < angle_min), total + 1)
        });
    if total == 0 {
        return false;
    }
    below as f64 / total as f64 > SKIP_FRACTION
}
