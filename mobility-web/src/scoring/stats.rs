//! Small aggregate helpers shared by scoring and assessment

/// Arithmetic mean; `None` for an empty input
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Most frequent item. On a tie the item seen first wins.
pub fn most_common<T, I>(items: I) -> Option<T>
where
    T: PartialEq,
    I: IntoIterator<Item = T>,
{
    let mut counts: Vec<(T, usize)> = Vec::new();
    for item in items {
        match counts.iter_mut().find(|(seen, _)| *seen == item) {
            Some((_, count)) => *count += 1,
            None => counts.push((item, 1)),
        }
    }
    // Strictly greater keeps the earliest entry among equals
    let mut best: Option<(T, usize)> = None;
    for (item, count) in counts {
        match &best {
            Some((_, best_count)) if count <= *best_count => {}
            _ => best = Some((item, count)),
        }
    }
    best.map(|(item, _)| item)
}
