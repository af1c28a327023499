use crate::image_pipeline::config::MedianRounding;
use crate::image_pipeline::grid::Sample;

/// Median of `samples`, or `None` when empty.
///
/// Odd counts return the middle element of the sorted order. Even counts
/// average the two central elements (sorted indices `n/2 - 1` and `n/2`)
/// using `rounding`.
///
/// The slice is reordered in place; its contents are otherwise untouched.
/// Selection is O(n) on average and gives the same result as a full sort.
pub fn median<T: Sample>(samples: &mut [T], rounding: MedianRounding) -> Option<T> {
    let n = samples.len();
    if n == 0 {
        return None;
    }

    let mid = n / 2;
    let (lower, upper, _) = samples.select_nth_unstable(mid);
    let upper = *upper;
    if n % 2 == 1 {
        return Some(upper);
    }

    // everything left of `mid` is <= upper, so its max is sorted[mid - 1]
    let lower = *lower.iter().max()?;
    Some(T::average(lower, upper, rounding))
}
