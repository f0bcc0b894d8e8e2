/// Longest strictly increasing subsequence, by value.
///
/// Single patience-sorting pass: `tails[k]` holds the position of the smallest
/// value that ends an increasing run of length `k + 1`. A value equal to an
/// existing tail replaces nothing, so the earliest-seen element wins and the
/// reconstructed run is the one ending in the smallest final value.
///
/// ```
/// use typo_align::alignment::lis::find_lis;
///
/// assert_eq!(find_lis(&[1, 0, 2, 1, 3]), vec![0, 1, 3]);
/// assert_eq!(find_lis(&[2, 6, 0, 8, 1, 3, 1]), vec![0, 1, 3]);
/// ```
#[must_use]
pub fn find_lis(values: &[usize]) -> Vec<usize> {
    let mut tails: Vec<usize> = Vec::new();
    let mut predecessors: Vec<Option<usize>> = vec![None; values.len()];

    for (i, &value) in values.iter().enumerate() {
        match tails.binary_search_by(|&t| values[t].cmp(&value)) {
            Ok(_) => {}
            Err(len) => {
                predecessors[i] = len.checked_sub(1).map(|k| tails[k]);
                if len == tails.len() {
                    tails.push(i);
                } else {
                    tails[len] = i;
                }
            }
        }
    }

    let mut lis = Vec::with_capacity(tails.len());
    let mut cursor = tails.last().copied();
    while let Some(i) = cursor {
        lis.push(values[i]);
        cursor = predecessors[i];
    }
    lis.reverse();
    lis
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_lis_basic() {
        assert_eq!(find_lis(&[1, 2, 3, 4, 5]), vec![1, 2, 3, 4, 5]);
        assert_eq!(find_lis(&[5, 4, 3, 2, 1]), vec![1]);
        assert_eq!(find_lis(&[1, 3, 2, 4, 5]), vec![1, 2, 4, 5]);
        assert!(find_lis(&[]).is_empty());
        assert_eq!(find_lis(&[7]), vec![7]);
    }

    #[test]
    fn test_find_lis_duplicates() {
        assert_eq!(find_lis(&[1, 0, 2, 1, 3]), vec![0, 1, 3]);
        assert_eq!(find_lis(&[2, 6, 0, 8, 1, 3, 1]), vec![0, 1, 3]);
        assert_eq!(find_lis(&[3, 3, 3]), vec![3]);
        assert_eq!(find_lis(&[1, 1, 2, 2]), vec![1, 2]);
    }

    #[test]
    fn test_find_lis_prefers_smallest_tail() {
        // [3, 4] and [1, 2] both have length 2
        assert_eq!(find_lis(&[3, 4, 1, 2]), vec![1, 2]);
        assert_eq!(find_lis(&[3, 1]), vec![1]);
    }

    #[test]
    fn test_find_lis_is_idempotent() {
        for input in [
            vec![2, 6, 0, 8, 1, 3, 1],
            vec![1, 0, 2, 1, 3],
            vec![9, 1, 8, 2, 7, 3],
        ] {
            let lis = find_lis(&input);
            assert_eq!(find_lis(&lis), lis);
            assert!(lis.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
