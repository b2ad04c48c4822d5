/// Calls `f` once for every unordered pair of distinct elements.
///
/// Each pair is visited as `(items[i], items[j])` with `i < j`, so both
/// elements can be mutated together.
pub fn for_each_pair_mut<T, F>(items: &mut [T], mut f: F)
where
    F: FnMut(&mut T, &mut T),
{
    for i in 0..items.len() {
        let (head, tail) = items.split_at_mut(i + 1);
        let first = &mut head[i];
        for second in tail.iter_mut() {
            f(&mut *first, second);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visits_each_pair_once() {
        let mut items = vec![1, 2, 3, 4];
        let mut visited = Vec::new();
        for_each_pair_mut(&mut items, |a, b| visited.push((*a, *b)));
        assert_eq!(visited, vec![(1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4)]);
    }

    #[test]
    fn pairs_can_mutate_both_sides() {
        let mut items = vec![0, 0, 0];
        for_each_pair_mut(&mut items, |a, b| {
            *a += 1;
            *b += 1;
        });
        assert_eq!(items, vec![2, 2, 2]);
    }
}
