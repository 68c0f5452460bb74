//! Running folds.

/// Returns the seed followed by the state after each element.
///
/// The output always has one more element than the input. The fold runs
/// eagerly: `folder` has been called for every element by the time this
/// function returns. For a lazy running fold use [`Iterator::scan`].
///
/// # Examples
///
/// ```rust
/// use fpkit::sequence::scan;
///
/// assert_eq!(scan([1, 2, 3], 0, |total, x| total + x), vec![0, 1, 3, 6]);
/// assert_eq!(scan(Vec::<i32>::new(), 10, |total, x| total + x), vec![10]);
/// ```
pub fn scan<T, S, F>(source: T, seed: S, mut folder: F) -> Vec<S>
where
    T: IntoIterator,
    S: Clone,
    F: FnMut(S, T::Item) -> S,
{
    let source = source.into_iter();
    let mut states = Vec::with_capacity(source.size_hint().0.saturating_add(1));
    let mut current = seed;

    for element in source {
        let next = folder(current.clone(), element);
        states.push(current);
        current = next;
    }

    states.push(current);
    states
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn folder_runs_before_return() {
        let mut seen = Vec::new();
        let states = scan(["a", "b"], String::new(), |mut state, element| {
            seen.push(element);
            state.push_str(element);
            state
        });
        assert_eq!(seen, vec!["a", "b"]);
        assert_eq!(states, vec!["", "a", "ab"]);
    }

    #[rstest]
    fn non_commutative_folder_keeps_order() {
        let states = scan([1, 2, 3], Vec::new(), |mut state, element| {
            state.insert(0, element);
            state
        });
        assert_eq!(states, vec![vec![], vec![1], vec![2, 1], vec![3, 2, 1]]);
    }
}
