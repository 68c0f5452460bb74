//! Basic combinators.

/// Returns the value unchanged.
///
/// Handy wherever a mapping function is required but nothing should
/// change, for example to flatten an iterator of `Maybe`s with
/// [`choose`](crate::sequence::choose).
///
/// # Examples
///
/// ```
/// use fpkit::compose::identity;
/// use fpkit::control::Maybe;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(Maybe::Just(3).map(identity), Maybe::Just(3));
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that ignores its input and returns a clone of `value`.
///
/// # Examples
///
/// ```
/// use fpkit::compose::constant;
/// use fpkit::control::Either;
///
/// let fallback: Either<&str, i32> = Either::Left("missing");
/// assert_eq!(fallback.fold(constant(0), |x| x), 0);
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function, so `flip(f)(b, a) == f(a, b)`.
///
/// # Examples
///
/// ```
/// use fpkit::compose::flip;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 {
///     minuend - subtrahend
/// }
///
/// assert_eq!(flip(subtract)(3, 10), 7);
/// assert_eq!(flip(flip(subtract))(10, 3), subtract(10, 3));
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn constant_ignores_reference_input() {
        let always_hello = constant("hello");
        assert_eq!(always_hello(&[1, 2, 3]), "hello");
    }

    #[cfg(feature = "sequence")]
    #[rstest]
    fn flip_with_scan_folder() {
        let append = |x: &str, accumulator: String| accumulator + x;
        let states = crate::sequence::scan(["a", "b"], String::new(), flip(append));
        assert_eq!(states, vec!["", "a", "ab"]);
    }
}
