use fpkit::control::Either;

fn settle(value: Either<&str, u8>) -> usize {
    match value {
        Either::Left(error) => error.len(),
        Either::Right(count) => usize::from(count),
    }
}

fn main() {
    assert_eq!(settle(Either::Left("four")), 4);
    assert_eq!(settle(Either::Right(9)), 9);
}
