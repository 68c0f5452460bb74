use fpkit::control::Maybe;

fn describe(value: Maybe<i32>) -> String {
    match value {
        Maybe::Just(number) => format!("just {number}"),
        Maybe::Nothing => String::from("nothing"),
    }
}

fn main() {
    assert_eq!(describe(Maybe::Just(1)), "just 1");
    assert_eq!(describe(Maybe::Nothing), "nothing");
}
