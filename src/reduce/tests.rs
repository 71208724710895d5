use proptest::prelude::*;

use super::*;

#[test]
fn concrete_inputs() {
    assert_eq!(sum_of_squares_slow([1_i32, 2, 3]), 14);
    assert_eq!(sum_of_squares([1_i32, 2, 3]), 14);

    assert_eq!(sum_of_squares_slow([-3_i32, 3]), 18);
    assert_eq!(sum_of_squares([-3_i32, 3]), 18);
}

#[test]
fn empty_input_is_zero() {
    let empty: [i32; 0] = [];
    assert_eq!(sum_of_squares_slow(empty), 0);
    assert_eq!(sum_of_squares(empty), 0);
    assert_eq!(sum_of_squares_slow(Vec::<i32>::new()), 0);
    assert_eq!(sum_of_squares(core::iter::empty::<i32>()), 0);
}

#[test]
fn extreme_values_do_not_overflow() {
    let data = [i32::MIN, i32::MAX, i32::MIN];
    let min = i128::from(i32::MIN);
    let max = i128::from(i32::MAX);
    let expected = 2 * min * min + max * max;

    assert_eq!(sum_of_squares_slow(&data), expected);
    assert_eq!(sum_of_squares(&data), expected);
}

#[test]
fn accepts_borrowed_and_owned_items() {
    let data = vec![4, -5, 6];
    assert_eq!(sum_of_squares(&data), 77);
    assert_eq!(sum_of_squares(data.iter()), 77);
    assert_eq!(sum_of_squares(data.iter().copied()), 77);
    assert_eq!(sum_of_squares_slow(data.iter().filter(|x| **x > 0)), 52);
    assert_eq!(sum_of_squares_slow(data), 77);
}

#[test]
fn repeated_calls_leave_input_untouched() {
    let data = vec![7, -1, 0, 12, -40];
    let snapshot = data.clone();

    for variant in Variant::ALL {
        let first = variant.run(&data);
        let second = variant.run(&data);
        assert_eq!(first, second);
        assert_eq!(data, snapshot);
    }
}

#[test]
fn variant_names() {
    assert_eq!(Variant::Naive.name(), "sum_of_squares_slow");
    assert_eq!(Variant::Streaming.to_string(), "sum_of_squares");
}

proptest! {
    #[test]
    fn naive_and_streaming_agree(ref data in any::<Vec<i32>>()) {
        prop_assert_eq!(sum_of_squares_slow(data), sum_of_squares(data));
    }

    #[test]
    fn result_is_never_negative(ref data in prop::collection::vec(-10_000_i32..=10_000, 0..256)) {
        prop_assert!(sum_of_squares(data) >= 0);
    }

    #[test]
    fn variants_match_free_functions(ref data in any::<Vec<i32>>()) {
        prop_assert_eq!(Variant::Naive.run(data), sum_of_squares_slow(data));
        prop_assert_eq!(Variant::Streaming.run(data), sum_of_squares(data));
    }
}
