use crate::format::{format_rounded, round_to};

#[test]
fn exact_ties_round_up() {
    assert_eq!(round_to(0.125, 2), 0.13);
    assert_eq!(format_rounded(0.125, 2), "0.13");
    assert_eq!(format_rounded(2.5, 0), "3");
}

#[test]
fn ties_round_away_from_zero_for_negatives() {
    assert_eq!(round_to(-0.125, 2), -0.13);
    assert_eq!(format_rounded(-0.125, 2), "-0.13");
}

#[test]
fn value_just_below_a_decimal_tie_rounds_down() {
    // The nearest f32 to 1.005 is 1.00499999...
    assert_eq!(format_rounded(1.005, 2), "1.00");
    assert_eq!(round_to(1.005, 2), 1.0);
}

#[test]
fn always_prints_the_requested_fraction_digits() {
    assert_eq!(format_rounded(0.0, 2), "0.00");
    assert_eq!(format_rounded(1.0, 2), "1.00");
    assert_eq!(format_rounded(-300.0, 2), "-300.00");
    assert_eq!(format_rounded(45.6789, 2), "45.68");
}

#[test]
fn tiny_negatives_print_without_a_sign() {
    assert_eq!(format_rounded(-0.001, 2), "0.00");
    assert_eq!(format_rounded(-0.0, 2), "0.00");
}

#[test]
fn non_finite_values_pass_through() {
    assert!(round_to(f32::NAN, 2).is_nan());
    assert_eq!(round_to(f32::INFINITY, 2), f32::INFINITY);
    assert_eq!(format_rounded(f32::NEG_INFINITY, 2), "-inf");
}
