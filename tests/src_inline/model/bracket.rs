use super::*;

#[test]
fn finds_interval_containing_query() {
    let xs = [0.0, 1.0, 2.0, 3.0];
    assert_eq!(find_bracket(&xs, 1.5), Some(1));
    assert_eq!(find_bracket(&xs, 0.0), Some(0));
    assert_eq!(find_bracket(&xs, 3.0), Some(2));
}

#[test]
fn shared_knot_picks_earlier_interval() {
    let xs = [0.0, 1.0, 2.0];
    assert_eq!(find_bracket(&xs, 1.0), Some(0));
}

#[test]
fn outside_range_has_no_bracket() {
    let xs = [0.0, 1.0, 2.0];
    assert_eq!(find_bracket(&xs, -0.1), None);
    assert_eq!(find_bracket(&xs, 2.1), None);
}

#[test]
fn degenerate_inputs_never_bracket() {
    assert_eq!(find_bracket(&[], 0.0), None);
    assert_eq!(find_bracket(&[1.0], 1.0), None);
    assert_eq!(find_bracket(&[0.0, 1.0], f64::NAN), None);
}
