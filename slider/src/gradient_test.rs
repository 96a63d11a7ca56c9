#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn stops_land_on_exact_percentages() {
    let g = Gradient::compute(20, 80, 100);
    assert_eq!(g.percent_from, 20.0);
    assert_eq!(g.percent_to, 80.0);
    assert_eq!(
        g.css(),
        "linear-gradient(to right, #dadae5 20%, #3264fe 20%, #3264fe 80%, #dadae5 80%)"
    );
}

#[test]
fn full_and_empty_ranges() {
    let full = Gradient::compute(0, 100, 100);
    assert_eq!(full.percent_from, 0.0);
    assert_eq!(full.percent_to, 100.0);

    let empty = Gradient::compute(40, 40, 100);
    assert_eq!(empty.percent_from, empty.percent_to);
}

#[test]
fn fractional_percentages_render_without_padding() {
    let g = Gradient::compute(1, 2, 4);
    assert_eq!(g.css(), "linear-gradient(to right, #dadae5 25%, #3264fe 25%, #3264fe 50%, #dadae5 50%)");

    let months = Gradient::compute(3, 9, 12);
    assert_eq!(months.percent_from, 25.0);
    assert_eq!(months.percent_to, 75.0);
}

#[test]
fn out_of_range_values_are_clamped() {
    let g = Gradient::compute(-5, 500, 100);
    assert_eq!(g.percent_from, 0.0);
    assert_eq!(g.percent_to, 100.0);
}

#[test]
fn non_positive_max_renders_empty_track() {
    let g = Gradient::compute(3, 5, 0);
    assert_eq!(g.percent_from, 0.0);
    assert_eq!(g.percent_to, 0.0);
}

#[test]
fn rendering_is_idempotent() {
    let g = Gradient::compute(2, 8, 11);
    assert_eq!(g.css(), g.css());
    assert_eq!(Gradient::compute(2, 8, 11), g);
    assert_eq!(g.to_string(), g.css());
}
