use super::*;

fn assert_close(got: Range, min: f64, max: f64) {
    assert!((got.min - min).abs() < 1e-9, "min {} != {}", got.min, min);
    assert!((got.max - max).abs() < 1e-9, "max {} != {}", got.max, max);
}

#[test]
fn backend_follows_extension() {
    assert_eq!(ChartKind::from_path(Path::new("a.png")), ChartKind::Png);
    assert_eq!(ChartKind::from_path(Path::new("a.SVG")), ChartKind::Svg);
    assert_eq!(ChartKind::from_path(Path::new("noext")), ChartKind::Png);
}

#[test]
fn bounds_cover_both_datasets_and_marker() {
    let actual = Dataset::from_points(&[(0.0, 0.0), (10.0, 5.0)]);
    let interpolated = Dataset::from_points(&[(1.0, -10.0), (2.0, 1.0)]);
    let cmp = Comparison {
        title: "t",
        actual: &actual,
        interpolated: &interpolated,
        marker: Some(Marker {
            interval: 0,
            x: 1.5,
            y: 10.0,
        }),
    };
    let (x, y) = chart_bounds(&cmp).expect("bounds");
    assert_close(x, -0.5, 10.5);
    assert_close(y, -11.0, 11.0);
}

#[test]
fn bounds_without_interpolated_data_use_actual() {
    let actual = Dataset::from_points(&[(0.0, 1.0), (4.0, 3.0)]);
    let empty = Dataset::default();
    let cmp = Comparison {
        title: "t",
        actual: &actual,
        interpolated: &empty,
        marker: None,
    };
    let (x, y) = chart_bounds(&cmp).expect("bounds");
    assert_close(x, -0.2, 4.2);
    assert_close(y, 0.9, 3.1);
}

#[test]
fn empty_inputs_fail_before_drawing() {
    let empty = Dataset::default();
    let cmp = Comparison {
        title: "Empty",
        actual: &empty,
        interpolated: &empty,
        marker: None,
    };
    assert!(chart_bounds(&cmp).is_none());
    let err = render_comparison(&cmp, Path::new("unused.png"), ChartSize::default()).unwrap_err();
    assert!(matches!(err, PlotError::NoData(title) if title == "Empty"));
}

fn sample_comparison<'a>(
    actual: &'a Dataset,
    interpolated: &'a Dataset,
    marker: Option<Marker>,
) -> Comparison<'a> {
    Comparison {
        title: "Lagrange Interpolation",
        actual,
        interpolated,
        marker,
    }
}

#[test]
fn renders_png_and_svg_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let actual = Dataset::from_points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]);
    let interpolated = Dataset::from_points(&[
        (0.0, 0.0),
        (0.5, 0.25),
        (1.0, 1.0),
        (1.5, 2.25),
        (2.0, 4.0),
    ]);
    let marker = interpolated.value_at_query(1.2);
    let cmp = sample_comparison(&actual, &interpolated, marker);

    for name in ["lagrange.png", "lagrange.svg"] {
        let path = dir.path().join(name);
        render_comparison(&cmp, &path, ChartSize::default()).expect("render");
        let len = std::fs::metadata(&path).expect("output exists").len();
        assert!(len > 0, "{name} is empty");
    }
}

#[test]
fn finite_marker_is_drawn_in_red() {
    let dir = tempfile::tempdir().expect("tempdir");
    let actual = Dataset::from_points(&[(0.0, 0.0), (2.0, 4.0)]);
    let interpolated = Dataset::from_points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]);
    let cmp = sample_comparison(&actual, &interpolated, interpolated.value_at_query(1.5));

    let path = dir.path().join("marker.svg");
    render_comparison(&cmp, &path, ChartSize::default()).expect("render");
    let svg = std::fs::read_to_string(&path).expect("read svg").to_ascii_uppercase();
    assert!(svg.contains("#FF0000"));
}

#[test]
fn non_finite_marker_is_not_drawn() {
    let dir = tempfile::tempdir().expect("tempdir");
    let actual = Dataset::from_points(&[(0.0, 0.0), (2.0, 4.0)]);
    let interpolated = Dataset::from_points(&[(0.0, 0.0), (1.0, f64::NAN), (2.0, 4.0)]);
    let marker = interpolated.value_at_query(1.5);
    assert!(marker.is_some_and(|m| m.y.is_nan()));
    let cmp = sample_comparison(&actual, &interpolated, marker);
    assert!(drawable_marker(&cmp).is_none());

    let path = dir.path().join("nan_marker.svg");
    render_comparison(&cmp, &path, ChartSize::default()).expect("render");
    let svg = std::fs::read_to_string(&path).expect("read svg").to_ascii_uppercase();
    assert!(!svg.contains("#FF0000"));
    assert!(!svg.contains("INTERPOLATED VALUE"));
}

#[test]
fn curve_breaks_at_non_finite_points() {
    let data = Dataset::from_points(&[
        (0.0, 0.0),
        (1.0, 1.0),
        (2.0, f64::NAN),
        (3.0, 9.0),
        (f64::INFINITY, 1.0),
        (5.0, 25.0),
        (6.0, 36.0),
    ]);
    let runs = finite_runs(&data);
    assert_eq!(
        runs,
        vec![
            vec![(0.0, 0.0), (1.0, 1.0)],
            vec![(3.0, 9.0)],
            vec![(5.0, 25.0), (6.0, 36.0)],
        ]
    );
    assert!(finite_runs(&Dataset::default()).is_empty());
}

#[test]
fn actual_data_alone_still_renders() {
    let dir = tempfile::tempdir().expect("tempdir");
    let empty = Dataset::default();
    let interpolated = Dataset::from_points(&[(0.0, 1.0), (1.0, 2.0)]);
    let cmp = sample_comparison(&empty, &interpolated, interpolated.value_at_query(0.5));

    let path = dir.path().join("no_actual.png");
    render_comparison(&cmp, &path, ChartSize::default()).expect("render");
    assert!(std::fs::metadata(&path).expect("output exists").len() > 0);
}
