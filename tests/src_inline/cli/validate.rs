use super::*;
use crate::model::dataset::{Dataset, Marker};
use crate::plots::defs::PlotSet;

fn prepared(data: Dataset, marker: Option<Marker>) -> PreparedPlot {
    PreparedPlot {
        def: PlotSet::builtin().plots[0].clone(),
        input: "lagrange_data.txt".into(),
        data,
        marker,
    }
}

#[test]
fn row_with_marker_lists_bracket_and_value() {
    let data = Dataset::from_points(&[(0.0, 0.0), (0.5, 1.5), (1.0, 2.0)]);
    let marker = data.value_at_query(0.75);
    assert_eq!(
        validate_row(&prepared(data, marker)),
        "lagrange\t3\t0\t1\t1\t1.5"
    );
}

#[test]
fn row_without_marker_uses_placeholders() {
    let data = Dataset::from_points(&[(0.0, 0.0), (1.0, 2.0)]);
    assert_eq!(
        validate_row(&prepared(data, None)),
        "lagrange\t2\t0\t1\t.\t."
    );
    assert_eq!(
        validate_row(&prepared(Dataset::default(), None)),
        "lagrange\t0\t.\t.\t.\t."
    );
}
