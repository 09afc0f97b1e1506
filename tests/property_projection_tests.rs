use proptest::prelude::*;
use sentiment_report::core::{TimeSeriesPoint, Viewport, project_series};

fn sample_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -1_000_000.0f64..1_000_000.0,
        2 => any::<f64>(),
        1 => Just(f64::MAX),
        1 => Just(-f64::MAX),
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
    ]
}

proptest! {
    #[test]
    fn projected_points_are_finite_and_inside_viewport(
        values in proptest::collection::vec(sample_value(), 1..128),
        width in 1u32..2_000,
        height in 1u32..1_000,
    ) {
        let samples: Vec<TimeSeriesPoint> = values
            .iter()
            .map(|v| TimeSeriesPoint::new("2024-01-01", *v))
            .collect();
        let viewport = Viewport::new(width, height);
        let series = project_series(&samples, 0, viewport);

        let finite = values.iter().filter(|v| v.is_finite()).count();
        prop_assert_eq!(series.len(), finite);

        let w = f64::from(width);
        let h = f64::from(height);
        for point in &series.points {
            prop_assert!(point.x >= 0.0 && point.x <= w + 1e-9);
            prop_assert!(point.y >= -1e-9 && point.y <= h + 1e-9);
            prop_assert!(values[point.raw_index].is_finite());
        }
        for pair in series.points.windows(2) {
            prop_assert!(pair[0].x < pair[1].x);
            prop_assert!(pair[0].raw_index < pair[1].raw_index);
        }
    }

    #[test]
    fn flat_series_projects_to_a_single_row(
        value in -1_000.0f64..1_000.0,
        len in 1usize..64,
    ) {
        let samples = vec![TimeSeriesPoint::new("2024-01-01", value); len];
        let series = project_series(&samples, 0, Viewport::CHART);
        let first = series.points[0].y;
        prop_assert!(series.points.iter().all(|p| p.y == first));
    }
}
