use proptest::prelude::*;
use sentiment_report::core::{ChartKind, TimeSeriesPoint, Viewport, project_series};
use sentiment_report::interaction::{TOOLTIP_EDGE_MARGIN, TOOLTIP_TOP_MARGIN, hover_at};

proptest! {
    #[test]
    fn tooltip_box_stays_inside_viewport(
        values in proptest::collection::vec(-500.0f64..500.0, 1..96),
        pointer in 0.0f64..320.0,
        sentiment in any::<bool>(),
    ) {
        let samples: Vec<TimeSeriesPoint> = values
            .iter()
            .enumerate()
            .map(|(i, v)| TimeSeriesPoint::new(format!("2024-01-{:02}", i % 28 + 1), *v))
            .collect();
        let kind = if sentiment { ChartKind::Sentiment } else { ChartKind::Price };
        let series = project_series(&samples, 0, Viewport::CHART);
        let hover = hover_at(kind, &series, pointer).expect("hover");

        prop_assert!(hover.box_width >= 64.0);
        prop_assert!(hover.box_x >= TOOLTIP_EDGE_MARGIN);
        prop_assert!(hover.box_x <= 320.0 - hover.box_width - TOOLTIP_EDGE_MARGIN + 1e-9);
        prop_assert!(hover.box_y >= TOOLTIP_TOP_MARGIN);
        prop_assert!(hover.index < samples.len());
    }
}
