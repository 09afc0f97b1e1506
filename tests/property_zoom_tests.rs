use proptest::prelude::*;
use sentiment_report::core::{
    ChartKind, ZoomState, ZoomToggle, centered_window, default_window, zoom_window_size,
};

proptest! {
    #[test]
    fn default_window_fits_inside_series(len in 1usize..5_000) {
        let window = default_window(len).expect("window");
        let size = zoom_window_size(len);

        prop_assert_eq!(size, ((len as f64 * 0.35).floor() as usize).max(5));
        prop_assert!(window.start <= window.end);
        prop_assert!(window.end <= len - 1);
        prop_assert_eq!(window.sample_count(), size.min(len));
    }

    #[test]
    fn centered_window_contains_its_center(len in 1usize..5_000, center_seed in 0usize..10_000) {
        let center = center_seed % len;
        let window = centered_window(len, center).expect("window");
        prop_assert!(window.start <= center && center <= window.end);
        prop_assert!(window.end <= len - 1);
    }

    #[test]
    fn toggling_twice_restores_full_range(
        len in 1usize..1_000,
        index_seed in 0usize..1_000,
        price_first in any::<bool>(),
    ) {
        let kind = if price_first { ChartKind::Price } else { ChartKind::Sentiment };
        let mut zoom = ZoomState::default();

        let applied = zoom.toggle(kind, len, index_seed % len);
        prop_assert!(matches!(applied, ZoomToggle::Applied(_)));
        prop_assert_eq!(zoom.toggle(kind, len, index_seed % len), ZoomToggle::Cleared);
        prop_assert_eq!(zoom, ZoomState::default());
    }
}
