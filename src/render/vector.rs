use crate::render::{
    ChartFigure, RenderFrame, render_chart_block, render_distribution_block, render_gauge_block,
};
use crate::report::SentimentSnapshot;

/// Lower-left corners of the report's graphic blocks on a letter page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockLayout {
    pub gauge: (f64, f64),
    pub distribution: (f64, f64),
    pub price_chart: (f64, f64),
    pub sentiment_chart: (f64, f64),
}

impl Default for BlockLayout {
    fn default() -> Self {
        Self {
            gauge: (72.0, 300.0),
            distribution: (312.0, 300.0),
            price_chart: (72.0, 160.0),
            sentiment_chart: (72.0, 20.0),
        }
    }
}

/// Lays out the gauge, distribution and trend-chart blocks of a report page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VectorChartRenderer {
    layout: BlockLayout,
}

impl VectorChartRenderer {
    #[must_use]
    pub fn new(layout: BlockLayout) -> Self {
        Self { layout }
    }

    #[must_use]
    pub fn layout(&self) -> BlockLayout {
        self.layout
    }

    /// Gauge and distribution appear only with a snapshot; each chart only
    /// when its path has vertices.
    #[must_use]
    pub fn render(
        &self,
        snapshot: Option<&SentimentSnapshot>,
        price: &ChartFigure,
        sentiment: &ChartFigure,
    ) -> RenderFrame {
        let mut frame = RenderFrame::new();
        if let Some(snapshot) = snapshot {
            let (x, y) = self.layout.gauge;
            frame.append(render_gauge_block(snapshot, x, y));
            let (x, y) = self.layout.distribution;
            frame.append(render_distribution_block(snapshot.distribution, x, y));
        }
        if !price.is_empty() {
            let (x, y) = self.layout.price_chart;
            frame.append(render_chart_block(price, x, y));
        }
        if !sentiment.is_empty() {
            let (x, y) = self.layout.sentiment_chart;
            frame.append(render_chart_block(sentiment, x, y));
        }
        frame
    }
}
