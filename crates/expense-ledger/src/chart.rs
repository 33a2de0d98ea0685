//! Chart Series and Geometry
//!
//! Turns the expense list into a line chart laid out in SVG user units.
//! Points keep list order; nothing is sorted by date.

use crate::format::format_tick;

/// Space reserved around the plot for axis labels
const PAD_LEFT: f64 = 48.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 32.0;

/// Values are clamped to this magnitude so the axis span stays finite
const VALUE_LIMIT: f64 = 1e300;
/// Upper bound on grid lines; a nice step over a quarter span yields at most 6
const MAX_STEPS: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    /// Legend text
    pub label: String,
    pub points: Vec<ChartPoint>,
}

/// Inner plotting rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Horizontal grid line with its value label
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub y: f64,
    pub label: String,
}

/// Category label under a point
#[derive(Debug, Clone, PartialEq)]
pub struct XLabel {
    pub x: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub plot: PlotArea,
    /// Point coordinates in series order
    pub points: Vec<(f64, f64)>,
    pub y_ticks: Vec<Tick>,
    pub x_labels: Vec<XLabel>,
}

impl ChartGeometry {
    /// Lay out `series` inside a `width` x `height` viewport.
    ///
    /// The value axis always includes zero and is padded up to a whole
    /// number of "nice" steps (1, 2, 2.5 or 5 times a power of ten).
    pub fn layout(series: &ChartSeries, width: f64, height: f64) -> Self {
        let plot = PlotArea {
            left: PAD_LEFT,
            top: PAD_TOP,
            width: (width - PAD_LEFT - PAD_RIGHT).max(1.0),
            height: (height - PAD_TOP - PAD_BOTTOM).max(1.0),
        };

        let (lo, hi) = series
            .points
            .iter()
            .map(|p| clamp_value(p.value))
            .fold((0.0f64, 0.0f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        let span = if hi - lo > 0.0 { hi - lo } else { 1.0 };
        let step = nice_step(span / 4.0);
        let axis_lo = (lo / step).floor() * step;
        let steps = (((hi.max(axis_lo + step)) - axis_lo) / step)
            .ceil()
            .clamp(1.0, MAX_STEPS as f64) as usize;
        let axis_hi = axis_lo + step * steps as f64;

        let y_of = |value: f64| {
            let ratio = (clamp_value(value) - axis_lo) / (axis_hi - axis_lo);
            plot.top + plot.height * (1.0 - ratio.clamp(0.0, 1.0))
        };

        let y_ticks = (0..=steps)
            .map(|i| {
                let value = axis_lo + step * i as f64;
                Tick {
                    y: y_of(value),
                    label: format_tick(value),
                }
            })
            .collect();

        let count = series.points.len();
        let x_of = |index: usize| {
            if count <= 1 {
                plot.left + plot.width / 2.0
            } else {
                plot.left + plot.width * index as f64 / (count - 1) as f64
            }
        };

        let points = series
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| (x_of(i), y_of(p.value)))
            .collect();

        let x_labels = series
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| XLabel {
                x: x_of(i),
                label: p.label.clone(),
            })
            .collect();

        Self {
            width,
            height,
            plot,
            points,
            y_ticks,
            x_labels,
        }
    }

    /// Value for the `points` attribute of an SVG `<polyline>`
    pub fn polyline(&self) -> String {
        self.points
            .iter()
            .map(|(x, y)| format!("{:.1},{:.1}", x, y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Finite value within `±VALUE_LIMIT`; NaN plots as zero
fn clamp_value(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-VALUE_LIMIT, VALUE_LIMIT)
    }
}

/// Smallest of 1, 2, 2.5, 5, 10 times a power of ten that is >= `raw`
fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|&n| fraction <= n + 1e-9)
        .unwrap_or(10.0);
    nice * magnitude
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> ChartSeries {
        ChartSeries {
            label: "Expenses".to_string(),
            points: values
                .iter()
                .enumerate()
                .map(|(i, &value)| ChartPoint {
                    label: format!("P{}", i),
                    value,
                })
                .collect(),
        }
    }

    #[test]
    fn test_nice_step() {
        assert_eq!(nice_step(62.5), 100.0);
        assert_eq!(nice_step(0.25), 0.25);
        assert_eq!(nice_step(3.0), 5.0);
        assert_eq!(nice_step(20.0), 20.0);
        assert_eq!(nice_step(0.0), 1.0);
    }

    #[test]
    fn test_seed_like_layout() {
        let geometry = ChartGeometry::layout(&series(&[250.0, 250.0, 250.0, 250.0]), 640.0, 280.0);
        let labels: Vec<_> = geometry.y_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["0", "100", "200", "300"]);

        // Zero sits on the bottom edge, the top tick on the top edge
        assert_eq!(geometry.y_ticks[0].y, geometry.plot.bottom());
        assert_eq!(geometry.y_ticks[3].y, geometry.plot.top);

        assert_eq!(geometry.points.len(), 4);
        assert_eq!(geometry.points[0].0, geometry.plot.left);
        assert_eq!(geometry.points[3].0, geometry.plot.right());
        assert!(geometry.points.iter().all(|&(_, y)| y == geometry.points[0].1));
    }

    #[test]
    fn test_single_point_is_centered() {
        let geometry = ChartGeometry::layout(&series(&[10.0]), 200.0, 100.0);
        let plot = geometry.plot;
        assert_eq!(geometry.points[0].0, plot.left + plot.width / 2.0);
        assert_eq!(geometry.x_labels[0].label, "P0");
    }

    #[test]
    fn test_empty_series_keeps_axis() {
        let geometry = ChartGeometry::layout(&series(&[]), 200.0, 100.0);
        assert!(geometry.points.is_empty());
        assert!(geometry.x_labels.is_empty());
        assert_eq!(geometry.polyline(), "");
        assert_eq!(geometry.y_ticks.first().map(|t| t.label.as_str()), Some("0"));
    }

    #[test]
    fn test_negative_values_extend_axis_down() {
        let geometry = ChartGeometry::layout(&series(&[-30.0, 50.0]), 200.0, 100.0);
        let first = geometry.y_ticks.first().unwrap();
        let last = geometry.y_ticks.last().unwrap();
        assert_eq!(first.label, "-40");
        assert_eq!(last.label, "60");
        assert!(geometry.points[0].1 > geometry.points[1].1);
    }

    #[test]
    fn test_extreme_values_stay_bounded() {
        let geometry = ChartGeometry::layout(&series(&[1e308, -1e308, f64::MAX, 0.0]), 640.0, 280.0);
        let plot = geometry.plot;

        assert!(geometry.y_ticks.len() >= 2 && geometry.y_ticks.len() <= MAX_STEPS + 1);
        assert_eq!(geometry.points.len(), 4);
        for &(x, y) in &geometry.points {
            assert!(x.is_finite() && y.is_finite());
            assert!(y >= plot.top && y <= plot.bottom());
        }
        // The huge positive value sits above zero, the negative one below
        assert!(geometry.points[0].1 < geometry.points[3].1);
        assert!(geometry.points[1].1 > geometry.points[3].1);
    }

    #[test]
    fn test_polyline_format() {
        let geometry = ChartGeometry::layout(&series(&[0.0, 4.0]), 164.0, 148.0);
        // Plot is 100 x 100 at (48, 16); axis 0..4
        assert_eq!(geometry.polyline(), "48.0,116.0 148.0,16.0");
    }
}
