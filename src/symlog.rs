use plotters::coord::ranged1d::{KeyPointHint, NoDefaultFormatting, Ranged, ValueFormatter};
use std::ops::Range;

/// Symmetric-log axis coordinate.
///
/// Behaves logarithmically away from zero but linearly within
/// `linear_threshold` of it, so zero (and negative values) map cleanly
/// instead of being undefined as on a pure log scale. Plotters ships linear
/// and log coordinates only, hence the custom `Ranged` implementation.
#[derive(Clone)]
pub struct SymLogCoord {
    range: Range<f64>,
    linear_threshold: f64,
}

impl SymLogCoord {
    pub fn new(range: Range<f64>) -> Self {
        Self::with_threshold(range, 1.0)
    }

    pub fn with_threshold(range: Range<f64>, linear_threshold: f64) -> Self {
        Self {
            range,
            linear_threshold: linear_threshold.max(f64::MIN_POSITIVE),
        }
    }

    fn transform(&self, value: f64) -> f64 {
        let scaled = value.abs() / self.linear_threshold;
        (1.0 + scaled).ln().copysign(value)
    }
}

impl Ranged for SymLogCoord {
    type FormatOption = NoDefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        let start = self.transform(self.range.start);
        let end = self.transform(self.range.end);
        if (end - start).abs() < f64::EPSILON {
            return limit.0;
        }
        let fraction = (self.transform(*value) - start) / (end - start);
        limit.0 + ((limit.1 - limit.0) as f64 * fraction).round() as i32
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        let max_points = hint.max_num_points();
        if max_points == 0 {
            return Vec::new();
        }

        let mut points = Vec::new();
        if self.range.start <= 0.0 && self.range.end >= 0.0 {
            points.push(0.0);
        }

        // Decades below zero, when the range reaches there.
        let mut decade = self.linear_threshold;
        while -decade >= self.range.start {
            if -decade <= self.range.end {
                points.push(-decade);
            }
            decade *= 10.0;
        }

        // Decades above zero.
        let mut decade = self.linear_threshold;
        while decade <= self.range.end {
            if decade >= self.range.start {
                points.push(decade);
            }
            decade *= 10.0;
        }

        points.sort_by(f64::total_cmp);

        if points.len() > max_points {
            let stride = points.len().div_ceil(max_points);
            points = points.into_iter().step_by(stride).collect();
        }
        points
    }

    fn range(&self) -> Range<f64> {
        self.range.clone()
    }
}

impl ValueFormatter<f64> for SymLogCoord {
    fn format(value: &f64) -> String {
        // The axis carries input sizes; show whole numbers without noise.
        if value.fract() == 0.0 {
            format!("{:.0}", value)
        } else {
            format!("{}", value)
        }
    }
}
