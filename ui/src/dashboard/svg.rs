//! Pure geometry for the hand-built SVG charts.
//!
//! Kept free of any Dioxus types so the mapping from data to pixels is
//! unit-testable. All charts share one frame: a fixed viewBox with
//! margins reserved for axis labels.

/// Chart canvas with margins carved out for axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self {
            width: 760.0,
            height: 400.0,
            margin_top: 24.0,
            margin_right: 24.0,
            margin_bottom: 56.0,
            margin_left: 48.0,
        }
    }
}

impl ChartFrame {
    pub fn plot_width(&self) -> f64 {
        self.width - self.margin_left - self.margin_right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.margin_top - self.margin_bottom
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.margin_bottom
    }

    /// Horizontal pixel for a 0..=1 fraction across the plot area.
    pub fn x_at(&self, fraction: f64) -> f64 {
        self.margin_left + fraction.clamp(0.0, 1.0) * self.plot_width()
    }

    /// Vertical pixel for a value within `[min, max]` (top of plot is
    /// `max`). Values outside the domain clamp to the plot edges.
    pub fn y_at(&self, value: f64, min: f64, max: f64) -> f64 {
        let span = max - min;
        let fraction = if span <= 0.0 {
            0.5
        } else {
            ((value - min) / span).clamp(0.0, 1.0)
        };
        self.margin_top + (1.0 - fraction) * self.plot_height()
    }

    /// Center x of slot `index` out of `count` evenly spaced slots.
    pub fn slot_center(&self, index: usize, count: usize) -> f64 {
        if count == 0 {
            return self.x_at(0.5);
        }
        let step = 1.0 / count as f64;
        self.x_at(step * (index as f64 + 0.5))
    }
}

/// `points` attribute for a polyline over evenly spaced slots.
pub fn polyline_points(frame: &ChartFrame, values: &[f64], min: f64, max: f64) -> String {
    let count = values.len();
    values
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            let x = if count == 1 {
                frame.x_at(0.5)
            } else {
                frame.x_at(idx as f64 / (count - 1) as f64)
            };
            format!("{:.1},{:.1}", x, frame.y_at(*value, min, max))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Evenly spaced axis tick values covering `[min, max]` inclusive.
pub fn ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count < 2 {
        return vec![min];
    }
    let step = (max - min) / (count - 1) as f64;
    (0..count).map(|idx| min + step * idx as f64).collect()
}

/// Round a maximum up to a friendly axis bound (next multiple of 50).
pub fn volume_axis_max(peak: u64) -> f64 {
    if peak == 0 {
        return 50.0;
    }
    (peak as f64 / 50.0).ceil() * 50.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_bounds_hit_the_plot_edges() {
        let frame = ChartFrame::default();
        assert_eq!(frame.y_at(5.0, 0.0, 5.0), frame.margin_top);
        assert_eq!(frame.y_at(0.0, 0.0, 5.0), frame.plot_bottom());
        assert_eq!(frame.x_at(0.0), frame.margin_left);
        assert_eq!(frame.x_at(1.0), frame.width - frame.margin_right);
    }

    #[test]
    fn out_of_domain_values_clamp() {
        let frame = ChartFrame::default();
        assert_eq!(frame.y_at(9.0, 0.0, 5.0), frame.margin_top);
        assert_eq!(frame.y_at(-1.0, 0.0, 5.0), frame.plot_bottom());
    }

    #[test]
    fn polyline_emits_one_point_per_value() {
        let frame = ChartFrame::default();
        let points = polyline_points(&frame, &[1.0, 2.0, 3.0, 4.0], 0.0, 5.0);
        assert_eq!(points.split(' ').count(), 4);
        // First point sits on the left plot edge.
        assert!(points.starts_with(&format!("{:.1},", frame.margin_left)));
    }

    #[test]
    fn slot_centers_are_strictly_increasing() {
        let frame = ChartFrame::default();
        let centers: Vec<f64> = (0..3).map(|i| frame.slot_center(i, 3)).collect();
        assert!(centers[0] < centers[1] && centers[1] < centers[2]);
        // Symmetric around the plot midpoint.
        let mid = frame.x_at(0.5);
        assert!((centers[1] - mid).abs() < 1e-9);
    }

    #[test]
    fn ticks_cover_the_domain() {
        let axis = ticks(0.0, 5.0, 6);
        assert_eq!(axis.first(), Some(&0.0));
        assert_eq!(axis.last(), Some(&5.0));
        assert_eq!(axis.len(), 6);
    }

    #[test]
    fn volume_axis_rounds_to_fifties() {
        assert_eq!(volume_axis_max(0), 50.0);
        assert_eq!(volume_axis_max(358), 400.0);
        assert_eq!(volume_axis_max(400), 400.0);
    }
}
