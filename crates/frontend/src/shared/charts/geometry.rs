//! Pure layout math for the SVG charts.

use std::f64::consts::PI;

/// Fill colours cycled through by bars and pie slices.
pub const PALETTE: [&str; 8] = [
    "#0d9488", "#2563eb", "#f59e0b", "#ef4444", "#8b5cf6", "#10b981", "#ec4899", "#64748b",
];

pub fn color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Drawing area inside an SVG viewBox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Frame {
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            left: 56.0,
            right: 16.0,
            top: 16.0,
            bottom: 40.0,
        }
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - self.left - self.right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.top - self.bottom).max(0.0)
    }

    pub fn baseline(&self) -> f64 {
        self.top + self.plot_height()
    }

    /// Y coordinate of `value` on an axis running from 0 to `max`.
    pub fn y_for(&self, value: f64, max: f64) -> f64 {
        if max <= 0.0 {
            return self.baseline();
        }
        self.baseline() - (value.max(0.0) / max).min(1.0) * self.plot_height()
    }
}

/// Rounds `max` up to 1, 2, 2.5 or 5 times a power of ten so axis ticks land
/// on readable numbers.
pub fn nice_max(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    let scaled = max / magnitude;
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|s| scaled <= *s)
        .unwrap_or(10.0);
    step * magnitude
}

/// Evenly spaced axis values from 0 to `max` inclusive.
pub fn ticks(max: f64, count: usize) -> Vec<f64> {
    let count = count.max(1);
    (0..=count)
        .map(|i| max * i as f64 / count as f64)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarRect {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// One bar per value, each filling 70% of its slot.
pub fn bar_layout(values: &[f64], frame: &Frame, max: f64) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }
    let slot = frame.plot_width() / values.len() as f64;
    let width = slot * 0.7;
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let y = frame.y_for(*value, max);
            BarRect {
                x: frame.left + slot * i as f64 + (slot - width) / 2.0,
                y,
                width,
                height: frame.baseline() - y,
            }
        })
        .collect()
}

/// Vertex positions of a line series, first and last on the plot edges.
pub fn line_points(values: &[f64], frame: &Frame, max: f64) -> Vec<(f64, f64)> {
    let step = if values.len() > 1 {
        frame.plot_width() / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = if values.len() == 1 {
                frame.left + frame.plot_width() / 2.0
            } else {
                frame.left + step * i as f64
            };
            (x, frame.y_for(*value, max))
        })
        .collect()
}

/// SVG path `d` attribute joining `points` with straight segments.
pub fn polyline_path(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, (x, y))| {
            let cmd = if i == 0 { 'M' } else { 'L' };
            format!("{cmd}{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub path: String,
    pub fraction: f64,
    pub label_x: f64,
    pub label_y: f64,
}

fn point_on_circle(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.sin(), cy - r * angle.cos())
}

/// Slices clockwise from twelve o'clock. Zero and negative values get no
/// slice; a single non-zero value draws a full disc.
pub fn pie_slices(values: &[f64], cx: f64, cy: f64, r: f64) -> Vec<PieSlice> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = 0.0;
    values
        .iter()
        .map(|value| {
            let fraction = value.max(0.0) / total;
            let sweep = fraction * 2.0 * PI;
            let end = start + sweep;
            let path = if fraction >= 0.999_999 {
                format!(
                    "M{:.1},{:.1} m-{r:.1},0 a{r:.1},{r:.1} 0 1,0 {:.1},0 a{r:.1},{r:.1} 0 1,0 -{:.1},0",
                    cx,
                    cy,
                    2.0 * r,
                    2.0 * r
                )
            } else if fraction <= 0.0 {
                String::new()
            } else {
                let (x1, y1) = point_on_circle(cx, cy, r, start);
                let (x2, y2) = point_on_circle(cx, cy, r, end);
                let large = if sweep > PI { 1 } else { 0 };
                format!(
                    "M{cx:.1},{cy:.1} L{x1:.1},{y1:.1} A{r:.1},{r:.1} 0 {large},1 {x2:.1},{y2:.1} Z"
                )
            };
            let (label_x, label_y) = point_on_circle(cx, cy, r * 0.65, start + sweep / 2.0);
            start = end;
            PieSlice {
                path,
                fraction,
                label_x,
                label_y,
            }
        })
        .collect()
}

/// Percentage label for a slice, hidden for slivers too thin to hold text.
pub fn percent_label(fraction: f64) -> Option<String> {
    if fraction < 0.05 {
        None
    } else {
        Some(format!("{:.0}%", fraction * 100.0))
    }
}

/// Shortens long axis labels to `max` characters with an ellipsis.
pub fn truncate_label(label: &str, max: usize) -> String {
    if label.chars().count() <= max {
        label.to_string()
    } else {
        let head: String = label.chars().take(max.saturating_sub(1)).collect();
        format!("{head}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_max() {
        assert_eq!(nice_max(0.0), 1.0);
        assert_eq!(nice_max(7.0), 10.0);
        assert_eq!(nice_max(18500.0), 20000.0);
        assert_eq!(nice_max(22000.0), 25000.0);
        assert_eq!(nice_max(420.0), 500.0);
        assert_eq!(nice_max(100.0), 100.0);
    }

    #[test]
    fn test_ticks_cover_axis() {
        assert_eq!(ticks(100.0, 4), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn test_bar_heights_scale_to_max() {
        let frame = Frame::new(400.0, 240.0);
        let bars = bar_layout(&[50.0, 100.0], &frame, 100.0);
        assert_eq!(bars.len(), 2);
        assert!((bars[1].height - frame.plot_height()).abs() < 1e-9);
        assert!((bars[0].height - frame.plot_height() / 2.0).abs() < 1e-9);
        assert!((bars[1].y + bars[1].height - frame.baseline()).abs() < 1e-9);
        assert!(bars[0].x < bars[1].x);
    }

    #[test]
    fn test_line_points_span_plot() {
        let frame = Frame::new(400.0, 240.0);
        let points = line_points(&[0.0, 10.0, 20.0], &frame, 20.0);
        assert_eq!(points[0].0, frame.left);
        assert!((points[2].0 - (frame.left + frame.plot_width())).abs() < 1e-9);
        assert_eq!(points[0].1, frame.baseline());
        assert_eq!(points[2].1, frame.top);
        assert!(polyline_path(&points).starts_with("M56.0,"));
    }

    #[test]
    fn test_pie_fractions_sum_to_one() {
        let slices = pie_slices(&[3.0, 4.0, 1.0], 100.0, 100.0, 80.0);
        let total: f64 = slices.iter().map(|s| s.fraction).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!((slices[1].fraction - 0.5).abs() < 1e-9);
        assert!(slices.iter().all(|s| s.path.ends_with('Z')));
    }

    #[test]
    fn test_pie_edge_cases() {
        assert!(pie_slices(&[], 0.0, 0.0, 10.0).is_empty());
        assert!(pie_slices(&[0.0, 0.0], 0.0, 0.0, 10.0).is_empty());
        let full = pie_slices(&[5.0, 0.0], 50.0, 50.0, 10.0);
        assert!(full[0].path.contains(" a10.0,10.0 "));
        assert!(full[1].path.is_empty());
    }

    #[test]
    fn test_labels() {
        assert_eq!(percent_label(0.5), Some("50%".to_string()));
        assert_eq!(percent_label(0.01), None);
        assert_eq!(truncate_label("Paracetamol 500mg", 10), "Paracetam…");
        assert_eq!(truncate_label("Cetirizine", 10), "Cetirizine");
    }
}
