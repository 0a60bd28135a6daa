//! Minimal SVG charts: bar, line and pie.
//!
//! Each chart takes `(label, value)` pairs and a value formatter; layout math
//! lives in [`geometry`].

pub mod geometry;

use leptos::prelude::*;

use geometry::{
    bar_layout, color, line_points, nice_max, percent_label, pie_slices, polyline_path, ticks,
    truncate_label, Frame,
};

const FRAME: Frame = Frame::new(640.0, 300.0);
const TICK_COUNT: usize = 4;
const LABEL_CHARS: usize = 12;

fn series_max(points: &[(String, f64)]) -> f64 {
    nice_max(points.iter().map(|(_, v)| *v).fold(0.0, f64::max))
}

/// Horizontal grid lines and y-axis labels.
fn grid(max: f64, axis_format: fn(f64) -> String) -> impl IntoView {
    ticks(max, TICK_COUNT)
        .into_iter()
        .map(|tick| {
            let y = FRAME.y_for(tick, max);
            view! {
                <line
                    x1=FRAME.left
                    x2=FRAME.width - FRAME.right
                    y1=y
                    y2=y
                    class="chart__grid"
                />
                <text x=FRAME.left - 8.0 y=y + 4.0 text-anchor="end" class="chart__axis-label">
                    {axis_format(tick)}
                </text>
            }
        })
        .collect_view()
}

fn x_label(x: f64, label: &str) -> impl IntoView {
    view! {
        <text x=x y=FRAME.baseline() + 20.0 text-anchor="middle" class="chart__axis-label">
            {truncate_label(label, LABEL_CHARS)}
        </text>
    }
}

#[component]
pub fn BarChart(
    points: Vec<(String, f64)>,
    /// Formats y-axis ticks.
    axis_format: fn(f64) -> String,
) -> impl IntoView {
    let max = series_max(&points);
    let values: Vec<f64> = points.iter().map(|(_, v)| *v).collect();
    let bars = bar_layout(&values, &FRAME, max);

    view! {
        <svg class="chart" viewBox=format!("0 0 {} {}", FRAME.width, FRAME.height) role="img">
            {grid(max, axis_format)}
            {bars
                .into_iter()
                .zip(points)
                .enumerate()
                .map(|(i, (bar, (label, _)))| {
                    view! {
                        <rect
                            x=bar.x
                            y=bar.y
                            width=bar.width
                            height=bar.height
                            rx="3"
                            fill=color(i)
                        />
                        {x_label(bar.center_x(), &label)}
                    }
                })
                .collect_view()}
        </svg>
    }
}

#[component]
pub fn LineChart(
    points: Vec<(String, f64)>,
    axis_format: fn(f64) -> String,
) -> impl IntoView {
    let max = series_max(&points);
    let values: Vec<f64> = points.iter().map(|(_, v)| *v).collect();
    let vertices = line_points(&values, &FRAME, max);
    let path = polyline_path(&vertices);

    view! {
        <svg class="chart" viewBox=format!("0 0 {} {}", FRAME.width, FRAME.height) role="img">
            {grid(max, axis_format)}
            <path d=path class="chart__line" fill="none" stroke=color(0) stroke-width="2.5" />
            {vertices
                .into_iter()
                .zip(points)
                .map(|((x, y), (label, _))| {
                    view! {
                        <circle cx=x cy=y r="4" fill=color(0) />
                        {x_label(x, &label)}
                    }
                })
                .collect_view()}
        </svg>
    }
}

#[component]
pub fn PieChart(
    points: Vec<(String, f64)>,
    /// Formats the legend values.
    value_format: fn(f64) -> String,
) -> impl IntoView {
    let values: Vec<f64> = points.iter().map(|(_, v)| *v).collect();
    let slices = pie_slices(&values, 110.0, 110.0, 100.0);

    view! {
        <div class="chart chart--pie">
            <svg viewBox="0 0 220 220" role="img" class="chart__pie">
                {slices
                    .iter()
                    .enumerate()
                    .filter(|(_, slice)| !slice.path.is_empty())
                    .map(|(i, slice)| {
                        let label = percent_label(slice.fraction).unwrap_or_default();
                        view! {
                            <path d=slice.path.clone() fill=color(i) stroke="#fff" stroke-width="1" />
                            <text
                                x=slice.label_x
                                y=slice.label_y + 4.0
                                text-anchor="middle"
                                class="chart__pie-label"
                            >
                                {label}
                            </text>
                        }
                    })
                    .collect_view()}
            </svg>
            <ul class="chart__legend">
                {points
                    .into_iter()
                    .enumerate()
                    .map(|(i, (label, value))| {
                        view! {
                            <li>
                                <span class="chart__swatch" style:background-color=color(i)></span>
                                <span class="chart__legend-label">{label}</span>
                                <span class="chart__legend-value">{value_format(value)}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
