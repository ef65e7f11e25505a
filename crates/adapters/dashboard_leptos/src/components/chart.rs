//! Statistics charts drawn with `plotters` onto a `<canvas>`.
//!
//! All four chart kinds draw from the same ordered `(label, count)` series.

use std::error::Error;

use leptos::html::Canvas;
use leptos::prelude::*;
use plotters::coord::Shift;
use plotters::coord::ranged1d::SegmentedCoord;
use plotters::coord::types::{RangedCoordu64, RangedCoordusize};
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use schooldesk_domain::stats::{self, StatPoint};
use web_sys::HtmlCanvasElement;

const WIDTH: u32 = 320;
const HEIGHT: u32 = 250;
const CENTER: (i32, i32) = (160, 125);
const PIE_RADIUS: f64 = 80.0;

/// Indigo, green, amber, red.
const PALETTE: [RGBColor; 4] = [
    RGBColor(0x4F, 0x46, 0xE5),
    RGBColor(0x10, 0xB9, 0x81),
    RGBColor(0xF5, 0x9E, 0x0B),
    RGBColor(0xEF, 0x44, 0x44),
];

type DrawResult = Result<(), Box<dyn Error>>;

fn color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}

/// The chart kinds rendered on the statistics views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Pie,
    Line,
    Area,
}

impl ChartKind {
    pub const ALL: [Self; 4] = [Self::Bar, Self::Pie, Self::Line, Self::Area];

    fn title(self) -> &'static str {
        match self {
            Self::Bar => "Bar Chart",
            Self::Pie => "Pie Chart",
            Self::Line => "Line Chart",
            Self::Area => "Area Chart",
        }
    }
}

/// Headroom above the tallest point, never an empty range.
fn value_axis_top(series: &[StatPoint]) -> u64 {
    let peak = stats::peak(series);
    (peak + peak / 10).max(1) + 1
}

fn label_at(series: &[StatPoint], segment: &SegmentValue<usize>) -> String {
    match segment {
        SegmentValue::CenterOf(index) => series
            .get(*index)
            .map(|point| point.label.clone())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

fn segment_index(segment: &SegmentValue<usize>) -> usize {
    match segment {
        SegmentValue::Exact(index) | SegmentValue::CenterOf(index) => *index,
        SegmentValue::Last => 0,
    }
}

type Grid = Cartesian2d<SegmentedCoord<RangedCoordusize>, RangedCoordu64>;

/// Axes shared by the bar, line and area charts: one segment per point.
fn cartesian<'a>(
    root: &'a DrawingArea<CanvasBackend, Shift>,
    series: &[StatPoint],
) -> Result<ChartContext<'a, CanvasBackend, Grid>, Box<dyn Error>> {
    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .x_label_area_size(28)
        .y_label_area_size(36)
        .build_cartesian_2d(
            (0..series.len()).into_segmented(),
            0_u64..value_axis_top(series),
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|segment| label_at(series, segment))
        .draw()?;
    Ok(chart)
}

fn centers(series: &[StatPoint]) -> impl Iterator<Item = (SegmentValue<usize>, u64)> + Clone {
    series
        .iter()
        .enumerate()
        .map(|(index, point)| (SegmentValue::CenterOf(index), point.value))
}

fn draw_bars(root: &DrawingArea<CanvasBackend, Shift>, series: &[StatPoint]) -> DrawResult {
    let mut chart = cartesian(root, series)?;
    chart.draw_series(
        Histogram::vertical(&chart)
            .margin(12)
            .style_func(|segment, _| color(segment_index(segment)).filled())
            .data(series.iter().enumerate().map(|(index, p)| (index, p.value))),
    )?;
    Ok(())
}

fn draw_line(root: &DrawingArea<CanvasBackend, Shift>, series: &[StatPoint]) -> DrawResult {
    let mut chart = cartesian(root, series)?;
    chart.draw_series(LineSeries::new(centers(series), color(1).stroke_width(3)))?;
    chart.draw_series(centers(series).map(|coord| Circle::new(coord, 4, color(1).filled())))?;
    Ok(())
}

fn draw_area(root: &DrawingArea<CanvasBackend, Shift>, series: &[StatPoint]) -> DrawResult {
    let mut chart = cartesian(root, series)?;
    chart.draw_series(
        AreaSeries::new(centers(series), 0, color(0).mix(0.35)).border_style(color(0)),
    )?;
    Ok(())
}

fn draw_pie(root: &DrawingArea<CanvasBackend, Shift>, series: &[StatPoint]) -> DrawResult {
    let total: u64 = series.iter().map(|p| p.value).sum();
    if total == 0 {
        root.draw(&Text::new(
            "No data",
            (CENTER.0 - 28, CENTER.1),
            ("sans-serif", 16).into_font(),
        ))?;
        return Ok(());
    }

    #[allow(clippy::cast_precision_loss)]
    let sizes: Vec<f64> = series.iter().map(|p| p.value as f64).collect();
    let colors: Vec<RGBColor> = (0..series.len()).map(color).collect();
    let labels: Vec<String> = series.iter().map(|p| p.label.clone()).collect();

    let mut pie = Pie::new(&CENTER, &PIE_RADIUS, &sizes, &colors, &labels);
    pie.label_style(("sans-serif", 12).into_font());
    root.draw(&pie)?;
    Ok(())
}

fn draw(kind: ChartKind, canvas: HtmlCanvasElement, series: &[StatPoint]) -> DrawResult {
    let backend =
        CanvasBackend::with_canvas_object(canvas).ok_or("canvas has no 2d drawing context")?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    match kind {
        ChartKind::Bar => draw_bars(&root, series)?,
        ChartKind::Pie => draw_pie(&root, series)?,
        ChartKind::Line => draw_line(&root, series)?,
        ChartKind::Area => draw_area(&root, series)?,
    }
    root.present()?;
    Ok(())
}

/// One chart card.
#[component]
pub fn StatChart(kind: ChartKind, series: Vec<StatPoint>) -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if let Err(err) = draw(kind, canvas, &series) {
            leptos::logging::warn!("failed to draw {}: {err}", kind.title());
        }
    });

    view! {
        <div class="chart-card">
            <h3>{kind.title()}</h3>
            <canvas node_ref=canvas_ref width=WIDTH.to_string() height=HEIGHT.to_string()></canvas>
        </div>
    }
}

/// Every chart kind over the same series.
#[component]
pub fn StatCharts(series: Vec<StatPoint>) -> impl IntoView {
    view! {
        <div class="chart-grid">
            {ChartKind::ALL
                .into_iter()
                .map(|kind| view! { <StatChart kind=kind series=series.clone()/> })
                .collect_view()}
        </div>
    }
}
