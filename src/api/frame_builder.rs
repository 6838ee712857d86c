use crate::core::LinearScale;
use crate::error::ExplorerResult;
use crate::render::{
    Color, PathPrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::ExplorerEngine;
use super::axis_ticks::{build_value_ticks, build_year_ticks};
use super::presentation::series_emphasis;

const AXIS_TEXT_COLOR: Color = Color::from_hex(0x333333);
const AXIS_FONT_SIZE_PX: f64 = 11.0;
const AXIS_TITLE_FONT_SIZE_PX: f64 = 12.0;
const LEGEND_FONT_SIZE_PX: f64 = 12.0;
const LEGEND_SWATCH_PX: f64 = 12.0;
const LEGEND_ROW_HEIGHT_PX: f64 = 20.0;
const LEGEND_OFFSET_PX: f64 = 10.0;
const LEGEND_TEXT_GAP_PX: f64 = 18.0;

/// Widens a single-year domain so it can be projected.
fn projectable_domain(domain: (f64, f64)) -> (f64, f64) {
    if (domain.1 - domain.0).abs() <= f64::EPSILON {
        (domain.0 - 0.5, domain.1 + 0.5)
    } else {
        domain
    }
}

pub(super) fn build_render_frame<R: Renderer>(
    engine: &ExplorerEngine<R>,
) -> ExplorerResult<RenderFrame> {
    let config = engine.config;
    let plot = config.plot_area();
    let x_range = plot.x_range();
    let y_range = plot.y_range();
    let x_domain = projectable_domain(engine.x_domain());
    let y_domain = engine.derived.y_domain;
    let x_scale = LinearScale::new(x_domain.0, x_domain.1)?;
    let y_scale = LinearScale::new(y_domain.0, y_domain.1)?;

    let mut frame = RenderFrame::new(config.viewport);

    // Clip to whole years around the zoomed window; the backend clips pixels.
    let visible_years = (x_domain.0.floor() as i32, x_domain.1.ceil() as i32);
    let focused = engine.state.focused.as_deref();
    for series in &engine.derived.series {
        let emphasis = series_emphasis(focused, &series.key);
        let mut points = Vec::with_capacity(series.values.len());
        for sample in &series.values {
            if sample.year < visible_years.0 || sample.year > visible_years.1 {
                continue;
            }
            if !sample.arrivals.is_finite() {
                continue;
            }
            points.push((
                x_scale.domain_to_pixel(f64::from(sample.year), x_range)?,
                y_scale.domain_to_pixel(sample.arrivals, y_range)?,
            ));
        }
        frame = frame.with_path(PathPrimitive {
            key: series.key.clone(),
            points,
            stroke_width: emphasis.stroke_width,
            opacity: emphasis.opacity,
            color: engine.derived.colors.color_for_series(series),
        });
    }

    let axis_y = y_range.0;
    for tick in build_year_ticks(x_domain, engine.state.year_range(), x_range)? {
        frame = frame.with_text(TextPrimitive::new(
            tick.label,
            tick.pixel,
            axis_y + 16.0,
            AXIS_FONT_SIZE_PX,
            AXIS_TEXT_COLOR,
            TextHAlign::Center,
        ));
    }
    for tick in build_value_ticks(y_domain, engine.state.measure, y_range)? {
        frame = frame.with_text(TextPrimitive::new(
            tick.label,
            plot.left - 6.0,
            tick.pixel,
            AXIS_FONT_SIZE_PX,
            AXIS_TEXT_COLOR,
            TextHAlign::Right,
        ));
    }

    frame = frame
        .with_text(TextPrimitive::new(
            "Year",
            plot.left + plot.width / 2.0,
            axis_y + 36.0,
            AXIS_TITLE_FONT_SIZE_PX,
            AXIS_TEXT_COLOR,
            TextHAlign::Center,
        ))
        .with_text(TextPrimitive::new(
            engine.axis_label(),
            LEGEND_OFFSET_PX,
            plot.top - LEGEND_OFFSET_PX,
            AXIS_TITLE_FONT_SIZE_PX,
            AXIS_TEXT_COLOR,
            TextHAlign::Left,
        ));

    let legend_x = f64::from(config.viewport.width) - config.margins.right + LEGEND_OFFSET_PX;
    let legend = engine
        .legend()
        .into_iter()
        .filter(|entry| !entry.label.is_empty());
    for (index, entry) in legend.enumerate() {
        let row_y = config.margins.top + index as f64 * LEGEND_ROW_HEIGHT_PX;
        frame = frame
            .with_rect(RectPrimitive {
                x: legend_x,
                y: row_y,
                width: LEGEND_SWATCH_PX,
                height: LEGEND_SWATCH_PX,
                fill_color: entry.color,
            })
            .with_text(TextPrimitive::new(
                entry.label,
                legend_x + LEGEND_TEXT_GAP_PX,
                row_y + LEGEND_SWATCH_PX - 2.0,
                LEGEND_FONT_SIZE_PX,
                AXIS_TEXT_COLOR,
                TextHAlign::Left,
            ));
    }

    Ok(frame)
}
