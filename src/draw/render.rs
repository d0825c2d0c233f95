//! Cairo-based rendering functions for sketches.

use super::color::Color;
use super::sketch::Sketch;
use super::stroke::{Point, Stroke};
use crate::util::{self, STROKE_TENSION};

/// Renders a complete sketch: background first, then every stroke in order.
///
/// Output depends only on the sketch dimensions, the background and the ordered strokes,
/// so rendering the same sketch twice produces identical pixels.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `sketch` - Strokes and canvas dimensions
/// * `background` - Color painted over the whole canvas before any stroke
pub fn render_sketch(ctx: &cairo::Context, sketch: &Sketch, background: Color) {
    render_background(ctx, sketch.width(), sketch.height(), background);
    render_strokes(ctx, sketch.strokes());
}

/// Fills the canvas rectangle with `color` at full opacity; its alpha is ignored.
pub fn render_background(ctx: &cairo::Context, width: u32, height: u32, color: Color) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_rgb(color.r, color.g, color.b);
    ctx.rectangle(0.0, 0.0, width as f64, height as f64);
    let _ = ctx.fill(); // A failed fill leaves the surface as it was; strokes still render.
    let _ = ctx.restore();
}

/// Renders strokes in slice order (first stroke = bottom layer).
pub fn render_strokes(ctx: &cairo::Context, strokes: &[Stroke]) {
    for stroke in strokes {
        render_stroke(ctx, stroke);
    }
}

/// Renders a single stroke as a smoothed path with round caps and joins.
///
/// A one-point stroke becomes a filled dot whose diameter equals the stroke width;
/// a stroke without points draws nothing.
pub fn render_stroke(ctx: &cairo::Context, stroke: &Stroke) {
    let points = stroke.points();
    let color = stroke.color;

    match points {
        [] => {}
        [dot] => render_dot(ctx, *dot, color, stroke.width),
        _ => {
            ctx.set_source_rgba(color.r, color.g, color.b, color.a);
            ctx.set_line_width(stroke.width);
            ctx.set_line_cap(cairo::LineCap::Round);
            ctx.set_line_join(cairo::LineJoin::Round);
            append_smoothed_path(ctx, points);
            let _ = ctx.stroke();
        }
    }
}

fn render_dot(ctx: &cairo::Context, center: Point, color: Color, width: f64) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.new_sub_path();
    ctx.arc(
        center.x,
        center.y,
        width / 2.0,
        0.0,
        std::f64::consts::PI * 2.0,
    );
    let _ = ctx.fill();
}

/// Builds the smoothed path through `points` (at least two) on the current context.
///
/// Two points give a straight segment. Longer strokes use a cardinal spline: quadratic
/// end segments and cubic inner segments whose handles come from
/// [`util::spline_control_points`].
fn append_smoothed_path(ctx: &cairo::Context, points: &[Point]) {
    let first = points[0];
    ctx.move_to(first.x, first.y);

    if points.len() == 2 {
        ctx.line_to(points[1].x, points[1].y);
        return;
    }

    // handles[i] belongs to points[i + 1]: (incoming, outgoing)
    let handles: Vec<(Point, Point)> = points
        .windows(3)
        .map(|w| util::spline_control_points(w[0], w[1], w[2], STROKE_TENSION))
        .collect();

    let (head_c1, head_c2) = util::quadratic_to_cubic(first, handles[0].0, points[1]);
    ctx.curve_to(
        head_c1.x, head_c1.y, head_c2.x, head_c2.y, points[1].x, points[1].y,
    );

    for (i, pair) in handles.windows(2).enumerate() {
        let end = points[i + 2];
        let (_, out) = pair[0];
        let (incoming, _) = pair[1];
        ctx.curve_to(out.x, out.y, incoming.x, incoming.y, end.x, end.y);
    }

    let last = points[points.len() - 1];
    let before_last = points[points.len() - 2];
    let (_, tail_control) = handles[handles.len() - 1];
    let (tail_c1, tail_c2) = util::quadratic_to_cubic(before_last, tail_control, last);
    ctx.curve_to(tail_c1.x, tail_c1.y, tail_c2.x, tail_c2.y, last.x, last.y);
}
