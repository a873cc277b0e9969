//! Canvas-based fee-split pie for feewise_web.

use feewise::chart::{self, ChartSlice};
use feewise::fmt::fmt_f64_fixed;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const SLICE_COLORS: [&str; 2] = [
    "#ef4444", // red for total fees
    "#22c55e", // green for net profit
];
const SLICE_BORDER: &str = "#ffffff";
const BG_COLOR: &str = "#ffffff";
const TEXT_COLOR: &str = "rgba(55, 65, 81, 0.9)";
const MUTED_TEXT_COLOR: &str = "rgba(107, 114, 128, 0.9)";

/// Draw the fees-vs-profit pie with a legend underneath.
///
/// Slices are sized by `area_weight` (magnitude; non-finite values draw
/// nothing). When there is no drawable area at all, an empty-state message
/// replaces the chart.
pub(super) fn draw_fee_split(
    canvas: &HtmlCanvasElement,
    slices: &[ChartSlice],
) -> Result<(), String> {
    let ctx = canvas
        .get_context("2d")
        .map_err(|_| "get_context failed")?
        .ok_or("no 2d context")?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| "cast failed")?;

    let w = canvas.width() as f64;
    let h = canvas.height() as f64;

    // Background
    ctx.set_fill_style_str(BG_COLOR);
    ctx.fill_rect(0.0, 0.0, w, h);

    let legend_h = 34.0;
    let cx = w / 2.0;
    let cy = (h - legend_h) / 2.0;
    let radius = (w.min(h - legend_h) / 2.0 - 14.0).max(10.0);

    let total = chart::total_area(slices);
    if !(total > 0.0) {
        ctx.set_font("13px system-ui, sans-serif");
        ctx.set_fill_style_str(MUTED_TEXT_COLOR);
        ctx.set_text_align("center");
        let _ = ctx.fill_text("Nothing to chart", cx, cy);
        return Ok(());
    }

    // Wedges: proportional to magnitude, starting at 12 o'clock.
    let mut angle = -std::f64::consts::FRAC_PI_2;
    for (i, slice) in slices.iter().enumerate() {
        let frac = slice.area_weight() / total;
        if frac <= 0.0 {
            continue;
        }
        let sweep = frac * std::f64::consts::PI * 2.0;

        ctx.set_fill_style_str(SLICE_COLORS[i % SLICE_COLORS.len()]);
        ctx.begin_path();
        ctx.move_to(cx, cy);
        ctx.arc(cx, cy, radius, angle, angle + sweep).ok();
        ctx.close_path();
        ctx.fill();

        ctx.set_stroke_style_str(SLICE_BORDER);
        ctx.set_line_width(2.0);
        ctx.stroke();

        angle += sweep;
    }

    // Legend: round swatch, label, signed value (the pie itself only shows
    // magnitudes, so a loss is readable here).
    ctx.set_font("12px system-ui, sans-serif");
    ctx.set_text_align("left");

    let entries: Vec<String> = slices
        .iter()
        .map(|s| format!("{} (${})", s.label, fmt_f64_fixed(s.value, 2)))
        .collect();

    let entry_gap = 18.0;
    let swatch_w = 14.0;
    let est_width = |e: &str| swatch_w + (e.len() as f64) * 6.4;
    let total_w: f64 =
        entries.iter().map(|e| est_width(e)).sum::<f64>() + entry_gap * (entries.len() - 1) as f64;

    let ly = h - 14.0;
    let mut lx = ((w - total_w) / 2.0).max(6.0);
    for (i, entry) in entries.iter().enumerate() {
        ctx.set_fill_style_str(SLICE_COLORS[i % SLICE_COLORS.len()]);
        ctx.begin_path();
        ctx.arc(lx + 4.0, ly - 4.0, 4.5, 0.0, std::f64::consts::PI * 2.0)
            .ok();
        ctx.fill();

        ctx.set_fill_style_str(TEXT_COLOR);
        let _ = ctx.fill_text(entry, lx + swatch_w, ly);

        lx += est_width(entry) + entry_gap;
    }

    Ok(())
}
