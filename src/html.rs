//! HTML output
//!
//! Writes a self-contained page with the heat map as inline SVG. Every cell carries
//! `data-year`, `data-month` (zero-based) and `data-temp` attributes plus the tooltip
//! text and anchor computed by [`TooltipController`], so the embedded script only has
//! to toggle visibility. Works offline; no external assets.

use crate::layout::HeatMapLayout;
use crate::tooltip::{TooltipController, TooltipState};
use std::fmt::Write as _;

/// Render a layout as a complete HTML document.
pub fn render_page(layout: &HeatMapLayout) -> String {
    let canvas = &layout.canvas;
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Monthly Global Land-Surface Temperature</title>
    <style>{css}</style>
</head>
<body>
    <div id="heat-map" style="width: {w}px;">
        <svg width="{w}" height="{h}" xmlns="http://www.w3.org/2000/svg">
            {description}
            {plot}
            {legend}
        </svg>
        <pre id="tooltip" class="tooltip--hidden"></pre>
    </div>
    <script>{js}</script>
</body>
</html>"#,
        css = inline_css(),
        js = inline_javascript(),
        w = canvas.width,
        h = canvas.height,
        description = render_description(layout),
        plot = render_plot(layout),
        legend = render_legend(layout),
    )
}

fn render_description(layout: &HeatMapLayout) -> String {
    format!(
        r#"<text id="description" x="{x}" y="{y}" dominant-baseline="middle">{text}</text>"#,
        x = layout.canvas.plot_origin.0,
        y = layout.canvas.description_y,
        text = escape_html(&layout.description),
    )
}

fn render_plot(layout: &HeatMapLayout) -> String {
    let (ox, oy) = layout.canvas.plot_origin;
    let tooltips = TooltipController::for_layout(layout);
    let mut out = String::new();

    let _ = write!(out, r#"<g transform="translate({ox}, {oy})">"#);
    for cell in &layout.cells {
        let (tip, tip_x, tip_y) = match tooltips.on_hover(&cell.record()) {
            TooltipState::Visible(t) => (t.text(), ox + t.anchor_x, oy + t.anchor_y),
            TooltipState::Hidden => (String::new(), 0.0, 0.0),
        };
        let _ = write!(
            out,
            r#"<rect class="cell" x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" data-year="{}" data-month="{}" data-temp="{}" data-tooltip="{}" data-tip-x="{:.2}" data-tip-y="{:.2}"/>"#,
            cell.x,
            cell.y,
            cell.width,
            cell.height,
            cell.color,
            cell.year,
            cell.month_index,
            cell.temperature,
            escape_html(&tip),
            tip_x,
            tip_y,
        );
    }

    let plot_w = layout.config.width;
    let plot_h = layout.config.height;

    out.push_str(r#"<g id="y-axis" class="axis">"#);
    let _ = write!(out, r#"<line x1="0" y1="0" x2="0" y2="{plot_h}"/>"#);
    for tick in &layout.y_ticks {
        let _ = write!(
            out,
            r#"<g class="tick" transform="translate(0, {:.2})"><line x2="-6"/><text x="-9" dominant-baseline="middle" text-anchor="end">{}</text></g>"#,
            tick.offset,
            escape_html(&tick.label),
        );
    }
    out.push_str("</g>");

    let _ = write!(
        out,
        r#"<g id="x-axis" class="axis" transform="translate(0, {plot_h})"><line x1="0" y1="0" x2="{plot_w}" y2="0"/>"#
    );
    for tick in &layout.x_ticks {
        let _ = write!(
            out,
            r#"<g class="tick" transform="translate({:.2}, 0)"><line y2="6"/><text y="9" dominant-baseline="hanging" text-anchor="middle">{}</text></g>"#,
            tick.offset,
            escape_html(&tick.label),
        );
    }
    out.push_str("</g></g>");
    out
}

fn render_legend(layout: &HeatMapLayout) -> String {
    let (lx, ly) = layout.canvas.legend_origin;
    let bar_h = layout.config.legend_height;
    let mut out = String::new();

    let _ = write!(out, r#"<g id="legend" transform="translate({lx}, {ly})">"#);
    for seg in &layout.legend_segments {
        let _ = write!(
            out,
            r#"<rect x="{:.2}" y="0" width="{:.2}" height="{bar_h}" fill="{}"/>"#,
            seg.x, seg.width, seg.color,
        );
    }
    let _ = write!(
        out,
        r#"<g id="temp-axis" class="axis" transform="translate(0, {bar_h})"><line x1="0" y1="0" x2="{}" y2="0"/>"#,
        layout.config.legend_width
    );
    for tick in &layout.legend_ticks {
        let _ = write!(
            out,
            r#"<g class="tick" transform="translate({:.2}, 0)"><line y2="6"/><text y="9" dominant-baseline="hanging" text-anchor="middle">{}</text></g>"#,
            tick.offset,
            escape_html(&tick.label),
        );
    }
    out.push_str("</g></g>");
    out
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn inline_css() -> &'static str {
    r#"
body { font-family: sans-serif; margin: 24px; color: #333; }
#heat-map { position: relative; }
.axis line { stroke: #333; stroke-width: 1; }
.axis text { font-size: 11px; fill: #333; }
#description { font-size: 16px; }
.cell:hover { stroke: #000; stroke-width: 1; }
#tooltip {
    position: absolute;
    margin: 0;
    padding: 6px 8px;
    background: rgba(0, 0, 0, 0.8);
    color: #fff;
    font-size: 12px;
    border-radius: 4px;
    pointer-events: none;
}
.tooltip--hidden { display: none; }
"#
}

fn inline_javascript() -> &'static str {
    r#"
(function () {
    var tooltip = document.getElementById('tooltip');
    document.querySelectorAll('.cell').forEach(function (cell) {
        cell.addEventListener('mouseover', function () {
            tooltip.textContent = cell.dataset.tooltip;
            tooltip.style.left = cell.dataset.tipX + 'px';
            tooltip.style.top = cell.dataset.tipY + 'px';
            tooltip.setAttribute('data-year', cell.dataset.year);
            tooltip.classList.remove('tooltip--hidden');
        });
        cell.addEventListener('mouseout', function () {
            tooltip.classList.add('tooltip--hidden');
        });
    });
})();
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html("<a href=\"x\">&</a>"), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
    }
}
