//! Draws a `CompassGeometry` as a standalone SVG document. All positions come
//! from the geometry; the palette only picks colours.

use crate::model::geometry::{CompassGeometry, LabelAnchor};
use crate::report::{Colors, Palette, escape_xml, format_coord, format_score};

const FONT: &str = "system-ui, -apple-system, sans-serif";
const MARKER_RADIUS: f64 = 6.0;
const CENTER_DOT_RADIUS: f64 = 4.0;

pub fn render_compass_svg(geom: &CompassGeometry, palette: Palette) -> String {
    let colors = palette.colors();
    let size = format_coord(geom.canvas_size);
    let cx = format_coord(geom.center.x);
    let cy = format_coord(geom.center.y);
    let mut out = String::new();

    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\">\n"
    ));
    out.push_str(&format!(
        "  <rect width=\"{size}\" height=\"{size}\" fill=\"{}\"/>\n",
        colors.background
    ));

    out.push_str(&format!(
        "  <circle cx=\"{cx}\" cy=\"{cy}\" r=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\"/>\n",
        format_coord(geom.max_radius),
        colors.border
    ));
    for ring in &geom.rings {
        out.push_str(&format!(
            "  <circle cx=\"{cx}\" cy=\"{cy}\" r=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1\" opacity=\"0.5\"/>\n",
            format_coord(ring.radius),
            colors.grid
        ));
    }
    for spoke in &geom.spokes {
        out.push_str(&format!(
            "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"1\" opacity=\"0.7\"/>\n",
            format_coord(spoke.start.x),
            format_coord(spoke.start.y),
            format_coord(spoke.end.x),
            format_coord(spoke.end.y),
            colors.grid
        ));
    }

    let points: Vec<String> = geom
        .polygon_points()
        .iter()
        .map(|p| format!("{},{}", format_coord(p.x), format_coord(p.y)))
        .collect();
    out.push_str(&format!(
        "  <polygon points=\"{}\" fill=\"{accent}\" fill-opacity=\"0.2\" stroke=\"{accent}\" stroke-width=\"2\"/>\n",
        points.join(" "),
        accent = colors.accent
    ));

    for (point, label) in geom.polygon.iter().zip(geom.labels.iter()) {
        out.push_str(&format!(
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"2\"/>\n",
            format_coord(point.position.x),
            format_coord(point.position.y),
            format_score(MARKER_RADIUS),
            category_color(colors, point.index),
            colors.background
        ));
        push_label(&mut out, label, colors);
    }

    out.push_str(&format!(
        "  <circle cx=\"{cx}\" cy=\"{cy}\" r=\"{}\" fill=\"{}\"/>\n",
        format_score(CENTER_DOT_RADIUS),
        colors.accent
    ));
    for ring in &geom.rings {
        out.push_str(&format!(
            "  <text x=\"{cx}\" y=\"{}\" text-anchor=\"middle\" font-family=\"{FONT}\" font-size=\"10\" fill=\"{}\" opacity=\"0.7\">{}%</text>\n",
            format_coord(geom.center.y - ring.radius - 8.0),
            colors.text_muted,
            format_score(ring.level * 100.0)
        ));
    }

    out.push_str("</svg>\n");
    out
}

fn push_label(out: &mut String, label: &LabelAnchor, colors: &Colors) {
    let x = format_coord(label.position.x);
    let y = label.position.y;
    let letter = label
        .name
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect::<String>())
        .unwrap_or_default();

    out.push_str(&format!(
        "  <text x=\"{x}\" y=\"{}\" text-anchor=\"middle\" font-family=\"{FONT}\" font-size=\"24\" font-weight=\"bold\" fill=\"{}\">{}</text>\n",
        format_coord(y - 10.0),
        category_color(colors, label.index),
        escape_xml(&letter)
    ));
    out.push_str(&format!(
        "  <text x=\"{x}\" y=\"{}\" text-anchor=\"middle\" font-family=\"{FONT}\" font-size=\"14\" font-weight=\"600\" fill=\"{}\">{}/{}</text>\n",
        format_coord(y + 8.0),
        colors.text,
        format_score(label.score),
        format_score(label.maximum)
    ));
    out.push_str(&format!(
        "  <text x=\"{x}\" y=\"{}\" text-anchor=\"middle\" font-family=\"{FONT}\" font-size=\"12\" fill=\"{}\">{}</text>\n",
        format_coord(y + 24.0),
        colors.text_muted,
        escape_xml(&label.name)
    ));
}

fn category_color(colors: &Colors, index: usize) -> &'static str {
    colors.categories[index % colors.categories.len()]
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/svg.rs"]
mod tests;
