//! SVG export of laid-out balloons

use std::fmt::Write;
use std::path::Path;

use balloon_tip::{BalloonLayout, BalloonPath, Color, PathCommand, Rect};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to format SVG: {0}")]
    Format(#[from] std::fmt::Error),
    #[error("Failed to write SVG: {0}")]
    Io(#[from] std::io::Error),
}

/// "#rrggbb" plus opacity
fn color_hex(color: Color) -> (String, f32) {
    let [r, g, b, a] = color.to_array();
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    (
        format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b)),
        a.clamp(0.0, 1.0),
    )
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// SVG path data for a balloon outline
pub fn path_data(path: &BalloonPath) -> Result<String, std::fmt::Error> {
    let mut d = String::new();
    for command in path.commands() {
        match *command {
            PathCommand::RoundedRect {
                rect,
                corner_radius,
            } => {
                let (x0, x1, y0, y1) = (rect.min_x(), rect.max_x(), rect.min_y(), rect.max_y());
                let r = corner_radius
                    .min((x1 - x0) * 0.5)
                    .min((y1 - y0) * 0.5)
                    .max(0.0);
                write!(
                    d,
                    "M{:.1},{:.1} H{:.1} A{r:.1},{r:.1} 0 0 1 {:.1},{:.1} V{:.1} A{r:.1},{r:.1} 0 0 1 {:.1},{:.1} H{:.1} A{r:.1},{r:.1} 0 0 1 {:.1},{:.1} V{:.1} A{r:.1},{r:.1} 0 0 1 {:.1},{:.1} Z ",
                    x0 + r, y0,
                    x1 - r,
                    x1, y0 + r,
                    y1 - r,
                    x1 - r, y1,
                    x0 + r,
                    x0, y1 - r,
                    y0 + r,
                    x0 + r, y0,
                    r = r
                )?;
            }
            PathCommand::MoveTo(p) => {
                write!(d, "M{:.1},{:.1} ", p.x, p.y)?;
            }
            PathCommand::LineTo(p) => {
                write!(d, "L{:.1},{:.1} ", p.x, p.y)?;
            }
        }
    }
    Ok(d.trim_end().to_string())
}

/// Render the screen and every balloon into one SVG document
pub fn render_svg(
    screen: &Rect,
    background: Color,
    balloons: &[(String, BalloonLayout)],
) -> Result<String, ExportError> {
    let mut svg = String::new();
    let (background_hex, _) = color_hex(background);
    write!(
        svg,
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="{:.0} {:.0} {:.0} {:.0}">
  <rect x="{:.0}" y="{:.0}" width="{:.0}" height="{:.0}" fill="{}" />
"#,
        screen.width,
        screen.height,
        screen.x,
        screen.y,
        screen.width,
        screen.height,
        screen.x,
        screen.y,
        screen.width,
        screen.height,
        background_hex
    )?;

    for (name, layout) in balloons {
        let (fill, opacity) = color_hex(layout.tint);
        writeln!(svg, "  <g id=\"{}\">", escape_xml(name))?;
        writeln!(
            svg,
            "    <path d=\"{}\" fill=\"{}\" fill-opacity=\"{:.2}\" />",
            path_data(&layout.screen_outline())?,
            fill,
            opacity
        )?;
        writeln!(
            svg,
            "    <rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" rx=\"{:.1}\" ry=\"{:.1}\" fill=\"#ffffff\" />",
            layout.card.x,
            layout.card.y,
            layout.card.width,
            layout.card.height,
            layout.card_corner_radius,
            layout.card_corner_radius
        )?;
        svg.push_str("  </g>\n");
    }

    svg.push_str("</svg>\n");
    Ok(svg)
}

/// Write an SVG document to disk
pub fn write_svg(path: impl AsRef<Path>, svg: &str) -> Result<(), ExportError> {
    std::fs::write(path, svg)?;
    Ok(())
}
