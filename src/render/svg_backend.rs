use std::fmt::Write as _;

use crate::core::Point;
use crate::error::{DiagramError, DiagramResult};
use crate::render::{
    Color, LayerPrimitives, LineStrokeStyle, Renderer, Scene, SceneLayerKind, TextHAlign,
};

use super::primitives::format_decimal as num;

/// Renders scenes into standalone SVG documents.
///
/// The surface transform is emitted as a group transform, so the document
/// keeps frame-space coordinates and only the outer size follows the surface.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    font_family: Option<String>,
    document: Option<String>,
    documents_written: usize,
}

impl SvgRenderer {
    #[must_use]
    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = Some(font_family.into());
        self
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    /// Latest document; `None` until the first successful pass.
    #[must_use]
    pub fn last_document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    #[must_use]
    pub fn documents_written(&self) -> usize {
        self.documents_written
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, scene: &Scene) -> DiagramResult<()> {
        scene.validate()?;
        let font_family = self
            .font_family
            .as_deref()
            .unwrap_or("ui-sans-serif, system-ui");
        let document = scene_to_svg(scene, font_family)
            .map_err(|err| DiagramError::InvalidData(format!("failed to write svg: {err}")))?;
        self.document = Some(document);
        self.documents_written += 1;
        Ok(())
    }
}

/// Serializes `scene` as an SVG document.
pub fn scene_to_svg(scene: &Scene, font_family: &str) -> Result<String, std::fmt::Error> {
    let mut svg = String::new();
    let width = scene.surface.width;
    let height = scene.surface.height;
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )?;
    let transform = scene.transform;
    writeln!(
        svg,
        r#"  <g transform="translate({} {}) scale({})" font-family="{}">"#,
        num(transform.offset_x),
        num(transform.offset_y),
        num(transform.scale),
        escape(font_family)
    )?;
    for layer in &scene.layers {
        write_layer(&mut svg, layer)?;
    }
    writeln!(svg, "  </g>")?;
    writeln!(svg, "</svg>")?;
    Ok(svg)
}

fn write_layer(svg: &mut String, layer: &LayerPrimitives) -> std::fmt::Result {
    writeln!(svg, r#"    <g data-layer="{}">"#, layer_name(layer.kind))?;

    for rect in &layer.rects {
        write!(
            svg,
            r#"      <rect x="{}" y="{}" width="{}" height="{}" rx="{}" {}"#,
            num(rect.x),
            num(rect.y),
            num(rect.width),
            num(rect.height),
            num(rect.corner_radius),
            fill_attr(rect.fill_color)
        )?;
        if rect.border_width > 0.0 {
            write!(
                svg,
                r#" {} stroke-width="{}""#,
                stroke_attr(rect.border_color),
                num(rect.border_width)
            )?;
        }
        writeln!(svg, "/>")?;
    }

    for line in &layer.lines {
        writeln!(
            svg,
            r#"      <line x1="{}" y1="{}" x2="{}" y2="{}" {} stroke-width="{}"{}{}/>"#,
            num(line.x1),
            num(line.y1),
            num(line.x2),
            num(line.y2),
            stroke_attr(line.color),
            num(line.stroke_width),
            dash_attr(line.stroke_style),
            if line.round_cap {
                r#" stroke-linecap="round""#
            } else {
                ""
            }
        )?;
    }

    for polyline in &layer.polylines {
        writeln!(
            svg,
            r#"      <polyline points="{}" fill="none" {} stroke-width="{}"{} stroke-linecap="round" stroke-linejoin="round"/>"#,
            points_attr(&polyline.points),
            stroke_attr(polyline.color),
            num(polyline.stroke_width),
            dash_attr(polyline.stroke_style),
        )?;
    }

    for path in &layer.paths {
        let mut d = String::new();
        for (index, point) in path.points.iter().enumerate() {
            let command = if index == 0 { 'M' } else { 'L' };
            write!(d, "{command} {} {} ", num(point.x), num(point.y))?;
        }
        d.push('Z');
        writeln!(svg, r#"      <path d="{d}" {}/>"#, fill_attr(path.fill_color))?;
    }

    for circle in &layer.circles {
        writeln!(
            svg,
            r#"      <circle cx="{}" cy="{}" r="{}" {}/>"#,
            num(circle.cx),
            num(circle.cy),
            num(circle.radius),
            fill_attr(circle.fill_color)
        )?;
    }

    for text in &layer.texts {
        let anchor = match text.h_align {
            TextHAlign::Left => "start",
            TextHAlign::Center => "middle",
            TextHAlign::Right => "end",
        };
        writeln!(
            svg,
            r#"      <text x="{}" y="{}" font-size="{}" text-anchor="{anchor}" {}>{}</text>"#,
            num(text.x),
            num(text.y),
            num(text.font_size_px),
            fill_attr(text.color),
            escape(&text.text)
        )?;
    }

    writeln!(svg, "    </g>")
}

fn layer_name(kind: SceneLayerKind) -> &'static str {
    match kind {
        SceneLayerKind::Grid => "grid",
        SceneLayerKind::Rows => "rows",
        SceneLayerKind::Trace => "trace",
        SceneLayerKind::GapIndicator => "gap",
        SceneLayerKind::Status => "status",
    }
}

fn fill_attr(color: Color) -> String {
    format!(r#"fill="{}""#, color.to_css())
}

fn stroke_attr(color: Color) -> String {
    format!(r#"stroke="{}""#, color.to_css())
}

fn dash_attr(style: LineStrokeStyle) -> String {
    match style {
        LineStrokeStyle::Solid => String::new(),
        LineStrokeStyle::Dashed { dash, gap } => {
            format!(r#" stroke-dasharray="{} {}""#, num(dash), num(gap))
        }
    }
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|point| format!("{},{}", num(point.x), num(point.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fixed three-decimal output with trailing zeros trimmed.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{escape, num};

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(num(240.0), "240");
        assert_eq!(num(306.666_666), "306.667");
        assert_eq!(num(-0.0001), "0");
        assert_eq!(num(1.5), "1.5");
    }

    #[test]
    fn markup_characters_are_escaped() {
        assert_eq!(escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }
}
