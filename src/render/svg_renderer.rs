use std::fmt::Write;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, LinePrimitive, PolylinePrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive, TooltipPrimitive,
};

/// Renders frames into an SVG document string.
///
/// Tooltips become `foreignObject` elements whose inner `div` carries a
/// `data-tooltip-key` attribute, so a browser host can measure them after
/// layout and feed the sizes back to the engine.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Document produced by the most recent render.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    fn write_frame(out: &mut String, frame: &RenderFrame) -> std::fmt::Result {
        let width = frame.viewport.width;
        let height = frame.viewport.height;
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        for line in &frame.lines {
            write_line(out, line)?;
        }
        for polyline in &frame.polylines {
            write_polyline(out, polyline)?;
        }
        for circle in &frame.circles {
            write_circle(out, circle)?;
        }
        for text in &frame.texts {
            write_text(out, text)?;
        }
        for tooltip in &frame.tooltips {
            write_tooltip(out, tooltip)?;
        }
        writeln!(out, "</svg>")
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let mut out = String::new();
        Self::write_frame(&mut out, frame)
            .map_err(|e| ChartError::InvalidData(format!("failed to write svg: {e}")))?;
        self.document = out;
        Ok(())
    }
}

fn write_line(out: &mut String, line: &LinePrimitive) -> std::fmt::Result {
    write!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}""#,
        line.x1,
        line.y1,
        line.x2,
        line.y2,
        escape_xml(line.color.as_str()),
        line.stroke_width
    )?;
    if let Some(dash) = line.dash {
        write!(out, r#" stroke-dasharray="{} {}""#, dash.dash, dash.gap)?;
    }
    writeln!(out, "/>")
}

fn write_polyline(out: &mut String, polyline: &PolylinePrimitive) -> std::fmt::Result {
    let points = polyline
        .points
        .iter()
        .map(|(x, y)| format!("{x},{y}"))
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(
        out,
        r#"<polyline data-series="{}" fill="none" stroke="{}" stroke-width="{}" points="{points}"/>"#,
        escape_xml(&polyline.series_key),
        escape_xml(polyline.color.as_str()),
        polyline.stroke_width
    )
}

fn write_circle(out: &mut String, circle: &CirclePrimitive) -> std::fmt::Result {
    let color = escape_xml(circle.color.as_str());
    writeln!(
        out,
        r#"<circle cx="{}" cy="{}" r="{}" fill="{color}" stroke="{color}" stroke-width="1"/>"#,
        circle.cx, circle.cy, circle.radius
    )
}

fn write_text(out: &mut String, text: &TextPrimitive) -> std::fmt::Result {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    writeln!(
        out,
        r#"<text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{anchor}">{}</text>"#,
        text.x,
        text.y,
        text.font_size_px,
        escape_xml(text.color.as_str()),
        escape_xml(&text.text)
    )
}

fn write_tooltip(out: &mut String, tooltip: &TooltipPrimitive) -> std::fmt::Result {
    write!(
        out,
        r#"<foreignObject x="{}" y="{}" width="{}" height="{}">"#,
        tooltip.x, tooltip.y, tooltip.width, tooltip.height
    )?;
    write!(
        out,
        r#"<div xmlns="http://www.w3.org/1999/xhtml" data-tooltip-key="{}" style="display:inline-block"#,
        escape_xml(&tooltip.key.to_string())
    )?;
    if let Some(color) = &tooltip.text_color {
        write!(out, ";color:{}", escape_xml(color.as_str()))?;
    }
    writeln!(out, r#"">{}</div></foreignObject>"#, escape_xml(&tooltip.content))
}

fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
