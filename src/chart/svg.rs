//! Minimal SVG document writer for the chart

use std::fmt::Write;

use super::bands::FilledPath;
use super::colors::{BAND_STROKE, BAND_STROKE_WIDTH, HISTOGRAM_FILL, HISTOGRAM_OPACITY};
use super::histogram::PlayBar;
use super::labels::TextLabel;
use super::{FONT_SIZE, GRAPH_BORDER, LABEL_ROTATION_DEGREES, Layout, MARGIN_X};

const CLIP_ID: &str = "graph_clip";

/// Escape XML special characters for text content and attribute values
pub(super) fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

// Writing into a String cannot fail, so fmt results are discarded below.
pub(super) struct SvgDocument {
    out: String,
}

impl SvgDocument {
    /// Open the document and declare the graph clip region
    pub(super) fn new(layout: &Layout) -> Self {
        let mut out = String::new();
        let _ = writeln!(out, r#"<?xml version="1.0" encoding="utf-8" ?>"#);
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = layout.width,
            h = layout.height
        );
        let _ = writeln!(
            out,
            r#"<defs><clipPath id="{}"><rect x="0" y="0" width="{}" height="{}" /></clipPath></defs>"#,
            CLIP_ID, layout.graph_width, layout.graph_height
        );
        Self { out }
    }

    /// Start the clipped group holding bands, bars and separators
    pub(super) fn begin_graph(&mut self) {
        let _ = writeln!(
            self.out,
            r#"<g clip-path="url(#{})" transform="translate({},0)">"#,
            CLIP_ID,
            MARGIN_X + GRAPH_BORDER
        );
    }

    pub(super) fn end_graph(&mut self) {
        let _ = writeln!(self.out, "</g>");
    }

    pub(super) fn filled_path(&mut self, path: &FilledPath) {
        let _ = writeln!(
            self.out,
            r#"<path d="{}" fill="{}" />"#,
            path.data,
            path.color.to_css()
        );
    }

    pub(super) fn play_bar(&mut self, bar: &PlayBar) {
        let _ = writeln!(
            self.out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" fill-opacity="{}" />"#,
            bar.x,
            bar.y,
            bar.width,
            bar.height,
            HISTOGRAM_FILL.to_css(),
            HISTOGRAM_OPACITY
        );
    }

    pub(super) fn stroke_path(&mut self, data: &str) {
        let _ = writeln!(
            self.out,
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}" />"#,
            data,
            BAND_STROKE.to_css(),
            BAND_STROKE_WIDTH
        );
    }

    /// Right-aligned, rotated label
    pub(super) fn text(&mut self, label: &TextLabel) {
        let _ = writeln!(
            self.out,
            r#"<text font-family="sans-serif" font-size="{}" text-anchor="end" fill="{}" transform="translate({},{}) rotate({})">{}</text>"#,
            FONT_SIZE,
            label.color.to_css(),
            label.x,
            label.y,
            LABEL_ROTATION_DEGREES,
            xml_escape(&label.text)
        );
    }

    pub(super) fn finish(mut self) -> String {
        let _ = writeln!(self.out, "</svg>");
        self.out
    }
}
