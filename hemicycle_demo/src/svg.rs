// Copyright 2025 the Hemicycle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A draw sink that renders every presented frame to an SVG document.

use core::time::Duration;

use hemicycle_core::{DrawSink, Frame, MarkPayload, RetainedMarks, TextAnchor, TextBaseline};
use kurbo::Size;
use peniko::{Brush, Color};

/// One rendered frame.
#[derive(Debug)]
pub(crate) struct SvgFrame {
    pub(crate) svg: String,
    pub(crate) transition: Option<Duration>,
}

/// Keeps the on-screen marks and snapshots them as SVG on every frame.
#[derive(Debug)]
pub(crate) struct SvgSink {
    view: Size,
    marks: RetainedMarks,
    frames: Vec<SvgFrame>,
}

impl SvgSink {
    pub(crate) fn new(view: Size) -> Self {
        Self {
            view,
            marks: RetainedMarks::new(),
            frames: Vec::new(),
        }
    }

    /// Removes and returns the frames rendered so far.
    pub(crate) fn take_frames(&mut self) -> Vec<SvgFrame> {
        core::mem::take(&mut self.frames)
    }

    fn to_svg_string(&self, background: Color) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
            w = self.view.width,
            h = self.view.height,
        ));
        out.push('\n');
        out.push_str(&format!(
            r#"<rect x="0" y="0" width="{}" height="{}""#,
            self.view.width, self.view.height
        ));
        write_paint_attr(&mut out, "fill", &Brush::Solid(background));
        out.push_str("/>\n");

        for (_id, payload) in self.marks.in_paint_order() {
            match payload {
                MarkPayload::Circle(c) => {
                    out.push_str(&format!(
                        r#"<circle cx="{}" cy="{}" r="{}""#,
                        c.circle.center.x, c.circle.center.y, c.circle.radius
                    ));
                    write_paint_attr(&mut out, "fill", &c.fill);
                    out.push_str("/>\n");
                }
                MarkPayload::Rect(r) => {
                    out.push_str(&format!(
                        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                        r.rect.x0,
                        r.rect.y0,
                        r.rect.width(),
                        r.rect.height(),
                    ));
                    write_paint_attr(&mut out, "fill", &r.fill);
                    out.push_str("/>\n");
                }
                MarkPayload::Text(t) => {
                    let baseline = match t.baseline {
                        TextBaseline::Middle => "middle",
                        TextBaseline::Alphabetic => "alphabetic",
                        TextBaseline::Hanging => "hanging",
                    };
                    out.push_str(&format!(
                        r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
                        t.pos.x, t.pos.y, t.font_size, baseline
                    ));
                    out.push_str(match t.anchor {
                        TextAnchor::Start => r#" text-anchor="start""#,
                        TextAnchor::Middle => r#" text-anchor="middle""#,
                        TextAnchor::End => r#" text-anchor="end""#,
                    });
                    write_paint_attr(&mut out, "fill", &t.fill);
                    out.push('>');
                    out.push_str(&escape_xml(&t.text));
                    out.push_str("</text>\n");
                }
                MarkPayload::Path(p) => {
                    let d = p.path.to_svg();
                    out.push_str(&format!(r#"<path d="{d}""#));
                    write_paint_attr(&mut out, "fill", &p.fill);
                    if p.stroke_width > 0.0 {
                        write_paint_attr(&mut out, "stroke", &p.stroke);
                        out.push_str(&format!(r#" stroke-width="{}""#, p.stroke_width));
                    }
                    out.push_str("/>\n");
                }
            }
        }

        out.push_str("</svg>\n");
        out
    }
}

impl DrawSink for SvgSink {
    fn present(&mut self, frame: &Frame<'_>) {
        self.marks.apply(frame.diffs);
        let svg = self.to_svg_string(frame.background);
        self.frames.push(SvgFrame {
            svg,
            transition: frame.transition,
        });
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use hemicycle_core::{Mark, MarkId, Scene};
    use kurbo::Point;
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn frames_snapshot_the_retained_marks() {
        let mut sink = SvgSink::new(Size::new(100.0, 50.0));
        let mut scene = Scene::new();
        let diffs = scene.tick(vec![Mark::circle(
            MarkId::from_raw(1),
            Point::new(10.0, 20.0),
            3.0,
            css::RED,
        )]);
        sink.present(&Frame {
            background: css::BLACK,
            diffs: &diffs,
            transition: Some(Duration::from_millis(1000)),
        });
        let frames = sink.take_frames();
        assert_eq!(frames.len(), 1, "one frame");
        assert!(
            frames[0].svg.contains(r##"<circle cx="10" cy="20" r="3" fill="#ff0000"/>"##),
            "circle is written: {}",
            frames[0].svg
        );
        assert_eq!(
            frames[0].transition,
            Some(Duration::from_millis(1000)),
            "transition kept"
        );
        assert!(sink.take_frames().is_empty(), "frames were taken");
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(
            escape_xml("a<b & 'c'"),
            "a&lt;b &amp; &apos;c&apos;",
            "escaped"
        );
    }
}
