//! SVG output encoder.
//!
//! Builds a tree of [`SvgElement`]s, either by hand or from a laid-out
//! [`Scene`], and serializes it with an embedded stylesheet.

use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::geometry::{Point, Translate};
use crate::output::number::{fmt_number, push_number};
use crate::output::path::bundle_path;
use crate::scene::{Scene, TextAnchor, ViewBox};
use crate::theme::Theme;

/// Id of the group holding the heatmap cells.
pub const HEATMAP_GROUP_ID: &str = "heatmap";

/// SVG encoder for vector output.
#[derive(Debug, Clone)]
pub struct SvgEncoder {
    /// SVG width
    width: f64,
    /// SVG height
    height: f64,
    /// Visible region; defaults to `0 0 width height`
    view_box: Option<ViewBox>,
    /// Embedded stylesheet (None for no `<defs>`)
    style: Option<Theme>,
    /// SVG elements
    elements: Vec<SvgElement>,
}

/// An element transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// `translate(dx,dy)`
    Translate(Translate),
    /// `rotate(angle cx,cy)`, degrees about a center
    Rotate {
        /// Angle in degrees.
        angle: f64,
        /// Rotation center.
        center: Point,
    },
}

/// An SVG element.
///
/// Field names are self-documenting and match SVG attribute names.
#[derive(Debug, Clone)]
#[allow(missing_docs)]
pub enum SvgElement {
    /// Group of elements
    Group {
        id: Option<String>,
        children: Vec<SvgElement>,
    },
    /// Closed polygon
    Polygon {
        points: Vec<Point>,
        fill: String,
        class: Option<String>,
        transform: Vec<Transform>,
    },
    /// Text, vertically centered on `y`
    Text {
        x: f64,
        y: f64,
        text: String,
        class: Option<String>,
        anchor: Option<TextAnchor>,
        transform: Vec<Transform>,
    },
    /// Path (SVG path data)
    Path {
        d: String,
        class: Option<String>,
        opacity: Option<f64>,
    },
}

impl Default for SvgEncoder {
    fn default() -> Self {
        Self::new(1000.0, 1000.0)
    }
}

impl SvgEncoder {
    /// Create a new SVG encoder with given dimensions.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, view_box: None, style: None, elements: Vec::new() }
    }

    /// Encoder for a laid-out scene.
    ///
    /// Emits the heatmap group, the label group, the edge group (when there
    /// are edges) and the colorbar group (when present), in that order.
    #[must_use]
    pub fn from_scene(scene: &Scene) -> Self {
        let mut encoder = Self::new(scene.width, scene.height)
            .view_box(scene.view_box)
            .style(scene.style.clone());

        let cells = scene
            .cells
            .iter()
            .map(|cell| SvgElement::Polygon {
                points: cell.points.to_vec(),
                fill: cell.fill.clone(),
                class: Some(format!("n{} n{}", cell.tag.col, cell.tag.row)),
                transform: cell.transform.map(Transform::Translate).into_iter().collect(),
            })
            .collect();
        encoder.add_element(SvgElement::Group {
            id: Some(HEATMAP_GROUP_ID.to_string()),
            children: cells,
        });

        let labels = scene
            .labels
            .iter()
            .map(|label| SvgElement::Text {
                x: label.anchor.x,
                y: label.anchor.y,
                text: label.text.clone(),
                class: Some(format!("l{}", label.item)),
                anchor: None,
                transform: label.transform.map(Transform::Translate).into_iter().collect(),
            })
            .collect();
        encoder.add_element(SvgElement::Group { id: None, children: labels });

        if !scene.edges.is_empty() {
            let edges = scene
                .edges
                .iter()
                .map(|edge| SvgElement::Path {
                    d: bundle_path(&edge.points, edge.tension),
                    class: Some(format!("line e{} e{}", edge.from, edge.to)),
                    opacity: Some(edge.opacity),
                })
                .collect();
            encoder.add_element(SvgElement::Group { id: None, children: edges });
        }

        if let Some(colorbar) = &scene.colorbar {
            let shift = Transform::Translate(colorbar.shift);
            let swatches = colorbar.swatches.iter().map(|swatch| SvgElement::Polygon {
                points: swatch.points.to_vec(),
                fill: swatch.fill.clone(),
                class: None,
                transform: vec![shift],
            });
            let ticks = colorbar.ticks.iter().map(|tick| SvgElement::Text {
                x: tick.anchor.x,
                y: tick.anchor.y,
                text: fmt_number(tick.value),
                class: None,
                anchor: Some(tick.text_anchor),
                transform: vec![
                    shift,
                    Transform::Rotate { angle: tick.rotation, center: tick.anchor },
                ],
            });
            encoder.add_element(SvgElement::Group {
                id: None,
                children: swatches.chain(ticks).collect(),
            });
        }

        debug!(
            cells = scene.cells.len(),
            labels = scene.labels.len(),
            edges = scene.edges.len(),
            colorbar = scene.colorbar.is_some(),
            "encoded scene"
        );
        encoder
    }

    /// Set the view box.
    #[must_use]
    pub fn view_box(mut self, view_box: ViewBox) -> Self {
        self.view_box = Some(view_box);
        self
    }

    /// Embed a stylesheet.
    #[must_use]
    pub fn style(mut self, style: Theme) -> Self {
        self.style = Some(style);
        self
    }

    /// Add an element.
    #[must_use]
    pub fn element(mut self, element: SvgElement) -> Self {
        self.elements.push(element);
        self
    }

    /// Add a raw element.
    pub fn add_element(&mut self, element: SvgElement) {
        self.elements.push(element);
    }

    /// Top-level elements.
    #[must_use]
    pub fn elements(&self) -> &[SvgElement] {
        &self.elements
    }

    /// Render to SVG string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut svg = String::with_capacity(4096);

        let view_box = self.view_box.unwrap_or(ViewBox {
            min_x: 0.0,
            min_y: 0.0,
            width: self.width,
            height: self.height,
        });
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}">"#,
            fmt_number(self.width),
            fmt_number(self.height),
            fmt_number(view_box.min_x),
            fmt_number(view_box.min_y),
            fmt_number(view_box.width),
            fmt_number(view_box.height),
        );

        if let Some(style) = &self.style {
            let _ = writeln!(svg, "  <defs><style>{}</style></defs>", stylesheet(style));
        }

        for element in &self.elements {
            write_element(&mut svg, element, 1);
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Write to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.render().as_bytes())?;
        Ok(())
    }
}

/// CSS rules for a theme.
#[must_use]
pub fn stylesheet(theme: &Theme) -> String {
    format!(
        "svg {{ background-color: {}; font-size: {}px; }} \
         polygon {{ stroke: {}; stroke-width: {}; }} \
         .line {{ fill: none; stroke: {}; stroke-width: {}; }} \
         .nodes {{ stroke: {}; stroke-width: {}; }}",
        theme.background,
        fmt_number(theme.font_size),
        theme.cell_stroke,
        fmt_number(theme.cell_stroke_width),
        theme.edge_stroke,
        fmt_number(theme.edge_stroke_width),
        theme.node_stroke,
        fmt_number(theme.node_stroke_width),
    )
}

/// Escape XML special characters.
#[must_use]
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn anchor_name(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

fn write_transform(out: &mut String, transform: &[Transform]) {
    if transform.is_empty() {
        return;
    }
    out.push_str(r#" transform=""#);
    for (i, t) in transform.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        match t {
            Transform::Translate(by) => {
                out.push_str("translate(");
                push_number(out, by.dx);
                out.push(',');
                push_number(out, by.dy);
                out.push(')');
            }
            Transform::Rotate { angle, center } => {
                out.push_str("rotate(");
                push_number(out, *angle);
                out.push(' ');
                push_number(out, center.x);
                out.push(',');
                push_number(out, center.y);
                out.push(')');
            }
        }
    }
    out.push('"');
}

fn write_class(out: &mut String, class: Option<&str>) {
    if let Some(class) = class {
        let _ = write!(out, r#" class="{}""#, escape_xml(class));
    }
}

fn write_element(out: &mut String, element: &SvgElement, depth: usize) {
    let indent = "  ".repeat(depth);
    out.push_str(&indent);

    match element {
        SvgElement::Group { id, children } => {
            out.push_str("<g");
            if let Some(id) = id {
                let _ = write!(out, r#" id="{}""#, escape_xml(id));
            }
            if children.is_empty() {
                out.push_str("/>\n");
                return;
            }
            out.push_str(">\n");
            for child in children {
                write_element(out, child, depth + 1);
            }
            out.push_str(&indent);
            out.push_str("</g>\n");
        }
        SvgElement::Polygon { points, fill, class, transform } => {
            out.push_str(r#"<polygon points=""#);
            for (i, p) in points.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                push_number(out, p.x);
                out.push(',');
                push_number(out, p.y);
            }
            out.push('"');
            write_transform(out, transform);
            let _ = write!(out, r#" fill="{}""#, escape_xml(fill));
            write_class(out, class.as_deref());
            out.push_str("/>\n");
        }
        SvgElement::Text { x, y, text, class, anchor, transform } => {
            let _ = write!(out, r#"<text x="{}" y="{}""#, fmt_number(*x), fmt_number(*y));
            write_transform(out, transform);
            out.push_str(r#" dominant-baseline="central""#);
            write_class(out, class.as_deref());
            if let Some(anchor) = anchor {
                let _ = write!(out, r#" text-anchor="{}""#, anchor_name(*anchor));
            }
            let _ = writeln!(out, ">{}</text>", escape_xml(text));
        }
        SvgElement::Path { d, class, opacity } => {
            out.push_str("<path");
            if let Some(opacity) = opacity {
                let _ = write!(out, r#" opacity="{}""#, fmt_number(*opacity));
            }
            let _ = write!(out, r#" d="{d}""#);
            write_class(out, class.as_deref());
            out.push_str("/>\n");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::index::CellIndex;
    use crate::scene::{CellRecord, ColorbarRecord, EdgeRecord, LabelRecord, SwatchRecord, TickRecord};

    fn diamond() -> Vec<Point> {
        vec![
            Point::new(1.0, 0.5),
            Point::new(0.5, 1.0),
            Point::new(1.0, 1.5),
            Point::new(1.5, 1.0),
        ]
    }

    fn scene() -> Scene {
        Scene {
            width: 1000.0,
            height: 800.0,
            view_box: ViewBox { min_x: -0.25, min_y: -0.5, width: 4.25, height: 4.5 },
            style: Theme::default(),
            cells: vec![CellRecord {
                tag: CellIndex::new(0, 1),
                value: 0.5,
                points: [diamond()[0], diamond()[1], diamond()[2], diamond()[3]],
                fill: "#000".to_string(),
                transform: Some(Translate::new(-0.25, 0.5)),
            }],
            labels: vec![LabelRecord {
                item: 1,
                text: "B & C".to_string(),
                anchor: Point::new(1.0, 1.5),
                transform: None,
            }],
            edges: vec![EdgeRecord {
                from: 0,
                to: 1,
                points: [Point::new(5.0, 0.5); 5],
                opacity: 0.25,
                tension: 1.0,
            }],
            colorbar: Some(ColorbarRecord {
                shift: Translate::new(-2.0, 0.0),
                swatches: vec![SwatchRecord {
                    points: [diamond()[0], diamond()[1], diamond()[2], diamond()[3]],
                    fill: "#fff".to_string(),
                }],
                ticks: vec![TickRecord {
                    anchor: Point::new(1.0, 0.5),
                    value: 0.12,
                    text_anchor: TextAnchor::End,
                    rotation: -45.0,
                }],
            }),
        }
    }

    #[test]
    fn test_svg_encoder_new() {
        let svg = SvgEncoder::new(800.0, 600.0).render();

        assert!(svg.contains("width=\"800\""));
        assert!(svg.contains("height=\"600\""));
        assert!(svg.contains("viewBox=\"0 0 800 600\""));
        assert!(svg.contains("</svg>"));
        assert!(!svg.contains("<defs>"));
    }

    #[test]
    fn test_svg_encoder_default() {
        let svg = SvgEncoder::default().render();
        assert!(svg.contains("width=\"1000\""));
    }

    #[test]
    fn test_svg_polygon() {
        let svg = SvgEncoder::new(100.0, 100.0)
            .element(SvgElement::Polygon {
                points: diamond(),
                fill: "#abc".to_string(),
                class: Some("n1 n0".to_string()),
                transform: vec![Transform::Translate(Translate::new(-0.25, 0.5))],
            })
            .render();

        assert!(svg.contains(
            r##"<polygon points="1,0.5 0.5,1 1,1.5 1.5,1" transform="translate(-0.25,0.5)" fill="#abc" class="n1 n0"/>"##
        ));
    }

    #[test]
    fn test_svg_text_rotated() {
        let svg = SvgEncoder::new(100.0, 100.0)
            .element(SvgElement::Text {
                x: 2.0,
                y: 1.5,
                text: "0.5".to_string(),
                class: None,
                anchor: Some(TextAnchor::Start),
                transform: vec![
                    Transform::Translate(Translate::new(-2.0, 0.0)),
                    Transform::Rotate { angle: -45.0, center: Point::new(2.0, 1.5) },
                ],
            })
            .render();

        assert!(svg.contains(
            r#"<text x="2" y="1.5" transform="translate(-2,0) rotate(-45 2,1.5)" dominant-baseline="central" text-anchor="start">0.5</text>"#
        ));
    }

    #[test]
    fn test_svg_text_escaping() {
        let svg = SvgEncoder::new(100.0, 100.0)
            .element(SvgElement::Text {
                x: 0.0,
                y: 0.0,
                text: "<script>alert('xss')</script>".to_string(),
                class: None,
                anchor: None,
                transform: Vec::new(),
            })
            .render();

        assert!(!svg.contains("<script>"));
        assert!(svg.contains("&lt;script&gt;"));
        assert!(!svg.contains("text-anchor"));
    }

    #[test]
    fn test_svg_path() {
        let svg = SvgEncoder::new(100.0, 100.0)
            .element(SvgElement::Path {
                d: "M0,0L1,1".to_string(),
                class: Some("line e0 e1".to_string()),
                opacity: Some(0.5),
            })
            .render();

        assert!(svg.contains(r#"<path opacity="0.5" d="M0,0L1,1" class="line e0 e1"/>"#));
    }

    #[test]
    fn test_empty_group_self_closes() {
        let svg = SvgEncoder::new(10.0, 10.0)
            .element(SvgElement::Group { id: Some("g".to_string()), children: Vec::new() })
            .render();
        assert!(svg.contains(r#"<g id="g"/>"#));
    }

    #[test]
    fn test_stylesheet() {
        let css = stylesheet(&Theme::default());
        assert!(css.contains("svg { background-color: #fff; font-size: 0.5px; }"));
        assert!(css.contains("polygon { stroke: #555; stroke-width: 0.05; }"));
        assert!(css.contains(".line { fill: none; stroke: #555; stroke-width: 0.1; }"));
        assert!(css.contains(".nodes { stroke: #000; stroke-width: 0.5; }"));

        let custom = Theme { edge_stroke: Rgba::rgb(255, 0, 0), ..Theme::default() };
        assert!(stylesheet(&custom).contains(".line { fill: none; stroke: #f00;"));
    }

    #[test]
    fn test_from_scene() {
        let svg = SvgEncoder::from_scene(&scene()).render();

        assert!(svg.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="1000" height="800" viewBox="-0.25 -0.5 4.25 4.5">"#
        ));
        assert!(svg.contains("<defs><style>"));
        assert!(svg.contains(r#"<g id="heatmap">"#));
        assert!(svg.contains(r#"class="n1 n0""#));
        assert!(svg.contains(r#"dominant-baseline="central" class="l1">B &amp; C</text>"#));
        assert!(svg.contains(r#"opacity="0.25" d="M5,0.5L"#));
        assert!(svg.contains(r#"class="line e0 e1""#));
        assert!(svg.contains(r##"transform="translate(-2,0)" fill="#fff""##));
        assert!(svg.contains(r#"text-anchor="end">0.12</text>"#));
    }

    #[test]
    fn test_from_scene_group_order() {
        let svg = SvgEncoder::from_scene(&scene()).render();
        let heatmap = svg.find(r#"<g id="heatmap">"#).unwrap();
        let label = svg.find("class=\"l1\"").unwrap();
        let edge = svg.find("<path").unwrap();
        let tick = svg.find("text-anchor=\"end\"").unwrap();
        assert!(heatmap < label && label < edge && edge < tick);
    }

    #[test]
    fn test_from_scene_omits_empty_edges_and_colorbar() {
        let mut scene = scene();
        scene.edges.clear();
        scene.colorbar = None;
        let encoder = SvgEncoder::from_scene(&scene);
        assert_eq!(encoder.elements().len(), 2);
        assert!(!encoder.render().contains("<path"));
    }

    #[test]
    fn test_svg_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matrix.svg");
        SvgEncoder::from_scene(&scene()).write_to_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<svg"));
        assert!(content.ends_with("</svg>\n"));
    }
}
