//! SVG rendering of a [`Layout`].
//!
//! Produces a standalone document: one root `<g>` carrying the viewport
//! transform, links drawn first so node cards sit on top, and every card
//! tagged with `data-node-id` so the browser client can hit-test clicks.
//! Backward links are dashed and use a darker stroke.

use std::fmt::Write;

use foilflow_core::NodeKind;

use crate::error::LayoutError;
use crate::layout::{Layout, Link, PlacedNode};
use crate::viewport::Transform;

const LINK_STROKE: &str = "#64748b";
const BACK_LINK_STROKE: &str = "#475569";
const ARROW_FILL: &str = "#94a3b8";

/// Card palette for one node state.
struct Palette {
    border: &'static str,
    fill: &'static str,
    title: &'static str,
    text: &'static str,
    badge: &'static str,
}

const ACTIVE: Palette = Palette {
    border: "#6366f1",
    fill: "#334155",
    title: "#a5b4fc",
    text: "#ffffff",
    badge: "#818cf8",
};

const RESULT: Palette = Palette {
    border: "#059669",
    fill: "#1e293b",
    title: "#34d399",
    text: "#ecfdf5",
    badge: "#10b981",
};

const STEP: Palette = Palette {
    border: "#475569",
    fill: "#1e293b",
    title: "#94a3b8",
    text: "#cbd5e1",
    badge: "#818cf8",
};

/// Options for [`render_svg`].
#[derive(Debug, Clone, Default)]
pub struct RenderOptions<'a> {
    /// Node to highlight as the wizard's current step.
    pub current: Option<&'a str>,
    /// Initial viewport transform. Defaults to centring `current` when it
    /// is placed, identity otherwise.
    pub transform: Option<Transform>,
}

/// Renders `layout` to an SVG document.
pub fn render_svg(layout: &Layout, opts: &RenderOptions<'_>) -> Result<String, LayoutError> {
    let c = &layout.config;
    let transform = opts.transform.unwrap_or_else(|| {
        opts.current
            .and_then(|id| layout.node(id))
            .map(|n| Transform::centered_on(n, c))
            .unwrap_or_default()
    });

    let mut out = String::with_capacity(64 * 1024);
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" class="flow-map">"#,
        c.viewport_width, c.viewport_height
    )?;
    writeln!(
        out,
        r#"<defs><marker id="arrowhead" viewBox="0 -5 10 10" refX="0" refY="0" markerWidth="6" markerHeight="6" orient="auto"><path d="M0,-5L10,0L0,5" fill="{ARROW_FILL}"/></marker></defs>"#
    )?;
    writeln!(out, r#"<g id="viewport" transform="{}">"#, transform.to_svg())?;

    for link in &layout.links {
        write_link(&mut out, layout, link)?;
    }
    for node in &layout.nodes {
        let active = opts.current == Some(node.id.as_str());
        write_node(&mut out, layout, node, active)?;
    }

    writeln!(out, "</g>")?;
    writeln!(out, "</svg>")?;
    Ok(out)
}

fn write_link(out: &mut String, layout: &Layout, link: &Link) -> Result<(), LayoutError> {
    let c = &layout.config;
    let (stroke, dash) = if link.backward {
        (BACK_LINK_STROKE, r#" stroke-dasharray="6,6""#)
    } else {
        (LINK_STROKE, "")
    };
    writeln!(
        out,
        r#"<g class="link{}" data-source="{}" data-target="{}">"#,
        if link.backward { " backward" } else { "" },
        escape(link.source.as_str()),
        escape(link.target.as_str()),
    )?;
    writeln!(
        out,
        r#"<path d="{}" fill="none" stroke="{stroke}" stroke-width="2"{dash} marker-end="url(#arrowhead)"/>"#,
        link.path
    )?;
    if let Some(at) = link.label_at {
        let label = truncate(&link.label, 22);
        writeln!(
            out,
            r##"<rect x="{}" y="{}" width="{}" height="{}" rx="14" fill="#1e293b" stroke="#475569"/>"##,
            at.x, at.y, c.label_width, c.label_height
        )?;
        writeln!(
            out,
            r##"<text x="{}" y="{}" text-anchor="middle" font-size="11" font-weight="700" fill="#cbd5e1">{}</text>"##,
            at.x + c.label_width / 2.0,
            at.y + c.label_height / 2.0 + 4.0,
            escape(&label)
        )?;
    }
    writeln!(out, "</g>")?;
    Ok(())
}

fn write_node(
    out: &mut String,
    layout: &Layout,
    node: &PlacedNode,
    active: bool,
) -> Result<(), LayoutError> {
    let c = &layout.config;
    let is_result = node.kind == NodeKind::Result;
    let palette = if active {
        &ACTIVE
    } else if is_result {
        &RESULT
    } else {
        &STEP
    };
    let badge = if is_result { "RESULT" } else { "STEP" };
    let badge_color = if is_result { RESULT.badge } else { palette.badge };

    let mut class = String::from("node");
    if active {
        class.push_str(" active");
    }
    if is_result {
        class.push_str(" result");
    }

    writeln!(
        out,
        r#"<g class="{class}" data-node-id="{}" transform="translate({},{})" cursor="pointer">"#,
        escape(node.id.as_str()),
        node.x,
        node.y
    )?;
    writeln!(
        out,
        r#"<rect width="{}" height="{}" rx="12" fill="{}" stroke="{}" stroke-width="{}"/>"#,
        c.node_width,
        c.node_height,
        palette.fill,
        palette.border,
        if active { 3 } else { 1 }
    )?;
    writeln!(
        out,
        r#"<text x="20" y="30" font-size="10" font-weight="900" letter-spacing="2" fill="{badge_color}">{badge}</text>"#
    )?;
    if active {
        writeln!(
            out,
            r#"<circle cx="{}" cy="26" r="6" fill="{}"/>"#,
            c.node_width - 26.0,
            ACTIVE.border
        )?;
    }

    let chars_per_line = ((c.node_width - 40.0) / 7.5).max(8.0) as usize;
    let mut y = 52.0;
    for line in wrap(&node.title.to_uppercase(), chars_per_line + 4, 2) {
        writeln!(
            out,
            r#"<text x="20" y="{y}" font-size="12" font-weight="700" fill="{}">{}</text>"#,
            palette.title,
            escape(&line)
        )?;
        y += 16.0;
    }
    y += 8.0;
    for line in wrap(&node.content, chars_per_line, 4) {
        writeln!(
            out,
            r#"<text x="20" y="{y}" font-size="14" fill="{}">{}</text>"#,
            palette.text,
            escape(&line)
        )?;
        y += 18.0;
    }
    writeln!(out, "<title>{}</title>", escape(&node.title))?;
    writeln!(out, "</g>")?;
    Ok(())
}

/// Escapes text for use in SVG element content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Greedy word wrap into at most `max_lines` lines of `width` characters.
/// When text is cut off, the last line ends with an ellipsis.
pub fn wrap(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut clipped = false;

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed <= width || current.is_empty() {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }
        if lines.len() + 1 == max_lines {
            clipped = true;
            break;
        }
        lines.push(std::mem::take(&mut current));
        current.push_str(word);
    }
    if !current.is_empty() && lines.len() < max_lines {
        lines.push(current);
    }

    for line in lines.iter_mut() {
        if line.chars().count() > width {
            *line = truncate(line, width);
        }
    }
    if clipped {
        if let Some(last) = lines.last_mut() {
            let keep = width.saturating_sub(1);
            if last.chars().count() > keep {
                *last = last.chars().take(keep).collect();
            }
            last.push('…');
        }
    }
    lines
}

/// Cuts `s` to `max` characters, ending in an ellipsis when shortened.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut t: String = s.chars().take(max.saturating_sub(1)).collect();
    t.push('…');
    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::layout::compute_layout;
    use foilflow_core::corpus;
    use foilflow_core::{FlowGraph, FlowNode};

    fn builtin_svg(current: Option<&str>) -> String {
        let g = corpus::builtin().unwrap();
        let layout = compute_layout(&g, &LayoutConfig::default()).unwrap();
        render_svg(
            &layout,
            &RenderOptions {
                current,
                transform: None,
            },
        )
        .unwrap()
    }

    #[test]
    fn document_structure() {
        let svg = builtin_svg(None);
        assert!(svg.starts_with("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r#"id="arrowhead""#));
        assert_eq!(svg.matches("data-node-id=").count(), 42);
        assert_eq!(svg.matches(r#"<g class="link"#).count(), 58);
        assert_eq!(svg.matches("stroke-dasharray").count(), 15);
        assert!(!svg.contains("dw_q1"));
    }

    #[test]
    fn current_node_is_highlighted_and_centered() {
        let svg = builtin_svg(Some("root"));
        assert_eq!(svg.matches(r#"class="node active"#).count(), 1);
        assert!(svg.contains(r#"data-node-id="root""#));
        // (600 - 100 - 150, 400 - 390 - 80)
        assert!(svg.contains(r#"transform="translate(350,-70) scale(1)""#));
    }

    #[test]
    fn no_current_uses_identity() {
        let svg = builtin_svg(None);
        assert!(svg.contains(r#"<g id="viewport" transform="translate(0,0) scale(1)">"#));
        assert!(!svg.contains("node active"));
    }

    #[test]
    fn explicit_transform_wins() {
        let g = corpus::builtin().unwrap();
        let layout = compute_layout(&g, &LayoutConfig::default()).unwrap();
        let svg = render_svg(
            &layout,
            &RenderOptions {
                current: Some("root"),
                transform: Some(Transform { x: 5.0, y: 6.0, k: 0.5 }),
            },
        )
        .unwrap();
        assert!(svg.contains("translate(5,6) scale(0.5)"));
    }

    #[test]
    fn text_is_escaped() {
        let g = FlowGraph::from_nodes(vec![FlowNode::new(
            "root",
            NodeKind::Question,
            "Fish & <Chips>",
            "Say \"hi\"",
        )
        .with_option("a < b", "root")])
        .unwrap();
        let layout = compute_layout(&g, &LayoutConfig::default()).unwrap();
        let svg = render_svg(&layout, &RenderOptions::default()).unwrap();
        assert!(svg.contains("FISH &amp; &lt;CHIPS&gt;"));
        assert!(svg.contains("Say &quot;hi&quot;"));
        assert!(svg.contains("a &lt; b"));
        assert!(!svg.contains("<Chips>"));
    }

    #[test]
    fn wrap_respects_width_and_lines() {
        let lines = wrap("one two three four five six seven eight nine ten", 10, 3);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "one two");
        assert!(lines[2].ends_with('…'));
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
    }

    #[test]
    fn wrap_short_text_is_untouched() {
        assert_eq!(wrap("Speed helps stability.", 40, 4), vec!["Speed helps stability."]);
        assert!(wrap("", 40, 4).is_empty());
    }

    #[test]
    fn wrap_long_word_is_truncated() {
        let lines = wrap("supercalifragilistic", 8, 2);
        assert_eq!(lines, vec!["superca…"]);
    }

    #[test]
    fn escape_all_specials() {
        assert_eq!(escape(r#"<a href='x'>&"#), "&lt;a href=&#39;x&#39;&gt;&amp;");
    }
}
