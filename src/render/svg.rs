use std::fmt::Write as _;

use crate::{page::controller::NodeStatus, render::scene::Scene};

const MARGIN: f64 = 40.0;
const NODE_RADIUS: f64 = 20.0;
const AVATAR_RADIUS: f64 = 24.0;

const BACKGROUND: &str = "#000000";
const PATH_DONE: &str = "#16a34a";
const PATH_AHEAD: &str = "#374151";
const AVATAR: &str = "#db2777";

fn node_fill(status: NodeStatus) -> &'static str {
    match status {
        NodeStatus::Completed => "#16a34a",
        NodeStatus::Current => "#2563eb",
        NodeStatus::Available => "#3b82f6",
        NodeStatus::Locked => "#4b5563",
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Standalone SVG document for `scene`.
pub fn render_svg(scene: &Scene) -> String {
    let width = scene.width;
    let height = scene.height + 2.0 * MARGIN;
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 {} {width} {height}">"#,
        -MARGIN
    );
    let _ = writeln!(
        svg,
        r#"  <rect x="0" y="{}" width="{width}" height="{height}" fill="{BACKGROUND}"/>"#,
        -MARGIN
    );
    if !scene.remaining.is_empty() {
        let _ = writeln!(
            svg,
            r#"  <path d="{}" fill="none" stroke="{PATH_AHEAD}" stroke-width="4" stroke-dasharray="8 8"/>"#,
            scene.remaining.to_svg_d()
        );
    }
    if !scene.traveled.is_empty() {
        let _ = writeln!(
            svg,
            r#"  <path d="{}" fill="none" stroke="{PATH_DONE}" stroke-width="4"/>"#,
            scene.traveled.to_svg_d()
        );
    }
    for node in &scene.nodes {
        let label = match node.status {
            NodeStatus::Completed => "\u{2713}".to_string(),
            _ => (node.index + 1).to_string(),
        };
        let _ = writeln!(
            svg,
            r##"  <g class="checkpoint {status}"><title>{title}</title><circle cx="{x}" cy="{y}" r="{NODE_RADIUS}" fill="{fill}"/><text x="{x}" y="{y}" fill="#ffffff" text-anchor="middle" dominant-baseline="central">{label}</text></g>"##,
            status = node.status.as_str(),
            title = escape(&node.title),
            x = node.position.x,
            y = node.position.y,
            fill = node_fill(node.status),
        );
    }
    if let Some(p) = scene.avatar {
        let _ = writeln!(
            svg,
            r#"  <circle class="avatar" cx="{}" cy="{}" r="{AVATAR_RADIUS}" fill="{AVATAR}"/>"#,
            p.x, p.y
        );
    }
    svg.push_str("</svg>\n");
    svg
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
