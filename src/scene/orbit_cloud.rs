//! Skills cloud: labeled nodes on a slowly rotating orbit.
//!
//! Each node springs toward a target that rides the orbit circle; a nearby
//! pointer pushes the target away. Nodes can be filtered by category (hidden
//! nodes keep simulating so they do not pop when shown again) and hovered to
//! show a tooltip.

use std::f64::consts::TAU;

use crate::config::{OrbitConfig, SkillSpec};

use super::{ACCENT, Scene, Surface, distance};

const LINK_WIDTH: f64 = 1.0;
/// Inner disc radius relative to the node radius.
const CORE_SCALE: f64 = 0.6;
/// Two-digit hex alpha appended to the node color for the outer ring.
const HALO_ALPHA: &str = "40";
const LABEL_FILL: &str = "#E6EDF3";
const LABEL_GAP: f64 = 20.0;
/// Tooltip offset from the pointer.
const TOOLTIP_OFFSET: f64 = 20.0;

/// Active category filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    /// `"all"` selects everything; any other value, empty included, is a
    /// category name.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "all" => Filter::All,
            other => Filter::Category(other.to_string()),
        }
    }

    pub fn admits(&self, category: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(c) => c == category,
        }
    }
}

/// A skill plus its simulation state.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitNode {
    skill: SkillSpec,
    pub x: f64,
    pub y: f64,
    pub target_x: f64,
    pub target_y: f64,
    pub vx: f64,
    pub vy: f64,
    radius: f64,
    pub angle: f64,
    orbit_radius: f64,
    visible: bool,
}

impl OrbitNode {
    /// Place `skill` on the orbit at `angle`, at rest on its target.
    pub fn new(skill: SkillSpec, center: (f64, f64), orbit_radius: f64, angle: f64) -> Self {
        let x = center.0 + angle.cos() * orbit_radius;
        let y = center.1 + angle.sin() * orbit_radius;
        let radius = 30.0 + skill.proficiency as f64 / 10.0;
        Self {
            skill,
            x,
            y,
            target_x: x,
            target_y: y,
            vx: 0.0,
            vy: 0.0,
            radius,
            angle,
            orbit_radius,
            visible: true,
        }
    }

    pub fn skill(&self) -> &SkillSpec {
        &self.skill
    }

    pub fn name(&self) -> &str {
        &self.skill.name
    }

    pub fn category(&self) -> &str {
        &self.skill.category
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn orbit_radius(&self) -> f64 {
        self.orbit_radius
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        distance(x, y, self.x, self.y) < self.radius
    }
}

/// What the page tooltip should show for the hovered node.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub name: String,
    pub color: String,
    pub proficiency: u8,
    pub years: u8,
    /// Canvas-relative placement.
    pub left: f64,
    pub top: f64,
}

impl Tooltip {
    pub fn to_html(&self) -> String {
        format!(
            "<div style=\"font-weight: 600; margin-bottom: 4px; color: {color}\">{name}</div>\
             <div style=\"font-size: 0.85rem; color: #8B949E;\">\
             Proficiency: {prof}%<br>Experience: {years} years</div>",
            color = escape_html(&self.color),
            name = escape_html(&self.name),
            prof = self.proficiency,
            years = self.years,
        )
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub struct OrbitCloud {
    config: OrbitConfig,
    skills: Vec<SkillSpec>,
    width: f64,
    height: f64,
    nodes: Vec<OrbitNode>,
    pointer: Option<(f64, f64)>,
    hovered: Option<usize>,
    filter: Filter,
}

impl OrbitCloud {
    pub fn new(config: OrbitConfig, skills: Vec<SkillSpec>, width: f64, height: f64) -> Self {
        let mut cloud = Self {
            config,
            skills,
            width,
            height,
            nodes: Vec::new(),
            pointer: None,
            hovered: None,
            filter: Filter::All,
        };
        cloud.build_nodes();
        cloud
    }

    fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    fn build_nodes(&mut self) {
        let center = self.center();
        let orbit_radius = self.width.min(self.height) * self.config.orbit_scale;
        let n = self.skills.len() as f64;
        self.nodes = self
            .skills
            .iter()
            .enumerate()
            .map(|(i, skill)| {
                let angle = TAU * i as f64 / n;
                OrbitNode::new(skill.clone(), center, orbit_radius, angle)
            })
            .collect();
    }

    pub fn nodes(&self) -> &[OrbitNode] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [OrbitNode] {
        &mut self.nodes
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.apply_filter();
    }

    fn apply_filter(&mut self) {
        for node in &mut self.nodes {
            node.visible = self.filter.admits(&node.skill.category);
        }
    }

    pub fn pointer(&self) -> Option<(f64, f64)> {
        self.pointer
    }

    /// Record the pointer and re-pick the hovered node: the first visible node
    /// in creation order whose disc contains the pointer.
    pub fn hover_at(&mut self, x: f64, y: f64) -> Option<usize> {
        self.pointer = Some((x, y));
        self.hovered = self
            .nodes
            .iter()
            .position(|node| node.visible && node.contains(x, y));
        self.hovered
    }

    pub fn pointer_left(&mut self) {
        self.pointer = None;
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn hovered_node(&self) -> Option<&OrbitNode> {
        self.hovered.and_then(|i| self.nodes.get(i))
    }

    pub fn tooltip(&self) -> Option<Tooltip> {
        let node = self.hovered_node()?;
        let (px, py) = self.pointer?;
        Some(Tooltip {
            name: node.skill.name.clone(),
            color: node.skill.color.clone(),
            proficiency: node.skill.proficiency,
            years: node.skill.years,
            left: px + TOOLTIP_OFFSET,
            top: py + TOOLTIP_OFFSET,
        })
    }

    fn link_opacity(&self, dist: f64) -> Option<f64> {
        let max = self.config.link_distance;
        (dist < max).then(|| (1.0 - dist / max) * self.config.link_opacity)
    }
}

impl Scene for OrbitCloud {
    /// Rebuild every node for the new size. The active filter survives; the
    /// hover does not.
    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.build_nodes();
        self.apply_filter();
        self.hovered = None;
    }

    fn update(&mut self) {
        let (cx, cy) = self.center();
        let cfg = &self.config;
        let pointer = self.pointer;

        for node in &mut self.nodes {
            node.angle += cfg.angle_step;
            node.target_x = cx + node.angle.cos() * node.orbit_radius;
            node.target_y = cy + node.angle.sin() * node.orbit_radius;

            if let Some((mx, my)) = pointer {
                let dx = node.x - mx;
                let dy = node.y - my;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist < cfg.repel_radius {
                    let force = (cfg.repel_radius - dist) / cfg.repel_radius;
                    node.target_x += dx * force * cfg.repel_strength;
                    node.target_y += dy * force * cfg.repel_strength;
                }
            }

            node.vx += (node.target_x - node.x) * cfg.spring;
            node.vy += (node.target_y - node.y) * cfg.spring;
            node.vx *= cfg.damping;
            node.vy *= cfg.damping;
            node.x += node.vx;
            node.y += node.vy;
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        surface.clear(self.width, self.height);

        for (i, a) in self.nodes.iter().enumerate() {
            if !a.visible {
                continue;
            }
            for b in &self.nodes[i + 1..] {
                if !b.visible || a.skill.category != b.skill.category {
                    continue;
                }
                let dist = distance(a.x, a.y, b.x, b.y);
                if let Some(opacity) = self.link_opacity(dist) {
                    surface.line(a.x, a.y, b.x, b.y, ACCENT.with_alpha(opacity), LINK_WIDTH);
                }
            }
        }

        for (i, node) in self.nodes.iter().enumerate() {
            if !node.visible {
                continue;
            }
            let hovered = self.hovered == Some(i);
            let radius = if hovered {
                node.radius * self.config.hover_scale
            } else {
                node.radius
            };
            let color = &node.skill.color;

            if hovered {
                surface.set_glow(self.config.glow_blur, color);
            }
            surface.fill_circle(node.x, node.y, radius, &format!("{color}{HALO_ALPHA}"));
            surface.fill_circle(node.x, node.y, radius * CORE_SCALE, color);
            if hovered {
                surface.set_glow(0.0, color);
            }

            let size = if hovered { 14 } else { 12 };
            let font = format!("bold {size}px {}", self.config.label_font);
            surface.fill_text(
                &node.skill.name,
                node.x,
                node.y + radius + LABEL_GAP,
                &font,
                LABEL_FILL,
            );
        }
    }
}
