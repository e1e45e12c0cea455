//! Immutable configuration handed to each component at construction.
//!
//! `Default` reproduces the stock portfolio page. With the `serde` feature every
//! type here (de)serializes, and missing fields fall back to their defaults so
//! a JSON override only has to name what it changes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything the page effects need.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct FxConfig {
    pub terminal: TerminalConfig,
    pub network: NetworkConfig,
    pub orbit: OrbitConfig,
    pub skills: Vec<SkillSpec>,
}

#[cfg(feature = "serde_json")]
impl FxConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Particle network background.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct NetworkConfig {
    pub node_count: usize,
    /// Pairs closer than this get a connecting line.
    pub max_distance: f64,
    /// Velocity components are drawn from `[-speed/2, speed/2)`.
    pub node_speed: f64,
    pub line_opacity: f64,
    pub node_size: f64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            node_count: 50,
            max_distance: 150.0,
            node_speed: 0.3,
            line_opacity: 0.15,
            node_size: 2.0,
        }
    }
}

/// Motion and drawing constants for the skills cloud.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct OrbitConfig {
    /// Orbit radius as a fraction of `min(width, height)`.
    pub orbit_scale: f64,
    /// Radians added to every node's angle per frame.
    pub angle_step: f64,
    pub repel_radius: f64,
    pub repel_strength: f64,
    pub spring: f64,
    pub damping: f64,
    /// Same-category nodes closer than this are linked.
    pub link_distance: f64,
    pub link_opacity: f64,
    pub hover_scale: f64,
    pub glow_blur: f64,
    pub label_font: String,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            orbit_scale: 0.3,
            angle_step: 0.001,
            repel_radius: 150.0,
            repel_strength: 0.5,
            spring: 0.02,
            damping: 0.9,
            link_distance: 200.0,
            link_opacity: 0.15,
            hover_scale: 1.2,
            glow_blur: 20.0,
            label_font: "'JetBrains Mono', monospace".to_string(),
        }
    }
}

impl OrbitConfig {
    /// Use the page's font for labels. A blank value (the CSS variable is
    /// unset) keeps the current font.
    pub fn with_label_font(mut self, font: &str) -> Self {
        let font = font.trim();
        if !font.is_empty() {
            self.label_font = font.to_string();
        }
        self
    }
}

/// One entry of the skill roster.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SkillSpec {
    pub name: String,
    pub category: String,
    /// 0..=100
    pub proficiency: u8,
    pub years: u8,
    /// CSS hex color, `#RRGGBB`.
    pub color: String,
}

impl SkillSpec {
    pub fn new(name: &str, category: &str, proficiency: u8, years: u8, color: &str) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            proficiency,
            years,
            color: color.to_string(),
        }
    }
}

/// Terminal typing animation timings and script.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct TerminalConfig {
    pub typing_speed: u32,
    pub deleting_speed: u32,
    pub pause_duration: u32,
    pub start_delay: u32,
    /// Pause between the last typed character and the output.
    pub command_pause: u32,
    pub line_delay: u32,
    /// Pause before deletion starts.
    pub clear_delay: u32,
    pub commands: Vec<TerminalCommand>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            typing_speed: 80,
            deleting_speed: 50,
            pause_duration: 2000,
            start_delay: 1000,
            command_pause: 500,
            line_delay: 100,
            clear_delay: 500,
            commands: crate::TERMINAL_SCRIPT
                .iter()
                .map(|(cmd, out)| TerminalCommand::new(cmd, out))
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TerminalCommand {
    pub command: String,
    /// Newline separated; empty means the command prints nothing.
    pub output: String,
}

impl TerminalCommand {
    pub fn new(command: &str, output: &str) -> Self {
        Self {
            command: command.to_string(),
            output: output.to_string(),
        }
    }

    pub fn output_lines(&self) -> Vec<String> {
        if self.output.is_empty() {
            return Vec::new();
        }
        self.output.split('\n').map(str::to_string).collect()
    }
}

impl Default for FxConfig {
    /// Stock page config with the built-in skill roster.
    fn default() -> Self {
        Self {
            terminal: TerminalConfig::default(),
            network: NetworkConfig::default(),
            orbit: OrbitConfig::default(),
            skills: crate::SKILLS
                .iter()
                .map(|&(name, category, proficiency, years, color)| {
                    SkillSpec::new(name, category, proficiency, years, color)
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_carries_roster_and_script() {
        let cfg = FxConfig::default();
        assert_eq!(cfg.skills.len(), crate::SKILLS.len());
        assert_eq!(cfg.terminal.commands.len(), crate::TERMINAL_SCRIPT.len());
        assert_eq!(cfg.network.node_count, 50);
    }

    #[test]
    fn label_font_follows_page_unless_blank() {
        let cfg = OrbitConfig::default().with_label_font("  'Fira Code', monospace ");
        assert_eq!(cfg.label_font, "'Fira Code', monospace");
        let cfg = OrbitConfig::default().with_label_font("   ");
        assert_eq!(cfg.label_font, OrbitConfig::default().label_font);
    }

    #[test]
    fn output_lines_split_on_newline() {
        let cmd = TerminalCommand::new("ls", "a\nb\nc");
        assert_eq!(cmd.output_lines(), vec!["a", "b", "c"]);
        assert!(TerminalCommand::new("true", "").output_lines().is_empty());
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn json_override_keeps_other_defaults() {
        let cfg = FxConfig::from_json(r#"{"network": {"node_count": 12}}"#).unwrap();
        assert_eq!(cfg.network.node_count, 12);
        assert_eq!(cfg.network.max_distance, 150.0);
        assert_eq!(cfg.orbit, OrbitConfig::default());
        assert_eq!(cfg.skills.len(), crate::SKILLS.len());
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn json_rejects_garbage() {
        assert!(FxConfig::from_json("{not json").is_err());
    }
}
