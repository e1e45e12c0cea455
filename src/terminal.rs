//! Fake shell session for the hero terminal.
//!
//! [`TerminalTyper`] is a pure step machine: each [`TerminalStep`] is one
//! display state plus how long to hold it. The browser driver applies a step to
//! the DOM and arms a timer for the next one.

use crate::config::{TerminalCommand, TerminalConfig};

/// One display state of the terminal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerminalStep {
    /// Text on the prompt line.
    pub command: String,
    /// Output lines currently shown under the prompt.
    pub output: Vec<String>,
    /// Milliseconds to hold this state before the next step.
    pub delay_ms: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Boot,
    /// Showing the first `n` chars of the command.
    Typing(usize),
    /// Showing the first `n` output lines.
    Output(usize),
    Deleting(usize),
}

pub struct TerminalTyper {
    config: TerminalConfig,
    index: usize,
    phase: Phase,
}

impl TerminalTyper {
    pub fn new(config: TerminalConfig) -> Self {
        Self {
            config,
            index: 0,
            phase: Phase::Boot,
        }
    }

    /// Index of the command currently on screen.
    pub fn command_index(&self) -> usize {
        self.index
    }

    fn current(&self) -> Option<&TerminalCommand> {
        self.config.commands.get(self.index)
    }

    pub fn next_step(&mut self) -> TerminalStep {
        let Some(cmd) = self.current() else {
            return TerminalStep {
                command: String::new(),
                output: Vec::new(),
                delay_ms: self.config.pause_duration,
            };
        };
        let cfg = &self.config;
        let len = cmd.command.chars().count();
        let lines = cmd.output_lines();
        // pause after the output, then the pause before deleting
        let hold = cfg.pause_duration + cfg.clear_delay;

        let (step, next) = match self.phase {
            Phase::Boot => (
                TerminalStep {
                    command: String::new(),
                    output: Vec::new(),
                    delay_ms: cfg.start_delay,
                },
                Phase::Typing(0),
            ),
            Phase::Typing(n) => {
                let mut delay_ms = cfg.typing_speed;
                let next = if n < len {
                    Phase::Typing(n + 1)
                } else if lines.is_empty() {
                    delay_ms += cfg.command_pause + hold;
                    Phase::Deleting(len)
                } else {
                    delay_ms += cfg.command_pause;
                    Phase::Output(1)
                };
                (
                    TerminalStep {
                        command: prefix(&cmd.command, n),
                        output: Vec::new(),
                        delay_ms,
                    },
                    next,
                )
            }
            Phase::Output(n) => {
                let mut delay_ms = cfg.line_delay;
                let next = if n < lines.len() {
                    Phase::Output(n + 1)
                } else {
                    delay_ms += hold;
                    Phase::Deleting(len)
                };
                (
                    TerminalStep {
                        command: cmd.command.clone(),
                        output: lines[..n].to_vec(),
                        delay_ms,
                    },
                    next,
                )
            }
            Phase::Deleting(n) => (
                TerminalStep {
                    command: prefix(&cmd.command, n),
                    output: lines,
                    delay_ms: cfg.deleting_speed,
                },
                if n > 0 {
                    Phase::Deleting(n - 1)
                } else {
                    Phase::Typing(0)
                },
            ),
        };

        if matches!((self.phase, next), (Phase::Deleting(0), Phase::Typing(0))) {
            self.index = (self.index + 1) % self.config.commands.len();
        }
        self.phase = next;
        step
    }
}

/// First `n` chars of `s`.
fn prefix(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(commands: Vec<TerminalCommand>) -> TerminalConfig {
        TerminalConfig {
            commands,
            ..TerminalConfig::default()
        }
    }

    #[test]
    fn full_cycle_for_one_command() {
        let mut t = TerminalTyper::new(config(vec![TerminalCommand::new("ls", "a\nb")]));
        let steps: Vec<TerminalStep> = (0..11).map(|_| t.next_step()).collect();
        let shown: Vec<(&str, usize, u32)> = steps
            .iter()
            .map(|s| (s.command.as_str(), s.output.len(), s.delay_ms))
            .collect();
        assert_eq!(
            shown,
            vec![
                ("", 0, 1000),
                ("", 0, 80),
                ("l", 0, 80),
                ("ls", 0, 80 + 500),
                ("ls", 1, 100),
                ("ls", 2, 100 + 2000 + 500),
                ("ls", 2, 50),
                ("l", 2, 50),
                ("", 2, 50),
                // wrapped to the same (only) command, output cleared
                ("", 0, 80),
                ("l", 0, 80),
            ]
        );
        assert_eq!(t.command_index(), 0);
    }

    #[test]
    fn advances_cyclically_through_commands() {
        let mut t = TerminalTyper::new(config(vec![
            TerminalCommand::new("a", "x"),
            TerminalCommand::new("b", "y"),
        ]));
        // boot, type "" and "a", one output line, delete "a" and ""
        for _ in 0..6 {
            t.next_step();
        }
        assert_eq!(t.command_index(), 1);
        assert_eq!(t.next_step().command, "");
        assert_eq!(t.next_step().command, "b");
        for _ in 0..3 {
            t.next_step();
        }
        assert_eq!(t.command_index(), 0);
    }

    #[test]
    fn silent_command_goes_straight_to_deleting() {
        let mut t = TerminalTyper::new(config(vec![TerminalCommand::new("x", "")]));
        t.next_step();
        t.next_step();
        let typed = t.next_step();
        assert_eq!(typed.command, "x");
        assert_eq!(typed.delay_ms, 80 + 500 + 2000 + 500);
        let deleting = t.next_step();
        assert_eq!(deleting.command, "x");
        assert_eq!(deleting.delay_ms, 50);
        assert!(deleting.output.is_empty());
    }

    #[test]
    fn multibyte_commands_type_by_char() {
        let mut t = TerminalTyper::new(config(vec![TerminalCommand::new("é✓", "")]));
        t.next_step();
        t.next_step();
        assert_eq!(t.next_step().command, "é");
        assert_eq!(t.next_step().command, "é✓");
    }

    #[test]
    fn empty_script_idles() {
        let mut t = TerminalTyper::new(config(Vec::new()));
        let step = t.next_step();
        assert_eq!(step.command, "");
        assert_eq!(step.delay_ms, 2000);
        assert_eq!(t.next_step(), step);
    }
}
