//! Character-by-character typing loop over a fixed, cyclic list of lines.
//!
//! Each [`Typewriter::tick`] produces the text to display and how long to
//! wait before the next tick. Offsets count Unicode scalar values so that
//! multi-byte characters are never split.

use crate::config::TypingConfig;

pub const TYPED_LINE_ID: &str = "typed-line";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Pausing,
    Deleting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timings {
    pub type_ms: u32,
    pub delete_ms: u32,
    pub pause_ms: u32,
}

impl From<&TypingConfig> for Timings {
    fn from(config: &TypingConfig) -> Self {
        Self {
            type_ms: config.type_ms,
            delete_ms: config.delete_ms,
            pause_ms: config.pause_ms,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    lines: Vec<Vec<char>>,
    line: usize,
    offset: usize,
    phase: Phase,
    timings: Timings,
}

impl Typewriter {
    /// Returns `None` when there is nothing to type.
    pub fn new<S: AsRef<str>>(lines: &[S], timings: Timings) -> Option<Self> {
        if lines.is_empty() {
            return None;
        }

        Some(Self {
            lines: lines
                .iter()
                .map(|line| line.as_ref().chars().collect())
                .collect(),
            line: 0,
            offset: 0,
            phase: Phase::Typing,
            timings,
        })
    }

    pub fn line_index(&self) -> usize {
        self.line
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_line(&self) -> String {
        self.lines[self.line].iter().collect()
    }

    pub fn tick(&mut self) -> Step {
        let len = self.lines[self.line].len();

        match self.phase {
            Phase::Typing => {
                self.offset = (self.offset + 1).min(len);
                let text = self.visible();
                if self.offset == len {
                    self.phase = Phase::Pausing;
                    Step {
                        text,
                        delay_ms: self.timings.pause_ms,
                    }
                } else {
                    Step {
                        text,
                        delay_ms: self.timings.type_ms,
                    }
                }
            }
            Phase::Pausing | Phase::Deleting => {
                self.offset = self.offset.saturating_sub(1);
                let text = self.visible();
                if self.offset == 0 {
                    self.phase = Phase::Typing;
                    self.line = (self.line + 1) % self.lines.len();
                    Step {
                        text,
                        delay_ms: self.timings.type_ms,
                    }
                } else {
                    self.phase = Phase::Deleting;
                    Step {
                        text,
                        delay_ms: self.timings.delete_ms,
                    }
                }
            }
        }
    }

    fn visible(&self) -> String {
        self.lines[self.line][..self.offset].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    const TIMINGS: Timings = Timings {
        type_ms: 80,
        delete_ms: 30,
        pause_ms: 900,
    };

    #[test]
    fn empty_list_has_no_typewriter() {
        let lines: [&str; 0] = [];
        assert!(Typewriter::new(&lines, TIMINGS).is_none());
    }

    #[test]
    fn types_pauses_then_deletes_a_single_line() {
        let mut writer = Typewriter::new(&["abc"], TIMINGS).expect("non-empty lines");
        let steps: Vec<Step> = (0..6).map(|_| writer.tick()).collect();

        let expected = vec![
            Step { text: "a".into(), delay_ms: 80 },
            Step { text: "ab".into(), delay_ms: 80 },
            Step { text: "abc".into(), delay_ms: 900 },
            Step { text: "ab".into(), delay_ms: 30 },
            Step { text: "a".into(), delay_ms: 30 },
            Step { text: "".into(), delay_ms: 80 },
        ];
        assert_eq!(steps, expected);
        assert_eq!(writer.phase(), Phase::Typing);
        assert_eq!(writer.line_index(), 0);
    }

    #[test]
    fn full_cycle_visits_every_line_in_order() {
        let lines = ["Hi", "Web Dev", "Ideas"];
        let mut writer = Typewriter::new(&lines, TIMINGS).expect("non-empty lines");
        let mut completed = Vec::new();

        while completed.len() < lines.len() + 1 {
            let line = writer.current_line();
            let step = writer.tick();
            if writer.phase() == Phase::Pausing {
                assert_eq!(step.text, line);
                completed.push(step.text);
            }
        }

        assert_eq!(completed, vec!["Hi", "Web Dev", "Ideas", "Hi"]);
    }

    #[test]
    fn multibyte_characters_are_typed_whole() {
        let mut writer = Typewriter::new(&["a — b"], TIMINGS).expect("non-empty lines");
        let texts: Vec<String> = (0..5).map(|_| writer.tick().text).collect();
        assert_eq!(texts, vec!["a", "a ", "a —", "a — ", "a — b"]);
    }

    #[test]
    fn empty_line_is_skipped_without_stalling() {
        let mut writer = Typewriter::new(&["", "x"], TIMINGS).expect("non-empty lines");
        let first = writer.tick();
        assert_eq!(first.text, "");
        assert_eq!(writer.phase(), Phase::Pausing);
        writer.tick();
        assert_eq!(writer.line_index(), 1);
        assert_eq!(writer.tick().text, "x");
    }

    proptest! {
        #[test]
        fn displayed_text_is_always_a_prefix_of_the_current_line(
            lines in proptest::collection::vec("[a-zA-Z é—]{0,12}", 1..5),
            ticks in 1usize..300
        ) {
            let mut writer = Typewriter::new(&lines, TIMINGS).expect("non-empty lines");
            for _ in 0..ticks {
                let line = writer.current_line();
                let step = writer.tick();
                prop_assert!(line.starts_with(&step.text));
                let current_len = writer.current_line().chars().count();
                prop_assert!(writer.offset() <= current_len);
            }
        }
    }
}
