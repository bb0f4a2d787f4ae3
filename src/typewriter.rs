#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    PausingFull,
    Deleting,
    PausingEmpty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    pub type_ms: u32,
    pub delete_ms: u32,
    pub hold_full_ms: u32,
    pub hold_empty_ms: u32,
}

impl Timing {
    pub fn from_speed(type_ms: u32, hold_full_ms: u32, hold_empty_ms: u32) -> Self {
        Self {
            type_ms,
            delete_ms: type_ms / 2,
            hold_full_ms,
            hold_empty_ms,
        }
    }
}

/// What to display after a tick, and how long to wait before the next one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tick {
    pub text: String,
    pub delay_ms: u32,
}

/// Types each string one character at a time, holds it, deletes it, then
/// moves on to the next string, forever.
#[derive(Clone, Debug)]
pub struct Typewriter {
    texts: Vec<String>,
    timing: Timing,
    text_index: usize,
    char_index: usize,
    phase: Phase,
}

impl Typewriter {
    /// Returns `None` when there is nothing to type.
    pub fn new(texts: Vec<String>, timing: Timing) -> Option<Self> {
        if texts.is_empty() {
            return None;
        }

        Some(Self {
            texts,
            timing,
            text_index: 0,
            char_index: 0,
            phase: Phase::Typing,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn text_index(&self) -> usize {
        self.text_index
    }

    pub fn current_text(&self) -> &str {
        &self.texts[self.text_index]
    }

    pub fn displayed(&self) -> &str {
        prefix(self.current_text(), self.char_index)
    }

    pub fn tick(&mut self) -> Tick {
        let len = self.current_text().chars().count();

        let deleting = match self.phase {
            Phase::Typing | Phase::PausingEmpty => false,
            Phase::Deleting | Phase::PausingFull => true,
        };

        let mut delay_ms = if deleting {
            self.char_index = self.char_index.saturating_sub(1);
            self.phase = Phase::Deleting;
            self.timing.delete_ms
        } else {
            self.char_index = (self.char_index + 1).min(len);
            self.phase = Phase::Typing;
            self.timing.type_ms
        };

        if !deleting && self.char_index == len {
            self.phase = Phase::PausingFull;
            delay_ms = self.timing.hold_full_ms;
        } else if deleting && self.char_index == 0 {
            self.phase = Phase::PausingEmpty;
            self.text_index = (self.text_index + 1) % self.texts.len();
            delay_ms = self.timing.hold_empty_ms;
        }

        // After wrapping, the index already names the next string but the
        // prefix is empty either way.
        Tick {
            text: self.displayed().to_string(),
            delay_ms,
        }
    }
}

fn prefix(text: &str, chars: usize) -> &str {
    text.char_indices()
        .nth(chars)
        .map(|(offset, _)| &text[..offset])
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing() -> Timing {
        Timing::from_speed(100, 2_000, 500)
    }

    fn typewriter(texts: &[&str]) -> Typewriter {
        Typewriter::new(texts.iter().map(|text| text.to_string()).collect(), timing())
            .expect("non-empty text list")
    }

    #[test]
    fn empty_list_disables_typewriter() {
        assert!(Typewriter::new(Vec::new(), timing()).is_none());
    }

    #[test]
    fn types_then_holds_then_deletes() {
        let mut machine = typewriter(&["abc"]);

        assert_eq!(machine.tick(), Tick { text: "a".into(), delay_ms: 100 });
        assert_eq!(machine.tick(), Tick { text: "ab".into(), delay_ms: 100 });
        assert_eq!(machine.tick(), Tick { text: "abc".into(), delay_ms: 2_000 });
        assert_eq!(machine.phase(), Phase::PausingFull);

        assert_eq!(machine.tick(), Tick { text: "ab".into(), delay_ms: 50 });
        assert_eq!(machine.phase(), Phase::Deleting);
        assert_eq!(machine.tick(), Tick { text: "a".into(), delay_ms: 50 });
        assert_eq!(machine.tick(), Tick { text: "".into(), delay_ms: 500 });
        assert_eq!(machine.phase(), Phase::PausingEmpty);

        assert_eq!(machine.tick(), Tick { text: "a".into(), delay_ms: 100 });
        assert_eq!(machine.phase(), Phase::Typing);
    }

    #[test]
    fn full_cycle_advances_index_by_one_modulo_length() {
        let texts = ["Rust", "WebAssembly", "Yew"];
        let mut machine = typewriter(&texts);

        for cycle in 0..(texts.len() * 2) {
            let start = machine.text_index();
            let len = machine.current_text().chars().count();

            // Type `len` characters, then delete `len` characters.
            for _ in 0..(len * 2) {
                let tick = machine.tick();
                assert!(tick.text.chars().count() <= len, "cycle {cycle}");
            }

            assert_eq!(machine.phase(), Phase::PausingEmpty);
            assert_eq!(machine.text_index(), (start + 1) % texts.len());
        }
    }

    #[test]
    fn displayed_length_stays_within_current_string() {
        let mut machine = typewriter(&["short", "a much longer line", "mid"]);

        for _ in 0..500 {
            let tick = machine.tick();
            let len = tick.text.chars().count();
            assert!(len <= machine.current_text().chars().count());
            assert_eq!(machine.displayed(), tick.text);
        }
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut machine = typewriter(&["héé"]);

        assert_eq!(machine.tick().text, "h");
        assert_eq!(machine.tick().text, "hé");
        let full = machine.tick();
        assert_eq!(full.text, "héé");
        assert_eq!(full.delay_ms, 2_000);
    }

    #[test]
    fn empty_string_does_not_stall() {
        let mut machine = typewriter(&["", "x"]);

        assert_eq!(machine.tick(), Tick { text: "".into(), delay_ms: 2_000 });
        assert_eq!(machine.tick(), Tick { text: "".into(), delay_ms: 500 });
        assert_eq!(machine.text_index(), 1);
        assert_eq!(machine.tick(), Tick { text: "x".into(), delay_ms: 2_000 });
    }
}
