//! Message edit tool: rephrase menu and staged-text state.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use std::time::Duration;

/// Simulated processing time for a rephrase action.
pub const REPHRASE_DELAY: Duration = Duration::from_millis(500);

const FRIENDLY_SUFFIX: &str = "! 😊";
const SMILE: &str = "😊";

/// Entries of the rephrase menu, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RephraseOption {
    MyToneOfVoice,
    MoreFriendly,
    MoreFormal,
    FixGrammar,
    Translate,
}

impl RephraseOption {
    pub const ALL: [Self; 5] = [
        Self::MyToneOfVoice,
        Self::MoreFriendly,
        Self::MoreFormal,
        Self::FixGrammar,
        Self::Translate,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::MyToneOfVoice => "My tone of voice",
            Self::MoreFriendly => "More friendly",
            Self::MoreFormal => "More formal",
            Self::FixGrammar => "Fix grammar & spelling",
            Self::Translate => "Translate...",
        }
    }

    /// Rewrite `text` with this option. Tone-of-voice and translate are inert.
    #[must_use]
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::MoreFriendly => text.replace('.', FRIENDLY_SUFFIX),
            Self::MoreFormal => text.replace('!', ".").replace(SMILE, ""),
            Self::FixGrammar => capitalize_first(text),
            Self::MyToneOfVoice | Self::Translate => text.to_owned(),
        }
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Staged text while the edit tool is open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditorState {
    pub staged: String,
    pub processing: bool,
}

impl EditorState {
    #[must_use]
    pub fn open(text: &str) -> Self {
        Self { staged: text.to_owned(), processing: false }
    }

    /// Mark a rephrase as in flight. Returns `false` if one already is.
    pub fn begin_rephrase(&mut self) -> bool {
        if self.processing {
            return false;
        }
        self.processing = true;
        true
    }

    /// Apply `option` to the current staged text and end processing.
    pub fn finish_rephrase(&mut self, option: RephraseOption) {
        self.staged = option.apply(&self.staged);
        self.processing = false;
    }

    /// Rephrase without the simulated delay.
    pub fn rephrase(&mut self, option: RephraseOption) {
        if self.begin_rephrase() {
            self.finish_rephrase(option);
        }
    }

    pub fn set_staged(&mut self, text: String) {
        if !self.processing {
            self.staged = text;
        }
    }

    #[must_use]
    pub fn apply_label(&self) -> &'static str {
        if self.processing { "Applying..." } else { "Apply Changes" }
    }
}
