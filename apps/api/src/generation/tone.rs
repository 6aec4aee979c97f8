//! Tone options offered to users. The tone name is passed to the model verbatim.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Inspirational,
    Persuasive,
    Analytical,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Inspirational,
        Tone::Persuasive,
        Tone::Analytical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Inspirational => "Inspirational",
            Tone::Persuasive => "Persuasive",
            Tone::Analytical => "Analytical",
        }
    }

    /// Emojis are allowed (max 2) only for these tones.
    pub fn allows_emojis(&self) -> bool {
        matches!(self, Tone::Casual | Tone::Inspirational)
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_professional() {
        assert_eq!(Tone::default(), Tone::Professional);
    }

    #[test]
    fn test_serde_uses_display_names() {
        for tone in Tone::ALL {
            let json = serde_json::to_string(&tone).unwrap();
            assert_eq!(json, format!("\"{}\"", tone.as_str()));
            let back: Tone = serde_json::from_str(&json).unwrap();
            assert_eq!(back, tone);
        }
    }

    #[test]
    fn test_unknown_tone_rejected() {
        assert!(serde_json::from_str::<Tone>(r#""Sarcastic""#).is_err());
    }

    #[test]
    fn test_emoji_tones() {
        assert!(Tone::Casual.allows_emojis());
        assert!(Tone::Inspirational.allows_emojis());
        assert!(!Tone::Professional.allows_emojis());
        assert!(!Tone::Analytical.allows_emojis());
    }
}
