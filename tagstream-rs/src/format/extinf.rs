use std::collections::HashMap;

use smol_str::SmolStr;

/// Well-known `#EXTINF` attribute keys.
pub mod tags {
    pub const TVG_ID: &str = "tvg-id";
    pub const TVG_NAME: &str = "tvg-name";
    pub const TVG_LOGO: &str = "tvg-logo";
    pub const GROUP_TITLE: &str = "group-title";

    /// Canonical serialization order of the known keys.
    pub const EMIT_ORDER: [&str; 4] = [TVG_ID, TVG_NAME, TVG_LOGO, GROUP_TITLE];
}

/// One parsed `#EXTINF` line: its `key="value"` attributes plus the display
/// title found after the first comma.
#[derive(Debug, Clone, Default)]
pub struct ExtinfLine {
    pub attributes: HashMap<SmolStr, SmolStr>,
    pub title: SmolStr,
}

impl ExtinfLine {
    /// Sets `key` unless it already carries a non-empty value.
    pub fn fill(&mut self, key: &str, value: impl Into<SmolStr>) {
        match self.attributes.get(key) {
            Some(existing) if !existing.is_empty() => {}
            _ => {
                self.attributes.insert(SmolStr::new(key), value.into());
            }
        }
    }

    /// Returns the attribute value, treating an empty value as absent.
    pub fn value_of(&self, key: &str) -> Option<&SmolStr> {
        self.attributes.get(key).filter(|value| !value.is_empty())
    }
}
