use std::fmt::Display;

use crate::format::{ExtinfLine, directives, tags};

impl Display for ExtinfLine {
    /// Canonical form: `#EXTINF:-1 <pairs>,<title>`. Known keys are emitted
    /// strictly in [`tags::EMIT_ORDER`]; absent or empty values are skipped.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:-1 ", directives::EXTINF)?;

        let mut first = true;
        for key in tags::EMIT_ORDER {
            let Some(value) = self.attributes.get(key) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}=\"{}\"", key, value)?;
            first = false;
        }

        write!(f, ",{}", self.title)
    }
}
