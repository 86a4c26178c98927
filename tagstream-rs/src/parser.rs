use lazy_static::lazy_static;
use regex::Regex;
use smol_str::SmolStr;

use crate::format::ExtinfLine;

lazy_static! {
    /// From `https://github.com/Raiper34/m3u-parser-generator/blob/c8e479161dcc4ec3d5490631fa42a1647741481d/src/m3u-parser.ts#L52` (Modified)
    static ref ATTRIBUTE_REGEX: Regex =
        Regex::new("([^ ]*?)=\"(.*?)\"").expect("Regular expression error");
    static ref EXTINF_REGEX: Regex =
        Regex::new("(?i)^#EXTINF[^,]*,(.*)$").expect("Regular expression error");
}

/// Extracts `key="value"` attributes and the display title from an `#EXTINF`
/// line. The title is everything after the first comma that ends the
/// parameter section; lines without that shape yield an empty title. Only
/// called on lines already known to carry the marker, so nothing is rejected
/// here.
pub fn parse_extinf(line: impl AsRef<str>) -> ExtinfLine {
    let line = line.as_ref();
    let mut result = ExtinfLine::default();

    for (_, [key, value]) in ATTRIBUTE_REGEX.captures_iter(line).map(|x| x.extract()) {
        result.attributes.insert(key.into(), value.into());
    }

    if let Some(captures) = EXTINF_REGEX.captures(line) {
        result.title = SmolStr::new(captures[1].trim());
    }

    result
}
