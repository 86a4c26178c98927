mod category;
mod extinf;
pub use category::*;
pub use extinf::*;

pub mod directives {
    pub const EXTM3U: &str = "#EXTM3U";
    pub const EXTINF: &str = "#EXTINF";

    /// Case-insensitive directive prefix test.
    pub fn has_prefix(line: &str, directive: &str) -> bool {
        line.get(..directive.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(directive))
    }
}
