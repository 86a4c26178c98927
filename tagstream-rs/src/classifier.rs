use lazy_static::lazy_static;
use regex::Regex;

use crate::format::Category;
use crate::parser::parse_extinf;

lazy_static! {
    /// Keywords that mark an `#EXTINF` line as a section header. The list is
    /// ordered and the first matching pattern wins; that order is part of the
    /// contract and must not be rearranged.
    static ref SECTION_KEYWORDS: Vec<(Category, Regex)> = vec![
        (
            Category::Sinemalar,
            Regex::new("(?i)sinema|filmler|sinemalar").expect("Regular expression error"),
        ),
        (
            Category::Belgesel,
            Regex::new("(?i)belgesel|belgeseller|documentary").expect("Regular expression error"),
        ),
        (
            Category::Yedek,
            Regex::new("(?i)yede?k|yedekler").expect("Regular expression error"),
        ),
        (
            Category::SevenTwentyFour,
            Regex::new("(?i)7/24|7/24 yayın|7/24 yayin").expect("Regular expression error"),
        ),
        (
            Category::Filmler,
            Regex::new("(?i)filmler").expect("Regular expression error"),
        ),
    ];
}

/// Decides whether an `#EXTINF` line is a section header rather than a
/// channel entry, by matching its title against the known category keywords.
pub fn detect_section(line: impl AsRef<str>) -> Option<Category> {
    let extinf = parse_extinf(line);
    SECTION_KEYWORDS
        .iter()
        .find(|(_, pattern)| pattern.is_match(&extinf.title))
        .map(|(category, _)| *category)
}

#[cfg(test)]
mod tests {
    use super::detect_section;
    use crate::format::Category;

    #[test]
    fn test_cinema_keyword() {
        assert_eq!(
            detect_section("#EXTINF:-1,Sinema Kanalı"),
            Some(Category::Sinemalar)
        );
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(
            detect_section("#EXTINF:-1,belgeseller"),
            Some(Category::Belgesel)
        );
        assert_eq!(detect_section("#EXTINF:-1,YEDEK"), Some(Category::Yedek));
    }

    #[test]
    fn test_first_pattern_wins() {
        // matches both the cinema and movies patterns; cinema is listed first
        assert_eq!(
            detect_section("#EXTINF:-1,Filmler 🎬"),
            Some(Category::Sinemalar)
        );
    }

    #[test]
    fn test_ordinary_entry_is_not_a_section() {
        assert_eq!(detect_section("#EXTINF:-1,TRT 1 HD"), None);
        assert_eq!(detect_section("#EXTINF:-1,"), None);
    }
}
