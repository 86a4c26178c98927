use std::collections::HashMap;

use lazy_static::lazy_static;

/// Known playlist sections. Entries that follow a section header inherit its
/// category as their group-title when they do not name one themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Sinemalar,
    Belgesel,
    Yedek,
    SevenTwentyFour,
    Filmler,
}

impl Category {
    /// Canonical group-title value for this category.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sinemalar => "SİNEMALAR",
            Self::Belgesel => "BELGESEL",
            Self::Yedek => "YEDEK",
            Self::SevenTwentyFour => "7/24",
            Self::Filmler => "FİLMLER",
        }
    }

    pub fn default_logo(&self) -> &'static str {
        logo_for_group(self.name())
    }
}

/// Group assigned to entries that neither carry a group-title attribute nor
/// follow a recognized section header.
pub const DEFAULT_GROUP: &str = "DEFAULT";

lazy_static! {
    /// Default logos keyed by canonical (uppercase) group name. The DEFAULT
    /// entry is the global fallback and must always be present.
    pub static ref DEFAULT_LOGOS: HashMap<&'static str, &'static str> = HashMap::from([
        ("SİNEMALAR", "https://i.hizliresim.com/i21k4te.png"),
        ("FİLMLER", "https://i.hizliresim.com/i21k4te.png"),
        ("FİLM", "https://i.hizliresim.com/i21k4te.png"),
        (
            "BELGESEL",
            "https://upload.wikimedia.org/wikipedia/commons/1/1b/Documentary_icon.png",
        ),
        ("YEDEK", "https://i.hizliresim.com/i21k4te.png"),
        ("7/24", "https://i.hizliresim.com/i21k4te.png"),
        (DEFAULT_GROUP, "https://i.hizliresim.com/i21k4te.png"),
    ]);
}

/// Default logo for an arbitrary group string. Lookup is done on the
/// uppercased group; free-form groups that are not canonical category names
/// resolve to the DEFAULT logo.
pub fn logo_for_group(group: &str) -> &'static str {
    let key = group.to_uppercase();
    DEFAULT_LOGOS
        .get(key.as_str())
        .copied()
        .unwrap_or(DEFAULT_LOGOS[DEFAULT_GROUP])
}
