use crate::error::NavError;
use std::fmt;
use std::str::FromStr;

/// The fixed set of destinations on the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Home,
    Music,
    Shows,
    About,
    Contact,
}

impl Section {
    pub const COUNT: usize = 5;

    /// All sections in declaration order.
    pub const ALL: [Section; Section::COUNT] = [
        Section::Home,
        Section::Music,
        Section::Shows,
        Section::About,
        Section::Contact,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Music => "music",
            Section::Shows => "shows",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    /// Upper-case caption drawn next to the node.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "HOME",
            Section::Music => "MUSIC",
            Section::Shows => "SHOWS",
            Section::About => "ABOUT",
            Section::Contact => "CONTACT",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Section::ALL
            .into_iter()
            .find(|section| section.id().eq_ignore_ascii_case(needle))
            .ok_or_else(|| NavError::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_declaration_order() {
        for (i, s) in Section::ALL.iter().enumerate() {
            assert_eq!(s.index(), i);
        }
    }

    #[test]
    fn parse_is_case_insensitive_and_trimmed() {
        assert_eq!(" About ".parse::<Section>(), Ok(Section::About));
        assert_eq!("CONTACT".parse::<Section>(), Ok(Section::Contact));
        assert_eq!(
            "blog".parse::<Section>(),
            Err(NavError::UnknownSection("blog".into()))
        );
    }
}
