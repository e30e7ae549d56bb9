//! Grammar for the `<platform> <major>.<minor>.<patch>+<build>` tag the
//! mobile clients append to every submission.

use once_cell::sync::Lazy;
use regex::Regex;

static CLIENT_TAG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(ios|android) ([0-9]+)\.([0-9]+)\.([0-9]+)\+([0-9]+)$")
        .expect("client tag pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
        }
    }

    fn from_literal(value: &str) -> Option<Self> {
        match value {
            "ios" => Some(Self::Ios),
            "android" => Some(Self::Android),
            _ => None,
        }
    }
}

/// A parsed client tag.
///
/// Version components are kept as the submitted digit runs; any length and
/// leading zeros are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientTag {
    pub platform: Platform,
    pub major: String,
    pub minor: String,
    pub patch: String,
    pub build: String,
}

impl ClientTag {
    /// Returns `None` unless the whole input matches the grammar.
    pub fn parse(value: &str) -> Option<Self> {
        let captures = CLIENT_TAG_PATTERN.captures(value)?;
        Some(Self {
            platform: Platform::from_literal(&captures[1])?,
            major: captures[2].to_string(),
            minor: captures[3].to_string(),
            patch: captures[4].to_string(),
            build: captures[5].to_string(),
        })
    }

    pub fn version(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }
}

pub fn is_valid_client_tag(value: &str) -> bool {
    CLIENT_TAG_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ios_tag() {
        let tag = ClientTag::parse("ios 1.2.3+4").expect("tag should parse");
        assert_eq!(tag.platform, Platform::Ios);
        assert_eq!(tag.version(), "1.2.3");
        assert_eq!(tag.build, "4");
    }

    #[test]
    fn accepts_long_and_zero_padded_components() {
        let tag = ClientTag::parse("android 007.10.0+123456789012345678901234567890")
            .expect("tag should parse");
        assert_eq!(tag.platform, Platform::Android);
        assert_eq!(tag.major, "007");
        assert_eq!(tag.build, "123456789012345678901234567890");
    }

    #[test]
    fn rejects_malformed_tags() {
        for value in [
            "ios1.2.3+4",
            "windows 1.2.3+4",
            "ios 1.2.3",
            "ios 1.2.3+4 ",
            " ios 1.2.3+4",
            "ios  1.2.3+4",
            "ios 1.2.x+4",
            "IOS 1.2.3+4",
            "ios 1.2.3+4\n",
            "",
        ] {
            assert!(!is_valid_client_tag(value), "{value:?} should be rejected");
            assert!(ClientTag::parse(value).is_none());
        }
    }
}
