//! Video identifiers and URL-to-id extraction.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Video loaded when the app starts.
pub const DEFAULT_VIDEO_ID: &str = "dQw4w9WgXcQ";

/// Identifier of a video hosted by the embed provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Extract an id from free-form URL input.
    ///
    /// Takes the raw remainder after the first `"v="`, trailing query
    /// parameters and all; input without the marker is used whole so short
    /// links and bare ids load too. Nothing is validated, garbage flows
    /// through to the embed which reports its own failure.
    pub fn from_url(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.find("v=") {
            Some(idx) => Self(trimmed[idx + 2..].to_string()),
            None => Self(trimmed.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for VideoId {
    fn default() -> Self {
        Self(DEFAULT_VIDEO_ID.to_string())
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_url_takes_raw_suffix() {
        // The suffix is taken verbatim, extra query parameters included.
        let id = VideoId::from_url("https://youtu.be/watch?v=ABC123&t=5");
        assert_eq!(id.as_str(), "ABC123&t=5");
    }

    #[test]
    fn test_from_url_first_marker_wins() {
        let id = VideoId::from_url("https://example.com/?v=first&other=v=second");
        assert_eq!(id.as_str(), "first&other=v=second");
    }

    #[test]
    fn test_from_url_without_marker_uses_whole_input() {
        assert_eq!(VideoId::from_url("dQw4w9WgXcQ").as_str(), "dQw4w9WgXcQ");
        assert_eq!(
            VideoId::from_url("  https://youtu.be/abc  ").as_str(),
            "https://youtu.be/abc"
        );
    }

    #[test]
    fn test_from_url_empty_input() {
        assert!(VideoId::from_url("").is_empty());
        assert!(VideoId::from_url("https://youtube.com/watch?v=").is_empty());
    }

    proptest! {
        #[test]
        fn prop_suffix_after_first_marker(prefix in "[a-z./:?&]{0,20}", suffix in "[A-Za-z0-9&=_-]{0,20}") {
            // The prefix alphabet has no '=', so the first "v=" is ours and
            // everything after it must survive verbatim.
            let url = format!("{prefix}v={suffix}");
            let id = VideoId::from_url(&url);
            prop_assert_eq!(id.as_str(), suffix.as_str());
        }
    }
}
