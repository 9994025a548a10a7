use crate::core::{Result, VideoError};
use crate::extractors::{vimeo, youtube};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The video hosts this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Vimeo,
    YouTube,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Vimeo => "vimeo",
            Provider::YouTube => "youtube",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides which provider a link belongs to by plain substring search.
///
/// No normalization happens: matching is case-sensitive and Vimeo is checked
/// before YouTube. Returns `None` for anything else.
pub fn classify(link: &str) -> Option<Provider> {
    if vimeo::matches(link) {
        Some(Provider::Vimeo)
    } else if youtube::matches(link) {
        Some(Provider::YouTube)
    } else {
        None
    }
}

/// Pulls the provider's video id out of `link`, or `None` when the link has
/// no recognizable id. An empty id (`https://vimeo.com/`) is still a match.
pub fn extract_id(link: &str, provider: Provider) -> Option<String> {
    match provider {
        Provider::Vimeo => vimeo::video_id(link),
        Provider::YouTube => youtube::video_id(link),
    }
}

/// A classified link together with its extracted id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoRef {
    pub provider: Provider,
    pub id: String,
}

impl VideoRef {
    /// Like [`video_type_and_id`] but says which step missed.
    pub fn parse(link: &str) -> Result<Self> {
        let provider = classify(link).ok_or_else(|| VideoError::UnsupportedUrl(link.to_string()))?;
        let id = extract_id(link, provider).ok_or_else(|| VideoError::MissingId {
            provider,
            url: link.to_string(),
        })?;
        Ok(Self { provider, id })
    }
}

pub fn video_type_and_id(link: &str) -> Option<VideoRef> {
    VideoRef::parse(link).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIMEO_URL: &str = "https://vimeo.com/22733150";
    const YOUTUBE_URLS: [&str; 3] = [
        "http://www.youtube.com/watch?v=SicQi0H925g",
        "http://www.youtube.com/v/SicQi0H925g",
        "http://www.youtu.be/SicQi0H925g",
    ];

    #[test]
    fn test_classify() {
        for link in YOUTUBE_URLS {
            assert_eq!(classify(link), Some(Provider::YouTube));
        }
        assert_eq!(classify(VIMEO_URL), Some(Provider::Vimeo));
        assert_eq!(classify("http://foobar.com/whatever"), None);
        assert_eq!(classify("HTTPS://VIMEO.COM/22733150"), None);
    }

    #[test]
    fn test_classify_prefers_vimeo() {
        let link = "https://vimeo.com/22733150?from=youtube.com/watch";
        assert_eq!(classify(link), Some(Provider::Vimeo));
    }

    #[test]
    fn test_extract_id() {
        for link in YOUTUBE_URLS {
            assert_eq!(extract_id(link, Provider::YouTube).as_deref(), Some("SicQi0H925g"));
        }
        assert_eq!(extract_id(VIMEO_URL, Provider::Vimeo).as_deref(), Some("22733150"));
        assert_eq!(extract_id("http://www.youtube.com/feed", Provider::YouTube), None);
    }

    #[test]
    fn test_video_type_and_id() {
        assert_eq!(
            video_type_and_id(VIMEO_URL),
            Some(VideoRef {
                provider: Provider::Vimeo,
                id: "22733150".to_string(),
            })
        );
        assert_eq!(video_type_and_id("http://foobar.com/whatever"), None);
        assert_eq!(video_type_and_id("http://www.youtube.com/feed"), None);
    }

    #[test]
    fn test_parse_reports_the_miss() {
        assert!(matches!(
            VideoRef::parse("http://foobar.com/whatever"),
            Err(VideoError::UnsupportedUrl(link)) if link == "http://foobar.com/whatever"
        ));
        assert!(matches!(
            VideoRef::parse("http://www.youtube.com/feed"),
            Err(VideoError::MissingId { provider: Provider::YouTube, .. })
        ));
    }

    #[test]
    fn test_provider_serde_names() {
        assert_eq!(serde_json::to_string(&Provider::YouTube).unwrap(), "\"youtube\"");
        assert_eq!(Provider::Vimeo.to_string(), "vimeo");

        let video = video_type_and_id("http://youtu.be/SicQi0H925g").unwrap();
        assert_eq!(
            serde_json::to_value(&video).unwrap(),
            serde_json::json!({ "provider": "youtube", "id": "SicQi0H925g" })
        );
    }
}
