use crate::utils::{join_base, slice_after, take_chars};

/// Canonical and short-link domains; either one marks a YouTube link.
pub const DOMAIN_ALIASES: [&str; 2] = ["youtube.com/", "youtu.be"];

/// Substrings the id directly follows, tried in order.
pub const ID_MARKERS: [&str; 3] = ["youtu.be/", "?v=", "/v/"];

/// YouTube ids are always 11 characters.
pub const ID_LEN: usize = 11;

pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com";

pub const DEFAULT_IMAGE_BASE: &str = "http://img.youtube.com";

const API_PARTS: &str = "snippet,contentDetails,statistics,status";

const EMBED_BASE: &str = "//www.youtube.com/embed/";

pub fn matches(link: &str) -> bool {
    DOMAIN_ALIASES.iter().any(|alias| link.contains(alias))
}

/// Finds the id after the first marker present in the link, regardless of
/// whether it is a short link, a `watch?v=` link or a `/v/` link.
pub fn video_id(link: &str) -> Option<String> {
    ID_MARKERS
        .iter()
        .find_map(|marker| slice_after(link, marker))
        .map(|rest| take_chars(rest, ID_LEN))
}

pub fn embed_src(video_id: &str) -> String {
    format!("{}{}", EMBED_BASE, video_id)
}

pub fn api_url(base: &str, video_id: &str, key: &str) -> String {
    join_base(
        base,
        &format!(
            "youtube/v3/videos?id={}&key={}&part={}",
            video_id,
            urlencoding::encode(key),
            API_PARTS
        ),
    )
}

/// Still images YouTube publishes for every video.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailQuality {
    /// 1280x720, missing for some older uploads. Served as `maxresdefault.jpg`;
    /// older descriptions of this lookup call it `maxdefault.jpg`.
    MaxRes,
    /// 480x360, always present
    High,
}

impl ThumbnailQuality {
    pub fn filename(&self) -> &'static str {
        match self {
            ThumbnailQuality::MaxRes => "maxresdefault.jpg",
            ThumbnailQuality::High => "hqdefault.jpg",
        }
    }

    pub fn url(&self, base: &str, video_id: &str) -> String {
        join_base(base, &format!("vi/{}/{}", video_id, self.filename()))
    }
}
