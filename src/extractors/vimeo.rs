use crate::utils::{join_base, slice_after};
use serde_json::Value;

/// Substring that marks a Vimeo link; the video id follows it.
pub const DOMAIN_MARKER: &str = "vimeo.com/";

pub const DEFAULT_API_BASE: &str = "http://vimeo.com";

pub const THUMBNAIL_FIELD: &str = "thumbnail_large";

const EMBED_BASE: &str = "//player.vimeo.com/video/";

pub fn matches(link: &str) -> bool {
    link.contains(DOMAIN_MARKER)
}

/// Everything after the domain marker, verbatim. Query strings and fragments
/// are not stripped.
pub fn video_id(link: &str) -> Option<String> {
    slice_after(link, DOMAIN_MARKER).map(str::to_string)
}

pub fn embed_src(video_id: &str) -> String {
    format!("{}{}", EMBED_BASE, video_id)
}

pub fn api_url(base: &str, video_id: &str) -> String {
    join_base(base, &format!("api/v2/video/{}.json", video_id))
}

/// The v2 API answers with a one-element array of video objects.
pub fn thumbnail_from_response(data: &Value) -> Option<&str> {
    data.get(0)?.get(THUMBNAIL_FIELD)?.as_str()
}
