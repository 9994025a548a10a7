use crate::core::{video_type_and_id, Provider};
use crate::extractors::{vimeo, youtube};

/// Source for an iframe player, e.g. `//www.youtube.com/embed/SicQi0H925g`.
///
/// Both providers get a protocol-relative URL so the player follows the
/// scheme of the embedding page.
pub fn embed_src(link: &str) -> Option<String> {
    let video = video_type_and_id(link)?;
    let src = match video.provider {
        Provider::Vimeo => vimeo::embed_src(&video.id),
        Provider::YouTube => youtube::embed_src(&video.id),
    };
    Some(src)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_src() {
        assert_eq!(
            embed_src("https://vimeo.com/22733150").as_deref(),
            Some("//player.vimeo.com/video/22733150")
        );
        assert_eq!(
            embed_src("http://www.youtube.com/watch?v=SicQi0H925g").as_deref(),
            Some("//www.youtube.com/embed/SicQi0H925g")
        );
        assert_eq!(embed_src("http://foobar.com/whatever"), None);
        assert_eq!(embed_src("http://www.youtube.com/channel/foo"), None);
    }
}
