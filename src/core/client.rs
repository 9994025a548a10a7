use crate::config::{Config, Credentials};
use crate::core::{classify, extract_id, Provider, Result, VideoError, VideoRef};
use crate::extractors::{vimeo, youtube, ThumbnailQuality};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Talks to the provider APIs and image hosts.
///
/// Stateless apart from the pooled HTTP client, so a single instance can be
/// cloned and shared across tasks.
#[derive(Debug, Clone)]
pub struct VideoClient {
    client: reqwest::Client,
    config: Config,
}

impl VideoClient {
    pub fn new(config: Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(VideoError::Client)?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Metadata endpoint for `video`. YouTube needs a key from `credentials`;
    /// without one this fails before anything touches the network.
    pub fn api_url(&self, video: &VideoRef, credentials: &Credentials) -> Result<String> {
        match video.provider {
            Provider::Vimeo => Ok(vimeo::api_url(&self.config.vimeo_api_base, &video.id)),
            Provider::YouTube => {
                let key = credentials
                    .get(Provider::YouTube)
                    .ok_or(VideoError::MissingCredential(Provider::YouTube))?;
                Ok(youtube::api_url(&self.config.youtube_api_base, &video.id, key))
            }
        }
    }

    /// Fetches the provider's metadata for `link` and returns the parsed JSON
    /// as-is. Non-2xx answers are errors. An empty id never reaches the network.
    pub async fn call_api(&self, link: &str, credentials: &Credentials) -> Result<Value> {
        let video = VideoRef::parse(link)?;
        if video.id.is_empty() {
            return Err(VideoError::MissingId {
                provider: video.provider,
                url: link.to_string(),
            });
        }
        let endpoint = self.api_url(&video, credentials)?;

        debug!(provider = %video.provider, id = %video.id, "Calling metadata API");

        let response = self.client.get(&endpoint).send().await?.error_for_status()?;
        let body = response.bytes().await?;

        Ok(serde_json::from_slice(&body)?)
    }

    /// Returns a URL for the video's cover image.
    pub async fn get_image_url(&self, link: &str) -> Result<String> {
        let provider = classify(link).ok_or_else(|| VideoError::UnsupportedUrl(link.to_string()))?;

        let image = match provider {
            Provider::Vimeo => {
                let data = self.call_api(link, &Credentials::default()).await?;
                vimeo::thumbnail_from_response(&data)
                    .map(str::to_string)
                    .ok_or(VideoError::UnexpectedResponse {
                        provider,
                        field: vimeo::THUMBNAIL_FIELD,
                    })?
            }
            Provider::YouTube => {
                let id = extract_id(link, provider).ok_or_else(|| VideoError::MissingId {
                    provider,
                    url: link.to_string(),
                })?;
                self.youtube_thumbnail(&id).await
            }
        };

        info!(%provider, "Resolved thumbnail: {}", image);
        Ok(image)
    }

    /// Max-res image when it exists, otherwise the hq image. The hq image is
    /// never probed.
    async fn youtube_thumbnail(&self, id: &str) -> String {
        let base = &self.config.youtube_image_base;
        let best = ThumbnailQuality::MaxRes.url(base, id);

        match self.probe(&best).await {
            Ok(StatusCode::OK) => return best,
            Ok(status) => debug!("No max-res thumbnail for {} (HTTP {})", id, status),
            Err(e) => warn!("Thumbnail probe for {} failed: {}", id, e),
        }

        ThumbnailQuality::High.url(base, id)
    }

    async fn probe(&self, url: &str) -> reqwest::Result<StatusCode> {
        let response = self.client.get(url).send().await?;
        Ok(response.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> VideoClient {
        VideoClient::new(Config::default()).unwrap()
    }

    #[test]
    fn test_api_url() {
        let client = client();
        let vimeo = VideoRef {
            provider: Provider::Vimeo,
            id: "22733150".to_string(),
        };
        assert_eq!(
            client.api_url(&vimeo, &Credentials::default()).unwrap(),
            "http://vimeo.com/api/v2/video/22733150.json"
        );

        let youtube = VideoRef {
            provider: Provider::YouTube,
            id: "SicQi0H925g".to_string(),
        };
        let credentials = Credentials::new().with_key(Provider::YouTube, "a key&more");
        assert_eq!(
            client.api_url(&youtube, &credentials).unwrap(),
            "https://www.googleapis.com/youtube/v3/videos?id=SicQi0H925g&key=a%20key%26more&part=snippet,contentDetails,statistics,status"
        );
    }

    #[test]
    fn test_api_url_requires_youtube_key() {
        let youtube = VideoRef {
            provider: Provider::YouTube,
            id: "SicQi0H925g".to_string(),
        };
        let credentials = Credentials::new().with_key(Provider::Vimeo, "unused");
        assert!(matches!(
            client().api_url(&youtube, &credentials),
            Err(VideoError::MissingCredential(Provider::YouTube))
        ));
    }

    #[test]
    fn test_get_image_url_rejects_unknown_links() {
        let result = tokio_test::block_on(client().get_image_url("http://foobar.com/whatever"));
        match result {
            Err(e @ VideoError::UnsupportedUrl(_)) => {
                assert_eq!(e.to_string(), "http://foobar.com/whatever is not supported");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
