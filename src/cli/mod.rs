use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::core::{classify, embed_src, video_type_and_id, Provider, VideoClient};

#[derive(Parser)]
#[command(name = "scruffy-video")]
#[command(about = "Embed sources and thumbnails for Vimeo and YouTube links")]
#[command(version)]
pub struct Cli {
    /// TOML config file with endpoints, timeout and API keys
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print which provider a link belongs to
    Classify {
        #[arg(value_name = "URL")]
        url: String,
    },
    /// Print the provider and video id
    Id {
        #[arg(value_name = "URL")]
        url: String,

        /// Print `{"provider": ..., "id": ...}` instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Print the iframe embed source
    Embed {
        #[arg(value_name = "URL")]
        url: String,
    },
    /// Print the provider's metadata JSON
    Api {
        #[arg(value_name = "URL")]
        url: String,

        /// YouTube Data API key, overrides the config file
        #[arg(long)]
        youtube_key: Option<String>,
    },
    /// Print the cover image URL
    Thumbnail {
        #[arg(value_name = "URL")]
        url: String,
    },
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            Command::Classify { url } => {
                let kind = classify(url).map_or("none", |provider| provider.as_str());
                println!("{}", kind);
            }
            Command::Id { url, json } => {
                let video = video_type_and_id(url)
                    .ok_or_else(|| anyhow::anyhow!("Could not extract a video id from {}", url))?;
                if *json {
                    println!("{}", serde_json::to_string(&video)?);
                } else {
                    println!("{} {}", video.provider, video.id);
                }
            }
            Command::Embed { url } => {
                let src = embed_src(url)
                    .ok_or_else(|| anyhow::anyhow!("Could not build an embed source for {}", url))?;
                println!("{}", src);
            }
            Command::Api { url, youtube_key } => {
                let config = Config::load(self.config.as_deref())?;
                let mut credentials = config.credentials.clone();
                if let Some(key) = youtube_key {
                    credentials.insert(Provider::YouTube, key.as_str());
                }

                let client = VideoClient::new(config)?;
                let data = client.call_api(url, &credentials).await?;
                println!("{}", serde_json::to_string_pretty(&data)?);
            }
            Command::Thumbnail { url } => {
                let config = Config::load(self.config.as_deref())?;
                let client = VideoClient::new(config)?;
                println!("{}", client.get_image_url(url).await?);
            }
        }

        Ok(())
    }
}
