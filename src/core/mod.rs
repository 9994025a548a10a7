pub mod client;
pub mod embed;
pub mod error;
pub mod provider;

pub use client::VideoClient;
pub use embed::embed_src;
pub use error::{Result, VideoError};
pub use provider::{classify, extract_id, video_type_and_id, Provider, VideoRef};
