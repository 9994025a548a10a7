pub mod cli;
pub mod config;
pub mod core;
pub mod extractors;
pub mod utils;

pub use crate::config::{Config, Credentials};
pub use crate::core::{
    classify, embed_src, extract_id, video_type_and_id, Provider, VideoClient, VideoError, VideoRef,
};
