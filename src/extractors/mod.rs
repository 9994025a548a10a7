pub mod vimeo;
pub mod youtube;

pub use youtube::ThumbnailQuality;
