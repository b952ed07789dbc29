pub mod media;
pub mod pipeline;
pub mod playback;
pub mod shared;
pub mod transcript;
