pub mod caption_sink;
pub mod playback_clock;
