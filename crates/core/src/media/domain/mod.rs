pub mod audio_reader;
pub mod audio_track;
pub mod media_probe;
