pub mod srt_file;
pub mod whisper_provider;
