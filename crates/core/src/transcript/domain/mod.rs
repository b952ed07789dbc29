pub mod caption_mapper;
pub mod segment;
pub mod transcript_store;
pub mod transcription_provider;
