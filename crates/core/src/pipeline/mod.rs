pub mod sync_captions_use_case;
pub mod transcribe_media_use_case;
