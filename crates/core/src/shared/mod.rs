pub mod constants;
pub mod model_resolver;
pub mod time_format;
pub mod whisper_model;
