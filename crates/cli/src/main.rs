use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use vidscribe_core::media::infrastructure::ffmpeg_audio_reader::FfmpegAudioReader;
use vidscribe_core::pipeline::transcribe_media_use_case::TranscribeMediaUseCase;
use vidscribe_core::shared::constants::SUBTITLE_EXTENSION;
use vidscribe_core::shared::model_resolver;
use vidscribe_core::shared::whisper_model::WhisperModel;
use vidscribe_core::transcript::domain::caption_mapper::CaptionMapper;
use vidscribe_core::transcript::domain::transcript_store::TranscriptStore;
use vidscribe_core::transcript::infrastructure::srt_file;
use vidscribe_core::transcript::infrastructure::whisper_provider::WhisperProvider;

/// Transcribe a video's audio and print timestamped captions.
#[derive(Parser)]
#[command(name = "vidscribe")]
struct Cli {
    /// Input media file, or an existing .srt subtitle file.
    input: PathBuf,

    /// Write the transcript as a SubRip subtitle file.
    #[arg(long)]
    srt: Option<PathBuf>,

    /// Whisper model size: tiny, base, or small.
    #[arg(long, default_value = "base")]
    model: String,

    /// Spoken language hint passed to the recognizer.
    #[arg(long, default_value = "en")]
    language: String,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let model = validate(&cli)?;

    let mut store = TranscriptStore::new();
    if is_subtitle(&cli.input) {
        store.load(srt_file::parse_srt(&cli.input)?);
    } else {
        transcribe(&cli, model, &mut store)?;
    }

    for line in CaptionMapper::render(store.all(), None) {
        println!("{}", line.display());
    }

    if let Some(path) = &cli.srt {
        srt_file::write_srt(store.all(), path)?;
        log::info!("Subtitles written to {}", path.display());
    }

    Ok(())
}

fn transcribe(
    cli: &Cli,
    model: WhisperModel,
    store: &mut TranscriptStore,
) -> Result<(), Box<dyn std::error::Error>> {
    let model_path = model_resolver::resolve(model, Some(Box::new(download_progress)))?;
    eprintln!();

    let provider = WhisperProvider::new(&model_path, Box::new(FfmpegAudioReader))?
        .with_language(&cli.language);
    let use_case = TranscribeMediaUseCase::new(Box::new(provider));
    use_case.execute(&cli.input, store)?;
    Ok(())
}

fn validate(cli: &Cli) -> Result<WhisperModel, Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    let model: WhisperModel = cli.model.parse()?;
    Ok(model)
}

fn is_subtitle(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(SUBTITLE_EXTENSION))
        .unwrap_or(false)
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading whisper model... {pct}%");
    } else {
        eprint!("\rDownloading whisper model... {downloaded} bytes");
    }
}
