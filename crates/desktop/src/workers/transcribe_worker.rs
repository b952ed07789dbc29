use std::path::PathBuf;
use std::thread;

use crossbeam_channel::{Receiver, Sender};

use vidscribe_core::media::domain::media_probe::MediaProbe;
use vidscribe_core::media::infrastructure::ffmpeg_audio_reader::FfmpegAudioReader;
use vidscribe_core::media::infrastructure::ffmpeg_probe::FfmpegProbe;
use vidscribe_core::shared::model_resolver;
use vidscribe_core::shared::whisper_model::WhisperModel;
use vidscribe_core::transcript::domain::segment::TranscriptSegment;
use vidscribe_core::transcript::domain::transcription_provider::TranscriptionProvider;
use vidscribe_core::transcript::infrastructure::whisper_provider::WhisperProvider;

/// Messages sent from the worker thread to the UI.
#[derive(Debug, Clone)]
pub enum WorkerMessage {
    DownloadProgress(u64, u64),
    Complete {
        segments: Vec<TranscriptSegment>,
        duration_secs: f64,
    },
    Error(String),
}

/// Parameters for a transcription job.
pub struct TranscribeParams {
    pub media_path: PathBuf,
    pub model: WhisperModel,
    pub language: String,
}

/// Spawn a background transcription worker. Returns the channel receiver.
pub fn spawn(params: TranscribeParams) -> Receiver<WorkerMessage> {
    let (tx, rx) = crossbeam_channel::unbounded::<WorkerMessage>();

    thread::spawn(move || match run_transcription(&tx, &params) {
        Ok(msg) => {
            let _ = tx.send(msg);
        }
        Err(e) => {
            let _ = tx.send(WorkerMessage::Error(e.to_string()));
        }
    });

    rx
}

fn run_transcription(
    tx: &Sender<WorkerMessage>,
    params: &TranscribeParams,
) -> Result<WorkerMessage, Box<dyn std::error::Error>> {
    let tx_dl = tx.clone();
    let model_path = model_resolver::resolve(
        params.model,
        Some(Box::new(move |downloaded, total| {
            let _ = tx_dl.send(WorkerMessage::DownloadProgress(downloaded, total));
        })),
    )?;

    let info = FfmpegProbe.probe(&params.media_path)?;
    log::info!(
        "Transcribing {} ({:.1}s)",
        params.media_path.display(),
        info.duration_secs
    );

    let provider = WhisperProvider::new(&model_path, Box::new(FfmpegAudioReader))?
        .with_language(&params.language);
    let segments = provider.transcribe(&params.media_path)?;

    Ok(WorkerMessage::Complete {
        segments,
        duration_secs: info.duration_secs,
    })
}
