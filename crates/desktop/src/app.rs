use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossbeam_channel::Receiver;
use iced::widget::{button, column, container, pick_list, row, scrollable, text};
use iced::{Element, Length, Subscription, Task, Theme};

use vidscribe_core::pipeline::sync_captions_use_case::SyncCaptionsUseCase;
use vidscribe_core::playback::domain::caption_sink::CaptionSink;
use vidscribe_core::playback::domain::playback_clock::PlaybackClock;
use vidscribe_core::playback::infrastructure::timer_clock::TimerPlaybackClock;
use vidscribe_core::shared::constants::{CAPTION_POLL_INTERVAL_MS, MEDIA_EXTENSIONS};
use vidscribe_core::shared::time_format::format_elapsed;
use vidscribe_core::shared::whisper_model::WhisperModel;
use vidscribe_core::transcript::domain::caption_mapper::CaptionLine;
use vidscribe_core::transcript::domain::transcript_store::TranscriptStore;

use crate::settings::{Appearance, Settings};
use crate::theme;
use crate::workers::transcribe_worker::{self, TranscribeParams, WorkerMessage};

const MODELS_URL: &str = "https://huggingface.co/ggerganov/whisper.cpp";

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Message {
    SelectVideo,
    VideoSelected(Option<PathBuf>),
    ModelChanged(WhisperModel),
    AppearanceChanged(Appearance),
    PlayPause,
    Restart,
    OpenModelsPage,
    Tick,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

enum Phase {
    Idle,
    Transcribing { download: Option<(u64, u64)> },
    Ready,
    Failed(String),
}

/// Caption sink shared between the sync use case and the view.
struct SharedLines(Arc<Mutex<Vec<CaptionLine>>>);

impl CaptionSink for SharedLines {
    fn present(&mut self, lines: &[CaptionLine]) {
        *self.0.lock().unwrap() = lines.to_vec();
    }
}

pub struct App {
    pub settings: Settings,
    media_path: Option<PathBuf>,
    phase: Phase,
    store: TranscriptStore,
    clock: TimerPlaybackClock,
    sync: SyncCaptionsUseCase,
    lines: Arc<Mutex<Vec<CaptionLine>>>,
    duration_secs: f64,
    worker_rx: Option<Receiver<WorkerMessage>>,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                settings: Settings::load(),
                media_path: None,
                phase: Phase::Idle,
                store: TranscriptStore::new(),
                clock: TimerPlaybackClock::new(),
                sync: SyncCaptionsUseCase::new(Box::new(SharedLines(lines.clone()))),
                lines,
                duration_secs: 0.0,
                worker_rx: None,
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectVideo => {
                return Task::perform(
                    async {
                        rfd::AsyncFileDialog::new()
                            .set_title("Choose Video File")
                            .add_filter("Video Files", MEDIA_EXTENSIONS)
                            .pick_file()
                            .await
                            .map(|h| h.path().to_path_buf())
                    },
                    Message::VideoSelected,
                );
            }
            Message::VideoSelected(Some(path)) => {
                self.store.clear();
                self.lines.lock().unwrap().clear();
                self.clock = TimerPlaybackClock::new();
                self.duration_secs = 0.0;
                self.phase = Phase::Transcribing { download: None };
                self.worker_rx = Some(transcribe_worker::spawn(TranscribeParams {
                    media_path: path.clone(),
                    model: self.settings.model_size(),
                    language: "en".to_string(),
                }));
                self.media_path = Some(path);
            }
            Message::VideoSelected(None) => {}
            Message::ModelChanged(model) => {
                self.settings.model = model.label().to_string();
                self.settings.save();
            }
            Message::AppearanceChanged(appearance) => {
                self.settings.appearance = appearance;
                self.settings.save();
            }
            Message::PlayPause => {
                if self.clock.is_playing() {
                    self.clock.pause();
                } else {
                    self.clock.play();
                }
            }
            Message::Restart => {
                self.clock.seek(0.0);
            }
            Message::OpenModelsPage => {
                let _ = open::that(MODELS_URL);
            }
            Message::Tick => {
                self.drain_worker();
                if matches!(self.phase, Phase::Ready) {
                    self.sync.tick(&self.clock, &self.store);
                }
            }
        }
        Task::none()
    }

    fn drain_worker(&mut self) {
        let Some(rx) = self.worker_rx.take() else {
            return;
        };
        let mut done = false;

        while let Ok(msg) = rx.try_recv() {
            match msg {
                WorkerMessage::DownloadProgress(downloaded, total) => {
                    if let Phase::Transcribing { download } = &mut self.phase {
                        *download = Some((downloaded, total));
                    }
                }
                WorkerMessage::Complete {
                    segments,
                    duration_secs,
                } => {
                    self.store.load(segments);
                    self.duration_secs = duration_secs;
                    self.clock = TimerPlaybackClock::new();
                    self.clock.play();
                    self.phase = Phase::Ready;
                    done = true;
                }
                WorkerMessage::Error(e) => {
                    log::error!("Transcription failed: {e}");
                    self.phase = Phase::Failed(e);
                    done = true;
                }
            }
        }

        if !done {
            self.worker_rx = Some(rx);
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = row![
            button(text("Choose Video").size(13)).on_press(Message::SelectVideo),
            pick_list(
                WhisperModel::ALL,
                Some(self.settings.model_size()),
                Message::ModelChanged,
            )
            .text_size(13),
            pick_list(
                Appearance::ALL,
                Some(self.settings.appearance),
                Message::AppearanceChanged,
            )
            .text_size(13),
        ]
        .spacing(8)
        .align_y(iced::Alignment::Center);

        let content: Element<'_, Message> = match &self.phase {
            Phase::Idle => self.idle_view(),
            Phase::Transcribing { download } => self.transcribing_view(*download),
            Phase::Ready => self.player_view(),
            Phase::Failed(e) => self.error_view(e),
        };

        let footer = container(
            button(text("Models: ggerganov/whisper.cpp").size(11))
                .on_press(Message::OpenModelsPage)
                .style(button::text),
        )
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([4, 0]);

        column![
            container(header).padding(12),
            container(content).padding([0, 12]).height(Length::Fill),
            footer
        ]
        .height(Length::Fill)
        .into()
    }

    fn idle_view(&self) -> Element<'_, Message> {
        container(
            column![
                text("Choose a video to transcribe").size(17),
                text("MP4, AVI, MKV, MOV").size(13),
            ]
            .spacing(6)
            .align_x(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }

    fn transcribing_view(&self, download: Option<(u64, u64)>) -> Element<'_, Message> {
        let status = match download {
            Some((d, t)) if t > 0 => {
                let pct = (d as f64 / t as f64 * 100.0) as u32;
                format!("Downloading whisper model... {pct}%")
            }
            Some((d, _)) => format!("Downloading whisper model... {d} bytes"),
            None => "Transcribing audio...".to_string(),
        };

        container(
            column![text(self.media_name()).size(13), text(status).size(15)]
                .spacing(8)
                .align_x(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }

    fn error_view(&self, message: &str) -> Element<'_, Message> {
        let danger = self.theme().extended_palette().danger.base.color;
        container(
            column![
                text("Transcription failed").size(17),
                text(message.to_string()).size(13).color(danger),
            ]
            .spacing(8)
            .align_x(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }

    fn player_view(&self) -> Element<'_, Message> {
        let play_label = if self.clock.is_playing() {
            "Pause"
        } else {
            "Play"
        };
        let position = self.clock.position();

        let transport = row![
            button(text(play_label).size(13)).on_press(Message::PlayPause),
            button(text("Restart").size(13))
                .on_press(Message::Restart)
                .style(button::secondary),
            text(format!(
                "{} / {}",
                format_elapsed(position),
                format_elapsed(self.duration_secs)
            ))
            .size(13),
            text(self.media_name()).size(13),
        ]
        .spacing(10)
        .align_y(iced::Alignment::Center);

        column![transport, self.caption_list()]
            .spacing(10)
            .height(Length::Fill)
            .into()
    }

    fn caption_list(&self) -> Element<'_, Message> {
        let lines = self.lines.lock().unwrap().clone();
        let rows: Vec<Element<'_, Message>> = lines
            .into_iter()
            .map(|line| {
                let content = row![
                    text(format!("[{}]", line.label)).size(13),
                    text(line.text).size(14),
                ]
                .spacing(10);

                let cell = container(content).padding([3, 8]).width(Length::Fill);
                if line.active {
                    cell.style(|theme: &Theme| {
                        let palette = theme.extended_palette();
                        container::Style {
                            background: Some(iced::Background::Color(palette.primary.weak.color)),
                            text_color: Some(palette.primary.weak.text),
                            ..container::Style::default()
                        }
                    })
                    .into()
                } else {
                    cell.into()
                }
            })
            .collect();

        scrollable(column(rows).spacing(2))
            .height(Length::Fill)
            .into()
    }

    fn media_name(&self) -> String {
        self.media_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    pub fn theme(&self) -> Theme {
        theme::resolve_theme(self.settings.appearance)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        match self.phase {
            Phase::Idle | Phase::Failed(_) => Subscription::none(),
            _ => iced::time::every(Duration::from_millis(CAPTION_POLL_INTERVAL_MS))
                .map(|_| Message::Tick),
        }
    }
}
