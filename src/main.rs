use iced::{Element, Size, Task, Theme};
use std::path::PathBuf;
use std::sync::Arc;

mod capture;
mod config;
mod diagnosis;
mod error;
mod state;
mod ui;

use capture::SelectedImage;
use config::Config;
use diagnosis::{Diagnosis, DiagnosisClient, Language, OpenAiProvider};
use error::{CaptureError, ConfigError, DiagnoseError};
use state::{FailureKind, Session};

/// Main application state
struct PlantDoc {
    /// Photo, phase, language and result
    session: Session,
    /// Shared with every in-flight request
    client: DiagnosisClient,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the capture / "Replace image" button
    PickImage,
    /// Native picker closed (None = cancelled)
    ImagePicked(Option<PathBuf>),
    /// Background read + encode of the picked file completed
    ImageLoaded(Result<SelectedImage, Arc<CaptureError>>),
    /// User clicked "Remove image"
    ClearImage,
    /// User clicked "Diagnose your plant"
    Diagnose,
    /// Inference request completed
    DiagnosisFinished(Result<Diagnosis, Arc<DiagnoseError>>),
    /// User picked a language in the selector
    LanguageSelected(Language),
    /// User acknowledged the language-change notice
    DismissNotice,
}

impl PlantDoc {
    /// Create a new instance of the application
    fn new(client: DiagnosisClient, language: Language) -> (Self, Task<Message>) {
        log::info!("🌱 Plant Doc ready, UI language: {}", language.code());

        (
            PlantDoc {
                session: Session::new(language),
                client,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickImage => {
                // The button is disabled while loading, but a click can
                // still be queued right before the phase changed
                if !self.session.can_replace_image() {
                    log::debug!("Ignoring image pick while a diagnosis is running");
                    return Task::none();
                }

                Task::perform(capture::pick_image_file(), Message::ImagePicked)
            }
            Message::ImagePicked(Some(path)) => Task::perform(
                async move { capture::load_image(path).await.map_err(Arc::new) },
                Message::ImageLoaded,
            ),
            Message::ImagePicked(None) => {
                log::debug!("Image picker cancelled");
                Task::none()
            }
            Message::ImageLoaded(Ok(image)) => {
                if let Err(e) = self.session.select_image(image) {
                    log::warn!("⚠️  Discarding picked image: {}", e);
                }
                Task::none()
            }
            Message::ImageLoaded(Err(e)) => {
                // Session stays as it was; the user can pick again
                log::error!("❌ Image read failed: {}", e);
                Task::none()
            }
            Message::ClearImage => {
                if let Err(e) = self.session.clear_image() {
                    log::warn!("⚠️  Cannot remove image: {}", e);
                }
                Task::none()
            }
            Message::Diagnose => match self.session.begin_diagnosis() {
                Ok((image, language)) => {
                    let client = self.client.clone();
                    Task::perform(
                        async move { client.diagnose(&image, language).await.map_err(Arc::new) },
                        Message::DiagnosisFinished,
                    )
                }
                Err(e) => {
                    log::warn!("⚠️  Diagnosis not started: {}", e);
                    Task::none()
                }
            },
            Message::DiagnosisFinished(result) => {
                let outcome = result.map_err(|e| FailureKind::from(&*e));
                self.session.finish_diagnosis(outcome);
                Task::none()
            }
            Message::LanguageSelected(language) => {
                if self.session.set_language(language) {
                    log::info!("🌐 Language changed to {}", language.code());
                }
                Task::none()
            }
            Message::DismissNotice => {
                self.session.dismiss_notice();
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        ui::view(&self.session)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Resolve configuration and build the inference client
fn startup() -> Result<(DiagnosisClient, Language), ConfigError> {
    let config = Config::load()?;
    log::info!("⚙️  {:?}", config);

    let language = config.language;
    let provider = OpenAiProvider::new(config)?;

    Ok((DiagnosisClient::new(Arc::new(provider)), language))
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    // Without a credential the app cannot do anything useful
    let (client, language) = match startup() {
        Ok(ready) => ready,
        Err(e) => {
            log::error!("❌ Startup failed: {}", e);
            std::process::exit(2);
        }
    };

    iced::application("Plant Doc", PlantDoc::update, PlantDoc::view)
        .theme(PlantDoc::theme)
        .window_size(Size::new(1200.0, 780.0))
        .centered()
        .run_with(move || PlantDoc::new(client, language))
}
