//! The diagnosis session state machine
//!
//! ```text
//! Idle ──select──▶ ImageSelected ──diagnose──▶ Loading ──ok──▶ Result
//!                     ▲   │ ▲                    │               │
//!                     │   └─┘ select             └──fail──┐      │
//!                     └───────────────────────────────────┴──────┘ select
//! ```
//!
//! While `Loading`, selecting, clearing and diagnosing are all rejected.
//! Changing the language never changes the phase; it only raises a notice.

use thiserror::Error;

use crate::capture::{EncodedImage, SelectedImage};
use crate::diagnosis::{Diagnosis, Language};
use crate::error::DiagnoseError;

/// Coarse UI phase, for rendering decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    ImageSelected,
    Loading,
    Result,
}

/// Why a requested transition was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("a diagnosis is already in progress")]
    Busy,
    #[error("no image selected")]
    NoImage,
}

/// Which side of the pipeline broke, shown as a banner after a failed attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The provider could not be reached or refused the request
    Inference,
    /// The provider answered with something that is not a diagnosis
    Parse,
}

impl From<&DiagnoseError> for FailureKind {
    fn from(error: &DiagnoseError) -> Self {
        match error {
            DiagnoseError::Inference(_) => FailureKind::Inference,
            DiagnoseError::Parse(_) => FailureKind::Parse,
        }
    }
}

#[derive(Debug, Clone)]
enum Stage {
    Idle,
    ImageSelected(SelectedImage),
    Loading(SelectedImage),
    Result(SelectedImage, Diagnosis),
}

/// Everything the window shows, minus layout
#[derive(Debug, Clone)]
pub struct Session {
    stage: Stage,
    language: Language,
    /// Language-change notice waiting to be acknowledged
    notice: Option<Language>,
    /// Outcome of the last failed attempt, cleared by the next action
    failure: Option<FailureKind>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl Session {
    pub fn new(language: Language) -> Self {
        Self {
            stage: Stage::Idle,
            language,
            notice: None,
            failure: None,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.stage {
            Stage::Idle => Phase::Idle,
            Stage::ImageSelected(_) => Phase::ImageSelected,
            Stage::Loading(_) => Phase::Loading,
            Stage::Result(..) => Phase::Result,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn image(&self) -> Option<&SelectedImage> {
        match &self.stage {
            Stage::Idle => None,
            Stage::ImageSelected(image) | Stage::Loading(image) | Stage::Result(image, _) => {
                Some(image)
            }
        }
    }

    pub fn diagnosis(&self) -> Option<&Diagnosis> {
        match &self.stage {
            Stage::Result(_, diagnosis) => Some(diagnosis),
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<Language> {
        self.notice
    }

    pub fn failure(&self) -> Option<FailureKind> {
        self.failure
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.stage, Stage::Loading(_))
    }

    pub fn can_diagnose(&self) -> bool {
        matches!(self.stage, Stage::ImageSelected(_) | Stage::Result(..))
    }

    pub fn can_replace_image(&self) -> bool {
        !self.is_busy()
    }

    /// Use a new photo. Any previous diagnosis is discarded.
    pub fn select_image(&mut self, image: SelectedImage) -> Result<(), TransitionError> {
        if self.is_busy() {
            return Err(TransitionError::Busy);
        }

        log::debug!("Session: image selected ({})", image.file_name());
        self.stage = Stage::ImageSelected(image);
        self.failure = None;
        Ok(())
    }

    /// Drop the current photo and any diagnosis
    pub fn clear_image(&mut self) -> Result<(), TransitionError> {
        if self.is_busy() {
            return Err(TransitionError::Busy);
        }

        self.stage = Stage::Idle;
        self.failure = None;
        Ok(())
    }

    /// Enter `Loading`. Returns what the request needs: the encoded photo
    /// and the language at the moment of dispatch.
    pub fn begin_diagnosis(&mut self) -> Result<(EncodedImage, Language), TransitionError> {
        let image = match std::mem::replace(&mut self.stage, Stage::Idle) {
            Stage::ImageSelected(image) | Stage::Result(image, _) => image,
            Stage::Loading(image) => {
                self.stage = Stage::Loading(image);
                return Err(TransitionError::Busy);
            }
            Stage::Idle => return Err(TransitionError::NoImage),
        };

        let encoded = image.encoded.clone();
        self.stage = Stage::Loading(image);
        self.failure = None;
        Ok((encoded, self.language))
    }

    /// Leave `Loading` with the outcome of the request.
    ///
    /// Returns `false` when no request was in flight (nothing to finish).
    pub fn finish_diagnosis(&mut self, outcome: Result<Diagnosis, FailureKind>) -> bool {
        let image = match std::mem::replace(&mut self.stage, Stage::Idle) {
            Stage::Loading(image) => image,
            other => {
                self.stage = other;
                log::warn!("Session: ignoring a diagnosis result outside of Loading");
                return false;
            }
        };

        self.stage = match outcome {
            Ok(diagnosis) => Stage::Result(image, diagnosis),
            Err(kind) => {
                self.failure = Some(kind);
                Stage::ImageSelected(image)
            }
        };
        true
    }

    /// Switch the UI language. A ready result is kept as-is and a notice
    /// tells the user to run the diagnosis again. Returns `false` when the
    /// language did not change.
    pub fn set_language(&mut self, language: Language) -> bool {
        if language == self.language {
            return false;
        }

        self.language = language;
        self.notice = Some(language);
        true
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
