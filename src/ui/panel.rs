//! Render-independent model of the diagnosis panel
//!
//! Decides what the right-hand panel shows for a session, without touching
//! any widget. `layout.rs` turns this into iced elements.

use super::strings::{strings, Strings};
use crate::diagnosis::Diagnosis;
use crate::state::{FailureKind, Phase, Session};

/// Color of the health badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Green
    Healthy,
    /// Red
    Unhealthy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthBadge {
    pub label: &'static str,
    pub tone: Tone,
}

/// One disease or care solution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<'a> {
    pub title: &'a str,
    /// Secondary line (disease symptoms); care solutions have none
    pub detail: Option<&'a str>,
    pub body: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    pub heading: &'static str,
    pub entries: Vec<Entry<'a>>,
}

/// A finished diagnosis, labelled in the current UI language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportCard<'a> {
    pub common_name_label: &'static str,
    pub species: &'a str,
    pub latin_name_label: &'static str,
    pub latin_name: &'a str,
    pub badge: HealthBadge,
    pub description: &'a str,
    /// Only present for an unhealthy plant with at least one disease
    pub diseases: Option<Section<'a>>,
    pub care: Option<Section<'a>>,
}

/// What the panel shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelContent<'a> {
    /// No result yet
    Waiting(&'static str),
    /// Request in flight
    Analyzing(&'static str),
    /// Last attempt failed
    Failed(&'static str),
    Report(ReportCard<'a>),
}

impl<'a> PanelContent<'a> {
    pub fn from_session(session: &'a Session) -> Self {
        let text = strings(session.language());

        match session.phase() {
            Phase::Loading => PanelContent::Analyzing(text.analyzing),
            Phase::Result => match session.diagnosis() {
                Some(diagnosis) => PanelContent::Report(ReportCard::new(diagnosis, text)),
                None => PanelContent::Waiting(text.waiting_for_image),
            },
            Phase::Idle | Phase::ImageSelected => match session.failure() {
                Some(FailureKind::Inference) => PanelContent::Failed(text.inference_failed),
                Some(FailureKind::Parse) => PanelContent::Failed(text.parse_failed),
                None => PanelContent::Waiting(text.waiting_for_image),
            },
        }
    }
}

impl<'a> ReportCard<'a> {
    pub fn new(diagnosis: &'a Diagnosis, text: &'static Strings) -> Self {
        let badge = if diagnosis.is_healthy {
            HealthBadge {
                label: text.healthy,
                tone: Tone::Healthy,
            }
        } else {
            HealthBadge {
                label: text.unhealthy,
                tone: Tone::Unhealthy,
            }
        };

        let diseases: Vec<Entry<'a>> = diagnosis
            .visible_diseases()
            .iter()
            .map(|disease| Entry {
                title: &disease.name,
                detail: Some(disease.symptoms.as_str()).filter(|s| !s.is_empty()),
                body: &disease.description,
            })
            .collect();

        let care: Vec<Entry<'a>> = diagnosis
            .care_solutions
            .iter()
            .map(|solution| Entry {
                title: &solution.kind,
                detail: None,
                body: &solution.description,
            })
            .collect();

        let identification = &diagnosis.flower_identification;

        ReportCard {
            common_name_label: text.common_name,
            species: &identification.species,
            latin_name_label: text.latin_name,
            latin_name: &identification.latin_name,
            badge,
            description: &identification.description,
            diseases: section(text.apparent_diseases, diseases),
            care: section(text.care_solutions, care),
        }
    }
}

fn section<'a>(heading: &'static str, entries: Vec<Entry<'a>>) -> Option<Section<'a>> {
    if entries.is_empty() {
        None
    } else {
        Some(Section { heading, entries })
    }
}
