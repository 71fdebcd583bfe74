//! Window layout
//!
//! Left: the photo area (capture button or preview with actions).
//! Right: language picker, language-change notice, diagnosis panel.

use iced::widget::{
    button, column, container, image, pick_list, row, scrollable, text, Column,
};
use iced::{Alignment, Background, Border, Color, ContentFit, Element, Length, Theme};

use super::panel::{Entry, PanelContent, ReportCard, Section, Tone};
use super::strings::{strings, Strings};
use crate::diagnosis::Language;
use crate::state::Session;
use crate::Message;

const ZINC_300: Color = Color::from_rgb(0.831, 0.831, 0.847);
const ZINC_500: Color = Color::from_rgb(0.443, 0.443, 0.478);
const ZINC_700: Color = Color::from_rgb(0.247, 0.247, 0.275);
const ZINC_800: Color = Color::from_rgb(0.153, 0.153, 0.165);
const GREEN_600: Color = Color::from_rgb(0.086, 0.639, 0.290);
const RED_600: Color = Color::from_rgb(0.863, 0.149, 0.149);

const RADIUS: f32 = 16.0;
const SIDEBAR_WIDTH: f32 = 340.0;

/// Build the whole window
pub fn view(session: &Session) -> Element<'_, Message> {
    let text_table = strings(session.language());

    let sidebar = Column::new()
        .push(language_picker(session))
        .push_maybe(notice_banner(session))
        .push(diagnosis_panel(session))
        .spacing(16)
        .width(Length::Fixed(SIDEBAR_WIDTH));

    let content = row![photo_area(session, text_table), sidebar]
        .spacing(32)
        .padding(24)
        .align_y(Alignment::Start);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

/// Capture button when empty, preview plus actions otherwise
fn photo_area<'a>(session: &'a Session, text_table: &'static Strings) -> Element<'a, Message> {
    let inner: Element<'a, Message> = match session.image() {
        None => button(
            column![
                text("🌼").size(64),
                text(text_table.capture_button).size(16).color(ZINC_300),
            ]
            .spacing(24)
            .align_x(Alignment::Center),
        )
        .style(button::text)
        .on_press(Message::PickImage)
        .into(),

        Some(selected) => {
            let diagnose_label = if session.is_busy() {
                format!("⏳ {}", text_table.diagnosing)
            } else {
                format!("🩺 {}", text_table.diagnose_button)
            };

            let actions = column![
                button(text(diagnose_label).size(20))
                    .padding([8, 16])
                    .on_press_maybe(session.can_diagnose().then_some(Message::Diagnose)),
                row![
                    button(text(text_table.replace_image))
                        .style(button::text)
                        .on_press_maybe(
                            session.can_replace_image().then_some(Message::PickImage)
                        ),
                    button(text(text_table.remove_image))
                        .style(button::text)
                        .on_press_maybe(
                            session.can_replace_image().then_some(Message::ClearImage)
                        ),
                ]
                .spacing(8),
            ]
            .spacing(8)
            .align_x(Alignment::Center);

            column![
                image(selected.preview.clone())
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fill)
                    .height(Length::Fill),
                actions,
            ]
            .spacing(16)
            .align_x(Alignment::Center)
            .into()
        }
    };

    container(inner)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(16)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(|_theme: &Theme| filled(ZINC_700))
        .into()
}

/// Language selector; read-only while a diagnosis is running
fn language_picker(session: &Session) -> Element<'_, Message> {
    if session.is_busy() {
        return container(text(session.language().native_name()).size(16))
            .width(Length::Fill)
            .padding(12)
            .style(|_theme: &Theme| filled(ZINC_800))
            .into();
    }

    pick_list(
        Language::ALL,
        Some(session.language()),
        Message::LanguageSelected,
    )
    .placeholder(strings(session.language()).select_language)
    .width(Length::Fill)
    .padding(12)
    .into()
}

/// One-time notice after a language change
fn notice_banner(session: &Session) -> Option<Element<'_, Message>> {
    let text_table = strings(session.notice()?);

    let banner = container(
        column![
            text(text_table.language_change_message).size(14),
            button(text(text_table.ok)).on_press(Message::DismissNotice),
        ]
        .spacing(8),
    )
    .width(Length::Fill)
    .padding(16)
    .style(|_theme: &Theme| filled(ZINC_800));

    Some(banner.into())
}

/// Right-hand panel: status text or the full report
fn diagnosis_panel(session: &Session) -> Element<'_, Message> {
    let body: Element<'_, Message> = match PanelContent::from_session(session) {
        PanelContent::Waiting(message) | PanelContent::Analyzing(message) => {
            status_text(message, ZINC_300)
        }
        PanelContent::Failed(message) => status_text(message, RED_600),
        PanelContent::Report(card) => report(card),
    };

    container(scrollable(container(body).padding(24).width(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fixed(640.0))
        .style(|_theme: &Theme| filled(ZINC_800))
        .into()
}

fn status_text<'a>(message: &'static str, color: Color) -> Element<'a, Message> {
    container(text(message).size(16).color(color))
        .padding([56, 0])
        .center_x(Length::Fill)
        .into()
}

fn report(card: ReportCard<'_>) -> Element<'_, Message> {
    let (badge_color, badge_icon) = match card.badge.tone {
        Tone::Healthy => (GREEN_600, "✓"),
        Tone::Unhealthy => (RED_600, "✗"),
    };

    let badge = container(text(format!("{} {}", badge_icon, card.badge.label)).size(16))
        .width(Length::Fill)
        .padding([8, 16])
        .center_x(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            text_color: Some(Color::WHITE),
            ..filled(badge_color)
        });

    let mut content: Column<'_, Message> = column![
        text(card.common_name_label.to_uppercase()).size(11).color(ZINC_300),
        text(card.species).size(18),
        text(card.latin_name_label.to_uppercase()).size(11).color(ZINC_300),
        text(card.latin_name).size(18),
        badge,
        text(card.description).size(13).color(ZINC_300),
    ]
    .spacing(8);

    if let Some(diseases) = card.diseases {
        content = content.push(section(diseases, ZINC_300));
    }
    if let Some(care) = card.care {
        content = content.push(section(care, ZINC_300));
    }

    content.into()
}

fn section<'a>(section: Section<'a>, title_color: Color) -> Element<'a, Message> {
    let entries = section
        .entries
        .into_iter()
        .map(|entry| entry_view(entry, title_color));

    column![
        text(section.heading).size(16),
        Column::with_children(entries).spacing(12),
    ]
    .spacing(8)
    .padding([16, 0])
    .into()
}

fn entry_view<'a>(entry: Entry<'a>, title_color: Color) -> Element<'a, Message> {
    let mut column = column![text(entry.title).size(16).color(title_color)];
    if let Some(detail) = entry.detail {
        column = column.push(text(detail).size(13).color(ZINC_300));
    }
    column.push(text(entry.body).size(14).color(ZINC_500)).into()
}

/// Rounded, filled container style
fn filled(color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: RADIUS.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}
