//! Rounded label chip for statuses and counts.

use iced::widget::{container, text};
use iced::{Element, Theme};

use crate::view::theme;

/// Color class of a chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipTone {
    /// Active/healthy - green.
    Healthy,
    /// Degraded/attention - amber.
    Warning,
    /// Down/failed - red.
    Critical,
    /// Unknown/neutral - gray.
    Neutral,
}

impl ChipTone {
    /// Classify a slice lifecycle status.
    pub fn from_status(status: &str) -> Self {
        match status.to_ascii_lowercase().as_str() {
            "active" | "up" | "running" => ChipTone::Healthy,
            "degraded" | "provisioning" | "pending" => ChipTone::Warning,
            "inactive" | "down" | "failed" | "error" => ChipTone::Critical,
            _ => ChipTone::Neutral,
        }
    }

    fn color(&self, theme: &Theme) -> iced::Color {
        let colors = theme::colors(theme);
        match self {
            ChipTone::Healthy => colors.status_healthy(),
            ChipTone::Warning => colors.status_warning(),
            ChipTone::Critical => colors.status_error(),
            ChipTone::Neutral => colors.status_unknown(),
        }
    }
}

/// A small outlined chip with a text label.
pub struct StatusChip {
    label: String,
    tone: ChipTone,
}

impl StatusChip {
    /// Create a chip with an explicit tone.
    pub fn new(label: impl Into<String>, tone: ChipTone) -> Self {
        Self {
            label: label.into(),
            tone,
        }
    }

    /// Create a chip for a slice status, toned by its meaning.
    pub fn for_status(status: &str) -> Self {
        Self::new(status, ChipTone::from_status(status))
    }

    /// Render the chip as an Iced element.
    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let tone = self.tone;

        container(
            text(self.label)
                .size(11)
                .style(move |t: &Theme| text::Style {
                    color: Some(tone.color(t)),
                }),
        )
        .padding([2, 8])
        .style(move |t: &Theme| container::Style {
            border: iced::Border {
                color: tone.color(t),
                width: 1.0,
                radius: 10.0.into(),
            },
            ..Default::default()
        })
        .into()
    }
}
