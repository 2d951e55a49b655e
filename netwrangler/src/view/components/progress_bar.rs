//! Horizontal bar for scores such as network health.

use iced::widget::{container, row, text};
use iced::{Element, Length, Theme};

use crate::view::theme;

/// Style configuration for a progress bar.
#[derive(Debug, Clone, Copy)]
struct ProgressBarStyle {
    /// At or below this ratio the bar turns amber (0.0 - 1.0).
    warning_threshold: f64,
    /// At or below this ratio the bar turns red (0.0 - 1.0).
    critical_threshold: f64,
    height: f32,
}

impl Default for ProgressBarStyle {
    fn default() -> Self {
        Self {
            warning_threshold: 0.90,
            critical_threshold: 0.75,
            height: 8.0,
        }
    }
}

/// A bar filled in proportion to `value / max`, where higher is better.
pub struct ProgressBar {
    value: f64,
    max: f64,
    style: ProgressBarStyle,
}

impl ProgressBar {
    /// Create a new progress bar.
    pub fn new(value: f64, max: f64) -> Self {
        Self {
            value: value.max(0.0),
            max: max.max(0.0),
            style: ProgressBarStyle::default(),
        }
    }

    /// Filled fraction, clamped to 0.0 - 1.0.
    pub fn ratio(&self) -> f64 {
        if self.max > 0.0 {
            (self.value / self.max).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Render the progress bar as an Iced element.
    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let ratio = self.ratio();
        let style = self.style;

        let filled_portion = (ratio * 100.0).round() as u16;
        let empty_portion = 100 - filled_portion;

        let filled = container(text(""))
            .width(Length::FillPortion(filled_portion))
            .height(Length::Fixed(style.height))
            .style(move |t: &Theme| {
                let colors = theme::colors(t);
                let color = if ratio <= style.critical_threshold {
                    colors.status_error()
                } else if ratio <= style.warning_threshold {
                    colors.status_warning()
                } else {
                    colors.status_healthy()
                };
                container::Style {
                    background: Some(iced::Background::Color(color)),
                    ..Default::default()
                }
            });

        let empty = container(text(""))
            .width(Length::FillPortion(empty_portion))
            .height(Length::Fixed(style.height))
            .style(|t: &Theme| container::Style {
                background: Some(iced::Background::Color(theme::colors(t).track_background())),
                ..Default::default()
            });

        container(row![filled, empty].width(Length::Fill))
            .width(Length::Fill)
            .style(|t: &Theme| container::Style {
                border: iced::Border {
                    color: theme::colors(t).border(),
                    width: 1.0,
                    radius: 4.0.into(),
                },
                ..Default::default()
            })
            .into()
    }
}
