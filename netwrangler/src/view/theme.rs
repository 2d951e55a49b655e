//! Theme-aware color palette for NetWrangler.
//!
//! Semantic colors that adapt to the current theme. Use these instead of
//! hardcoded `Color::from_rgb()` values in views.

use iced::{Color, Theme};

/// Semantic colors derived from a theme.
pub struct ThemeColors<'a> {
    theme: &'a Theme,
}

impl<'a> ThemeColors<'a> {
    /// Create a new ThemeColors from a theme reference.
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn palette(&self) -> &iced::theme::palette::Extended {
        self.theme.extended_palette()
    }

    // ========================================================================
    // Text Colors
    // ========================================================================

    /// Muted/secondary text color.
    pub fn text_muted(&self) -> Color {
        self.palette().background.weak.text
    }

    /// Primary accent color.
    pub fn primary(&self) -> Color {
        self.palette().primary.base.color
    }

    // ========================================================================
    // Card/Container Colors
    // ========================================================================

    /// Card background color.
    pub fn card_background(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb(0.12, 0.12, 0.14)
        } else {
            Color::from_rgb(1.0, 1.0, 1.0)
        }
    }

    /// Empty part of a bar.
    pub fn track_background(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb(0.13, 0.13, 0.15)
        } else {
            Color::from_rgb(0.94, 0.94, 0.95)
        }
    }

    /// Default border color.
    pub fn border(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb(0.25, 0.25, 0.3)
        } else {
            Color::from_rgb(0.8, 0.8, 0.82)
        }
    }

    // ========================================================================
    // Status Colors (consistent across themes for recognition)
    // ========================================================================

    /// Healthy status.
    pub fn status_healthy(&self) -> Color {
        Color::from_rgb(0.2, 0.8, 0.3)
    }

    /// Warning status.
    pub fn status_warning(&self) -> Color {
        Color::from_rgb(0.9, 0.7, 0.2)
    }

    /// Error/critical status.
    pub fn status_error(&self) -> Color {
        Color::from_rgb(0.9, 0.2, 0.2)
    }

    /// Unknown/inactive status.
    pub fn status_unknown(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb(0.5, 0.5, 0.5)
        } else {
            Color::from_rgb(0.6, 0.6, 0.6)
        }
    }

    /// Check if the current theme is dark.
    pub fn is_dark(&self) -> bool {
        self.palette().is_dark
    }
}

/// Convenience function to create ThemeColors.
pub fn colors(theme: &Theme) -> ThemeColors<'_> {
    ThemeColors::new(theme)
}

/// Container style for dashboard cards.
pub fn card(theme: &Theme) -> iced::widget::container::Style {
    let colors = colors(theme);
    iced::widget::container::Style {
        background: Some(iced::Background::Color(colors.card_background())),
        border: iced::Border {
            color: colors.border(),
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}
