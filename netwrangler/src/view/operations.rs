//! Operations center view: network health, anomalies and slice performance.

use std::collections::VecDeque;

use iced::widget::{Column, column, container, row, rule, scrollable, text};
use iced::{Alignment, Element, Length, Theme};
use serde_json::Value;

use netwrangler_common::{Anomaly, FetchError, HEALTH_SCORE, MetricsSnapshot, OperationsSnapshot};

use crate::message::Message;
use crate::view::components::{ChipTone, ProgressBar, Sparkline, StatusChip};
use crate::view::formatting::{PLACEHOLDER, format_value, health_display, metric_label};
use crate::view::theme;

/// Page title of the operations center.
pub const TITLE: &str = "5G Network Operations Center";

/// Operations center view state.
#[derive(Debug, Clone)]
pub struct OperationsState {
    /// Latest performance metrics.
    pub metrics: MetricsSnapshot,
    /// Latest slice performance body, as received.
    pub slice_performance: Value,
    /// Latest anomaly list.
    pub anomalies: Vec<Anomaly>,
    /// Recent health scores, oldest first.
    pub health_history: VecDeque<f64>,
    /// Maximum number of samples kept in `health_history`.
    pub history_len: usize,
    /// Failure of the most recent cycle, cleared by the next success.
    pub last_error: Option<FetchError>,
}

impl Default for OperationsState {
    fn default() -> Self {
        Self::new(60)
    }
}

impl OperationsState {
    /// Create an empty state keeping `history_len` health samples.
    pub fn new(history_len: usize) -> Self {
        Self {
            metrics: MetricsSnapshot::default(),
            slice_performance: Value::Null,
            anomalies: Vec::new(),
            health_history: VecDeque::with_capacity(history_len),
            history_len,
            last_error: None,
        }
    }

    /// Apply the outcome of one fetch cycle.
    ///
    /// A snapshot replaces all three slots at once. A failure only records
    /// the error; the previous data stays on screen.
    pub fn apply(&mut self, result: Result<OperationsSnapshot, FetchError>) {
        match result {
            Ok(snapshot) => {
                if let Some(score) = snapshot.metrics.health_score() {
                    self.record_health(score);
                }
                self.metrics = snapshot.metrics;
                self.slice_performance = snapshot.slice_performance;
                self.anomalies = snapshot.anomalies;
                self.last_error = None;
            }
            Err(error) => {
                self.last_error = Some(error);
            }
        }
    }

    fn record_health(&mut self, score: f64) {
        if self.history_len == 0 {
            return;
        }
        while self.health_history.len() >= self.history_len {
            self.health_history.pop_front();
        }
        self.health_history.push_back(score);
    }

    /// The health score as displayed: `"97.5%"` or `"--"`.
    pub fn health_display(&self) -> String {
        health_display(self.metrics.health_score())
    }

    /// Number of entries in the slice performance body, if it has any shape.
    pub fn slices_reporting(&self) -> Option<usize> {
        match &self.slice_performance {
            Value::Object(map) => Some(map.len()),
            Value::Array(items) => Some(items.len()),
            _ => None,
        }
    }

    /// Numeric metrics other than the health score, in name order.
    pub fn key_metrics(&self) -> Vec<(String, String)> {
        self.metrics
            .numeric()
            .filter(|(name, _)| *name != HEALTH_SCORE)
            .map(|(name, value)| (metric_label(name), format_value(value)))
            .collect()
    }
}

/// Render the operations center.
pub fn operations_view(state: &OperationsState) -> Element<'_, Message> {
    let header = render_header(state);

    let cards = row![
        render_health_card(state),
        render_anomaly_card(state),
        render_slice_performance_card(state),
    ]
    .spacing(16)
    .width(Length::Fill);

    let content = column![header, rule::horizontal(1), cards, render_key_metrics(state)]
        .spacing(16)
        .padding(20);

    scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn render_header(state: &OperationsState) -> Element<'_, Message> {
    let mut header = Column::new().push(text(TITLE).size(26)).spacing(5);

    if let Some(error) = &state.last_error {
        header = header.push(
            text(format!("Error: {}", error))
                .size(12)
                .style(|t: &Theme| text::Style {
                    color: Some(theme::colors(t).status_error()),
                }),
        );
    }

    header.into()
}

fn card<'a>(title: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    let title = text(title).size(16).style(|t: &Theme| text::Style {
        color: Some(theme::colors(t).text_muted()),
    });

    container(column![title, body].spacing(10))
        .padding(16)
        .width(Length::FillPortion(1))
        .style(theme::card)
        .into()
}

fn render_health_card(state: &OperationsState) -> Element<'_, Message> {
    let score = text(state.health_display())
        .size(40)
        .style(|t: &Theme| text::Style {
            color: Some(theme::colors(t).primary()),
        });

    let mut body = Column::new().push(score).spacing(8);

    if let Some(value) = state.metrics.health_score() {
        body = body.push(ProgressBar::new(value, 100.0).view());
    }

    if state.health_history.len() > 1 {
        body = body.push(
            Sparkline::new(state.health_history.iter().copied())
                .with_range(0.0, 100.0)
                .with_size(200.0, 36.0)
                .view(),
        );
    }

    card("Network Health", body.into())
}

fn render_anomaly_card(state: &OperationsState) -> Element<'_, Message> {
    let count = state.anomalies.len();
    let chip = if count == 0 {
        StatusChip::new("No anomalies", ChipTone::Healthy)
    } else {
        StatusChip::new(format!("{} active", count), ChipTone::Warning)
    };

    let body = row![text(count.to_string()).size(40), chip.view()]
        .spacing(12)
        .align_y(Alignment::Center);

    card("Anomalies", body.into())
}

fn render_slice_performance_card(state: &OperationsState) -> Element<'_, Message> {
    let body = match state.slices_reporting() {
        Some(n) => text(format!("{} slices reporting", n)).size(14),
        None => text(PLACEHOLDER).size(14),
    };

    card("Slice Performance", body.into())
}

fn render_key_metrics(state: &OperationsState) -> Element<'_, Message> {
    let metrics = state.key_metrics();
    if metrics.is_empty() {
        return column![].into();
    }

    let mut list = Column::new().push(text("Key Metrics").size(16)).spacing(4);
    for (name, value) in metrics {
        list = list.push(text(format!("{}: {}", name, value)).size(13));
    }

    container(list)
        .padding(16)
        .width(Length::Fill)
        .style(theme::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot(health: f64) -> OperationsSnapshot {
        OperationsSnapshot {
            metrics: MetricsSnapshot::new().with_metric("health_score", health),
            slice_performance: json!({"embb-1": {}}),
            anomalies: vec![json!({"cell": "A1"})],
        }
    }

    #[test]
    fn test_apply_success_replaces_all_slots() {
        let mut state = OperationsState::default();
        state.apply(Ok(snapshot(90.0)));

        let replacement = OperationsSnapshot {
            metrics: MetricsSnapshot::new().with_metric("active_cells", 10),
            slice_performance: json!([]),
            anomalies: vec![],
        };
        state.apply(Ok(replacement.clone()));

        assert_eq!(state.metrics, replacement.metrics);
        assert_eq!(state.metrics.health_score(), None);
        assert_eq!(state.slice_performance, json!([]));
        assert!(state.anomalies.is_empty());
        assert!(state.last_error.is_none());
    }

    #[test]
    fn test_apply_failure_keeps_previous_snapshot() {
        let mut state = OperationsState::default();
        state.apply(Ok(snapshot(92.5)));
        let before = (
            state.metrics.clone(),
            state.slice_performance.clone(),
            state.anomalies.clone(),
        );

        let error = FetchError::Status {
            url: "http://localhost:8000/api/v1/analytics/anomalies".to_string(),
            status: 502,
        };
        state.apply(Err(error.clone()));

        assert_eq!(state.metrics, before.0);
        assert_eq!(state.slice_performance, before.1);
        assert_eq!(state.anomalies, before.2);
        assert_eq!(state.last_error, Some(error));
        assert_eq!(state.health_display(), "92.5%");
    }

    #[test]
    fn test_success_clears_error() {
        let mut state = OperationsState::default();
        state.apply(Err(FetchError::Timeout {
            url: "http://localhost:8000/api/v1/performance/metrics".to_string(),
        }));
        assert!(state.last_error.is_some());

        state.apply(Ok(snapshot(99.0)));
        assert!(state.last_error.is_none());
    }

    #[test]
    fn test_health_display_placeholder() {
        let state = OperationsState::default();
        assert_eq!(state.health_display(), "--");
    }

    #[test]
    fn test_health_history_bounded() {
        let mut state = OperationsState::new(3);
        for score in [90.0, 91.0, 92.0, 93.0, 94.0] {
            state.apply(Ok(snapshot(score)));
        }
        assert_eq!(
            state.health_history.iter().copied().collect::<Vec<_>>(),
            vec![92.0, 93.0, 94.0]
        );
    }

    #[test]
    fn test_key_metrics_skip_health() {
        let mut state = OperationsState::default();
        state.apply(Ok(OperationsSnapshot {
            metrics: MetricsSnapshot::new()
                .with_metric("health_score", 97.0)
                .with_metric("connected_ues", 48_210)
                .with_metric("region", "north"),
            ..OperationsSnapshot::default()
        }));

        assert_eq!(
            state.key_metrics(),
            vec![("Connected ues".to_string(), "48.2K".to_string())]
        );
    }

    #[test]
    fn test_slices_reporting() {
        let mut state = OperationsState::default();
        assert_eq!(state.slices_reporting(), None);

        state.apply(Ok(snapshot(95.0)));
        assert_eq!(state.slices_reporting(), Some(1));
    }
}
