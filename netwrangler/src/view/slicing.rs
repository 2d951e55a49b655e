//! Network slicing view: one card per configured slice.

use std::hash::{DefaultHasher, Hash, Hasher};

use iced::widget::{Column, column, container, keyed_column, row, scrollable, text};
use iced::{Alignment, Element, Length, Theme};

use netwrangler_common::{FetchError, SliceId, SliceRecord};

use crate::message::Message;
use crate::view::components::StatusChip;
use crate::view::formatting::{PLACEHOLDER, reading_display};
use crate::view::theme;

/// Page title of the slicing view.
pub const TITLE: &str = "Network Slicing";

/// Slicing view state.
#[derive(Debug, Clone, Default)]
pub struct SlicingState {
    /// Latest slice list, in server order.
    pub slices: Vec<SliceRecord>,
    /// Whether any cycle has succeeded yet.
    pub loaded: bool,
    /// Failure of the most recent cycle, cleared by the next success.
    pub last_error: Option<FetchError>,
}

impl SlicingState {
    /// Apply the outcome of one fetch cycle.
    pub fn apply(&mut self, result: Result<Vec<SliceRecord>, FetchError>) {
        match result {
            Ok(slices) => {
                self.slices = slices;
                self.loaded = true;
                self.last_error = None;
            }
            Err(error) => {
                self.last_error = Some(error);
            }
        }
    }
}

/// Display strings for one slice card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceCard {
    /// Stable widget key derived from the slice id.
    pub key: u64,
    pub title: String,
    pub throughput: String,
    pub latency: String,
    pub status: Option<String>,
}

impl SliceCard {
    /// Build the card for a slice record.
    pub fn from_record(slice: &SliceRecord) -> Self {
        Self {
            key: slice_key(&slice.id),
            title: if slice.kind.is_empty() {
                format!("{} Slice", PLACEHOLDER)
            } else {
                format!("{} Slice", slice.kind)
            },
            throughput: format!("Throughput: {} Mbps", reading_display(slice.throughput.as_ref())),
            latency: format!("Latency: {} ms", reading_display(slice.latency.as_ref())),
            status: slice.status.clone(),
        }
    }
}

/// Widget key for a slice, stable for a given id.
pub fn slice_key(id: &SliceId) -> u64 {
    let mut hasher = DefaultHasher::new();
    id.hash(&mut hasher);
    hasher.finish()
}

/// Cards for a slice list, one per record in the same order.
pub fn slice_cards(slices: &[SliceRecord]) -> Vec<SliceCard> {
    slices.iter().map(SliceCard::from_record).collect()
}

/// Render the slicing view.
pub fn slicing_view(state: &SlicingState) -> Element<'_, Message> {
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

    let body: Element<'_, Message> = if state.slices.is_empty() {
        let message = if state.loaded {
            "No slices configured"
        } else {
            "Waiting for slice data..."
        };
        container(text(message).size(16))
            .width(Length::Fill)
            .center_x(Length::Fill)
            .padding(40)
            .into()
    } else {
        let cards = slice_cards(&state.slices)
            .into_iter()
            .map(|card| (card.key, render_slice_card(card)));

        scrollable(keyed_column(cards).spacing(12))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    };

    column![header, body].spacing(16).padding(20).into()
}

fn render_slice_card<'a>(card: SliceCard) -> Element<'a, Message> {
    let mut title_row = row![text(card.title).size(18)]
        .spacing(10)
        .align_y(Alignment::Center);
    if let Some(status) = card.status {
        title_row = title_row.push(StatusChip::for_status(&status).view());
    }

    let content = column![
        title_row,
        text(card.throughput).size(14),
        text(card.latency).size(14),
    ]
    .spacing(6);

    container(content)
        .padding(16)
        .width(Length::Fill)
        .style(theme::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_card_per_record() {
        let slices: Vec<SliceRecord> = (0..7)
            .map(|i| SliceRecord::new(i as i64, "eMBB").with_readings(100u64 + i, 5u64))
            .collect();

        let cards = slice_cards(&slices);

        assert_eq!(cards.len(), 7);
        assert_eq!(cards[3].throughput, "Throughput: 103 Mbps");
    }

    #[test]
    fn test_card_text_verbatim() {
        let slice = SliceRecord::new(1, "eMBB").with_readings(120u64, 8u64);
        let card = SliceCard::from_record(&slice);

        assert_eq!(card.title, "eMBB Slice");
        assert_eq!(card.throughput, "Throughput: 120 Mbps");
        assert_eq!(card.latency, "Latency: 8 ms");
        assert_eq!(card.status, None);
    }

    #[test]
    fn test_card_missing_readings() {
        let slice = SliceRecord::new("urllc-1", "URLLC").with_status("active");
        let card = SliceCard::from_record(&slice);

        assert_eq!(card.throughput, "Throughput: -- Mbps");
        assert_eq!(card.latency, "Latency: -- ms");
        assert_eq!(card.status.as_deref(), Some("active"));
    }

    #[test]
    fn test_card_odd_record() {
        let list: netwrangler_common::SliceList = serde_json::from_str(
            r#"{"slices":[{"id":3.5,"latency":{"p50":1}}]}"#,
        )
        .unwrap();
        let card = SliceCard::from_record(&list.slices[0]);

        assert_eq!(card.title, "-- Slice");
        assert_eq!(card.throughput, "Throughput: -- Mbps");
        assert_eq!(card.latency, r#"Latency: {"p50":1} ms"#);
    }

    #[test]
    fn test_keys_follow_ids() {
        let a = SliceRecord::new("embb-1", "eMBB");
        let b = SliceRecord::new("embb-1", "eMBB").with_readings(1u64, 1u64);
        let c = SliceRecord::new("embb-2", "eMBB");

        assert_eq!(slice_key(&a.id), slice_key(&b.id));
        assert_ne!(slice_key(&a.id), slice_key(&c.id));
    }

    #[test]
    fn test_cards_idempotent() {
        let slices = vec![
            SliceRecord::new(1, "eMBB").with_readings(120u64, 8u64),
            SliceRecord::new(2, "URLLC").with_readings(40u64, 1u64),
        ];
        assert_eq!(slice_cards(&slices), slice_cards(&slices));
    }

    #[test]
    fn test_apply_failure_keeps_slices() {
        let mut state = SlicingState::default();
        state.apply(Ok(vec![SliceRecord::new(1, "eMBB")]));
        state.apply(Err(FetchError::Transport {
            url: "http://localhost:8000/api/v1/slicing/slices".to_string(),
            reason: "connection refused".to_string(),
        }));

        assert_eq!(state.slices.len(), 1);
        assert!(state.loaded);
        assert!(state.last_error.is_some());
    }
}
