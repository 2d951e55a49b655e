//! NetWrangler Iced application.

use iced::widget::column;
use iced::{Element, Subscription, Task, Theme};

use netwrangler_common::DashboardConfig;

use crate::message::{Message, Page};
use crate::subscription::{PollSource, operations_subscription, slices_subscription};
use crate::view::navigation::navigation_bar;
use crate::view::operations::{OperationsState, operations_view};
use crate::view::slicing::{SlicingState, slicing_view};

/// The main NetWrangler application.
pub struct NetWrangler {
    /// Where fetch cycles get their data.
    source: PollSource,
    /// Currently shown page; only this page polls.
    page: Page,
    /// Operations center state.
    operations: OperationsState,
    /// Slicing view state.
    slicing: SlicingState,
}

impl NetWrangler {
    /// Create the application from a loaded configuration.
    pub fn new(config: &DashboardConfig, demo: bool) -> Self {
        Self {
            source: PollSource {
                api: config.api.clone(),
                demo,
            },
            page: Page::default(),
            operations: OperationsState::new(config.history_len),
            slicing: SlicingState::default(),
        }
    }

    /// Boot the application (called by iced::application).
    pub fn boot(config: &DashboardConfig, demo: bool) -> (Self, Task<Message>) {
        (Self::new(config, demo), Task::none())
    }

    /// Get the window title.
    pub fn title(&self) -> String {
        match self.operations.metrics.health_score() {
            Some(_) if self.page == Page::Operations => {
                format!("NetWrangler - health {}", self.operations.health_display())
            }
            _ => format!("NetWrangler - {}", self.page),
        }
    }

    /// Handle incoming messages.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OperationsFetched(result) => {
                if let Err(ref error) = result {
                    tracing::warn!(error = %error, "Operations fetch cycle failed");
                }
                self.operations.apply(result);
            }

            Message::SlicesFetched(result) => {
                if let Err(ref error) = result {
                    tracing::warn!(error = %error, "Slice fetch cycle failed");
                }
                self.slicing.apply(result);
            }

            Message::ShowPage(page) => {
                if page != self.page {
                    tracing::info!(page = %page, "Switching page");
                    self.page = page;
                }
            }
        }

        Task::none()
    }

    /// Poll only the page that is shown.
    pub fn subscription(&self) -> Subscription<Message> {
        match self.page {
            Page::Operations => operations_subscription(self.source.clone()),
            Page::Slicing => slices_subscription(self.source.clone()),
        }
    }

    /// Render the view.
    pub fn view(&self) -> Element<'_, Message> {
        let page = match self.page {
            Page::Operations => operations_view(&self.operations),
            Page::Slicing => slicing_view(&self.slicing),
        };

        column![navigation_bar(self.page, self.source.demo), page].into()
    }

    /// Get the application theme.
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Currently shown page.
    pub fn page(&self) -> Page {
        self.page
    }

    /// Operations center state.
    pub fn operations(&self) -> &OperationsState {
        &self.operations
    }

    /// Slicing view state.
    pub fn slicing(&self) -> &SlicingState {
        &self.slicing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;
    use netwrangler_common::FetchError;

    fn app() -> NetWrangler {
        NetWrangler::new(&DashboardConfig::default(), false)
    }

    #[test]
    fn test_starts_on_operations() {
        let app = app();
        assert_eq!(app.page(), Page::Operations);
        assert_eq!(app.title(), "NetWrangler - Operations Center");
    }

    #[test]
    fn test_fetched_messages_update_state() {
        let mut app = app();

        let _ = app.update(Message::OperationsFetched(Ok(mock::operations())));
        let _ = app.update(Message::SlicesFetched(Ok(mock::slices())));

        assert_eq!(app.operations().health_display(), "97.5%");
        assert_eq!(app.slicing().slices.len(), 3);
        assert_eq!(app.title(), "NetWrangler - health 97.5%");
    }

    #[test]
    fn test_failed_cycle_keeps_state() {
        let mut app = app();
        let _ = app.update(Message::OperationsFetched(Ok(mock::operations())));

        let _ = app.update(Message::OperationsFetched(Err(FetchError::Timeout {
            url: "http://localhost:8000/api/v1/slicing/performance".to_string(),
        })));

        assert_eq!(app.operations().health_display(), "97.5%");
        assert_eq!(app.operations().anomalies.len(), 1);
        assert!(app.operations().last_error.is_some());
    }

    #[test]
    fn test_show_page() {
        let mut app = app();
        let _ = app.update(Message::ShowPage(Page::Slicing));
        assert_eq!(app.page(), Page::Slicing);
        assert_eq!(app.title(), "NetWrangler - Network Slicing");
    }

    #[test]
    fn test_page_state_survives_navigation() {
        let mut app = app();
        let _ = app.update(Message::SlicesFetched(Ok(mock::slices())));
        let _ = app.update(Message::ShowPage(Page::Slicing));
        let _ = app.update(Message::ShowPage(Page::Operations));
        assert_eq!(app.slicing().slices.len(), 3);
    }
}
