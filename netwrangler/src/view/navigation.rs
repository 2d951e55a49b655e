//! Page switcher shown above every view.

use iced::widget::{Row, button, container, text};
use iced::{Alignment, Element, Length};

use crate::message::{Message, Page};

/// Render the navigation bar with the current page highlighted.
pub fn navigation_bar<'a>(current: Page, demo: bool) -> Element<'a, Message> {
    let mut bar = Row::new().spacing(8).align_y(Alignment::Center);

    for page in Page::ALL {
        let btn = button(text(page.label()).size(14)).on_press(Message::ShowPage(page));
        let btn = if page == current {
            btn.style(iced::widget::button::primary)
        } else {
            btn.style(iced::widget::button::secondary)
        };
        bar = bar.push(btn);
    }

    if demo {
        bar = bar.push(text("Demo data").size(12));
    }

    container(bar)
        .padding([10, 20])
        .width(Length::Fill)
        .into()
}
