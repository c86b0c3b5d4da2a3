//! Blocking modal popovers (errors, prompts, notices).

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Clear, Padding, Paragraph, Widget},
};

use crate::ui::views::traits::{CustomWidget, CustomWidgetContext};

/// Calculates a centered popover area within the given parent area.
pub fn get_popover_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

/// Centered modal with a message, a key-hint footer, and a colored double
/// border. Rendered last so it layers over the active view.
pub struct Popover {
    title: String,
    message: String,
    footer: String,
    border_color: Color,
}

impl Popover {
    pub fn new<S: Into<String>>(title: S, message: S, footer: S, border_color: Color) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            footer: footer.into(),
            border_color,
        }
    }
}

impl CustomWidget for Popover {
    fn render(self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext)
    where
        Self: Sized,
    {
        let block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(
                Style::new()
                    .fg(self.border_color)
                    .bg(ctx.state.colors.buffer_bg),
            )
            .padding(Padding::uniform(2))
            .style(Style::default().bg(ctx.state.colors.buffer_bg));

        let inner_area = block.inner(area);

        let [title_area, msg_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Percentage(100),
            Constraint::Length(1),
        ])
        .areas(inner_area);

        let title = Paragraph::new(self.title)
            .style(Style::new().fg(self.border_color))
            .centered();
        let message = Paragraph::new(self.message).wrap(ratatui::widgets::Wrap { trim: true });
        let footer = Paragraph::new(self.footer).centered();

        Clear.render(area, buf);
        block.render(area, buf);
        title.render(title_area, buf);
        message.render(msg_area, buf);
        footer.render(footer_area, buf);
    }
}

#[cfg(test)]
#[path = "./popover_tests.rs"]
mod tests;
