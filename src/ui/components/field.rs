//! Read-only labeled value line.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::ui::views::traits::{CustomWidget, CustomWidgetContext};

/// Displays a label and a non-editable value.
pub struct Field {
    label: String,
    value: String,
}

impl Field {
    pub fn new(label: String, value: String) -> Self {
        Self { label, value }
    }
}

impl CustomWidget for Field {
    fn render(self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext)
    where
        Self: Sized,
    {
        let label = Span::from(format!("{0}: ", self.label));
        let value =
            Span::from(self.value.as_str()).style(Style::default().fg(ctx.state.colors.text));
        let line = Line::from(vec![label, value]);
        line.render(area, buf);
    }
}
