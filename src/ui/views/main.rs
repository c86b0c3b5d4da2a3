use std::{collections::HashMap, sync::Arc};

use crate::ui::{
    components::{
        footer::InfoFooter,
        popover::{get_popover_area, Popover},
    },
    store::{
        action::Action,
        state::{State, ViewID},
        Store,
    },
};
use ratatui::{
    crossterm::event::{Event as CrossTermEvent, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, BorderType, Padding, Paragraph, Widget, WidgetRef},
};

use super::{
    admin::AdminView,
    home::HomeView,
    interview::InterviewView,
    login::LoginView,
    traits::{CustomWidget, CustomWidgetContext, CustomWidgetRef, EventHandler, View},
};

const DEFAULT_PADDING: Padding = Padding::horizontal(2);

/// Root view: renders the chrome (logo, active screen, footer legend),
/// delegates the middle area to the active screen view, and layers modal
/// popovers (error, paywall prompt, completion notice) on top.
pub struct MainView {
    store: Arc<Store>,
    sub_views: HashMap<ViewID, Box<dyn View>>,
}

impl MainView {
    pub fn new(store: Arc<Store>) -> Self {
        let mut sub_views: HashMap<ViewID, Box<dyn View>> = HashMap::new();

        let login = Box::new(LoginView::new());
        let home = Box::new(HomeView::new(Arc::clone(&store)));
        let interview = Box::new(InterviewView::new(Arc::clone(&store)));
        let admin = Box::new(AdminView::new(Arc::clone(&store)));

        sub_views.insert(login.id(), login);
        sub_views.insert(home.id(), home);
        sub_views.insert(interview.id(), interview);
        sub_views.insert(admin.id(), admin);

        Self { store, sub_views }
    }

    fn render_buffer_bg(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, state: &State) {
        let block = Block::new()
            .style(Style::new().bg(state.colors.buffer_bg))
            .padding(DEFAULT_PADDING);
        block.render(area, buf);
    }

    fn render_top(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext) {
        let sections = Layout::horizontal([
            Constraint::Percentage(20),
            Constraint::Percentage(100),
            Constraint::Percentage(20),
        ])
        .split(area);

        let logo =
            Paragraph::new("\ncoachterm").style(Style::new().fg(ctx.state.colors.border_color));
        let logo_block: Block<'_> = Block::bordered()
            .border_style(Style::new().fg(ctx.state.colors.border_color))
            .border_type(BorderType::Double)
            .padding(DEFAULT_PADDING);
        let logo_inner_area = logo_block.inner(sections[0]);

        logo_block.render(sections[0], buf);
        logo.render_ref(logo_inner_area, buf);

        if !ctx.state.email.is_empty() {
            let who = Paragraph::new(format!("\n{}", ctx.state.email))
                .style(Style::new().fg(ctx.state.colors.text))
                .centered();
            let who_block = Block::default().padding(Padding::uniform(1));
            let who_inner_area = who_block.inner(sections[1]);
            who_block.render(sections[1], buf);
            who.render_ref(who_inner_area, buf);
        }

        let current_view = Paragraph::new(format!("\n{}", ctx.state.view_id))
            .style(Style::new().fg(ctx.state.colors.border_color));
        let current_view_block = Block::bordered()
            .border_style(Style::new().fg(ctx.state.colors.border_color))
            .border_type(BorderType::Double)
            .padding(DEFAULT_PADDING);
        let current_view_inner_area = current_view_block.inner(sections[2]);

        current_view_block.render(sections[2], buf);
        current_view.render_ref(current_view_inner_area, buf);
    }

    fn render_middle_view(
        &self,
        view: &dyn View,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let block: Block<'_> = Block::bordered()
            .border_style(Style::new().fg(ctx.state.colors.border_color))
            .border_type(BorderType::Plain)
            .padding(DEFAULT_PADDING);
        let inner_area = block.inner(area);
        block.render(area, buf);
        view.render_ref(inner_area, buf, ctx);
    }

    fn render_footer(
        &self,
        legend: &str,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let mut info = String::from("(q) quit");

        if !legend.is_empty() {
            info = format!("{info} | {legend}");
        }

        let footer = InfoFooter::new(info);
        footer.render(area, buf, ctx);
    }

    // popovers layer over the active view; error wins over the paywall
    // prompt which wins over notices
    fn render_popovers(&self, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext) {
        let area = get_popover_area(ctx.app_area, 50, 40);

        if let Some(err) = ctx.state.error.as_ref() {
            let popover = Popover::new(
                "Error".to_string(),
                err.clone(),
                "(enter) dismiss".to_string(),
                ctx.state.colors.error,
            );
            popover.render(area, buf, ctx);
        } else if ctx.state.show_paywall {
            let popover = Popover::new(
                "Upgrade Required".to_string(),
                "The Pro model requires a subscription.".to_string(),
                "(enter) buy pro $9.99 | (esc) cancel".to_string(),
                ctx.state.colors.border_color,
            );
            popover.render(area, buf, ctx);
        } else if let Some(notice) = ctx.state.notice.as_ref() {
            let popover = Popover::new(
                "Done".to_string(),
                notice.clone(),
                "(enter) dismiss".to_string(),
                ctx.state.colors.accent,
            );
            popover.render(area, buf, ctx);
        }
    }

    fn process_popover_event(&self, evt: &CrossTermEvent, ctx: &CustomWidgetContext) -> bool {
        if let CrossTermEvent::Key(key) = evt {
            if key.kind == KeyEventKind::Press {
                if ctx.state.error.is_some() {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                        self.store.dispatch(Action::SetError(None));
                    }
                } else if ctx.state.show_paywall {
                    match key.code {
                        KeyCode::Enter => self.store.dispatch(Action::ConfirmPurchase),
                        KeyCode::Esc => self.store.dispatch(Action::DismissPaywall),
                        _ => {}
                    }
                } else if ctx.state.notice.is_some()
                    && matches!(key.code, KeyCode::Enter | KeyCode::Esc)
                {
                    self.store.dispatch(Action::SetNotice(None));
                }
            }
        }

        // a visible popover swallows all input
        true
    }
}

impl CustomWidgetRef for MainView {
    fn render_ref(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext) {
        // consists of 3 vertical rectangles (top, middle, bottom)
        let page_areas = Layout::vertical([
            Constraint::Length(5),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

        let view_id = ctx.state.view_id;
        let view = self.sub_views.get(&view_id).unwrap();
        let legend = view.legend(ctx.state);

        // render background for entire display
        self.render_buffer_bg(area, buf, ctx.state);
        self.render_top(page_areas[0], buf, ctx);
        self.render_middle_view(view.as_ref(), page_areas[1], buf, ctx);
        self.render_footer(legend, page_areas[2], buf, ctx);

        // important to render this last so it properly layers on top
        self.render_popovers(buf, ctx);
    }
}

impl EventHandler for MainView {
    fn process_event(&self, evt: &CrossTermEvent, ctx: &CustomWidgetContext) -> bool {
        if ctx.state.error.is_some() || ctx.state.show_paywall || ctx.state.notice.is_some() {
            return self.process_popover_event(evt, ctx);
        }

        let view_id = ctx.state.view_id;
        let view = self.sub_views.get(&view_id).unwrap();
        view.process_event(evt, ctx)
    }
}

#[cfg(test)]
#[path = "./main_tests.rs"]
mod tests;
