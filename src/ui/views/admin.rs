use std::{cell::RefCell, sync::Arc};

use itertools::Itertools;
use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::Rect,
};

use crate::{
    events::types::{ApiCommand, Event as AppEvent},
    ui::components::table::{Table, DEFAULT_ITEM_HEIGHT},
    ui::store::{
        action::Action,
        state::{State, ViewID},
        Store,
    },
};

use super::traits::{CustomWidgetContext, CustomWidgetRef, EventHandler, View};

/// Admin panel: per-user session counts. The list is replaced wholesale on
/// every fetch; there is no pagination.
pub struct AdminView {
    store: Arc<Store>,
    table: RefCell<Table>,
}

impl AdminView {
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            store,
            table: RefCell::new(Table::new(
                Vec::new(),
                Some(vec!["EMAIL".to_string(), "SESSIONS".to_string()]),
                vec![40, 12],
                DEFAULT_ITEM_HEIGHT,
            )),
        }
    }

    // the table holds its own copy of the rows, so it has to be refreshed
    // from state before selection moves or a render happens
    fn sync_items(&self, ctx: &CustomWidgetContext) {
        let items = ctx
            .state
            .stats
            .iter()
            .map(|u| vec![u.email.clone(), u.session_count.to_string()])
            .collect_vec();

        self.table.borrow_mut().update_items(items);
    }

    fn next(&self, ctx: &CustomWidgetContext) {
        self.sync_items(ctx);
        self.table.borrow_mut().next();
    }

    fn previous(&self, ctx: &CustomWidgetContext) {
        self.sync_items(ctx);
        self.table.borrow_mut().previous();
    }

    fn refresh(&self, ctx: &CustomWidgetContext) {
        let _ = ctx.events.send(AppEvent::Call(ApiCommand::FetchStats));
    }
}

impl View for AdminView {
    fn id(&self) -> ViewID {
        ViewID::Admin
    }

    fn legend(&self, _state: &State) -> &str {
        "(r) refresh | (esc) back to dashboard"
    }
}

impl CustomWidgetRef for AdminView {
    fn render_ref(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext) {
        self.sync_items(ctx);
        self.table.borrow().render_ref(area, buf, ctx);
    }
}

impl EventHandler for AdminView {
    fn process_event(&self, evt: &Event, ctx: &CustomWidgetContext) -> bool {
        let mut handled = false;

        if let Event::Key(key) = evt {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Esc => {
                        self.store.dispatch(Action::UpdateView(ViewID::Home));
                        handled = true;
                    }
                    KeyCode::Up => {
                        self.previous(ctx);
                        handled = true;
                    }
                    KeyCode::Down => {
                        self.next(ctx);
                        handled = true;
                    }
                    KeyCode::Char('r') => {
                        self.refresh(ctx);
                        handled = true;
                    }
                    _ => {}
                }
            }
        }

        handled
    }
}

#[cfg(test)]
#[path = "./admin_tests.rs"]
mod tests;
