use std::sync::mpsc::Sender;

use ratatui::{crossterm::event::Event as CrossTermEvent, layout::Rect};

use crate::{
    events::types::Event,
    ui::store::state::{State, ViewID},
};

pub trait EventHandler {
    fn process_event(&self, evt: &CrossTermEvent, ctx: &CustomWidgetContext) -> bool;
}

pub struct CustomWidgetContext<'a> {
    // app state
    pub state: &'a State,
    // total area for the entire application - useful for calculating
    // popover areas
    pub app_area: Rect,
    // event producer - how views communicate network work back to the api
    // worker without blocking the render loop
    pub events: Sender<Event>,
}

pub trait CustomWidget {
    fn render(self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext);
}

pub trait CustomWidgetRef {
    fn render_ref(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext);
}

pub trait CustomStatefulWidget {
    type State;

    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
        ctx: &CustomWidgetContext,
    );
}

pub trait View: EventHandler + CustomWidgetRef {
    fn id(&self) -> ViewID;
    fn legend(&self, _state: &State) -> &str {
        ""
    }
}
