use color_eyre::eyre::{Context, Result};
use core::time;
use log::*;
use ratatui::{
    crossterm::{
        event::{
            self, DisableMouseCapture, EnableMouseCapture, Event as CrossTermEvent, KeyCode,
            KeyModifiers,
        },
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    layout::Rect,
    prelude::CrosstermBackend,
    Terminal,
};
use std::{
    cell::RefCell,
    io::{self, Stdout},
    sync::{mpsc::Sender, Arc},
};

use crate::{events::types::Event, ui::store::Store};

use super::views::{
    main::MainView,
    traits::{CustomWidgetContext, CustomWidgetRef, EventHandler},
};

type Backend = CrosstermBackend<Stdout>;

/// Owns the terminal and drives the render loop on the UI thread. All
/// network work is forwarded to the api worker over the event channel so
/// drawing never blocks on a request.
pub struct App {
    terminal: RefCell<Terminal<Backend>>,
    store: Arc<Store>,
    main_view: MainView,
    event_sender: Sender<Event>,
}

pub fn create_app(tx: Sender<Event>, store: Arc<Store>) -> Result<App> {
    // setup terminal
    enable_raw_mode().wrap_err("failed to enter raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .wrap_err("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).wrap_err("failed to create terminal")?;
    Ok(App::new(tx, terminal, store))
}

impl App {
    fn new(tx: Sender<Event>, terminal: Terminal<Backend>, store: Arc<Store>) -> Self {
        Self {
            terminal: RefCell::new(terminal),
            store: Arc::clone(&store),
            main_view: MainView::new(store),
            event_sender: tx,
        }
    }

    pub fn launch(&self) -> Result<()> {
        self.start_app_loop()?;
        self.exit()?;
        Ok(())
    }

    fn start_app_loop(&self) -> Result<()> {
        loop {
            let state = self.store.get_state();

            let mut ctx = CustomWidgetContext {
                state: &state,
                app_area: Rect::default(),
                events: self.event_sender.clone(),
            };

            self.terminal.borrow_mut().draw(|f| {
                ctx = CustomWidgetContext {
                    state: &state,
                    app_area: f.area(),
                    events: self.event_sender.clone(),
                };
                self.main_view.render_ref(f.area(), f.buffer_mut(), &ctx)
            })?;

            // Use poll here so we don't block the thread, this will allow
            // rendering of incoming api responses as they're applied
            if let Ok(has_event) = event::poll(time::Duration::from_millis(60)) {
                if has_event {
                    let evt = event::read()?;

                    let handled = self.main_view.process_event(&evt, &ctx);

                    if let CrossTermEvent::Key(key) = evt {
                        match key.code {
                            KeyCode::Char('q') => {
                                // allow overriding q key
                                if !handled {
                                    self.event_sender.send(Event::Quit)?;
                                    return Ok(());
                                }
                            }
                            KeyCode::Char('c') => {
                                // do not allow overriding ctrl-c
                                if key.modifiers == KeyModifiers::CONTROL {
                                    info!("APP RECEIVED CONTROL-C SEQUENCE");
                                    self.event_sender.send(Event::Quit)?;
                                    return Ok(());
                                }
                            }
                            _ => {}
                        }
                    }
                }
            }
        }
    }

    fn exit(&self) -> Result<()> {
        let mut terminal = self.terminal.borrow_mut();
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }
}
