//! Terminal UI client for a remote interview-coaching backend
//!
//! Runs a simulated interview session end to end: log in with an email,
//! pick a target role, industry, and model tier, answer the generated
//! questions one at a time, and read the backend's feedback on each
//! answer. Admin accounts get a per-user session statistics panel.
//!
//! # Examples
//!
//! ```bash
//! # show help menu
//! coachterm --help
//!
//! # launch application
//! coachterm
//! ```

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use directories::ProjectDirs;
use std::{
    fs,
    sync::{
        mpsc::{channel, Sender},
        Arc,
    },
    thread::{self, JoinHandle},
};

use crate::{
    api::client::HttpApiClient,
    config::{ConfigManager, DEFAULT_CONFIG_ID},
    entitlement::SimulatedEntitlement,
    events::types::Event,
    main_event_handler::MainEventHandler,
    ui::store::Store,
};

#[doc(hidden)]
mod api;
#[doc(hidden)]
mod config;
#[doc(hidden)]
mod entitlement;
#[doc(hidden)]
mod error;
#[doc(hidden)]
mod events;
#[doc(hidden)]
mod main_event_handler;
#[doc(hidden)]
mod ui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Write debug logs to coachterm.log
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

#[doc(hidden)]
fn initialize_logger(args: &Args) -> Result<()> {
    if args.debug {
        // logs go to a file so they never corrupt the tui
        simplelog::WriteLogger::init(
            simplelog::LevelFilter::Debug,
            simplelog::Config::default(),
            std::fs::File::create("coachterm.log")?,
        )?;
    }

    Ok(())
}

#[doc(hidden)]
fn get_project_config_path() -> Result<String> {
    let project_dir =
        ProjectDirs::from("", "", "coachterm").ok_or(eyre!("failed to get project directory"))?;
    let config_dir = project_dir.config_dir();
    fs::create_dir_all(config_dir)?;
    let config_file_path = config_dir
        .join("config.yml")
        .to_str()
        .ok_or(eyre!("unable to construct config file path"))?
        .to_string();
    Ok(config_file_path)
}

#[doc(hidden)]
fn init() -> Result<Store> {
    let config_path = get_project_config_path()?;

    let config_manager = ConfigManager::builder().path(config_path).build()?;

    let config = config_manager
        .get_by_id(DEFAULT_CONFIG_ID)
        .ok_or(eyre!("failed to load default configuration"))?;

    Ok(Store::new(config, Box::new(SimulatedEntitlement::default())))
}

#[doc(hidden)]
fn start_api_worker_thread(
    store: Arc<Store>,
    rx: std::sync::mpsc::Receiver<Event>,
) -> Result<JoinHandle<Result<()>>> {
    let api_url = store.get_state().config.api_url;
    let client = HttpApiClient::new(&api_url)?;

    let handle = thread::spawn(move || -> Result<()> {
        let handler = MainEventHandler::new(store, Box::new(client), rx);
        handler.process_events()
    });

    Ok(handle)
}

#[doc(hidden)]
fn run_ui(tx: Sender<Event>, store: Arc<Store>) -> Result<()> {
    let app = ui::app::create_app(tx, store)?;
    app.launch()
}

#[doc(hidden)]
fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    initialize_logger(&args)?;

    let store = Arc::new(init()?);

    let (tx, rx) = channel();

    let worker_handle = start_api_worker_thread(Arc::clone(&store), rx)?;

    let ui_result = run_ui(tx.clone(), Arc::clone(&store));

    // the app loop sends Quit on its own exit paths; this covers early
    // returns from setup failures
    let _ = tx.send(Event::Quit);

    worker_handle
        .join()
        .map_err(error::report_from_thread_panic)??;

    ui_result
}
