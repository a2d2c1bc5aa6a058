mod config;
mod console;
mod controller;
mod datastore;
mod log;
mod model;
mod remote;

use std::env;
use std::sync::Arc;

use dotenv::dotenv;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, info_span};
use tracing_futures::Instrument;
use tracing_subscriber::EnvFilter;

use config::Config;
use console::Command;
use controller::{ChannelNotifier, Intent, TodoController};
use remote::HttpTaskApi;

type Controller = TodoController<HttpTaskApi, ChannelNotifier>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = match env::var("TODOLIST_CONFIG") {
        Ok(path) => Config::from_file(path)?,
        Err(_) => Config::default(),
    };
    log::setup(EnvFilter::try_from_env("TODOLIST_LOG"), config.log.as_ref())?;

    info!("Starting TodoList: {}", env!("FULL_VERSION"));
    info!(url = %config.remote.url, page_size = config.remote.page_size, "remote store");

    let (tx_notification, mut rx_notification) = mpsc::unbounded_channel();
    let (controller, mut rx_snapshot) = TodoController::new(
        HttpTaskApi::new(config.remote.url.clone()),
        ChannelNotifier::new(tx_notification),
        config.remote.page_size,
    );
    let controller = Arc::new(controller);

    print!("{}", console::render(&rx_snapshot.borrow()));
    let loader = controller.clone();
    tokio::spawn(async move { loader.start().await }.instrument(info_span!("load")));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line? {
                    Some(line) => line,
                    None => break,
                };
                match console::parse(&line) {
                    Ok(None) => {}
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(Command::Help)) => println!("{}", console::HELP),
                    Ok(Some(Command::Show)) => print!("{}", console::render(&controller.snapshot())),
                    Ok(Some(Command::Intents(intents))) => spawn_intents(controller.clone(), intents),
                    Err(err) => eprintln!("{}", err),
                }
            }
            changed = rx_snapshot.changed() => {
                if changed.is_err() {
                    break;
                }
                let screen = console::render(&rx_snapshot.borrow_and_update());
                print!("{}", screen);
            }
            Some(notification) = rx_notification.recv() => {
                println!("{}", console::render_notification(&notification));
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted.");
                break;
            }
        }
    }
    info!("Stopping TodoList.");
    Ok(())
}

// Intents of one command run in order; separate commands run independently
// so a slow request never blocks the prompt.
fn spawn_intents(controller: Arc<Controller>, intents: Vec<Intent>) {
    let span = info_span!("command", intents = intents.len());
    tokio::spawn(
        async move {
            for intent in intents {
                if let Err(err) = controller.handle(intent).await {
                    debug!(reason = %err, "intent had no effect");
                    break;
                }
            }
        }
        .instrument(span),
    );
}

#[cfg(all(test, feature = "e2e"))]
mod e2e_tests;
