//! Terminal front end
//!
//! Owns the terminal and the event loop. Key presses go to [`App`], the
//! commands it returns run on spawned tasks, and their outcomes come back
//! over a channel.

mod ui;

use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use tui_logger::{TuiWidgetEvent, TuiWidgetState};

use crate::app::{self, App, Command, Focus, Outcome};
use crate::{ClientConfig, HttpClient};

const TICK: Duration = Duration::from_millis(50);

/// Route tracing output into the log pane
fn init_tui_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("directory_client=info,reqwest=warn"));

    let _ = tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(env_filter)
        .try_init();

    tui_logger::init_logger(log::LevelFilter::Info).ok();
    tui_logger::set_default_level(log::LevelFilter::Info);
}

/// Run the interactive client until the user quits
pub async fn run(config: ClientConfig) -> Result<(), Box<dyn std::error::Error>> {
    init_tui_logging();
    let client = config.build_http_client()?;
    tracing::info!("Backend: {}", client.base_url());
    tracing::info!("Press 'a' to add, 'e' to edit, 'd' to delete, '/' to search, 'q' to quit");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(client.base_url(), config.search_debounce());
    let res = run_app(&mut terminal, &mut app, client).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(Into::into)
}

fn spawn_command(client: &HttpClient, command: Command, tx: &mpsc::UnboundedSender<Outcome>) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = app::execute(&client, command).await;
        // Receiver is gone only after quit
        let _ = tx.send(outcome);
    });
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    client: HttpClient,
) -> io::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let logger_state = TuiWidgetState::new();

    for command in app.mount(Instant::now()) {
        spawn_command(&client, command, &tx);
    }

    loop {
        terminal.draw(|f| ui::draw(f, app, &logger_state))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                let log_key = app.focus == Focus::Table && app.confirm_delete.is_none();
                match key.code {
                    KeyCode::PageUp if log_key => {
                        logger_state.transition(TuiWidgetEvent::PrevPageKey)
                    }
                    KeyCode::PageDown if log_key => {
                        logger_state.transition(TuiWidgetEvent::NextPageKey)
                    }
                    _ => {
                        for command in app.handle_key(key, Instant::now()) {
                            spawn_command(&client, command, &tx);
                        }
                    }
                }
            }
        }

        while let Ok(outcome) = rx.try_recv() {
            app.apply(outcome, Instant::now());
        }

        if let Some(command) = app.tick(Instant::now()) {
            spawn_command(&client, command, &tx);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
