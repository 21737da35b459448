use std::collections::VecDeque;
use std::io::{self, Stdout};
use std::time::Duration;

use album_core::{update, AppState, Msg};
use album_engine::EngineHandle;
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use engine_logging::{engine_error, engine_info, engine_warn};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::config::{self, AppConfig};
use super::effects::EffectRunner;
use super::logging;
use super::ui::input::{self, Cursor, UiCommand};
use super::ui::render;

/// Input poll interval; a timeout becomes a `Msg::Tick`.
const TICK: Duration = Duration::from_millis(75);

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn run_app() -> Result<()> {
    let cwd = std::env::current_dir().context("resolving working directory")?;

    let (config, config_error) = match config::load_config(&cwd) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    logging::initialize(&cwd, config.level_filter());
    if let Some(err) = config_error {
        engine_warn!("{}; using default configuration", err);
    }
    engine_info!("Starting album browser; endpoint={}", config.endpoint);

    let engine = EngineHandle::new(config.fetch_settings()).context("starting fetch engine")?;
    let runner = EffectRunner::new(engine, config.endpoint.clone());

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let mut terminal = setup_terminal().context("initializing terminal")?;
    let result = event_loop(&mut terminal, &runner);
    restore_terminal().context("restoring terminal")?;

    if let Err(err) = &result {
        engine_error!("Album browser stopped with error: {:#}", err);
    }
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

fn event_loop(terminal: &mut Tui, runner: &EffectRunner) -> Result<()> {
    let mut state = AppState::new();
    let mut view = state.view();
    let mut cursor = Cursor::default();
    let mut inbox: VecDeque<Msg> = VecDeque::from([Msg::AppStarted]);
    let mut needs_draw = true;

    loop {
        inbox.extend(runner.drain_events());
        while let Some(msg) = inbox.pop_front() {
            let (next, effects) = update(state, msg);
            state = next;
            runner.run(effects);
            if state.consume_dirty() {
                needs_draw = true;
            }
        }

        if needs_draw {
            view = state.view();
            cursor.clamp(&view);
            terminal.draw(|frame| render::render(frame, &view, &cursor))?;
            needs_draw = false;
        }

        if !event::poll(TICK)? {
            inbox.push_back(Msg::Tick);
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match input::handle_key(key, &view, &mut cursor) {
                    UiCommand::Dispatch(msg) => inbox.push_back(msg),
                    UiCommand::Redraw => needs_draw = true,
                    UiCommand::Quit => break,
                    UiCommand::Ignore => {}
                }
            }
            Event::Resize(..) => needs_draw = true,
            _ => {}
        }
    }

    engine_info!("Quit requested; seen {} distinct items", state.seen_item_count());
    Ok(())
}
