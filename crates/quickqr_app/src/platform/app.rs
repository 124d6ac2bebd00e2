use std::io::stdout;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use quickqr_core::{update, AppState, Msg};
use quickqr_engine::{ColorSchemeProbe, EngineHandle, EngineServices, EnvColorScheme};
use quickqr_logging::{qr_info, qr_warn};
use ratatui::DefaultTerminal;

use super::effects::EffectRunner;
use super::settings::{load_settings, SETTINGS_FILENAME};
use super::ui::keys::{map_event, UiAction};
use super::{logging, ui};

/// Spinner and engine polling cadence.
const TICK_INTERVAL: Duration = Duration::from_millis(75);

pub fn run_app() -> anyhow::Result<()> {
    let settings = load_settings(Path::new(SETTINGS_FILENAME));
    logging::initialize(&settings);
    qr_info!("Starting quickqr with {:?}", settings);

    let engine_config = settings.engine_config();
    let runner = EffectRunner::new(EngineHandle::new(EngineServices::native(&engine_config)));
    let prefers_dark = EnvColorScheme::from_env().prefers_dark();

    let mut terminal = ratatui::try_init().context("failed to initialize terminal")?;
    if let Err(err) = execute!(stdout(), EnableBracketedPaste) {
        qr_warn!("Bracketed paste unavailable: {}", err);
    }

    let mut app = App::new(runner);
    app.dispatch(Msg::ColorSchemeDetected { prefers_dark });
    let result = app.run(&mut terminal);

    let _ = execute!(stdout(), DisableBracketedPaste);
    ratatui::restore();
    qr_info!("quickqr exiting");
    result
}

struct App {
    state: AppState,
    runner: EffectRunner,
    needs_redraw: bool,
    should_quit: bool,
}

impl App {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            runner,
            needs_redraw: true,
            should_quit: false,
        }
    }

    fn run(&mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        let mut last_tick = Instant::now();

        while !self.should_quit {
            if self.needs_redraw {
                let view = self.state.view();
                terminal.draw(|frame| ui::render::render(frame, &view))?;
                self.needs_redraw = false;
            }

            let timeout = TICK_INTERVAL.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                let event = event::read()?;
                let action = map_event(&event, self.state.input(), self.state.notice().is_some());
                self.handle_action(action);
            }

            for msg in self.runner.poll_events() {
                self.dispatch(msg);
            }

            if last_tick.elapsed() >= TICK_INTERVAL {
                self.dispatch(Msg::Tick);
                last_tick = Instant::now();
            }
        }

        Ok(())
    }

    fn handle_action(&mut self, action: UiAction) {
        match action {
            UiAction::Dispatch(msg) => self.dispatch(msg),
            UiAction::Redraw => self.needs_redraw = true,
            UiAction::Quit => self.should_quit = true,
            UiAction::Ignore => {}
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.needs_redraw = true;
        }
        self.state = state;
        self.runner.enqueue(effects);
    }
}
