//! Terminal setup, teardown, and main event loop.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use crate::app::GameApp;
use crate::view;

/// Longest wait for input when nothing is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Launch the TUI application.
pub fn run(mut app: GameApp) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Main event loop. Waits for input until the next scheduled action is due.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut GameApp,
) -> Result<(), String> {
    loop {
        let mut screen = Rect::default();
        terminal
            .draw(|frame| {
                screen = frame.area();
                view::draw(frame, app);
            })
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        let timeout = app
            .next_deadline()
            .map_or(IDLE_POLL, |due| due.saturating_duration_since(Instant::now()));
        if event::poll(timeout).map_err(|e| format!("event error: {e}"))? {
            let event = event::read().map_err(|e| format!("event error: {e}"))?;
            handle_event(app, event, screen);
        }
        app.tick(Instant::now());
    }
}

/// Handle a crossterm event.
fn handle_event(app: &mut GameApp, event: Event, screen: Rect) {
    let now = Instant::now();
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            app.handle_key(key, now);
        }
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            app.click(view::button_at(screen, mouse.column, mouse.row), now);
        }
        _ => {}
    }
}
