//! Terminal setup and the synchronous event loop that drives the desk.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::execute;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::desk::Desk;
use crate::error::DeskResult;

pub enum ControlFlow {
    Continue,
    Quit,
}

pub fn setup_terminal() -> DeskResult<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

pub fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> DeskResult<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the desk until the host's handler asks to quit.
///
/// One loop owns the thread: draw, then poll for input. When an event
/// arrives the queue is drained before the next draw so high-frequency
/// bursts (mouse drags) do not fall behind the render loop. The host handler
/// sees every event first; whatever it leaves unconsumed goes to the desk.
pub fn run<F>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    desk: &mut Desk,
    poll_interval: Duration,
    mut on_event: F,
) -> DeskResult<()>
where
    F: FnMut(&mut Desk, &Event) -> ControlFlow,
{
    loop {
        terminal.draw(|frame| desk.render(frame))?;

        if !event::poll(poll_interval)? {
            continue;
        }
        loop {
            let evt = event::read()?;
            if let ControlFlow::Quit = on_event(desk, &evt) {
                return Ok(());
            }
            desk.handle_event(&evt);
            if !event::poll(Duration::from_millis(0))? {
                break;
            }
        }
    }
}
