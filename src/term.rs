use std::io;
use std::io::Stdout;
use std::io::Write;

use crossterm::cursor;
use crossterm::event;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;
use tracing::warn;

use crate::driver::Frontend;
use crate::events::Event;
use crate::events::convert_event;
use crate::render::Canvas;
use crate::render::RenderStyle;
use crate::render::status_line;
use crate::simulation::Simulation;

const KEY_HINT: &str = "[enter] step  [q] quit";

/// A [`Frontend`] drawing to the terminal. Raw mode and the alternate screen are held for as
/// long as this value lives.
pub struct Terminal {
    stdout: Stdout,
    canvas: Canvas,
}

impl Terminal {
    pub fn enter(style: RenderStyle) -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }

        Ok(Self {
            stdout,
            canvas: Canvas::new(style),
        })
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let restored = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen)
            .and_then(|_| terminal::disable_raw_mode());

        if let Err(e) = restored {
            warn!("Failed to restore the terminal: {e}");
        }
    }
}

impl Frontend for Terminal {
    fn draw(&mut self, sim: &Simulation) -> io::Result<()> {
        let frame = self.canvas.render(sim.board());

        queue!(
            self.stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
        )?;

        // Raw mode doesn't turn `\n` into a carriage return, so move line by line
        for line in frame.lines() {
            queue!(self.stdout, style::Print(line), cursor::MoveToNextLine(1))?;
        }

        queue!(
            self.stdout,
            style::Print(status_line(sim)),
            cursor::MoveToNextLine(1),
            style::Print(KEY_HINT),
        )?;

        self.stdout.flush()
    }

    fn next_event(&mut self) -> io::Result<Event> {
        loop {
            if let Some(event) = convert_event(event::read()?) {
                return Ok(event);
            }
        }
    }
}
