use std::io;

use tracing::info;

use crate::events::Event;
use crate::simulation::Simulation;

/// Where frames go and where input comes from.
pub trait Frontend {
    /// Show the current generation.
    fn draw(&mut self, sim: &Simulation) -> io::Result<()>;

    /// Block until the next event.
    fn next_event(&mut self) -> io::Result<Event>;
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum State {
    Running,
    Stopped,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RunSummary {
    /// Steps taken during this run
    pub steps: u64,

    /// Generation shown when the run stopped
    pub generation: u64,
}

/// Draw, wait for an event, act on it. Repeat until a quit event arrives.
///
/// Quitting is only ever observed between generations, never in the middle of a step.
pub fn run<F: Frontend>(sim: &mut Simulation, frontend: &mut F) -> io::Result<RunSummary> {
    let mut state = State::Running;
    let mut steps = 0;

    while state == State::Running {
        frontend.draw(sim)?;

        match frontend.next_event()? {
            Event::Step => {
                sim.step();
                steps += 1;
            }
            Event::Redraw => {}
            Event::Quit => state = State::Stopped,
        }
    }

    info!(steps, generation = sim.generation(), "stopped");

    Ok(RunSummary {
        steps,
        generation: sim.generation(),
    })
}
