//! Orchestration around the automaton: the game's state machine, the edit
//! cursor and the lifecycle events consumed by effects.

mod cursor;
mod effects;
mod light;

pub use cursor::{Cursor, Direction};
pub use effects::{Effects, Event, EventLog, NoEffects};
pub use light::{hsv_to_rgb, Light};

use crate::{AutomatonGrid, Config, Pattern, PatternError, Preset};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Suspended,
    Running,
    Editing,
}

pub struct GameController<E: Effects, const WIDTH: usize, const HEIGHT: usize> {
    grid: AutomatonGrid<WIDTH, HEIGHT>,
    cursor: Cursor<WIDTH, HEIGHT>,
    effects: E,
    state: State,
    generation: u64,
}

impl<E: Effects, const WIDTH: usize, const HEIGHT: usize> GameController<E, WIDTH, HEIGHT> {
    /// Creates a suspended game on an empty field.
    pub fn new(effects: E) -> Self {
        Self {
            grid: AutomatonGrid::empty(),
            cursor: Cursor::default(),
            effects,
            state: State::Suspended,
            generation: 0,
        }
    }

    /// Seeds a random field and starts running (or stays suspended when
    /// configured to start paused).
    pub fn begin(&mut self) {
        self.randomize();
        if !Config::start_paused() {
            self.start();
        }
    }

    /// One frame of the main loop.
    pub fn tick(&mut self) {
        self.effects.tick();
        if self.state == State::Running {
            self.advance();
        }
    }

    fn set_state(&mut self, state: State, event: Event) {
        tracing::debug!(from = ?self.state, to = ?state, "game state changed");
        self.state = state;
        self.effects.on_event(event);
    }

    pub fn start(&mut self) {
        self.set_state(State::Running, Event::Start);
    }

    pub fn stop(&mut self) {
        self.set_state(State::Suspended, Event::Stop);
    }

    /// Play/pause toggle; ignored while editing, which is only left through
    /// [`Self::stop_edit`].
    pub fn toggle_running(&mut self) -> bool {
        match self.state {
            State::Running => self.stop(),
            State::Suspended => self.start(),
            State::Editing => return false,
        }
        true
    }

    /// Advances exactly one generation, in any state.
    pub fn step(&mut self) {
        self.effects.on_event(Event::Step);
        self.advance();
    }

    fn advance(&mut self) {
        self.grid.step();
        self.generation += 1;
    }

    pub fn start_edit(&mut self) {
        self.set_state(State::Editing, Event::StartEdit);
    }

    pub fn stop_edit(&mut self) {
        self.set_state(State::Suspended, Event::StopEdit);
    }

    /// Pauses the game while a menu is shown; lights go off.
    pub fn open_menu(&mut self) {
        self.state = State::Suspended;
        self.effects.on_event(Event::MenuOpened);
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    pub fn randomize(&mut self) {
        self.grid.randomize(Config::seed());
        self.generation = 0;
    }

    pub fn add_pattern(&mut self, pattern: &Pattern, x: usize, y: usize) {
        self.grid.add_pattern(pattern, x, y);
    }

    /// Clears the field and stamps the preset at each of its placements.
    pub fn load_preset(&mut self, preset: &Preset) -> Result<(), PatternError> {
        let pattern = preset.pattern()?;
        self.clear();
        for &(x, y) in preset.placements {
            self.grid.add_pattern(&pattern, x, y);
        }
        tracing::debug!(name = preset.name, "preset loaded");
        Ok(())
    }

    /// Moves the cursor; ignored unless editing.
    pub fn move_cursor(&mut self, direction: Direction) -> bool {
        if self.state != State::Editing {
            return false;
        }
        self.cursor.step(direction);
        true
    }

    /// Places the cursor on a cell, e.g. under a mouse click; ignored unless
    /// editing.
    pub fn place_cursor(&mut self, x: usize, y: usize) -> bool {
        if self.state != State::Editing {
            return false;
        }
        self.cursor = Cursor::at(x, y);
        true
    }

    pub fn spawn_at_cursor(&mut self) -> bool {
        if self.state != State::Editing {
            return false;
        }
        let (x, y) = self.cursor.position();
        // the cursor never leaves the field
        self.grid.spawn(x, y).is_ok()
    }

    pub fn kill_at_cursor(&mut self) -> bool {
        if self.state != State::Editing {
            return false;
        }
        let (x, y) = self.cursor.position();
        self.grid.kill(x, y).is_ok()
    }

    /// Moves the cursor to `(x, y)` and flips that cell; ignored unless
    /// editing or out of the field.
    pub fn toggle_at(&mut self, x: usize, y: usize) -> bool {
        if self.state != State::Editing {
            return false;
        }
        match self.grid.is_alive(x, y) {
            Ok(alive) => {
                self.cursor = Cursor::at(x, y);
                let result = if alive {
                    self.grid.kill(x, y)
                } else {
                    self.grid.spawn(x, y)
                };
                result.is_ok()
            }
            Err(err) => {
                tracing::warn!(%err, "toggle ignored");
                false
            }
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_waiting(&self) -> bool {
        self.state == State::Suspended
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    pub fn is_editing(&self) -> bool {
        self.state == State::Editing
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn grid(&self) -> &AutomatonGrid<WIDTH, HEIGHT> {
        &self.grid
    }

    pub fn cursor(&self) -> Cursor<WIDTH, HEIGHT> {
        self.cursor
    }

    pub fn effects(&self) -> &E {
        &self.effects
    }
}
