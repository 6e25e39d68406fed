/// Lifecycle events emitted by [`super::GameController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Start,
    Stop,
    Step,
    StartEdit,
    StopEdit,
    MenuOpened,
}

/// Port for lights, sound or anything else reacting to the game's lifecycle.
///
/// Implementations never see the grid.
pub trait Effects {
    fn on_event(&mut self, event: Event);

    /// Called once per frame, before the grid is advanced.
    fn tick(&mut self) {}
}

/// Effects that do nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoEffects;

impl Effects for NoEffects {
    fn on_event(&mut self, _event: Event) {}
}

/// Records every event; handy in tests and for headless runs.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    pub events: Vec<Event>,
    pub ticks: u64,
}

impl Effects for EventLog {
    fn on_event(&mut self, event: Event) {
        self.events.push(event);
    }

    fn tick(&mut self) {
        self.ticks += 1;
    }
}
