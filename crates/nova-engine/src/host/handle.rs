use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

use crate::api::{EngineApi, WindowApi};
use crate::logging;

/// Deferred host operation requested by the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Command {
    ShowWindow,
}

#[derive(Debug, Default)]
struct HostState {
    commands: Vec<Command>,
    configured: bool,
    started: bool,
}

/// Engine handle given to the load callback by the runtime.
///
/// Cheap to clone; all clones share the same host state. Single-threaded.
#[derive(Debug, Clone)]
pub struct HostHandle {
    state: Rc<RefCell<HostState>>,
    window: HostWindow,
}

/// Window handle exposed through [`HostHandle::window`].
#[derive(Debug, Clone)]
pub struct HostWindow {
    state: Rc<RefCell<HostState>>,
}

impl HostHandle {
    pub fn new() -> Self {
        let state = Rc::new(RefCell::new(HostState::default()));
        Self {
            window: HostWindow {
                state: Rc::clone(&state),
            },
            state,
        }
    }

    /// Marks the configuration as applied. Called by the runtime once the
    /// window exists.
    pub fn mark_configured(&self) {
        self.state.borrow_mut().configured = true;
    }

    pub fn is_configured(&self) -> bool {
        self.state.borrow().configured
    }

    pub fn is_started(&self) -> bool {
        self.state.borrow().started
    }

    /// Takes buffered commands in the order they were issued.
    pub fn drain_commands(&self) -> Vec<Command> {
        std::mem::take(&mut self.state.borrow_mut().commands)
    }
}

impl Default for HostHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineApi for HostHandle {
    type Window = HostWindow;

    fn log(&self, args: &[&dyn Display]) {
        logging::log_args(args);
    }

    fn window(&self) -> &HostWindow {
        &self.window
    }

    fn start(&self) -> bool {
        let mut state = self.state.borrow_mut();

        if state.started {
            log::warn!("engine start requested while already running");
            return false;
        }
        if !state.configured {
            log::warn!("engine start requested before configuration was applied");
            return false;
        }

        state.started = true;
        true
    }
}

impl WindowApi for HostWindow {
    fn show(&self) {
        self.state.borrow_mut().commands.push(Command::ShowWindow);
    }
}
