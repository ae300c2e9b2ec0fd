//! Terminal size provider backed by crossterm.
//!
//! Sizes are measured in character cells, so pair this provider with a
//! [`BreakpointTable`](crate::BreakpointTable) expressed in columns.
//! crossterm does not push resize notifications on its own; the host's event
//! loop passes each event it reads to [`TerminalViewport::handle_event`].

use std::cell::Cell;

use crossterm::event::Event;

use crate::error::ConfigError;
use crate::provider::{ListenerId, ListenerRegistry, ResizeListener, SizeProvider};
use crate::viewport::ViewportSize;

#[derive(Debug)]
pub struct TerminalViewport {
    size: Cell<ViewportSize>,
    listeners: ListenerRegistry,
}

impl TerminalViewport {
    /// Measures the attached terminal.
    ///
    /// Fails when stdout is not a terminal, instead of reporting 0x0 forever.
    pub fn new() -> Result<Self, ConfigError> {
        let (cols, rows) = crossterm::terminal::size()
            .map_err(|err| ConfigError::ProviderUnavailable(err.to_string()))?;
        Ok(Self::with_size(cols, rows))
    }

    /// Starts from a known size without touching the terminal.
    pub fn with_size(cols: u16, rows: u16) -> Self {
        Self {
            size: Cell::new((u32::from(cols), u32::from(rows)).into()),
            listeners: ListenerRegistry::new(),
        }
    }

    /// Forwards `Event::Resize` to listeners. Returns whether `event` was a resize.
    pub fn handle_event(&self, event: &Event) -> bool {
        let &Event::Resize(cols, rows) = event else {
            return false;
        };
        let size = ViewportSize::from((u32::from(cols), u32::from(rows)));
        self.size.set(size);
        self.listeners.dispatch(size);
        true
    }
}

impl SizeProvider for TerminalViewport {
    fn size(&self) -> ViewportSize {
        self.size.get()
    }

    fn subscribe(&self, listener: ResizeListener) -> ListenerId {
        self.listeners.add(listener)
    }

    fn unsubscribe(&self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }
}
