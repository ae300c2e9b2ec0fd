//! Mock size provider for headless testing.
//!
//! This module provides a [`SizeProvider`] that is driven by hand, so a
//! classifier can be exercised without a real window or terminal.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::provider::{ListenerId, ListenerRegistry, ResizeListener, SizeProvider};
use crate::viewport::ViewportSize;

struct MockState {
    size: Cell<ViewportSize>,
    listeners: ListenerRegistry,
}

/// A provider whose size only changes when [`resize`](Self::resize) is called.
///
/// Clones share the same size and listeners, so a test can hand one clone to
/// a classifier and keep another to drive it.
#[derive(Clone)]
pub struct MockViewport {
    state: Rc<MockState>,
}

impl MockViewport {
    /// Create a new mock viewport with an 800x600 size.
    pub fn new() -> Self {
        Self::with_size(800, 600)
    }

    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            state: Rc::new(MockState {
                size: Cell::new((width, height).into()),
                listeners: ListenerRegistry::new(),
            }),
        }
    }

    /// Sets the size and notifies every listener synchronously.
    pub fn resize(&self, width: u32, height: u32) {
        let size = ViewportSize::from((width, height));
        self.state.size.set(size);
        self.state.listeners.dispatch(size);
    }

    /// Sets the size without telling anyone.
    pub fn set_size_silently(&self, width: u32, height: u32) {
        self.state.size.set((width, height).into());
    }

    pub fn listener_count(&self) -> usize {
        self.state.listeners.len()
    }
}

impl Default for MockViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MockViewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockViewport")
            .field("size", &self.state.size.get())
            .field("listeners", &self.state.listeners.len())
            .finish()
    }
}

impl SizeProvider for MockViewport {
    fn size(&self) -> ViewportSize {
        self.state.size.get()
    }

    fn subscribe(&self, listener: ResizeListener) -> ListenerId {
        self.state.listeners.add(listener)
    }

    fn unsubscribe(&self, id: ListenerId) -> bool {
        self.state.listeners.remove(id)
    }
}
