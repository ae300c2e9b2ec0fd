//! The capability a classifier observes: something that knows its current
//! size and can tell listeners when that size changes.
//!
//! Hosts implement [`SizeProvider`] for whatever owns the drawing area (a
//! window, a terminal, a canvas). [`ListenerRegistry`] holds the listener
//! bookkeeping so implementations only need to forward resize events into
//! [`ListenerRegistry::dispatch`].

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use smallvec::SmallVec;

use crate::viewport::ViewportSize;

/// Callback invoked with the new size after every resize.
pub type ResizeListener = Rc<dyn Fn(ViewportSize)>;

/// Identifies one subscription on a provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub(crate) fn next() -> ListenerId {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        ListenerId(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

pub trait SizeProvider {
    /// Reads the current size synchronously.
    fn size(&self) -> ViewportSize;

    fn subscribe(&self, listener: ResizeListener) -> ListenerId;

    /// Returns `false` if `id` was not subscribed.
    fn unsubscribe(&self, id: ListenerId) -> bool;
}

impl<P: SizeProvider + ?Sized> SizeProvider for Rc<P> {
    fn size(&self) -> ViewportSize {
        (**self).size()
    }

    fn subscribe(&self, listener: ResizeListener) -> ListenerId {
        (**self).subscribe(listener)
    }

    fn unsubscribe(&self, id: ListenerId) -> bool {
        (**self).unsubscribe(id)
    }
}

/// Listener storage shared by the bundled providers.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: RefCell<SmallVec<[(ListenerId, ResizeListener); 2]>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, listener: ResizeListener) -> ListenerId {
        let id = ListenerId::next();
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    pub fn remove(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }

    /// Calls every listener registered when the dispatch starts.
    ///
    /// The list is copied out first, so listeners may subscribe or
    /// unsubscribe from inside the callback.
    pub fn dispatch(&self, size: ViewportSize) {
        let listeners: SmallVec<[ResizeListener; 2]> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        tracing::trace!(%size, listeners = listeners.len(), "dispatching resize");
        for listener in listeners {
            listener(size);
        }
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.len())
            .finish()
    }
}
