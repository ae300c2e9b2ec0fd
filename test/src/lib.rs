//! Testing utilities for responsive viewport classification.
//!
//! This crate provides a harness that pairs a [`MockViewport`] with a
//! [`ViewportClassifier`], so tests can drive resizes and inspect what the
//! classifier and its observer saw.
//!
//! # Example
//!
//! ```rust
//! use responsive_test::prelude::*;
//!
//! let mut harness = ResizeHarness::new_with_size(1000, 600);
//! harness.resize_width(500);
//!
//! assert_eq!(harness.classifier().breakpoint(), Tier::Mobile);
//! assert_eq!(harness.tracker().tiers(), vec![Tier::Mobile]);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use responsive::prelude::*;

pub mod prelude {
    pub use super::{ChangeTracker, ResizeHarness};
    pub use responsive::prelude::*;
}

/// Records every observer call made by a classifier.
///
/// # Example
///
/// ```rust
/// use responsive_test::prelude::*;
///
/// let window = MockViewport::with_size(800, 600);
/// let tracker = ChangeTracker::new();
/// let _classifier = tracker.track(ViewportClassifier::builder().provider(window.clone()))
///     .build()
///     .unwrap();
///
/// window.resize(1300, 600);
/// assert_eq!(tracker.change_count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct ChangeTracker {
    changes: Rc<RefCell<Vec<(ViewportSize, Tier)>>>,
}

impl ChangeTracker {
    /// Create a new change tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register this tracker as the builder's observer.
    pub fn track(&self, builder: responsive::ClassifierBuilder) -> responsive::ClassifierBuilder {
        let changes = self.changes.clone();
        builder.on_change(move |size, tier| changes.borrow_mut().push((size, tier)))
    }

    pub fn change_count(&self) -> usize {
        self.changes.borrow().len()
    }

    pub fn changes(&self) -> Vec<(ViewportSize, Tier)> {
        self.changes.borrow().clone()
    }

    /// The tier reported by each observer call, in order.
    pub fn tiers(&self) -> Vec<Tier> {
        self.changes.borrow().iter().map(|(_, tier)| *tier).collect()
    }

    pub fn last(&self) -> Option<(ViewportSize, Tier)> {
        self.changes.borrow().last().copied()
    }

    pub fn reset(&self) {
        self.changes.borrow_mut().clear();
    }
}

/// A classifier wired to a mock viewport and a [`ChangeTracker`].
pub struct ResizeHarness {
    window: MockViewport,
    tracker: ChangeTracker,
    classifier: Option<ViewportClassifier>,
}

impl ResizeHarness {
    /// Create a harness with the default table and notify policy.
    pub fn new_with_size(width: u32, height: u32) -> Self {
        Self::new_with_config(width, height, ClassifierConfig::default())
    }

    pub fn new_with_config(width: u32, height: u32, config: ClassifierConfig) -> Self {
        let window = MockViewport::with_size(width, height);
        let tracker = ChangeTracker::new();
        let classifier = tracker
            .track(ViewportClassifier::builder().provider(window.clone()))
            .config(config)
            .build()
            .expect("harness always sets a provider");
        Self {
            window,
            tracker,
            classifier: Some(classifier),
        }
    }

    /// The classifier under test.
    ///
    /// # Panics
    /// Panics after [`teardown`](Self::teardown).
    pub fn classifier(&self) -> &ViewportClassifier {
        self.classifier
            .as_ref()
            .expect("classifier was torn down")
    }

    pub fn classifier_mut(&mut self) -> &mut ViewportClassifier {
        self.classifier
            .as_mut()
            .expect("classifier was torn down")
    }

    pub fn window(&self) -> &MockViewport {
        &self.window
    }

    pub fn tracker(&self) -> &ChangeTracker {
        &self.tracker
    }

    pub fn resize(&mut self, width: u32, height: u32) -> &mut Self {
        self.window.resize(width, height);
        self
    }

    /// Resize keeping the current height.
    pub fn resize_width(&mut self, width: u32) -> &mut Self {
        let height = self.window.size().height;
        self.resize(width, height)
    }

    /// Drop the classifier, as when its owning UI context goes away.
    pub fn teardown(&mut self) {
        self.classifier = None;
    }

    pub fn is_torn_down(&self) -> bool {
        self.classifier.is_none()
    }
}
