//! The viewport classifier.
//!
//! A [`ViewportClassifier`] keeps the latest size reported by its
//! [`SizeProvider`] and answers breakpoint queries against it. Nothing is
//! cached besides the size itself: every flag and the current [`Tier`] are
//! derived again on each read.
//!
//! ```rust
//! use responsive::{MockViewport, Tier, ViewportClassifier};
//!
//! let window = MockViewport::with_size(1000, 600);
//! let classifier = ViewportClassifier::new(window.clone());
//! assert_eq!(classifier.breakpoint(), Tier::Tablet);
//!
//! window.resize(1400, 900);
//! assert!(classifier.is_wide());
//! ```
//!
//! ## Lifecycle
//! The classifier subscribes to its provider once when it is activated and
//! unsubscribes once when it is deactivated or dropped. Calling
//! [`activate`](ViewportClassifier::activate) on an active classifier, or
//! [`deactivate`](ViewportClassifier::deactivate) on an inactive one, does
//! nothing.

use std::cell::Cell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::config::{ClassifierConfig, NotifyPolicy};
use crate::error::ConfigError;
use crate::provider::{ListenerId, ResizeListener, SizeProvider};
use crate::responsive::{BreakpointTable, Threshold, Tier, TierSet};
use crate::viewport::ViewportSize;

/// The single observer told about state changes, usually the owning UI
/// context scheduling a re-render.
pub type ChangeObserver = Rc<dyn Fn(ViewportSize, Tier)>;

/// Every fact derived from one width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DerivedFacts {
    pub is_mobile: bool,
    pub is_tablet: bool,
    pub is_desktop: bool,
    pub is_wide: bool,
    pub breakpoint: Tier,
}

impl DerivedFacts {
    pub fn new(table: &BreakpointTable, width: u32) -> Self {
        Self {
            is_mobile: table.is_below(width, Tier::Mobile),
            is_tablet: table.is_between(width, Tier::Mobile, Tier::Tablet),
            is_desktop: table.is_between(width, Tier::Tablet, Tier::Desktop),
            is_wide: table.is_above(width, Tier::Desktop),
            breakpoint: table.tier_for_width(width),
        }
    }
}

struct ClassifierState {
    size: Cell<ViewportSize>,
    measured: Cell<bool>,
    table: BreakpointTable,
    notify: NotifyPolicy,
    observer: Option<ChangeObserver>,
}

impl ClassifierState {
    fn apply(&self, size: ViewportSize) {
        let old = self.size.replace(size);
        let old_tier = self.table.tier_for_width(old.width);
        let tier = self.table.tier_for_width(size.width);
        if tier != old_tier {
            tracing::debug!(from = %old_tier, to = %tier, %size, "viewport tier changed");
        }

        let Some(observer) = &self.observer else {
            return;
        };
        match self.notify {
            NotifyPolicy::EveryResize => observer(size, tier),
            NotifyPolicy::TierChange if tier != old_tier => observer(size, tier),
            NotifyPolicy::TierChange => {}
        }
    }
}

pub struct ViewportClassifier {
    state: Rc<ClassifierState>,
    provider: Rc<dyn SizeProvider>,
    subscription: Option<ListenerId>,
}

impl ViewportClassifier {
    /// Builds an active classifier with the default table and no observer.
    pub fn new(provider: impl SizeProvider + 'static) -> Self {
        Self::from_parts(Rc::new(provider), ClassifierConfig::default(), None)
    }

    pub fn builder() -> ClassifierBuilder {
        ClassifierBuilder::default()
    }

    fn from_parts(
        provider: Rc<dyn SizeProvider>,
        config: ClassifierConfig,
        observer: Option<ChangeObserver>,
    ) -> Self {
        let mut classifier = Self {
            state: Rc::new(ClassifierState {
                size: Cell::new(ViewportSize::UNMEASURED),
                measured: Cell::new(false),
                table: config.breakpoints,
                notify: config.notify,
                observer,
            }),
            provider,
            subscription: None,
        };
        classifier.activate();
        classifier
    }

    /// Measures the provider and subscribes to its resize notifications.
    ///
    /// The first activation stores the measurement without notifying the
    /// observer. A later re-activation that finds a different size treats it
    /// like a resize.
    pub fn activate(&mut self) {
        if self.subscription.is_some() {
            return;
        }

        let size = self.provider.size();
        if self.state.measured.replace(true) {
            if size != self.state.size.get() {
                self.state.apply(size);
            }
        } else {
            self.state.size.set(size);
        }

        let state: Weak<ClassifierState> = Rc::downgrade(&self.state);
        let listener: ResizeListener = Rc::new(move |size| {
            if let Some(state) = state.upgrade() {
                state.apply(size);
            }
        });
        let id = self.provider.subscribe(listener);
        tracing::debug!(subscription = ?id, %size, "subscribed to size provider");
        self.subscription = Some(id);
    }

    /// Releases the provider subscription. The last known size is kept.
    pub fn deactivate(&mut self) {
        let Some(id) = self.subscription.take() else {
            return;
        };
        let removed = self.provider.unsubscribe(id);
        tracing::debug!(subscription = ?id, removed, "unsubscribed from size provider");
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn table(&self) -> &BreakpointTable {
        &self.state.table
    }

    /// The latest known size, or [`ViewportSize::UNMEASURED`] before the
    /// first measurement.
    pub fn current(&self) -> ViewportSize {
        self.state.size.get()
    }

    fn width(&self) -> u32 {
        self.state.size.get().width
    }

    pub fn is_below(&self, threshold: impl Into<Threshold>) -> bool {
        self.state.table.is_below(self.width(), threshold)
    }

    pub fn is_above(&self, threshold: impl Into<Threshold>) -> bool {
        self.state.table.is_above(self.width(), threshold)
    }

    /// `min <= width < max`. Passing `min >= max` is not an error, the
    /// range is just empty.
    pub fn is_between(&self, min: impl Into<Threshold>, max: impl Into<Threshold>) -> bool {
        self.state.table.is_between(self.width(), min, max)
    }

    pub fn breakpoint(&self) -> Tier {
        self.state.table.tier_for_width(self.width())
    }

    pub fn is_mobile(&self) -> bool {
        self.is_below(Tier::Mobile)
    }

    pub fn is_tablet(&self) -> bool {
        self.is_between(Tier::Mobile, Tier::Tablet)
    }

    pub fn is_desktop(&self) -> bool {
        self.is_between(Tier::Tablet, Tier::Desktop)
    }

    pub fn is_wide(&self) -> bool {
        self.is_above(Tier::Desktop)
    }

    pub fn facts(&self) -> DerivedFacts {
        DerivedFacts::new(&self.state.table, self.width())
    }

    /// Whether the current tier is one of `set`.
    pub fn matches(&self, set: impl Into<TierSet>) -> bool {
        set.into().contains(self.breakpoint())
    }
}

impl Drop for ViewportClassifier {
    fn drop(&mut self) {
        self.deactivate();
    }
}

impl fmt::Debug for ViewportClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportClassifier")
            .field("size", &self.current())
            .field("breakpoint", &self.breakpoint())
            .field("subscription", &self.subscription)
            .finish()
    }
}

#[derive(Default)]
pub struct ClassifierBuilder {
    provider: Option<Rc<dyn SizeProvider>>,
    config: ClassifierConfig,
    observer: Option<ChangeObserver>,
}

impl ClassifierBuilder {
    pub fn provider(mut self, provider: impl SizeProvider + 'static) -> Self {
        let provider: Rc<dyn SizeProvider> = Rc::new(provider);
        self.provider = Some(provider);
        self
    }

    pub fn table(mut self, table: BreakpointTable) -> Self {
        self.config.breakpoints = table;
        self
    }

    pub fn notify(mut self, notify: NotifyPolicy) -> Self {
        self.config.notify = notify;
        self
    }

    /// Replaces the table and notify policy.
    pub fn config(mut self, config: ClassifierConfig) -> Self {
        self.config = config;
        self
    }

    /// Registers the observer. A second call replaces the first.
    pub fn on_change(mut self, observer: impl Fn(ViewportSize, Tier) + 'static) -> Self {
        self.observer = Some(Rc::new(observer));
        self
    }

    /// Measures the provider and returns an active classifier.
    pub fn build(self) -> Result<ViewportClassifier, ConfigError> {
        let provider = self.provider.ok_or(ConfigError::MissingProvider)?;
        Ok(ViewportClassifier::from_parts(
            provider,
            self.config,
            self.observer,
        ))
    }
}
