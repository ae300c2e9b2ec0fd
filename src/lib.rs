//! # Responsive
//! Responsive classifies the size of a viewport into design tiers
//! (`mobile`, `tablet`, `desktop`, `wide`) and keeps that classification
//! current as the host resizes.
//!
//! ## Example
//! ```rust
//! use responsive::prelude::*;
//!
//! let window = MockViewport::with_size(1000, 600);
//! let classifier = ViewportClassifier::builder()
//!     .provider(window.clone())
//!     .on_change(|size, tier| println!("{size} is now {tier}"))
//!     .build()
//!     .unwrap();
//!
//! assert!(classifier.is_tablet());
//! assert!(classifier.is_between(Tier::Mobile, 1100));
//!
//! window.resize(1300, 800);
//! assert_eq!(classifier.breakpoint(), Tier::Wide);
//! ```
//!
//! ## Breakpoints
//! A [`BreakpointTable`] holds one width per tier. The default table is
//! `mobile=768, tablet=1024, desktop=1280, wide=1536`. Each width is the
//! point where the named tier ends, so width 768 is already `tablet`:
//!
//! | width | tier |
//! |---|---|
//! | `< 768` | mobile |
//! | `768..1024` | tablet |
//! | `1024..1280` | desktop |
//! | `>= 1280` | wide |
//!
//! Queries accept either a [`Tier`] or a raw pixel width through
//! [`Threshold`].
//!
//! ## Size providers
//! The classifier never reads global window state. It is handed a
//! [`SizeProvider`] at construction, which it measures once immediately and
//! then follows through resize notifications. [`MockViewport`] is a
//! headless provider for tests; with the `terminal` feature,
//! `TerminalViewport` follows a crossterm terminal.

pub mod classifier;
pub mod config;
pub mod error;
pub mod mock;
pub mod provider;
pub mod responsive;
#[cfg(feature = "terminal")]
pub mod terminal;
pub mod viewport;

pub use classifier::{ChangeObserver, ClassifierBuilder, DerivedFacts, ViewportClassifier};
pub use config::{ClassifierConfig, NotifyPolicy};
pub use error::ConfigError;
pub use mock::MockViewport;
pub use provider::{ListenerId, ListenerRegistry, ResizeListener, SizeProvider};
pub use responsive::{BreakpointTable, Threshold, Tier, TierSet, tier_range};
#[cfg(feature = "terminal")]
pub use terminal::TerminalViewport;
pub use viewport::ViewportSize;

pub mod prelude {
    pub use crate::classifier::ViewportClassifier;
    pub use crate::config::{ClassifierConfig, NotifyPolicy};
    pub use crate::mock::MockViewport;
    pub use crate::provider::SizeProvider;
    pub use crate::responsive::{BreakpointTable, Threshold, Tier, TierSet, tier_range};
    #[cfg(feature = "terminal")]
    pub use crate::terminal::TerminalViewport;
    pub use crate::viewport::ViewportSize;
}
