use crate::responsive::BreakpointTable;

/// When the classifier calls its observer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NotifyPolicy {
    /// Once per resize notification, even if nothing visible changed.
    #[default]
    EveryResize,
    /// Only when the tier changes. The stored size is still updated on
    /// every resize.
    TierChange,
}

/// Classifier settings that can be loaded from a config file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClassifierConfig {
    pub breakpoints: BreakpointTable,
    pub notify: NotifyPolicy,
}

impl ClassifierConfig {
    pub fn with_breakpoints(mut self, breakpoints: BreakpointTable) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    pub fn with_notify(mut self, notify: NotifyPolicy) -> Self {
        self.notify = notify;
        self
    }
}
