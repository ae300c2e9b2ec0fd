/// Errors raised while configuring a classifier.
///
/// Queries on a built classifier never fail; everything that can go wrong
/// is caught when the table, the config or the provider is set up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("no size provider was given to the classifier")]
    MissingProvider,

    #[error("size provider is unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("breakpoint thresholds must be strictly increasing, got {lower} followed by {upper}")]
    UnorderedThresholds { lower: u32, upper: u32 },

    #[error("unknown tier `{0}` (expected mobile, tablet, desktop or wide)")]
    UnknownTier(String),

    #[error("`{0}` is neither a tier name nor a pixel width")]
    InvalidThreshold(String),
}
