use std::fmt;
use std::ops::{BitOr, RangeBounds};
use std::str::FromStr;

use bitflags::bitflags;

use crate::error::ConfigError;

bitflags! {
  #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Hash)]
  #[must_use]
  pub struct TierFlags: u8 {
    const MOBILE = 1;
    const TABLET = 2;
    const DESKTOP = 4;
    const WIDE = 8;
  }
}

/// A design tier, ordered by increasing width.
#[derive(Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Tier {
    Mobile,
    Tablet,
    Desktop,
    Wide,
}

impl Tier {
    /// Every tier in ascending order.
    pub const ALL: [Tier; 4] = [Tier::Mobile, Tier::Tablet, Tier::Desktop, Tier::Wide];

    pub const fn name(self) -> &'static str {
        match self {
            Tier::Mobile => "mobile",
            Tier::Tablet => "tablet",
            Tier::Desktop => "desktop",
            Tier::Wide => "wide",
        }
    }

    const fn flag(self) -> TierFlags {
        match self {
            Tier::Mobile => TierFlags::MOBILE,
            Tier::Tablet => TierFlags::TABLET,
            Tier::Desktop => TierFlags::DESKTOP,
            Tier::Wide => TierFlags::WIDE,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tier {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .into_iter()
            .find(|tier| tier.name() == s)
            .ok_or_else(|| ConfigError::UnknownTier(s.to_string()))
    }
}

/// Width thresholds in pixels.
///
/// Each threshold is the exclusive upper bound of the tier it is named after,
/// so a width equal to `mobile` is already a tablet width. The `wide`
/// threshold only takes part in explicit queries such as
/// [`is_below`](Self::is_below).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBreakpointTable"))]
pub struct BreakpointTable {
    mobile: u32,
    tablet: u32,
    desktop: u32,
    wide: u32,
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl BreakpointTable {
    pub const DEFAULT: BreakpointTable = BreakpointTable {
        mobile: 768,
        tablet: 1024,
        desktop: 1280,
        wide: 1536,
    };

    /// Builds a table, rejecting thresholds that are not strictly increasing.
    pub fn new(mobile: u32, tablet: u32, desktop: u32, wide: u32) -> Result<Self, ConfigError> {
        let thresholds = [mobile, tablet, desktop, wide];
        if let Some(pair) = thresholds.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::UnorderedThresholds {
                lower: pair[0],
                upper: pair[1],
            });
        }
        Ok(Self {
            mobile,
            tablet,
            desktop,
            wide,
        })
    }

    pub const fn threshold(&self, tier: Tier) -> u32 {
        match tier {
            Tier::Mobile => self.mobile,
            Tier::Tablet => self.tablet,
            Tier::Desktop => self.desktop,
            Tier::Wide => self.wide,
        }
    }

    pub fn resolve(&self, threshold: impl Into<Threshold>) -> u32 {
        match threshold.into() {
            Threshold::Named(tier) => self.threshold(tier),
            Threshold::Pixels(px) => px,
        }
    }

    pub fn is_below(&self, width: u32, threshold: impl Into<Threshold>) -> bool {
        width < self.resolve(threshold)
    }

    pub fn is_above(&self, width: u32, threshold: impl Into<Threshold>) -> bool {
        width >= self.resolve(threshold)
    }

    /// Half-open `min <= width < max`. An empty or inverted range never matches.
    pub fn is_between(
        &self,
        width: u32,
        min: impl Into<Threshold>,
        max: impl Into<Threshold>,
    ) -> bool {
        self.resolve(min) <= width && width < self.resolve(max)
    }

    pub fn tier_for_width(&self, width: u32) -> Tier {
        if width < self.mobile {
            return Tier::Mobile;
        }
        if width < self.tablet {
            return Tier::Tablet;
        }
        if width < self.desktop {
            return Tier::Desktop;
        }
        Tier::Wide
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBreakpointTable {
    mobile: u32,
    tablet: u32,
    desktop: u32,
    wide: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBreakpointTable> for BreakpointTable {
    type Error = ConfigError;

    fn try_from(raw: RawBreakpointTable) -> Result<Self, Self::Error> {
        BreakpointTable::new(raw.mobile, raw.tablet, raw.desktop, raw.wide)
    }
}

/// Either a named breakpoint or a raw pixel width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Threshold {
    Named(Tier),
    Pixels(u32),
}

impl From<Tier> for Threshold {
    fn from(tier: Tier) -> Self {
        Threshold::Named(tier)
    }
}

impl From<u32> for Threshold {
    fn from(px: u32) -> Self {
        Threshold::Pixels(px)
    }
}

impl FromStr for Threshold {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(tier) = s.parse::<Tier>() {
            return Ok(Threshold::Named(tier));
        }
        s.parse::<u32>()
            .map(Threshold::Pixels)
            .map_err(|_| ConfigError::InvalidThreshold(s.to_string()))
    }
}

fn next(set: TierSet) -> TierSet {
    TierSet {
        flags: TierFlags::from_bits_truncate(set.flags.bits() << 1),
    }
}

fn prev(set: TierSet) -> TierSet {
    TierSet {
        flags: TierFlags::from_bits_truncate(set.flags.bits() >> 1),
    }
}

/// Collects every tier covered by `range`.
///
/// Bounds that are themselves unions use their lowest (start) or highest
/// (end) member. A range that excludes everything yields an empty set.
pub fn tier_range<R: RangeBounds<TierSet>>(range: R) -> TierSet {
    let start = match range.start_bound() {
        std::ops::Bound::Included(i) => *i,
        std::ops::Bound::Excluded(e) => next(*e),
        std::ops::Bound::Unbounded => TierSet::MOBILE,
    };
    let end = match range.end_bound() {
        std::ops::Bound::Included(s) => *s,
        std::ops::Bound::Excluded(e) => prev(*e),
        std::ops::Bound::Unbounded => TierSet::WIDE,
    };
    let (Some(lowest_start), Some(highest_end)) =
        (start.flags.iter().next(), end.flags.iter().last())
    else {
        return TierSet::EMPTY;
    };
    if lowest_start.bits() > highest_end.bits() {
        return TierSet::EMPTY;
    }

    // Every bit from the lowest start up to and including the highest end.
    let mask = (highest_end.bits() << 1) - lowest_start.bits();
    TierSet {
        flags: TierFlags::from_bits_truncate(mask),
    }
}

/// A set of tiers, built from unions, complements and ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TierSet {
    flags: TierFlags,
}

impl TierSet {
    pub const EMPTY: TierSet = TierSet::new(TierFlags::empty());
    pub const MOBILE: TierSet = TierSet::new(TierFlags::MOBILE);
    pub const TABLET: TierSet = TierSet::new(TierFlags::TABLET);
    pub const DESKTOP: TierSet = TierSet::new(TierFlags::DESKTOP);
    pub const WIDE: TierSet = TierSet::new(TierFlags::WIDE);

    const fn new(flags: TierFlags) -> Self {
        Self { flags }
    }

    pub const fn not(set: TierSet) -> Self {
        let flags = TierFlags::all().difference(set.flags);
        Self { flags }
    }

    pub fn contains(&self, tier: Tier) -> bool {
        self.flags.contains(tier.flag())
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn tiers(&self) -> Vec<Tier> {
        Tier::ALL
            .into_iter()
            .filter(|tier| self.contains(*tier))
            .collect()
    }
}

impl From<Tier> for TierSet {
    fn from(tier: Tier) -> Self {
        Self::new(tier.flag())
    }
}

impl BitOr for TierSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::new(self.flags | rhs.flags)
    }
}
