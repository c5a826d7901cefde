//! Cut thresholds.
//!
//! A cut `N` selects every standing with rank `<= N`. Cuts overlap: a
//! rank-8 finish is inside the top 16, the top 32 and the top 1024.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::ConfigError;

/// A top-N threshold. Always positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Cut(u32);

impl Cut {
    /// Create a cut.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroCut` for `0`.
    pub const fn new(n: u32) -> Result<Self, ConfigError> {
        if n == 0 {
            Err(ConfigError::ZeroCut)
        } else {
            Ok(Self(n))
        }
    }

    /// The threshold value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Whether a finishing rank falls inside this cut.
    #[must_use]
    pub const fn includes(self, rank: u32) -> bool {
        rank <= self.0
    }

    /// Column label used by comparison columns, e.g. `"Top 32"`.
    #[must_use]
    pub fn label(self) -> String {
        format!("Top {}", self.0)
    }
}

impl TryFrom<u32> for Cut {
    type Error = ConfigError;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<Cut> for u32 {
    fn from(cut: Cut) -> Self {
        cut.0
    }
}

impl std::fmt::Display for Cut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Top {}", self.0)
    }
}

/// Non-empty, ordered, duplicate-free list of cuts.
///
/// The first cut is the baseline: report rows come from it and it fills
/// the `Count` column. The remaining cuts are comparison columns, in the
/// order supplied.
///
/// ## Example
///
/// ```
/// use archetype_stats::cuts::CutSet;
///
/// let cuts = CutSet::new([1024, 64, 32, 16]).unwrap();
/// assert_eq!(cuts.baseline().raw(), 1024);
/// assert_eq!(cuts.rest().len(), 3);
///
/// assert!(CutSet::new([]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct CutSet {
    cuts: SmallVec<[Cut; 4]>,
}

impl CutSet {
    /// Validate and build a cut set.
    ///
    /// # Errors
    ///
    /// Fails on an empty list, a zero threshold or a repeated threshold.
    pub fn new(cuts: impl IntoIterator<Item = u32>) -> Result<Self, ConfigError> {
        let mut validated: SmallVec<[Cut; 4]> = SmallVec::new();
        for n in cuts {
            let cut = Cut::new(n)?;
            if validated.contains(&cut) {
                return Err(ConfigError::DuplicateCut(n));
            }
            validated.push(cut);
        }
        if validated.is_empty() {
            return Err(ConfigError::NoCuts);
        }
        Ok(Self { cuts: validated })
    }

    /// The baseline cut (first supplied).
    #[must_use]
    pub fn baseline(&self) -> Cut {
        self.cuts[0]
    }

    /// Comparison cuts, in supplied order.
    #[must_use]
    pub fn rest(&self) -> &[Cut] {
        &self.cuts[1..]
    }

    /// All cuts, baseline first.
    #[must_use]
    pub fn as_slice(&self) -> &[Cut] {
        &self.cuts
    }

    /// Iterate all cuts, baseline first.
    pub fn iter(&self) -> impl Iterator<Item = Cut> + '_ {
        self.cuts.iter().copied()
    }

    /// Number of cuts (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cuts.len()
    }

    /// Always false; kept for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    /// Position of a cut in the set.
    #[must_use]
    pub fn position(&self, cut: Cut) -> Option<usize> {
        self.cuts.iter().position(|c| *c == cut)
    }

    /// Positions of every cut that includes `rank`.
    #[must_use]
    pub fn containing(&self, rank: u32) -> SmallVec<[usize; 4]> {
        self.cuts
            .iter()
            .enumerate()
            .filter(|(_, cut)| cut.includes(rank))
            .map(|(i, _)| i)
            .collect()
    }
}

impl TryFrom<Vec<u32>> for CutSet {
    type Error = ConfigError;

    fn try_from(cuts: Vec<u32>) -> Result<Self, Self::Error> {
        Self::new(cuts)
    }
}

impl From<CutSet> for Vec<u32> {
    fn from(set: CutSet) -> Self {
        set.cuts.iter().map(|c| c.raw()).collect()
    }
}
