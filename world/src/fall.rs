//! Resolution of objects dropping into holes.

use std::collections::BTreeMap;

use dohyo_core::{HoleLabel, Object, OreLetter};

/// Per-letter tally of ore dropped into its matching hole.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FallenCounts {
    counts: BTreeMap<OreLetter, u32>,
}

impl FallenCounts {
    /// Creates a tally with a zero entry for every provided letter.
    #[must_use]
    pub fn seeded<I>(letters: I) -> Self
    where
        I: IntoIterator<Item = OreLetter>,
    {
        Self {
            counts: letters.into_iter().map(|letter| (letter, 0)).collect(),
        }
    }

    /// Number of `letter` ore placed so far.
    #[must_use]
    pub fn get(&self, letter: OreLetter) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Sum of placements across all letters.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Iterator over `(letter, count)` pairs in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (OreLetter, u32)> + '_ {
        self.counts.iter().map(|(letter, count)| (*letter, *count))
    }

    fn record(&mut self, letter: OreLetter) {
        let count = self.counts.entry(letter).or_insert(0);
        *count = count.saturating_add(1);
    }
}

/// Consumes `object` into the hole labelled `hole`.
///
/// Returns `true` when the drop counts as a correct placement, which happens
/// only for ore whose uppercase letter equals the label. Every object is
/// removed from play regardless of the outcome.
pub fn resolve_fall(counts: &mut FallenCounts, hole: HoleLabel, object: Object) -> bool {
    match object {
        Object::Ore { letter } if hole.accepts(letter) => {
            counts.record(letter);
            true
        }
        Object::Ore { .. } | Object::Rock => false,
    }
}
