use crate::model::card::CardId;
use crate::model::card_set::CardSet;
use crate::model::category::Category;
use core::fmt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// How the presentation order is derived after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShufflePolicy {
    /// Fresh uniform permutation on every category change, including a repeat
    /// of the current one.
    #[default]
    Reshuffle,
    /// Card set order, unchanged.
    Stable,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown shuffle policy '{0}' (expected 'reshuffle' or 'stable')")]
pub struct ParsePolicyError(pub String);

impl FromStr for ShufflePolicy {
    type Err = ParsePolicyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "reshuffle" => Ok(ShufflePolicy::Reshuffle),
            "stable" => Ok(ShufflePolicy::Stable),
            _ => Err(ParsePolicyError(value.to_string())),
        }
    }
}

impl ShufflePolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            ShufflePolicy::Reshuffle => "reshuffle",
            ShufflePolicy::Stable => "stable",
        }
    }
}

impl fmt::Display for ShufflePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filtered (and possibly permuted) working list pages are sliced from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresentationOrder {
    ids: Vec<CardId>,
}

impl PresentationOrder {
    pub fn empty() -> Self {
        Self { ids: Vec::new() }
    }

    pub fn build<R: rand::Rng + ?Sized>(
        cards: &CardSet,
        category: &Category,
        policy: ShufflePolicy,
        rng: &mut R,
    ) -> Self {
        let mut order = Self {
            ids: cards.filter(category),
        };
        if policy == ShufflePolicy::Reshuffle {
            order.shuffle_in_place(rng);
        }
        order
    }

    pub fn from_ids(ids: Vec<CardId>) -> Self {
        Self { ids }
    }

    /// Fisher-Yates: walks from the last index down to 1, swapping with a
    /// uniformly chosen index in `[0, i]`.
    pub fn shuffle_in_place<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.ids.shuffle(rng);
    }

    pub fn shuffled_with_seed(cards: &CardSet, category: &Category, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::build(cards, category, ShufflePolicy::Reshuffle, &mut rng)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[CardId] {
        &self.ids
    }

    /// Clamped slice `[start, end)`; out-of-range bounds yield a shorter or
    /// empty slice.
    pub fn slice(&self, start: usize, end: usize) -> &[CardId] {
        let len = self.ids.len();
        let start = start.min(len);
        let end = end.clamp(start, len);
        &self.ids[start..end]
    }
}
