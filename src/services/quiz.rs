use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::Value;

use super::error::QueryError;
use crate::names;

/// Which questions are eligible for a quiz round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryScope {
    All,
    Only(i64),
}

impl CategoryScope {
    pub fn from_id(category_id: i64) -> Self {
        if category_id == names::ALL_CATEGORIES_ID {
            CategoryScope::All
        } else {
            CategoryScope::Only(category_id)
        }
    }

    pub fn category_id(self) -> Option<i64> {
        match self {
            CategoryScope::All => None,
            CategoryScope::Only(id) => Some(id),
        }
    }
}

/// Pick one candidate that is not excluded, uniformly at random.
/// Returns `None` once every candidate has been excluded.
pub fn select_next<R: Rng + ?Sized>(
    candidates: &[i64],
    excluded: &HashSet<i64>,
    rng: &mut R,
) -> Option<i64> {
    let eligible: Vec<i64> = candidates
        .iter()
        .copied()
        .filter(|id| !excluded.contains(id))
        .collect();

    eligible.choose(rng).copied()
}

/// Turn the caller's previously asked ids into an exclusion set.
/// `null` means nothing was asked yet. Anything other than a list of integers
/// is unusable and reported as an internal failure, not a validation one.
pub fn exclusion_set(previous: &Value) -> Result<HashSet<i64>, QueryError> {
    match previous {
        Value::Null => Ok(HashSet::new()),
        Value::Array(ids) => ids
            .iter()
            .map(|id| {
                crate::models::integer(id)
                    .ok_or(QueryError::Internal("previous questions must be integers"))
            })
            .collect(),
        _ => Err(QueryError::Internal("previous questions must be a list")),
    }
}
