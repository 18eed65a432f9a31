//! Entity ranking by largest single trade

use crate::instruction::ValidatedInstruction;
use crate::types::{Amount, EntityId};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One entity's best trade in a direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRanking {
    /// Instructing entity
    pub entity: EntityId,
    /// Largest USD amount of a single instruction
    pub highest_usd_amount: Amount,
    /// 1 for the largest amount, no gaps
    pub rank: u32,
}

impl fmt::Display for EntityRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.rank, self.entity, self.highest_usd_amount)
    }
}

/// Rank entities by their largest single USD amount.
///
/// Amounts are ordered descending. Entities with equal amounts are ordered
/// by identifier and still get consecutive, distinct ranks.
pub fn rank_entities<'a, I>(instructions: I) -> Vec<EntityRanking>
where
    I: IntoIterator<Item = &'a ValidatedInstruction>,
{
    let mut highest: HashMap<&str, &Amount> = HashMap::new();

    for instruction in instructions {
        let amount = instruction.usd_amount();
        highest
            .entry(instruction.entity())
            .and_modify(|best| {
                if amount > *best {
                    *best = amount;
                }
            })
            .or_insert(amount);
    }

    let mut ordered: Vec<(&str, &Amount)> = highest.into_iter().collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    ordered
        .into_iter()
        .zip(1u32..)
        .map(|((entity, amount), rank)| EntityRanking {
            entity: entity.to_string(),
            highest_usd_amount: amount.clone(),
            rank,
        })
        .collect()
}
