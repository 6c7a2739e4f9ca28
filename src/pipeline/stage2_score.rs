use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::model::scores::{
    AggregatedScore, CategoryScore, CriterionScore, ScoreInputs, SubScore, SubcriterionScore,
};
use crate::model::taxonomy::{Category, SubcriterionKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    pub key: SubcriterionKey,
    pub value: i64,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Every offending entry, in taxonomy order.
    #[error("subcriterion scores must be within 0..=5: {}", join_offenders(.0))]
    InvalidScoreRange(Vec<OutOfRange>),
}

fn join_offenders(offenders: &[OutOfRange]) -> String {
    offenders
        .iter()
        .map(|o| o.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Aggregates raw subcriterion entries bottom-up.
///
/// The whole call is rejected if any entry lies outside `0..=5`; nothing is
/// clamped. Absent keys count as zero and are marked `was_provided = false`.
pub fn score(inputs: &ScoreInputs) -> Result<AggregatedScore, ScoreError> {
    let mut validated: BTreeMap<SubcriterionKey, SubScore> = BTreeMap::new();
    let mut offenders = Vec::new();
    for (&key, &raw) in inputs {
        match SubScore::new(raw) {
            Some(value) => {
                validated.insert(key, value);
            }
            None => offenders.push(OutOfRange { key, value: raw }),
        }
    }
    if !offenders.is_empty() {
        return Err(ScoreError::InvalidScoreRange(offenders));
    }

    let categories = Category::ALL.map(|category| score_category(category, &validated));
    Ok(AggregatedScore::from_categories(categories))
}

fn score_category(
    category: Category,
    validated: &BTreeMap<SubcriterionKey, SubScore>,
) -> CategoryScore {
    let defs = category.criteria();
    let criteria = std::array::from_fn(|ci| {
        let def = &defs[ci];
        let subcriteria = std::array::from_fn(|si| {
            let key = SubcriterionKey::at(category, ci, si);
            let sub_def = &def.subcriteria[si];
            match validated.get(&key) {
                Some(&value) => SubcriterionScore::provided(sub_def, value),
                None => SubcriterionScore::missing(sub_def),
            }
        });
        CriterionScore::from_subcriteria(def, subcriteria)
    });
    CategoryScore::from_criteria(category, criteria)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_score.rs"]
mod tests;
