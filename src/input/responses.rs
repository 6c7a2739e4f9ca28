use std::collections::BTreeMap;

use serde::Deserialize;

use crate::input::{InputError, ProjectMeta};
use crate::model::scores::ScoreInputs;
use crate::model::taxonomy::{Category, SubcriterionKey};

/// Manual form entries keyed `<criterion>_<subcriterion>` per category.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResponsesDoc {
    #[serde(default)]
    pub project: ProjectMeta,
    #[serde(default)]
    pub architectural_responses: BTreeMap<String, i64>,
    #[serde(default)]
    pub urban_responses: BTreeMap<String, i64>,
    #[serde(default)]
    pub green_responses: BTreeMap<String, i64>,
}

impl ResponsesDoc {
    pub fn block(&self, category: Category) -> &BTreeMap<String, i64> {
        match category {
            Category::Architectural => &self.architectural_responses,
            Category::Urban => &self.urban_responses,
            Category::Green => &self.green_responses,
        }
    }
}

/// Resolves response keys against the taxonomy. Values pass through unchecked;
/// range validation belongs to the scoring stage.
pub fn into_score_inputs(doc: &ResponsesDoc) -> Result<ScoreInputs, InputError> {
    let mut inputs = ScoreInputs::new();
    for category in Category::ALL {
        for (raw_key, &value) in doc.block(category) {
            let key = SubcriterionKey::from_response_key(category, raw_key).ok_or_else(|| {
                InputError::UnknownKey {
                    category: category.key(),
                    key: raw_key.clone(),
                }
            })?;
            inputs.insert(key, value);
        }
    }
    Ok(inputs)
}
