//! Category scores produced outside the scoring model (automated project
//! analysis). These bypass subcriterion entry and go straight to the projector.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::input::{InputError, ProjectMeta};
use crate::model::geometry::CategoryInput;
use crate::model::scores::{CATEGORY_MAX, CRITERION_MAX};
use crate::model::taxonomy::Category;
use crate::pipeline::stage4_profile::DetectedCriterion;

#[derive(Debug, Clone, Deserialize)]
pub struct DetectedDoc {
    #[serde(default)]
    pub project: ProjectMeta,
    pub categories: BTreeMap<String, DetectedCategoryDoc>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetectedCategoryDoc {
    pub score: f64,
    #[serde(default)]
    pub criteria: Vec<DetectedCriterionDoc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetectedCriterionDoc {
    pub name: String,
    pub score: f64,
    #[serde(default)]
    pub analysis: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: String,
    pub priority: Priority,
    pub suggestion: String,
}

#[derive(Debug, Clone)]
pub struct DetectedAnalysis {
    /// Spoke order, maximum 120 each.
    pub categories: Vec<CategoryInput>,
    pub criteria: Vec<DetectedCriterion>,
    pub recommendations: Vec<Recommendation>,
    pub insights: Vec<String>,
}

pub fn into_analysis(doc: DetectedDoc) -> Result<DetectedAnalysis, InputError> {
    if let Some(unknown) = doc
        .categories
        .keys()
        .find(|k| Category::from_key(k).is_none())
    {
        return Err(InputError::InvalidInput(format!(
            "unknown category `{unknown}` (expected architectural, urban, green)"
        )));
    }

    let mut categories = Vec::with_capacity(Category::ALL.len());
    let mut criteria = Vec::new();

    for category in Category::ALL {
        let Some(entry) = doc.categories.get(category.key()) else {
            return Err(InputError::MissingInput(format!(
                "category `{}`",
                category.key()
            )));
        };
        if !(entry.score.is_finite() && entry.score >= 0.0) {
            return Err(InputError::InvalidInput(format!(
                "{} score must be a finite non-negative number, got {}",
                category.key(),
                entry.score
            )));
        }
        if entry.score > CATEGORY_MAX as f64 {
            tracing::warn!(
                category = category.key(),
                score = entry.score,
                "category score exceeds {CATEGORY_MAX}; the compass clamps it to the outer ring"
            );
        }

        let mut seen = BTreeSet::new();
        let mut listed_sum = 0.0;
        for c in &entry.criteria {
            let Some(index) = match_criterion(category, &c.name) else {
                tracing::warn!(
                    category = category.key(),
                    criterion = %c.name,
                    "criterion not in taxonomy; skipped"
                );
                continue;
            };
            if !(c.score.is_finite() && (0.0..=CRITERION_MAX as f64).contains(&c.score)) {
                return Err(InputError::InvalidInput(format!(
                    "{} criterion `{}` score must be within 0..={CRITERION_MAX}, got {}",
                    category.key(),
                    c.name,
                    c.score
                )));
            }
            if !seen.insert(index) {
                return Err(InputError::InvalidInput(format!(
                    "{} criterion `{}` listed twice",
                    category.key(),
                    c.name
                )));
            }
            listed_sum += c.score;
            criteria.push(DetectedCriterion {
                category,
                index,
                score: c.score,
                note: c.analysis.clone(),
            });
        }
        if !seen.is_empty() && (listed_sum - entry.score).abs() > 1e-9 {
            tracing::warn!(
                category = category.key(),
                score = entry.score,
                criteria_sum = listed_sum,
                "category score differs from the sum of its listed criteria"
            );
        }

        categories.push(CategoryInput {
            name: category.title().to_string(),
            score: entry.score,
            maximum: CATEGORY_MAX as f64,
        });
    }

    let mut recommendations = doc.recommendations;
    recommendations.sort_by_key(|r| r.priority);

    Ok(DetectedAnalysis {
        categories,
        criteria,
        recommendations,
        insights: doc.insights,
    })
}

/// Accepts a criterion's title, short title or key, ignoring case and punctuation.
pub fn match_criterion(category: Category, name: &str) -> Option<usize> {
    let wanted = normalize(name);
    category.criteria().iter().position(|def| {
        normalize(def.title) == wanted
            || normalize(def.short_title) == wanted
            || normalize(def.key) == wanted
    })
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/detected.rs"]
mod tests;
