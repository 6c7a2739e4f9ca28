use serde::Serialize;
use thiserror::Error;

use crate::model::geometry::CategoryInput;
use crate::model::numeric::{percent_of, round_half_up_to};
use crate::model::scores::{AggregatedScore, CRITERION_MAX};
use crate::model::taxonomy::Category;
use crate::pipeline::stage3_project::{ProjectError, overall_percentage};

/// One row of the per-criterion profile (18 rows for a full analysis).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileEntry {
    pub category: Category,
    pub key: &'static str,
    pub title: &'static str,
    pub short_title: &'static str,
    pub score: f64,
    pub maximum: f64,
    /// Entered subcriteria, known only for manual analyses.
    pub provided: Option<usize>,
    pub note: Option<String>,
}

pub fn criterion_profile(agg: &AggregatedScore) -> Vec<ProfileEntry> {
    agg.categories()
        .iter()
        .flat_map(|cat| {
            let defs = cat.category().criteria();
            cat.criteria()
                .iter()
                .zip(defs.iter())
                .map(move |(score, def)| ProfileEntry {
                    category: cat.category(),
                    key: def.key,
                    title: def.title,
                    short_title: def.short_title,
                    score: score.total() as f64,
                    maximum: score.maximum() as f64,
                    provided: Some(score.provided_count()),
                    note: None,
                })
        })
        .collect()
}

/// A criterion score reported by an external analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedCriterion {
    pub category: Category,
    pub index: usize,
    pub score: f64,
    pub note: Option<String>,
}

/// Profile rows for the criteria an external analysis reported, in taxonomy order.
pub fn detected_profile(criteria: &[DetectedCriterion]) -> Vec<ProfileEntry> {
    let mut sorted = criteria.to_vec();
    sorted.sort_by_key(|c| (c.category, c.index));
    sorted
        .into_iter()
        .map(|c| {
            let def = &c.category.criteria()[c.index];
            ProfileEntry {
                category: c.category,
                key: def.key,
                title: def.title,
                short_title: def.short_title,
                score: c.score,
                maximum: CRITERION_MAX as f64,
                provided: None,
                note: c.note,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub index: usize,
    pub name: String,
    pub score: f64,
    pub maximum: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSummary {
    pub name: String,
    pub categories: Vec<CategorySummary>,
    pub overall: f64,
    pub maximum: f64,
    pub overall_percentage: u32,
    pub sustainability_percentage: f64,
    pub strongest: String,
    pub weakest: String,
}

pub fn summarize(
    name: &str,
    categories: &[CategoryInput],
) -> Result<ProjectSummary, ProjectError> {
    let overall_pct = overall_percentage(categories)?;

    let summaries: Vec<CategorySummary> = categories
        .iter()
        .enumerate()
        .map(|(index, c)| CategorySummary {
            index,
            name: c.name.clone(),
            score: c.score,
            maximum: c.maximum,
            percentage: c.score / c.maximum,
        })
        .collect();

    let overall: f64 = categories.iter().map(|c| c.score).sum();
    let maximum: f64 = categories.iter().map(|c| c.maximum).sum();

    let mut strongest = 0usize;
    let mut weakest = 0usize;
    for (i, c) in summaries.iter().enumerate() {
        if c.percentage > summaries[strongest].percentage {
            strongest = i;
        }
        if c.percentage < summaries[weakest].percentage {
            weakest = i;
        }
    }

    Ok(ProjectSummary {
        name: name.to_string(),
        strongest: summaries[strongest].name.clone(),
        weakest: summaries[weakest].name.clone(),
        categories: summaries,
        overall,
        maximum,
        overall_percentage: overall_pct,
        sustainability_percentage: round_half_up_to(percent_of(overall, maximum), 1),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedProject {
    pub rank: usize,
    #[serde(flatten)]
    pub summary: ProjectSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    #[error("comparison needs at least 2 projects, got {0}")]
    TooFewProjects(usize),
}

/// Orders by overall score (descending), then name, then input position.
pub fn compare(projects: Vec<ProjectSummary>) -> Result<Vec<RankedProject>, CompareError> {
    if projects.len() < 2 {
        return Err(CompareError::TooFewProjects(projects.len()));
    }
    let mut projects = projects;
    projects.sort_by(|a, b| {
        b.overall
            .total_cmp(&a.overall)
            .then_with(|| a.name.cmp(&b.name))
    });
    Ok(projects
        .into_iter()
        .enumerate()
        .map(|(i, summary)| RankedProject {
            rank: i + 1,
            summary,
        })
        .collect())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_profile.rs"]
mod tests;
