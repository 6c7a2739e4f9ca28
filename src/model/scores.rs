use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::geometry::CategoryInput;
use crate::model::numeric::{percent_of, percent_round_u32, round_half_up_to};
use crate::model::taxonomy::{
    CATEGORY_COUNT, CRITERIA_PER_CATEGORY, Category, CriterionDef, SUBCRITERIA_PER_CRITERION,
    SubcriterionDef, SubcriterionKey,
};

pub const SUBCRITERION_MAX: u8 = 5;
pub const CRITERION_MAX: u8 = SUBCRITERION_MAX * SUBCRITERIA_PER_CRITERION as u8;
pub const CATEGORY_MAX: u16 = CRITERION_MAX as u16 * CRITERIA_PER_CATEGORY as u16;
pub const OVERALL_MAX: u16 = CATEGORY_MAX * CATEGORY_COUNT as u16;
pub const SUBCRITERION_COUNT: usize =
    CATEGORY_COUNT * CRITERIA_PER_CATEGORY * SUBCRITERIA_PER_CRITERION;

/// Raw form entries. A key that is absent was not provided.
pub type ScoreInputs = BTreeMap<SubcriterionKey, i64>;

/// A subcriterion value known to be within `0..=SUBCRITERION_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct SubScore(u8);

impl SubScore {
    pub const ZERO: SubScore = SubScore(0);

    pub fn new(raw: i64) -> Option<Self> {
        if (0..=SUBCRITERION_MAX as i64).contains(&raw) {
            Some(SubScore(raw as u8))
        } else {
            None
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubcriterionScore {
    key: &'static str,
    label: &'static str,
    value: SubScore,
    was_provided: bool,
}

impl SubcriterionScore {
    pub fn provided(def: &'static SubcriterionDef, value: SubScore) -> Self {
        Self {
            key: def.key,
            label: def.label,
            value,
            was_provided: true,
        }
    }

    /// Counts as zero in every total.
    pub fn missing(def: &'static SubcriterionDef) -> Self {
        Self {
            key: def.key,
            label: def.label,
            value: SubScore::ZERO,
            was_provided: false,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn value(&self) -> u8 {
        self.value.get()
    }

    pub fn was_provided(&self) -> bool {
        self.was_provided
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriterionScore {
    key: &'static str,
    title: &'static str,
    total: u8,
    subcriteria: [SubcriterionScore; SUBCRITERIA_PER_CRITERION],
}

impl CriterionScore {
    pub fn from_subcriteria(
        def: &'static CriterionDef,
        subcriteria: [SubcriterionScore; SUBCRITERIA_PER_CRITERION],
    ) -> Self {
        let total = subcriteria.iter().map(|s| s.value()).sum();
        Self {
            key: def.key,
            title: def.title,
            total,
            subcriteria,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn total(&self) -> u8 {
        self.total
    }

    pub fn maximum(&self) -> u8 {
        CRITERION_MAX
    }

    pub fn subcriteria(&self) -> &[SubcriterionScore; SUBCRITERIA_PER_CRITERION] {
        &self.subcriteria
    }

    pub fn provided_count(&self) -> usize {
        self.subcriteria.iter().filter(|s| s.was_provided()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    category: Category,
    total: u16,
    criteria: [CriterionScore; CRITERIA_PER_CATEGORY],
}

impl CategoryScore {
    pub fn from_criteria(
        category: Category,
        criteria: [CriterionScore; CRITERIA_PER_CATEGORY],
    ) -> Self {
        let total = criteria.iter().map(|c| c.total() as u16).sum();
        Self {
            category,
            total,
            criteria,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn total(&self) -> u16 {
        self.total
    }

    pub fn maximum(&self) -> u16 {
        CATEGORY_MAX
    }

    pub fn criteria(&self) -> &[CriterionScore; CRITERIA_PER_CATEGORY] {
        &self.criteria
    }

    pub fn percentage(&self) -> f64 {
        self.total as f64 / CATEGORY_MAX as f64
    }

    pub fn provided_count(&self) -> usize {
        self.criteria.iter().map(|c| c.provided_count()).sum()
    }
}

/// Result of one analysis run. Owned by the caller; re-analysis builds a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedScore {
    categories: [CategoryScore; CATEGORY_COUNT],
    overall: u16,
}

impl AggregatedScore {
    /// `categories` must be in spoke order.
    pub fn from_categories(categories: [CategoryScore; CATEGORY_COUNT]) -> Self {
        debug_assert!(
            categories
                .iter()
                .zip(Category::ALL)
                .all(|(c, expected)| c.category() == expected)
        );
        let overall = categories.iter().map(|c| c.total()).sum();
        Self {
            categories,
            overall,
        }
    }

    pub fn categories(&self) -> &[CategoryScore; CATEGORY_COUNT] {
        &self.categories
    }

    pub fn category(&self, category: Category) -> &CategoryScore {
        &self.categories[category.index()]
    }

    pub fn criteria(&self) -> impl Iterator<Item = (Category, &CriterionScore)> {
        self.categories
            .iter()
            .flat_map(|cat| cat.criteria().iter().map(move |c| (cat.category(), c)))
    }

    pub fn subcriteria(&self) -> impl Iterator<Item = (SubcriterionKey, &SubcriterionScore)> {
        self.categories.iter().flat_map(|cat| {
            cat.criteria().iter().enumerate().flat_map(move |(ci, c)| {
                c.subcriteria()
                    .iter()
                    .enumerate()
                    .map(move |(si, s)| (SubcriterionKey::at(cat.category(), ci, si), s))
            })
        })
    }

    pub fn overall(&self) -> u16 {
        self.overall
    }

    pub fn maximum(&self) -> u16 {
        OVERALL_MAX
    }

    /// Headline number, whole percent rounded half-up.
    pub fn overall_percentage(&self) -> u32 {
        percent_round_u32(self.overall as u32, OVERALL_MAX as u32)
    }

    /// One decimal place, rounded half-up.
    pub fn sustainability_percentage(&self) -> f64 {
        round_half_up_to(percent_of(self.overall as f64, OVERALL_MAX as f64), 1)
    }

    pub fn provided_count(&self) -> usize {
        self.categories.iter().map(|c| c.provided_count()).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.provided_count() == SUBCRITERION_COUNT
    }

    /// Projector input in spoke order.
    pub fn category_inputs(&self) -> Vec<CategoryInput> {
        self.categories
            .iter()
            .map(|c| CategoryInput {
                name: c.category().title().to_string(),
                score: c.total() as f64,
                maximum: CATEGORY_MAX as f64,
            })
            .collect()
    }
}
