//! Three-spoke compass projection.
//!
//! A fixed three-spoke layout, not a general N-gon radar: spokes sit 120
//! degrees apart with index 0 pointing north. Input position is the category
//! identity, so entries are never reordered.

use thiserror::Error;

use crate::model::config::CompassProfile;
use crate::model::geometry::{
    CategoryInput, CompassGeometry, LabelAnchor, PlotPoint, Point, RingLevel, Spoke,
};
use crate::model::numeric::{clip01, percent_of, round_half_up};
use crate::model::taxonomy::CATEGORY_COUNT;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectError {
    #[error("compass needs exactly {expected} categories, got {actual}")]
    InvalidCategoryCount { expected: usize, actual: usize },
    #[error("category {name} has maximum {maximum}; maximum must be > 0")]
    DivisionByZero { name: String, maximum: f64 },
    #[error("category {name} has non-finite score")]
    NonFiniteScore { name: String },
    #[error("canvas size must be finite and > 0, got {0}")]
    InvalidCanvasSize(f64),
    #[error("invalid compass profile: {0}")]
    InvalidProfile(String),
}

pub fn project(
    categories: &[CategoryInput],
    canvas_size: f64,
) -> Result<CompassGeometry, ProjectError> {
    project_with_profile(categories, canvas_size, &CompassProfile::default_v1())
}

pub fn project_with_profile(
    categories: &[CategoryInput],
    canvas_size: f64,
    profile: &CompassProfile,
) -> Result<CompassGeometry, ProjectError> {
    profile.validate().map_err(ProjectError::InvalidProfile)?;
    if !(canvas_size.is_finite() && canvas_size > 0.0) {
        return Err(ProjectError::InvalidCanvasSize(canvas_size));
    }
    let entries = check_entries(categories)?;

    let percentages = entries.map(|c| clip01(c.score / c.maximum));
    let angles = std::array::from_fn::<f64, CATEGORY_COUNT, _>(|i| profile.spoke_angle_deg(i));

    let half = canvas_size * 0.5;
    let center = Point { x: half, y: half };
    let max_radius = profile.max_radius(canvas_size);
    let label_radius = profile.label_radius(canvas_size);

    let rings = profile.ring_levels.map(|level| RingLevel {
        level,
        radius: max_radius * level,
    });

    let spokes = std::array::from_fn(|i| Spoke {
        index: i,
        angle_deg: angles[i],
        start: center,
        end: Point::polar(center, max_radius, angles[i].to_radians()),
    });

    let polygon = std::array::from_fn(|i| {
        let radius = max_radius * percentages[i];
        PlotPoint {
            index: i,
            percentage: percentages[i],
            radius,
            position: Point::polar(center, radius, angles[i].to_radians()),
        }
    });

    let labels = std::array::from_fn(|i| LabelAnchor {
        index: i,
        name: entries[i].name.clone(),
        score: entries[i].score,
        maximum: entries[i].maximum,
        position: Point::polar(center, label_radius, angles[i].to_radians()),
    });

    Ok(CompassGeometry {
        canvas_size,
        center,
        max_radius,
        label_radius,
        rings,
        spokes,
        polygon,
        labels,
        overall_percentage: overall_percentage_checked(&entries),
    })
}

/// `round(sum(scores) / sum(maxima) * 100)`, half-up.
pub fn overall_percentage(categories: &[CategoryInput]) -> Result<u32, ProjectError> {
    let entries = check_entries(categories)?;
    Ok(overall_percentage_checked(&entries))
}

fn overall_percentage_checked(entries: &[&CategoryInput; CATEGORY_COUNT]) -> u32 {
    let score: f64 = entries.iter().map(|c| c.score).sum();
    let maximum: f64 = entries.iter().map(|c| c.maximum).sum();
    round_half_up(percent_of(score, maximum)) as u32
}

fn check_entries(
    categories: &[CategoryInput],
) -> Result<[&CategoryInput; CATEGORY_COUNT], ProjectError> {
    let entries: [&CategoryInput; CATEGORY_COUNT] = match categories {
        [a, b, c] => [a, b, c],
        _ => {
            return Err(ProjectError::InvalidCategoryCount {
                expected: CATEGORY_COUNT,
                actual: categories.len(),
            });
        }
    };
    for entry in entries {
        if !(entry.maximum > 0.0) {
            return Err(ProjectError::DivisionByZero {
                name: entry.name.clone(),
                maximum: entry.maximum,
            });
        }
        if !entry.score.is_finite() {
            return Err(ProjectError::NonFiniteScore {
                name: entry.name.clone(),
            });
        }
    }
    Ok(entries)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_project.rs"]
mod tests;
