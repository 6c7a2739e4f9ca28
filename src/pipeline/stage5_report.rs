use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::input::{AnalysisDocument, AnalysisSource};
use crate::model::config::CompassProfile;
use crate::model::geometry::CategoryInput;
use crate::model::scores::{AggregatedScore, SUBCRITERION_COUNT};
use crate::pipeline::stage2_score::{ScoreError, score};
use crate::pipeline::stage3_project::{ProjectError, project_with_profile};
use crate::pipeline::stage4_profile::{
    ProjectSummary, RankedProject, criterion_profile, detected_profile, summarize,
};
use crate::report::json::{render_comparison_json, render_summary_json};
use crate::report::svg::render_compass_svg;
use crate::report::text::render_report_text;
use crate::report::{Completeness, Palette, SummaryData, format_score, tsv_cell};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error(transparent)]
    Project(#[from] ProjectError),
}

/// Projector inputs for either source; manual documents go through `score()`.
fn category_view(
    source: &AnalysisSource,
) -> Result<(Vec<CategoryInput>, Option<AggregatedScore>), ScoreError> {
    match source {
        AnalysisSource::Manual(inputs) => {
            let agg = score(inputs)?;
            Ok((agg.category_inputs(), Some(agg)))
        }
        AnalysisSource::Detected(analysis) => Ok((analysis.categories.clone(), None)),
    }
}

pub fn summarize_document(
    doc: &AnalysisDocument,
    fallback_name: &str,
) -> Result<ProjectSummary, AnalysisError> {
    let (categories, _) = category_view(&doc.source)?;
    Ok(summarize(&doc.meta.display_name(fallback_name), &categories)?)
}

pub fn build_summary(
    doc: &AnalysisDocument,
    fallback_name: &str,
    profile: &CompassProfile,
    canvas_size: f64,
) -> Result<SummaryData, AnalysisError> {
    let (categories, scores) = category_view(&doc.source)?;
    let compass = project_with_profile(&categories, canvas_size, profile)?;
    let summary = summarize(&doc.meta.display_name(fallback_name), &categories)?;

    let (profile_rows, recommendations, insights) = match &doc.source {
        AnalysisSource::Manual(_) => (
            scores.as_ref().map(criterion_profile).unwrap_or_default(),
            Vec::new(),
            Vec::new(),
        ),
        AnalysisSource::Detected(a) => (
            detected_profile(&a.criteria),
            a.recommendations.clone(),
            a.insights.clone(),
        ),
    };
    let completeness = scores.as_ref().map(|agg| Completeness {
        provided: agg.provided_count(),
        total: SUBCRITERION_COUNT,
    });

    Ok(SummaryData {
        tool: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        project: doc.meta.clone(),
        source: doc.source.kind().to_string(),
        summary,
        completeness,
        profile: profile_rows,
        scores,
        recommendations,
        insights,
        compass,
    })
}

pub fn write_reports(data: &SummaryData, out_dir: &Path, palette: Palette) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    let summary_path = out_dir.join("summary.json");
    write_text(&summary_path, &render_summary_json(data)?)?;

    let criteria_path = out_dir.join("criteria.tsv");
    write_criteria_tsv(data, &criteria_path)?;

    let report_path = out_dir.join("report.txt");
    write_text(&report_path, &render_report_text(data))?;

    let svg_path = out_dir.join("compass.svg");
    write_text(&svg_path, &render_compass_svg(&data.compass, palette))?;

    tracing::info!(
        out = %out_dir.display(),
        project = %data.summary.name,
        overall = data.summary.overall,
        "wrote summary.json, criteria.tsv, report.txt, compass.svg"
    );
    Ok(())
}

fn write_criteria_tsv(data: &SummaryData, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "category\tkey\ttitle\tscore\tmaximum\tprovided")?;
    for p in &data.profile {
        let provided = p.provided.map(|n| n.to_string()).unwrap_or_default();
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}",
            p.category.key(),
            p.key,
            tsv_cell(p.title),
            format_score(p.score),
            format_score(p.maximum),
            provided
        )?;
    }
    w.flush()
}

pub fn write_comparison(ranked: &[RankedProject], out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    let json_path = out_dir.join("comparison.json");
    write_text(&json_path, &render_comparison_json(ranked)?)?;

    let tsv_path = out_dir.join("comparison.tsv");
    let mut w = BufWriter::new(File::create(&tsv_path)?);
    writeln!(
        w,
        "rank\tname\tarchitectural\turban\tgreen\toverall\tmaximum\toverall_percentage\tsustainability_percentage"
    )?;
    for r in ranked {
        let s = &r.summary;
        let cat = |i: usize| {
            s.categories
                .get(i)
                .map(|c| format_score(c.score))
                .unwrap_or_default()
        };
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{:.1}",
            r.rank,
            tsv_cell(&s.name),
            cat(0),
            cat(1),
            cat(2),
            format_score(s.overall),
            format_score(s.maximum),
            s.overall_percentage,
            s.sustainability_percentage
        )?;
    }
    w.flush()?;

    tracing::info!(
        out = %out_dir.display(),
        projects = ranked.len(),
        "wrote comparison.json, comparison.tsv"
    );
    Ok(())
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
