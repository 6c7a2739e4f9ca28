use clap::ValueEnum;
use serde::Serialize;

use crate::input::ProjectMeta;
use crate::input::detected::Recommendation;
use crate::model::geometry::CompassGeometry;
use crate::model::scores::AggregatedScore;
use crate::pipeline::stage4_profile::{ProfileEntry, ProjectSummary};

pub mod json;
pub mod svg;
pub mod text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    #[default]
    Light,
    Dark,
}

#[derive(Debug)]
pub struct Colors {
    pub background: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    /// Marker and letter colours, in spoke order.
    pub categories: [&'static str; 3],
    pub grid: &'static str,
    pub accent: &'static str,
}

static LIGHT: Colors = Colors {
    background: "#ffffff",
    border: "#e2e8f0",
    text: "#1e293b",
    text_muted: "#64748b",
    categories: ["#10b981", "#3b82f6", "#059669"],
    grid: "#f1f5f9",
    accent: "#6366f1",
};

static DARK: Colors = Colors {
    background: "#1e293b",
    border: "#475569",
    text: "#f1f5f9",
    text_muted: "#cbd5e1",
    categories: ["#34d399", "#60a5fa", "#10b981"],
    grid: "#334155",
    accent: "#8b5cf6",
};

impl Palette {
    pub fn colors(self) -> &'static Colors {
        match self {
            Palette::Light => &LIGHT,
            Palette::Dark => &DARK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Completeness {
    pub provided: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: String,
    pub version: String,
    pub project: ProjectMeta,
    pub source: String,
    #[serde(flatten)]
    pub summary: ProjectSummary,
    /// Manual analyses only.
    pub completeness: Option<Completeness>,
    pub profile: Vec<ProfileEntry>,
    pub scores: Option<AggregatedScore>,
    pub recommendations: Vec<Recommendation>,
    pub insights: Vec<String>,
    pub compass: CompassGeometry,
}

/// Whole scores print bare, fractional ones with one decimal.
pub fn format_score(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{:.1}", v)
    }
}

/// A 0..1 fraction as a one-decimal percentage.
pub fn format_fraction_pct(v: f64) -> String {
    format!("{:.1}%", v * 100.0)
}

pub fn format_coord(v: f64) -> String {
    format!("{:.2}", v)
}

/// Replaces the characters that cannot appear verbatim in XML text or TSV cells.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn tsv_cell(s: &str) -> String {
    s.replace(['\t', '\n', '\r'], " ")
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
