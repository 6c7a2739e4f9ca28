use serde::Serialize;

use crate::model::taxonomy::taxonomy_doc;
use crate::pipeline::stage4_profile::RankedProject;
use crate::report::SummaryData;

pub fn render_summary_json(data: &SummaryData) -> serde_json::Result<String> {
    to_pretty(data)
}

#[derive(Serialize)]
struct ComparisonDoc<'a> {
    tool: &'a str,
    version: &'a str,
    projects: &'a [RankedProject],
}

pub fn render_comparison_json(ranked: &[RankedProject]) -> serde_json::Result<String> {
    to_pretty(&ComparisonDoc {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        projects: ranked,
    })
}

pub fn render_taxonomy_json() -> serde_json::Result<String> {
    to_pretty(&taxonomy_doc())
}

fn to_pretty<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}
