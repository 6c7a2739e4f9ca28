use crate::input::detected::Priority;
use crate::model::taxonomy::{Category, SUBCRITERIA_PER_CRITERION};
use crate::report::{SummaryData, format_fraction_pct, format_score};

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();
    let s = &data.summary;

    out.push_str("AUG Sustainability Report\n");
    out.push_str("=========================\n\n");

    out.push_str(&format!("Project: {}\n", s.name));
    if let Some(location) = &data.project.location {
        out.push_str(&format!("Location: {}\n", location));
    }
    if let Some(architect) = &data.project.architect {
        out.push_str(&format!("Architect: {}\n", architect));
    }
    if let Some(year) = data.project.year {
        out.push_str(&format!("Year: {}\n", year));
    }
    out.push_str(&format!("Source: {}\n\n", data.source));

    out.push_str("1. Overall\n");
    out.push_str(&format!(
        "Score: {} / {} ({}%)\n",
        format_score(s.overall),
        format_score(s.maximum),
        s.overall_percentage
    ));
    out.push_str(&format!(
        "Sustainability: {:.1}%\n",
        s.sustainability_percentage
    ));
    out.push_str(&format!("Strongest category: {}\n", s.strongest));
    out.push_str(&format!("Weakest category: {}\n", s.weakest));
    if let Some(c) = data.completeness {
        if c.provided == 0 {
            out.push_str("Completeness: not yet scored\n");
        } else {
            out.push_str(&format!(
                "Completeness: {} / {} subcriteria scored\n",
                c.provided, c.total
            ));
        }
    }
    out.push('\n');

    out.push_str("2. Categories\n");
    for c in &s.categories {
        out.push_str(&format!(
            "{:<14} {:>5} / {:<4} {}\n",
            c.name,
            format_score(c.score),
            format_score(c.maximum),
            format_fraction_pct(c.percentage)
        ));
    }
    out.push('\n');

    out.push_str("3. Criteria\n");
    if data.profile.is_empty() {
        out.push_str("No criterion scores available.\n");
    }
    for category in Category::ALL {
        let rows: Vec<_> = data
            .profile
            .iter()
            .filter(|p| p.category == category)
            .collect();
        if rows.is_empty() {
            continue;
        }
        out.push_str(&format!("{}\n", category.title()));
        for p in rows {
            out.push_str(&format!(
                "  {:<30} {:>4} / {}",
                p.title,
                format_score(p.score),
                format_score(p.maximum)
            ));
            if let Some(provided) = p.provided {
                out.push_str(&format!(
                    "  ({}/{} entered)",
                    provided, SUBCRITERIA_PER_CRITERION
                ));
            }
            out.push('\n');
            if let Some(note) = &p.note {
                out.push_str(&format!("    {}\n", note));
            }
        }
    }

    if !data.recommendations.is_empty() {
        out.push_str("\n4. Recommendations\n");
        for r in &data.recommendations {
            out.push_str(&format!(
                "[{}] {}: {}\n",
                priority_label(r.priority),
                r.category,
                r.suggestion
            ));
        }
    }

    if !data.insights.is_empty() {
        out.push_str("\n5. Insights\n");
        for i in &data.insights {
            out.push_str(&format!("- {}\n", i));
        }
    }

    out
}

fn priority_label(p: Priority) -> &'static str {
    match p {
        Priority::High => "High",
        Priority::Medium => "Medium",
        Priority::Low => "Low",
    }
}
