use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod detected;
pub mod responses;

use detected::{DetectedAnalysis, DetectedDoc};
use responses::ResponsesDoc;

use crate::model::scores::ScoreInputs;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unknown {category} response key: {key}")]
    UnknownKey { category: &'static str, key: String },
}

/// Descriptive project fields; carried to reports, never scored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectMeta {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub architect: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
}

impl ProjectMeta {
    pub fn display_name(&self, fallback: &str) -> String {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

#[derive(Debug, Clone)]
pub enum AnalysisSource {
    /// Form entries for the scoring model.
    Manual(ScoreInputs),
    /// Category scores from an external analysis, fed straight to the projector.
    Detected(DetectedAnalysis),
}

impl AnalysisSource {
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisSource::Manual(_) => "manual",
            AnalysisSource::Detected(_) => "detected",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisDocument {
    pub meta: ProjectMeta,
    pub source: AnalysisSource,
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn load_document(path: &Path) -> Result<AnalysisDocument, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(path.display().to_string()));
    }
    let mut reader = open_maybe_gz(path)?;
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let doc = parse_document(&text)?;
    tracing::info!(
        path = %path.display(),
        kind = doc.source.kind(),
        "loaded analysis document"
    );
    Ok(doc)
}

/// Detected documents carry `categories`; manual ones carry only `project` and
/// `*_responses` blocks, any of which may be absent.
pub fn parse_document(text: &str) -> Result<AnalysisDocument, InputError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let Some(object) = value.as_object() else {
        return Err(InputError::InvalidInput(
            "analysis document must be a JSON object".to_string(),
        ));
    };

    if object.contains_key("categories") {
        let doc: DetectedDoc = serde_json::from_value(value)?;
        let meta = doc.project.clone();
        let analysis = detected::into_analysis(doc)?;
        return Ok(AnalysisDocument {
            meta,
            source: AnalysisSource::Detected(analysis),
        });
    }

    // A manual document may carry no blocks yet (nothing scored).
    if object
        .keys()
        .all(|k| k == "project" || k.ends_with("_responses"))
    {
        let doc: ResponsesDoc = serde_json::from_value(value)?;
        let meta = doc.project.clone();
        let inputs = responses::into_score_inputs(&doc)?;
        return Ok(AnalysisDocument {
            meta,
            source: AnalysisSource::Manual(inputs),
        });
    }

    Err(InputError::InvalidInput(
        "expected either `categories` or only `project` and `<category>_responses` blocks".to_string(),
    ))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
