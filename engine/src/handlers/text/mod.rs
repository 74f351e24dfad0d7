//! Extracts text fields at fixed page coordinates.


use anyhow::Result;
use indexmap::IndexMap;
use regex::Regex;

use super::ObjectHandler;
use crate::{
    config::{ObjectSpec, Pattern, TextObject},
    document::{Color, Document},
    error::ConfigurationError,
    geometry::Rect,
    result::{Extracted, ExtractedValue},
};

/// Handles [ObjectSpec::Text] objects.
pub struct TextHandler;

impl ObjectHandler for TextHandler {
    fn handle(
        &self,
        document: &mut dyn Document,
        object: &ObjectSpec,
        annotate: bool,
    ) -> Result<Extracted> {
        let text_object: &TextObject = object.try_into()?;
        let patterns = match &text_object.patterns {
            Some(patterns) => Some(compile_patterns(patterns)?),
            None => None,
        };

        let rect = field_rect(text_object);
        let text = document.text(&rect)?;
        if annotate {
            document.annotate(&rect, Color::FIELD)?;
        }

        Ok(match patterns {
            None => Extracted::Value(ExtractedValue::Text(text)),
            Some(patterns) => Extracted::Fields(
                patterns
                    .into_iter()
                    .map(|(target, regex)| (target, capture(&regex, &text)))
                    .collect(),
            ),
        })
    }
}

/// Region of a text field. Its offset is relative to the top-left of its page.
pub fn field_rect(text_object: &TextObject) -> Rect {
    Rect::from_origin(
        text_object.page_number,
        text_object.offset.x,
        text_object.offset.y,
        text_object.dimensions,
    )
}

fn compile_patterns(patterns: &[Pattern]) -> Result<IndexMap<String, Regex>, ConfigurationError> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(&pattern.regex)
                .map(|regex| (pattern.target.clone(), regex))
                .map_err(|source| ConfigurationError::InvalidPattern {
                    target: pattern.target.clone(),
                    source,
                })
        })
        .collect()
}

/// Capture group 1 of the first match, or [ExtractedValue::Absent].
fn capture(regex: &Regex, text: &str) -> ExtractedValue {
    regex
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|group| ExtractedValue::Text(group.as_str().to_owned()))
        .unwrap_or(ExtractedValue::Absent)
}
