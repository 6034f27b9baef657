//! Splits a command line into named fields.
//!
//! A format is an ordered list of markers. The first marker is the command
//! keyword and keys the free-text name that follows it; every other marker is a
//! `/flag` whose value runs until the next recognised flag. Flags suffixed with
//! `:optional` may be left out.

use std::collections::HashMap;

use crate::errors::ParseError;

pub const OPTIONAL_SUFFIX: &str = ":optional";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Field<'f> {
    marker: &'f str,
    required: bool,
}

impl<'f> Field<'f> {
    fn parse(raw: &'f str) -> Self {
        match raw.strip_suffix(OPTIONAL_SUFFIX) {
            Some(marker) => Self {
                marker,
                required: false,
            },
            None => Self {
                marker: raw,
                required: true,
            },
        }
    }
}

/// Field values extracted from one line, keyed by marker (without `:optional`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    values: HashMap<String, String>,
}

impl Tokens {
    pub fn get(&self, marker: &str) -> Option<&str> {
        self.values.get(marker).map(String::as_str)
    }

    /// Value of `marker`, treating an empty value like an absent one.
    pub fn non_empty(&self, marker: &str) -> Option<&str> {
        self.get(marker).filter(|value| !value.is_empty())
    }
}

pub fn tokenize(line: &str, format: &[&str]) -> Result<Tokens, ParseError> {
    let Some((keyword, rest)) = format.split_first() else {
        return Ok(Tokens::default());
    };
    let flags: Vec<Field<'_>> = rest.iter().map(|raw| Field::parse(raw)).collect();

    let line = line.trim();
    if line.split_whitespace().next() != Some(*keyword) {
        return Err(ParseError::MissingField((*keyword).to_string()));
    }
    let body = &line[keyword.len()..];
    if body.trim().is_empty() && flags.iter().any(|field| field.required) {
        return Err(ParseError::MissingContent((*keyword).to_string()));
    }

    let spans = token_spans(body);
    let mut found: Vec<(usize, usize, &str)> = flags
        .iter()
        .filter_map(|field| {
            spans
                .iter()
                .find(|(start, end)| &body[*start..*end] == field.marker)
                .map(|(start, end)| (*start, *end, field.marker))
        })
        .collect();
    found.sort_by_key(|(start, _, _)| *start);

    let mut values = HashMap::new();
    let name_end = found.first().map_or(body.len(), |(start, _, _)| *start);
    values.insert((*keyword).to_string(), body[..name_end].trim().to_string());

    for (position, (_, end, marker)) in found.iter().enumerate() {
        let value_end = found
            .get(position + 1)
            .map_or(body.len(), |(next_start, _, _)| *next_start);
        values.insert((*marker).to_string(), body[*end..value_end].trim().to_string());
    }

    if let Some(missing) = flags
        .iter()
        .find(|field| field.required && !values.contains_key(field.marker))
    {
        return Err(ParseError::MissingField(missing.marker.to_string()));
    }

    tracing::trace!(keyword = *keyword, fields = values.len(), "tokenized line");
    Ok(Tokens { values })
}

// Byte ranges of whitespace-delimited tokens.
fn token_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;
    for (index, ch) in text.char_indices() {
        match (ch.is_whitespace(), start) {
            (true, Some(begin)) => {
                spans.push((begin, index));
                start = None;
            }
            (false, None) => start = Some(index),
            _ => {}
        }
    }
    if let Some(begin) = start {
        spans.push((begin, text.len()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADD_FORMAT: [&str; 3] = ["addIncome", "/amt", "/date:optional"];

    #[test]
    fn splits_name_and_flags() {
        let tokens = tokenize(
            "addIncome pocket money /amt 200 /date 10/10/2023",
            &ADD_FORMAT,
        )
        .unwrap();
        assert_eq!(tokens.get("addIncome"), Some("pocket money"));
        assert_eq!(tokens.get("/amt"), Some("200"));
        assert_eq!(tokens.get("/date"), Some("10/10/2023"));
    }

    #[test]
    fn flag_order_does_not_matter() {
        let tokens = tokenize("addIncome gift /date 01/01/2024 /amt 5", &ADD_FORMAT).unwrap();
        assert_eq!(tokens.get("/amt"), Some("5"));
        assert_eq!(tokens.get("/date"), Some("01/01/2024"));
    }

    #[test]
    fn optional_flags_may_be_absent() {
        let tokens = tokenize("addIncome gift /amt 5", &ADD_FORMAT).unwrap();
        assert_eq!(tokens.get("/date"), None);
        assert_eq!(tokens.non_empty("/date"), None);
    }

    #[test]
    fn missing_required_flag_is_an_error() {
        let err = tokenize("addIncome gift /date 01/01/2024", &ADD_FORMAT).unwrap_err();
        assert_eq!(err, ParseError::MissingField("/amt".into()));
    }

    #[test]
    fn bare_keyword_needs_content_when_fields_are_required() {
        let err = tokenize("addIncome   ", &ADD_FORMAT).unwrap_err();
        assert_eq!(err, ParseError::MissingContent("addIncome".into()));

        let all_optional = ["findExpense", "/amt:optional"];
        let tokens = tokenize("findExpense", &all_optional).unwrap();
        assert_eq!(tokens.get("findExpense"), Some(""));
    }

    #[test]
    fn markers_inside_words_are_plain_text() {
        let tokens = tokenize("addIncome a/amt b /amt 3", &ADD_FORMAT).unwrap();
        assert_eq!(tokens.get("addIncome"), Some("a/amt b"));
        assert_eq!(tokens.get("/amt"), Some("3"));
    }

    #[test]
    fn repeated_markers_belong_to_the_preceding_value() {
        let tokens = tokenize("addIncome gift /amt 3 /amt 4", &ADD_FORMAT).unwrap();
        assert_eq!(tokens.get("/amt"), Some("3 /amt 4"));
    }

    #[test]
    fn empty_values_are_kept() {
        let tokens = tokenize("addIncome /amt", &ADD_FORMAT).unwrap();
        assert_eq!(tokens.get("addIncome"), Some(""));
        assert_eq!(tokens.get("/amt"), Some(""));
        assert_eq!(tokens.non_empty("/amt"), None);
    }
}
