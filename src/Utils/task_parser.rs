/// parse document with structure like " title1 key1: value1, value2 key2: value2 title2 key3:value3, value4" which has titles and
/// pairs key-vector of values into HashMap<String, HashMap<String, Option<Vec<Value>>>>.
/// If some field i.e field_x is listed in a template but not found in the document it will be field_x:None.
/// Values containing spaces must be double quoted: title: "Grid Size".
/// Lines starting with //, #, % or ; are comments.
use crate::charts::{PlotError, Result};
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{alpha1, alphanumeric1, char, multispace0, space0},
    combinator::{map, recognize},
    multi::{many0, many1, separated_list0},
    sequence::{delimited, pair, separated_pair, terminated},
};
use std::collections::HashMap;
use std::fmt::Display;

pub type DocumentMap = HashMap<String, SectionMap>;
pub type SectionMap = HashMap<String, Option<Vec<Value>>>;

/// enum to represent different value types:
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Float(f64),
    Integer(i64),
    Boolean(bool),
}

impl Value {
    pub fn as_integer(&self) -> Option<i64> {
        if let Value::Integer(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        if let Value::Boolean(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    pub fn to_string_value(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Float(f) => f.to_string(),
            Value::Integer(i) => i.to_string(),
            Value::Boolean(b) => b.to_string(),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Float(val) => write!(f, "{}", val),
            Value::Integer(val) => write!(f, "{}", val),
            Value::Boolean(val) => write!(f, "{}", val),
        }
    }
}

fn identifier(input: &str) -> IResult<&str, String> {
    let parser = recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ));
    map(parser, String::from).parse(input)
}

/// Parses a title (word characters without spaces)
pub(crate) fn parse_title(input: &str) -> IResult<&str, String> {
    let (input, result) = identifier(input)?;
    Ok((input.trim(), result))
}

/// Parses a key (word characters without spaces)
pub(crate) fn parse_key(input: &str) -> IResult<&str, String> {
    identifier(input)
}

fn parse_quoted(input: &str) -> IResult<&str, Value> {
    map(
        delimited(char('"'), take_while(|c: char| c != '"'), char('"')),
        |s: &str| Value::String(s.to_string()),
    )
    .parse(input)
}

fn parse_bare(input: &str) -> IResult<&str, Value> {
    // a single value - excluding commas, whitespace, newlines, and semicolons
    let value_parser = take_while1(|c: char| !matches!(c, ',' | ' ' | '\t' | '\n' | '\r' | ';'));
    map(value_parser, |s: &str| {
        // Try parsing as different types in order
        if let Ok(val) = s.parse::<i64>() {
            Value::Integer(val)
        } else if let Ok(val) = s.parse::<f64>() {
            Value::Float(val)
        } else if let Ok(val) = s.parse::<bool>() {
            Value::Boolean(val)
        } else {
            Value::String(s.to_string())
        }
    })
    .parse(input)
}

pub(crate) fn parse_value(input: &str) -> IResult<&str, Value> {
    alt((parse_quoted, parse_bare)).parse(input)
}

pub(crate) fn parse_value_list(input: &str) -> IResult<&str, Vec<Value>> {
    let separator_coma = delimited(space0, tag(","), space0);
    separated_list0(separator_coma, parse_value).parse(input)
}

/// Parses a key-value pair where value is a list
pub(crate) fn parse_key_value_pair(input: &str) -> IResult<&str, (String, Vec<Value>)> {
    let colon_separator = delimited(space0, tag(":"), space0);
    let (input, result) =
        separated_pair(parse_key, colon_separator, parse_value_list).parse(input)?;
    Ok((input.trim(), result))
}

/// Parses a section with a title and one or more key-value pairs
pub(crate) fn parse_section(input: &str) -> IResult<&str, (String, HashMap<String, Vec<Value>>)> {
    let (input, _) = space0(input)?;
    let (input, title) = parse_title(input)?;
    let (input, _) = multispace0(input)?;
    let (input, pairs) = many1(terminated(parse_key_value_pair, space0)).parse(input)?;

    let section_map = pairs.into_iter().collect();
    Ok((input, (title, section_map)))
}

/// Filters out comment lines (starting with //, #, %, or ;) and blank lines
pub fn filter_comments(input: &str) -> String {
    input
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("//")
                && !trimmed.starts_with('#')
                && !trimmed.starts_with('%')
                && !trimmed.starts_with(';')
                && !trimmed.is_empty()
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Parses the entire (comment free) document into a HashMap.
/// A title given more than once is merged into one section; a key repeated
/// across those sections keeps its last value.
pub fn parse_document(input: &str) -> IResult<&str, DocumentMap> {
    let (input, sections) =
        many1(delimited(space0, parse_section, multispace0)).parse(input)?;

    let mut result: DocumentMap = HashMap::new();
    for (title, section_map) in sections {
        result.entry(title).or_default().extend(
            section_map
                .into_iter()
                .map(|(key, values)| (key, Some(values))),
        );
    }
    Ok((input, result))
}

/// Parses a document, stripping comments first. With a template every title and key of
/// the template is guaranteed to exist in the result (missing keys map to None).
pub fn parse_document_as(input: &str, template: Option<&DocumentMap>) -> Result<DocumentMap> {
    let filtered = filter_comments(input);
    let (remaining, mut parsed) = parse_document(filtered.trim_start())
        .map_err(|e| PlotError::Config(format!("parsing error: {:?}", e)))?;
    if !remaining.trim().is_empty() {
        return Err(PlotError::Config(format!(
            "failed to parse entire document. Remaining: '{}'",
            remaining
        )));
    }
    if let Some(template) = template {
        for (title, keys_map) in template {
            let section_map = parsed.entry(title.clone()).or_default();
            for key in keys_map.keys() {
                section_map.entry(key.clone()).or_insert(None);
            }
        }
    }
    Ok(parsed)
}
