/// parse task document with structure like " title1 key1: value1, value2 key2: value2 title2 key3:value3, value4"
/// into nested HashMap title -> key -> values. Used to describe a finite-difference job in a text file:
///
/// problem
///   name: sine_wave
///   n: 50
/// solver
///   method: sor
///   relaxation: 1.5
///
/// Lines starting with //, #, % or ; are comments.
use crate::numerical::FD_BVP::FD_errors::FDError;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{alpha1, alphanumeric1, multispace0, space0},
    combinator::{map, map_res, recognize},
    multi::{many0, many1, separated_list0},
    sequence::{delimited, pair, separated_pair, terminated},
};
use std::collections::HashMap;
use std::fmt::Display;

pub type SectionMap = HashMap<String, Vec<Value>>;
pub type TaskDocument = HashMap<String, SectionMap>;

/// enum to represent different value types:
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Float(f64),
    Integer(i64),
    Boolean(bool),
}

impl Value {
    /// integers are accepted as floats: "u0: 0" is a valid boundary value
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
    pub fn as_integer(&self) -> Option<i64> {
        if let Value::Integer(i) = self {
            Some(*i)
        } else {
            None
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

/// identifier: letter or underscore, then letters, digits, underscores
fn parse_identifier(input: &str) -> IResult<&str, String> {
    let parser = recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ));
    let mut parser = map(parser, String::from);
    parser.parse(input)
}

fn parse_title(input: &str) -> IResult<&str, String> {
    let (input, result) = parse_identifier(input)?;
    Ok((input.trim_start(), result))
}

fn parse_value(input: &str) -> IResult<&str, Value> {
    // a single value ends at a comma, whitespace, newline or semicolon
    let value_parser = take_while1(|c: char| !matches!(c, ',' | ' ' | '\t' | '\n' | '\r' | ';'));
    let mut value_parser = map_res(value_parser, |s: &str| -> Result<Value, String> {
        let s = s.trim();
        if let Ok(val) = s.parse::<i64>() {
            Ok(Value::Integer(val))
        } else if let Ok(val) = s.parse::<f64>() {
            Ok(Value::Float(val))
        } else if let Ok(val) = s.parse::<bool>() {
            Ok(Value::Boolean(val))
        } else {
            Ok(Value::String(s.to_string()))
        }
    });
    value_parser.parse(input)
}

fn parse_value_list(input: &str) -> IResult<&str, Vec<Value>> {
    let separator_coma = delimited(space0, tag(","), space0);
    let mut value_parser = separated_list0(separator_coma, parse_value);
    value_parser.parse(input)
}

/// key: value1, value2
fn parse_key_value_pair(input: &str) -> IResult<&str, (String, Vec<Value>)> {
    let colon_separator = delimited(space0, tag(":"), space0);
    let mut parser = separated_pair(parse_identifier, colon_separator, parse_value_list);
    let (input, result) = parser.parse(input)?;
    Ok((input.trim_start(), result))
}

/// title followed by one or more key-value pairs
fn parse_section(input: &str) -> IResult<&str, (String, SectionMap)> {
    let (input, _) = space0(input)?;
    let (input, title) = parse_title(input)?;
    let (input, _) = multispace0(input)?;
    let mut parser = many1(terminated(parse_key_value_pair, space0));
    let (input, pairs) = parser.parse(input)?;
    Ok((input, (title, pairs.into_iter().collect())))
}

/// drops comment lines (starting with //, #, %, or ;) and blank lines
fn filter_comments(input: &str) -> String {
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

fn parse_sections(input: &str) -> IResult<&str, Vec<(String, SectionMap)>> {
    let mut parser = many1(delimited(space0, parse_section, multispace0));
    parser.parse(input)
}

/// Parse the whole document. Sections with the same title are merged, later keys win.
pub fn parse_task_document(input: &str) -> Result<TaskDocument, FDError> {
    let filtered = filter_comments(input);
    let (remaining, sections) = parse_sections(filtered.trim_start())
        .map_err(|e| FDError::TaskParsing(format!("{:?}", e)))?;
    if !remaining.trim().is_empty() {
        return Err(FDError::TaskParsing(format!(
            "Failed to parse entire document. Remaining: '{}'",
            remaining
        )));
    }
    let mut document: TaskDocument = HashMap::new();
    for (title, section) in sections {
        document.entry(title).or_default().extend(section);
    }
    Ok(document)
}

//////////////////////////////// typed lookups ////////////////////////////////
fn single_value<'a>(
    document: &'a TaskDocument,
    section: &str,
    key: &str,
) -> Result<Option<&'a Value>, FDError> {
    match document.get(section).and_then(|s| s.get(key)) {
        None => Ok(None),
        Some(values) if values.len() == 1 => Ok(Some(&values[0])),
        Some(values) => Err(FDError::InvalidConfiguration(format!(
            "{}.{} expects exactly one value, got {}",
            section,
            key,
            values.len()
        ))),
    }
}

pub fn get_f64(document: &TaskDocument, section: &str, key: &str) -> Result<Option<f64>, FDError> {
    match single_value(document, section, key)? {
        None => Ok(None),
        Some(v) => v.as_float().map(Some).ok_or_else(|| {
            FDError::InvalidConfiguration(format!("{}.{} must be a number, got '{}'", section, key, v))
        }),
    }
}

pub fn get_usize(document: &TaskDocument, section: &str, key: &str) -> Result<Option<usize>, FDError> {
    match single_value(document, section, key)? {
        None => Ok(None),
        Some(v) => match v.as_integer() {
            Some(i) if i >= 0 => Ok(Some(i as usize)),
            _ => Err(FDError::InvalidConfiguration(format!(
                "{}.{} must be a non-negative integer, got '{}'",
                section, key, v
            ))),
        },
    }
}

/// any value rendered as text
pub fn get_string(document: &TaskDocument, section: &str, key: &str) -> Result<Option<String>, FDError> {
    Ok(single_value(document, section, key)?.map(|v| v.to_string()))
}
