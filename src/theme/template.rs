//! Declarative record templates.
//!
//! A template maps output keys to values. Values are either channel
//! references (`$main`, `$dark`, `$light`, `$extra`) or literal strings.
//! A leading `$$` escapes a literal `$`.

use indexmap::IndexMap;

use crate::error::{Result, TonesError};
use crate::types::{Channel, ColorData, Record, Transform};

/// Raw template as written in a theme file.
pub type TemplateSource = IndexMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ValueDef {
    /// Copied through unchanged: `#f0f0f0`, `transparent`
    Literal(String),
    /// Looked up on the colour: `$light`
    Channel(Channel),
}

impl ValueDef {
    fn resolve(&self, data: &ColorData) -> String {
        match self {
            ValueDef::Literal(s) => s.clone(),
            ValueDef::Channel(c) => data.get(*c).to_string(),
        }
    }
}

/// Parse a template value into a ValueDef.
pub(crate) fn parse_value_def(value: &str) -> Result<ValueDef> {
    if let Some(escaped) = value.strip_prefix("$$") {
        return Ok(ValueDef::Literal(format!("${}", escaped)));
    }

    match value.strip_prefix('$') {
        Some(name) => name.parse().map(ValueDef::Channel).map_err(|_| {
            TonesError::Parse {
                message: format!("Unknown channel reference: {}", value),
                help: Some(
                    "Use $main, $dark, $light or $extra, or $$ for a literal '$'".to_string(),
                ),
            }
        }),
        None => Ok(ValueDef::Literal(value.to_string())),
    }
}

/// A compiled template, ready to be turned into a transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    fields: Vec<(String, ValueDef)>,
}

impl Template {
    /// Parse every value of a template source.
    pub fn parse(source: &TemplateSource) -> Result<Self> {
        let fields = source
            .iter()
            .map(|(key, value)| Ok((key.clone(), parse_value_def(value)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { fields })
    }

    /// Fill the template from one colour.
    pub fn render(&self, data: &ColorData) -> Record {
        self.fields
            .iter()
            .map(|(key, def)| (key.clone(), def.resolve(data)))
            .collect()
    }

    /// Turn the template into a transform.
    pub fn into_transform(self) -> Transform {
        Transform::new(move |data| self.render(data))
    }
}
