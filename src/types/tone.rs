//! Tone definitions: a named transform with optional subtones.

use indexmap::IndexMap;

use super::{ColorData, Record, Transform, TransformError};

/// Name given to tones created without one.
pub const UNNAMED: &str = "unnamed";

/// Optional settings for [`create_tone`].
#[derive(Debug, Clone, Default)]
pub struct ToneOptions {
    /// Tone name; defaults to [`UNNAMED`].
    pub name: Option<String>,
    /// Subtone transforms, in declaration order.
    pub subtone: Option<IndexMap<String, Transform>>,
}

impl ToneOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tone name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a subtone, keeping declaration order.
    pub fn subtone(mut self, name: impl Into<String>, transform: Transform) -> Self {
        self.subtone
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), transform);
        self
    }
}

/// A transform plus its identity metadata.
///
/// Immutable once created.
#[derive(Debug, Clone)]
pub struct Tone {
    name: String,
    transform: Transform,
    subtones: Option<IndexMap<String, Transform>>,
}

/// Create a tone from its primary transform.
///
/// Missing options fall back to defaults: a missing or empty name becomes
/// [`UNNAMED`] and the tone has no subtones.
pub fn create_tone(transform: Transform, options: Option<ToneOptions>) -> Tone {
    let ToneOptions { name, subtone } = options.unwrap_or_default();
    Tone {
        name: name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| UNNAMED.to_string()),
        transform,
        subtones: subtone,
    }
}

impl Tone {
    /// The resolved tone name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the primary transform. The tone adds nothing of its own.
    pub fn apply(&self, data: &ColorData) -> Result<Record, TransformError> {
        self.transform.apply(data)
    }

    /// Subtone transforms, if any were supplied.
    pub fn subtones(&self) -> Option<&IndexMap<String, Transform>> {
        self.subtones.as_ref()
    }

    /// Subtone names in declaration order; empty when there are none.
    pub fn subtone_keys(&self) -> Vec<&str> {
        self.subtones
            .iter()
            .flat_map(|s| s.keys().map(|k| k.as_str()))
            .collect()
    }
}
