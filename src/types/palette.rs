//! Palette builder: expands colours through base transforms and tones.

use indexmap::IndexMap;
use serde::Serialize;

use super::{ColorData, Record, Tone, Transform, TransformError};

/// Colours to expand, keyed by colour name. Iteration order is insertion order.
pub type PaletteInput = IndexMap<String, ColorData>;

/// Base transforms and tones applied to every colour.
#[derive(Debug, Clone, Default)]
pub struct PaletteOptions {
    /// Merged straight into each colour's own entry.
    pub base: IndexMap<String, Transform>,
    /// Each produces `{colour}_{tone}` and `{colour}_{subtone}_{tone}` entries.
    pub tones: IndexMap<String, Tone>,
}

impl PaletteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a base transform.
    pub fn base(mut self, key: impl Into<String>, transform: Transform) -> Self {
        self.base.insert(key.into(), transform);
        self
    }

    /// Add a tone under the given key.
    ///
    /// The key, not the tone's own name, is what appears in palette keys.
    pub fn tone(mut self, key: impl Into<String>, tone: Tone) -> Self {
        self.tones.insert(key.into(), tone);
        self
    }
}

/// Key of a tone entry: `{colour}_{tone}`.
pub fn tone_key(colour: &str, tone: &str) -> String {
    format!("{}_{}", colour, tone)
}

/// Key of a subtone entry: `{colour}_{subtone}_{tone}`.
pub fn subtone_key(colour: &str, subtone: &str, tone: &str) -> String {
    format!("{}_{}_{}", colour, subtone, tone)
}

/// The flattened result: one record per colour, tone and subtone key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Palette {
    entries: IndexMap<String, Record>,
}

impl Palette {
    /// Get an entry by key.
    pub fn get(&self, key: &str) -> Option<&Record> {
        self.entries.get(key)
    }

    /// Check if a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All keys, in build order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    /// All entries, in build order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the palette, returning the underlying map.
    pub fn into_inner(self) -> IndexMap<String, Record> {
        self.entries
    }
}

impl std::ops::Index<&str> for Palette {
    type Output = Record;

    fn index(&self, key: &str) -> &Record {
        &self.entries[key]
    }
}

/// Build a palette.
///
/// For each colour, in input order:
/// 1. the colour entry starts as a copy of its channels, then every base
///    transform output is merged in (later keys overwrite earlier ones);
/// 2. every tone writes `{colour}_{tone}`, followed by
///    `{colour}_{subtone}_{tone}` for each of its subtones.
///
/// Subtones receive the colour's channel data, never the tone's output.
/// The first failing transform aborts the build and its error is returned
/// as-is. Colliding keys are not detected; the later write wins.
pub fn create_palette(
    input: &PaletteInput,
    options: &PaletteOptions,
) -> Result<Palette, TransformError> {
    let mut entries = IndexMap::new();

    for (colour, data) in input {
        let mut entry = data.to_record();
        for transform in options.base.values() {
            entry.extend(transform.apply(data)?);
        }
        entries.insert(colour.clone(), entry);

        for (tone_name, tone) in &options.tones {
            entries.insert(tone_key(colour, tone_name), tone.apply(data)?);

            if let Some(subtones) = tone.subtones() {
                for (subtone_name, subtone) in subtones {
                    entries.insert(
                        subtone_key(colour, subtone_name, tone_name),
                        subtone.apply(data)?,
                    );
                }
            }
        }
    }

    Ok(Palette { entries })
}
