//! Theme files (`*.tones.yaml`).
//!
//! A theme file declares colours, base templates and tones in YAML. It is
//! compiled into the inputs of `create_palette`.

mod template;

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{Result, TonesError};
use crate::types::{
    create_palette, create_tone, ColorData, Palette, PaletteInput, PaletteOptions, ToneOptions,
};

pub(crate) use template::parse_value_def;
pub use template::{Template, TemplateSource};

/// A tone as declared in a theme file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ToneDef {
    /// Tone name metadata; keys are taken from the `tones` map instead.
    #[serde(default)]
    pub name: Option<String>,

    /// Primary template.
    pub transform: TemplateSource,

    /// Subtone templates, in declaration order.
    #[serde(default)]
    pub subtone: Option<IndexMap<String, TemplateSource>>,
}

/// Theme definition loaded from YAML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeFile {
    /// Colours to expand.
    pub colors: IndexMap<String, ColorData>,

    /// Base templates merged into each colour's own entry.
    pub base: IndexMap<String, TemplateSource>,

    /// Tones, keyed by the suffix used in palette keys.
    pub tones: IndexMap<String, ToneDef>,
}

impl ThemeFile {
    /// Load a theme from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TonesError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read theme: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a theme from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| TonesError::Parse {
            message: format!("Invalid theme: {}", e),
            help: Some("Check the theme's YAML syntax".to_string()),
        })
    }

    /// Compile templates into palette inputs.
    pub fn compile(&self) -> Result<(PaletteInput, PaletteOptions)> {
        let mut options = PaletteOptions::new();

        for (key, source) in &self.base {
            let template = Template::parse(source).map_err(|e| in_context(e, "base", key))?;
            options = options.base(key.clone(), template.into_transform());
        }

        for (key, def) in &self.tones {
            let transform = Template::parse(&def.transform)
                .map_err(|e| in_context(e, "tone", key))?
                .into_transform();

            let mut tone_options = ToneOptions::new();
            tone_options.name = def.name.clone();
            for (subtone, source) in def.subtone.iter().flatten() {
                let template = Template::parse(source)
                    .map_err(|e| in_context(e, "subtone", &format!("{}.{}", key, subtone)))?;
                tone_options = tone_options.subtone(subtone.clone(), template.into_transform());
            }

            options = options.tone(key.clone(), create_tone(transform, Some(tone_options)));
        }

        Ok((self.colors.clone(), options))
    }

    /// Compile and build the palette in one step.
    pub fn build(&self) -> Result<Palette> {
        let (input, options) = self.compile()?;
        Ok(create_palette(&input, &options)?)
    }
}

fn in_context(err: TonesError, kind: &str, name: &str) -> TonesError {
    match err {
        TonesError::Parse { message, help } => TonesError::Parse {
            message: format!("{} (in {} '{}')", message, kind, name),
            help,
        },
        other => other,
    }
}
