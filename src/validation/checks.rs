//! Validation checks for theme files.
//!
//! Each check takes a `&ThemeFile` and returns a `ValidationResult`.

use std::collections::HashMap;

use crate::theme::{parse_value_def, TemplateSource, ThemeFile};
use crate::types::{subtone_key, tone_key};

use super::warning::{Diagnostic, ValidationResult};

/// Warn when a theme has no colours, since it builds an empty palette.
pub fn check_empty_colors(theme: &ThemeFile) -> ValidationResult {
    let mut result = ValidationResult::new();

    if theme.colors.is_empty() {
        result.push(
            Diagnostic::warning("tones::validate::empty-colors", "Theme defines no colours")
                .with_help("Add at least one entry under `colors`"),
        );
    }

    result
}

/// Check that every `$` reference names a real channel.
pub fn check_channel_refs(theme: &ThemeFile) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (key, source) in &theme.base {
        check_template(&mut result, source, &format!("base '{}'", key));
    }

    for (key, tone) in &theme.tones {
        check_template(&mut result, &tone.transform, &format!("tone '{}'", key));
        for (subtone, source) in tone.subtone.iter().flatten() {
            check_template(&mut result, source, &format!("subtone '{}.{}'", key, subtone));
        }
    }

    result
}

fn check_template(result: &mut ValidationResult, source: &TemplateSource, location: &str) {
    for (field, value) in source {
        if parse_value_def(value).is_err() {
            result.push(
                Diagnostic::error(
                    "tones::validate::unknown-channel",
                    format!("{} field '{}' references unknown channel {}", location, field, value),
                )
                .with_help("Use $main, $dark, $light or $extra, or $$ for a literal '$'"),
            );
        }
    }
}

/// Warn when two generated palette keys coincide.
///
/// The builder does not guard against this: the later entry silently
/// replaces the earlier one.
pub fn check_key_collisions(theme: &ThemeFile) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen: HashMap<String, String> = HashMap::new();

    let mut claim = |key: String, origin: String| {
        if let Some(first) = seen.get(&key) {
            result.push(
                Diagnostic::warning(
                    "tones::validate::key-collision",
                    format!("Key '{}' from {} overwrites {}", key, origin, first),
                )
                .with_help("Rename the tone or subtone so every generated key is unique"),
            );
        } else {
            seen.insert(key, origin);
        }
    };

    for colour in theme.colors.keys() {
        claim(colour.clone(), format!("colour '{}'", colour));

        for (tone, def) in &theme.tones {
            claim(tone_key(colour, tone), format!("tone '{}'", tone));
            for subtone in def.subtone.iter().flat_map(|s| s.keys()) {
                claim(
                    subtone_key(colour, subtone, tone),
                    format!("subtone '{}.{}'", tone, subtone),
                );
            }
        }
    }

    result
}
