//! tones - Flat colour themes from base colours and composable tones
//!
//! Expands a set of named colours through base transforms, tones and
//! subtones into one flat, string-keyed palette:
//!
//! ```
//! use tones::{create_palette, create_tone, record, ColorData, PaletteInput, PaletteOptions, ToneOptions, Transform};
//!
//! let mut input = PaletteInput::new();
//! input.insert("red".into(), ColorData::new("red", "darkred", "lightred", "extrared"));
//!
//! let brightness = create_tone(
//!     Transform::new(|d| record! { "foreground" => d.main.as_str() }),
//!     Some(ToneOptions::new().name("brightness").subtone(
//!         "low",
//!         Transform::new(|d| record! { "white" => d.light.as_str() }),
//!     )),
//! );
//! let options = PaletteOptions::new()
//!     .base("background", Transform::new(|d| record! { "background" => d.main.as_str() }))
//!     .tone("brightness", brightness);
//!
//! let palette = create_palette(&input, &options).unwrap();
//! assert_eq!(palette["red"]["background"], "red");
//! assert_eq!(palette["red_brightness"]["foreground"], "red");
//! assert_eq!(palette["red_low_brightness"]["white"], "lightred");
//! ```

pub mod cli;
pub mod error;
pub mod output;
pub mod theme;
pub mod types;
pub mod validation;

pub use error::{Result, TonesError};
pub use theme::{Template, TemplateSource, ThemeFile, ToneDef};
pub use types::{
    create_palette, create_tone, subtone_key, tone_key, Channel, ColorData, Palette,
    PaletteInput, PaletteOptions, Record, Tone, ToneOptions, Transform, TransformError, UNNAMED,
};
pub use validation::{validate_theme, Diagnostic, Severity, ValidationResult};
