//! Core domain types for tones.
//!
//! This module contains the derivation engine and the types it works on:
//! - `ColorData` - the channel strings of one colour
//! - `Transform` - a callback from channel data to a `Record`
//! - `Tone` - a named transform with optional subtones
//! - `Palette` - the flattened result of `create_palette`

mod channels;
mod palette;
mod tone;
mod transform;

pub use channels::{Channel, ColorData};
pub use palette::{
    create_palette, subtone_key, tone_key, Palette, PaletteInput, PaletteOptions,
};
pub use tone::{create_tone, Tone, ToneOptions, UNNAMED};
pub use transform::{Record, Transform, TransformError};
