//! Colour channel data.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TonesError};

use super::Record;

/// One named variant of a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Main,
    Dark,
    Light,
    Extra,
}

impl Channel {
    /// All channels in declaration order.
    pub const ALL: [Channel; 4] = [Channel::Main, Channel::Dark, Channel::Light, Channel::Extra];

    /// The record key this channel is stored under.
    pub const fn as_str(self) -> &'static str {
        match self {
            Channel::Main => "main",
            Channel::Dark => "dark",
            Channel::Light => "light",
            Channel::Extra => "extra",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = TonesError;

    fn from_str(s: &str) -> Result<Self> {
        Channel::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| TonesError::Parse {
                message: format!("Unknown channel: {}", s),
                help: Some("Valid channels are main, dark, light and extra".to_string()),
            })
    }
}

/// The fixed set of string variants describing one colour.
///
/// Values are opaque: nothing here checks that they are valid CSS,
/// hex, or anything else.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColorData {
    pub main: String,
    pub dark: String,
    pub light: String,
    pub extra: String,
}

impl ColorData {
    pub fn new(
        main: impl Into<String>,
        dark: impl Into<String>,
        light: impl Into<String>,
        extra: impl Into<String>,
    ) -> Self {
        Self {
            main: main.into(),
            dark: dark.into(),
            light: light.into(),
            extra: extra.into(),
        }
    }

    /// Get a channel value.
    pub fn get(&self, channel: Channel) -> &str {
        match channel {
            Channel::Main => &self.main,
            Channel::Dark => &self.dark,
            Channel::Light => &self.light,
            Channel::Extra => &self.extra,
        }
    }

    /// Copy the channels into a fresh record, in declaration order.
    pub fn to_record(&self) -> Record {
        Channel::ALL
            .into_iter()
            .map(|c| (c.as_str().to_string(), self.get(c).to_string()))
            .collect()
    }
}
