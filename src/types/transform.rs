//! Transform callbacks and the records they produce.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use super::ColorData;

/// A flat, ordered mapping of property name to value.
pub type Record = IndexMap<String, String>;

/// Error raised by a caller-supplied transform.
///
/// The palette builder hands this back exactly as the callback produced it.
pub type TransformError = Box<dyn std::error::Error + Send + Sync>;

type TransformFn = dyn Fn(&ColorData) -> Result<Record, TransformError> + Send + Sync;

/// A shared, invocable transform from channel data to a record.
///
/// Cloning is cheap: clones share the same callback.
#[derive(Clone)]
pub struct Transform {
    f: Arc<TransformFn>,
}

impl Transform {
    /// Wrap a transform that cannot fail.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&ColorData) -> Record + Send + Sync + 'static,
    {
        Self {
            f: Arc::new(move |data| Ok(f(data))),
        }
    }

    /// Wrap a transform that may fail.
    pub fn try_new<F>(f: F) -> Self
    where
        F: Fn(&ColorData) -> Result<Record, TransformError> + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// Invoke the transform.
    pub fn apply(&self, data: &ColorData) -> Result<Record, TransformError> {
        (self.f)(data)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Transform(..)")
    }
}

/// Build a [`Record`] from `key => value` pairs.
///
/// ```
/// let r = tones::record! { "background" => "red" };
/// assert_eq!(r["background"], "red");
/// ```
#[macro_export]
macro_rules! record {
    () => { $crate::types::Record::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut record = $crate::types::Record::new();
        $(record.insert(::std::string::String::from($key), ::std::string::String::from($value));)+
        record
    }};
}
