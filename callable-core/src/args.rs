//! Caller-supplied arguments.
//!
//! [`Args`] is the argument half of a construction request: an ordered list of
//! positional values and a map of named values. Values are
//! [`serde_json::Value`]s, so anything `Into<Value>` can be passed and
//! constructors read them back with serde.

pub use serde_json::Value;

/// Named argument values. Keys are unique; insertion order carries no meaning.
pub type NamedArgs = serde_json::Map<String, Value>;

/// Positional and named values supplied by the caller.
///
/// Built with a consuming builder and read-only afterwards.
///
/// # Example
///
/// ```rust
/// use callable_core::Args;
///
/// let args = Args::new().arg(1).named("c", 3).named("e", 5);
/// assert_eq!(args.positional().len(), 1);
/// assert_eq!(args.named_args().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    positional: Vec<Value>,
    named: NamedArgs,
}

impl Args {
    /// Empty argument set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arguments made of the given positional values only.
    pub fn positional_only<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            positional: values.into_iter().map(Into::into).collect(),
            named: NamedArgs::new(),
        }
    }

    /// Append a positional value.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a named value. A repeated key replaces the earlier value.
    pub fn named(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.named.insert(key.into(), value.into());
        self
    }

    /// Merge a whole map of named values.
    pub fn named_all(mut self, named: NamedArgs) -> Self {
        self.named.extend(named);
        self
    }

    /// The positional values, in order.
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// The named values.
    pub fn named_args(&self) -> &NamedArgs {
        &self.named
    }

    /// Returns `true` when no positional and no named values were supplied.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    /// Split into positional and named parts.
    pub fn into_parts(self) -> (Vec<Value>, NamedArgs) {
        (self.positional, self.named)
    }
}

impl From<Vec<Value>> for Args {
    fn from(positional: Vec<Value>) -> Self {
        Self {
            positional,
            named: NamedArgs::new(),
        }
    }
}

impl From<NamedArgs> for Args {
    fn from(named: NamedArgs) -> Self {
        Self {
            positional: Vec::new(),
            named,
        }
    }
}
