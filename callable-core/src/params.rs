//! Constructor-side parameter binding.
//!
//! A constructor receives its arguments as [`Params`] and describes the
//! parameter list it accepts with a [`ParamSpec`]. [`Params::bind`] checks the
//! whole list at once and either hands back a [`Bound`] view with typed
//! accessors or fails with the built-in [`ArgumentError`].
//!
//! ```rust
//! use callable_core::{Args, Keyword, ParamSpec, Params};
//!
//! // (a, b = 2, c:, d: 4, **rest)
//! const SPEC: ParamSpec = ParamSpec::positional(1, 1)
//!     .with_keywords(&[Keyword::required("c"), Keyword::optional("d")])
//!     .with_keyword_rest();
//!
//! let (positional, named) = Args::new().arg(1).named("c", 3).named("e", 5).into_parts();
//! let bound = Params::new(positional, named).bind(&SPEC).unwrap();
//! assert_eq!(bound.arg::<i64>(0).unwrap(), 1);
//! assert_eq!(bound.arg_or::<i64>(1, 2).unwrap(), 2);
//! assert_eq!(bound.keyword::<i64>("c").unwrap(), 3);
//! assert_eq!(bound.keyword_or::<i64>("d", 4).unwrap(), 4);
//! assert_eq!(bound.keyword_rest().len(), 1);
//! ```

use crate::args::{NamedArgs, Value};
use crate::error::ArgumentError;
use serde::de::DeserializeOwned;
use std::fmt;

/// Arguments as handed to a constructor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    positional: Vec<Value>,
    named: Option<NamedArgs>,
}

impl Params {
    /// Positional and named values.
    pub fn new(positional: Vec<Value>, named: NamedArgs) -> Self {
        Self {
            positional,
            named: Some(named),
        }
    }

    /// Positional values with no named section at all.
    pub fn positional_only(positional: Vec<Value>) -> Self {
        Self {
            positional,
            named: None,
        }
    }

    /// Number of positional values supplied.
    pub fn len(&self) -> usize {
        self.positional.len()
    }

    /// Returns `true` when nothing at all was supplied.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.as_ref().is_none_or(NamedArgs::is_empty)
    }

    /// Returns `true` when a named section is present.
    pub fn has_named(&self) -> bool {
        self.named.is_some()
    }

    /// Bind the supplied values against a parameter list.
    ///
    /// Checks run in order: positional count, missing keywords, unknown
    /// keywords. The first violation is returned.
    pub fn bind(self, spec: &ParamSpec) -> Result<Bound, ArgumentError> {
        let given = self.positional.len();
        let max = spec.required + spec.optional;
        if given < spec.required || (!spec.rest && given > max) {
            return Err(ArgumentError::wrong_arity(given, spec.expected()));
        }

        let mut named = self.named.unwrap_or_default();

        let missing: Vec<&str> = spec
            .keywords
            .iter()
            .filter(|k| k.required && !named.contains_key(k.name))
            .map(|k| k.name)
            .collect();
        if !missing.is_empty() {
            return Err(ArgumentError::missing_keywords(missing.as_slice()));
        }

        let mut keywords = NamedArgs::new();
        for keyword in spec.keywords {
            if let Some(value) = named.remove(keyword.name) {
                keywords.insert(keyword.name.to_owned(), value);
            }
        }

        if !spec.keyword_rest && !named.is_empty() {
            let mut unknown: Vec<&String> = named.keys().collect();
            unknown.sort();
            return Err(ArgumentError::unknown_keywords(unknown.as_slice()));
        }

        let mut positional = self.positional;
        let rest = if given > max {
            positional.split_off(max)
        } else {
            Vec::new()
        };

        Ok(Bound {
            positional,
            rest,
            keywords,
            keyword_rest: named,
        })
    }
}

/// A declared named parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyword {
    name: &'static str,
    required: bool,
}

impl Keyword {
    /// A keyword the caller must supply.
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
        }
    }

    /// A keyword with a default.
    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
        }
    }

    /// The keyword's name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the caller must supply it.
    pub const fn is_required(&self) -> bool {
        self.required
    }
}

/// The parameter list a constructor accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    required: usize,
    optional: usize,
    rest: bool,
    keywords: &'static [Keyword],
    keyword_rest: bool,
}

impl ParamSpec {
    /// Accepts nothing.
    pub const NONE: Self = Self::positional(0, 0);

    /// Accepts any positional and named values.
    pub const ANY: Self = Self::NONE.with_rest().with_keyword_rest();

    /// `required` mandatory positional values followed by `optional` ones.
    pub const fn positional(required: usize, optional: usize) -> Self {
        Self {
            required,
            optional,
            rest: false,
            keywords: &[],
            keyword_rest: false,
        }
    }

    /// Also accept any number of trailing positional values.
    pub const fn with_rest(mut self) -> Self {
        self.rest = true;
        self
    }

    /// Declare named parameters.
    pub const fn with_keywords(mut self, keywords: &'static [Keyword]) -> Self {
        self.keywords = keywords;
        self
    }

    /// Also accept any undeclared named values.
    pub const fn with_keyword_rest(mut self) -> Self {
        self.keyword_rest = true;
        self
    }

    /// The declared named parameters.
    pub const fn keywords(&self) -> &'static [Keyword] {
        self.keywords
    }

    /// The accepted positional count, as shown in arity errors.
    pub fn expected(&self) -> Expected {
        Expected {
            min: self.required,
            max: if self.rest {
                None
            } else {
                Some(self.required + self.optional)
            },
        }
    }
}

/// Accepted positional count: `1`, `1..2` or `1+`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expected {
    min: usize,
    max: Option<usize>,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            None => write!(f, "{}+", self.min),
            Some(max) if max == self.min => write!(f, "{}", self.min),
            Some(max) => write!(f, "{}..{}", self.min, max),
        }
    }
}

/// Values bound against a [`ParamSpec`].
#[derive(Debug, Clone, PartialEq)]
pub struct Bound {
    positional: Vec<Value>,
    rest: Vec<Value>,
    keywords: NamedArgs,
    keyword_rest: NamedArgs,
}

impl Bound {
    /// A positional value that was supplied.
    pub fn arg<T: DeserializeOwned>(&self, index: usize) -> Result<T, ArgumentError> {
        match self.positional.get(index) {
            Some(value) => decode(value, format_args!("argument {index}")),
            None => Err(ArgumentError::new(format!(
                "no value supplied for argument {index}"
            ))),
        }
    }

    /// An optional positional value.
    pub fn arg_opt<T: DeserializeOwned>(
        &self,
        index: usize,
    ) -> Result<Option<T>, ArgumentError> {
        self.positional
            .get(index)
            .map(|value| decode(value, format_args!("argument {index}")))
            .transpose()
    }

    /// An optional positional value with a default.
    pub fn arg_or<T: DeserializeOwned>(
        &self,
        index: usize,
        default: T,
    ) -> Result<T, ArgumentError> {
        Ok(self.arg_opt(index)?.unwrap_or(default))
    }

    /// Trailing positional values beyond the declared ones.
    pub fn rest<T: DeserializeOwned>(&self) -> Result<Vec<T>, ArgumentError> {
        let offset = self.positional.len();
        self.rest
            .iter()
            .enumerate()
            .map(|(i, value)| decode(value, format_args!("argument {}", offset + i)))
            .collect()
    }

    /// A declared keyword that was supplied.
    pub fn keyword<T: DeserializeOwned>(&self, name: &str) -> Result<T, ArgumentError> {
        match self.keyword_opt(name)? {
            Some(value) => Ok(value),
            None => Err(ArgumentError::missing_keywords(&[name])),
        }
    }

    /// An optional keyword.
    pub fn keyword_opt<T: DeserializeOwned>(
        &self,
        name: &str,
    ) -> Result<Option<T>, ArgumentError> {
        self.keywords
            .get(name)
            .map(|value| decode(value, format_args!("keyword :{name}")))
            .transpose()
    }

    /// An optional keyword with a default.
    pub fn keyword_or<T: DeserializeOwned>(
        &self,
        name: &str,
        default: T,
    ) -> Result<T, ArgumentError> {
        Ok(self.keyword_opt(name)?.unwrap_or(default))
    }

    /// Named values that matched no declared keyword.
    pub fn keyword_rest(&self) -> &NamedArgs {
        &self.keyword_rest
    }

    /// Take the undeclared named values.
    pub fn into_keyword_rest(self) -> NamedArgs {
        self.keyword_rest
    }

    /// Total positional values supplied, rest included.
    pub fn supplied(&self) -> usize {
        self.positional.len() + self.rest.len()
    }
}

fn decode<T: DeserializeOwned>(
    value: &Value,
    what: fmt::Arguments<'_>,
) -> Result<T, ArgumentError> {
    T::deserialize(value)
        .map_err(|err| ArgumentError::new(format!("invalid value for {what}: {err}")))
}
