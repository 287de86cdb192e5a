#![allow(dead_code)]

use callable::{Arity, Callable, Callback, Failure, Keyword, NamedArgs, ParamSpec, Params, Value};
use serde_json::json;
use thiserror::Error;

// ============================================================================
// Constructor Parameter Shapes
// ============================================================================

pub struct NoParams;

impl Callable for NoParams {
    type Output = &'static str;

    fn construct(params: Params, _: Option<Callback<'_>>) -> Result<Self, Failure> {
        params.bind(&ParamSpec::NONE)?;
        Ok(NoParams)
    }

    fn call(self, _: Option<Callback<'_>>) -> Result<Self::Output, Failure> {
        Ok("ok")
    }
}

/// `(a)`
pub struct PositionalReq {
    a: i64,
}

impl Callable for PositionalReq {
    type Output = i64;

    fn construct(params: Params, _: Option<Callback<'_>>) -> Result<Self, Failure> {
        let bound = params.bind(&ParamSpec::positional(1, 0))?;
        Ok(PositionalReq { a: bound.arg(0)? })
    }

    fn call(self, _: Option<Callback<'_>>) -> Result<i64, Failure> {
        Ok(self.a)
    }
}

/// `(a = 5)`
pub struct PositionalOpt {
    a: i64,
}

impl Callable for PositionalOpt {
    type Output = i64;

    fn construct(params: Params, _: Option<Callback<'_>>) -> Result<Self, Failure> {
        let bound = params.bind(&ParamSpec::positional(0, 1))?;
        Ok(PositionalOpt {
            a: bound.arg_or(0, 5)?,
        })
    }

    fn call(self, _: Option<Callback<'_>>) -> Result<i64, Failure> {
        Ok(self.a)
    }
}

/// `(*nums)`, summed.
pub struct RestPositional {
    sum: i64,
}

impl Callable for RestPositional {
    type Output = i64;

    fn construct(params: Params, _: Option<Callback<'_>>) -> Result<Self, Failure> {
        let bound = params.bind(&ParamSpec::NONE.with_rest())?;
        let nums: Vec<i64> = bound.rest()?;
        Ok(RestPositional {
            sum: nums.iter().sum(),
        })
    }

    fn call(self, _: Option<Callback<'_>>) -> Result<i64, Failure> {
        Ok(self.sum)
    }
}

/// `(x:)`
pub struct KeywordReq {
    x: i64,
}

impl Callable for KeywordReq {
    type Output = i64;

    fn construct(params: Params, _: Option<Callback<'_>>) -> Result<Self, Failure> {
        const SPEC: ParamSpec = ParamSpec::NONE.with_keywords(&[Keyword::required("x")]);
        let bound = params.bind(&SPEC)?;
        Ok(KeywordReq {
            x: bound.keyword("x")?,
        })
    }

    fn call(self, _: Option<Callback<'_>>) -> Result<i64, Failure> {
        Ok(self.x)
    }
}

/// `(x: 7)`
pub struct KeywordOpt {
    x: i64,
}

impl Callable for KeywordOpt {
    type Output = i64;

    fn construct(params: Params, _: Option<Callback<'_>>) -> Result<Self, Failure> {
        const SPEC: ParamSpec = ParamSpec::NONE.with_keywords(&[Keyword::optional("x")]);
        let bound = params.bind(&SPEC)?;
        Ok(KeywordOpt {
            x: bound.keyword_or("x", 7)?,
        })
    }

    fn call(self, _: Option<Callback<'_>>) -> Result<i64, Failure> {
        Ok(self.x)
    }
}

/// `(**opts)`
pub struct KeywordRest {
    opts: NamedArgs,
}

impl Callable for KeywordRest {
    type Output = NamedArgs;

    fn construct(params: Params, _: Option<Callback<'_>>) -> Result<Self, Failure> {
        let bound = params.bind(&ParamSpec::NONE.with_keyword_rest())?;
        Ok(KeywordRest {
            opts: bound.into_keyword_rest(),
        })
    }

    fn call(self, _: Option<Callback<'_>>) -> Result<NamedArgs, Failure> {
        Ok(self.opts)
    }
}

/// `(a, b = 2, c:, d: 4, **rest)`
pub struct Combo {
    vals: Value,
}

impl Callable for Combo {
    type Output = Value;

    fn construct(params: Params, _: Option<Callback<'_>>) -> Result<Self, Failure> {
        const SPEC: ParamSpec = ParamSpec::positional(1, 1)
            .with_keywords(&[Keyword::required("c"), Keyword::optional("d")])
            .with_keyword_rest();
        let bound = params.bind(&SPEC)?;
        let a: i64 = bound.arg(0)?;
        let b: i64 = bound.arg_or(1, 2)?;
        let c: i64 = bound.keyword("c")?;
        let d: i64 = bound.keyword_or("d", 4)?;
        Ok(Combo {
            vals: json!([a, b, c, d, bound.keyword_rest()]),
        })
    }

    fn call(self, _: Option<Callback<'_>>) -> Result<Value, Failure> {
        Ok(self.vals)
    }
}

/// `(*nums, **opts)`
pub struct RestCombo {
    nums: Vec<Value>,
    opts: NamedArgs,
}

impl Callable for RestCombo {
    type Output = (Vec<Value>, NamedArgs);

    fn construct(params: Params, _: Option<Callback<'_>>) -> Result<Self, Failure> {
        let bound = params.bind(&ParamSpec::ANY)?;
        Ok(RestCombo {
            nums: bound.rest()?,
            opts: bound.into_keyword_rest(),
        })
    }

    fn call(self, _: Option<Callback<'_>>) -> Result<Self::Output, Failure> {
        Ok((self.nums, self.opts))
    }
}

/// `(**opts)`, recording whether a named section reached the constructor.
pub struct KwPath {
    had_named: bool,
    opts: NamedArgs,
}

impl Callable for KwPath {
    type Output = (bool, NamedArgs);

    fn construct(params: Params, _: Option<Callback<'_>>) -> Result<Self, Failure> {
        let had_named = params.has_named();
        let bound = params.bind(&ParamSpec::NONE.with_keyword_rest())?;
        Ok(KwPath {
            had_named,
            opts: bound.into_keyword_rest(),
        })
    }

    fn call(self, _: Option<Callback<'_>>) -> Result<Self::Output, Failure> {
        Ok((self.had_named, self.opts))
    }
}

/// `(x)`; the instance doubles its argument.
pub struct PrivateInit {
    x: i64,
}

impl PrivateInit {
    fn new(x: i64) -> Self {
        Self { x }
    }
}

impl Callable for PrivateInit {
    type Output = i64;

    fn construct(params: Params, _: Option<Callback<'_>>) -> Result<Self, Failure> {
        let bound = params.bind(&ParamSpec::positional(1, 0))?;
        Ok(Self::new(bound.arg(0)?))
    }

    fn call(self, _: Option<Callback<'_>>) -> Result<i64, Failure> {
        Ok(self.x * 2)
    }
}

// ============================================================================
// Callback Shapes
// ============================================================================

/// Yields itself from the constructor so the caller can configure it.
#[derive(Default)]
pub struct Configurable {
    configured: bool,
}

impl Configurable {
    pub fn mark(&mut self) {
        self.configured = true;
    }
}

impl Callable for Configurable {
    type Output = bool;

    fn construct(params: Params, callback: Option<Callback<'_>>) -> Result<Self, Failure> {
        params.bind(&ParamSpec::NONE)?;
        let mut this = Configurable::default();
        if let Some(mut callback) = callback {
            callback.yield_target(&mut this);
        }
        Ok(this)
    }

    fn call(self, _: Option<Callback<'_>>) -> Result<bool, Failure> {
        Ok(self.configured)
    }
}

/// Yields `init` while constructing and `call` while invoked.
pub struct DoubleYield;

impl Callable for DoubleYield {
    type Output = ();

    fn construct(params: Params, callback: Option<Callback<'_>>) -> Result<Self, Failure> {
        params.bind(&ParamSpec::NONE)?;
        if let Some(mut callback) = callback {
            callback.yield_value("init");
        }
        Ok(DoubleYield)
    }

    fn call(self, callback: Option<Callback<'_>>) -> Result<(), Failure> {
        if let Some(mut callback) = callback {
            callback.yield_value("call");
        }
        Ok(())
    }
}

/// Like [`DoubleYield`], but `call` declares one defaulted value parameter.
pub struct SingleYield;

impl Callable for SingleYield {
    type Output = &'static str;
    const ARITY: Arity = Arity::optional(1);

    fn construct(params: Params, callback: Option<Callback<'_>>) -> Result<Self, Failure> {
        params.bind(&ParamSpec::NONE)?;
        if let Some(mut callback) = callback {
            callback.yield_value("init");
        }
        Ok(SingleYield)
    }

    fn call(self, callback: Option<Callback<'_>>) -> Result<Self::Output, Failure> {
        if let Some(mut callback) = callback {
            callback.yield_value("call");
        }
        Ok("done")
    }
}

/// Uses the callback only in `call`.
pub struct Forwarded;

impl Callable for Forwarded {
    type Output = ();

    fn construct(params: Params, _: Option<Callback<'_>>) -> Result<Self, Failure> {
        params.bind(&ParamSpec::NONE)?;
        Ok(Forwarded)
    }

    fn call(self, callback: Option<Callback<'_>>) -> Result<(), Failure> {
        if let Some(mut callback) = callback {
            callback.yield_value("call");
        }
        Ok(())
    }
}

/// Ignores the callback everywhere.
pub struct NoForward;

impl Callable for NoForward {
    type Output = &'static str;

    fn construct(params: Params, _: Option<Callback<'_>>) -> Result<Self, Failure> {
        params.bind(&ParamSpec::NONE)?;
        Ok(NoForward)
    }

    fn call(self, _: Option<Callback<'_>>) -> Result<Self::Output, Failure> {
        Ok("ok")
    }
}

// ============================================================================
// Failure Shapes
// ============================================================================

/// A caller-defined refinement of "invalid arguments".
#[derive(Error, Debug, PartialEq, Eq)]
#[error("{0}")]
pub struct CtorCustomError(pub String);

/// `(x)`, with an operation that returns nothing.
pub struct BadInit;

impl Callable for BadInit {
    type Output = ();

    fn construct(params: Params, _: Option<Callback<'_>>) -> Result<Self, Failure> {
        params.bind(&ParamSpec::positional(1, 0))?;
        Ok(BadInit)
    }

    fn call(self, _: Option<Callback<'_>>) -> Result<(), Failure> {
        Ok(())
    }
}

pub struct CallError;

impl Callable for CallError {
    type Output = ();

    fn construct(params: Params, _: Option<Callback<'_>>) -> Result<Self, Failure> {
        params.bind(&ParamSpec::NONE)?;
        Ok(CallError)
    }

    fn call(self, _: Option<Callback<'_>>) -> Result<(), Failure> {
        Err(Failure::msg("boom"))
    }
}

/// Rejects every argument set with the built-in kind.
pub struct InitArgumentError;

impl Callable for InitArgumentError {
    type Output = &'static str;

    fn construct(_: Params, _: Option<Callback<'_>>) -> Result<Self, Failure> {
        Err(Failure::invalid_arguments("bad ctor"))
    }

    fn call(self, _: Option<Callback<'_>>) -> Result<Self::Output, Failure> {
        Ok("never")
    }
}

pub struct CallArgumentError;

impl Callable for CallArgumentError {
    type Output = ();

    fn construct(params: Params, _: Option<Callback<'_>>) -> Result<Self, Failure> {
        params.bind(&ParamSpec::NONE)?;
        Ok(CallArgumentError)
    }

    fn call(self, _: Option<Callback<'_>>) -> Result<(), Failure> {
        Err(Failure::invalid_arguments("bad call"))
    }
}

/// Rejects every argument set with [`CtorCustomError`].
pub struct InitCustomErrorService;

impl Callable for InitCustomErrorService {
    type Output = &'static str;

    fn construct(_: Params, _: Option<Callback<'_>>) -> Result<Self, Failure> {
        Err(Failure::custom(CtorCustomError("custom ctor err".into())))
    }

    fn call(self, _: Option<Callback<'_>>) -> Result<Self::Output, Failure> {
        Ok("never")
    }
}

pub struct CallCustomErrorService;

impl Callable for CallCustomErrorService {
    type Output = ();

    fn construct(params: Params, _: Option<Callback<'_>>) -> Result<Self, Failure> {
        params.bind(&ParamSpec::NONE)?;
        Ok(CallCustomErrorService)
    }

    fn call(self, _: Option<Callback<'_>>) -> Result<(), Failure> {
        Err(Failure::custom(CtorCustomError("custom call err".into())))
    }
}
