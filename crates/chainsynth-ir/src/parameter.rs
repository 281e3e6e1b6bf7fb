//! Rotation angles: concrete values or symbols bound later.
//!
//! Only what Trotter layers need: a literal angle, a named input, and the
//! negation of either (mirrored layers rotate by `-theta`).

use std::collections::BTreeSet;
use std::fmt;
use std::ops::Neg;

use serde::{Deserialize, Serialize};

/// A rotation angle in radians.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterExpression {
    /// A literal angle.
    Constant(f64),
    /// A named angle supplied at run time.
    Symbol(String),
    /// The negation of an angle.
    Neg(Box<ParameterExpression>),
}

impl ParameterExpression {
    pub fn constant(value: f64) -> Self {
        Self::Constant(value)
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// The named input this angle depends on, looking through negation.
    fn root_symbol(&self) -> Option<&str> {
        match self {
            Self::Constant(_) => None,
            Self::Symbol(name) => Some(name),
            Self::Neg(inner) => inner.root_symbol(),
        }
    }

    /// Whether the angle is unknown until a symbol is bound.
    pub fn is_symbolic(&self) -> bool {
        self.root_symbol().is_some()
    }

    /// The angle in radians, if it does not depend on a symbol.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Constant(v) => Some(*v),
            Self::Symbol(_) => None,
            Self::Neg(inner) => inner.as_f64().map(|v| -v),
        }
    }

    /// The additive inverse. Constants flip sign and a double negation
    /// cancels, so a mirrored angle is never larger than its forward one.
    #[must_use]
    pub fn negated(&self) -> Self {
        match self {
            Self::Constant(v) => Self::Constant(-v),
            Self::Neg(inner) => (**inner).clone(),
            Self::Symbol(_) => Self::Neg(Box::new(self.clone())),
        }
    }

    /// Names of the run-time inputs this angle reads.
    pub fn symbols(&self) -> BTreeSet<String> {
        self.root_symbol().map(str::to_owned).into_iter().collect()
    }

    /// Replace the symbol `name` by `value`.
    #[must_use]
    pub fn bind(&self, name: &str, value: f64) -> Self {
        if self.root_symbol() != Some(name) {
            return self.clone();
        }
        match self {
            Self::Neg(inner) => inner.bind(name, value).negated(),
            _ => Self::Constant(value),
        }
    }
}

impl fmt::Display for ParameterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(v) => write!(f, "{v}"),
            Self::Symbol(name) => f.write_str(name),
            Self::Neg(inner) => write!(f, "-{inner}"),
        }
    }
}

impl From<f64> for ParameterExpression {
    fn from(value: f64) -> Self {
        Self::Constant(value)
    }
}

impl Neg for ParameterExpression {
    type Output = Self;

    fn neg(self) -> Self {
        self.negated()
    }
}
