use std::fmt::{Debug, Display};

use crate::{Coeff, Error, Ind, Term, Poly};
use crate::misc::{coeff_from_data, coeff_to_data, invalid, json_kind, mismatch, parse_json};

/// A dynamically typed operand.
///
/// Operations between unsupported kinds fail at runtime with
/// [`Error::TypeMismatch`]. Values of different kinds are never equal.
#[derive(Clone, PartialEq, Eq)]
pub enum Value<R> {
    Int(R),
    Ind(Ind),
    Term(Term<R>),
    Poly(Poly<R>)
}

impl<R> Value<R>
where R: Coeff {
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_)  => "int",
            Value::Ind(_)  => "ind",
            Value::Term(_) => "term",
            Value::Poly(_) => "poly",
        }
    }

    pub fn add(&self, other: &Self) -> Result<Self, Error> {
        match (self, other) {
            (Value::Poly(p), Value::Poly(q)) => Ok(Value::Poly(p + q)),
            _ => mismatch!("+", self, other)
        }
    }

    pub fn mul(&self, other: &Self) -> Result<Self, Error> {
        match (self, other) {
            (Value::Ind(a),  Value::Ind(b))  => Ok(Value::Ind(a * b)),
            (Value::Term(t), Value::Int(r))  => Ok(Value::Term(t * r)),
            (Value::Term(t), Value::Term(s)) => Ok(Value::Term(t * s)),
            (Value::Poly(p), Value::Poly(q)) => Ok(Value::Poly(p * q)),
            (Value::Poly(p), Value::Term(t)) => Ok(Value::Poly(p * t)),
            (Value::Poly(p), Value::Int(r))  => Ok(Value::Poly(p * r)),
            _ => mismatch!("*", self, other)
        }
    }

    pub fn gt(&self, other: &Self) -> Result<bool, Error> {
        match (self, other) {
            (Value::Term(t), Value::Term(s)) => Ok(t.gt(s)),
            _ => mismatch!(">", self, other)
        }
    }

    pub fn to_data(&self) -> serde_json::Value {
        match self {
            Value::Int(r)  => coeff_to_data(r),
            Value::Ind(d)  => d.to_data(),
            Value::Term(t) => t.to_data(),
            Value::Poly(p) => p.to_data(),
        }
    }

    pub fn to_json(&self) -> String {
        self.to_data().to_string()
    }

    /// Detects the kind from the JSON shape: a number is an `Int`, an object
    /// a `Term`, a list of objects a `Poly` and any other list an `Ind`.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let data = parse_json(json)?;
        Self::from_data(&data)
    }

    pub fn from_data(data: &serde_json::Value) -> Result<Self, Error> {
        use serde_json::Value as Data;
        match data {
            Data::Number(_) => coeff_from_data(data, "").map(Value::Int),
            Data::Object(_) => Term::from_data(data).map(Value::Term),
            Data::Array(items) if items.iter().any(|x| x.is_object()) => {
                Poly::from_data(data).map(Value::Poly)
            },
            Data::Array(_) => Ind::from_data(data).map(Value::Ind),
            _ => invalid!("", "expected a number, list or object, got {}: {data}", json_kind(data))
        }
    }
}

impl<R> From<Ind> for Value<R> {
    fn from(d: Ind) -> Self {
        Value::Ind(d)
    }
}

impl<R> From<Term<R>> for Value<R> {
    fn from(t: Term<R>) -> Self {
        Value::Term(t)
    }
}

impl<R> From<Poly<R>> for Value<R> {
    fn from(p: Poly<R>) -> Self {
        Value::Poly(p)
    }
}

impl<R> Display for Value<R>
where R: Coeff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(r)  => Display::fmt(r, f),
            Value::Ind(d)  => Display::fmt(d, f),
            Value::Term(t) => Display::fmt(t, f),
            Value::Poly(p) => Display::fmt(p, f),
        }
    }
}

impl<R> Debug for Value<R>
where R: Coeff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(r)  => write!(f, "Int({r:?})"),
            Value::Ind(d)  => write!(f, "Ind({d:?})"),
            Value::Term(t) => write!(f, "Term({t:?})"),
            Value::Poly(p) => write!(f, "Poly({p:?})"),
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "tex")] {
        use crate::tex::TeX;

        impl<R> TeX for Value<R>
        where R: Coeff {
            fn tex_math_symbol() -> String {
                Poly::<R>::tex_math_symbol()
            }

            fn tex_string(&self) -> String {
                match self {
                    Value::Int(r)  => r.to_string(),
                    Value::Ind(d)  => d.tex_string(),
                    Value::Term(t) => t.tex_string(),
                    Value::Poly(p) => p.tex_string(),
                }
            }
        }
    }
}
