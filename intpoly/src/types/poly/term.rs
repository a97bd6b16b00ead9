use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::ops::{Mul, MulAssign};
use std::str::FromStr;
use auto_impl_ops::auto_ops;
use serde_json::{Map, Value};

use crate::{Coeff, Error};
use crate::misc::{coeff_from_data, coeff_to_data, invalid, json_kind, parse_json};
use super::Ind;

/// A single term: an integer coefficient times a monomial.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Term<R> {
    ind: Ind,
    coeff: R
}

impl<R> Term<R>
where R: Coeff {
    pub fn new(coeff: R, ind: Ind) -> Self {
        Self { ind, coeff }
    }

    pub fn from_const(coeff: R) -> Self {
        Self::new(coeff, Ind::one())
    }

    pub fn ind(&self) -> &Ind {
        &self.ind
    }

    pub fn coeff(&self) -> &R {
        &self.coeff
    }

    pub fn into_parts(self) -> (R, Ind) {
        (self.coeff, self.ind)
    }

    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }

    /// Compares the indeterminates only, ignoring the coefficients.
    pub fn ind_eq(&self, other: &Self) -> bool {
        self.ind == other.ind
    }

    /// The order used to sort the terms of a polynomial. Coefficients are
    /// not taken into account, see [`Ind::cmp_lex`].
    pub fn cmp_ind(&self, other: &Self) -> Ordering {
        self.ind.cmp_lex(&other.ind)
    }

    pub fn gt(&self, other: &Self) -> bool {
        self.cmp_ind(other).is_gt()
    }

    pub(crate) fn add_coeff(&mut self, r: &R) {
        self.coeff += r
    }

    pub(crate) fn neg_coeff(&mut self) {
        self.coeff = -self.coeff.clone()
    }

    pub fn to_data(&self) -> Value {
        let mut map = Map::new();
        map.insert("const".into(), coeff_to_data(&self.coeff));
        map.insert("ind".into(), self.ind.to_data());
        Value::Object(map)
    }

    /// Encodes as `{"const": c, "ind": [...]}`.
    pub fn to_json(&self) -> String {
        self.to_data().to_string()
    }

    /// Decodes `{"const": c, "ind": [...]}`. Missing fields default to
    /// `0` and `[]` respectively.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let data = parse_json(json)?;
        Self::from_data(&data)
    }

    pub fn from_data(data: &Value) -> Result<Self, Error> {
        let Value::Object(map) = data else {
            return invalid!("", "expected an object, got {}: {data}", json_kind(data))
        };

        if let Some(key) = map.keys().find(|k| !["const", "ind"].contains(&k.as_str())) {
            return invalid!(format!(".{key}"), "unknown field")
        }

        let coeff = match map.get("const") {
            Some(c) => coeff_from_data(c, ".const")?,
            None => R::zero()
        };

        let ind = match map.get("ind") {
            Some(d) => Ind::from_data(d).map_err(|e| e.under(".ind"))?,
            None => Ind::one()
        };

        Ok(Self::new(coeff, ind))
    }
}

impl<R> From<(R, Ind)> for Term<R>
where R: Coeff {
    fn from((coeff, ind): (R, Ind)) -> Self {
        Self::new(coeff, ind)
    }
}

#[auto_ops]
impl<R> MulAssign<&R> for Term<R>
where R: Coeff {
    fn mul_assign(&mut self, rhs: &R) {
        self.coeff *= rhs
    }
}

#[auto_ops]
impl<R> MulAssign<&Term<R>> for Term<R>
where R: Coeff {
    fn mul_assign(&mut self, rhs: &Term<R>) {
        self.coeff *= &rhs.coeff;
        self.ind *= &rhs.ind;
    }
}

pub(crate) fn fmt_term<R>(coeff: &R, ind: &Ind) -> String
where R: Coeff {
    if coeff.is_zero() {
        return String::from("0")
    }

    let x = ind.to_string();
    if coeff.is_one() {
        x
    } else if x == "1" {
        coeff.to_string()
    } else {
        format!("{coeff}{x}")
    }
}

impl<R> Display for Term<R>
where R: Coeff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&fmt_term(&self.coeff, &self.ind))
    }
}

impl<R> Debug for Term<R>
where R: Coeff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}{:?}", self.coeff, self.ind)
    }
}

// Accepts the display form, e.g. `10xy²z³`, `-20x¯¹z`, `5`. A missing
// coefficient is 1 (-1 for a bare `-`).
impl<R> FromStr for Term<R>
where R: Coeff {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let r = regex::Regex::new(r"^(-?)([0-9]*)(.*)$").unwrap();
        let Some(c) = r.captures(s) else {
            return invalid!("", "invalid term `{s}`")
        };

        let (sign, digits, x) = (&c[1], &c[2], &c[3]);

        let mut coeff = if digits.is_empty() {
            R::one()
        } else {
            match R::from_str(digits) {
                Ok(r) => r,
                Err(_) => return invalid!("", "invalid coefficient `{digits}` in `{s}`")
            }
        };
        if !sign.is_empty() {
            coeff = -coeff;
        }

        let ind = if x.is_empty() {
            if digits.is_empty() {
                return invalid!("", "invalid term `{s}`")
            }
            Ind::one()
        } else {
            Ind::from_str(x)?
        };

        Ok(Self::new(coeff, ind))
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "tex")] {
        use crate::tex::TeX;

        impl<R> TeX for Term<R>
        where R: Coeff {
            fn tex_math_symbol() -> String {
                format!("\\mathbb{{{}}}[x]", R::math_symbol())
            }

            fn tex_string(&self) -> String {
                if self.coeff.is_zero() {
                    return String::from("0")
                }

                let x = self.ind.tex_string();
                if x == "1" {
                    self.coeff.to_string()
                } else if self.coeff.is_one() {
                    x
                } else if (-self.coeff.clone()).is_one() {
                    format!("-{x}")
                } else {
                    format!("{}{x}", self.coeff)
                }
            }
        }
    }
}
