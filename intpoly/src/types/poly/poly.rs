use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Mul, MulAssign};
use std::str::FromStr;
use auto_impl_ops::auto_ops;
use delegate::delegate;
use itertools::Itertools;
use log::trace;
use num_traits::{One, Zero};
use serde_json::Value;

use crate::{Coeff, Error, Sign};
use crate::misc::{invalid, json_kind, parse_json};
use super::{Ind, Term};
use super::term::fmt_term;

// A polynomial is a sparse list of terms.
//
// After any arithmetic the terms are canonical: sorted in strictly
// descending order (see `Ind::cmp_lex`), at most one term per monomial.
// Terms whose coefficients cancel to 0 are kept; use `reduced` to drop them.

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Poly<R> {
    terms: Vec<Term<R>>
}

impl<R> Poly<R>
where R: Coeff {
    /// Wraps the terms as given, without canonicalizing.
    pub fn new(terms: Vec<Term<R>>) -> Self {
        Self { terms }
    }

    /// One term per `(coefficient, exponents)` pair, in input order.
    pub fn from_pairs<I>(pairs: I) -> Self
    where I: IntoIterator<Item = (R, Vec<isize>)> {
        pairs.into_iter().map(|(r, d)| Term::new(r, Ind::new(d))).collect()
    }

    pub fn from_const(r: R) -> Self {
        Self::new(vec![Term::from_const(r)])
    }

    delegate! {
        to self.terms {
            #[call(len)]
            pub fn nterms(&self) -> usize;
            pub fn iter(&self) -> std::slice::Iter<'_, Term<R>>;
        }
    }

    pub fn terms(&self) -> &[Term<R>] {
        &self.terms
    }

    pub fn into_terms(self) -> Vec<Term<R>> {
        self.terms
    }

    /// Sorts the terms and merges those with equal indeterminates.
    pub fn canonicalize(&self) -> Self {
        Self::new(compact(self.terms.clone()))
    }

    pub fn is_canonical(&self) -> bool {
        self.terms.iter().tuple_windows().all(|(t0, t1)| t0.gt(t1))
    }

    /// A copy without zero-coefficient terms.
    pub fn reduced(&self) -> Self {
        self.iter().filter(|t| !t.is_zero()).cloned().collect()
    }

    /// The greatest non-zero term.
    pub fn lead_term(&self) -> Option<&Term<R>> {
        self.iter()
            .filter(|t| !t.is_zero())
            .max_by(|t0, t1| t0.cmp_ind(t1))
    }

    pub fn coeff(&self, ind: &Ind) -> R {
        self.iter().filter(|t| t.ind() == ind).fold(R::zero(), |mut res, t| {
            res += t.coeff();
            res
        })
    }

    pub fn to_data(&self) -> Value {
        Value::Array(self.iter().map(|t| t.to_data()).collect())
    }

    /// Encodes as a JSON array of terms.
    pub fn to_json(&self) -> String {
        self.to_data().to_string()
    }

    /// Decodes a JSON array of terms. The terms are kept as given.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let data = parse_json(json)?;
        Self::from_data(&data)
    }

    pub fn from_data(data: &Value) -> Result<Self, Error> {
        let Value::Array(items) = data else {
            return invalid!("", "expected a list of terms, got {}: {data}", json_kind(data))
        };

        items.iter().enumerate().map(|(i, item)|
            Term::from_data(item).map_err(|e| e.under(&format!("[{i}]")))
        ).collect()
    }
}

fn compact<R>(mut terms: Vec<Term<R>>) -> Vec<Term<R>>
where R: Coeff {
    terms.sort_by(|t0, t1| t1.cmp_ind(t0));

    let mut res: Vec<Term<R>> = Vec::with_capacity(terms.len());
    for t in terms {
        match res.last_mut() {
            Some(last) if last.ind_eq(&t) => {
                trace!("merge {t} into {last}");
                last.add_coeff(t.coeff());
            },
            _ => res.push(t)
        }
    }
    res
}

impl<R> From<Term<R>> for Poly<R>
where R: Coeff {
    fn from(t: Term<R>) -> Self {
        Self::new(vec![t])
    }
}

impl<R> FromIterator<Term<R>> for Poly<R>
where R: Coeff {
    fn from_iter<T: IntoIterator<Item = Term<R>>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<R> IntoIterator for Poly<R>
where R: Coeff {
    type Item = Term<R>;
    type IntoIter = std::vec::IntoIter<Term<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<R> Zero for Poly<R>
where R: Coeff {
    fn zero() -> Self {
        Self::new(vec![])
    }

    // true if every stored coefficient is 0.
    fn is_zero(&self) -> bool {
        self.iter().all(|t| t.is_zero())
    }
}

impl<R> One for Poly<R>
where R: Coeff {
    fn one() -> Self {
        Self::from_const(R::one())
    }
}

#[auto_ops]
impl<R> AddAssign<&Poly<R>> for Poly<R>
where R: Coeff {
    fn add_assign(&mut self, rhs: &Poly<R>) {
        let mut terms = std::mem::take(&mut self.terms);
        terms.extend(rhs.iter().cloned());
        self.terms = compact(terms);
    }
}

#[auto_ops]
impl<R> MulAssign<&Poly<R>> for Poly<R>
where R: Coeff {
    fn mul_assign(&mut self, rhs: &Poly<R>) {
        let terms = rhs.iter().flat_map(|t|
            self.iter().map(move |s| s * t)
        ).collect_vec();
        self.terms = compact(terms);
    }
}

#[auto_ops]
impl<R> MulAssign<&Term<R>> for Poly<R>
where R: Coeff {
    fn mul_assign(&mut self, rhs: &Term<R>) {
        let terms = self.iter().map(|s| s * rhs).collect_vec();
        self.terms = compact(terms);
    }
}

#[auto_ops]
impl<R> MulAssign<&R> for Poly<R>
where R: Coeff {
    fn mul_assign(&mut self, rhs: &R) {
        for t in self.terms.iter_mut() {
            *t *= rhs;
        }
    }
}

impl<R> Display for Poly<R>
where R: Coeff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut res: Vec<String> = vec![];

        for t in self.iter().filter(|t| !t.is_zero()) {
            let sign = Sign::of(t.coeff());
            let term = fmt_term(&t.coeff().abs(), t.ind());

            if res.is_empty() {
                if sign.is_negative() {
                    res.push(format!("{sign}{term}"));
                } else {
                    res.push(term);
                }
            } else {
                res.push(sign.to_string());
                res.push(term);
            }
        }

        if res.is_empty() {
            f.write_str("0")
        } else {
            f.write_str(&res.join(" "))
        }
    }
}

impl<R> Debug for Poly<R>
where R: Coeff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// Accepts the display form, e.g. `4xy + x + y` or `-x¯¹ - 3`.
// The terms are kept in the given order.
impl<R> FromStr for Poly<R>
where R: Coeff {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let Some(first) = tokens.next() else {
            return invalid!("", "empty polynomial")
        };

        let mut terms = vec![Term::from_str(first)?];

        while let Some(op) = tokens.next() {
            let Some(next) = tokens.next() else {
                return invalid!("", "missing term after `{op}` in `{s}`")
            };
            let mut t = Term::from_str(next)?;
            match op {
                "+" => (),
                "-" => t.neg_coeff(),
                _ => return invalid!("", "expected `+` or `-`, got `{op}` in `{s}`")
            }
            terms.push(t);
        }

        Ok(Self::new(terms))
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "tex")] {
        use crate::tex::TeX;

        impl<R> TeX for Poly<R>
        where R: Coeff {
            fn tex_math_symbol() -> String {
                Term::<R>::tex_math_symbol()
            }

            fn tex_string(&self) -> String {
                let mut res: Vec<String> = vec![];

                for t in self.iter().filter(|t| !t.is_zero()) {
                    let sign = Sign::of(t.coeff());
                    let term = Term::new(t.coeff().abs(), t.ind().clone()).tex_string();

                    if res.is_empty() {
                        res.push(if sign.is_negative() { format!("{sign}{term}") } else { term });
                    } else {
                        res.push(format!("{sign} {term}"));
                    }
                }

                if res.is_empty() { String::from("0") } else { res.join(" ") }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use super::*;

    type P = Poly<i64>;

    #[test]
    fn init() {
        let p = P::from_pairs([(2, vec![1]), (3, vec![1]), (0, vec![0, 2])]);
        assert_eq!(p.nterms(), 3);
        assert_eq!(p.terms()[0], Term::new(2, Ind::from([1])));
        assert_eq!(p.terms()[2], Term::new(0, Ind::from([0, 2])));
        assert!(!p.is_canonical());
    }

    #[test]
    fn add() {
        let p = P::from_pairs([(2, vec![1])]);
        let q = P::from_pairs([(2, vec![1])]);
        assert_eq!((p + q).to_string(), "4x");
    }

    #[test]
    fn add_merge() {
        let p = P::from_pairs([(1, vec![0, 1]), (1, vec![1, 0]), (2, vec![1, 1])]);
        let q = P::from_pairs([(2, vec![1, 1])]);
        let s = &p + &q;

        assert_eq!(s.to_string(), "4xy + x + y");
        assert_eq!(s, P::from_pairs([(4, vec![1, 1]), (1, vec![1, 0]), (1, vec![0, 1])]));
        assert!(s.is_canonical());

        // operands are untouched.
        assert_eq!(p.nterms(), 3);
        assert_eq!(p.terms()[0], Term::new(1, Ind::from([0, 1])));
        assert_eq!(q.nterms(), 1);
    }

    #[test]
    fn add_assign() {
        let mut p = P::from_pairs([(1, vec![2]), (3, vec![0])]);
        p += P::from_pairs([(-2, vec![1])]);
        assert_eq!(p.to_string(), "x² - 2x + 3");
    }

    #[test]
    fn add_keeps_zero_terms() {
        let p = P::from_pairs([(3, vec![1]), (1, vec![0])]);
        let q = P::from_pairs([(-3, vec![1])]);
        let s = p + q;

        assert_eq!(s, P::from_pairs([(0, vec![1]), (1, vec![0])]));
        assert_eq!(s.to_string(), "1");
        assert_eq!(s.reduced(), P::from_pairs([(1, vec![0])]));
    }

    #[test]
    fn add_cancel_all() {
        let p = P::from_pairs([(3, vec![1, 1])]);
        let q = P::from_pairs([(-3, vec![1, 1])]);
        let s = p + q;

        assert!(s.is_zero());
        assert_eq!(s.nterms(), 1);
        assert_eq!(s.to_string(), "0");
        assert_eq!(s.reduced(), P::zero());
    }

    #[test]
    fn add_mixed_arity() {
        let p = P::from_pairs([(1, vec![1]), (2, vec![0, 0, 1])]);
        let q = P::from_pairs([(1, vec![1, 0]), (5, vec![1])]);
        let s = p + q;

        // [1] and [1, 0] are different monomials.
        assert_eq!(s, P::from_pairs([(1, vec![1, 0]), (6, vec![1]), (2, vec![0, 0, 1])]));
        assert!(s.is_canonical());
        assert_eq!(s.to_string(), "x + 6x + 2z");
    }

    #[test]
    fn canonicalize() {
        let p = P::from_pairs([(1, vec![0, 1]), (2, vec![1, 0]), (3, vec![0, 1]), (-1, vec![2])]);
        let c = p.canonicalize();

        assert_eq!(c, P::from_pairs([(-1, vec![2]), (2, vec![1, 0]), (4, vec![0, 1])]));
        assert_eq!(c.canonicalize(), c);
        assert_eq!(p.nterms(), 4);
    }

    #[test]
    fn canonicalize_empty() {
        assert_eq!(P::zero().canonicalize(), P::zero());
        assert!(P::zero().is_canonical());
    }

    #[test]
    fn display() {
        for (p, s) in [
            (P::zero(), "0"),
            (P::from_pairs([(0, vec![1])]), "0"),
            (P::from_pairs([(-1, vec![1])]), "-x"),
            (P::from_pairs([(-5, vec![])]), "-5"),
            (P::from_pairs([(1, vec![2]), (-1, vec![1]), (-1, vec![])]), "x² - x - 1"),
            (P::from_pairs([(-2, vec![1, 1]), (0, vec![1]), (3, vec![])]), "-2xy + 3"),
            (P::from_pairs([(2, vec![3, 0, 2, 0]), (-1, vec![1, 0, 0, 0])]), "2x₀³x₂² - x₀"),
        ] {
            assert_eq!(p.to_string(), s);
        }
    }

    #[test]
    fn display_is_pure() {
        let p = P::from_pairs([(-2, vec![1]), (-3, vec![])]);
        assert_eq!(p.to_string(), "-2x - 3");
        assert_eq!(p.to_string(), "-2x - 3");
        assert_eq!(p.terms()[0].coeff(), &-2);
        assert_eq!(p.terms()[1].coeff(), &-3);
    }

    #[test]
    fn mul() {
        let p = P::from_pairs([(2, vec![1])]);
        let q = P::from_pairs([(2, vec![1])]);
        assert_eq!((p * q).to_string(), "4x²");

        let p = P::from_pairs([(1, vec![0, 1])]);
        let q = P::from_pairs([(2, vec![1, 0])]);
        assert_eq!((p * q).to_string(), "2xy");

        // (x + y)(x - y) = x² - y²
        let p = P::from_pairs([(1, vec![1, 0]), (1, vec![0, 1])]);
        let q = P::from_pairs([(1, vec![1, 0]), (-1, vec![0, 1])]);
        let r = &p * &q;
        assert_eq!(r.to_string(), "x² - y²");
        assert_eq!(r.reduced(), P::from_pairs([(1, vec![2, 0]), (-1, vec![0, 2])]));
    }

    #[test]
    fn mul_zero() {
        let p = P::from_pairs([(1, vec![1, 0]), (1, vec![0, 1])]);
        assert_eq!(&p * P::zero(), P::zero());
        assert_eq!(P::zero() * &p, P::zero());
    }

    #[test]
    fn mul_one() {
        let p = P::from_pairs([(1, vec![1, 0]), (3, vec![0, 1])]);
        assert_eq!(&p * P::one(), p.canonicalize());
    }

    #[test]
    fn mul_term() {
        let p = P::from_pairs([(1, vec![1, 0]), (3, vec![0, 1])]);
        let t = Term::new(-2, Ind::from([0, 1]));
        assert_eq!((&p * &t).to_string(), "-2xy - 6y²");
    }

    #[test]
    fn mul_scalar() {
        let p = P::from_pairs([(1, vec![1, 0]), (3, vec![0, 1])]);
        assert_eq!(&p * -3, P::from_pairs([(-3, vec![1, 0]), (-9, vec![0, 1])]));
    }

    #[test]
    fn lead_term() {
        let p = P::from_pairs([(0, vec![3]), (1, vec![1, 1]), (4, vec![2])]);
        assert_eq!(p.lead_term(), Some(&Term::new(4, Ind::from([2]))));
        assert_eq!(P::zero().lead_term(), None);
    }

    #[test]
    fn coeff() {
        let p = P::from_pairs([(2, vec![1]), (3, vec![1]), (1, vec![0])]);
        assert_eq!(p.coeff(&Ind::from([1])), 5);
        assert_eq!(p.coeff(&Ind::from([2])), 0);
    }

    #[test]
    fn bigint() {
        type Q = Poly<BigInt>;
        let big = BigInt::from_str("9223372036854775807").unwrap();
        let p = Q::from_pairs([(big.clone(), vec![1])]);
        let s = &p + &p;
        assert_eq!(s.to_string(), "18446744073709551614x");
    }

    #[test]
    fn json() {
        let p = P::from_pairs([(2, vec![1]), (-1, vec![])]);
        let s = p.to_json();
        assert_eq!(s, r#"[{"const":2,"ind":[1]},{"const":-1,"ind":[]}]"#);
        assert_eq!(P::from_json(&s), Ok(p));
    }

    #[test]
    fn from_json_invalid() {
        let e = P::from_json(r#"{"const": 1}"#).unwrap_err();
        assert!(e.is_validation());

        let e = P::from_json(r#"[{"const": 1}, {"const": 1, "ind": [1, "a"]}]"#).unwrap_err();
        assert_eq!(e, Error::Validation {
            at: "[1].ind[1]".into(),
            msg: "expected integer, got: \"a\"".into()
        });
    }

    #[test]
    fn from_str() {
        let p = P::from_str("4xy + x + y").unwrap();
        assert_eq!(p, P::from_pairs([(4, vec![1, 1]), (1, vec![1]), (1, vec![0, 1])]));

        let p = P::from_str("-x¯¹ - 3").unwrap();
        assert_eq!(p, P::from_pairs([(-1, vec![-1]), (-3, vec![])]));
        assert_eq!(p.to_string(), "-x¯¹ - 3");

        assert!(P::from_str("").is_err());
        assert!(P::from_str("x +").is_err());
        assert!(P::from_str("x * y").is_err());
    }
}
