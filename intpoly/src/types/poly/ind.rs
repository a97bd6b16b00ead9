use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::ops::{Index, Mul, MulAssign};
use std::str::FromStr;
use auto_impl_ops::auto_ops;
use delegate::delegate;
use derive_more::Debug;
use itertools::Itertools;
use serde_json::Value;

use crate::Error;
use crate::format::{parse_subscript, parse_superscript, subscript, superscript};
use crate::misc::{invalid, json_kind, parse_json};

const SIMPLE_SYMBOLS: [char; 3] = ['x', 'y', 'z'];

/// Largest number of variable slots accepted when parsing the display form.
const MAX_VARS: usize = u16::MAX as usize;

/// The indeterminates of a single term: one exponent per variable slot.
///
/// Vectors of different lengths are never equal, even if they only
/// differ by trailing zeros.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
#[debug("{:?}", _0)]
pub struct Ind(Vec<isize>);

impl Ind {
    pub fn new(degs: Vec<isize>) -> Self {
        Self(degs)
    }

    /// The empty vector, i.e. the monomial `1`.
    pub fn one() -> Self {
        Self(vec![])
    }

    delegate! {
        to self.0 {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn iter(&self) -> std::slice::Iter<'_, isize>;
            pub fn as_slice(&self) -> &[isize];
        }
    }

    /// Exponent of the `i`-th variable; slots past the end are 0.
    pub fn deg_for(&self, i: usize) -> isize {
        self.0.get(i).copied().unwrap_or(0)
    }

    pub fn total_deg(&self) -> isize {
        self.iter().sum()
    }

    /// Whether no variable appears (all slots are 0).
    pub fn is_one(&self) -> bool {
        self.iter().all(|d| *d == 0)
    }

    /// Compares slot by slot from index 0, padding the shorter vector with
    /// zeros. Vectors that agree after padding are ordered by length.
    pub fn cmp_lex(&self, other: &Self) -> Ordering {
        let n = usize::max(self.len(), other.len());
        (0..n).fold(Ordering::Equal, |res, i| {
            res.then_with(||
                isize::cmp(&self.deg_for(i), &other.deg_for(i))
            )
        }).then_with(||
            usize::cmp(&self.len(), &other.len())
        )
    }

    fn symbol(&self, i: usize) -> String {
        if self.len() <= SIMPLE_SYMBOLS.len() {
            SIMPLE_SYMBOLS[i].to_string()
        } else {
            format!("x{}", subscript(i as isize))
        }
    }

    pub fn to_data(&self) -> Value {
        Value::Array(self.iter().map(|&d| Value::from(d)).collect())
    }

    /// Encodes as a JSON array of integers.
    pub fn to_json(&self) -> String {
        self.to_data().to_string()
    }

    /// Decodes a JSON array of integers.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let data = parse_json(json)?;
        Self::from_data(&data)
    }

    pub fn from_data(data: &Value) -> Result<Self, Error> {
        let Value::Array(items) = data else {
            return invalid!("", "expected a list of integers, got {}: {data}", json_kind(data))
        };

        let degs = items.iter().enumerate().map(|(i, item)| {
            match item.as_i64().and_then(|d| isize::try_from(d).ok()) {
                Some(d) => Ok(d),
                None => invalid!(format!("[{i}]"), "expected integer, got: {item}")
            }
        }).collect::<Result<Vec<_>, _>>()?;

        Ok(Self(degs))
    }
}

impl From<Vec<isize>> for Ind {
    fn from(degs: Vec<isize>) -> Self {
        Self(degs)
    }
}

impl<const N: usize> From<[isize; N]> for Ind {
    fn from(degs: [isize; N]) -> Self {
        Self(degs.to_vec())
    }
}

impl From<&[isize]> for Ind {
    fn from(degs: &[isize]) -> Self {
        Self(degs.to_vec())
    }
}

impl FromIterator<isize> for Ind {
    fn from_iter<T: IntoIterator<Item = isize>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Index<usize> for Ind {
    type Output = isize;

    fn index(&self, i: usize) -> &Self::Output {
        self.0.get(i).unwrap_or(&0)
    }
}

impl PartialOrd for Ind {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ind {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_lex(other)
    }
}

// x^a * x^b = x^{a + b}. The result is as long as the longer operand.
#[auto_ops]
impl MulAssign<&Ind> for Ind {
    fn mul_assign(&mut self, rhs: &Ind) {
        if self.len() < rhs.len() {
            self.0.resize(rhs.len(), 0);
        }
        for (d, e) in self.0.iter_mut().zip(rhs.iter()) {
            *d = d.checked_add(*e).unwrap_or_else(||
                panic!("exponent overflow: {d} + {e}")
            );
        }
    }
}

impl Display for Ind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.iter().enumerate().filter(|(_, d)| **d != 0).map(|(i, &d)| {
            let x = self.symbol(i);
            if d == 1 {
                x
            } else {
                format!("{x}{}", superscript(d))
            }
        }).join("");

        if s.is_empty() {
            f.write_str("1")
        } else {
            f.write_str(&s)
        }
    }
}

// Parses the display form. Yields the shortest vector with that display:
// `x`, `y`, `z` give up to three slots, indexed symbols at least four.
impl FromStr for Ind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "1" {
            return Ok(Ind::one())
        }

        let r = regex::Regex::new("([xyz])([₀₁₂₃₄₅₆₇₈₉]*)(¯?[⁰¹²³⁴⁵⁶⁷⁸⁹]*)").unwrap();

        let mut degs = BTreeMap::<usize, isize>::new();
        let mut indexed = None;
        let mut pos = 0;

        for c in r.captures_iter(s) {
            let Some(m) = c.get(0) else { continue };
            if m.start() != pos {
                return invalid!("", "unexpected `{}` in `{s}`", &s[pos..m.start()])
            }
            pos = m.end();

            let (x, sub, sup) = (&c[1], &c[2], &c[3]);
            let is_indexed = !sub.is_empty();

            if *indexed.get_or_insert(is_indexed) != is_indexed {
                return invalid!("", "mixed plain and indexed variables in `{s}`")
            }

            let i = if is_indexed {
                if x != "x" {
                    return invalid!("", "indexed variable must be `x`, got `{x}{sub}` in `{s}`")
                }
                match parse_subscript(sub).map(usize::try_from) {
                    Some(Ok(i)) if i < MAX_VARS => i,
                    Some(Ok(_)) => return invalid!("", "index `{sub}` too large in `{s}`"),
                    _ => return invalid!("", "invalid index `{sub}` in `{s}`")
                }
            } else {
                SIMPLE_SYMBOLS.iter().position(|c| x.starts_with(*c)).unwrap_or(0)
            };

            let d = if sup.is_empty() {
                1
            } else {
                match parse_superscript(sup) {
                    Some(d) => d,
                    None => return invalid!("", "invalid exponent `{sup}` in `{s}`")
                }
            };

            let e = degs.entry(i).or_insert(0);
            match e.checked_add(d) {
                Some(d) => *e = d,
                None => return invalid!("", "exponent overflow in `{s}`")
            }
        }

        if pos != s.len() {
            return invalid!("", "unexpected `{}` in `{s}`", &s[pos..])
        }

        let Some(&max) = degs.keys().max() else {
            return invalid!("", "empty indeterminates")
        };

        let n = if indexed == Some(true) {
            usize::max(max + 1, SIMPLE_SYMBOLS.len() + 1)
        } else {
            max + 1
        };

        let mut data = vec![0; n];
        for (i, d) in degs {
            data[i] = d;
        }

        Ok(Self(data))
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "tex")] {
        use crate::tex::{TeX, tex_power};

        impl TeX for Ind {
            fn tex_math_symbol() -> String {
                String::from("x")
            }

            fn tex_string(&self) -> String {
                let s = self.iter().enumerate().filter(|(_, d)| **d != 0).map(|(i, &d)| {
                    let x = if self.len() <= SIMPLE_SYMBOLS.len() {
                        SIMPLE_SYMBOLS[i].to_string()
                    } else {
                        format!("x_{{{i}}}")
                    };
                    tex_power(&x, d)
                }).join("");

                if s.is_empty() { String::from("1") } else { s }
            }
        }
    }
}
