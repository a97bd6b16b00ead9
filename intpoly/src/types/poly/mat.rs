use std::fmt::{Debug, Display};
use std::ops::{Index, IndexMut};
use itertools::Itertools;
use log::debug;
use num_traits::Zero;
use serde_json::Value;

use crate::{Coeff, Error, Sign};
use crate::misc::{invalid, json_kind, parse_json};
use super::{Poly, Term};

/// A dense matrix of polynomials, stored row by row.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct PolyMat<R> {
    elems: Vec<Poly<R>>,
    stride: usize
}

impl<R> PolyMat<R>
where R: Coeff {
    /// A `rows x cols` matrix with every entry set to the constant 0.
    pub fn new(rows: usize, cols: usize) -> Self {
        let zero = Poly::from(Term::<R>::default());
        Self { elems: vec![zero; rows * cols], stride: cols }
    }

    pub fn from_rows<I>(rows: I) -> Result<Self, Error>
    where I: IntoIterator<Item = Vec<Poly<R>>> {
        let rows = rows.into_iter().collect_vec();
        let stride = rows.first().map(|r| r.len()).unwrap_or(0);

        if let Some((i, r)) = rows.iter().find_position(|r| r.len() != stride) {
            return Err(Error::Shape {
                msg: format!("row {i} has {} entries, expected {stride}", r.len())
            })
        }

        let elems = rows.into_iter().flatten().collect();
        Ok(Self { elems, stride })
    }

    pub fn nrows(&self) -> usize {
        if self.stride == 0 {
            0
        } else {
            self.elems.len() / self.stride
        }
    }

    pub fn ncols(&self) -> usize {
        self.stride
    }

    pub fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Poly<R>> {
        self.elems.iter()
    }

    /// A copy with the `i`-th row and `j`-th column removed.
    pub fn minor(&self, i: usize, j: usize) -> Self {
        let stride = self.stride;
        let elems = self.elems.iter().enumerate().filter(|(k, _)|
            k / stride != i && k % stride != j
        ).map(|(_, p)| p.clone()).collect();

        Self { elems, stride: stride.saturating_sub(1) }
    }

    /// Laplace expansion along the first row.
    pub fn det(&self) -> Result<Poly<R>, Error> {
        if !self.is_square() {
            return Err(Error::Shape {
                msg: format!("determinant of non-square matrix ({} x {})", self.nrows(), self.ncols())
            })
        }
        if self.stride == 0 {
            return Err(Error::Shape {
                msg: String::from("determinant of empty matrix")
            })
        }
        Ok(self.det_rec())
    }

    fn det_rec(&self) -> Poly<R> {
        let n = self.stride;
        if n == 1 {
            return self[(0, 0)].clone()
        }

        (0..n).fold(Poly::zero(), |res, j| {
            let e = R::from(Sign::from_parity(j as i64).to_i32());
            let a = &self[(0, j)] * e;
            let d = self.minor(0, j).det_rec();

            debug!("det({n}) expand at (0, {j}): ({a}) * ({d})");

            res + a * d
        })
    }

    pub fn to_data(&self) -> Value {
        let rows = self.elems.chunks(self.stride.max(1)).map(|row|
            Value::Array(row.iter().map(|p| p.to_data()).collect())
        ).collect();
        Value::Array(rows)
    }

    pub fn to_json(&self) -> String {
        self.to_data().to_string()
    }

    /// Decodes a JSON array of rows, each an array of polynomials.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let data = parse_json(json)?;
        Self::from_data(&data)
    }

    pub fn from_data(data: &Value) -> Result<Self, Error> {
        let Value::Array(rows) = data else {
            return invalid!("", "expected a list of rows, got {}: {data}", json_kind(data))
        };

        let rows = rows.iter().enumerate().map(|(i, row)| {
            let Value::Array(entries) = row else {
                return invalid!(format!("[{i}]"), "expected a list of polynomials, got {}: {row}", json_kind(row))
            };
            entries.iter().enumerate().map(|(j, p)|
                Poly::from_data(p).map_err(|e| e.under(&format!("[{i}][{j}]")))
            ).collect::<Result<Vec<_>, _>>()
        }).collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(rows)
    }
}

impl<R> Index<(usize, usize)> for PolyMat<R>
where R: Coeff {
    type Output = Poly<R>;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert!(j < self.stride);
        &self.elems[i * self.stride + j]
    }
}

impl<R> IndexMut<(usize, usize)> for PolyMat<R>
where R: Coeff {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        assert!(j < self.stride);
        &mut self.elems[i * self.stride + j]
    }
}

impl<R> Display for PolyMat<R>
where R: Coeff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.elems.is_empty() || self.stride == 0 {
            return f.write_str("[]")
        }

        let n = self.stride;
        let parts = self.elems.iter().map(|p|
            if p.nterms() > 1 {
                format!("({p})")
            } else {
                p.to_string()
            }
        ).collect_vec();

        let mut widths = vec![0; n];
        for (k, s) in parts.iter().enumerate() {
            widths[k % n] = usize::max(widths[k % n], s.chars().count());
        }

        let padded = parts.iter().enumerate().map(|(k, s)|
            format!("{s:>w$}", w = widths[k % n])
        ).collect_vec();
        let rows = padded.chunks(n).map(|row| row.join(" ")).collect_vec();

        if rows.len() == 1 {
            return write!(f, "[{}]", rows[0])
        }

        let last = rows.len() - 1;
        let lines = rows.iter().enumerate().map(|(i, row)|
            match i {
                0 => format!("⎡{row}⎤"),
                i if i == last => format!("⎣{row}⎦"),
                _ => format!("⎢{row}⎥")
            }
        ).collect_vec();

        f.write_str(&lines.join("\n"))
    }
}

impl<R> Debug for PolyMat<R>
where R: Coeff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "tex")] {
        use crate::tex::TeX;

        impl<R> TeX for PolyMat<R>
        where R: Coeff {
            fn tex_math_symbol() -> String {
                format!("M({})", Poly::<R>::tex_math_symbol())
            }

            fn tex_string(&self) -> String {
                let rows = self.elems.chunks(self.stride.max(1)).map(|row|
                    row.iter().map(|p| p.tex_string()).join(" & ")
                ).join(" \\\\\n");
                format!("\\begin{{pmatrix}}\n{rows}\n\\end{{pmatrix}}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use num_traits::One;
    use crate::Ind;
    use super::*;

    type P = Poly<i64>;
    type M = PolyMat<i64>;

    fn p(s: &str) -> P {
        P::from_str(s).unwrap()
    }

    fn mat(rows: Vec<Vec<&str>>) -> M {
        M::from_rows(rows.into_iter().map(|r| r.into_iter().map(p).collect())).unwrap()
    }

    #[test]
    fn new() {
        let m = M::new(2, 3);
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 3);
        assert!(!m.is_square());
        assert!(m.iter().all(|p| p.is_zero() && p.nterms() == 1));
        assert_eq!(m[(1, 2)].to_string(), "0");
    }

    #[test]
    fn from_rows_ragged() {
        let e = M::from_rows([vec![P::one(), P::one()], vec![P::one()]]).unwrap_err();
        assert_eq!(e, Error::Shape { msg: "row 1 has 1 entries, expected 2".into() });
    }

    #[test]
    fn index_mut() {
        let mut m = M::new(2, 2);
        m[(0, 1)] = p("x");
        assert_eq!(m[(0, 1)], p("x"));
        assert_eq!(m[(1, 0)].to_string(), "0");
    }

    #[test]
    fn minor() {
        let m = mat(vec![
            vec!["1", "2", "3"],
            vec!["4", "5", "6"],
            vec!["7", "8", "9"],
        ]);
        assert_eq!(m.minor(0, 0), mat(vec![vec!["5", "6"], vec!["8", "9"]]));
        assert_eq!(m.minor(1, 2), mat(vec![vec!["1", "2"], vec!["7", "8"]]));
        assert_eq!(m.minor(2, 1), mat(vec![vec!["1", "3"], vec!["4", "6"]]));
    }

    #[test]
    fn det_1x1() {
        let m = mat(vec![vec!["x + y"]]);
        assert_eq!(m.det(), Ok(p("x + y")));
    }

    #[test]
    fn det_2x2() {
        let m = mat(vec![
            vec!["x", "y"],
            vec!["y", "x"],
        ]);
        assert_eq!(m.det().unwrap().to_string(), "x² - y²");
    }

    #[test]
    fn det_3x3_const() {
        let m = mat(vec![
            vec!["6", "1", "1"],
            vec!["4", "-2", "5"],
            vec!["2", "8", "7"],
        ]);
        assert_eq!(m.det().unwrap().to_string(), "-306");
    }

    #[test]
    fn det_3x3() {
        // Alexander-type matrix with entries in Z[x].
        let m = mat(vec![
            vec!["1 - x", "x", "-1"],
            vec!["-1", "1 - x", "x"],
            vec!["x", "-1", "1 - x"],
        ]);
        // (1-x)^3 + x^3 - 1 + 3x(1-x)
        assert_eq!(m.det().unwrap().to_string(), "0");
    }

    #[test]
    fn det_laurent() {
        let m = mat(vec![
            vec!["x", "1"],
            vec!["x¯¹", "x¯¹"],
        ]);
        let d = m.det().unwrap();
        assert_eq!(d.to_string(), "1 - x¯¹");
        assert_eq!(d.coeff(&Ind::from([0])), 1);
        assert_eq!(d.coeff(&Ind::from([-1])), -1);
    }

    #[test]
    fn det_zero_matrix() {
        let d = M::new(3, 3).det().unwrap();
        assert!(d.is_zero());
        assert_eq!(d.to_string(), "0");
    }

    #[test]
    fn det_invalid() {
        assert!(matches!(M::new(2, 3).det(), Err(Error::Shape { .. })));
        assert!(matches!(M::new(0, 0).det(), Err(Error::Shape { .. })));
    }

    #[test]
    fn display() {
        assert_eq!(M::new(0, 0).to_string(), "[]");
        assert_eq!(mat(vec![vec!["x", "2y"]]).to_string(), "[x 2y]");

        let m = mat(vec![
            vec!["x", "1"],
            vec!["x + y", "-3"],
            vec!["y", "z²"],
        ]);
        assert_eq!(m.to_string(), [
            "⎡      x  1⎤",
            "⎢(x + y) -3⎥",
            "⎣      y z²⎦",
        ].join("\n"));
    }

    #[test]
    fn json() {
        let m = mat(vec![
            vec!["x", "-1"],
            vec!["1", "y"],
        ]);
        assert_eq!(M::from_json(&m.to_json()), Ok(m));
    }

    #[test]
    fn from_json_invalid() {
        let e = M::from_json(r#"[[[{"const": 1}]], 1]"#).unwrap_err();
        assert_eq!(e, Error::Validation {
            at: "[1]".into(),
            msg: "expected a list of polynomials, got number: 1".into()
        });

        let e = M::from_json(r#"[[[{"const": 1}], [{"ind": [0.5]}]]]"#).unwrap_err();
        assert_eq!(e, Error::Validation {
            at: "[0][1][0].ind[0]".into(),
            msg: "expected integer, got: 0.5".into()
        });
    }
}
