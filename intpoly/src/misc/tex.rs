#![cfg(feature = "tex")]

pub trait TeX { 
    fn tex_math_symbol() -> String;
    fn tex_string(&self) -> String;
}

pub(crate) fn tex_power(x: &str, d: isize) -> String { 
    if d == 1 { 
        x.to_string()
    } else { 
        format!("{x}^{{{d}}}")
    }
}
