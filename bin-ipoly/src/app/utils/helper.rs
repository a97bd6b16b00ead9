use std::path::Path;
use std::str::FromStr;
use log::info;
use intpoly::{Coeff, Poly, PolyMat, Value};
use intpoly::tex::TeX;

use crate::app::err::*;
use super::Format;

pub fn measure<F, Res>(proc: F) -> (Res, std::time::Duration) 
where F: FnOnce() -> Res { 
    let start = std::time::Instant::now();
    let res = proc();
    let time = start.elapsed();
    (res, time)
}

pub fn guard_panic<F, R>(f: F) -> CliResult<R>
where F: FnOnce() -> CliResult<R> + std::panic::UnwindSafe {
    std::panic::catch_unwind(|| {
        f()
    }).unwrap_or_else(|e| {
        let info = match e.downcast::<String>() {
            Ok(v) => *v,
            Err(e) => match e.downcast::<&str>() {
                Ok(v) => v.to_string(),
                _ => "Unknown Source of Error".to_owned()
            }
        };
        err!("panic: {info}")
    })
}

// An argument naming an existing file is replaced by the file's contents.
pub fn read_input(input: &str) -> CliResult<String> { 
    let path = Path::new(input);
    let text = if path.is_file() { 
        info!("read input from: {}", path.display());
        std::fs::read_to_string(path)?
    } else { 
        input.to_string()
    };

    let text = text.trim().to_string();
    ensure!(!text.is_empty(), "empty input.");

    Ok(text)
}

// JSON is tried first, then the display form of a polynomial.
pub fn load_value<R>(input: &str) -> CliResult<Value<R>>
where R: Coeff { 
    let text = read_input(input)?;

    match Value::from_json(&text) { 
        Ok(v) => Ok(v),
        Err(e) if text.starts_with(['[', '{']) => Err(e.into()),
        Err(_) => match Poly::from_str(&text) { 
            Ok(p) => Ok(Value::Poly(p)),
            Err(e) => err!("cannot parse '{text}': {e}")
        }
    }
}

pub fn load_mat<R>(input: &str) -> CliResult<PolyMat<R>>
where R: Coeff { 
    let text = read_input(input)?;
    let m = PolyMat::from_json(&text)?;
    Ok(m)
}

pub fn render<R>(value: &Value<R>, format: Format) -> String
where R: Coeff { 
    match format { 
        Format::Unicode => value.to_string(),
        Format::TeX     => value.tex_string(),
        Format::Json    => value.to_json()
    }
}

pub fn render_mat<R>(m: &PolyMat<R>, format: Format) -> String
where R: Coeff { 
    match format { 
        Format::Unicode => m.to_string(),
        Format::TeX     => m.tex_string(),
        Format::Json    => m.to_json()
    }
}
