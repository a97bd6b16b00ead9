use std::marker::PhantomData;
use log::info;
use intpoly::{Coeff, Value};
use crate::app::utils::*;
use crate::app::err::*;

pub fn dispatch(args: &Args) -> CliResult<String> {
    dispatch_coeff!(App, args)
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args { 
    /// JSON, a polynomial in display form, or a file containing either.
    pub input: String,

    #[arg(short = 't', long, default_value = "i64")]
    pub c_type: CType,

    /// Sort the terms of a polynomial and merge equal ones.
    #[arg(short, long)]
    pub canonical: bool,

    /// Drop the zero terms of a polynomial.
    #[arg(short, long)]
    pub reduced: bool,

    #[arg(short, long, default_value = "unicode")]
    pub format: Format,

    #[arg(long, default_value = "0")]
    pub log: u8,
}

pub struct App<R>
where R: Coeff {
    args: Args,
    _coeff: PhantomData<R>
}

impl<R> App<R>
where R: Coeff {
    pub fn new(args: Args) -> Self { 
        App { args, _coeff: PhantomData }
    }

    pub fn run(&mut self) -> CliResult<String> { 
        let value = load_value::<R>(&self.args.input)?;
        info!("input: {value:?}");

        if self.args.canonical || self.args.reduced { 
            ensure!(
                matches!(value, Value::Poly(_)), 
                "--canonical and --reduced apply to polynomials only, got {}.", value.kind()
            );
        }

        let value = match value { 
            Value::Poly(p) if self.args.canonical => Value::Poly(p.canonicalize()),
            v => v
        };

        let value = match value { 
            Value::Poly(p) if self.args.reduced => Value::Poly(p.reduced()),
            v => v
        };

        Ok(render(&value, self.args.format))
    }
}

#[cfg(test)]
mod tests { 
    use super::*;

    fn args(input: &str) -> Args { 
        Args { input: input.to_string(), ..Default::default() }
    }

    #[test]
    fn show_ind() { 
        let res = dispatch(&args("[1, 0, 2]"));
        assert_eq!(res.unwrap(), "xz²");

        let res = dispatch(&args("[0, 0, 0, 1]"));
        assert_eq!(res.unwrap(), "x₃");
    }

    #[test]
    fn show_term() { 
        let res = dispatch(&args(r#"{"const": -20, "ind": [-1, 0, 1]}"#));
        assert_eq!(res.unwrap(), "-20x¯¹z");
    }

    #[test]
    fn show_poly() { 
        let res = dispatch(&args(r#"[{"const": 1, "ind": [0, 1]}, {"const": 4, "ind": [1, 1]}]"#));
        assert_eq!(res.unwrap(), "y + 4xy");
    }

    #[test]
    fn show_canonical() { 
        let res = dispatch(&Args { 
            canonical: true,
            ..args("y + 2x - x + 0y²")
        });
        assert_eq!(res.unwrap(), "x + y");
    }

    #[test]
    fn show_reduced_json() { 
        let res = dispatch(&Args { 
            canonical: true,
            reduced: true,
            format: Format::Json,
            ..args("x - x + 3")
        });
        assert_eq!(res.unwrap(), r#"[{"const":3,"ind":[]}]"#);
    }

    #[test]
    fn show_tex() { 
        let res = dispatch(&Args { 
            format: Format::TeX,
            ..args("x¯¹y² - 3")
        });
        assert_eq!(res.unwrap(), "x^{-1}y^{2} - 3");
    }

    #[test]
    fn show_bigint() { 
        let res = dispatch(&Args { 
            c_type: CType::BigInt,
            ..args("[{\"const\": 123456789012345678901234567890, \"ind\": [2]}]")
        });
        assert_eq!(res.unwrap(), "123456789012345678901234567890x²");
    }

    #[test]
    fn show_overflow() { 
        let res = dispatch(&args("[{\"const\": 123456789012345678901234567890}]"));
        assert!(res.is_err());
    }

    #[test]
    fn show_file() { 
        let path = std::env::temp_dir().join("ipoly-show-file.json");
        std::fs::write(&path, "[2, 1]\n").unwrap();

        let res = dispatch(&args(path.to_str().unwrap()));
        assert_eq!(res.unwrap(), "x²y");
    }

    #[test]
    fn show_invalid() { 
        let e = dispatch(&args("[1, 2.5]")).unwrap_err();
        assert_eq!(e.to_string(), "invalid input at $[1]: expected integer, got: 2.5");

        let e = dispatch(&args("2w")).unwrap_err();
        assert!(e.to_string().starts_with("cannot parse '2w'"));

        let e = dispatch(&Args { canonical: true, ..args("[1]") }).unwrap_err();
        assert_eq!(e.to_string(), "--canonical and --reduced apply to polynomials only, got ind.");

        assert!(dispatch(&args("  ")).is_err());
    }
}
