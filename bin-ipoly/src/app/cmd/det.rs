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
    /// JSON list of rows of polynomials, or a file containing it.
    pub input: String,

    #[arg(short = 't', long, default_value = "i64")]
    pub c_type: CType,

    /// Print the matrix before its determinant.
    #[arg(short = 'm', long)]
    pub show_matrix: bool,

    /// Drop the zero terms of the result.
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
    buff: String,
    _coeff: PhantomData<R>
}

impl<R> App<R>
where R: Coeff {
    pub fn new(args: Args) -> Self { 
        let buff = String::with_capacity(1024);
        App { args, buff, _coeff: PhantomData }
    }

    pub fn run(&mut self) -> CliResult<String> { 
        let m = load_mat::<R>(&self.args.input)?;
        info!("matrix: {} x {}", m.nrows(), m.ncols());

        ensure!(m.is_square(), "matrix must be square, got {} x {}.", m.nrows(), m.ncols());

        if self.args.show_matrix { 
            let s = render_mat(&m, self.args.format);
            self.out(&s);
            self.out("");
        }

        let (d, time) = measure(|| m.det());
        info!("det: {} terms, time: {time:?}", d.as_ref().map(|d| d.nterms()).unwrap_or(0));

        let d = if self.args.reduced { 
            d?.reduced()
        } else { 
            d?
        };

        let s = render(&Value::Poly(d), self.args.format);
        self.out(&s);

        Ok(self.flush())
    }

    fn out(&mut self, str: &str) { 
        self.buff.push_str(str);
        self.buff.push('\n');
    }

    fn flush(&mut self) -> String { 
        let res = std::mem::take(&mut self.buff);
        res.trim().to_string()
    }
}
