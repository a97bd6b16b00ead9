use std::marker::PhantomData;
use derive_more::Display;
use log::info;
use intpoly::{Coeff, Poly, Value};
use crate::app::utils::*;
use crate::app::err::*;

pub fn dispatch(args: &Args, op: Op) -> CliResult<String> {
    dispatch_coeff!(App, args, op)
}

#[derive(Clone, Copy, PartialEq, Eq, Display, Debug)]
pub enum Op { 
    #[display("+")]
    Add,

    #[display("*")]
    Mul
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args { 
    /// Left operand: JSON, a polynomial in display form, or a file containing either.
    pub a: String,

    /// Right operand.
    pub b: String,

    #[arg(short = 't', long, default_value = "i64")]
    pub c_type: CType,

    #[arg(short, long, default_value = "unicode")]
    pub format: Format,

    #[arg(long, default_value = "0")]
    pub log: u8,
}

pub struct App<R>
where R: Coeff {
    args: Args,
    op: Op,
    _coeff: PhantomData<R>
}

impl<R> App<R>
where R: Coeff {
    pub fn new(args: Args, op: Op) -> Self { 
        App { args, op, _coeff: PhantomData }
    }

    pub fn run(&mut self) -> CliResult<String> { 
        let a = load_value::<R>(&self.args.a)?;
        let b = load_value::<R>(&self.args.b)?;

        info!("a: {a:?}");
        info!("b: {b:?}");

        let res = match self.op { 
            Op::Add => lift_const(a).add(&lift_const(b))?,
            Op::Mul => a.mul(&b)?
        };

        info!("a {} b = {res:?}", self.op);

        Ok(render(&res, self.args.format))
    }
}

// A bare constant such as `5` decodes as an int; for `+` it is read as a
// constant polynomial.
fn lift_const<R>(v: Value<R>) -> Value<R>
where R: Coeff {
    match v {
        Value::Int(r) => Value::Poly(Poly::from_const(r)),
        v => v
    }
}
