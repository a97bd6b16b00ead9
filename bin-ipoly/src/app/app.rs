use log::info;
use clap::{Parser, Subcommand};
use intpoly::util::log::{init_simple_logger, level_of};

use super::cmd::{calc, det, show};
use super::cmd::calc::Op;
use super::err::CliResult;
use super::utils::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Cmd
}

#[derive(Subcommand, Debug)]
#[clap(rename_all="lower")]
pub enum Cmd {
    /// Decode a value and print it.
    Show(show::Args),
    /// Add two polynomials.
    Add(calc::Args),
    /// Multiply two values.
    Mul(calc::Args),
    /// Determinant of a matrix of polynomials.
    Det(det::Args),
}

impl CliArgs { 
    fn log_level(&self) -> log::LevelFilter { 
        let level = match &self.command { 
            Cmd::Show(args) => args.log,
            Cmd::Add(args)  => args.log,
            Cmd::Mul(args)  => args.log,
            Cmd::Det(args)  => args.log,
        };
        level_of(level)
    }
}

pub struct App {
    pub args: CliArgs
}

impl App { 
    pub fn new() -> Self { 
        let args = CliArgs::parse();
        App { args }
    }

    pub fn run(&self) -> CliResult<String> { 
        self.init_logger()?;

        info!("args: {:?}", self.args);

        let (res, time) = measure(||
            self.dispatch()
        );

        info!("time: {:?}", time);

        res
    }

    fn init_logger(&self) -> CliResult<()> {
        let l = self.args.log_level();
        if l != log::LevelFilter::Off { 
            init_simple_logger(l)?;
        }
        Ok(())
    }

    fn dispatch(&self) -> CliResult<String> { 
        guard_panic(||
            match &self.args.command { 
                Cmd::Show(args) => show::dispatch(args),
                Cmd::Add(args)  => calc::dispatch(args, Op::Add),
                Cmd::Mul(args)  => calc::dispatch(args, Op::Mul),
                Cmd::Det(args)  => det::dispatch(args),
            }
        )
    }
}
