use derive_more::Display;

// Errors raised by the command line layer itself. Library errors are
// passed through as they are.
#[derive(Debug, Display)]
#[display("{msg}")]
pub struct CliError { 
    pub msg: String
}

impl std::error::Error for CliError {}

pub type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

macro_rules! err {
    ($($arg:tt)*) => {{
        use crate::app::err::CliError;
        let e = CliError { msg: format!($($arg)*) };
        Err(e.into())
    }}
}

macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {{
        if !$cond { 
            return err!($($arg)*);
        }
    }}
}

pub(crate) use {err, ensure};
