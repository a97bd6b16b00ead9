use derive_more::Display;

/// Errors raised by decoding and by operations on dynamically typed operands.
#[derive(Clone, PartialEq, Eq, Debug, Display)]
pub enum Error { 
    /// Malformed input. `at` is the path to the offending item, 
    /// relative to the root `$` (e.g. `$[1].ind[0]`).
    #[display("invalid input at ${at}: {msg}")]
    Validation { at: String, msg: String },

    #[display("`{op}` is not supported between {lhs} and {rhs}")]
    TypeMismatch { op: &'static str, lhs: &'static str, rhs: &'static str },

    #[display("{msg}")]
    Shape { msg: String }
}

impl std::error::Error for Error {}

impl Error { 
    pub fn is_validation(&self) -> bool { 
        matches!(self, Error::Validation { .. })
    }

    pub fn is_type_mismatch(&self) -> bool { 
        matches!(self, Error::TypeMismatch { .. })
    }

    // Prepends `prefix` to the path of a validation error.
    pub(crate) fn under(self, prefix: &str) -> Self { 
        match self { 
            Error::Validation { at, msg } => Error::Validation { 
                at: format!("{prefix}{at}"), 
                msg 
            },
            e => e
        }
    }
}

macro_rules! invalid {
    ($at:expr, $($arg:tt)*) => {{
        let e = crate::Error::Validation { 
            at: ($at).to_string(), 
            msg: format!($($arg)*) 
        };
        Err(e)
    }}
}

macro_rules! mismatch {
    ($op:expr, $lhs:expr, $rhs:expr) => {{
        let e = crate::Error::TypeMismatch { 
            op: $op, 
            lhs: $lhs.kind(), 
            rhs: $rhs.kind() 
        };
        Err(e)
    }}
}

pub(crate) use {invalid, mismatch};
