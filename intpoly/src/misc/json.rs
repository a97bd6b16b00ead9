use std::str::FromStr;
use serde_json::{Number, Value};

use crate::{Coeff, Error};
use super::err::invalid;

pub(crate) fn parse_json(json: &str) -> Result<Value, Error> { 
    serde_json::from_str(json).or_else(|e| 
        invalid!("", "malformed JSON: {e}")
    )
}

pub(crate) fn json_kind(data: &Value) -> &'static str { 
    match data { 
        Value::Null      => "null",
        Value::Bool(_)   => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_)  => "array",
        Value::Object(_) => "object",
    }
}

// Coefficients are written as JSON numbers using their decimal form, 
// so arbitrary precision values survive a round trip.
pub(crate) fn coeff_to_data<R>(r: &R) -> Value
where R: Coeff { 
    let s = r.to_string();
    match Number::from_str(&s) { 
        Ok(n)  => Value::Number(n),
        Err(_) => Value::String(s)
    }
}

pub(crate) fn coeff_from_data<R>(data: &Value, at: &str) -> Result<R, Error>
where R: Coeff { 
    let Value::Number(n) = data else { 
        return invalid!(at, "expected integer, got {}: {data}", json_kind(data))
    };
    R::from_str(&n.to_string()).or_else(|_| 
        invalid!(at, "expected integer, got: {n}")
    )
}
