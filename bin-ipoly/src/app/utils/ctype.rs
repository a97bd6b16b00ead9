use clap::ValueEnum;
use derive_more::Display;

/// Coefficient type the inputs are decoded into.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Display, Debug, Default)]
#[clap(rename_all="lower")]
pub enum CType { 
    #[default] 
    #[display("i64")]
    I64, 

    #[display("i128")]
    I128, 

    #[display("bigint")]
    BigInt
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Display, Debug, Default)]
#[clap(rename_all="lower")]
pub enum Format { 
    #[default] 
    Unicode, 
    TeX,
    Json
}
