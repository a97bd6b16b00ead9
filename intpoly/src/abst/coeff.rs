use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{AddAssign, MulAssign};
use std::str::FromStr;
use num_bigint::BigInt;
use num_traits::Signed;

// Coefficient rings: signed integers, fixed width or arbitrary precision.

pub trait Coeff: 
    Default + 
    Clone + 
    PartialEq + 
    Eq + 
    PartialOrd + 
    Ord + 
    Hash + 
    Signed + 
    FromStr + 
    From<i32> + 
    Display + 
    Debug + 
    Send + 
    Sync + 
    for<'x> AddAssign<&'x Self> + 
    for<'x> MulAssign<&'x Self> + 
    'static
{
    fn math_symbol() -> String { 
        String::from("Z")
    }
}

macro_rules! impl_coeff {
    ($type:ty) => {
        impl Coeff for $type {}
    };
}

impl_coeff!(i32);
impl_coeff!(i64);
impl_coeff!(i128);
impl_coeff!(BigInt);
