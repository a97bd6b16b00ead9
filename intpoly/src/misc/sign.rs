use std::ops::{Mul, Neg};
use derive_more::{Display, Debug};
use is_even::IsEven;
use num_traits::Signed;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Display, Debug)]
pub enum Sign { 
    #[default]
    #[display("+")]
    #[debug("+")]
    Pos,

    #[display("-")]
    #[debug("-")]
    Neg
}

impl Sign { 
    pub fn is_positive(&self) -> bool { 
        self == &Sign::Pos
    }

    pub fn is_negative(&self) -> bool { 
        !self.is_positive()
    }

    // (-1)^i
    pub fn from_parity<I: IsEven>(i: I) -> Self { 
        if i.is_even() { 
            Sign::Pos
        } else { 
            Sign::Neg
        }
    }

    // Zero counts as positive.
    pub fn of<T: Signed>(t: &T) -> Self { 
        if t.is_negative() { 
            Sign::Neg
        } else { 
            Sign::Pos
        }
    }

    pub fn to_i32(&self) -> i32 { 
        match self { 
            Sign::Pos =>  1,
            Sign::Neg => -1
        }
    }
}

impl Neg for Sign {
    type Output = Self;
    fn neg(self) -> Self {
        use Sign::*;
        match self { 
            Neg => Pos,
            Pos => Neg
        }
    }
}

impl Mul for Sign { 
    type Output = Self;
    fn mul(self, rhs: Self) -> Self { 
        if self == rhs { Sign::Pos } else { Sign::Neg }
    }
}
