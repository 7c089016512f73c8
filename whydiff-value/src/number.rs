use core::fmt;

/// A numeric primitive.
///
/// Equality crosses representations: `Int(1)`, `UInt(1)` and `Float(1.0)`
/// all compare equal.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// A signed integer.
    Int(i64),
    /// An unsigned integer too large for, or naturally outside, `i64`.
    UInt(u64),
    /// A floating point number.
    Float(f64),
}

impl Number {
    /// Returns the number as an `f64`, possibly losing precision.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::UInt(u) => u as f64,
            Number::Float(f) => f,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::UInt(a), Number::UInt(b)) => a == b,
            (Number::Int(i), Number::UInt(u)) | (Number::UInt(u), Number::Int(i)) => {
                i128::from(i) == i128::from(u)
            }
            (Number::Float(a), Number::Float(b)) => a == b,
            (Number::Float(f), other) | (other, Number::Float(f)) => f == other.as_f64(),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::UInt(u) => write!(f, "{u}"),
            // Debug keeps the `.0` on whole floats.
            Number::Float(x) => write!(f, "{x:?}"),
        }
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Number {
            fn from(n: $t) -> Self {
                Number::Int(i64::from(n))
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Number {
            fn from(n: $t) -> Self {
                Number::UInt(u64::from(n))
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<isize> for Number {
    fn from(n: isize) -> Self {
        Number::Int(n as i64)
    }
}

impl From<usize> for Number {
    fn from(n: usize) -> Self {
        Number::UInt(n as u64)
    }
}

impl From<f32> for Number {
    fn from(n: f32) -> Self {
        Number::Float(f64::from(n))
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::Float(n)
    }
}
