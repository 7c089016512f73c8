#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod map;
mod number;
mod object;
mod partial;
mod range;
mod serialize;
mod time;
mod value;

pub use map::MapValue;
pub use number::Number;
pub use object::{Attributes, ObjectKind, ObjectValue};
pub use partial::{Partial, assign_distinct};
pub use range::RangeValue;
pub use serialize::{ToValueError, to_value};
pub use time::{date_attributes, format_date, format_time, time_attributes};
pub use value::Value;
