use core::ops;

use crate::Value;

/// An interval with optional bounds, e.g. `1..10`, `1..=10`, `..5` or `3..`.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeValue {
    /// Lower bound, if any.
    pub start: Option<Box<Value>>,
    /// Upper bound, if any.
    pub end: Option<Box<Value>>,
    /// Whether the upper bound is part of the range.
    pub inclusive: bool,
}

impl RangeValue {
    /// A half-open range `start..end`.
    pub fn new(start: impl Into<Value>, end: impl Into<Value>) -> Self {
        Self {
            start: Some(Box::new(start.into())),
            end: Some(Box::new(end.into())),
            inclusive: false,
        }
    }

    /// A closed range `start..=end`.
    pub fn inclusive(start: impl Into<Value>, end: impl Into<Value>) -> Self {
        Self {
            inclusive: true,
            ..Self::new(start, end)
        }
    }
}

impl<T: Into<Value>> From<ops::Range<T>> for Value {
    fn from(range: ops::Range<T>) -> Self {
        Value::Range(RangeValue::new(range.start, range.end))
    }
}

impl<T: Into<Value>> From<ops::RangeInclusive<T>> for Value {
    fn from(range: ops::RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Value::Range(RangeValue::inclusive(start, end))
    }
}

impl<T: Into<Value>> From<ops::RangeFrom<T>> for Value {
    fn from(range: ops::RangeFrom<T>) -> Self {
        Value::Range(RangeValue {
            start: Some(Box::new(range.start.into())),
            end: None,
            inclusive: false,
        })
    }
}

impl<T: Into<Value>> From<ops::RangeTo<T>> for Value {
    fn from(range: ops::RangeTo<T>) -> Self {
        Value::Range(RangeValue {
            start: None,
            end: Some(Box::new(range.end.into())),
            inclusive: false,
        })
    }
}
