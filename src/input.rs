//! Dynamically typed caller values.
//!
//! Hosts that forward values from loosely typed sources (JSON, scripting
//! bridges) may hand over nothing at all, or something that is not text.
//! `Input` carries that distinction up to validation in `get`.

use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<'a> {
    Missing,
    Text(&'a str),
    /// Display form of a non-string value.
    Other(String),
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(s: &'a str) -> Self {
        Input::Text(s)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(s: &'a String) -> Self {
        Input::Text(s.as_str())
    }
}

impl<'a, T> From<Option<T>> for Input<'a>
where
    T: Into<Input<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Input::Missing, Into::into)
    }
}

impl<'a> From<&'a Value> for Input<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Null => Input::Missing,
            Value::String(s) => Input::Text(s),
            other => Input::Other(other.to_string()),
        }
    }
}

macro_rules! non_text_input {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Input<'_> {
                fn from(value: $ty) -> Self {
                    Input::Other(value.to_string())
                }
            }
        )*
    };
}

non_text_input!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64, bool);
