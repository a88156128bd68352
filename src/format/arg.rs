//! Log call arguments.
//!
//! A closed set of cases checked in a fixed priority order by both the
//! sanitizer and the pretty-printer. Conversions pick the case up front so
//! neither consumer needs runtime type inspection.

use std::fmt;
use std::time::SystemTime;

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use serde_json::Value;

/// One argument of a log call.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Plain text, rendered verbatim.
    Str(String),
    /// An error, captured as its message.
    Error(String),
    /// Anything implementing `Display`, captured as its string form.
    Display(String),
    /// Raw byte buffer.
    Bytes(Vec<u8>),
    /// A point in time.
    Time(DateTime<Utc>),
    /// A value that cannot be serialized (closures, channels, raw pointers);
    /// only its type name is kept.
    Opaque(&'static str),
    /// A structured value that serialized cleanly.
    Value(Value),
    /// A structured value whose serialization failed.
    Unserializable {
        type_name: &'static str,
        debug: String,
    },
}

impl Arg {
    pub fn error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        Arg::Error(err.to_string())
    }

    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Arg::Display(value.to_string())
    }

    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Arg::Bytes(bytes.into())
    }

    pub fn time<Tz: TimeZone>(time: DateTime<Tz>) -> Self {
        Arg::Time(time.with_timezone(&Utc))
    }

    /// Record only the type name of `value`.
    pub fn opaque<T: ?Sized>(_value: &T) -> Self {
        Arg::Opaque(std::any::type_name::<T>())
    }

    /// Serialize `value` as structured data, keeping its `{:#?}` rendering
    /// when serialization fails.
    pub fn serialize<T: Serialize + fmt::Debug + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(json) => Arg::Value(json),
            Err(_) => Arg::Unserializable {
                type_name: std::any::type_name::<T>(),
                debug: format!("{value:#?}"),
            },
        }
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Str(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Str(s)
    }
}

impl From<&String> for Arg {
    fn from(s: &String) -> Self {
        Arg::Str(s.clone())
    }
}

impl From<char> for Arg {
    fn from(c: char) -> Self {
        Arg::Str(c.to_string())
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Arg::Value(Value::Bool(b))
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Arg {
                fn from(n: $t) -> Self {
                    Arg::Value(Value::from(n))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f64> for Arg {
    fn from(n: f64) -> Self {
        // JSON has no NaN or infinities.
        match serde_json::Number::from_f64(n) {
            Some(num) => Arg::Value(Value::Number(num)),
            None => Arg::Unserializable {
                type_name: "f64",
                debug: n.to_string(),
            },
        }
    }
}

impl From<f32> for Arg {
    fn from(n: f32) -> Self {
        Arg::from(f64::from(n))
    }
}

impl From<Vec<u8>> for Arg {
    fn from(bytes: Vec<u8>) -> Self {
        Arg::Bytes(bytes)
    }
}

impl From<&[u8]> for Arg {
    fn from(bytes: &[u8]) -> Self {
        Arg::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Arg {
    fn from(bytes: &[u8; N]) -> Self {
        Arg::Bytes(bytes.to_vec())
    }
}

impl From<DateTime<Utc>> for Arg {
    fn from(time: DateTime<Utc>) -> Self {
        Arg::Time(time)
    }
}

impl From<DateTime<chrono::Local>> for Arg {
    fn from(time: DateTime<chrono::Local>) -> Self {
        Arg::time(time)
    }
}

impl From<SystemTime> for Arg {
    fn from(time: SystemTime) -> Self {
        Arg::Time(DateTime::<Utc>::from(time))
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Arg::Value(value)
    }
}

impl From<std::io::Error> for Arg {
    fn from(err: std::io::Error) -> Self {
        Arg::error(&err)
    }
}

impl From<&std::io::Error> for Arg {
    fn from(err: &std::io::Error) -> Self {
        Arg::error(err)
    }
}
