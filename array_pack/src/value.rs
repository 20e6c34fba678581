//! Host values handed to the packer.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A value from the host runtime that knows how to convert itself.
///
/// Each conversion returns `None` when the object does not offer it at
/// all. A conversion that exists but yields the wrong type is reported by
/// the packer, naming [`class_name`](Self::class_name).
///
/// # Examples
///
/// ```
/// use array_pack::{HostObject, Value, pack};
/// use std::sync::Arc;
///
/// #[derive(Debug)]
/// struct Path(String);
///
/// impl HostObject for Path {
///     fn class_name(&self) -> &str {
///         "Path"
///     }
///
///     fn to_str(&self) -> Option<Value> {
///         Some(Value::from(self.0.as_str()))
///     }
/// }
///
/// let path = Value::Object(Arc::new(Path("/tmp".into())));
/// let packed = pack(&[path], "a*").unwrap();
/// assert_eq!(packed.as_bytes(), b"/tmp");
/// ```
pub trait HostObject: fmt::Debug + Send + Sync {
    fn class_name(&self) -> &str;

    /// Implicit string conversion.
    fn to_str(&self) -> Option<Value> {
        None
    }

    /// Display representation, only consulted by `M`.
    fn to_s(&self) -> Option<Value> {
        None
    }

    /// Implicit integer conversion.
    fn to_int(&self) -> Option<Value> {
        None
    }
}

/// An already unboxed host value.
#[derive(Debug, Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    /// Integers wider than the target directive wrap.
    Integer(i128),
    Float(f64),
    /// Byte string, not necessarily UTF-8.
    Str(Vec<u8>),
    Symbol(String),
    Object(Arc<dyn HostObject>),
}

impl Value {
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn class_name(&self) -> Cow<'_, str> {
        match self {
            Value::Nil => Cow::Borrowed("NilClass"),
            Value::Bool(true) => Cow::Borrowed("TrueClass"),
            Value::Bool(false) => Cow::Borrowed("FalseClass"),
            Value::Integer(_) => Cow::Borrowed("Integer"),
            Value::Float(_) => Cow::Borrowed("Float"),
            Value::Str(_) => Cow::Borrowed("String"),
            Value::Symbol(_) => Cow::Borrowed("Symbol"),
            Value::Object(object) => Cow::Borrowed(object.class_name()),
        }
    }

    /// How the value appears in conversion error messages: the singletons
    /// by name, everything else by class.
    pub fn describe(&self) -> Cow<'_, str> {
        match self {
            Value::Nil => Cow::Borrowed("nil"),
            Value::Bool(true) => Cow::Borrowed("true"),
            Value::Bool(false) => Cow::Borrowed("false"),
            _ => self.class_name(),
        }
    }

    /// Display representation. Built-in values always have one; objects
    /// only if they implement [`HostObject::to_s`].
    pub fn to_s(&self) -> Option<Value> {
        let text = match self {
            Value::Nil => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => float_to_s(*f),
            Value::Str(_) => return Some(self.clone()),
            Value::Symbol(name) => name.clone(),
            Value::Object(object) => return object.to_s(),
        };
        Some(Value::Str(text.into_bytes()))
    }
}

/// Formats a float the way the host runtime prints it: always with a
/// fractional part, scientific notation outside `1e-4..1e16`.
pub(crate) fn float_to_s(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = f.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let formatted = format!("{f:e}");
        let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
        let mantissa = if mantissa.contains('.') {
            mantissa.to_string()
        } else {
            format!("{mantissa}.0")
        };
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        return format!("{mantissa}e{sign}{digits:0>2}");
    }

    format!("{f:?}")
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(i: $t) -> Self {
                    Value::Integer(i as i128)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f64::from(f))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.as_bytes().to_vec())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s.into_bytes())
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::Str(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Str(bytes)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Nil, Into::into)
    }
}
