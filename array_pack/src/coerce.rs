//! Conversions from host values to what a directive consumes.

use crate::value::float_to_s;
use crate::{PackError, Value};
use std::borrow::Cow;

/// What a value offers towards becoming a byte string.
#[derive(Debug)]
pub enum StringCapability<'a> {
    /// Already a string.
    AlreadyString(&'a [u8]),
    /// Implicit conversion exists; holds its result, which may still be
    /// of the wrong type.
    ConvertibleToString(Value),
    /// Only a display representation exists.
    RepresentableAsString(Value),
    Neither,
}

impl<'a> StringCapability<'a> {
    /// Classifies `value`. The display representation is only looked up
    /// when `representable` is set, so it is never computed for
    /// directives that would not use it.
    pub fn resolve(value: &'a Value, representable: bool) -> Self {
        match value {
            Value::Str(bytes) => StringCapability::AlreadyString(bytes),
            Value::Object(object) => match object.to_str() {
                Some(converted) => StringCapability::ConvertibleToString(converted),
                None => Self::represent(value, representable),
            },
            _ => Self::represent(value, representable),
        }
    }

    fn represent(value: &Value, representable: bool) -> Self {
        if !representable {
            return StringCapability::Neither;
        }
        match value.to_s() {
            Some(text) => StringCapability::RepresentableAsString(text),
            None => StringCapability::Neither,
        }
    }
}

/// Converts `value` to the bytes a string directive packs.
///
/// `nil` packs as an empty string except under `u` and `m`. Only `M`
/// falls back to the display representation.
pub fn coerce_string<'a>(value: &'a Value, directive: char) -> Result<Cow<'a, [u8]>, PackError> {
    if value.is_nil() {
        if matches!(directive, 'u' | 'm') {
            return Err(PackError::TypeConversion(
                "no implicit conversion of nil into String".to_string(),
            ));
        }
        return Ok(Cow::Borrowed(&[]));
    }

    match StringCapability::resolve(value, directive == 'M') {
        StringCapability::AlreadyString(bytes) => Ok(Cow::Borrowed(bytes)),
        StringCapability::ConvertibleToString(Value::Str(bytes)) => Ok(Cow::Owned(bytes)),
        StringCapability::ConvertibleToString(other) => {
            let class = value.class_name();
            Err(PackError::TypeConversion(format!(
                "can't convert {class} to String ({class}#to_str gives {})",
                other.class_name()
            )))
        }
        StringCapability::RepresentableAsString(Value::Str(bytes)) => Ok(Cow::Owned(bytes)),
        StringCapability::RepresentableAsString(other) => {
            // A representation that is not itself a string gets one more
            // round of representing.
            let bytes = match other.to_s() {
                Some(Value::Str(bytes)) => bytes,
                _ => format!("#<{}>", other.class_name()).into_bytes(),
            };
            Ok(Cow::Owned(bytes))
        }
        StringCapability::Neither => Err(PackError::TypeConversion(format!(
            "no implicit conversion of {} into String",
            value.describe()
        ))),
    }
}

/// Converts `value` to an integer. Floats truncate toward zero.
pub fn coerce_integer(value: &Value) -> Result<i128, PackError> {
    match value {
        Value::Integer(i) => Ok(*i),
        Value::Float(f) if f.is_finite() => Ok(float_low_bits(*f)),
        Value::Float(f) => Err(PackError::TypeConversion(format!(
            "float {} out of range of integer",
            float_to_s(*f)
        ))),
        Value::Nil => Err(PackError::TypeConversion(
            "no implicit conversion from nil to integer".to_string(),
        )),
        Value::Object(object) => match object.to_int() {
            Some(Value::Integer(i)) => Ok(i),
            Some(other) => {
                let class = value.class_name();
                Err(PackError::TypeConversion(format!(
                    "can't convert {class} to Integer ({class}#to_int gives {})",
                    other.class_name()
                )))
            }
            None => Err(no_implicit_conversion(value, "Integer")),
        },
        _ => Err(no_implicit_conversion(value, "Integer")),
    }
}

/// Converts `value` to a float. Integers are promoted.
pub fn coerce_float(value: &Value) -> Result<f64, PackError> {
    match value {
        Value::Float(f) => Ok(*f),
        Value::Integer(i) => Ok(*i as f64),
        _ => Err(PackError::TypeConversion(format!(
            "can't convert {} into Float",
            value.describe()
        ))),
    }
}

/// The integer part of a finite float, reduced modulo 2^128.
///
/// Floats beyond the `i128` range are exact multiples of a power of two,
/// so their low bits come straight from the mantissa.
fn float_low_bits(f: f64) -> i128 {
    let truncated = f.trunc();
    if truncated.abs() < i128::MAX as f64 {
        return truncated as i128;
    }
    let bits = truncated.to_bits();
    let mantissa = (bits & ((1 << 52) - 1)) | (1 << 52);
    // Unbiased exponent minus the 52 fraction bits; positive out here.
    let shift = ((bits >> 52) & 0x7ff) as u32 - 1075;
    let magnitude = u128::from(mantissa).checked_shl(shift).unwrap_or(0);
    let wrapped = if truncated.is_sign_negative() {
        magnitude.wrapping_neg()
    } else {
        magnitude
    };
    wrapped as i128
}

fn no_implicit_conversion(value: &Value, target: &str) -> PackError {
    PackError::TypeConversion(format!(
        "no implicit conversion of {} into {target}",
        value.describe()
    ))
}
