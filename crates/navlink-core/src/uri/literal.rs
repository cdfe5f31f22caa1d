//! Protocol literal coercion.
//!
//! Key predicate values arrive as raw literal text. The property's protocol
//! type decides the lexical form (strings are single-quoted, GUIDs may carry
//! a `guid'..'` prefix) and the column's native type decides the value
//! produced.

use crate::{
    schema::app::Property,
    stmt::{Type, Value},
    Error, Result,
};

/// Coerces `text` to a value of the native column type `ty`.
pub fn parse_literal(property: &Property, ty: Type, text: &str) -> Result<Value> {
    let text = text.trim();

    if text == "null" {
        if !property.nullable {
            return Err(Error::type_conversion(text, ty).context(format!(
                "property `{}` is not nullable",
                property.name
            )));
        }
        return Ok(Value::Null);
    }

    let lexical = match property.ty {
        Type::String => unquote(text).ok_or_else(|| Error::type_conversion(text, ty))?,
        Type::Uuid => match text.strip_prefix("guid") {
            Some(quoted) => unquote(quoted).ok_or_else(|| Error::type_conversion(text, ty))?,
            None => text.to_string(),
        },
        _ => text.to_string(),
    };

    convert(&lexical, ty).ok_or_else(|| Error::type_conversion(text, ty))
}

/// Strips the surrounding quotes of a string literal and unescapes `''`.
fn unquote(text: &str) -> Option<String> {
    let inner = text.strip_prefix('\'')?.strip_suffix('\'')?;

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\'' {
            // A lone quote inside the literal is malformed
            if chars.next_if_eq(&'\'').is_none() {
                return None;
            }
        }
        out.push(c);
    }

    Some(out)
}

fn convert(lexical: &str, ty: Type) -> Option<Value> {
    Some(match ty {
        Type::Bool => match lexical {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => return None,
        },
        Type::I8 => Value::I8(lexical.parse().ok()?),
        Type::I16 => Value::I16(lexical.parse().ok()?),
        Type::I32 => Value::I32(lexical.parse().ok()?),
        Type::I64 => Value::I64(lexical.strip_suffix('L').unwrap_or(lexical).parse().ok()?),
        // `NaN` and `inf` parse, but have no SQL literal form
        Type::F32 => Value::F32(
            lexical
                .strip_suffix(['f', 'F'])
                .unwrap_or(lexical)
                .parse()
                .ok()
                .filter(|v: &f32| v.is_finite())?,
        ),
        Type::F64 => Value::F64(
            lexical
                .strip_suffix(['d', 'D'])
                .unwrap_or(lexical)
                .parse()
                .ok()
                .filter(|v: &f64| v.is_finite())?,
        ),
        Type::String => Value::String(lexical.to_string()),
        Type::Uuid => Value::Uuid(uuid::Uuid::parse_str(lexical).ok()?),
    })
}
