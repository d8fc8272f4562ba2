//! Core conversion: decode a TOML document, translate the generic value,
//! encode it as pretty-printed JSON.

use std::io::{Read, Write};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value as JsonValue};
use toml::Value as TomlValue;

use crate::error::{ConvertResult, DecodeError};

/// Convert one TOML document from `input` into indented JSON on `output`.
///
/// The whole input is decoded before anything is written, so a decode
/// failure leaves the output untouched. Read and write failures propagate
/// unchanged.
pub fn convert<R: Read, W: Write>(mut input: R, output: W) -> ConvertResult<()> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    let value = decode(&text)?;
    encode(&value, output)
}

/// Decode TOML text into a JSON-representable generic value.
fn decode(text: &str) -> ConvertResult<JsonValue> {
    let value: TomlValue = text
        .parse()
        .map_err(|err: toml::de::Error| DecodeError::from_parse(&err, text))?;
    Ok(translate(value))
}

/// Serialize the value with two-space indentation and a trailing newline.
fn encode<W: Write>(value: &JsonValue, mut output: W) -> ConvertResult<()> {
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut output, formatter);
    value.serialize(&mut serializer)?;
    output.write_all(b"\n")?;
    output.flush()?;
    Ok(())
}

/// Map the decoder's generic value onto JSON's data model. Tables become
/// objects in the order the decoder exposes, arrays stay ordered, and
/// datetimes are rendered through their canonical textual form.
fn translate(value: TomlValue) -> JsonValue {
    match value {
        TomlValue::String(s) => JsonValue::String(s),
        TomlValue::Integer(i) => JsonValue::Number(i.into()),
        // JSON has no non-finite numbers; nan and inf degrade to null
        TomlValue::Float(f) => serde_json::Number::from_f64(f)
            .map_or(JsonValue::Null, JsonValue::Number),
        TomlValue::Boolean(b) => JsonValue::Bool(b),
        TomlValue::Datetime(dt) => JsonValue::String(dt.to_string()),
        TomlValue::Array(values) => {
            JsonValue::Array(values.into_iter().map(translate).collect())
        }
        TomlValue::Table(table) => JsonValue::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, translate(value)))
                .collect(),
        ),
    }
}
