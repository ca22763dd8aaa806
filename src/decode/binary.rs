//! The legacy self-describing binary envelope ("gob").
//!
//! This is the default serialization for any key without a recognized
//! marker, which also makes it the format most often applied to payloads
//! that are really something else entirely. The decoder therefore
//! validates everything it reads (tags, lengths, nesting depth,
//! trailing bytes) and reports `InvalidData` instead of allocating or
//! recursing on garbage.
//!
//! Layout: every value starts with a one-byte tag. Scalars follow as
//! fixed-width big-endian words; strings and byte-strings as a varint
//! length plus that many bytes; lists and maps as a varint element count
//! followed by the elements. Map keys are bare varint-length strings
//! (no tag).

use std::io::{self, Cursor, Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use super::{
    value::Value,
    varint::{read_varint, write_varint},
};

/// Null, no body.
pub const TAG_NULL: u8 = 0x00;
/// Boolean, one byte body.
pub const TAG_BOOL: u8 = 0x01;
/// Signed 64-bit integer, big-endian.
pub const TAG_INT: u8 = 0x02;
/// IEEE-754 double, big-endian.
pub const TAG_FLOAT: u8 = 0x03;
/// UTF-8 string, varint length prefix.
pub const TAG_STR: u8 = 0x04;
/// Raw byte-string, varint length prefix.
pub const TAG_BYTES: u8 = 0x05;
/// List of values, varint count prefix.
pub const TAG_LIST: u8 = 0x06;
/// Map of string keys to values, varint count prefix.
pub const TAG_MAP: u8 = 0x07;

/// Maximum nesting of lists/maps the decoder will follow.
pub const MAX_DEPTH: usize = 32;

/// Decodes a complete payload, rejecting trailing bytes.
///
/// A random payload can easily begin with a valid tag, so accepting a
/// partially-consumed buffer would misreport garbage as decoded; the
/// whole input must form exactly one value.
pub fn decode_payload(bytes: &[u8]) -> io::Result<Value> {
    let mut cursor = Cursor::new(bytes);
    let value = read_value(&mut cursor)?;
    let rest = remaining(&cursor);
    if rest > 0 {
        return Err(invalid_data(format!(
            "{rest} trailing bytes after the value"
        )));
    }
    Ok(value)
}

/// Reads a single value from the cursor.
pub fn read_value(cursor: &mut Cursor<&[u8]>) -> io::Result<Value> {
    read_value_at(cursor, 0)
}

fn read_value_at(cursor: &mut Cursor<&[u8]>, depth: usize) -> io::Result<Value> {
    if depth > MAX_DEPTH {
        return Err(invalid_data(format!("nesting deeper than {MAX_DEPTH}")));
    }

    let tag = cursor.read_u8()?;
    match tag {
        TAG_NULL => Ok(Value::Null),
        TAG_BOOL => Ok(Value::Bool(cursor.read_u8()? != 0)),
        TAG_INT => Ok(Value::Int(cursor.read_i64::<BigEndian>()?)),
        TAG_FLOAT => Ok(Value::Float(cursor.read_f64::<BigEndian>()?)),
        TAG_STR => {
            let buf = read_block(cursor)?;
            String::from_utf8(buf)
                .map(Value::Str)
                .map_err(|_| invalid_data("string block is not UTF-8"))
        }
        TAG_BYTES => Ok(Value::Bytes(read_block(cursor)?)),
        TAG_LIST => {
            let count = read_count(cursor)?;
            let mut items = Vec::with_capacity(count);
            for _ in 0..count {
                items.push(read_value_at(cursor, depth + 1)?);
            }
            Ok(Value::Array(items))
        }
        TAG_MAP => {
            let count = read_count(cursor)?;
            let mut entries = Vec::with_capacity(count);
            for _ in 0..count {
                let key_bytes = read_block(cursor)?;
                let key = String::from_utf8(key_bytes)
                    .map_err(|_| invalid_data("map key is not UTF-8"))?;
                let value = read_value_at(cursor, depth + 1)?;
                entries.push((key, value));
            }
            Ok(Value::Map(entries))
        }
        other => Err(invalid_data(format!("unknown tag 0x{other:02X}"))),
    }
}

/// Encodes a value in the envelope layout.
///
/// The inspector never writes to the store; this exists to produce
/// fixtures and to round-trip the decoder in tests.
pub fn encode_payload(value: &Value) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_value(&mut buf, value)?;
    Ok(buf)
}

/// Writes a single value in the envelope layout.
pub fn write_value<W: Write>(w: &mut W, value: &Value) -> io::Result<()> {
    match value {
        Value::Null => w.write_u8(TAG_NULL),
        Value::Bool(b) => {
            w.write_u8(TAG_BOOL)?;
            w.write_u8(u8::from(*b))
        }
        Value::Int(i) => {
            w.write_u8(TAG_INT)?;
            w.write_i64::<BigEndian>(*i)
        }
        Value::Float(f) => {
            w.write_u8(TAG_FLOAT)?;
            w.write_f64::<BigEndian>(*f)
        }
        Value::Str(s) => {
            w.write_u8(TAG_STR)?;
            write_block(w, s.as_bytes())
        }
        Value::Bytes(b) => {
            w.write_u8(TAG_BYTES)?;
            write_block(w, b)
        }
        Value::Array(items) => {
            w.write_u8(TAG_LIST)?;
            write_varint(w, items.len() as u32)?;
            for item in items {
                write_value(w, item)?;
            }
            Ok(())
        }
        Value::Map(entries) => {
            w.write_u8(TAG_MAP)?;
            write_varint(w, entries.len() as u32)?;
            for (key, value) in entries {
                write_block(w, key.as_bytes())?;
                write_value(w, value)?;
            }
            Ok(())
        }
    }
}

fn remaining(cursor: &Cursor<&[u8]>) -> usize {
    cursor
        .get_ref()
        .len()
        .saturating_sub(cursor.position() as usize)
}

/// Reads a varint-length-prefixed block, bounds-checked against the
/// remaining input so a corrupt length cannot trigger a huge allocation.
fn read_block(cursor: &mut Cursor<&[u8]>) -> io::Result<Vec<u8>> {
    let len = read_varint(cursor)? as usize;
    let rest = remaining(cursor);
    if len > rest {
        return Err(invalid_data(format!(
            "block length {len} exceeds {rest} remaining bytes"
        )));
    }
    let mut buf = vec![0; len];
    cursor.read_exact(&mut buf)?;
    Ok(buf)
}

/// Reads an element count; every element takes at least one byte, so a
/// count past the remaining input is corrupt.
fn read_count(cursor: &mut Cursor<&[u8]>) -> io::Result<usize> {
    let count = read_varint(cursor)? as usize;
    let rest = remaining(cursor);
    if count > rest {
        return Err(invalid_data(format!(
            "element count {count} exceeds {rest} remaining bytes"
        )));
    }
    Ok(count)
}

fn write_block<W: Write>(w: &mut W, bytes: &[u8]) -> io::Result<()> {
    write_varint(w, bytes.len() as u32)?;
    w.write_all(bytes)
}

fn invalid_data(message: impl Into<String>) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message.into())
}
