//! JSON family probes.
//!
//! Samples are usually cut short by the read limit, so a document that is
//! valid up to the end of the buffer counts as JSON, provided at least one
//! value inside it was read to completion.

use std::cell::Cell;
use std::fmt;

use serde::de::{self, DeserializeSeed, IgnoredAny, MapAccess, SeqAccess, Visitor};

use crate::common::binary::trim_start_ascii;

use super::text::text_start;

/// Walks a document and counts every value it finishes, keys excluded.
///
/// The count survives a parse error, so a cut-off document still reports
/// how much of it was well formed.
#[derive(Clone, Copy)]
struct Completed<'c>(&'c Cell<usize>);

impl Completed<'_> {
    fn done<E>(self) -> Result<(), E> {
        self.0.set(self.0.get() + 1);
        Ok(())
    }
}

impl<'de> DeserializeSeed<'de> for Completed<'_> {
    type Value = ();

    fn deserialize<D: de::Deserializer<'de>>(self, deserializer: D) -> Result<(), D::Error> {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Visitor<'de> for Completed<'_> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<(), E> {
        self.done()
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<(), E> {
        self.done()
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<(), E> {
        self.done()
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<(), E> {
        self.done()
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<(), E> {
        self.done()
    }

    fn visit_unit<E: de::Error>(self) -> Result<(), E> {
        self.done()
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<(), A::Error> {
        while seq.next_element_seed(self)?.is_some() {}
        self.done()
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<(), A::Error> {
        while map.next_key::<IgnoredAny>()?.is_some() {
            map.next_value_seed(self)?;
        }
        self.done()
    }
}

/// Whether `data` is a JSON object or array, complete or cut off at the end.
///
/// A cut-off document must have finished at least one inner value, so a
/// lone `[` or `{"key": "va` is not enough.
fn json_value(data: &[u8]) -> bool {
    if !matches!(data.first(), Some(b'{' | b'[')) {
        return false;
    }
    let count = Cell::new(0);
    let mut de = serde_json::Deserializer::from_slice(data);
    match Completed(&count).deserialize(&mut de).and_then(|()| de.end()) {
        Ok(()) => true,
        Err(err) => err.is_eof() && count.get() > 0,
    }
}

/// JSON document.
pub fn json(buf: &[u8]) -> bool {
    json_value(text_start(buf))
}

const GEOJSON_TYPES: [&[u8]; 9] = [
    b"Feature",
    b"FeatureCollection",
    b"Point",
    b"LineString",
    b"Polygon",
    b"MultiPoint",
    b"MultiLineString",
    b"MultiPolygon",
    b"GeometryCollection",
];

/// GeoJSON: an object whose first member is `"type"` with a GeoJSON type name.
pub fn geojson(buf: &[u8]) -> bool {
    let Some(rest) = text_start(buf).strip_prefix(b"{") else {
        return false;
    };
    let Some(rest) = trim_start_ascii(rest).strip_prefix(b"\"type\"") else {
        return false;
    };
    let Some(rest) = trim_start_ascii(rest).strip_prefix(b":") else {
        return false;
    };
    let Some(rest) = trim_start_ascii(rest).strip_prefix(b"\"") else {
        return false;
    };
    let Some(end) = rest.iter().position(|&b| b == b'"') else {
        return false;
    };
    GEOJSON_TYPES.contains(&&rest[..end])
}

/// Newline-delimited JSON: at least two lines, each holding one JSON value.
///
/// The last line may be cut off; blank lines are skipped.
pub fn ndjson(buf: &[u8]) -> bool {
    let data = text_start(buf);
    let mut complete = 0usize;
    let mut lines = data.split(|&b| b == b'\n').peekable();

    while let Some(line) = lines.next() {
        let line = trim_start_ascii(line);
        if line.is_empty() {
            continue;
        }
        let last = lines.peek().is_none();
        if last {
            // No trailing newline: the sample may have stopped mid-value.
            let valid = match serde_json::from_slice::<IgnoredAny>(line) {
                Ok(_) => true,
                Err(err) => err.is_eof(),
            };
            if !matches!(line.first(), Some(b'{' | b'[')) || !valid {
                return false;
            }
            break;
        }
        if !matches!(line.first(), Some(b'{' | b'['))
            || serde_json::from_slice::<IgnoredAny>(line).is_err()
        {
            return false;
        }
        complete += 1;
    }

    complete >= 2
}
