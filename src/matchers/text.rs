//! Plain text and the text formats recognised beneath it.
//!
//! Everything here sits under the `text/plain` node, so the predicates may
//! assume the buffer is free of binary control bytes.

use aho_corasick::{AhoCorasick, Anchored, Input, MatchKind, StartKind};
use once_cell::sync::Lazy;
use smallvec::SmallVec;

use crate::common::binary::{contains, starts_with_ignore_case, trim_start_ascii};
use crate::common::bom::{detect_bom, utf8_body};

/// Control bytes that never occur in text.
///
/// Tab, line feed, form feed, carriage return and escape are allowed.
#[inline]
const fn is_binary_control(b: u8) -> bool {
    matches!(b, 0x00..=0x08 | 0x0B | 0x0E..=0x1A | 0x1C..=0x1F)
}

/// Drop a UTF-8 BOM and leading whitespace.
///
/// UTF-16 and UTF-32 text comes back empty, so byte-oriented markup and
/// data matchers never see it.
#[inline]
pub(crate) fn text_start(buf: &[u8]) -> &[u8] {
    utf8_body(buf).map(trim_start_ascii).unwrap_or_default()
}

/// Plain text.
///
/// A byte order mark is decisive. Otherwise the sample must be non-empty and
/// free of binary control bytes.
pub fn txt(buf: &[u8]) -> bool {
    if buf.is_empty() {
        return false;
    }
    if detect_bom(buf).is_some() {
        return true;
    }
    !buf.iter().any(|&b| is_binary_control(b))
}

const HTML_TAGS: [&str; 17] = [
    "<!DOCTYPE HTML",
    "<HTML",
    "<HEAD",
    "<SCRIPT",
    "<IFRAME",
    "<H1",
    "<DIV",
    "<FONT",
    "<TABLE",
    "<A",
    "<STYLE",
    "<TITLE",
    "<B",
    "<BODY",
    "<BR",
    "<P",
    "<!--",
];

static HTML_MATCHER: Lazy<Option<AhoCorasick>> = Lazy::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .match_kind(MatchKind::LeftmostLongest)
        .start_kind(StartKind::Anchored)
        .build(HTML_TAGS)
        .ok()
});

/// HTML document: one of the usual opening tags, followed by whitespace or `>`.
pub fn html(buf: &[u8]) -> bool {
    let Some(matcher) = HTML_MATCHER.as_ref() else {
        return false;
    };
    let data = text_start(buf);
    match matcher.try_find(Input::new(data).anchored(Anchored::Yes)) {
        Ok(Some(m)) => data
            .get(m.end())
            .is_some_and(|&b| b == b'>' || b.is_ascii_whitespace()),
        _ => false,
    }
}

/// Scalable Vector Graphics.
pub fn svg(buf: &[u8]) -> bool {
    contains(buf, b"<svg")
}

/// Program named on the `#!` line, with `/usr/bin/env` resolved.
fn interpreter(buf: &[u8]) -> Option<&[u8]> {
    let rest = utf8_body(buf)?.strip_prefix(b"#!")?;
    let line = rest.split(|&b| b == b'\n').next().unwrap_or(rest);
    let mut words = line
        .split(|b| b.is_ascii_whitespace())
        .filter(|w| !w.is_empty());
    let program = words.next()?;
    let name = program.rsplit(|&b| b == b'/').next().unwrap_or(program);
    if name == b"env" {
        words.find(|w| !w.starts_with(b"-") && !w.contains(&b'='))
    } else {
        Some(name)
    }
}

/// Whether the script interpreter is one of `names`, optionally versioned
/// (`python3`, `perl5.36`).
fn shebang(buf: &[u8], names: &[&[u8]]) -> bool {
    interpreter(buf).is_some_and(|program| {
        names.iter().any(|name| {
            program
                .strip_prefix(*name)
                .is_some_and(|version| version.iter().all(|&b| b.is_ascii_digit() || b == b'.'))
        })
    })
}

/// PHP source.
pub fn php(buf: &[u8]) -> bool {
    let data = text_start(buf);
    starts_with_ignore_case(data, b"<?php")
        || [b"<? ", b"<?\n", b"<?\r", b"<?\t"].iter().any(|open| data.starts_with(*open))
        || shebang(buf, &[b"php"])
}

/// JavaScript run by Node.js.
pub fn js(buf: &[u8]) -> bool {
    shebang(buf, &[b"node", b"nodejs"])
}

/// Lua script.
pub fn lua(buf: &[u8]) -> bool {
    shebang(buf, &[b"lua"])
}

/// Perl script.
pub fn perl(buf: &[u8]) -> bool {
    shebang(buf, &[b"perl"])
}

/// Python script.
pub fn python(buf: &[u8]) -> bool {
    shebang(buf, &[b"python"])
}

/// Tcl script.
pub fn tcl(buf: &[u8]) -> bool {
    shebang(buf, &[b"tcl", b"tclsh", b"wish", b"expect"])
}

/// Rich Text Format.
pub fn rtf(buf: &[u8]) -> bool {
    buf.starts_with(b"{\\rtf")
}

/// `BEGIN:<component>` on its own line.
fn begins_component(buf: &[u8], marker: &[u8]) -> bool {
    let data = text_start(buf);
    starts_with_ignore_case(data, marker)
        && matches!(data.get(marker.len()..), Some([b'\n', ..] | [b'\r', b'\n', ..]))
}

/// vCard contact.
pub fn vcard(buf: &[u8]) -> bool {
    begins_component(buf, b"BEGIN:VCARD")
}

/// iCalendar data.
pub fn icalendar(buf: &[u8]) -> bool {
    begins_component(buf, b"BEGIN:VCALENDAR")
}

/// Web archive.
pub fn warc(buf: &[u8]) -> bool {
    buf.starts_with(b"WARC/1.0") || buf.starts_with(b"WARC/1.1")
}

/// Number of leading records compared by the delimited-text probes.
const MAX_SAMPLED_RECORDS: usize = 10;

/// Parse one record starting at `pos`.
///
/// Returns the field count, the offset after the record, and whether the
/// record was terminated by a newline. Quoted fields may span lines and use
/// `""` as an escaped quote.
fn record(data: &[u8], mut pos: usize, sep: u8) -> (usize, usize, bool) {
    let mut fields = 1;
    loop {
        if data.get(pos) == Some(&b'"') {
            pos += 1;
            loop {
                match data.get(pos) {
                    None => return (fields, pos, false),
                    Some(b'"') if data.get(pos + 1) == Some(&b'"') => pos += 2,
                    Some(b'"') => {
                        pos += 1;
                        break;
                    },
                    Some(_) => pos += 1,
                }
            }
        }
        loop {
            match data.get(pos) {
                None => return (fields, pos, false),
                Some(&b) if b == sep => {
                    fields += 1;
                    pos += 1;
                    break;
                },
                Some(b'\n') => return (fields, pos + 1, true),
                Some(_) => pos += 1,
            }
        }
    }
}

/// At least two records, each with the same number (two or more) of fields.
fn delimited(buf: &[u8], sep: u8) -> bool {
    let Some(data) = utf8_body(buf) else {
        return false;
    };
    let mut counts: SmallVec<[usize; MAX_SAMPLED_RECORDS]> = SmallVec::new();
    let mut pos = 0;

    while pos < data.len() && counts.len() < MAX_SAMPLED_RECORDS {
        let (fields, next, terminated) = record(data, pos, sep);
        // A cut-off tail says nothing about the shape of the table.
        if !terminated && counts.len() >= 2 {
            break;
        }
        counts.push(fields);
        pos = next;
    }

    counts.len() >= 2 && counts[0] >= 2 && counts.iter().all(|&c| c == counts[0])
}

/// Comma-separated values.
pub fn csv(buf: &[u8]) -> bool {
    delimited(buf, b',')
}

/// Tab-separated values.
pub fn tsv(buf: &[u8]) -> bool {
    delimited(buf, b'\t')
}
