//! End-to-end detection through the public API.

use std::io::{Cursor, Write};

use longan::{DetectOptions, Detector, Error, TreeBuilder};
use longan::tree::signature::any;

fn detector() -> Detector {
    Detector::builtin().expect("built-in catalog compiles")
}

/// Stored ZIP entry header followed by `name` and `data`.
fn zip_entry(name: &str, data: &str) -> Vec<u8> {
    let mut out = b"PK\x03\x04".to_vec();
    out.extend_from_slice(&[20, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    out.extend_from_slice(&(data.len() as u32).to_le_bytes());
    out.extend_from_slice(&(data.len() as u32).to_le_bytes());
    out.extend_from_slice(&(name.len() as u16).to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(name.as_bytes());
    out.extend_from_slice(data.as_bytes());
    out
}

#[test]
fn test_gzip_header() {
    let detector = detector();
    let mime = detector.detect(&[0x1F, 0x8B, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03]);
    assert_eq!(mime.mime(), "application/gzip");
    assert_eq!(mime.extension(), "gz");
    assert!(mime.is("application/x-gzip"));
    assert!(mime.is("Application/X-GZIP"));
    assert!(!mime.is("application/zip"));
}

#[test]
fn test_xlsx_descends_through_zip() {
    let detector = detector();
    let mut data = zip_entry("[Content_Types].xml", "<Types/>");
    data.extend(zip_entry("_rels/.rels", "<Relationships/>"));
    data.extend(zip_entry("xl/workbook.xml", "<workbook/>"));

    let mime = detector.detect(&data);
    assert_eq!(mime.extension(), "xlsx");
    let chain: Vec<_> = mime.ancestors().iter().map(|m| m.mime().to_string()).collect();
    assert_eq!(
        chain,
        [
            "application/octet-stream",
            "application/zip",
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        ]
    );
}

#[test]
fn test_unrecognised_bytes_fall_back_to_root() {
    let detector = detector();
    let mime = detector.detect(&[0x8F, 0x03, 0xD1, 0x7A, 0x00, 0x55, 0xE2, 0x19, 0xB4, 0x06]);
    assert_eq!(mime.mime(), "application/octet-stream");
    assert_eq!(mime.extension(), "");
    assert!(mime.is_root());
}

#[test]
fn test_empty_input() {
    let detector = detector();
    let mime = detector.detect(b"");
    assert_eq!(mime.mime(), "application/octet-stream");
    assert_eq!(mime.depth(), 0);
}

#[test]
fn test_plain_xml_chain() {
    let detector = detector();
    let data = b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<catalog><book/></catalog>";
    let mime = detector.detect(data);
    let chain: Vec<_> = mime.ancestors().iter().map(|m| m.mime()).collect();
    assert_eq!(
        chain,
        ["application/octet-stream", "text/plain", "text/xml; charset=utf-8"]
    );
    assert!(mime.is("text/xml"));
    assert!(!mime.is("text/plain"));
}

#[test]
fn test_signature_past_read_limit_is_not_seen() {
    let mut data = vec![0u8; 128];
    data.extend_from_slice(b"DICM");

    let full = detector();
    assert_eq!(full.detect(&data).extension(), "dcm");

    let short = detector().with_options(DetectOptions::new().with_read_limit(64));
    assert!(short.detect(&data).is_root());
}

#[test]
fn test_detect_reader_and_file() {
    let detector = detector();
    let mut reader = Cursor::new(b"%PDF-1.7\n%\xE2\xE3\xCF\xD3\n".to_vec());
    assert_eq!(detector.detect_reader(&mut reader).unwrap().extension(), "pdf");

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{\"type\": \"FeatureCollection\", \"features\": []}").unwrap();
    let mime = detector.detect_file(file.path()).unwrap();
    assert_eq!(mime.mime(), "application/geo+json");
    assert_eq!(mime.parent().unwrap().mime(), "application/json");
}

#[test]
fn test_lookup_and_alias_owner() {
    let detector = detector();
    let tree = detector.tree();
    assert_eq!(tree.lookup("application/x-zip-compressed").unwrap().extension(), "zip");
    assert_eq!(tree.alias_owner("text/javascript").unwrap().extension(), "js");
    assert!(tree.lookup("application/x-does-not-exist").is_none());
}

#[test]
fn test_custom_tree_rejects_duplicate_alias() {
    let mut builder = TreeBuilder::new();
    let a = builder.node("application/x-a", "a", |buf: &[u8]| buf.starts_with(b"A"));
    let b = builder.node("application/x-b", "b", |buf: &[u8]| buf.starts_with(b"B"));
    builder.alias(a, ["application/x-shared"]).unwrap();
    builder.alias(b, ["application/x-shared"]).unwrap();
    let root = builder
        .node_with("application/octet-stream", "", any, [a, b])
        .unwrap();

    let err = builder.build(root).unwrap_err();
    assert!(matches!(
        err,
        Error::DuplicateAlias { ref alias, .. } if alias == "application/x-shared"
    ));
}

#[test]
fn test_custom_tree_isolates_panicking_signature() {
    let mut builder = TreeBuilder::new();
    let bad = builder.node("application/x-bad", "bad", |buf: &[u8]| buf[1000] == 0);
    let good = builder.node("application/x-good", "good", |buf: &[u8]| !buf.is_empty());
    let root = builder
        .node_with("application/octet-stream", "", any, [bad, good])
        .unwrap();
    let detector = Detector::new(builder.build(root).unwrap());

    assert_eq!(detector.detect(b"abc").extension(), "good");
}

#[test]
fn test_short_truncated_json_is_plain_text() {
    let detector = detector();
    let mime = detector.detect(b"[");
    assert_eq!(mime.mime(), "text/plain");
    let chain: Vec<_> = mime.ancestors().iter().map(|m| m.extension()).collect();
    assert_eq!(chain, ["", "txt"]);

    let cut = detector.detect(b"{\"items\": [{\"id\": 1}, {\"id\": 2");
    assert_eq!(cut.mime(), "application/json");
}
