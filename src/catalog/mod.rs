//! Built-in format catalog.
//!
//! The catalog is a flat table of [`Entry`] records. Each entry names its
//! parent by key, and the position of an entry among its siblings in the
//! table is its precedence. [`compile`] turns a table into a [`Tree`].
//!
//! ```rust
//! # fn main() -> longan::Result<()> {
//! let tree = longan::catalog::default_tree()?;
//! let docx = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
//! let node = tree.lookup(docx).unwrap();
//! assert_eq!(node.parent().unwrap().mime(), "application/zip");
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use tracing::debug;

use crate::common::error::{Error, Result};
use crate::matchers::{
    archive, audio, database, document, executable, font, image, isobmff, json, ole, text, video,
    xml, zip,
};
use crate::tree::signature::any;
use crate::tree::{NodeRef, Tree, TreeBuilder};

/// One row of a catalog table.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    /// Unique key, referenced by children.
    pub key: &'static str,
    /// Key of the parent entry; empty for the root.
    pub parent: &'static str,
    /// Canonical MIME type.
    pub mime: &'static str,
    /// Default extension without the dot.
    pub extension: &'static str,
    /// Signature predicate.
    pub signature: fn(&[u8]) -> bool,
    /// Alternative MIME strings.
    pub aliases: &'static [&'static str],
}

impl Entry {
    /// Entry without aliases.
    pub const fn new(
        key: &'static str,
        parent: &'static str,
        mime: &'static str,
        extension: &'static str,
        signature: fn(&[u8]) -> bool,
    ) -> Self {
        Self {
            key,
            parent,
            mime,
            extension,
            signature,
            aliases: &[],
        }
    }

    /// Attach aliases.
    pub const fn aliases(self, aliases: &'static [&'static str]) -> Self {
        Self { aliases, ..self }
    }

    /// Whether this entry is the root of its table.
    #[inline]
    pub const fn is_root(&self) -> bool {
        self.parent.is_empty()
    }
}

/// The built-in hierarchy, in precedence order within each parent.
pub static DEFAULT_ENTRIES: &[Entry] = &[
    Entry::new("root", "", "application/octet-stream", "", any),
    // Direct children of the root
    Entry::new(
        "seven_z",
        "root",
        "application/x-7z-compressed",
        "7z",
        archive::seven_z,
    ),
    Entry::new("zip", "root", "application/zip", "zip", archive::zip)
        .aliases(&["application/x-zip", "application/x-zip-compressed"]),
    Entry::new("pdf", "root", "application/pdf", "pdf", document::pdf)
        .aliases(&["application/x-pdf"]),
    Entry::new("ole", "root", "application/x-ole-storage", "", ole::ole),
    Entry::new("ps", "root", "application/postscript", "ps", document::ps),
    Entry::new(
        "psd",
        "root",
        "image/vnd.adobe.photoshop",
        "psd",
        image::psd,
    )
    .aliases(&["image/x-psd", "application/photoshop"]),
    Entry::new("ogg", "root", "application/ogg", "ogg", audio::ogg)
        .aliases(&["application/x-ogg"]),
    Entry::new("png", "root", "image/png", "png", image::png),
    Entry::new("jpg", "root", "image/jpeg", "jpg", image::jpg),
    Entry::new("jp2", "root", "image/jp2", "jp2", image::jp2),
    Entry::new("jpx", "root", "image/jpx", "jpf", image::jpx),
    Entry::new("jpm", "root", "image/jpm", "jpm", image::jpm)
        .aliases(&["video/jpm"]),
    Entry::new("gif", "root", "image/gif", "gif", image::gif),
    Entry::new("webp", "root", "image/webp", "webp", image::webp),
    Entry::new(
        "exe",
        "root",
        "application/vnd.microsoft.portable-executable",
        "exe",
        executable::exe,
    ),
    Entry::new("elf", "root", "application/x-elf", "", executable::elf),
    Entry::new("ar", "root", "application/x-archive", "a", archive::ar)
        .aliases(&["application/x-unix-archive"]),
    Entry::new("tar", "root", "application/x-tar", "tar", archive::tar),
    Entry::new("xar", "root", "application/x-xar", "xar", archive::xar),
    Entry::new("bz2", "root", "application/x-bzip2", "bz2", archive::bz2),
    Entry::new("fits", "root", "application/fits", "fits", image::fits),
    Entry::new("tiff", "root", "image/tiff", "tiff", image::tiff),
    Entry::new("bmp", "root", "image/bmp", "bmp", image::bmp)
        .aliases(&["image/x-bmp", "image/x-ms-bmp"]),
    Entry::new("ico", "root", "image/x-icon", "ico", image::ico),
    Entry::new("mp3", "root", "audio/mpeg", "mp3", audio::mp3)
        .aliases(&["audio/x-mpeg", "audio/mp3"]),
    Entry::new("flac", "root", "audio/flac", "flac", audio::flac),
    Entry::new("midi", "root", "audio/midi", "midi", audio::midi)
        .aliases(&["audio/mid", "audio/sp-midi", "audio/x-mid", "audio/x-midi"]),
    Entry::new("ape", "root", "audio/ape", "ape", audio::ape),
    Entry::new("musepack", "root", "audio/musepack", "mpc", audio::musepack),
    Entry::new("amr", "root", "audio/amr", "amr", audio::amr)
        .aliases(&["audio/amr-nb"]),
    Entry::new("wav", "root", "audio/wav", "wav", audio::wav)
        .aliases(&["audio/x-wav", "audio/vnd.wave", "audio/wave"]),
    Entry::new("aiff", "root", "audio/aiff", "aiff", audio::aiff),
    Entry::new("au", "root", "audio/basic", "au", audio::au),
    Entry::new("mpeg", "root", "video/mpeg", "mpeg", video::mpeg),
    Entry::new(
        "quicktime",
        "root",
        "video/quicktime",
        "mov",
        isobmff::quicktime,
    ),
    Entry::new("mqv", "root", "video/quicktime", "mqv", isobmff::mqv),
    Entry::new("mp4", "root", "video/mp4", "mp4", isobmff::mp4),
    Entry::new("webm", "root", "video/webm", "webm", video::webm)
        .aliases(&["audio/webm"]),
    Entry::new("three_gp", "root", "video/3gpp", "3gp", isobmff::three_gp)
        .aliases(&["video/3gp", "audio/3gpp"]),
    Entry::new("three_g2", "root", "video/3gpp2", "3g2", isobmff::three_g2)
        .aliases(&["video/3g2", "audio/3gpp2"]),
    Entry::new("avi", "root", "video/x-msvideo", "avi", video::avi)
        .aliases(&["video/avi", "video/msvideo"]),
    Entry::new("flv", "root", "video/x-flv", "flv", video::flv),
    Entry::new("mkv", "root", "video/x-matroska", "mkv", video::mkv),
    Entry::new("asf", "root", "video/x-ms-asf", "asf", video::asf)
        .aliases(&["video/asf", "video/x-ms-wmv"]),
    Entry::new("aac", "root", "audio/aac", "aac", audio::aac),
    Entry::new("voc", "root", "audio/x-unknown", "voc", audio::voc),
    Entry::new("audio_mp4", "root", "audio/mp4", "mp4", isobmff::audio_mp4)
        .aliases(&["audio/x-m4a", "audio/x-mp4a"]),
    Entry::new("m4a", "root", "audio/x-m4a", "m4a", isobmff::m4a),
    Entry::new("txt", "root", "text/plain", "txt", text::txt),
    Entry::new("gzip", "root", "application/gzip", "gz", archive::gzip)
        .aliases(&[
            "application/x-gzip",
            "application/x-gunzip",
            "application/gzipped",
            "application/gzip-compressed",
            "application/x-gzip-compressed",
            "gzip/document",
        ]),
    Entry::new(
        "class",
        "root",
        "application/x-java-applet; charset=binary",
        "class",
        executable::class,
    ),
    Entry::new(
        "swf",
        "root",
        "application/x-shockwave-flash",
        "swf",
        executable::swf,
    ),
    Entry::new(
        "crx",
        "root",
        "application/x-chrome-extension",
        "crx",
        archive::crx,
    ),
    Entry::new("woff", "root", "font/woff", "woff", font::woff),
    Entry::new("woff2", "root", "font/woff2", "woff2", font::woff2),
    Entry::new("otf", "root", "font/otf", "otf", font::otf),
    Entry::new(
        "eot",
        "root",
        "application/vnd.ms-fontobject",
        "eot",
        font::eot,
    ),
    Entry::new("wasm", "root", "application/wasm", "wasm", executable::wasm),
    Entry::new(
        "shx",
        "root",
        "application/octet-stream",
        "shx",
        database::shx,
    ),
    Entry::new("dbf", "root", "application/x-dbf", "dbf", database::dbf),
    Entry::new("dcm", "root", "application/dicom", "dcm", image::dcm),
    Entry::new(
        "rar",
        "root",
        "application/x-rar-compressed",
        "rar",
        archive::rar,
    )
    .aliases(&["application/x-rar"]),
    Entry::new("djvu", "root", "image/vnd.djvu", "djvu", image::djvu),
    Entry::new(
        "mobi",
        "root",
        "application/x-mobipocket-ebook",
        "mobi",
        document::mobi,
    ),
    Entry::new(
        "lit",
        "root",
        "application/x-ms-reader",
        "lit",
        document::lit,
    ),
    Entry::new("bpg", "root", "image/bpg", "bpg", image::bpg),
    Entry::new(
        "sqlite3",
        "root",
        "application/x-sqlite3",
        "sqlite",
        database::sqlite,
    ),
    Entry::new("dwg", "root", "image/vnd.dwg", "dwg", image::dwg)
        .aliases(&[
            "image/x-dwg",
            "application/acad",
            "application/x-acad",
            "application/autocad_dwg",
            "application/dwg",
            "application/x-dwg",
            "application/x-autocad",
            "drawing/dwg",
        ]),
    Entry::new(
        "nes",
        "root",
        "application/vnd.nintendo.snes.rom",
        "nes",
        executable::nes,
    ),
    Entry::new(
        "macho",
        "root",
        "application/x-mach-binary",
        "macho",
        executable::macho,
    ),
    Entry::new("qcp", "root", "audio/qcelp", "qcp", audio::qcp),
    Entry::new("icns", "root", "image/x-icns", "icns", image::icns),
    Entry::new("heic", "root", "image/heic", "heic", isobmff::heic),
    Entry::new(
        "heic_seq",
        "root",
        "image/heic-sequence",
        "heic",
        isobmff::heic_sequence,
    ),
    Entry::new("heif", "root", "image/heif", "heif", isobmff::heif),
    Entry::new(
        "heif_seq",
        "root",
        "image/heif-sequence",
        "heif",
        isobmff::heif_sequence,
    ),
    Entry::new("mrc", "root", "application/marc", "mrc", document::marc),
    Entry::new(
        "mdb",
        "root",
        "application/x-msaccess",
        "mdb",
        database::mdb,
    ),
    Entry::new(
        "accdb",
        "root",
        "application/x-msaccess",
        "accdb",
        database::accdb,
    ),
    Entry::new("zstd", "root", "application/zstd", "zst", archive::zstd),
    // ZIP containers
    Entry::new(
        "xlsx",
        "zip",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "xlsx",
        zip::xlsx,
    ),
    Entry::new(
        "docx",
        "zip",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "docx",
        zip::docx,
    ),
    Entry::new(
        "pptx",
        "zip",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "pptx",
        zip::pptx,
    ),
    Entry::new("epub", "zip", "application/epub+zip", "epub", zip::epub),
    Entry::new("jar", "zip", "application/jar", "jar", zip::jar),
    Entry::new(
        "odt",
        "zip",
        "application/vnd.oasis.opendocument.text",
        "odt",
        zip::odt,
    )
    .aliases(&["application/x-vnd.oasis.opendocument.text"]),
    Entry::new(
        "ods",
        "zip",
        "application/vnd.oasis.opendocument.spreadsheet",
        "ods",
        zip::ods,
    )
    .aliases(&["application/x-vnd.oasis.opendocument.spreadsheet"]),
    Entry::new(
        "odp",
        "zip",
        "application/vnd.oasis.opendocument.presentation",
        "odp",
        zip::odp,
    )
    .aliases(&["application/x-vnd.oasis.opendocument.presentation"]),
    Entry::new(
        "odg",
        "zip",
        "application/vnd.oasis.opendocument.graphics",
        "odg",
        zip::odg,
    )
    .aliases(&["application/x-vnd.oasis.opendocument.graphics"]),
    Entry::new(
        "odf",
        "zip",
        "application/vnd.oasis.opendocument.formula",
        "odf",
        zip::odf,
    )
    .aliases(&["application/x-vnd.oasis.opendocument.formula"]),
    Entry::new(
        "ott",
        "odt",
        "application/vnd.oasis.opendocument.text-template",
        "ott",
        zip::ott,
    )
    .aliases(&["application/x-vnd.oasis.opendocument.text-template"]),
    Entry::new(
        "ots",
        "ods",
        "application/vnd.oasis.opendocument.spreadsheet-template",
        "ots",
        zip::ots,
    )
    .aliases(&["application/x-vnd.oasis.opendocument.spreadsheet-template"]),
    Entry::new(
        "otp",
        "odp",
        "application/vnd.oasis.opendocument.presentation-template",
        "otp",
        zip::otp,
    )
    .aliases(&["application/x-vnd.oasis.opendocument.presentation-template"]),
    Entry::new(
        "otg",
        "odg",
        "application/vnd.oasis.opendocument.graphics-template",
        "otg",
        zip::otg,
    )
    .aliases(&["application/x-vnd.oasis.opendocument.graphics-template"]),
    // OLE2 compound documents
    Entry::new("xls", "ole", "application/vnd.ms-excel", "xls", ole::xls)
        .aliases(&["application/msexcel"]),
    Entry::new(
        "pub",
        "ole",
        "application/vnd.ms-publisher",
        "pub",
        ole::publisher,
    ),
    Entry::new(
        "ppt",
        "ole",
        "application/vnd.ms-powerpoint",
        "ppt",
        ole::ppt,
    )
    .aliases(&["application/mspowerpoint"]),
    Entry::new("doc", "ole", "application/msword", "doc", ole::doc)
        .aliases(&["application/vnd.ms-word"]),
    // Ogg
    Entry::new("ogg_audio", "ogg", "audio/ogg", "oga", audio::ogg_audio),
    Entry::new("ogg_video", "ogg", "video/ogg", "ogv", audio::ogg_video),
    // ELF
    Entry::new(
        "elf_obj",
        "elf",
        "application/x-object",
        "",
        executable::elf_obj,
    ),
    Entry::new(
        "elf_exe",
        "elf",
        "application/x-executable",
        "",
        executable::elf_exe,
    ),
    Entry::new(
        "elf_lib",
        "elf",
        "application/x-sharedlib",
        "so",
        executable::elf_lib,
    ),
    Entry::new(
        "elf_dump",
        "elf",
        "application/x-coredump",
        "",
        executable::elf_dump,
    ),
    // ar
    Entry::new(
        "deb",
        "ar",
        "application/vnd.debian.binary-package",
        "deb",
        archive::deb,
    ),
    // Shapefile
    Entry::new(
        "shp",
        "shx",
        "application/octet-stream",
        "shp",
        database::shp,
    ),
    // Text
    Entry::new(
        "html",
        "txt",
        "text/html; charset=utf-8",
        "html",
        text::html,
    ),
    Entry::new("svg", "txt", "image/svg+xml", "svg", text::svg),
    Entry::new("xml", "txt", "text/xml; charset=utf-8", "xml", xml::xml),
    Entry::new("php", "txt", "text/x-php; charset=utf-8", "php", text::php),
    Entry::new("js", "txt", "application/javascript", "js", text::js)
        .aliases(&["application/x-javascript", "text/javascript"]),
    Entry::new("lua", "txt", "text/x-lua", "lua", text::lua),
    Entry::new("perl", "txt", "text/x-perl", "pl", text::perl),
    Entry::new("python", "txt", "application/x-python", "py", text::python),
    Entry::new("json", "txt", "application/json", "json", json::json),
    Entry::new(
        "ndjson",
        "txt",
        "application/x-ndjson",
        "ndjson",
        json::ndjson,
    ),
    Entry::new("rtf", "txt", "text/rtf", "rtf", text::rtf),
    Entry::new("tcl", "txt", "text/x-tcl", "tcl", text::tcl)
        .aliases(&["application/x-tcl"]),
    Entry::new("csv", "txt", "text/csv", "csv", text::csv),
    Entry::new("tsv", "txt", "text/tab-separated-values", "tsv", text::tsv),
    Entry::new("vcard", "txt", "text/vcard", "vcf", text::vcard),
    Entry::new("icalendar", "txt", "text/calendar", "ics", text::icalendar),
    Entry::new("warc", "txt", "application/warc", "warc", text::warc),
    // XML vocabularies
    Entry::new("rss", "xml", "application/rss+xml", "rss", xml::rss)
        .aliases(&["text/rss"]),
    Entry::new("atom", "xml", "application/atom+xml", "atom", xml::atom),
    Entry::new("x3d", "xml", "model/x3d+xml", "x3d", xml::x3d),
    Entry::new(
        "kml",
        "xml",
        "application/vnd.google-earth.kml+xml",
        "kml",
        xml::kml,
    ),
    Entry::new("xliff", "xml", "application/x-xliff+xml", "xlf", xml::xliff),
    Entry::new(
        "collada",
        "xml",
        "model/vnd.collada+xml",
        "dae",
        xml::collada,
    ),
    Entry::new("gml", "xml", "application/gml+xml", "gml", xml::gml),
    Entry::new("gpx", "xml", "application/gpx+xml", "gpx", xml::gpx),
    Entry::new(
        "tcx",
        "xml",
        "application/vnd.garmin.tcx+xml",
        "tcx",
        xml::tcx,
    ),
    Entry::new("amf", "xml", "application/x-amf", "amf", xml::amf),
    Entry::new(
        "threemf",
        "xml",
        "application/vnd.ms-package.3dmanufacturing-3dmodel+xml",
        "3mf",
        xml::threemf,
    ),
    // JSON
    Entry::new(
        "geojson",
        "json",
        "application/geo+json",
        "geojson",
        json::geojson,
    ),
];

/// Compile a catalog table into a tree.
///
/// The first entry without a parent becomes the root. Children are attached
/// in table order, so an entry listed earlier under the same parent wins.
pub fn compile(entries: &[Entry]) -> Result<Tree> {
    let mut builder = TreeBuilder::new();
    let mut refs: HashMap<&'static str, NodeRef> = HashMap::with_capacity(entries.len());

    for entry in entries {
        let node = builder.node(entry.mime, entry.extension, entry.signature);
        builder.alias(node, entry.aliases.iter().copied())?;
        if refs.insert(entry.key, node).is_some() {
            return Err(Error::DuplicateKey(entry.key.to_string()));
        }
    }

    let root = entries
        .iter()
        .find(|entry| entry.is_root())
        .ok_or(Error::MissingRoot)?;

    for entry in entries.iter().filter(|entry| !entry.is_root()) {
        let parent = *refs.get(entry.parent).ok_or_else(|| Error::UnknownParent {
            node: entry.key.to_string(),
            parent: entry.parent.to_string(),
        })?;
        builder.attach(parent, refs[entry.key])?;
    }

    debug!(entries = entries.len(), root = root.key, "compiled catalog");
    builder.build(refs[root.key])
}

/// The built-in classification tree.
pub fn default_tree() -> Result<Tree> {
    compile(DEFAULT_ENTRIES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::ole::ole_header;
    use crate::matchers::zip::stored_zip;

    fn tree() -> Tree {
        default_tree().unwrap()
    }

    fn never(_: &[u8]) -> bool {
        false
    }

    #[test]
    fn test_default_tree_shape() {
        let tree = tree();
        assert_eq!(tree.len(), DEFAULT_ENTRIES.len());
        let root = tree.handle(tree.root());
        assert_eq!(root.mime(), "application/octet-stream");
        assert_eq!(root.extension(), "");

        let children = tree.node(tree.root()).children();
        assert_eq!(children.len(), 80);
        assert_eq!(tree.handle(children[0]).extension(), "7z");
        assert_eq!(tree.handle(children[1]).extension(), "zip");
        assert_eq!(tree.handle(children[79]).extension(), "zst");
        // ODF template under its document type under zip under root
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn test_sibling_order_follows_table() {
        let tree = tree();
        let txt = tree.lookup("text/plain").unwrap();
        let order: Vec<_> = tree
            .node(txt.id())
            .children()
            .iter()
            .map(|&id| tree.handle(id).extension())
            .collect();
        assert_eq!(
            order,
            [
                "html", "svg", "xml", "php", "js", "lua", "pl", "py", "json", "ndjson", "rtf",
                "tcl", "csv", "tsv", "vcf", "ics", "warc"
            ]
        );
    }

    #[test]
    fn test_gzip_and_aliases() {
        let tree = tree();
        let gz = tree.detect(&[0x1F, 0x8B, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(gz.mime(), "application/gzip");
        assert_eq!(gz.extension(), "gz");
        assert!(gz.is("application/x-gzip"));
        assert!(gz.is("gzip/document"));
        assert_eq!(tree.alias_owner("application/x-gzip").unwrap(), gz);
    }

    #[test]
    fn test_xlsx_through_zip() {
        let tree = tree();
        let data = stored_zip(&[
            ("[Content_Types].xml", "<Types/>"),
            ("xl/workbook.xml", "<workbook/>"),
        ]);
        let m = tree.detect(&data);
        assert_eq!(m.extension(), "xlsx");
        let chain: Vec<_> = m.ancestors().iter().map(|a| a.mime()).collect();
        assert_eq!(
            chain,
            [
                "application/octet-stream",
                "application/zip",
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            ]
        );
    }

    #[test]
    fn test_odf_template_chain() {
        let tree = tree();
        let data = stored_zip(&[(
            "mimetype",
            "application/vnd.oasis.opendocument.spreadsheet-template",
        )]);
        let m = tree.detect(&data);
        assert_eq!(m.extension(), "ots");
        assert_eq!(m.parent().unwrap().extension(), "ods");
        assert_eq!(m.depth(), 3);
    }

    #[test]
    fn test_plain_zip_stays_zip() {
        let tree = tree();
        let m = tree.detect(&stored_zip(&[("notes.txt", "hello")]));
        assert_eq!(m.mime(), "application/zip");
    }

    #[test]
    fn test_ole_children() {
        let tree = tree();
        let mut data = ole_header(40);
        data.extend_from_slice(&[0x09, 0x08, 0x10, 0x00, 0x00, 0x06, 0x05, 0x00]);
        let m = tree.detect(&data);
        assert_eq!(m.mime(), "application/vnd.ms-excel");
        assert!(m.is("application/msexcel"));

        let bare = tree.detect(&ole_header(40));
        assert_eq!(bare.mime(), "application/x-ole-storage");
        assert_eq!(bare.extension(), "");
    }

    #[test]
    fn test_unknown_and_empty_input() {
        let tree = tree();
        let noise = [0x8F, 0x03, 0xD1, 0x7A, 0x00, 0x55, 0xE2, 0x19, 0xB4, 0x06];
        assert!(tree.detect(&noise).is_root());
        assert!(tree.detect(b"").is_root());
    }

    #[test]
    fn test_text_branch() {
        let tree = tree();
        let xml_doc = tree.detect(b"<?xml version=\"1.0\"?><note><to>x</to></note>");
        let chain: Vec<_> = xml_doc.ancestors().iter().map(|a| a.mime()).collect();
        assert_eq!(
            chain,
            ["application/octet-stream", "text/plain", "text/xml; charset=utf-8"]
        );

        assert_eq!(tree.detect(b"<?xml version=\"1.0\"?><rss version=\"2.0\">").extension(), "rss");
        assert_eq!(tree.detect(b"<!DOCTYPE html><html>").extension(), "html");
        let point = b"{\"type\": \"Point\", \"coordinates\": [0, 0]}";
        assert_eq!(tree.detect(point).extension(), "geojson");
        assert_eq!(tree.detect(b"{\"a\": 1}").extension(), "json");
        assert_eq!(tree.detect(b"#!/usr/bin/env python3\nprint(1)\n").extension(), "py");
        assert_eq!(tree.detect(b"a,b,c\n1,2,3\n").extension(), "csv");
        assert_eq!(tree.detect(b"just some words").extension(), "txt");
    }

    #[test]
    fn test_binary_siblings() {
        let tree = tree();
        let mut elf = b"\x7FELF\x02\x01\x01\x00".to_vec();
        elf.resize(16, 0);
        elf.extend_from_slice(&3u16.to_le_bytes());
        let m = tree.detect(&elf);
        assert_eq!(m.mime(), "application/x-sharedlib");
        assert_eq!(m.extension(), "so");

        let class_file = [0xCA, 0xFE, 0xBA, 0xBE, 0x00, 0x00, 0x00, 0x34];
        assert_eq!(tree.detect(&class_file).extension(), "class");
        let fat = [0xCA, 0xFE, 0xBA, 0xBE, 0x00, 0x00, 0x00, 0x02];
        assert_eq!(tree.detect(&fat).extension(), "macho");
    }

    #[test]
    fn test_quicktime_shares_mime_with_mqv() {
        let tree = tree();
        let mut mqv = 20u32.to_be_bytes().to_vec();
        mqv.extend_from_slice(b"ftypmqt \x00\x00\x00\x00mqt ");
        let m = tree.detect(&mqv);
        assert_eq!(m.extension(), "mqv");
        assert_eq!(tree.lookup("video/quicktime").unwrap().extension(), "mov");
    }

    #[test]
    fn test_compile_rejects_duplicate_key() {
        let entries = [
            Entry::new("root", "", "application/octet-stream", "", any),
            Entry::new("a", "root", "x/a", "a", never),
            Entry::new("a", "root", "x/b", "b", never),
        ];
        assert!(matches!(compile(&entries), Err(Error::DuplicateKey(ref key)) if key == "a"));
    }

    #[test]
    fn test_compile_rejects_unknown_parent() {
        let entries = [
            Entry::new("root", "", "application/octet-stream", "", any),
            Entry::new("deb", "arr", "application/vnd.debian.binary-package", "deb", never),
        ];
        assert!(matches!(
            compile(&entries),
            Err(Error::UnknownParent { ref parent, .. }) if parent == "arr"
        ));
    }

    #[test]
    fn test_compile_rejects_missing_root() {
        let entries = [Entry::new("a", "b", "x/a", "a", never)];
        assert!(matches!(compile(&entries), Err(Error::MissingRoot)));
    }

    #[test]
    fn test_compile_rejects_second_root() {
        let entries = [
            Entry::new("root", "", "application/octet-stream", "", any),
            Entry::new("other", "", "x/other", "", any),
        ];
        assert!(matches!(compile(&entries), Err(Error::Unattached { .. })));
    }

    #[test]
    fn test_compile_rejects_alias_collision() {
        let entries = [
            Entry::new("root", "", "application/octet-stream", "", any),
            Entry::new("a", "root", "x/a", "a", never).aliases(&["x/shared"]),
            Entry::new("b", "root", "x/b", "b", never).aliases(&["x/shared"]),
        ];
        assert!(matches!(compile(&entries), Err(Error::DuplicateAlias { .. })));
    }
}
