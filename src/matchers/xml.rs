//! XML and XML vocabularies recognised by their root element.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use smallvec::SmallVec;

use crate::common::binary::starts_with_ignore_case;

use super::text::text_start;

/// Events skipped before giving up on finding the root element.
const MAX_PROLOG_EVENTS: usize = 32;

/// XML document with a declaration.
pub fn xml(buf: &[u8]) -> bool {
    starts_with_ignore_case(text_start(buf), b"<?xml")
}

/// Name and namespace declarations of a document's root element.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RootElement {
    /// Local name, without any prefix.
    pub name: Vec<u8>,
    /// Values of the `xmlns` and `xmlns:*` attributes.
    pub namespaces: SmallVec<[Vec<u8>; 2]>,
}

impl RootElement {
    fn from_start(e: &BytesStart<'_>) -> Self {
        let namespaces = e
            .attributes()
            .flatten()
            .filter(|attr| {
                let key = attr.key.as_ref();
                key == b"xmlns" || key.starts_with(b"xmlns:")
            })
            .map(|attr| attr.value.into_owned())
            .collect();
        Self {
            name: e.local_name().as_ref().to_vec(),
            namespaces,
        }
    }

    /// Whether a namespace declared on the root starts with `uri`.
    pub fn declares(&self, uri: &[u8]) -> bool {
        self.namespaces.iter().any(|ns| ns.starts_with(uri))
    }
}

/// Parse the prolog until the first element opens.
///
/// Returns `None` for malformed input or when the root is not reached within
/// the sample.
pub fn root_element(buf: &[u8]) -> Option<RootElement> {
    let mut reader = Reader::from_reader(text_start(buf));
    let mut scratch = Vec::new();

    for _ in 0..MAX_PROLOG_EVENTS {
        match reader.read_event_into(&mut scratch) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                return Some(RootElement::from_start(e));
            }
            Ok(Event::Eof) | Err(_) => return None,
            Ok(_) => {},
        }
        scratch.clear();
    }
    None
}

fn root_is(buf: &[u8], name: &[u8]) -> bool {
    root_element(buf).is_some_and(|root| root.name == name)
}

fn root_in_namespace(buf: &[u8], name: &[u8], uri: &[u8]) -> bool {
    root_element(buf).is_some_and(|root| root.name == name && root.declares(uri))
}

/// RSS feed.
pub fn rss(buf: &[u8]) -> bool {
    root_is(buf, b"rss")
}

/// Atom feed.
pub fn atom(buf: &[u8]) -> bool {
    root_in_namespace(buf, b"feed", b"http://www.w3.org/2005/Atom")
}

/// X3D scene.
pub fn x3d(buf: &[u8]) -> bool {
    root_is(buf, b"X3D")
}

/// Keyhole Markup Language.
pub fn kml(buf: &[u8]) -> bool {
    root_is(buf, b"kml")
}

/// XML Localization Interchange File Format.
pub fn xliff(buf: &[u8]) -> bool {
    root_is(buf, b"xliff")
}

/// COLLADA digital asset.
pub fn collada(buf: &[u8]) -> bool {
    root_is(buf, b"COLLADA")
}

/// Geography Markup Language: any root that declares the GML namespace.
pub fn gml(buf: &[u8]) -> bool {
    root_element(buf).is_some_and(|root| root.declares(b"http://www.opengis.net/gml"))
}

/// GPS exchange format.
pub fn gpx(buf: &[u8]) -> bool {
    root_is(buf, b"gpx")
}

/// Garmin Training Center database.
pub fn tcx(buf: &[u8]) -> bool {
    root_is(buf, b"TrainingCenterDatabase")
}

/// Additive Manufacturing File.
pub fn amf(buf: &[u8]) -> bool {
    root_is(buf, b"amf")
}

/// 3D Manufacturing Format model part.
pub fn threemf(buf: &[u8]) -> bool {
    root_in_namespace(
        buf,
        b"model",
        b"http://schemas.microsoft.com/3dmanufacturing/core/2015/02",
    )
}
