//! ISO base media file format (MP4, QuickTime, 3GPP, HEIF).
//!
//! Members of the family are told apart by the major brand of the leading
//! `ftyp` box.

use phf::{Set, phf_set};

use crate::common::binary::{has_at, read_u32_be, slice_at};

static MP4_BRANDS: Set<&'static str> = phf_set! {
    "avc1", "dash", "iso2", "iso3", "iso4", "iso5", "iso6", "isom",
    "mmp4", "mp41", "mp42", "mp4v", "mp71", "MSNV", "NDAS", "NDSC",
    "NDSH", "NDSM", "NDSP", "NDSS", "NDXC", "NDXH", "NDXM", "NDXP",
    "NDXS", "F4V ", "F4P ",
};

static THREE_GP_BRANDS: Set<&'static str> = phf_set! {
    "3gp1", "3gp2", "3gp3", "3gp4", "3gp5", "3gp6", "3gp7",
    "3gs7", "3ge6", "3ge7", "3gg6",
};

static THREE_G2_BRANDS: Set<&'static str> = phf_set! {
    "3g24", "3g25", "3g26", "3g2a", "3g2b", "3g2c",
};

/// Top-level atoms that open a QuickTime movie without an `ftyp` box.
const QUICKTIME_ATOMS: [&[u8; 4]; 6] = [b"moov", b"mdat", b"wide", b"free", b"skip", b"pnot"];

/// Major brand of the leading `ftyp` box.
pub fn major_brand(buf: &[u8]) -> Option<&[u8]> {
    let size = read_u32_be(buf, 0)?;
    if size < 16 || !has_at(buf, 4, b"ftyp") {
        return None;
    }
    slice_at(buf, 8, 4)
}

fn brand_in(buf: &[u8], set: &Set<&'static str>) -> bool {
    major_brand(buf)
        .and_then(|brand| std::str::from_utf8(brand).ok())
        .is_some_and(|brand| set.contains(brand))
}

fn brand_is(buf: &[u8], brands: &[&[u8; 4]]) -> bool {
    major_brand(buf).is_some_and(|brand| brands.iter().any(|b| b[..] == *brand))
}

/// QuickTime movie.
pub fn quicktime(buf: &[u8]) -> bool {
    if brand_is(buf, &[b"qt  "]) {
        return true;
    }
    buf.len() >= 12 && QUICKTIME_ATOMS.iter().any(|atom| has_at(buf, 4, *atom))
}

/// QuickTime movie from Sony cameras.
pub fn mqv(buf: &[u8]) -> bool {
    brand_is(buf, &[b"mqt "])
}

/// MPEG-4 video.
pub fn mp4(buf: &[u8]) -> bool {
    brand_in(buf, &MP4_BRANDS)
}

/// 3GPP multimedia.
pub fn three_gp(buf: &[u8]) -> bool {
    brand_in(buf, &THREE_GP_BRANDS)
}

/// 3GPP2 multimedia.
pub fn three_g2(buf: &[u8]) -> bool {
    brand_in(buf, &THREE_G2_BRANDS)
}

/// Adobe Flash MP4 audio and audio book.
pub fn audio_mp4(buf: &[u8]) -> bool {
    brand_is(buf, &[b"F4A ", b"F4B "])
}

/// Apple MPEG-4 audio.
pub fn m4a(buf: &[u8]) -> bool {
    brand_is(buf, &[b"M4A "])
}

/// HEIC still image.
pub fn heic(buf: &[u8]) -> bool {
    brand_is(buf, &[b"heic", b"heix"])
}

/// HEIC image sequence.
pub fn heic_sequence(buf: &[u8]) -> bool {
    brand_is(buf, &[b"hevc", b"hevx"])
}

/// HEIF still image.
pub fn heif(buf: &[u8]) -> bool {
    brand_is(buf, &[b"mif1", b"heim", b"heis", b"avic"])
}

/// HEIF image sequence.
pub fn heif_sequence(buf: &[u8]) -> bool {
    brand_is(buf, &[b"msf1", b"hevm", b"hevs", b"avcs"])
}
