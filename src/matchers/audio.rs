//! Audio containers and elementary streams.

use crate::common::binary::{has_at, read_u16_be};

/// MPEG audio layer III, with or without an ID3v2 tag.
pub fn mp3(buf: &[u8]) -> bool {
    if buf.starts_with(b"ID3") {
        return true;
    }
    // Frame sync plus version and layer bits; the protection bit is ignored.
    matches!(
        read_u16_be(buf, 0).map(|sync| sync & 0xFFFE),
        Some(0xFFFA | 0xFFF2 | 0xFFE2)
    )
}

/// Free Lossless Audio Codec.
pub fn flac(buf: &[u8]) -> bool {
    buf.starts_with(b"fLaC")
}

/// Standard MIDI file.
pub fn midi(buf: &[u8]) -> bool {
    buf.starts_with(b"MThd")
}

/// Monkey's Audio.
pub fn ape(buf: &[u8]) -> bool {
    buf.starts_with(b"MAC ")
}

/// Musepack SV8.
pub fn musepack(buf: &[u8]) -> bool {
    buf.starts_with(b"MPCK")
}

/// Adaptive Multi-Rate speech.
pub fn amr(buf: &[u8]) -> bool {
    buf.starts_with(b"#!AMR")
}

/// RIFF container carrying the given form type.
pub(crate) fn riff(buf: &[u8], form: &[u8; 4]) -> bool {
    buf.starts_with(b"RIFF") && has_at(buf, 8, form)
}

/// Waveform audio.
pub fn wav(buf: &[u8]) -> bool {
    riff(buf, b"WAVE")
}

/// Audio Interchange File Format, compressed variant included.
pub fn aiff(buf: &[u8]) -> bool {
    buf.starts_with(b"FORM") && (has_at(buf, 8, b"AIFF") || has_at(buf, 8, b"AIFC"))
}

/// Sun/NeXT audio.
pub fn au(buf: &[u8]) -> bool {
    buf.starts_with(b".snd")
}

/// AAC in an ADTS stream.
pub fn aac(buf: &[u8]) -> bool {
    buf.starts_with(&[0xFF, 0xF1]) || buf.starts_with(&[0xFF, 0xF9])
}

/// Creative Voice.
pub fn voc(buf: &[u8]) -> bool {
    buf.starts_with(b"Creative Voice File")
}

/// Qualcomm PureVoice.
pub fn qcp(buf: &[u8]) -> bool {
    riff(buf, b"QLCM")
}

/// Ogg bitstream.
pub fn ogg(buf: &[u8]) -> bool {
    buf.starts_with(b"OggS")
}

/// Codec identification packet of the first logical stream.
const OGG_CODEC_OFFSET: usize = 28;

const OGG_AUDIO_CODECS: [&[u8]; 4] = [b"\x7FFLAC", b"\x01vorbis", b"OpusHead", b"Speex   "];
const OGG_VIDEO_CODECS: [&[u8]; 3] = [b"\x80theora", b"fishead\x00", b"\x01video\x00\x00\x00"];

fn ogg_codec(buf: &[u8], codecs: &[&[u8]]) -> bool {
    codecs.iter().any(|codec| has_at(buf, OGG_CODEC_OFFSET, codec))
}

/// Ogg carrying FLAC, Vorbis, Opus or Speex.
pub fn ogg_audio(buf: &[u8]) -> bool {
    ogg_codec(buf, &OGG_AUDIO_CODECS)
}

/// Ogg carrying Theora, Skeleton or OGM video.
pub fn ogg_video(buf: &[u8]) -> bool {
    ogg_codec(buf, &OGG_VIDEO_CODECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ogg_page(codec: &[u8]) -> Vec<u8> {
        let mut page = b"OggS".to_vec();
        page.resize(OGG_CODEC_OFFSET, 0);
        page.extend_from_slice(codec);
        page
    }

    #[test]
    fn test_mp3_frame_sync() {
        assert!(mp3(b"ID3\x04\x00"));
        assert!(mp3(&[0xFF, 0xFB, 0x90, 0x64]));
        assert!(mp3(&[0xFF, 0xF3, 0x00]));
        assert!(mp3(&[0xFF, 0xE2]));
        // AAC ADTS header shares the sync word but not the layer bits.
        assert!(!mp3(&[0xFF, 0xF1, 0x50]));
        assert!(!mp3(&[0xFF]));
    }

    #[test]
    fn test_riff_forms() {
        assert!(wav(b"RIFF\x24\x08\x00\x00WAVEfmt "));
        assert!(!wav(b"RIFF\x24\x08\x00\x00AVI "));
        assert!(qcp(b"RIFF\x00\x00\x00\x00QLCMfmt "));
    }

    #[test]
    fn test_aiff_variants() {
        assert!(aiff(b"FORM\x00\x00\x00\x00AIFF"));
        assert!(aiff(b"FORM\x00\x00\x00\x00AIFC"));
        assert!(!aiff(b"FORM\x00\x00\x00\x00ILBM"));
    }

    #[test]
    fn test_ogg_codecs() {
        let vorbis = ogg_page(b"\x01vorbis\x00\x00");
        assert!(ogg(&vorbis));
        assert!(ogg_audio(&vorbis));
        assert!(!ogg_video(&vorbis));

        let theora = ogg_page(b"\x80theora");
        assert!(ogg_video(&theora));
        assert!(!ogg_audio(&theora));

        assert!(!ogg_audio(b"OggS"));
    }

    #[test]
    fn test_simple_magics() {
        assert!(flac(b"fLaC\x00\x00\x00\x22"));
        assert!(midi(b"MThd\x00\x00\x00\x06"));
        assert!(amr(b"#!AMR\n"));
        assert!(aac(&[0xFF, 0xF1, 0x50, 0x80]));
        assert!(voc(b"Creative Voice File\x1A"));
        assert!(au(b".snd\x00\x00\x00\x18"));
        assert!(!ape(b"MA"));
    }
}
