//! Executables, object files and bytecode.

use crate::common::binary::{read_u16_be, read_u16_le, read_u32_be};

/// DOS/Windows executable (`MZ` stub).
pub fn exe(buf: &[u8]) -> bool {
    buf.starts_with(b"MZ")
}

/// ELF file of any type.
pub fn elf(buf: &[u8]) -> bool {
    buf.starts_with(b"\x7FELF")
}

const EI_DATA: usize = 5;
const ELFDATA2LSB: u8 = 1;
const ELFDATA2MSB: u8 = 2;
const E_TYPE: usize = 16;

/// ELF object file types.
const ET_REL: u16 = 1;
const ET_EXEC: u16 = 2;
const ET_DYN: u16 = 3;
const ET_CORE: u16 = 4;

/// `e_type` of an ELF header, honouring the declared byte order.
fn elf_type(buf: &[u8]) -> Option<u16> {
    if !elf(buf) {
        return None;
    }
    match *buf.get(EI_DATA)? {
        ELFDATA2LSB => read_u16_le(buf, E_TYPE),
        ELFDATA2MSB => read_u16_be(buf, E_TYPE),
        _ => None,
    }
}

/// Relocatable ELF object.
pub fn elf_obj(buf: &[u8]) -> bool {
    elf_type(buf) == Some(ET_REL)
}

/// ELF executable.
pub fn elf_exe(buf: &[u8]) -> bool {
    elf_type(buf) == Some(ET_EXEC)
}

/// ELF shared library.
pub fn elf_lib(buf: &[u8]) -> bool {
    elf_type(buf) == Some(ET_DYN)
}

/// ELF core dump.
pub fn elf_dump(buf: &[u8]) -> bool {
    elf_type(buf) == Some(ET_CORE)
}

const CAFEBABE: &[u8] = &[0xCA, 0xFE, 0xBA, 0xBE];
/// Oldest class file major version (JDK 1.1).
const MIN_CLASS_MAJOR: u16 = 45;
/// Fat Mach-O binaries never carry this many architectures.
const MAX_FAT_ARCHS: u32 = 20;

/// Java class file.
///
/// Shares its magic with fat Mach-O binaries; the major version tells them apart.
pub fn class(buf: &[u8]) -> bool {
    buf.starts_with(CAFEBABE) && read_u16_be(buf, 6).is_some_and(|major| major >= MIN_CLASS_MAJOR)
}

const MACHO_MAGICS: [[u8; 4]; 4] = [
    [0xFE, 0xED, 0xFA, 0xCE],
    [0xFE, 0xED, 0xFA, 0xCF],
    [0xCE, 0xFA, 0xED, 0xFE],
    [0xCF, 0xFA, 0xED, 0xFE],
];

/// Mach-O binary, thin or fat.
pub fn macho(buf: &[u8]) -> bool {
    if buf.starts_with(CAFEBABE) {
        return read_u32_be(buf, 4).is_some_and(|archs| archs < MAX_FAT_ARCHS);
    }
    MACHO_MAGICS.iter().any(|magic| buf.starts_with(magic))
}

/// WebAssembly binary module.
pub fn wasm(buf: &[u8]) -> bool {
    buf.starts_with(b"\x00asm")
}

/// Shockwave Flash, uncompressed or zlib/LZMA compressed.
pub fn swf(buf: &[u8]) -> bool {
    buf.starts_with(b"FWS") || buf.starts_with(b"CWS") || buf.starts_with(b"ZWS")
}

/// iNES ROM image.
pub fn nes(buf: &[u8]) -> bool {
    buf.starts_with(b"NES\x1A")
}
