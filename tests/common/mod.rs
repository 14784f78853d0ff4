use std::io::Write;
use tempfile::NamedTempFile;

const SHSTRTAB: &[u8] = b"\0.shstrtab\0";
const EHDR_SIZE: usize = 64;
const SHDR_SIZE: usize = 64;

/// An ELF64 relocatable object with a section table (null + `.shstrtab`)
/// and no `.symtab`, which is what `strip --strip-all` leaves behind.
pub fn symbolless_elf64() -> Vec<u8> {
    let shstrtab_offset = EHDR_SIZE;
    let shoff = (shstrtab_offset + SHSTRTAB.len() + 7) & !7;

    let mut elf = Vec::new();
    elf.extend_from_slice(b"\x7fELF");
    elf.extend_from_slice(&[2, 1, 1, 0]); // ELFCLASS64, little-endian, EV_CURRENT, SYSV
    elf.extend_from_slice(&[0; 8]);
    elf.extend_from_slice(&1u16.to_le_bytes()); // ET_REL
    elf.extend_from_slice(&0x3eu16.to_le_bytes()); // EM_X86_64
    elf.extend_from_slice(&1u32.to_le_bytes());
    elf.extend_from_slice(&0u64.to_le_bytes()); // e_entry
    elf.extend_from_slice(&0u64.to_le_bytes()); // e_phoff
    elf.extend_from_slice(&(shoff as u64).to_le_bytes());
    elf.extend_from_slice(&0u32.to_le_bytes()); // e_flags
    elf.extend_from_slice(&(EHDR_SIZE as u16).to_le_bytes());
    elf.extend_from_slice(&0u16.to_le_bytes()); // e_phentsize
    elf.extend_from_slice(&0u16.to_le_bytes()); // e_phnum
    elf.extend_from_slice(&(SHDR_SIZE as u16).to_le_bytes());
    elf.extend_from_slice(&2u16.to_le_bytes()); // e_shnum
    elf.extend_from_slice(&1u16.to_le_bytes()); // e_shstrndx
    assert_eq!(elf.len(), EHDR_SIZE);

    elf.extend_from_slice(SHSTRTAB);
    elf.resize(shoff, 0);

    elf.extend_from_slice(&[0; SHDR_SIZE]);
    elf.extend_from_slice(&1u32.to_le_bytes()); // sh_name ".shstrtab"
    elf.extend_from_slice(&3u32.to_le_bytes()); // SHT_STRTAB
    elf.extend_from_slice(&0u64.to_le_bytes()); // sh_flags
    elf.extend_from_slice(&0u64.to_le_bytes()); // sh_addr
    elf.extend_from_slice(&(shstrtab_offset as u64).to_le_bytes());
    elf.extend_from_slice(&(SHSTRTAB.len() as u64).to_le_bytes());
    elf.extend_from_slice(&0u32.to_le_bytes()); // sh_link
    elf.extend_from_slice(&0u32.to_le_bytes()); // sh_info
    elf.extend_from_slice(&1u64.to_le_bytes()); // sh_addralign
    elf.extend_from_slice(&0u64.to_le_bytes()); // sh_entsize
    assert_eq!(elf.len(), shoff + 2 * SHDR_SIZE);

    elf
}

pub fn write_temp(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}
