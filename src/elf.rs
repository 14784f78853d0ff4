use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use goblin::elf::section_header::{SHN_ABS, SHN_COMMON, SHN_UNDEF};
use goblin::elf::sym::{Sym, STB_LOCAL, STB_WEAK, STT_FILE, STT_FUNC, STT_OBJECT, STT_SECTION};
use goblin::elf::Elf;

use crate::error::{CheckError, Result};
use crate::symbols::SymbolSource;

/// Reads `.symtab` directly with goblin, rendered the way `nm` prints it.
#[derive(Debug, Default, Clone, Copy)]
pub struct ElfSymbolSource;

impl SymbolSource for ElfSymbolSource {
    fn name(&self) -> &'static str {
        "goblin"
    }

    fn extract_symbols(&self, path: &Path) -> Result<String> {
        let file = fs::File::open(path).map_err(|e| CheckError::extraction(path, e.to_string()))?;
        let mmap = unsafe { memmap2::Mmap::map(&file) }
            .map_err(|e| CheckError::extraction(path, e.to_string()))?;

        let elf = Elf::parse(&mmap).map_err(|e| CheckError::extraction(path, e.to_string()))?;
        Ok(render_symtab(&elf))
    }
}

fn render_symtab(elf: &Elf) -> String {
    let width = if elf.is_64 { 16 } else { 8 };
    let mut out = String::new();

    for sym in elf.syms.iter() {
        if sym.st_type() == STT_FILE || sym.st_type() == STT_SECTION {
            continue;
        }
        let name = match elf.strtab.get_at(sym.st_name) {
            Some(name) if !name.is_empty() => name,
            _ => continue,
        };

        let kind = type_letter(elf, &sym);
        if sym.st_shndx == SHN_UNDEF as usize {
            let _ = writeln!(out, "{:width$} {} {}", "", kind, name, width = width);
        } else {
            let _ = writeln!(out, "{:0width$x} {} {}", sym.st_value, kind, name, width = width);
        }
    }

    out
}

/// Approximates the `nm` symbol type column.
fn type_letter(elf: &Elf, sym: &Sym) -> char {
    let bind = sym.st_bind();

    if sym.st_shndx == SHN_UNDEF as usize {
        return if bind == STB_WEAK { 'w' } else { 'U' };
    }
    if bind == STB_WEAK {
        return if sym.st_type() == STT_OBJECT { 'V' } else { 'W' };
    }

    let letter = if sym.st_shndx == SHN_ABS as usize {
        'a'
    } else if sym.st_shndx == SHN_COMMON as usize {
        'c'
    } else {
        match section_name(elf, sym.st_shndx) {
            Some(".bss") | Some(".tbss") => 'b',
            Some(name) if name.starts_with(".rodata") => 'r',
            Some(name) if name.starts_with(".data") || name.starts_with(".tdata") => 'd',
            _ if sym.st_type() == STT_FUNC => 't',
            _ if sym.st_type() == STT_OBJECT => 'd',
            _ => '?',
        }
    };

    if bind == STB_LOCAL {
        letter
    } else {
        letter.to_ascii_uppercase()
    }
}

fn section_name<'a>(elf: &'a Elf, index: usize) -> Option<&'a str> {
    elf.section_headers
        .get(index)
        .and_then(|sh| elf.shdr_strtab.get_at(sh.sh_name))
}
