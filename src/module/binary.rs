// Wed Oct 14 2026 - Alex

//! Builds an [`ImageModule`] from a library file on disk, laid out the way
//! the loader would map it.

use crate::memory::{Address, MemoryError};
use crate::module::ImageModule;
use goblin::elf::program_header::PT_LOAD;
use goblin::elf::Elf;
use goblin::pe::PE;
use goblin::Object;
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

const MAX_IMAGE_SIZE: u64 = 1 << 30;

#[derive(Debug, Clone, Copy)]
struct Segment {
    vaddr: u64,
    memsz: u64,
    offset: u64,
    filesz: u64,
}

impl ImageModule {
    /// Maps the ELF or PE file at `path` and lays it out at `base`.
    pub fn load<P: AsRef<Path>>(name: &str, path: P, base: Address) -> Result<Self, MemoryError> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file) }?;
        Self::from_binary(name, &mmap, base)
    }

    pub fn from_binary(name: &str, data: &[u8], base: Address) -> Result<Self, MemoryError> {
        let object = Object::parse(data).map_err(|e| MemoryError::BinaryParse(e.to_string()))?;

        match object {
            Object::Elf(elf) => from_elf(name, data, &elf, base),
            Object::PE(pe) => from_pe(name, data, &pe, base),
            _ => Err(MemoryError::BinaryParse(format!("\"{}\" is neither ELF nor PE", name))),
        }
    }
}

fn from_elf(name: &str, data: &[u8], elf: &Elf, base: Address) -> Result<ImageModule, MemoryError> {
    let segments: Vec<Segment> = elf
        .program_headers
        .iter()
        .filter(|header| header.p_type == PT_LOAD)
        .map(|header| Segment {
            vaddr: header.p_vaddr,
            memsz: header.p_memsz,
            offset: header.p_offset,
            filesz: header.p_filesz,
        })
        .collect();

    let (image, image_base) = layout(data, &segments)?;
    let mut module = ImageModule::new(name, base, image);

    // The vtable pointer stored in objects skips offset-to-top and the RTTI pointer.
    let header_size = if elf.is_64 { 16 } else { 8 };
    let symbols = elf
        .syms
        .iter()
        .filter_map(|sym| elf.strtab.get_at(sym.st_name).map(|name| (name, sym.st_value)))
        .chain(
            elf.dynsyms
                .iter()
                .filter_map(|sym| {
                    elf.dynstrtab
                        .get_at(sym.st_name)
                        .map(|name| (name, sym.st_value))
                }),
        );

    for (symbol, value) in symbols {
        let Some(class) = vtable_class_name(symbol) else {
            continue;
        };
        if value < image_base {
            continue;
        }
        module = module.with_vtable(class, base + (value - image_base + header_size));
    }

    log::debug!("Loaded ELF image \"{}\" ({:#x} bytes)", name, module.size());
    Ok(module)
}

fn from_pe(name: &str, data: &[u8], pe: &PE, base: Address) -> Result<ImageModule, MemoryError> {
    let mut segments: Vec<Segment> = pe
        .sections
        .iter()
        .map(|section| Segment {
            vaddr: section.virtual_address as u64,
            memsz: section.virtual_size.max(section.size_of_raw_data) as u64,
            offset: section.pointer_to_raw_data as u64,
            filesz: section.size_of_raw_data as u64,
        })
        .collect();

    // Headers occupy RVA 0.
    segments.push(Segment { vaddr: 0, memsz: 0, offset: 0, filesz: 0 });

    let (image, _) = layout(data, &segments)?;
    log::debug!("Loaded PE image \"{}\" ({:#x} bytes)", name, image.len());
    Ok(ImageModule::new(name, base, image))
}

/// Copies each segment's file bytes to its offset from the lowest segment.
/// Returns the image and the virtual address it starts at.
fn layout(data: &[u8], segments: &[Segment]) -> Result<(Vec<u8>, u64), MemoryError> {
    let Some(start) = segments.iter().map(|segment| segment.vaddr).min() else {
        return Err(MemoryError::BinaryParse("no loadable segments".to_string()));
    };
    let end = segments
        .iter()
        .map(|segment| segment.vaddr.saturating_add(segment.memsz))
        .max()
        .unwrap_or(start);

    let size = end - start;
    if size > MAX_IMAGE_SIZE {
        return Err(MemoryError::BinaryParse(format!("image spans {:#x} bytes", size)));
    }

    let mut image = vec![0u8; size as usize];
    for segment in segments {
        let file_start = segment.offset.min(data.len() as u64) as usize;
        let file_end = segment
            .offset
            .saturating_add(segment.filesz.min(segment.memsz))
            .min(data.len() as u64) as usize;
        let bytes = &data[file_start..file_end];

        let image_start = (segment.vaddr - start) as usize;
        image[image_start..image_start + bytes.len()].copy_from_slice(bytes);
    }

    Ok((image, start))
}

/// Class name of an Itanium vtable symbol such as `_ZTV13CCSPlayerPawn`.
/// Nested and templated names are not decoded.
fn vtable_class_name(symbol: &str) -> Option<&str> {
    let rest = symbol.strip_prefix("_ZTV")?;
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    let len: usize = rest[..digits].parse().ok()?;
    let class = &rest[digits..];

    (class.len() == len).then_some(class)
}
