//! Binary module assembly.
//!
//! Wraps the function records produced by [`tadpole_codegen`] into a
//! complete WebAssembly module: header, type, import, function, export,
//! and code sections. Function bodies arrive already length-framed, so
//! the code section is mostly concatenation.
//!
//! Host imports live under the `env` module, each typed `(i32) -> ()`.
//! Every generated function is typed `(i32^k) -> (i32)` over the single
//! supported value type and exported under its own name.

use tadpole_codegen::FuncRecord;
use tadpole_wasm::{ValType, encode_vector, write_leb128_u32};

/// Module name all host imports are looked up under.
pub const IMPORT_MODULE: &str = "env";

const MAGIC: [u8; 4] = *b"\0asm";
const VERSION: [u8; 4] = [0x01, 0x00, 0x00, 0x00];

const SECTION_TYPE: u8 = 1;
const SECTION_IMPORT: u8 = 2;
const SECTION_FUNCTION: u8 = 3;
const SECTION_EXPORT: u8 = 7;
const SECTION_CODE: u8 = 10;

const FUNC_TYPE: u8 = 0x60;
const EXPORT_KIND_FUNC: u8 = 0x00;

/// A function type: parameter count over i32, and whether it returns one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FuncType {
    params: u32,
    has_result: bool,
}

/// Assemble a complete binary module.
///
/// `imports` must be the import list the generator ran with: the records'
/// indices start right after it, and the assembler lays functions out by
/// index. Records may arrive in any order.
pub fn assemble(records: &[FuncRecord], imports: &[&str]) -> Vec<u8> {
    let mut records: Vec<&FuncRecord> = records.iter().collect();
    records.sort_by_key(|r| r.index);
    debug_assert!(
        records
            .iter()
            .enumerate()
            .all(|(i, r)| r.index as usize == imports.len() + i),
        "function indices must continue the import index space without gaps"
    );

    let mut types: Vec<FuncType> = Vec::new();
    let import_type = FuncType {
        params: 1,
        has_result: false,
    };
    let import_types: Vec<u32> = imports
        .iter()
        .map(|_| intern_type(&mut types, import_type))
        .collect();
    let func_types: Vec<u32> = records
        .iter()
        .map(|r| {
            intern_type(
                &mut types,
                FuncType {
                    params: r.params.len() as u32,
                    has_result: true,
                },
            )
        })
        .collect();

    let mut module = Vec::new();
    module.extend_from_slice(&MAGIC);
    module.extend_from_slice(&VERSION);
    module.extend(section(SECTION_TYPE, &type_section(&types)));
    if !imports.is_empty() {
        module.extend(section(
            SECTION_IMPORT,
            &import_section(imports, &import_types),
        ));
    }
    module.extend(section(SECTION_FUNCTION, &function_section(&func_types)));
    module.extend(section(SECTION_EXPORT, &export_section(&records)));
    module.extend(section(SECTION_CODE, &code_section(&records)));
    module
}

/// Find or add a function type, returning its index.
fn intern_type(types: &mut Vec<FuncType>, ty: FuncType) -> u32 {
    match types.iter().position(|t| *t == ty) {
        Some(index) => index as u32,
        None => {
            types.push(ty);
            types.len() as u32 - 1
        }
    }
}

/// One section: id byte, then the length-framed payload.
fn section(id: u8, payload: &[u8]) -> Vec<u8> {
    let mut out = vec![id];
    out.extend(encode_vector(payload));
    out
}

fn type_section(types: &[FuncType]) -> Vec<u8> {
    let mut payload = Vec::new();
    write_leb128_u32(types.len() as u32, &mut payload);
    for ty in types {
        payload.push(FUNC_TYPE);
        write_leb128_u32(ty.params, &mut payload);
        for _ in 0..ty.params {
            payload.push(ValType::I32 as u8);
        }
        if ty.has_result {
            write_leb128_u32(1, &mut payload);
            payload.push(ValType::I32 as u8);
        } else {
            write_leb128_u32(0, &mut payload);
        }
    }
    payload
}

fn import_section(imports: &[&str], import_types: &[u32]) -> Vec<u8> {
    let mut payload = Vec::new();
    write_leb128_u32(imports.len() as u32, &mut payload);
    for (name, &type_index) in imports.iter().zip(import_types) {
        payload.extend(encode_vector(IMPORT_MODULE.as_bytes()));
        payload.extend(encode_vector(name.as_bytes()));
        payload.push(EXPORT_KIND_FUNC);
        write_leb128_u32(type_index, &mut payload);
    }
    payload
}

fn function_section(func_types: &[u32]) -> Vec<u8> {
    let mut payload = Vec::new();
    write_leb128_u32(func_types.len() as u32, &mut payload);
    for &type_index in func_types {
        write_leb128_u32(type_index, &mut payload);
    }
    payload
}

fn export_section(records: &[&FuncRecord]) -> Vec<u8> {
    let mut payload = Vec::new();
    write_leb128_u32(records.len() as u32, &mut payload);
    for record in records {
        payload.extend(encode_vector(record.name.as_bytes()));
        payload.push(EXPORT_KIND_FUNC);
        write_leb128_u32(record.index, &mut payload);
    }
    payload
}

fn code_section(records: &[&FuncRecord]) -> Vec<u8> {
    let mut payload = Vec::new();
    write_leb128_u32(records.len() as u32, &mut payload);
    for record in records {
        payload.extend_from_slice(&record.body);
    }
    payload
}
