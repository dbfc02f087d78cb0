//! LEB128 integer writers and byte framing helpers.
//!
//! Readers are provided alongside the writers so tests and tooling can
//! decode what the generator produced.

use crate::opcode::ValType;

/// Append `value` as unsigned LEB128.
pub fn write_leb128_u32(mut value: u32, out: &mut Vec<u8>) {
    loop {
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;
        if value != 0 {
            byte |= 0x80;
        }
        out.push(byte);
        if value == 0 {
            break;
        }
    }
}

/// Append `value` as signed LEB128.
pub fn write_leb128_i64(mut value: i64, out: &mut Vec<u8>) {
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        let sign_clear = byte & 0x40 == 0;
        let done = (value == 0 && sign_clear) || (value == -1 && !sign_clear);
        out.push(if done { byte } else { byte | 0x80 });
        if done {
            break;
        }
    }
}

/// Decode an unsigned LEB128 value from the front of `bytes`.
///
/// Returns the value and the number of bytes consumed, or None if the
/// input ends mid-integer.
pub fn read_leb128_u32(bytes: &[u8]) -> Option<(u32, usize)> {
    let mut value: u32 = 0;
    let mut shift = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        if shift >= 32 {
            return None;
        }
        value |= u32::from(byte & 0x7F) << shift;
        if byte & 0x80 == 0 {
            return Some((value, i + 1));
        }
        shift += 7;
    }
    None
}

/// Decode a signed LEB128 value from the front of `bytes`.
///
/// Returns the value and the number of bytes consumed, or None if the
/// input ends mid-integer.
pub fn read_leb128_i64(bytes: &[u8]) -> Option<(i64, usize)> {
    let mut value: i64 = 0;
    let mut shift = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        if shift >= 64 {
            return None;
        }
        value |= i64::from(byte & 0x7F) << shift;
        shift += 7;
        if byte & 0x80 == 0 {
            if shift < 64 && byte & 0x40 != 0 {
                value |= -1i64 << shift;
            }
            return Some((value, i + 1));
        }
    }
    None
}

/// Frame `bytes` with an unsigned LEB128 byte-length prefix.
///
/// Used both for function-body framing in the code section and for
/// section payloads.
pub fn encode_vector(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len() + 2);
    write_leb128_u32(bytes.len() as u32, &mut out);
    out.extend_from_slice(bytes);
    out
}

/// Encode one local-declaration group: `count` locals of type `ty`.
pub fn encode_local_group(count: u32, ty: ValType) -> Vec<u8> {
    let mut out = Vec::with_capacity(3);
    write_leb128_u32(count, &mut out);
    out.push(ty as u8);
    out
}
