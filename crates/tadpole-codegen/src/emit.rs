//! Byte-level instruction emission.
//!
//! A [`CodeBuf`] accumulates the instruction bytes for one sequence.
//! Sequences are ordinary values: generation functions build one, return
//! it, and callers concatenate.

use tadpole_wasm::{Opcode, write_leb128_i64, write_leb128_u32};

/// An instruction byte sequence under construction.
#[derive(Debug, Default)]
pub(crate) struct CodeBuf {
    bytes: Vec<u8>,
}

impl CodeBuf {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Emit a bare opcode.
    pub(crate) fn emit(&mut self, op: Opcode) {
        self.bytes.push(op as u8);
    }

    /// Emit `i32.const` with a signed LEB128 operand.
    pub(crate) fn emit_i32_const(&mut self, value: i64) {
        self.emit(Opcode::I32Const);
        write_leb128_i64(value, &mut self.bytes);
    }

    /// Emit `local.get` for a slot.
    pub(crate) fn emit_local_get(&mut self, slot: u32) {
        self.emit(Opcode::LocalGet);
        write_leb128_u32(slot, &mut self.bytes);
    }

    /// Emit `local.set` for a slot.
    pub(crate) fn emit_local_set(&mut self, slot: u32) {
        self.emit(Opcode::LocalSet);
        write_leb128_u32(slot, &mut self.bytes);
    }

    /// Emit a direct call to a function index.
    pub(crate) fn emit_call(&mut self, index: u32) {
        self.emit(Opcode::Call);
        write_leb128_u32(index, &mut self.bytes);
    }

    /// Append an already-generated sequence.
    pub(crate) fn extend(&mut self, code: Vec<u8>) {
        self.bytes.extend(code);
    }

    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
