//! WebAssembly binary-format primitives for Tadpole.
//!
//! The pieces of the wasm binary format the code generator needs:
//!
//! - [`Opcode`] / [`ValType`]: the instruction and value-type constants
//! - [`write_leb128_u32`] / [`write_leb128_i64`]: variable-length integer
//!   writers (unsigned and signed LEB128)
//! - [`encode_vector`]: length-prefixed byte framing
//! - [`encode_local_group`]: one run of same-typed local declarations
//!
//! Everything here matches the WebAssembly core specification byte for
//! byte; higher layers own what gets encoded, this crate owns how.

mod encode;
mod opcode;

pub use encode::{
    encode_local_group, encode_vector, read_leb128_i64, read_leb128_u32, write_leb128_i64,
    write_leb128_u32,
};
pub use opcode::{Opcode, ValType};
