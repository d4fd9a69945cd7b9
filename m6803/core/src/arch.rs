//! Architecture metadata and the host-facing query surface.
//!
//! Everything here is a fixed constant or a thin delegation to the decode
//! core; the hosting analysis framework owns memory access, symbols, and
//! presentation.

use serde::Serialize;

use crate::decode::decode;
use crate::flow::{branch_edges, BranchEdge};
use crate::tokens::Token;

/// Address width in bytes; all address arithmetic wraps mod 65536.
pub const ADDRESS_SIZE: usize = 2;

/// Default integer size in bytes.
pub const DEFAULT_INT_SIZE: usize = 1;

/// Instructions are byte-aligned.
pub const INSTR_ALIGNMENT: usize = 1;

/// Longest encoding: opcode plus a 16-bit operand.
pub const MAX_INSTR_LENGTH: usize = 3;

/// Canonical single-byte no-operation encoding.
pub const NOP_OPCODE: u8 = 0x01;

/// Multi-byte operands are most-significant byte first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Big,
    Little,
}

pub const ENDIANNESS: Endianness = Endianness::Big;

/// One architectural register as the host sees it: the full-width register
/// it aliases, its size in bytes, and its byte offset within that register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterInfo {
    pub name: &'static str,
    pub full_width: &'static str,
    pub size: u8,
    pub offset: u8,
}

pub const REGISTERS: &[RegisterInfo] = &[
    RegisterInfo {
        name: "sp",
        full_width: "sp",
        size: 2,
        offset: 0,
    },
    RegisterInfo {
        name: "pc",
        full_width: "pc",
        size: 2,
        offset: 0,
    },
    RegisterInfo {
        name: "x",
        full_width: "x",
        size: 1,
        offset: 0,
    },
    // Accumulator pair: a is the high byte of d, b the low byte.
    RegisterInfo {
        name: "d",
        full_width: "d",
        size: 2,
        offset: 0,
    },
    RegisterInfo {
        name: "a",
        full_width: "d",
        size: 1,
        offset: 0,
    },
    RegisterInfo {
        name: "b",
        full_width: "d",
        size: 1,
        offset: 1,
    },
    RegisterInfo {
        name: "ccr",
        full_width: "ccr",
        size: 1,
        offset: 0,
    },
];

pub const STACK_POINTER: &str = "sp";

pub fn register_width(name: &str) -> u8 {
    match name {
        "sp" | "pc" | "d" => 2,
        "x" | "a" | "b" | "ccr" => 1,
        _ => 0,
    }
}

/// Host-visible role of each status flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagRole {
    HalfCarry,
    /// Interrupt mask; no generic role applies.
    Special,
    Negative,
    Zero,
    Overflow,
    Carry,
}

pub const FLAGS: [(&str, FlagRole); 6] = [
    ("h", FlagRole::HalfCarry),
    ("i", FlagRole::Special),
    ("n", FlagRole::Negative),
    ("z", FlagRole::Zero),
    ("v", FlagRole::Overflow),
    ("c", FlagRole::Carry),
];

/// Flag-update groupings: one name per distinct flag subset instructions touch.
pub const FLAG_WRITE_TYPES: [&str; 8] = ["*", "nzvc", "z", "nzv", "hnzvc", "c", "i", "v"];

pub fn flags_written(write_type: &str) -> &'static [&'static str] {
    match write_type {
        "*" => &["h", "i", "n", "z", "v", "c"],
        "nzvc" => &["n", "z", "v", "c"],
        "z" => &["z"],
        "nzv" => &["n", "z", "v"],
        "hnzvc" => &["h", "n", "z", "v", "c"],
        "c" => &["c"],
        "i" => &["i"],
        "v" => &["v"],
        _ => &[],
    }
}

/// Length and outgoing control-flow edges of one instruction.
#[derive(Debug, Clone, Serialize)]
pub struct InstructionInfo {
    pub length: u16,
    pub branches: Vec<BranchEdge>,
}

/// Instruction-info query. `None` iff the opcode byte is undefined, so the
/// host stops disassembly at that address.
pub fn instruction_info(data: &[u8], address: u16) -> Option<InstructionInfo> {
    let instr = decode(data, address);
    if !instr.is_defined() {
        return None;
    }
    Some(InstructionInfo {
        length: instr.total_length(),
        branches: branch_edges(&instr, address),
    })
}

/// Instruction-text query: display tokens plus total length, or `None` for
/// an undefined opcode.
pub fn instruction_text(data: &[u8], address: u16) -> Option<(Vec<Token>, u16)> {
    let instr = decode(data, address);
    if !instr.is_defined() {
        return None;
    }
    Some((instr.tokens(), instr.total_length()))
}

/// Same-length replacement that neutralizes the range without moving code.
pub fn convert_to_nop(data: &[u8], _address: u16) -> Vec<u8> {
    vec![NOP_OPCODE; data.len()]
}

/// Lifting stub: no semantics are produced, only how far to advance. Unlike
/// the info/text queries this never fails; the sentinel reports length 1.
pub fn lift_instruction(data: &[u8], address: u16) -> u16 {
    decode(data, address).total_length()
}
