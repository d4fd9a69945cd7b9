//! Control-flow classification of decoded instructions.

use serde::Serialize;

use crate::decode::DecodedInstruction;
use crate::opcodes::InstrClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchKind {
    /// Conditional branch taken.
    Taken,
    /// Conditional branch not taken; execution continues past the encoding.
    FallThrough,
    /// Subroutine call; return linkage is the host's concern.
    Call,
    /// Unconditional transfer.
    Unconditional,
}

/// Directed control-flow relation to another instruction address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BranchEdge {
    pub kind: BranchKind,
    pub target: u16,
}

/// Control-flow edges leaving `instr` when it sits at `address`.
///
/// Relative branches re-interpret the operand byte as a signed two's-
/// complement displacement from the address past the two-byte branch
/// encoding; the 16-bit address space wraps rather than faults, so all
/// arithmetic is mod 65536. Calls and jumps target their raw operand value
/// with no offset arithmetic. Non-branching and undefined instructions
/// yield no edges.
pub fn branch_edges(instr: &DecodedInstruction, address: u16) -> Vec<BranchEdge> {
    match (instr.class, instr.value) {
        (InstrClass::Branch, Some(value)) => {
            let offset = i16::from(value as u8 as i8);
            let taken = address.wrapping_add(2).wrapping_add(offset as u16);
            let fall_through = address.wrapping_add(instr.total_length());
            vec![
                BranchEdge {
                    kind: BranchKind::Taken,
                    target: taken,
                },
                BranchEdge {
                    kind: BranchKind::FallThrough,
                    target: fall_through,
                },
            ]
        }
        (InstrClass::Call, Some(value)) => vec![BranchEdge {
            kind: BranchKind::Call,
            target: value,
        }],
        (InstrClass::Jump, Some(value)) => vec![BranchEdge {
            kind: BranchKind::Unconditional,
            target: value,
        }],
        _ => Vec::new(),
    }
}
