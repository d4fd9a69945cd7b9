//! Instruction decode core for the Motorola 6803 and HD6303.
//!
//! Maps raw opcode bytes to mnemonics and operand shapes, renders display
//! tokens, and recovers control-flow edges (with 16-bit wraparound) for a
//! hosting disassembler. The decode is structural only: mnemonic, operand
//! value, encoding class, byte length, and branch edges — no execution
//! semantics.
//!
//! The opcode table and operand catalog are process-wide immutable
//! constants; every decode, classification, and render call is an
//! independent, side-effect-free computation over at most three bytes, so
//! concurrent use needs no coordination.

pub mod arch;
pub mod decode;
pub mod flow;
pub mod opcodes;
pub mod operands;
pub mod tokens;

pub use arch::{
    convert_to_nop, flags_written, instruction_info, instruction_text, lift_instruction,
    register_width, Endianness, FlagRole, InstructionInfo, RegisterInfo, ADDRESS_SIZE,
    DEFAULT_INT_SIZE, ENDIANNESS, FLAGS, FLAG_WRITE_TYPES, INSTR_ALIGNMENT, MAX_INSTR_LENGTH,
    NOP_OPCODE, REGISTERS, STACK_POINTER,
};
pub use decode::{decode, DecodedInstruction, InstructionStream, StreamError};
pub use flow::{branch_edges, BranchEdge, BranchKind};
pub use opcodes::{lookup, InstrClass, OpcodeEntry, OPCODES, UNDEFINED_MNEMONIC};
pub use operands::OperandKind;
pub use tokens::{asm_str, Token, OPCODE_COLUMN};
