//! Instruction decoding over raw byte buffers.

use log::debug;
use thiserror::Error;

use crate::opcodes::{lookup, InstrClass, UNDEFINED_MNEMONIC};
use crate::operands::OperandKind;
use crate::tokens::Token;

/// One decoded instruction. Transient and caller-owned; nothing is cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedInstruction {
    pub mnemonic: &'static str,
    pub operand: OperandKind,
    /// Extracted operand value; `Some` iff the shape has operand bytes.
    pub value: Option<u16>,
    pub class: InstrClass,
}

impl DecodedInstruction {
    pub fn operand_length(&self) -> u8 {
        self.operand.len_bytes()
    }

    /// Opcode byte plus operand bytes.
    pub fn total_length(&self) -> u16 {
        1 + u16::from(self.operand.len_bytes())
    }

    /// `false` for the undefined-opcode sentinel.
    pub fn is_defined(&self) -> bool {
        self.mnemonic != UNDEFINED_MNEMONIC
    }

    /// Render the full display-token sequence: padded mnemonic column first,
    /// then the operand tokens when a value is present.
    pub fn tokens(&self) -> Vec<Token> {
        let mut tokens = vec![Token::opcode(self.mnemonic)];
        if let Some(value) = self.value {
            tokens.extend(self.operand.render(value));
        }
        tokens
    }
}

/// Decode one instruction from the front of `data`.
///
/// Total over all 256 opcode byte values: an unmapped opcode yields the
/// [`UNDEFINED_MNEMONIC`] sentinel with no operand, which is a successful
/// outcome the caller may still choose to reject. Word operands are read
/// big-endian. `address` is not used by decoding itself.
///
/// # Panics
///
/// Panics if `data` holds fewer than `1 + operand length` bytes; callers
/// guarantee up to [`crate::arch::MAX_INSTR_LENGTH`] bytes except at the
/// true end of the addressable region.
pub fn decode(data: &[u8], address: u16) -> DecodedInstruction {
    let opcode = data[0];
    let Some(entry) = lookup(opcode) else {
        debug!("undefined opcode {opcode:#04x} at {address:#06x}");
        return DecodedInstruction {
            mnemonic: UNDEFINED_MNEMONIC,
            operand: OperandKind::None,
            value: None,
            class: InstrClass::Normal,
        };
    };
    let value = match entry.operand.len_bytes() {
        0 => None,
        1 => Some(u16::from(data[1])),
        _ => Some(u16::from_be_bytes([data[1], data[2]])),
    };
    debug!("{address:#06x}: {}", entry.mnemonic);
    DecodedInstruction {
        mnemonic: entry.mnemonic,
        operand: entry.operand,
        value,
        class: entry.class,
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StreamError {
    /// The buffer ended inside an operand; valid only at the end of the
    /// addressable region, so the sweep stops here.
    #[error("instruction at {address:#06x} needs {needed} bytes, {available} available")]
    Truncated {
        address: u16,
        needed: usize,
        available: usize,
    },
}

/// Linear-sweep iterator over a byte buffer: each instruction starts where
/// the previous one ended, with wrapping 16-bit addresses. Undefined opcodes
/// are yielded like any other decode; a buffer ending mid-operand yields one
/// [`StreamError::Truncated`] and then the stream ends.
pub struct InstructionStream<'a> {
    data: &'a [u8],
    offset: usize,
    address: u16,
}

impl<'a> InstructionStream<'a> {
    pub fn new(data: &'a [u8], origin: u16) -> Self {
        Self {
            data,
            offset: 0,
            address: origin,
        }
    }
}

impl Iterator for InstructionStream<'_> {
    type Item = Result<(u16, DecodedInstruction), StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.data[self.offset..];
        if rest.is_empty() {
            return None;
        }
        let needed = 1 + lookup(rest[0]).map_or(0, |entry| usize::from(entry.operand.len_bytes()));
        if rest.len() < needed {
            let truncated = StreamError::Truncated {
                address: self.address,
                needed,
                available: rest.len(),
            };
            self.offset = self.data.len();
            return Some(Err(truncated));
        }
        let instr = decode(rest, self.address);
        let address = self.address;
        self.offset += needed;
        self.address = self.address.wrapping_add(instr.total_length());
        Some(Ok((address, instr)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::asm_str;

    #[test]
    fn inherent_instruction_decodes_without_operand() {
        let instr = decode(&[0x01], 0x2000);
        assert_eq!(instr.mnemonic, "nop");
        assert_eq!(instr.total_length(), 1);
        assert_eq!(instr.value, None);
        assert!(instr.is_defined());
    }

    #[test]
    fn byte_immediate_extracts_value() {
        let instr = decode(&[0x86, 0x05], 0);
        assert_eq!(instr.mnemonic, "ldaa");
        assert_eq!(instr.operand_length(), 1);
        assert_eq!(instr.value, Some(0x05));
        assert_eq!(asm_str(&instr.tokens()), "ldaa    #$05");
    }

    #[test]
    fn word_operands_are_big_endian() {
        let instr = decode(&[0xce, 0x12, 0x34], 0);
        assert_eq!(instr.mnemonic, "ldx");
        assert_eq!(instr.value, Some(0x1234));
        assert_eq!(instr.total_length(), 3);
    }

    #[test]
    fn undefined_opcode_is_a_successful_decode() {
        let instr = decode(&[0xff, 0xaa, 0xbb], 0x4000);
        assert_eq!(instr.mnemonic, UNDEFINED_MNEMONIC);
        assert_eq!(instr.total_length(), 1);
        assert_eq!(instr.value, None);
        assert!(!instr.is_defined());
        // Only the padded sentinel column, no operand tokens.
        assert_eq!(instr.tokens().len(), 1);
    }

    #[test]
    fn undefined_ignores_follow_on_bytes() {
        assert_eq!(decode(&[0xff], 0), decode(&[0xff, 0xce, 0x12], 0));
    }

    #[test]
    fn stream_walks_consecutive_instructions() {
        let program = [0x86, 0x05, 0x20, 0x02, 0x01];
        let decoded: Vec<_> = InstructionStream::new(&program, 0x1000)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        let summary: Vec<_> = decoded
            .iter()
            .map(|(address, instr)| (*address, instr.mnemonic))
            .collect();
        assert_eq!(
            summary,
            vec![(0x1000, "ldaa"), (0x1002, "bra"), (0x1004, "nop")]
        );
    }

    #[test]
    fn stream_reports_truncation_then_ends() {
        let mut stream = InstructionStream::new(&[0x01, 0xce, 0x12], 0x0ffe);
        assert!(matches!(stream.next(), Some(Ok((0x0ffe, _)))));
        assert_eq!(
            stream.next(),
            Some(Err(StreamError::Truncated {
                address: 0x0fff,
                needed: 3,
                available: 2,
            }))
        );
        assert_eq!(stream.next(), None);
    }

    #[test]
    fn stream_addresses_wrap_at_the_top_of_memory() {
        let program = [0x01, 0x01, 0x01];
        let addresses: Vec<_> = InstructionStream::new(&program, 0xffff)
            .map(|item| item.unwrap().0)
            .collect();
        assert_eq!(addresses, vec![0xffff, 0x0000, 0x0001]);
    }
}
