//! Property and exhaustive coverage of the decode core.

use m6803_core::{
    branch_edges, decode, lookup, InstructionStream, BranchKind, MAX_INSTR_LENGTH,
    UNDEFINED_MNEMONIC,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn decode_is_total_and_bounded(opcode in any::<u8>(), rest in any::<[u8; 2]>(), address in any::<u16>()) {
        let data = [opcode, rest[0], rest[1]];
        let instr = decode(&data, address);
        prop_assert!(usize::from(instr.total_length()) <= MAX_INSTR_LENGTH);
        prop_assert_eq!(instr.value.is_some(), instr.operand_length() > 0);
        prop_assert_eq!(instr.is_defined(), lookup(opcode).is_some());
    }

    #[test]
    fn branch_destination_matches_the_wrapping_formula(address in any::<u16>(), offset in any::<u8>()) {
        let instr = decode(&[0x20, offset], address);
        let edges = branch_edges(&instr, address);
        let expected = (i32::from(address) + i32::from(offset as i8) + 2).rem_euclid(0x10000) as u16;
        prop_assert_eq!(edges[0].kind, BranchKind::Taken);
        prop_assert_eq!(edges[0].target, expected);
        prop_assert_eq!(edges[1].kind, BranchKind::FallThrough);
        prop_assert_eq!(edges[1].target, address.wrapping_add(2));
    }

    #[test]
    fn rendering_is_deterministic(opcode in any::<u8>(), rest in any::<[u8; 2]>()) {
        let data = [opcode, rest[0], rest[1]];
        prop_assert_eq!(decode(&data, 0).tokens(), decode(&data, 0).tokens());
        prop_assert_eq!(decode(&data, 0), decode(&data, 0xffff));
    }

    #[test]
    fn sweep_never_panics_on_arbitrary_buffers(
        data in proptest::collection::vec(any::<u8>(), 0..64),
        origin in any::<u16>(),
    ) {
        let mut instructions = 0usize;
        for item in InstructionStream::new(&data, origin) {
            match item {
                Ok((_, instr)) => instructions += usize::from(instr.total_length()),
                Err(_) => break,
            }
        }
        prop_assert!(instructions <= data.len());
    }
}

#[test]
fn every_opcode_byte_decodes_with_a_full_buffer() {
    for opcode in 0u8..=0xff {
        let instr = decode(&[opcode, 0x12, 0x34], 0x8000);
        match lookup(opcode) {
            Some(entry) => {
                assert_eq!(instr.mnemonic, entry.mnemonic);
                assert_eq!(instr.operand_length(), entry.operand.len_bytes());
            }
            None => {
                assert_eq!(instr.mnemonic, UNDEFINED_MNEMONIC);
                assert_eq!(instr.total_length(), 1);
                assert!(branch_edges(&instr, 0x8000).is_empty());
            }
        }
    }
}

#[test]
fn word_operands_round_trip_exhaustively() {
    // ldx #imm16 carries an arbitrary big-endian word.
    for value in 0..=0xffffu16 {
        let [hi, lo] = value.to_be_bytes();
        let instr = decode(&[0xce, hi, lo], 0);
        assert_eq!(instr.value, Some(value));
    }
}

#[test]
fn jump_and_call_targets_are_exact() {
    for value in [0x0000u16, 0x0001, 0x1234, 0x8000, 0xffff] {
        let [hi, lo] = value.to_be_bytes();
        let jmp = decode(&[0x7e, hi, lo], 0x4242);
        assert_eq!(branch_edges(&jmp, 0x4242)[0].target, value);
        let jsr = decode(&[0xbd, hi, lo], 0x4242);
        assert_eq!(branch_edges(&jsr, 0x4242)[0].target, value);
    }
}
