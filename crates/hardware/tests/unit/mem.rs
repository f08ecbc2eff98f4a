//! Store behavior tests.

use pipe8_core::mem::{DataStore, InstructionStore};

#[test]
fn short_image_leaves_the_tail_zeroed() {
    let dmem = DataStore::from_bytes(&[0x11, 0x22]);
    assert_eq!(dmem.read_byte(0), 0x11);
    assert_eq!(dmem.read_byte(1), 0x22);
    for addr in 2..=255u8 {
        assert_eq!(dmem.read_byte(addr), 0, "addr {addr} should be zero");
    }
}

#[test]
fn writes_are_independent_across_block_boundaries() {
    let mut dmem = DataStore::default();
    // Addresses 3 and 4 sit in adjacent 4-byte blocks.
    dmem.write_byte(3, 0xDE);
    dmem.write_byte(4, 0xAD);
    assert_eq!(dmem.read_byte(3), 0xDE);
    assert_eq!(dmem.read_byte(4), 0xAD);
    assert_eq!(dmem.read_byte(2), 0);
    assert_eq!(dmem.read_byte(5), 0);
}

#[test]
fn rewriting_a_byte_replaces_it() {
    let mut dmem = DataStore::from_bytes(&[0xFF; 8]);
    dmem.write_byte(6, 0x01);
    assert_eq!(dmem.read_byte(6), 0x01);
    assert_eq!(dmem.read_byte(7), 0xFF);
}

#[test]
fn dump_matches_reads_for_every_address() {
    let image: Vec<u8> = (0..=255u8).map(|b| b.wrapping_mul(37)).collect();
    let dmem = DataStore::from_bytes(&image);
    let dump = dmem.dump();
    for addr in 0..=255u8 {
        assert_eq!(dump[usize::from(addr)], dmem.read_byte(addr));
    }
    assert_eq!(dump.to_vec(), image);
}

#[test]
fn instruction_fetch_pairs_bytes_big_endian() {
    let imem = InstructionStore::from_bytes(&[0x12, 0x34, 0x56, 0x78]);
    assert_eq!(imem.fetch_word(0), 0x1234);
    assert_eq!(imem.fetch_word(2), 0x5678);
    // Unaligned word fetch straddles the pair boundary.
    assert_eq!(imem.fetch_word(1), 0x3456);
}

#[test]
fn instruction_fetch_wraps_mod_store_size() {
    let mut image = vec![0u8; 256];
    image[254] = 0xAA;
    image[255] = 0xBB;
    image[0] = 0xCC;
    let imem = InstructionStore::from_bytes(&image);
    assert_eq!(imem.fetch_word(254), 0xAABB);
    assert_eq!(imem.fetch_word(255), 0xBBCC);
}
