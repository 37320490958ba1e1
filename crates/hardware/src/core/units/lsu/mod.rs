//! Load/Store Unit (LSU).
//!
//! Computes effective addresses for word loads and stores. Memory access
//! itself happens in the memory stage; the LSU only does address arithmetic.

/// Address and data for a store, produced in the Execute stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StoreAccess {
    /// Effective byte address.
    pub addr: u32,
    /// Word to write (`rs2` contents, unmodified).
    pub data: u32,
}

/// Load/Store Unit (LSU) address generation.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Computes a load address: `rs1 + imm_i` with 32-bit wraparound.
    pub const fn load_address(rs1: u32, imm_i: i32) -> u32 {
        rs1.wrapping_add_signed(imm_i)
    }

    /// Computes a store access: address `rs1 + imm_s`, data `rs2`.
    pub const fn store_access(rs1: u32, rs2: u32, imm_s: i32) -> StoreAccess {
        StoreAccess {
            addr: rs1.wrapping_add_signed(imm_s),
            data: rs2,
        }
    }
}
