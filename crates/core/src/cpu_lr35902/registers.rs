//! LR35902 register file.
//!
//! Eight 8-bit registers, SP and PC, plus the four condition flags packed
//! into the high nibble of F. The 16-bit pair views (AF, BC, DE, HL) are
//! derived from the byte pairs on every access; they are never stored
//! separately, so a write to one half is immediately visible through the
//! pair and vice versa.

use serde::{Deserialize, Serialize};

/// Flag bit positions in the F register. The low nibble of F is always 0.
pub const FLAG_Z: u8 = 0b1000_0000; // Zero
pub const FLAG_N: u8 = 0b0100_0000; // Subtract (BCD)
pub const FLAG_H: u8 = 0b0010_0000; // Half Carry (BCD)
pub const FLAG_C: u8 = 0b0001_0000; // Carry

/// Power-on program counter (cartridge entry point).
pub const RESET_PC: u16 = 0x0100;
/// Power-on stack pointer (top of high RAM).
pub const RESET_SP: u16 = 0xFFFE;

/// LR35902 register file.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Registers {
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    /// Stack pointer
    pub sp: u16,
    /// Program counter
    pub pc: u16,
}

impl Registers {
    pub fn new() -> Self {
        let mut regs = Self::default();
        regs.reset();
        regs
    }

    /// Restore the documented power-on state.
    pub fn reset(&mut self) {
        self.a = 0;
        self.f = 0;
        self.b = 0;
        self.c = 0;
        self.d = 0;
        self.e = 0;
        self.h = 0;
        self.l = 0;
        self.sp = RESET_SP;
        self.pc = RESET_PC;
    }

    // Register pair accessors (big-endian: high register first)

    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f])
    }

    #[inline]
    pub fn set_af(&mut self, val: u16) {
        let [a, f] = val.to_be_bytes();
        self.a = a;
        self.f = f & 0xF0; // Lower 4 bits of F always read 0
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, val: u16) {
        let [b, c] = val.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, val: u16) {
        let [d, e] = val.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, val: u16) {
        let [h, l] = val.to_be_bytes();
        self.h = h;
        self.l = l;
    }

    // Flag accessors

    #[inline]
    pub fn flag(&self, flag: u8) -> bool {
        (self.f & flag) != 0
    }

    #[inline]
    pub fn set_flag(&mut self, flag: u8, val: bool) {
        if val {
            self.f |= flag;
        } else {
            self.f &= !flag;
        }
    }

    #[inline]
    pub fn toggle_flag(&mut self, flag: u8) {
        self.f ^= flag;
    }

    #[inline]
    pub fn zero(&self) -> bool {
        self.flag(FLAG_Z)
    }

    #[inline]
    pub fn subtract(&self) -> bool {
        self.flag(FLAG_N)
    }

    #[inline]
    pub fn half_carry(&self) -> bool {
        self.flag(FLAG_H)
    }

    #[inline]
    pub fn carry(&self) -> bool {
        self.flag(FLAG_C)
    }
}
