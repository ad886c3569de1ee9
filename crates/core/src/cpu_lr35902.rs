//! Sharp LR35902 CPU core (Game Boy CPU)
//!
//! A Z80-derived 8-bit CPU. The core fetches one opcode per `step`,
//! resolves it against the primary or CB-prefixed opcode space, executes
//! its register/flag/memory side effects and returns the cycle cost. Each
//! step is atomic with respect to the register file and the bus.
//!
//! Interrupt servicing reads the IF/IE registers through the bus; when the
//! master enable is set and a masked request is pending, the current PC is
//! pushed and execution vectors to the fixed service address.

pub mod optable;
pub mod registers;

#[cfg(test)]
mod tests;

use crate::logging::{log, LogCategory, LogLevel};
use registers::{Registers, FLAG_C, FLAG_H, FLAG_N, FLAG_Z};

/// Memory interface trait for the LR35902 CPU.
///
/// Reads and writes never fail; an unmapped read returns whatever the bus
/// layer puts on the open bus (conventionally 0xFF).
pub trait MemoryLr35902 {
    /// Read a byte from memory
    fn read(&self, addr: u16) -> u8;

    /// Write a byte to memory
    fn write(&mut self, addr: u16, val: u8);
}

/// Interrupt flag register (IF) address on the bus.
pub const IF_ADDR: u16 = 0xFF0F;
/// Interrupt enable register (IE) address on the bus.
pub const IE_ADDR: u16 = 0xFFFF;

/// IF/IE bits this core dispatches on. Bit 3 (serial) is not modeled.
const INT_MASK: u8 = 0b0001_0111;

/// Cycle cost of an interrupt dispatch (5 machine cycles).
const INT_DISPATCH_CYCLES: u32 = 20;

/// Fatal execution failures. There are no transient failure modes inside
/// instruction execution; anything here ends the emulation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CpuError {
    /// The fetched byte is one of the undefined primary opcodes. Either
    /// the program image is corrupt or execution ran off the rails;
    /// continuing would leave the machine in undefined state.
    #[error("illegal opcode {opcode:#04X} at PC {pc:#06X}")]
    IllegalOpcode { opcode: u8, pc: u16 },
}

/// Hardware interrupt sources, in priority order (lowest bit wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    VBlank,
    Lcd,
    Timer,
    Joypad,
}

impl Interrupt {
    /// Bit position of this source in the IF/IE registers.
    pub const fn bit(self) -> u8 {
        match self {
            Interrupt::VBlank => 0b0000_0001,
            Interrupt::Lcd => 0b0000_0010,
            Interrupt::Timer => 0b0000_0100,
            Interrupt::Joypad => 0b0001_0000,
        }
    }

    /// Fixed service vector for this source.
    pub const fn vector(self) -> u16 {
        match self {
            Interrupt::VBlank => 0x0040,
            Interrupt::Lcd => 0x0048,
            Interrupt::Timer => 0x0050,
            Interrupt::Joypad => 0x0060,
        }
    }

    /// Highest-priority source among the pending (IF & IE) bits.
    fn highest_pending(pending: u8) -> Option<Interrupt> {
        if pending & Interrupt::VBlank.bit() != 0 {
            Some(Interrupt::VBlank)
        } else if pending & Interrupt::Lcd.bit() != 0 {
            Some(Interrupt::Lcd)
        } else if pending & Interrupt::Timer.bit() != 0 {
            Some(Interrupt::Timer)
        } else if pending & Interrupt::Joypad.bit() != 0 {
            Some(Interrupt::Joypad)
        } else {
            None
        }
    }
}

/// Sharp LR35902 CPU state
#[derive(Debug)]
pub struct CpuLr35902<M: MemoryLr35902> {
    /// Register file
    pub regs: Registers,
    /// Interrupt Master Enable flag
    pub ime: bool,
    /// DI latency countdown: 2 = just executed, 1 = commits this step
    pub di_latch: u8,
    /// EI latency countdown, same staging as `di_latch`
    pub ei_latch: u8,
    /// Halted state (HALT)
    pub halted: bool,
    /// Stopped state (STOP); cleared by an external wake
    pub stopped: bool,
    /// Total cycles executed (monotonic, never reset mid-run)
    pub cycles: u64,
    /// Memory interface
    pub memory: M,
}

impl<M: MemoryLr35902> CpuLr35902<M> {
    /// Create a new LR35902 CPU in power-on state
    pub fn new(memory: M) -> Self {
        Self {
            regs: Registers::new(),
            ime: false,
            di_latch: 0,
            ei_latch: 0,
            halted: false,
            stopped: false,
            cycles: 0,
            memory,
        }
    }

    /// Reset the CPU to power-on state
    pub fn reset(&mut self) {
        self.regs.reset();
        self.ime = false;
        self.di_latch = 0;
        self.ei_latch = 0;
        self.halted = false;
        self.stopped = false;
        self.cycles = 0;
    }

    /// External wake from the STOP state (button press on real hardware)
    pub fn resume(&mut self) {
        self.stopped = false;
    }

    /// Execute one instruction (or service one interrupt) and return the
    /// cycles consumed. Halted/stopped steps are 4-cycle logical stalls.
    pub fn step(&mut self) -> Result<u32, CpuError> {
        self.commit_ime_latch();

        if let Some(cycles) = self.service_interrupt() {
            self.cycles += u64::from(cycles);
            return Ok(cycles);
        }

        if self.halted || self.stopped {
            self.cycles += 4;
            return Ok(4);
        }

        let pc = self.regs.pc;
        let opcode = self.read_pc();
        let cycles = self.execute(opcode, pc)?;
        self.cycles += u64::from(cycles);
        Ok(cycles)
    }

    /// DI/EI take effect one instruction late. Both are staged through a
    /// two-step countdown: the instruction after DI/EI still runs (and its
    /// preceding interrupt check still happens) under the old IME value.
    fn commit_ime_latch(&mut self) {
        self.di_latch = match self.di_latch {
            2 => 1,
            1 => {
                self.ime = false;
                0
            }
            _ => 0,
        };
        self.ei_latch = match self.ei_latch {
            2 => 1,
            1 => {
                self.ime = true;
                0
            }
            _ => 0,
        };
    }

    /// Interrupt dispatch check. A pending (IF & IE) request always ends
    /// the HALT state; the vector is only taken when IME is set, and the
    /// transition is atomic: acknowledge IF bit, clear IME, push PC, jump.
    fn service_interrupt(&mut self) -> Option<u32> {
        if !self.ime && !self.halted {
            return None;
        }

        let pending =
            self.memory.read(IE_ADDR) & self.memory.read(IF_ADDR) & INT_MASK;
        if pending == 0 {
            return None;
        }

        self.halted = false;
        if !self.ime {
            return None;
        }

        let int = Interrupt::highest_pending(pending)?;
        self.ime = false;
        let iflags = self.memory.read(IF_ADDR);
        self.memory.write(IF_ADDR, iflags & !int.bit());

        let pc = self.regs.pc;
        self.push_u16(pc);
        self.regs.pc = int.vector();

        log(LogCategory::Interrupts, LogLevel::Debug, || {
            format!("dispatch {int:?} -> {:#06X} (from {pc:#06X})", int.vector())
        });

        Some(INT_DISPATCH_CYCLES)
    }

    fn read_pc(&mut self) -> u8 {
        let val = self.memory.read(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        val
    }

    fn read_pc_u16(&mut self) -> u16 {
        let lo = self.read_pc() as u16;
        let hi = self.read_pc() as u16;
        (hi << 8) | lo
    }

    fn push_u16(&mut self, val: u16) {
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.memory.write(self.regs.sp, (val >> 8) as u8);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.memory.write(self.regs.sp, val as u8);
    }

    fn pop_u16(&mut self) -> u16 {
        let lo = self.memory.read(self.regs.sp) as u16;
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let hi = self.memory.read(self.regs.sp) as u16;
        self.regs.sp = self.regs.sp.wrapping_add(1);
        (hi << 8) | lo
    }

    // 8-bit ALU. Half-carry and carry are computed from the operand
    // nibbles/bytes before the operation, never from the stored result.

    fn add(&mut self, val: u8, use_carry: bool) {
        let a = self.regs.a;
        let c = if use_carry && self.regs.carry() { 1u8 } else { 0 };
        let result = a as u16 + val as u16 + c as u16;

        self.regs.set_flag(FLAG_H, (a & 0x0F) + (val & 0x0F) + c > 0x0F);
        self.regs.set_flag(FLAG_C, result > 0xFF);
        self.regs.a = result as u8;
        self.regs.set_flag(FLAG_Z, self.regs.a == 0);
        self.regs.set_flag(FLAG_N, false);
    }

    fn sub(&mut self, val: u8, use_carry: bool) {
        let a = self.regs.a;
        let c = if use_carry && self.regs.carry() { 1u8 } else { 0 };
        let result = a as i16 - val as i16 - c as i16;

        self.regs.set_flag(FLAG_H, (a & 0x0F) < (val & 0x0F) + c);
        self.regs.set_flag(FLAG_C, result < 0);
        self.regs.a = result as u8;
        self.regs.set_flag(FLAG_Z, self.regs.a == 0);
        self.regs.set_flag(FLAG_N, true);
    }

    fn and(&mut self, val: u8) {
        self.regs.a &= val;
        self.regs.f = FLAG_H;
        self.regs.set_flag(FLAG_Z, self.regs.a == 0);
    }

    fn xor(&mut self, val: u8) {
        self.regs.a ^= val;
        self.regs.f = 0;
        self.regs.set_flag(FLAG_Z, self.regs.a == 0);
    }

    fn or(&mut self, val: u8) {
        self.regs.a |= val;
        self.regs.f = 0;
        self.regs.set_flag(FLAG_Z, self.regs.a == 0);
    }

    /// CP: SUB flags without storing the result
    fn cp(&mut self, val: u8) {
        let a = self.regs.a;
        self.regs.set_flag(FLAG_H, (a & 0x0F) < (val & 0x0F));
        self.regs.set_flag(FLAG_C, a < val);
        self.regs.set_flag(FLAG_Z, a == val);
        self.regs.set_flag(FLAG_N, true);
    }

    /// INC r: carry flag untouched
    fn inc8(&mut self, val: u8) -> u8 {
        let result = val.wrapping_add(1);
        self.regs.set_flag(FLAG_H, (val & 0x0F) == 0x0F);
        self.regs.set_flag(FLAG_Z, result == 0);
        self.regs.set_flag(FLAG_N, false);
        result
    }

    /// DEC r: carry flag untouched
    fn dec8(&mut self, val: u8) -> u8 {
        let result = val.wrapping_sub(1);
        self.regs.set_flag(FLAG_H, (val & 0x0F) == 0);
        self.regs.set_flag(FLAG_Z, result == 0);
        self.regs.set_flag(FLAG_N, true);
        result
    }

    /// ADD HL,rr: H from bit 11, C from bit 15, Z untouched
    fn add_hl(&mut self, val: u16) {
        let hl = self.regs.hl();
        let result = hl.wrapping_add(val);
        self.regs.set_flag(FLAG_N, false);
        self.regs.set_flag(FLAG_H, (hl & 0x0FFF) + (val & 0x0FFF) > 0x0FFF);
        self.regs.set_flag(FLAG_C, result < hl);
        self.regs.set_hl(result);
    }

    /// Shared by ADD SP,r8 and LD HL,SP+r8: H/C from the low byte of SP,
    /// Z and N always cleared.
    fn sp_plus_offset(&mut self) -> u16 {
        let offset = self.read_pc() as i8 as i16 as u16;
        let sp = self.regs.sp;
        self.regs.set_flag(FLAG_Z, false);
        self.regs.set_flag(FLAG_N, false);
        self.regs.set_flag(FLAG_H, (sp & 0x000F) + (offset & 0x000F) > 0x000F);
        self.regs.set_flag(FLAG_C, (sp & 0x00FF) + (offset & 0x00FF) > 0x00FF);
        sp.wrapping_add(offset)
    }

    // Rotates and shifts. All clear N/H and set Z from the result; the
    // rotated/shifted-out bit lands in C.

    fn rlc(&mut self, val: u8) -> u8 {
        let carry = (val & 0x80) != 0;
        let result = val.rotate_left(1);
        self.regs.f = 0;
        self.regs.set_flag(FLAG_C, carry);
        self.regs.set_flag(FLAG_Z, result == 0);
        result
    }

    fn rrc(&mut self, val: u8) -> u8 {
        let carry = (val & 0x01) != 0;
        let result = val.rotate_right(1);
        self.regs.f = 0;
        self.regs.set_flag(FLAG_C, carry);
        self.regs.set_flag(FLAG_Z, result == 0);
        result
    }

    fn rl(&mut self, val: u8) -> u8 {
        let old_carry = if self.regs.carry() { 1 } else { 0 };
        let new_carry = (val & 0x80) != 0;
        let result = (val << 1) | old_carry;
        self.regs.f = 0;
        self.regs.set_flag(FLAG_C, new_carry);
        self.regs.set_flag(FLAG_Z, result == 0);
        result
    }

    fn rr(&mut self, val: u8) -> u8 {
        let old_carry = if self.regs.carry() { 0x80 } else { 0 };
        let new_carry = (val & 0x01) != 0;
        let result = (val >> 1) | old_carry;
        self.regs.f = 0;
        self.regs.set_flag(FLAG_C, new_carry);
        self.regs.set_flag(FLAG_Z, result == 0);
        result
    }

    fn sla(&mut self, val: u8) -> u8 {
        let carry = (val & 0x80) != 0;
        let result = val << 1;
        self.regs.f = 0;
        self.regs.set_flag(FLAG_C, carry);
        self.regs.set_flag(FLAG_Z, result == 0);
        result
    }

    /// Arithmetic shift right: bit 7 is retained
    fn sra(&mut self, val: u8) -> u8 {
        let carry = (val & 0x01) != 0;
        let result = (val >> 1) | (val & 0x80);
        self.regs.f = 0;
        self.regs.set_flag(FLAG_C, carry);
        self.regs.set_flag(FLAG_Z, result == 0);
        result
    }

    fn swap(&mut self, val: u8) -> u8 {
        let result = val.rotate_left(4);
        self.regs.f = 0;
        self.regs.set_flag(FLAG_Z, result == 0);
        result
    }

    fn srl(&mut self, val: u8) -> u8 {
        let carry = (val & 0x01) != 0;
        let result = val >> 1;
        self.regs.f = 0;
        self.regs.set_flag(FLAG_C, carry);
        self.regs.set_flag(FLAG_Z, result == 0);
        result
    }

    /// BIT b: Z = tested bit is clear, C untouched
    fn bit(&mut self, bit: u8, val: u8) {
        self.regs.set_flag(FLAG_Z, val & (1 << bit) == 0);
        self.regs.set_flag(FLAG_N, false);
        self.regs.set_flag(FLAG_H, true);
    }

    /// Source value for the r8 field of an opcode (0=B .. 7=A, 6=(HL))
    fn read_r8(&mut self, code: u8) -> u8 {
        match code & 0x07 {
            0 => self.regs.b,
            1 => self.regs.c,
            2 => self.regs.d,
            3 => self.regs.e,
            4 => self.regs.h,
            5 => self.regs.l,
            6 => self.memory.read(self.regs.hl()),
            _ => self.regs.a,
        }
    }

    fn write_r8(&mut self, code: u8, val: u8) {
        match code & 0x07 {
            0 => self.regs.b = val,
            1 => self.regs.c = val,
            2 => self.regs.d = val,
            3 => self.regs.e = val,
            4 => self.regs.h = val,
            5 => self.regs.l = val,
            6 => self.memory.write(self.regs.hl(), val),
            _ => self.regs.a = val,
        }
    }

    fn execute(&mut self, opcode: u8, pc: u16) -> Result<u32, CpuError> {
        log(LogCategory::Cpu, LogLevel::Trace, || {
            format!("{pc:04X}: {}", optable::OPCODES[opcode as usize].mnemonic)
        });

        let cycles: u32 = match opcode {
            // NOP
            0x00 => 4,

            // LD rr,d16
            0x01 => { let val = self.read_pc_u16(); self.regs.set_bc(val); 12 }
            0x11 => { let val = self.read_pc_u16(); self.regs.set_de(val); 12 }
            0x21 => { let val = self.read_pc_u16(); self.regs.set_hl(val); 12 }
            0x31 => { self.regs.sp = self.read_pc_u16(); 12 }

            // LD (BC),A / LD (DE),A / LD (HL+),A / LD (HL-),A
            0x02 => { self.memory.write(self.regs.bc(), self.regs.a); 8 }
            0x12 => { self.memory.write(self.regs.de(), self.regs.a); 8 }
            0x22 => {
                let addr = self.regs.hl();
                self.memory.write(addr, self.regs.a);
                self.regs.set_hl(addr.wrapping_add(1));
                8
            }
            0x32 => {
                let addr = self.regs.hl();
                self.memory.write(addr, self.regs.a);
                self.regs.set_hl(addr.wrapping_sub(1));
                8
            }

            // INC rr / DEC rr (no flags)
            0x03 => { self.regs.set_bc(self.regs.bc().wrapping_add(1)); 8 }
            0x13 => { self.regs.set_de(self.regs.de().wrapping_add(1)); 8 }
            0x23 => { self.regs.set_hl(self.regs.hl().wrapping_add(1)); 8 }
            0x33 => { self.regs.sp = self.regs.sp.wrapping_add(1); 8 }
            0x0B => { self.regs.set_bc(self.regs.bc().wrapping_sub(1)); 8 }
            0x1B => { self.regs.set_de(self.regs.de().wrapping_sub(1)); 8 }
            0x2B => { self.regs.set_hl(self.regs.hl().wrapping_sub(1)); 8 }
            0x3B => { self.regs.sp = self.regs.sp.wrapping_sub(1); 8 }

            // INC r
            0x04 => { self.regs.b = self.inc8(self.regs.b); 4 }
            0x0C => { self.regs.c = self.inc8(self.regs.c); 4 }
            0x14 => { self.regs.d = self.inc8(self.regs.d); 4 }
            0x1C => { self.regs.e = self.inc8(self.regs.e); 4 }
            0x24 => { self.regs.h = self.inc8(self.regs.h); 4 }
            0x2C => { self.regs.l = self.inc8(self.regs.l); 4 }
            0x34 => {
                let addr = self.regs.hl();
                let val = self.memory.read(addr);
                let result = self.inc8(val);
                self.memory.write(addr, result);
                12
            }
            0x3C => { self.regs.a = self.inc8(self.regs.a); 4 }

            // DEC r
            0x05 => { self.regs.b = self.dec8(self.regs.b); 4 }
            0x0D => { self.regs.c = self.dec8(self.regs.c); 4 }
            0x15 => { self.regs.d = self.dec8(self.regs.d); 4 }
            0x1D => { self.regs.e = self.dec8(self.regs.e); 4 }
            0x25 => { self.regs.h = self.dec8(self.regs.h); 4 }
            0x2D => { self.regs.l = self.dec8(self.regs.l); 4 }
            0x35 => {
                let addr = self.regs.hl();
                let val = self.memory.read(addr);
                let result = self.dec8(val);
                self.memory.write(addr, result);
                12
            }
            0x3D => { self.regs.a = self.dec8(self.regs.a); 4 }

            // LD r,d8
            0x06 => { self.regs.b = self.read_pc(); 8 }
            0x0E => { self.regs.c = self.read_pc(); 8 }
            0x16 => { self.regs.d = self.read_pc(); 8 }
            0x1E => { self.regs.e = self.read_pc(); 8 }
            0x26 => { self.regs.h = self.read_pc(); 8 }
            0x2E => { self.regs.l = self.read_pc(); 8 }
            0x36 => {
                let val = self.read_pc();
                self.memory.write(self.regs.hl(), val);
                12
            }
            0x3E => { self.regs.a = self.read_pc(); 8 }

            // RLCA / RRCA / RLA / RRA: Z comes from the rotated result
            0x07 => { self.regs.a = self.rlc(self.regs.a); 4 }
            0x0F => { self.regs.a = self.rrc(self.regs.a); 4 }
            0x17 => { self.regs.a = self.rl(self.regs.a); 4 }
            0x1F => { self.regs.a = self.rr(self.regs.a); 4 }

            // LD (a16),SP: low byte first
            0x08 => {
                let addr = self.read_pc_u16();
                self.memory.write(addr, self.regs.sp as u8);
                self.memory.write(addr.wrapping_add(1), (self.regs.sp >> 8) as u8);
                20
            }

            // ADD HL,rr
            0x09 => { self.add_hl(self.regs.bc()); 8 }
            0x19 => { self.add_hl(self.regs.de()); 8 }
            0x29 => { self.add_hl(self.regs.hl()); 8 }
            0x39 => { self.add_hl(self.regs.sp); 8 }

            // LD A,(BC) / LD A,(DE) / LD A,(HL+) / LD A,(HL-)
            0x0A => { self.regs.a = self.memory.read(self.regs.bc()); 8 }
            0x1A => { self.regs.a = self.memory.read(self.regs.de()); 8 }
            0x2A => {
                let addr = self.regs.hl();
                self.regs.a = self.memory.read(addr);
                self.regs.set_hl(addr.wrapping_add(1));
                8
            }
            0x3A => {
                let addr = self.regs.hl();
                self.regs.a = self.memory.read(addr);
                self.regs.set_hl(addr.wrapping_sub(1));
                8
            }

            // JR r8 / JR cc,r8
            0x18 => {
                let offset = self.read_pc() as i8;
                self.regs.pc = self.regs.pc.wrapping_add(offset as u16);
                12
            }
            0x20 => self.jr_cond(!self.regs.zero()),
            0x28 => self.jr_cond(self.regs.zero()),
            0x30 => self.jr_cond(!self.regs.carry()),
            0x38 => self.jr_cond(self.regs.carry()),

            // DAA: BCD renormalization of A after arithmetic
            0x27 => {
                let mut adjust = 0u8;
                let mut carry = false;

                if self.regs.half_carry()
                    || (!self.regs.subtract() && (self.regs.a & 0x0F) > 9)
                {
                    adjust |= 0x06;
                }
                if self.regs.carry() || (!self.regs.subtract() && self.regs.a > 0x99) {
                    adjust |= 0x60;
                    carry = true;
                }

                if self.regs.subtract() {
                    self.regs.a = self.regs.a.wrapping_sub(adjust);
                } else {
                    self.regs.a = self.regs.a.wrapping_add(adjust);
                }

                self.regs.set_flag(FLAG_Z, self.regs.a == 0);
                self.regs.set_flag(FLAG_H, false);
                self.regs.set_flag(FLAG_C, carry);
                4
            }

            // CPL / SCF / CCF
            0x2F => {
                self.regs.a = !self.regs.a;
                self.regs.set_flag(FLAG_N, true);
                self.regs.set_flag(FLAG_H, true);
                4
            }
            0x37 => {
                self.regs.set_flag(FLAG_N, false);
                self.regs.set_flag(FLAG_H, false);
                self.regs.set_flag(FLAG_C, true);
                4
            }
            0x3F => {
                self.regs.set_flag(FLAG_N, false);
                self.regs.set_flag(FLAG_H, false);
                self.regs.toggle_flag(FLAG_C);
                4
            }

            // STOP: operand byte is consumed; wake is external
            0x10 => {
                self.read_pc();
                self.stopped = true;
                4
            }

            // HALT
            0x76 => {
                self.halted = true;
                4
            }

            // LD r,r (0x76 handled above)
            0x40..=0x7F => {
                let dst = (opcode >> 3) & 0x07;
                let src = opcode & 0x07;
                let val = self.read_r8(src);
                self.write_r8(dst, val);
                if src == 6 || dst == 6 { 8 } else { 4 }
            }

            // ADD/ADC/SUB/SBC/AND/XOR/OR/CP r
            0x80..=0xBF => {
                let val = self.read_r8(opcode);
                match (opcode >> 3) & 0x07 {
                    0 => self.add(val, false),
                    1 => self.add(val, true),
                    2 => self.sub(val, false),
                    3 => self.sub(val, true),
                    4 => self.and(val),
                    5 => self.xor(val),
                    6 => self.or(val),
                    _ => self.cp(val),
                }
                if opcode & 0x07 == 6 { 8 } else { 4 }
            }

            // RET cc
            0xC0 => self.ret_cond(!self.regs.zero()),
            0xC8 => self.ret_cond(self.regs.zero()),
            0xD0 => self.ret_cond(!self.regs.carry()),
            0xD8 => self.ret_cond(self.regs.carry()),

            // POP rr
            0xC1 => { let val = self.pop_u16(); self.regs.set_bc(val); 12 }
            0xD1 => { let val = self.pop_u16(); self.regs.set_de(val); 12 }
            0xE1 => { let val = self.pop_u16(); self.regs.set_hl(val); 12 }
            0xF1 => { let val = self.pop_u16(); self.regs.set_af(val); 12 }

            // JP a16 / JP cc,a16
            0xC3 => { self.regs.pc = self.read_pc_u16(); 16 }
            0xC2 => self.jp_cond(!self.regs.zero()),
            0xCA => self.jp_cond(self.regs.zero()),
            0xD2 => self.jp_cond(!self.regs.carry()),
            0xDA => self.jp_cond(self.regs.carry()),

            // CALL a16 / CALL cc,a16
            0xCD => {
                let addr = self.read_pc_u16();
                self.push_u16(self.regs.pc);
                self.regs.pc = addr;
                24
            }
            0xC4 => self.call_cond(!self.regs.zero()),
            0xCC => self.call_cond(self.regs.zero()),
            0xD4 => self.call_cond(!self.regs.carry()),
            0xDC => self.call_cond(self.regs.carry()),

            // PUSH rr
            0xC5 => { self.push_u16(self.regs.bc()); 16 }
            0xD5 => { self.push_u16(self.regs.de()); 16 }
            0xE5 => { self.push_u16(self.regs.hl()); 16 }
            0xF5 => { self.push_u16(self.regs.af()); 16 }

            // ALU d8
            0xC6 => { let val = self.read_pc(); self.add(val, false); 8 }
            0xCE => { let val = self.read_pc(); self.add(val, true); 8 }
            0xD6 => { let val = self.read_pc(); self.sub(val, false); 8 }
            0xDE => { let val = self.read_pc(); self.sub(val, true); 8 }
            0xE6 => { let val = self.read_pc(); self.and(val); 8 }
            0xEE => { let val = self.read_pc(); self.xor(val); 8 }
            0xF6 => { let val = self.read_pc(); self.or(val); 8 }
            0xFE => { let val = self.read_pc(); self.cp(val); 8 }

            // RST n: vector is encoded in bits 3-5
            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => {
                self.push_u16(self.regs.pc);
                self.regs.pc = (opcode & 0x38) as u16;
                16
            }

            // RET / RETI
            0xC9 => { self.regs.pc = self.pop_u16(); 16 }
            0xD9 => {
                self.regs.pc = self.pop_u16();
                self.ime = true;
                16
            }

            // JP (HL)
            0xE9 => { self.regs.pc = self.regs.hl(); 4 }

            // LD SP,HL
            0xF9 => { self.regs.sp = self.regs.hl(); 8 }

            // CB prefix: one more fetch, then the extended table
            0xCB => {
                let cb_op = self.read_pc();
                self.execute_cb(cb_op)
            }

            // LDH (a8),A / LDH A,(a8): high-RAM shorthand at 0xFF00+a8
            0xE0 => {
                let offset = self.read_pc() as u16;
                self.memory.write(0xFF00 + offset, self.regs.a);
                12
            }
            0xF0 => {
                let offset = self.read_pc() as u16;
                self.regs.a = self.memory.read(0xFF00 + offset);
                12
            }

            // LD (C),A / LD A,(C)
            0xE2 => {
                self.memory.write(0xFF00 + self.regs.c as u16, self.regs.a);
                8
            }
            0xF2 => {
                self.regs.a = self.memory.read(0xFF00 + self.regs.c as u16);
                8
            }

            // LD (a16),A / LD A,(a16)
            0xEA => {
                let addr = self.read_pc_u16();
                self.memory.write(addr, self.regs.a);
                16
            }
            0xFA => {
                let addr = self.read_pc_u16();
                self.regs.a = self.memory.read(addr);
                16
            }

            // DI / EI: committed one instruction later
            0xF3 => { self.di_latch = 2; 4 }
            0xFB => { self.ei_latch = 2; 4 }

            // ADD SP,r8
            0xE8 => {
                self.regs.sp = self.sp_plus_offset();
                16
            }

            // LD HL,SP+r8
            0xF8 => {
                let result = self.sp_plus_offset();
                self.regs.set_hl(result);
                12
            }

            // Undefined opcodes: fatal, never retried
            0xD3 | 0xDB | 0xDD | 0xE3 | 0xE4 | 0xEB | 0xEC | 0xED | 0xF4 | 0xFC
            | 0xFD => {
                log(LogCategory::Cpu, LogLevel::Error, || {
                    format!("illegal opcode {opcode:#04X} at PC {pc:#06X}")
                });
                return Err(CpuError::IllegalOpcode { opcode, pc });
            }
        };

        Ok(cycles)
    }

    /// Extended (CB-prefixed) table. Fully populated: rotates/shifts/SWAP
    /// in the low quarter, then BIT/RES/SET over each bit and operand.
    /// Returned costs include the 4-cycle prefix fetch.
    fn execute_cb(&mut self, opcode: u8) -> u32 {
        let reg = opcode & 0x07;
        let n = (opcode >> 3) & 0x07;
        let val = self.read_r8(reg);

        let result = match opcode >> 6 {
            0 => match n {
                0 => self.rlc(val),
                1 => self.rrc(val),
                2 => self.rl(val),
                3 => self.rr(val),
                4 => self.sla(val),
                5 => self.sra(val),
                6 => self.swap(val),
                _ => self.srl(val),
            },
            1 => {
                // BIT is read-only: no writeback, and (HL) costs less
                // than the read-modify-write group
                self.bit(n, val);
                return if reg == 6 { 12 } else { 8 };
            }
            2 => val & !(1 << n), // RES
            _ => val | (1 << n),  // SET
        };

        self.write_r8(reg, result);
        if reg == 6 { 16 } else { 8 }
    }

    /// JR cc,r8: offset is consumed either way
    fn jr_cond(&mut self, cond: bool) -> u32 {
        let offset = self.read_pc() as i8;
        if cond {
            self.regs.pc = self.regs.pc.wrapping_add(offset as u16);
            12
        } else {
            8
        }
    }

    /// JP cc,a16: address is consumed either way
    fn jp_cond(&mut self, cond: bool) -> u32 {
        let addr = self.read_pc_u16();
        if cond {
            self.regs.pc = addr;
            16
        } else {
            12
        }
    }

    /// CALL cc,a16: the return address pushed is the PC after both
    /// operand bytes have been consumed
    fn call_cond(&mut self, cond: bool) -> u32 {
        let addr = self.read_pc_u16();
        if cond {
            self.push_u16(self.regs.pc);
            self.regs.pc = addr;
            24
        } else {
            12
        }
    }

    fn ret_cond(&mut self, cond: bool) -> u32 {
        if cond {
            self.regs.pc = self.pop_u16();
            20
        } else {
            8
        }
    }
}

impl<M: MemoryLr35902> crate::Cpu for CpuLr35902<M> {
    type Error = CpuError;

    fn reset(&mut self) {
        self.reset();
    }

    fn step(&mut self) -> Result<u32, CpuError> {
        self.step()
    }
}
