//! Instruction-level tests for the LR35902 core, split by category.

use super::*;

mod tests_interrupts;

/// Flat 64KB test bus.
pub(crate) struct ArrayMemory(pub [u8; 0x10000]);

impl MemoryLr35902 for ArrayMemory {
    fn read(&self, addr: u16) -> u8 {
        self.0[addr as usize]
    }

    fn write(&mut self, addr: u16, val: u8) {
        self.0[addr as usize] = val;
    }
}

/// CPU over flat RAM, with PC rebased to 0 so tests can assemble there.
pub(crate) fn make_cpu() -> CpuLr35902<ArrayMemory> {
    let mut cpu = CpuLr35902::new(ArrayMemory([0; 0x10000]));
    cpu.regs.pc = 0;
    cpu
}

/// Copy a byte sequence into the test bus at `addr`.
pub(crate) fn load(cpu: &mut CpuLr35902<ArrayMemory>, addr: u16, bytes: &[u8]) {
    for (i, b) in bytes.iter().enumerate() {
        cpu.memory.0[addr as usize + i] = *b;
    }
}

/// Step once, panicking on the (unexpected) illegal-opcode path.
pub(crate) fn step(cpu: &mut CpuLr35902<ArrayMemory>) -> u32 {
    cpu.step().expect("legal opcode")
}
