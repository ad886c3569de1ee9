//! Interrupt dispatch, HALT/STOP states and the DI/EI enable latency.

use super::{load, make_cpu, step};
use crate::cpu_lr35902::{Interrupt, IE_ADDR, IF_ADDR};

#[test]
fn test_vector_addresses() {
    assert_eq!(Interrupt::VBlank.vector(), 0x0040);
    assert_eq!(Interrupt::Lcd.vector(), 0x0048);
    assert_eq!(Interrupt::Timer.vector(), 0x0050);
    assert_eq!(Interrupt::Joypad.vector(), 0x0060);
    assert_eq!(Interrupt::VBlank.bit(), 0x01);
    assert_eq!(Interrupt::Joypad.bit(), 0x10);
}

#[test]
fn test_dispatch_pushes_pc_and_vectors() {
    let mut cpu = make_cpu();
    cpu.ime = true;
    cpu.regs.pc = 0x0200;
    cpu.regs.sp = 0xFFFE;
    cpu.memory.0[IF_ADDR as usize] = Interrupt::VBlank.bit();
    cpu.memory.0[IE_ADDR as usize] = Interrupt::VBlank.bit();

    assert_eq!(step(&mut cpu), 20);
    assert_eq!(cpu.regs.pc, 0x0040);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    // PC pushed high byte first, as in CALL
    assert_eq!(cpu.memory.0[0xFFFD], 0x02);
    assert_eq!(cpu.memory.0[0xFFFC], 0x00);
    assert!(!cpu.ime); // IME cleared by the dispatch
    assert_eq!(cpu.memory.0[IF_ADDR as usize], 0); // request acknowledged
}

#[test]
fn test_dispatch_priority_lowest_bit_wins() {
    let mut cpu = make_cpu();
    cpu.ime = true;
    cpu.regs.pc = 0x0200;
    cpu.regs.sp = 0xFFFE;
    cpu.memory.0[IF_ADDR as usize] =
        Interrupt::Timer.bit() | Interrupt::VBlank.bit() | Interrupt::Joypad.bit();
    cpu.memory.0[IE_ADDR as usize] = 0x1F;

    step(&mut cpu);
    assert_eq!(cpu.regs.pc, Interrupt::VBlank.vector());
    // Only the serviced bit is acknowledged
    assert_eq!(
        cpu.memory.0[IF_ADDR as usize],
        Interrupt::Timer.bit() | Interrupt::Joypad.bit()
    );

    // Next step services the timer
    step(&mut cpu);
    assert_eq!(cpu.regs.pc, Interrupt::Timer.vector());
}

#[test]
fn test_no_dispatch_when_masked() {
    let mut cpu = make_cpu();
    cpu.ime = true;
    cpu.regs.pc = 0x0200;
    load(&mut cpu, 0x0200, &[0x00]); // NOP
    cpu.memory.0[IF_ADDR as usize] = Interrupt::Timer.bit();
    cpu.memory.0[IE_ADDR as usize] = Interrupt::VBlank.bit(); // timer not enabled

    step(&mut cpu);
    assert_eq!(cpu.regs.pc, 0x0201); // the NOP ran instead
    assert!(cpu.ime);
}

#[test]
fn test_no_dispatch_without_ime() {
    let mut cpu = make_cpu();
    cpu.ime = false;
    cpu.regs.pc = 0x0200;
    load(&mut cpu, 0x0200, &[0x00]);
    cpu.memory.0[IF_ADDR as usize] = Interrupt::VBlank.bit();
    cpu.memory.0[IE_ADDR as usize] = Interrupt::VBlank.bit();

    step(&mut cpu);
    assert_eq!(cpu.regs.pc, 0x0201);
    // Request stays pending
    assert_eq!(cpu.memory.0[IF_ADDR as usize], Interrupt::VBlank.bit());
}

#[test]
fn test_halt_stalls_until_interrupt() {
    let mut cpu = make_cpu();
    load(&mut cpu, 0, &[0x76]); // HALT
    step(&mut cpu);
    assert!(cpu.halted);

    // Stalled: 4-cycle no-op steps, PC parked
    assert_eq!(step(&mut cpu), 4);
    assert_eq!(step(&mut cpu), 4);
    assert_eq!(cpu.regs.pc, 1);

    // An enabled pending request with IME set vectors straight away
    cpu.ime = true;
    cpu.memory.0[IF_ADDR as usize] = Interrupt::Timer.bit();
    cpu.memory.0[IE_ADDR as usize] = Interrupt::Timer.bit();
    assert_eq!(step(&mut cpu), 20);
    assert!(!cpu.halted);
    assert_eq!(cpu.regs.pc, Interrupt::Timer.vector());
}

#[test]
fn test_halt_wakes_without_ime() {
    // A pending request ends HALT even when IME is clear; no vector taken
    let mut cpu = make_cpu();
    load(&mut cpu, 0, &[0x76, 0x04]); // HALT; INC B
    step(&mut cpu);
    assert!(cpu.halted);

    cpu.memory.0[IF_ADDR as usize] = Interrupt::VBlank.bit();
    cpu.memory.0[IE_ADDR as usize] = Interrupt::VBlank.bit();
    step(&mut cpu);
    assert!(!cpu.halted);
    assert_eq!(cpu.regs.pc, 2); // INC B executed
    assert_eq!(cpu.regs.b, 1);
    assert!(!cpu.ime);
}

#[test]
fn test_serial_bit_is_ignored() {
    // Bit 3 is outside the four modeled sources: no dispatch, no wake
    let mut cpu = make_cpu();
    cpu.ime = true;
    load(&mut cpu, 0, &[0x76]); // HALT
    step(&mut cpu);
    cpu.memory.0[IF_ADDR as usize] = 0x08;
    cpu.memory.0[IE_ADDR as usize] = 0x08;
    assert_eq!(step(&mut cpu), 4);
    assert!(cpu.halted);
}

#[test]
fn test_stop_consumes_operand_and_stalls() {
    let mut cpu = make_cpu();
    load(&mut cpu, 0, &[0x10, 0x00, 0x04]); // STOP; INC B
    step(&mut cpu);
    assert!(cpu.stopped);
    assert_eq!(cpu.regs.pc, 2); // operand byte consumed

    assert_eq!(step(&mut cpu), 4); // stalled
    assert_eq!(cpu.regs.pc, 2);

    cpu.resume(); // external wake (button press)
    step(&mut cpu);
    assert!(!cpu.stopped);
    assert_eq!(cpu.regs.b, 1);
}

#[test]
fn test_ei_latency_one_instruction() {
    let mut cpu = make_cpu();
    cpu.regs.pc = 0x0200;
    cpu.regs.sp = 0xFFFE;
    load(&mut cpu, 0x0200, &[0xFB, 0x04, 0x04]); // EI; INC B; INC B
    cpu.memory.0[IF_ADDR as usize] = Interrupt::VBlank.bit();
    cpu.memory.0[IE_ADDR as usize] = Interrupt::VBlank.bit();

    step(&mut cpu); // EI
    assert!(!cpu.ime); // not yet visible

    step(&mut cpu); // the following instruction still runs
    assert_eq!(cpu.regs.b, 1);
    assert!(!cpu.ime);

    // Now the enable has committed and the pending request vectors
    assert_eq!(step(&mut cpu), 20);
    assert_eq!(cpu.regs.pc, Interrupt::VBlank.vector());
    assert_eq!(cpu.regs.b, 1); // second INC B pre-empted
}

#[test]
fn test_di_latency_one_instruction() {
    let mut cpu = make_cpu();
    cpu.ime = true;
    load(&mut cpu, 0, &[0xF3, 0x04, 0x04]); // DI; INC B; INC B

    step(&mut cpu); // DI
    assert!(cpu.ime); // still enabled for one more instruction

    step(&mut cpu); // INC B under the old setting
    assert!(cpu.ime);

    step(&mut cpu);
    assert!(!cpu.ime); // committed before this instruction ran
}

#[test]
fn test_ei_then_di_last_write_wins() {
    let mut cpu = make_cpu();
    load(&mut cpu, 0, &[0xFB, 0xF3, 0x00, 0x00]); // EI; DI; NOP; NOP
    step(&mut cpu); // EI
    step(&mut cpu); // DI (EI commit still staged)
    step(&mut cpu); // NOP: EI committed, DI staged
    step(&mut cpu); // NOP: DI committed
    assert!(!cpu.ime);
}

#[test]
fn test_dispatch_is_atomic() {
    // Dispatch acknowledges, disables, pushes and jumps in one step;
    // a second source stays pending untouched.
    let mut cpu = make_cpu();
    cpu.ime = true;
    cpu.regs.pc = 0x0200;
    cpu.regs.sp = 0xFFFE;
    cpu.memory.0[IF_ADDR as usize] = Interrupt::Lcd.bit() | Interrupt::Joypad.bit();
    cpu.memory.0[IE_ADDR as usize] = 0x1F;

    let before = cpu.cycles;
    step(&mut cpu);
    assert_eq!(cpu.cycles - before, 20);
    assert_eq!(cpu.regs.pc, Interrupt::Lcd.vector());
    assert_eq!(cpu.memory.0[IF_ADDR as usize], Interrupt::Joypad.bit());
    // IME now clear: the joypad request waits for re-enable
    load(&mut cpu, Interrupt::Lcd.vector(), &[0x00]);
    step(&mut cpu);
    assert_eq!(cpu.regs.pc, Interrupt::Lcd.vector() + 1);
}
