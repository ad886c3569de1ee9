//! Game Boy memory bus.
//!
//! Address decoding for the regions the instruction core touches. Video,
//! audio and timer hardware are not modeled, so their regions decay to
//! plain RAM (VRAM) or open bus (I/O other than IF).
//!
//! # Memory Map
//!
//! ```text
//! $0000-$7FFF  Cartridge ROM (32KB, no banking)
//! $8000-$9FFF  Video RAM (8KB, plain RAM here)
//! $C000-$DFFF  Work RAM (8KB)
//! $E000-$FDFF  Echo RAM (mirror of $C000-$DDFF)
//! $FF0F        Interrupt Flag register
//! $FF80-$FFFE  High RAM (127 bytes)
//! $FFFF        Interrupt Enable register
//! ```
//!
//! Everything else reads as open bus (0xFF) and ignores writes, which is
//! what unmapped hardware looks like to software.

use dmg_core::cpu_lr35902::{Interrupt, MemoryLr35902};
use dmg_core::logging::{log, LogCategory, LogLevel};

/// Cartridge ROM window size. Banked carts are out of scope; a larger
/// image is truncated at load.
pub const ROM_SIZE: usize = 0x8000;

/// Game Boy memory bus
pub struct GbBus {
    /// Cartridge ROM (32KB window)
    rom: Vec<u8>,
    /// Video RAM (8KB), plain RAM without a PPU attached
    vram: [u8; 0x2000],
    /// Work RAM (8KB)
    wram: [u8; 0x2000],
    /// High RAM (127 bytes)
    hram: [u8; 0x7F],
    /// Interrupt Enable register
    ie: u8,
    /// Interrupt Flag register
    if_reg: u8,
}

impl Default for GbBus {
    fn default() -> Self {
        Self::new()
    }
}

impl GbBus {
    pub fn new() -> Self {
        Self {
            rom: vec![],
            vram: [0; 0x2000],
            wram: [0; 0x2000],
            hram: [0; 0x7F],
            ie: 0,
            if_reg: 0,
        }
    }

    /// Raise an interrupt request line. The CPU picks the request up on
    /// its next step through the IF register.
    pub fn request_interrupt(&mut self, int: Interrupt) {
        self.if_reg |= int.bit();
    }

    pub fn load_cart(&mut self, data: &[u8]) {
        let len = data.len().min(ROM_SIZE);
        if data.len() > ROM_SIZE {
            log(LogCategory::Bus, LogLevel::Warn, || {
                format!("cart image is {} bytes, truncating to 32KB", data.len())
            });
        }
        self.rom = data[..len].to_vec();
    }

    pub fn unload_cart(&mut self) {
        self.rom.clear();
    }

    pub fn cart_loaded(&self) -> bool {
        !self.rom.is_empty()
    }
}

impl MemoryLr35902 for GbBus {
    fn read(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x7FFF => self.rom.get(addr as usize).copied().unwrap_or(0xFF),
            0x8000..=0x9FFF => self.vram[(addr - 0x8000) as usize],
            0xC000..=0xDFFF => self.wram[(addr - 0xC000) as usize],
            // Echo RAM (mirror of C000-DDFF)
            0xE000..=0xFDFF => self.wram[(addr - 0xE000) as usize],
            0xFF0F => self.if_reg,
            0xFF80..=0xFFFE => self.hram[(addr - 0xFF80) as usize],
            0xFFFF => self.ie,
            _ => 0xFF, // open bus
        }
    }

    fn write(&mut self, addr: u16, val: u8) {
        match addr {
            0x0000..=0x7FFF => {} // ROM ignores writes (no mapper)
            0x8000..=0x9FFF => self.vram[(addr - 0x8000) as usize] = val,
            0xC000..=0xDFFF => self.wram[(addr - 0xC000) as usize] = val,
            0xE000..=0xFDFF => self.wram[(addr - 0xE000) as usize] = val,
            0xFF0F => self.if_reg = val & 0x1F,
            0xFF80..=0xFFFE => self.hram[(addr - 0xFF80) as usize] = val,
            0xFFFF => self.ie = val,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rom_is_read_only() {
        let mut bus = GbBus::new();
        bus.load_cart(&[0xAA; 0x100]);
        assert_eq!(bus.read(0x0000), 0xAA);
        bus.write(0x0000, 0x55);
        assert_eq!(bus.read(0x0000), 0xAA);
    }

    #[test]
    fn test_rom_truncated_to_window() {
        let mut bus = GbBus::new();
        bus.load_cart(&vec![0x11; ROM_SIZE + 0x4000]);
        assert_eq!(bus.read(0x7FFF), 0x11);
        // Past the window: open bus, not the extra cart bytes
        assert_eq!(bus.read(0x8000), 0x00); // VRAM, zeroed
    }

    #[test]
    fn test_unmapped_rom_reads_open_bus() {
        let bus = GbBus::new();
        assert_eq!(bus.read(0x0000), 0xFF);
        assert_eq!(bus.read(0x7FFF), 0xFF);
    }

    #[test]
    fn test_wram_and_echo_mirror() {
        let mut bus = GbBus::new();
        bus.write(0xC123, 0x42);
        assert_eq!(bus.read(0xC123), 0x42);
        assert_eq!(bus.read(0xE123), 0x42); // echo reads through

        bus.write(0xE200, 0x99); // echo writes through
        assert_eq!(bus.read(0xC200), 0x99);
    }

    #[test]
    fn test_vram_and_hram() {
        let mut bus = GbBus::new();
        bus.write(0x8000, 0x12);
        bus.write(0x9FFF, 0x34);
        bus.write(0xFF80, 0x56);
        bus.write(0xFFFE, 0x78);
        assert_eq!(bus.read(0x8000), 0x12);
        assert_eq!(bus.read(0x9FFF), 0x34);
        assert_eq!(bus.read(0xFF80), 0x56);
        assert_eq!(bus.read(0xFFFE), 0x78);
    }

    #[test]
    fn test_interrupt_registers() {
        let mut bus = GbBus::new();
        bus.write(0xFFFF, 0x1F);
        assert_eq!(bus.read(0xFFFF), 0x1F);

        bus.request_interrupt(Interrupt::Timer);
        assert_eq!(bus.read(0xFF0F), Interrupt::Timer.bit());

        bus.write(0xFF0F, 0xFF); // upper bits are not backed
        assert_eq!(bus.read(0xFF0F), 0x1F);
    }

    #[test]
    fn test_unmapped_io_is_open_bus() {
        let mut bus = GbBus::new();
        assert_eq!(bus.read(0xFF40), 0xFF); // would be LCDC with a PPU
        bus.write(0xFF40, 0x91); // dropped
        assert_eq!(bus.read(0xFF40), 0xFF);
        assert_eq!(bus.read(0xFEA0), 0xFF); // the not-usable gap
    }
}
