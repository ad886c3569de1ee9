//! Game Boy system implementation: the LR35902 core on a flat 32KB-cart
//! bus, driven by cycle budgets from the frontend.

use dmg_core::{
    cpu_lr35902::{CpuError, CpuLr35902, Interrupt},
    MountPointInfo, System,
};

mod bus;

pub use bus::GbBus;

pub struct GbSystem {
    cpu: CpuLr35902<GbBus>,
}

impl Default for GbSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl GbSystem {
    pub fn new() -> Self {
        Self {
            cpu: CpuLr35902::new(GbBus::new()),
        }
    }

    /// Direct access to the CPU, for debuggers and tests.
    pub fn cpu(&self) -> &CpuLr35902<GbBus> {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut CpuLr35902<GbBus> {
        &mut self.cpu
    }

    /// Raise an interrupt request as external hardware would.
    pub fn request_interrupt(&mut self, int: Interrupt) {
        self.cpu.memory.request_interrupt(int);
    }
}

#[derive(thiserror::Error, Debug)]
pub enum GbError {
    #[error("No cartridge loaded")]
    NoCartridge,
    #[error("Invalid mount point")]
    InvalidMountPoint,
    #[error(transparent)]
    Cpu(#[from] CpuError),
}

impl System for GbSystem {
    type Error = GbError;

    fn reset(&mut self) {
        self.cpu.reset();
    }

    fn run_cycles(&mut self, budget: u32) -> Result<u32, Self::Error> {
        if !self.cpu.memory.cart_loaded() {
            return Err(GbError::NoCartridge);
        }

        let mut cycles = 0;
        while cycles < budget {
            cycles += self.cpu.step()?;
        }
        Ok(cycles)
    }

    fn save_state(&self) -> serde_json::Value {
        serde_json::json!({
            "system": "gb",
            "version": 1,
            "cpu": {
                "regs": self.cpu.regs,
                "ime": self.cpu.ime,
                "di_latch": self.cpu.di_latch,
                "ei_latch": self.cpu.ei_latch,
                "halted": self.cpu.halted,
                "stopped": self.cpu.stopped,
                "cycles": self.cpu.cycles,
            }
        })
    }

    fn load_state(&mut self, v: &serde_json::Value) -> Result<(), serde_json::Error> {
        macro_rules! load_u8 {
            ($state:expr, $field:literal, $target:expr) => {
                if let Some(val) = $state.get($field).and_then(|v| v.as_u64()) {
                    $target = val as u8;
                }
            };
        }

        macro_rules! load_u64 {
            ($state:expr, $field:literal, $target:expr) => {
                if let Some(val) = $state.get($field).and_then(|v| v.as_u64()) {
                    $target = val;
                }
            };
        }

        macro_rules! load_bool {
            ($state:expr, $field:literal, $target:expr) => {
                if let Some(val) = $state.get($field).and_then(|v| v.as_bool()) {
                    $target = val;
                }
            };
        }

        if let Some(cpu_state) = v.get("cpu") {
            if let Some(regs) = cpu_state.get("regs") {
                self.cpu.regs = serde_json::from_value(regs.clone())?;
            }
            load_bool!(cpu_state, "ime", self.cpu.ime);
            load_u8!(cpu_state, "di_latch", self.cpu.di_latch);
            load_u8!(cpu_state, "ei_latch", self.cpu.ei_latch);
            load_bool!(cpu_state, "halted", self.cpu.halted);
            load_bool!(cpu_state, "stopped", self.cpu.stopped);
            load_u64!(cpu_state, "cycles", self.cpu.cycles);
        }
        Ok(())
    }

    fn supports_save_states(&self) -> bool {
        true
    }

    fn mount_points(&self) -> Vec<MountPointInfo> {
        vec![MountPointInfo {
            id: "Cartridge".to_string(),
            name: "Cartridge Slot".to_string(),
            extensions: vec!["gb".to_string(), "gbc".to_string()],
            required: true,
        }]
    }

    fn mount(&mut self, mount_point_id: &str, data: &[u8]) -> Result<(), Self::Error> {
        if mount_point_id != "Cartridge" {
            return Err(GbError::InvalidMountPoint);
        }

        self.cpu.memory.load_cart(data);
        self.reset();

        Ok(())
    }

    fn unmount(&mut self, mount_point_id: &str) -> Result<(), Self::Error> {
        if mount_point_id != "Cartridge" {
            return Err(GbError::InvalidMountPoint);
        }

        self.cpu.memory.unload_cart();
        Ok(())
    }

    fn is_mounted(&self, mount_point_id: &str) -> bool {
        mount_point_id == "Cartridge" && self.cpu.memory.cart_loaded()
    }
}
