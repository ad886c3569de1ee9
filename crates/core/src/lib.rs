//! Core emulator primitives and traits.

pub mod cpu_lr35902;
pub mod logging;

use serde_json::Value;

/// A CPU-like component that can be stepped; returns cycles consumed.
///
/// Stepping is fallible: a fetch that lands on an undefined opcode is a
/// fatal condition for the emulation session, not something to paper over.
pub trait Cpu {
    type Error: std::error::Error + Send + Sync + 'static;

    fn reset(&mut self);
    fn step(&mut self) -> Result<u32, Self::Error>;
}

/// Description of a mount point (media slot) that a system supports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountPointInfo {
    /// Unique identifier for this mount point (e.g., "Cartridge", "BIOS")
    pub id: String,
    /// User-friendly name for display (e.g., "Cartridge Slot")
    pub name: String,
    /// File extensions accepted by this mount point (e.g., ["gb", "gbc"])
    pub extensions: Vec<String>,
    /// Whether this mount point is required for the system to function
    pub required: bool,
}

/// A high-level System trait tying components together.
///
/// The scheduler role: a frontend hands the system a cycle budget and the
/// system distributes it across its components by repeatedly stepping the
/// CPU. Peripheral work may be interleaved between steps by the system;
/// the CPU itself never blocks on a peripheral.
pub trait System {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Reset to initial power-on state
    fn reset(&mut self);

    /// Emulate for at least `budget` CPU cycles and return the cycles
    /// actually consumed (the last instruction may overshoot).
    fn run_cycles(&mut self, budget: u32) -> Result<u32, Self::Error>;

    /// Return a JSON-serializable save state for debugging.
    /// Note: Save states should NOT include ROM/cartridge data.
    fn save_state(&self) -> Value;

    /// Load a JSON save state.
    fn load_state(&mut self, v: &Value) -> Result<(), serde_json::Error>;

    /// Check if this system supports save/load state functionality
    fn supports_save_states(&self) -> bool {
        false // Default: no save state support
    }

    /// Get the list of mount points this system supports
    fn mount_points(&self) -> Vec<MountPointInfo>;

    /// Load media into a specific mount point
    fn mount(&mut self, mount_point_id: &str, data: &[u8]) -> Result<(), Self::Error>;

    /// Unload media from a specific mount point
    fn unmount(&mut self, mount_point_id: &str) -> Result<(), Self::Error>;

    /// Check if a mount point has media loaded
    fn is_mounted(&self, mount_point_id: &str) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockSystem {
        mounted: bool,
    }

    impl System for MockSystem {
        type Error = std::convert::Infallible;

        fn reset(&mut self) {}

        fn run_cycles(&mut self, budget: u32) -> Result<u32, Self::Error> {
            Ok(budget)
        }

        fn save_state(&self) -> serde_json::Value {
            serde_json::json!({"mock": true, "version": 1})
        }

        fn load_state(&mut self, _v: &serde_json::Value) -> Result<(), serde_json::Error> {
            Ok(())
        }

        fn mount_points(&self) -> Vec<MountPointInfo> {
            vec![MountPointInfo {
                id: "test".to_string(),
                name: "Test Slot".to_string(),
                extensions: vec!["bin".to_string()],
                required: false,
            }]
        }

        fn mount(&mut self, _mount_point_id: &str, _data: &[u8]) -> Result<(), Self::Error> {
            self.mounted = true;
            Ok(())
        }

        fn unmount(&mut self, _mount_point_id: &str) -> Result<(), Self::Error> {
            self.mounted = false;
            Ok(())
        }

        fn is_mounted(&self, _mount_point_id: &str) -> bool {
            self.mounted
        }
    }

    #[test]
    fn mock_system_save_load_roundtrip() {
        let sys = MockSystem { mounted: false };
        let v = sys.save_state();
        let s = serde_json::to_string(&v).expect("serialize");
        let v2: serde_json::Value = serde_json::from_str(&s).expect("deserialize");
        let mut sys2 = MockSystem { mounted: false };
        assert!(sys2.load_state(&v2).is_ok());
    }

    #[test]
    fn test_mount_point_info() {
        let mp = MountPointInfo {
            id: "Cartridge".to_string(),
            name: "Cartridge Slot".to_string(),
            extensions: vec!["gb".to_string(), "gbc".to_string()],
            required: true,
        };

        assert_eq!(mp.id, "Cartridge");
        assert_eq!(mp.extensions.len(), 2);
        assert!(mp.required);
    }

    #[test]
    fn test_system_mount_operations() {
        let mut sys = MockSystem { mounted: false };

        assert!(!sys.is_mounted("test"));
        assert!(sys.mount("test", &[1, 2, 3]).is_ok());
        assert!(sys.is_mounted("test"));
        assert!(sys.unmount("test").is_ok());
        assert!(!sys.is_mounted("test"));
    }

    #[test]
    fn test_system_supports_save_states() {
        let sys = MockSystem { mounted: false };
        // Default implementation returns false
        assert!(!sys.supports_save_states());
    }

    #[test]
    fn test_run_cycles_budget() {
        let mut sys = MockSystem { mounted: false };
        assert_eq!(sys.run_cycles(100).unwrap(), 100);
    }
}
