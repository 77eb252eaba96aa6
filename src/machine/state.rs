// Mode flags shared by the scheduler and the monitor.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchMode {
    #[serde(rename = "6502")]
    Mos6502,
    Z80,
}

impl fmt::Display for ArchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchMode::Mos6502 => write!(f, "6502"),
            ArchMode::Z80 => write!(f, "Z80"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockSpeed {
    Fast,
    Slow,
}

impl ClockSpeed {
    /// Cycles per 20 ms tick: 8 MHz or 4 MHz.
    pub fn cycles_per_tick(self) -> u32 {
        match self {
            ClockSpeed::Fast => 160_000,
            ClockSpeed::Slow => 80_000,
        }
    }

    pub fn mhz(self) -> u32 {
        self.cycles_per_tick() / 20_000
    }
}

/// Everything the tick loop consults each round. Only the scheduler and
/// the monitor write it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineState {
    pub arch: ArchMode,
    pub speed: ClockSpeed,
    /// Guest owns the bus.
    pub running: bool,
    /// Set by the periodic interrupt, cleared once the mailbox has been
    /// looked at for that tick.
    pub interrupt_pending: bool,
}

impl MachineState {
    pub fn new(arch: ArchMode, speed: ClockSpeed) -> Self {
        Self {
            arch,
            speed,
            running: false,
            interrupt_pending: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budgets() {
        assert_eq!(ClockSpeed::Fast.cycles_per_tick(), 160_000);
        assert_eq!(ClockSpeed::Slow.cycles_per_tick(), 80_000);
        assert_eq!(ClockSpeed::Fast.mhz(), 8);
        assert_eq!(ClockSpeed::Slow.mhz(), 4);
    }

    #[test]
    fn serde_names() {
        assert_eq!(serde_json::to_string(&ArchMode::Mos6502).unwrap(), "\"6502\"");
        assert_eq!(serde_json::to_string(&ArchMode::Z80).unwrap(), "\"z80\"");
        let s: ClockSpeed = serde_json::from_str("\"slow\"").unwrap();
        assert_eq!(s, ClockSpeed::Slow);
    }
}
