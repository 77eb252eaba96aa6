// CPU backends. The host drives whichever one matches the architecture
// mode through `CpuBackend` and never looks at registers itself.

pub mod m6502;
pub mod z80;

use crate::machine::memory::MemoryBus;
use crate::machine::state::ArchMode;

/// One instruction-set implementation.
pub trait CpuBackend: Send {
    fn name(&self) -> &'static str;

    /// Restart from the architecture's reset entry point.
    fn reset(&mut self);

    /// Run whole instructions until at least `budget` cycles are spent.
    /// May overshoot by one instruction; returns the real total, including
    /// cycles owed by interrupt entry since the last call.
    fn step_cycles(&mut self, budget: u32) -> u32;

    /// Enter the non-maskable interrupt handler.
    fn nmi(&mut self);
}

/// Both backends plus the one currently wired to the bus. A mode change
/// is only picked up by `reset`.
pub struct Cpus {
    mos6502: Box<dyn CpuBackend>,
    z80: Box<dyn CpuBackend>,
    active: ArchMode,
}

impl Cpus {
    pub fn new(bus: &MemoryBus, arch: ArchMode) -> Self {
        Self::with_backends(
            Box::new(m6502::Mos6502Cpu::new(bus.clone())),
            Box::new(z80::Z80Cpu::new(bus.clone())),
            arch,
        )
    }

    pub fn with_backends(
        mos6502: Box<dyn CpuBackend>,
        z80: Box<dyn CpuBackend>,
        arch: ArchMode,
    ) -> Self {
        Self {
            mos6502,
            z80,
            active: arch,
        }
    }

    #[cfg(test)]
    pub fn active_arch(&self) -> ArchMode {
        self.active
    }

    /// Reset both chips and switch the bus over to `arch`.
    pub fn reset(&mut self, arch: ArchMode) {
        self.active = arch;
        self.mos6502.reset();
        self.z80.reset();
        log::debug!("CPU reset, active backend {}", self.active_mut().name());
    }

    pub fn step_cycles(&mut self, budget: u32) -> u32 {
        self.active_mut().step_cycles(budget)
    }

    pub fn nmi(&mut self) {
        self.active_mut().nmi();
    }

    fn active_mut(&mut self) -> &mut dyn CpuBackend {
        match self.active {
            ArchMode::Mos6502 => self.mos6502.as_mut(),
            ArchMode::Z80 => self.z80.as_mut(),
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::CpuBackend;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    /// Counts calls and consumes `budget + overshoot` cycles.
    #[derive(Clone, Default)]
    pub struct StubCpu {
        pub overshoot: u32,
        pub steps: Arc<AtomicU32>,
        pub nmis: Arc<AtomicU32>,
        pub resets: Arc<AtomicU32>,
        pub last_budget: Arc<AtomicU32>,
    }

    impl StubCpu {
        pub fn with_overshoot(overshoot: u32) -> Self {
            Self {
                overshoot,
                ..Self::default()
            }
        }

        pub fn steps(&self) -> u32 {
            self.steps.load(Ordering::SeqCst)
        }

        pub fn nmis(&self) -> u32 {
            self.nmis.load(Ordering::SeqCst)
        }

        pub fn resets(&self) -> u32 {
            self.resets.load(Ordering::SeqCst)
        }

        pub fn last_budget(&self) -> u32 {
            self.last_budget.load(Ordering::SeqCst)
        }
    }

    impl CpuBackend for StubCpu {
        fn name(&self) -> &'static str {
            "stub"
        }

        fn reset(&mut self) {
            self.resets.fetch_add(1, Ordering::SeqCst);
        }

        fn step_cycles(&mut self, budget: u32) -> u32 {
            self.steps.fetch_add(1, Ordering::SeqCst);
            self.last_budget.store(budget, Ordering::SeqCst);
            budget + self.overshoot
        }

        fn nmi(&mut self) {
            self.nmis.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::StubCpu;
    use super::*;

    #[test]
    fn mode_switch_waits_for_reset() {
        let a = StubCpu::default();
        let b = StubCpu::default();
        let mut cpus =
            Cpus::with_backends(Box::new(a.clone()), Box::new(b.clone()), ArchMode::Mos6502);

        cpus.step_cycles(10);
        assert_eq!((a.steps(), b.steps()), (1, 0));

        cpus.reset(ArchMode::Z80);
        assert_eq!(cpus.active_arch(), ArchMode::Z80);
        cpus.step_cycles(10);
        cpus.nmi();
        assert_eq!((a.steps(), b.steps()), (1, 1));
        assert_eq!((a.nmis(), b.nmis()), (0, 1));
        assert_eq!((a.resets(), b.resets()), (1, 1));
    }
}
