// Z80 backend on top of `z80emu`. The bus has no I/O ports, so every
// port read floats high and writes are ignored.

use z80emu::host::TsCounter;
use z80emu::{BreakCause, Clock, Cpu, Io, Memory, Z80NMOS};

use super::CpuBackend;
use crate::machine::memory::MemoryBus;

type TsClock = TsCounter<i32>;

impl Io for MemoryBus {
    type Timestamp = i32;
    type WrIoBreak = ();
    type RetiBreak = ();
}

impl Memory for MemoryBus {
    type Timestamp = i32;

    fn read_debug(&self, addr: u16) -> u8 {
        self.read(addr)
    }

    fn write_mem(&mut self, addr: u16, value: u8, _ts: Self::Timestamp) {
        self.write(addr, value);
    }
}

pub struct Z80Cpu {
    cpu: Z80NMOS,
    bus: MemoryBus,
    owed: u32,
}

impl Z80Cpu {
    pub fn new(bus: MemoryBus) -> Self {
        let mut cpu = Z80NMOS::default();
        cpu.reset();
        Self { cpu, bus, owed: 0 }
    }
}

impl CpuBackend for Z80Cpu {
    fn name(&self) -> &'static str {
        "Z80"
    }

    fn reset(&mut self) {
        self.cpu.reset();
        self.owed = 0;
    }

    fn step_cycles(&mut self, budget: u32) -> u32 {
        let owed = std::mem::take(&mut self.owed);
        let limit = i32::try_from(budget.saturating_sub(owed)).unwrap_or(i32::MAX);
        let mut tsc = TsClock::default();
        let halted = matches!(
            self.cpu.execute_with_limit(&mut self.bus, &mut tsc, limit),
            Err(BreakCause::Halt)
        );
        let ran = tsc.as_timestamp().max(0) as u32 + owed;
        // A halted Z80 idles until the next NMI, which still costs time.
        if halted {
            ran.max(budget)
        } else {
            ran
        }
    }

    fn nmi(&mut self) {
        let mut tsc = TsClock::default();
        if self.cpu.nmi(&mut self.bus, &mut tsc) {
            self.owed += tsc.as_timestamp().max(0) as u32;
        }
    }
}
