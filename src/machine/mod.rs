// The virtual machine host: memory image, mode flags, CPU backends,
// storage and mailbox. Runs in its own thread and talks to the GUI via
// crossbeam channels; the GUI only ever reads the bus to draw it.

pub mod charset;
pub mod files;
pub mod mailbox;
pub mod memory;
pub mod scheduler;
pub mod state;
pub mod status;

use std::thread;

use crossbeam_channel::{bounded, Receiver, Sender};

use crate::cpu::Cpus;
use crate::storage::{EntryIter, Storage};
use mailbox::{Mailbox, MailboxOutcome};
use memory::*;
use scheduler::Scheduler;
use state::{ArchMode, ClockSpeed, MachineState};
use status::Status;

// ─────────────────────────────────────────────────────────────────────────────
//  Public message types
// ─────────────────────────────────────────────────────────────────────────────

/// Commands sent from GUI → machine thread.
#[derive(Debug, Clone)]
pub enum MachineCmd {
    /// Drop back to the monitor at the next tick.
    Stop,
    /// Same as the reset switch.
    Reset,
    Quit,
}

/// Status updates sent from machine thread → GUI, about once a second.
#[derive(Debug, Clone, PartialEq)]
pub struct MachineStatus {
    pub arch: ArchMode,
    pub speed: ClockSpeed,
    pub running: bool,
    /// Effective guest clock over the last second.
    pub khz: u32,
}

/// Everything the machine thread needs at power-on.
pub struct Launch {
    pub storage: Box<dyn Storage>,
    pub arch: ArchMode,
    pub speed: ClockSpeed,
    /// Raw image to place at CODE_START and run straight away.
    pub autoload: Option<Vec<u8>>,
}

pub struct MachineHandle {
    pub bus: MemoryBus,
    pub cmd_tx: Sender<MachineCmd>,
    pub key_tx: Sender<u8>,
    pub status_rx: Receiver<MachineStatus>,
}

/// Spawn the machine thread.
pub fn spawn_machine(launch: Launch) -> MachineHandle {
    let (cmd_tx, cmd_rx) = bounded::<MachineCmd>(64);
    let (key_tx, key_rx) = bounded::<u8>(256);
    let (status_tx, status_rx) = bounded::<MachineStatus>(16);

    let bus = MemoryBus::new();
    let cpus = Cpus::new(&bus, launch.arch);
    let machine = Machine::new(bus.clone(), launch.storage, cpus, launch.arch, launch.speed);

    thread::Builder::new()
        .name("cerberus-machine".into())
        .spawn(move || {
            let mut sched = Scheduler::new(machine, Box::new(key_rx));
            if let Some(image) = launch.autoload {
                sched.autoload(&image);
            }
            sched.run(cmd_rx, status_tx);
        })
        .expect("Failed to spawn machine thread");

    MachineHandle {
        bus,
        cmd_tx,
        key_tx,
        status_rx,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
//  Machine
// ─────────────────────────────────────────────────────────────────────────────

pub struct Machine {
    pub bus: MemoryBus,
    pub state: MachineState,
    cpus: Cpus,
    storage: Box<dyn Storage>,
    mailbox: Mailbox,
}

impl Machine {
    pub fn new(
        bus: MemoryBus,
        storage: Box<dyn Storage>,
        cpus: Cpus,
        arch: ArchMode,
        speed: ClockSpeed,
    ) -> Self {
        let mut m = Self {
            bus,
            state: MachineState::new(arch, speed),
            cpus,
            storage,
            mailbox: Mailbox::new(),
        };
        m.power_on();
        m
    }

    /// Cold start: blank memory, fresh glyphs, both CPUs reset, monitor
    /// owns the bus. Mode and speed are kept.
    pub fn power_on(&mut self) {
        self.state.running = false;
        self.state.interrupt_pending = false;
        self.bus.clear();
        self.reload_charset();
        self.cpus.reset(self.state.arch);
        self.mailbox.close_directory();
    }

    pub fn peek(&self, addr: u16) -> u8 {
        self.bus.read(addr)
    }

    pub fn poke(&self, addr: u16, value: u8) {
        self.bus.write(addr, value);
    }

    pub fn load_file(&self, name: &str, addr: u16) -> Result<usize, Status> {
        let n = files::load(&self.bus, self.storage.as_ref(), name, addr)?;
        log::info!("Loaded {name} ({n} bytes) at {addr:#06x}");
        Ok(n)
    }

    pub fn save_file(&self, name: &str, start: u16, end: u16) -> Result<(), Status> {
        files::save(&self.bus, self.storage.as_ref(), name, start, end)?;
        log::info!("Saved {start:#06x}..={end:#06x} to {name}");
        Ok(())
    }

    pub fn delete_file(&self, name: &str) -> Result<(), Status> {
        files::delete(self.storage.as_ref(), name)
    }

    pub fn list_directory(&self) -> Result<EntryIter, Status> {
        Ok(self.storage.entries()?)
    }

    /// Hand the bus to the guest: clear the mailbox cells, install the
    /// entry points for the selected architecture and reset the CPUs.
    pub fn start_guest(&mut self) {
        self.bus.write(OUTBOX_FLAG, 0);
        self.bus.write(OUTBOX_DATA, 0);
        self.bus.write(INBOX_FLAG, 0);

        match self.state.arch {
            ArchMode::Mos6502 => {
                self.bus.write_u16(NMI_VECTOR_6502, NMI_HANDLER_6502);
                self.bus.write(NMI_HANDLER_6502, 0x40); // RTI
                self.bus.write_u16(RESET_VECTOR_6502, CODE_START);
            }
            ArchMode::Z80 => {
                self.bus.write(NMI_ENTRY_Z80, 0xED); // RETN
                self.bus.write(NMI_ENTRY_Z80 + 1, 0x45);
                self.bus.write(RESET_ENTRY_Z80, 0xC3); // JP CODE_START
                self.bus.write_u16(RESET_ENTRY_Z80 + 1, CODE_START);
            }
        }

        self.cpus.reset(self.state.arch);
        self.state.running = true;
        log::info!(
            "Guest started ({}, {} MHz)",
            self.state.arch,
            self.state.speed.mhz()
        );
    }

    /// Take the bus back from the guest. Returns false (and changes
    /// nothing) if the monitor already has it.
    pub fn stop_guest(&mut self) -> bool {
        if !self.state.running {
            return false;
        }
        self.state.running = false;
        self.reload_charset();
        log::info!("Guest stopped");
        true
    }

    pub fn set_arch(&mut self, arch: ArchMode) {
        if self.state.arch != arch {
            log::info!("Architecture set to {arch}");
        }
        self.state.arch = arch;
    }

    pub fn set_speed(&mut self, speed: ClockSpeed) {
        if self.state.speed != speed {
            log::info!("Clock set to {} MHz", speed.mhz());
        }
        self.state.speed = speed;
    }

    /// Built-in glyphs, then `chardefs.bin` on top if the card has one.
    pub fn reload_charset(&self) {
        self.bus.load(CHARSET_BASE, &charset::CHARSET);
        if self.storage.exists("chardefs.bin") {
            match files::load(&self.bus, self.storage.as_ref(), "chardefs.bin", CHARSET_BASE) {
                Ok(n) => log::debug!("chardefs.bin: {n} bytes"),
                Err(e) => log::warn!("chardefs.bin: {e}"),
            }
        }
    }

    pub fn deliver_nmi(&mut self) {
        self.cpus.nmi();
    }

    pub fn step_cycles(&mut self, budget: u32) -> u32 {
        self.cpus.step_cycles(budget)
    }

    pub fn service_mailbox(&mut self) -> MailboxOutcome {
        self.mailbox.service(&self.bus, self.storage.as_ref())
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use crate::cpu::testing::StubCpu;
    use crate::storage::MemStorage;

    /// A machine on stub CPUs and in-memory storage. The returned stub
    /// is the 6502 one; the Z80 stub shares nothing with it.
    pub fn machine(sd: MemStorage) -> (Machine, StubCpu, StubCpu) {
        let m6502 = StubCpu::with_overshoot(3);
        let z80 = StubCpu::with_overshoot(3);
        let bus = MemoryBus::new();
        let cpus = Cpus::with_backends(
            Box::new(m6502.clone()),
            Box::new(z80.clone()),
            ArchMode::Mos6502,
        );
        let m = Machine::new(bus, Box::new(sd), cpus, ArchMode::Mos6502, ClockSpeed::Fast);
        (m, m6502, z80)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::machine;
    use super::*;
    use crate::storage::MemStorage;

    #[test]
    fn power_on_installs_charset() {
        let (m, _, _) = machine(MemStorage::new());
        assert_eq!(m.bus.dump(CHARSET_BASE, CHARSET_BASE + 7), charset::CHARSET[..8].to_vec());
        assert!(!m.state.running);
    }

    #[test]
    fn chardefs_file_overrides_builtin() {
        let (m, _, _) = machine(MemStorage::new().with_file("chardefs.bin", &[0xAA; 16]));
        assert_eq!(m.peek(CHARSET_BASE + 15), 0xAA);
        assert_eq!(m.peek(CHARSET_BASE + 16), charset::CHARSET[16]);
    }

    #[test]
    fn start_6502_installs_vectors() {
        let (mut m, cpu, _) = machine(MemStorage::new());
        m.poke(OUTBOX_FLAG, 1);
        m.poke(INBOX_FLAG, 5);
        m.start_guest();
        assert!(m.state.running);
        assert_eq!(m.peek(OUTBOX_FLAG), 0);
        assert_eq!(m.peek(INBOX_FLAG), 0);
        assert_eq!(m.bus.read_u16(NMI_VECTOR_6502), 0xFCB0);
        assert_eq!(m.peek(0xFCB0), 0x40);
        assert_eq!(m.bus.read_u16(RESET_VECTOR_6502), CODE_START);
        assert_eq!(cpu.resets(), 2);
    }

    #[test]
    fn start_z80_installs_trampolines() {
        let (mut m, _, z80) = machine(MemStorage::new());
        m.set_arch(ArchMode::Z80);
        m.start_guest();
        assert_eq!(m.bus.dump(0x0000, 0x0002), vec![0xC3, 0x05, 0x02]);
        assert_eq!(m.bus.dump(0x0066, 0x0067), vec![0xED, 0x45]);
        m.step_cycles(100);
        assert_eq!(z80.steps(), 1);
    }

    #[test]
    fn stop_restores_glyphs_and_is_idempotent() {
        let (mut m, _, _) = machine(MemStorage::new());
        m.start_guest();
        m.poke(CHARSET_BASE, 0x00);
        assert!(m.stop_guest());
        assert_eq!(m.peek(CHARSET_BASE), charset::CHARSET[0]);

        let before = m.state;
        assert!(!m.stop_guest());
        assert_eq!(m.state, before);
    }
}
