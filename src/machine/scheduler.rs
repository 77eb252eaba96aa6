// 50 Hz tick loop. One tick, in order:
//   1. periodic NMI (guest running only)
//   2. at most one key: to the outbox while running, else to the monitor
//   3. one cycle batch for the active CPU (guest running only)
//   4. at most one mailbox request, in either state
// Ticks are paced against an absolute timeline. A late tick starts the
// next one immediately; missed ticks are never made up.

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender, TryRecvError};

use super::mailbox::MailboxOutcome;
use super::memory::{CODE_START, OUTBOX_DATA, OUTBOX_FLAG};
use super::{Machine, MachineCmd, MachineStatus};
use crate::input::{InputSource, KEY_STOP};
use crate::monitor::Monitor;

pub const TICK: Duration = Duration::from_millis(20);
pub const TICKS_PER_SECOND: u32 = 50;

pub struct Scheduler {
    machine: Machine,
    monitor: Monitor,
    input: Box<dyn InputSource>,
    /// Stop requested from outside; applied at the top of the next tick.
    stop_requested: bool,
    /// Cycles the last batch ran over its budget.
    overshoot: u32,
    /// Cycles run since the last status report.
    cycles: u64,
    ticks: u32,
}

impl Scheduler {
    pub fn new(machine: Machine, input: Box<dyn InputSource>) -> Self {
        let mut monitor = Monitor::new();
        monitor.restore(&machine);
        Self {
            machine,
            monitor,
            input,
            stop_requested: false,
            overshoot: 0,
            cycles: 0,
            ticks: 0,
        }
    }

    /// Ask for the guest to be stopped. Safe at any time; takes effect at
    /// the start of the next tick.
    pub fn request_stop(&mut self) {
        self.stop_requested = true;
    }

    /// Place a program image at the code start and run it.
    pub fn autoload(&mut self, image: &[u8]) {
        let n = self.machine.bus.load(CODE_START, image);
        log::info!("Autoloaded {n} bytes at {CODE_START:#06x}");
        self.start_guest();
    }

    pub fn start_guest(&mut self) {
        crate::monitor::screen::clear_all(&self.machine.bus);
        self.overshoot = 0;
        self.machine.start_guest();
    }

    /// Back to the monitor, screen redrawn. No-op if already there.
    pub fn stop_guest(&mut self) {
        if self.machine.stop_guest() {
            self.overshoot = 0;
            self.monitor.restore(&self.machine);
        }
    }

    /// Reset switch: memory wiped, glyphs reloaded, monitor screen.
    pub fn system_reset(&mut self) {
        log::info!("System reset");
        self.stop_requested = false;
        self.overshoot = 0;
        self.machine.power_on();
        self.monitor.restore(&self.machine);
    }

    pub fn tick(&mut self) {
        if std::mem::take(&mut self.stop_requested) {
            self.stop_guest();
        }

        // 1. periodic interrupt
        self.machine.state.interrupt_pending = true;
        if self.machine.state.running {
            self.machine.deliver_nmi();
        }

        // 2. keyboard
        if let Some(key) = self.input.poll() {
            self.deliver_key(key);
        }

        // 3. guest execution
        if self.machine.state.running {
            let base = self.machine.state.speed.cycles_per_tick();
            let budget = base.saturating_sub(self.overshoot);
            let ran = self.machine.step_cycles(budget);
            self.overshoot = ran.saturating_sub(budget).min(base);
            self.cycles += ran as u64;
        }

        // 4. mailbox
        if std::mem::take(&mut self.machine.state.interrupt_pending) {
            if let MailboxOutcome::Reset = self.machine.service_mailbox() {
                log::info!("Reset requested by guest");
                self.system_reset();
            }
        }

        self.ticks = self.ticks.wrapping_add(1);
    }

    fn deliver_key(&mut self, key: u8) {
        if !self.machine.state.running {
            self.monitor.handle_key(&mut self.machine, key);
            return;
        }
        if key == KEY_STOP {
            self.stop_guest();
            return;
        }
        let bus = &self.machine.bus;
        if bus.read(OUTBOX_FLAG) == 0 {
            bus.write(OUTBOX_DATA, key);
            bus.write(OUTBOX_FLAG, 1);
        } else {
            log::trace!("outbox busy, dropped key {key:#04x}");
        }
    }

    fn status(&mut self) -> MachineStatus {
        let khz = (std::mem::take(&mut self.cycles) / 1000) as u32;
        let st = &self.machine.state;
        MachineStatus {
            arch: st.arch,
            speed: st.speed,
            running: st.running,
            khz: if st.running { khz } else { 0 },
        }
    }

    /// Tick until told to quit or the GUI goes away.
    pub fn run(mut self, cmd_rx: Receiver<MachineCmd>, status_tx: Sender<MachineStatus>) {
        let mut next_tick = Instant::now();
        let _ = status_tx.try_send(self.status());

        loop {
            loop {
                match cmd_rx.try_recv() {
                    Ok(MachineCmd::Stop) => self.request_stop(),
                    Ok(MachineCmd::Reset) => self.system_reset(),
                    Ok(MachineCmd::Quit) => {
                        log::info!("Machine thread exiting");
                        return;
                    }
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        // GUI dropped the sender
                        return;
                    }
                }
            }

            self.tick();

            if self.ticks % TICKS_PER_SECOND == 0 {
                let st = self.status();
                log::debug!("{} kHz effective, running={}", st.khz, st.running);
                let _ = status_tx.try_send(st);
            }

            next_tick = next_deadline(next_tick, Instant::now());
            wait_until(next_tick);
        }
    }
}

/// One period after the previous tick started. A late tick resyncs to
/// `now` instead of queueing a burst of catch-up ticks.
fn next_deadline(prev: Instant, now: Instant) -> Instant {
    let next = prev + TICK;
    if next < now {
        now
    } else {
        next
    }
}

/// Sleep for the bulk, spin the last stretch.
fn wait_until(deadline: Instant) {
    let now = Instant::now();
    if now >= deadline {
        return;
    }
    let remaining = deadline - now;
    // Sleep granularity is ~1ms on most OSes
    if remaining > Duration::from_micros(1500) {
        thread::sleep(remaining - Duration::from_micros(1000));
    }
    while Instant::now() < deadline {
        std::hint::spin_loop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KEY_ENTER;
    use crate::machine::mailbox::CMD_RESET;
    use crate::machine::memory::{INBOX_DATA, INBOX_FLAG};
    use crate::machine::state::{ArchMode, ClockSpeed};
    use crate::machine::status::Status;
    use crate::machine::testing::machine;
    use crate::storage::MemStorage;
    use crossbeam_channel::bounded;

    impl Scheduler {
        fn machine(&self) -> &Machine {
            &self.machine
        }

        fn machine_mut(&mut self) -> &mut Machine {
            &mut self.machine
        }
    }

    fn scheduler(sd: MemStorage) -> (Scheduler, Sender<u8>, crate::cpu::testing::StubCpu) {
        let (m, m6502, _) = machine(sd);
        let (key_tx, key_rx) = bounded::<u8>(16);
        (Scheduler::new(m, Box::new(key_rx)), key_tx, m6502)
    }

    #[test]
    fn deadlines_advance_from_previous_tick() {
        let start = Instant::now();
        // Tick finished early: no drift, exactly one period on.
        let now = start + Duration::from_millis(5);
        assert_eq!(next_deadline(start, now), start + TICK);
        // Finished right on the deadline.
        assert_eq!(next_deadline(start, start + TICK), start + TICK);

        let mut t = start;
        for _ in 0..50 {
            t = next_deadline(t, t);
        }
        assert_eq!(t, start + TICK * 50);
    }

    #[test]
    fn late_tick_resyncs_without_catch_up() {
        let start = Instant::now();
        let now = start + TICK * 3 + Duration::from_millis(7);
        let next = next_deadline(start, now);
        assert_eq!(next, now);
        assert_ne!(next, start + TICK * 2);
        // And the tick after that is one period on from the resync.
        assert_eq!(next_deadline(next, next), now + TICK);
    }

    #[test]
    fn one_batch_per_tick_despite_overshoot() {
        let (mut s, _keys, cpu) = scheduler(MemStorage::new());
        s.start_guest();
        for _ in 0..10_000 {
            s.tick();
        }
        assert_eq!(cpu.steps(), 10_000);
        assert!(s.machine().state.running);
        // Every other batch is shortened by the previous overshoot.
        assert!(cpu.last_budget() == 160_000 || cpu.last_budget() == 160_000 - 3);
    }

    #[test]
    fn fifty_ticks_fifty_interrupts() {
        let (mut s, _keys, cpu) = scheduler(MemStorage::new());
        s.machine_mut().set_arch(ArchMode::Mos6502);
        s.machine_mut().set_speed(ClockSpeed::Fast);
        s.start_guest();
        for _ in 0..50 {
            s.tick();
        }
        assert!(s.machine().state.running);
        assert_eq!(cpu.nmis(), 50);
        assert_eq!(cpu.steps(), 50);
    }

    #[test]
    fn monitor_state_never_steps() {
        let (mut s, _keys, cpu) = scheduler(MemStorage::new());
        for _ in 0..10 {
            s.tick();
        }
        assert_eq!(cpu.steps(), 0);
        assert_eq!(cpu.nmis(), 0);
    }

    #[test]
    fn slow_clock_halves_the_budget() {
        let (mut s, _keys, cpu) = scheduler(MemStorage::new());
        s.machine_mut().set_speed(ClockSpeed::Slow);
        s.start_guest();
        s.tick();
        assert_eq!(cpu.last_budget(), 80_000);
    }

    #[test]
    fn keys_go_to_outbox_or_are_dropped() {
        let (mut s, keys, _) = scheduler(MemStorage::new());
        s.start_guest();
        keys.send(b'a').unwrap();
        keys.send(b'b').unwrap();
        s.tick();
        assert_eq!(s.machine().peek(OUTBOX_FLAG), 1);
        assert_eq!(s.machine().peek(OUTBOX_DATA), b'a');

        // Guest hasn't taken 'a' yet, so 'b' is lost.
        s.tick();
        assert_eq!(s.machine().peek(OUTBOX_DATA), b'a');

        s.machine().poke(OUTBOX_FLAG, 0);
        keys.send(b'c').unwrap();
        s.tick();
        assert_eq!(s.machine().peek(OUTBOX_DATA), b'c');
    }

    #[test]
    fn stop_key_returns_to_monitor() {
        let (mut s, keys, cpu) = scheduler(MemStorage::new());
        s.start_guest();
        s.tick();
        keys.send(KEY_STOP).unwrap();
        s.tick();
        assert!(!s.machine().state.running);
        assert_eq!(cpu.steps(), 1);
        assert_eq!(s.machine().peek(OUTBOX_FLAG), 0);
    }

    #[test]
    fn external_stop_waits_for_next_tick_and_is_idempotent() {
        let (mut s, _keys, _) = scheduler(MemStorage::new());
        s.start_guest();
        s.request_stop();
        assert!(s.machine().state.running);
        s.tick();
        assert!(!s.machine().state.running);

        let before = s.machine().state;
        s.stop_guest();
        assert_eq!(s.machine().state, before);
    }

    #[test]
    fn monitor_gets_keys_when_stopped() {
        let (mut s, keys, _) = scheduler(MemStorage::new());
        for b in b"z80" {
            keys.send(*b).unwrap();
        }
        keys.send(KEY_ENTER).unwrap();
        for _ in 0..4 {
            s.tick();
        }
        assert_eq!(s.machine().state.arch, ArchMode::Z80);
    }

    #[test]
    fn mailbox_serviced_in_both_states() {
        let (mut s, _keys, _) = scheduler(MemStorage::new());
        s.machine().bus.write_u16(INBOX_DATA, 0x8000);
        s.machine().bus.write_str(0x8004, "missing.bin");
        s.machine().poke(INBOX_FLAG, 0x02);
        s.tick();
        assert_eq!(s.machine().peek(INBOX_FLAG), Status::NoSuchFile.reply());

        s.start_guest();
        s.machine().poke(INBOX_FLAG, 0x02);
        s.tick();
        assert_eq!(s.machine().peek(INBOX_FLAG), Status::NoSuchFile.reply());
    }

    #[test]
    fn guest_reset_request() {
        let (mut s, _keys, _) = scheduler(MemStorage::new());
        s.start_guest();
        s.machine().poke(0x4000, 0x99);
        s.machine().poke(INBOX_FLAG, CMD_RESET);
        s.tick();
        assert!(!s.machine().state.running);
        assert_eq!(s.machine().peek(0x4000), 0);
        assert_eq!(s.machine().peek(INBOX_FLAG), 0);
    }
}
