// Guest → host service requests.
//
// The guest stores a payload pointer at INBOX_DATA and then a command
// code in 1..=0x7F at INBOX_FLAG. Once per tick the host picks it up,
// does the work, and overwrites the flag with 0x00 (ok) or status + 0x80.
// The flag byte is the only synchronisation; it is written last.
//
//   01  sound        no-op
//   02  load         +0 start (word), +2 bytes read (word, out), +4 name
//   03  save         +0 start (word), +2 length (word), +4 name
//   04  delete       +0 name
//   05  open dir     payload ignored
//   06  next entry   +0 size (u32, out), +4 name (out)
//   7F  reset        whole machine, no reply

use super::files;
use super::memory::{MemoryBus, INBOX_DATA, INBOX_FLAG};
use super::status::Status;
use crate::storage::{EntryIter, Storage};

pub const CMD_SOUND: u8 = 0x01;
pub const CMD_LOAD: u8 = 0x02;
pub const CMD_SAVE: u8 = 0x03;
pub const CMD_DELETE: u8 = 0x04;
pub const CMD_OPEN_DIR: u8 = 0x05;
pub const CMD_NEXT_ENTRY: u8 = 0x06;
pub const CMD_RESET: u8 = 0x7F;

/// Longest file name a guest may pass.
pub const MAX_NAME: usize = 38;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailboxOutcome {
    /// Flag was 0, or still holds an earlier reply.
    Idle,
    /// Reply byte written to the flag.
    Replied(u8),
    /// Guest asked for a full system reset.
    Reset,
}

/// Host side of the inbox. Holds the single directory cursor; a new
/// "open directory" replaces whatever was open.
#[derive(Default)]
pub struct Mailbox {
    cursor: Option<EntryIter>,
}

impl Mailbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn close_directory(&mut self) {
        self.cursor = None;
    }

    pub fn service(&mut self, bus: &MemoryBus, storage: &dyn Storage) -> MailboxOutcome {
        let flag = bus.read(INBOX_FLAG);
        if flag == 0 || flag >= 0x80 {
            return MailboxOutcome::Idle;
        }

        let addr = bus.read_u16(INBOX_DATA);
        log::debug!("mailbox: command {flag:#04x}, payload at {addr:#06x}");

        let result = match flag {
            CMD_SOUND => Ok(()),
            CMD_LOAD => self.load(bus, storage, addr),
            CMD_SAVE => self.save(bus, storage, addr),
            CMD_DELETE => read_name(bus, addr).and_then(|name| files::delete(storage, &name)),
            CMD_OPEN_DIR => self.open_directory(storage),
            CMD_NEXT_ENTRY => self.next_entry(bus, addr),
            CMD_RESET => return MailboxOutcome::Reset,
            other => {
                log::warn!("mailbox: unknown command {other:#04x}");
                Err(Status::UnknownCommand)
            }
        };

        let reply = match result {
            Ok(()) => 0x00,
            Err(status) => {
                log::debug!("mailbox: command {flag:#04x} failed: {status}");
                status.reply()
            }
        };
        bus.write(INBOX_FLAG, reply);
        MailboxOutcome::Replied(reply)
    }

    fn load(&self, bus: &MemoryBus, storage: &dyn Storage, addr: u16) -> Result<(), Status> {
        let start = bus.read_u16(addr);
        let name = read_name(bus, addr.wrapping_add(4))?;
        let n = files::load(bus, storage, &name, start)?;
        // A full 64 KiB image reports 0, as the firmware did.
        bus.write_u16(addr.wrapping_add(2), n as u16);
        Ok(())
    }

    fn save(&self, bus: &MemoryBus, storage: &dyn Storage, addr: u16) -> Result<(), Status> {
        let start = bus.read_u16(addr);
        let len = bus.read_u16(addr.wrapping_add(2));
        let name = read_name(bus, addr.wrapping_add(4))?;
        if len == 0 {
            return Err(Status::InvalidAddressRange);
        }
        let end = u16::try_from(start as u32 + len as u32 - 1)
            .map_err(|_| Status::InvalidAddressRange)?;
        files::save(bus, storage, &name, start, end)
    }

    fn open_directory(&mut self, storage: &dyn Storage) -> Result<(), Status> {
        self.cursor = Some(storage.entries()?);
        Ok(())
    }

    fn next_entry(&mut self, bus: &MemoryBus, addr: u16) -> Result<(), Status> {
        let entry = match self.cursor.as_mut().and_then(|c| c.next()) {
            Some(e) => e,
            None => {
                self.cursor = None;
                return Err(Status::EndOfDirectory);
            }
        };
        bus.write_u32(addr, entry.size.min(u32::MAX as u64) as u32);
        bus.write_str(addr.wrapping_add(4), clamp_name(&entry.name));
        Ok(())
    }
}

/// Longest prefix of `name` that fits the guest's name buffer, cut on a
/// character boundary.
fn clamp_name(name: &str) -> &str {
    if name.len() <= MAX_NAME {
        return name;
    }
    let mut end = MAX_NAME;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    &name[..end]
}

/// Zero-terminated guest string, at most `MAX_NAME` characters.
fn read_name(bus: &MemoryBus, addr: u16) -> Result<String, Status> {
    match bus.read_str(addr, MAX_NAME) {
        Some(name) if name.is_empty() => Err(Status::MissingOperand),
        Some(name) => Ok(name),
        None => Err(Status::CannotOpen),
    }
}
