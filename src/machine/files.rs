// Bus <-> storage transfers shared by the monitor commands and the
// mailbox services.

use std::io::{Read, Write};

use super::memory::{MemoryBus, MEMORY_SIZE};
use super::status::Status;
use crate::storage::Storage;

/// Copy `name` into memory at `addr`. Stops at the top of memory.
/// Returns the number of bytes placed.
pub fn load(bus: &MemoryBus, storage: &dyn Storage, name: &str, addr: u16) -> Result<usize, Status> {
    if name.is_empty() {
        return Err(Status::MissingOperand);
    }
    let reader = storage.open_read(name)?;
    let room = (MEMORY_SIZE - addr as usize) as u64;
    if let Ok(size) = storage.size(name) {
        if size > room {
            log::debug!("{name}: {size} bytes, only {room} fit at {addr:#06x}");
        }
    }
    let mut data = Vec::new();
    reader
        .take(room)
        .read_to_end(&mut data)
        .map_err(|_| Status::CannotOpen)?;
    Ok(bus.load(addr, &data))
}

/// Write the inclusive range `start..=end` to a new file.
pub fn save(
    bus: &MemoryBus,
    storage: &dyn Storage,
    name: &str,
    start: u16,
    end: u16,
) -> Result<(), Status> {
    if end < start {
        return Err(Status::InvalidAddressRange);
    }
    if name.is_empty() {
        return Err(Status::MissingOperand);
    }
    if storage.exists(name) {
        return Err(Status::FileAlreadyExists);
    }
    let mut writer = storage.open_write(name)?;
    writer
        .write_all(&bus.dump(start, end))
        .and_then(|_| writer.flush())
        .map_err(|_| Status::CannotOpen)
}

pub fn delete(storage: &dyn Storage, name: &str) -> Result<(), Status> {
    if name.is_empty() {
        return Err(Status::MissingOperand);
    }
    if !storage.exists(name) {
        return Err(Status::NoSuchFile);
    }
    storage.delete(name)?;
    Ok(())
}
