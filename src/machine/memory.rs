// 64K shared memory image. Every access goes through a cheap clonable
// handle so the machine thread, the CPU backends and the GUI raster pass
// can all see the same bytes without a lock (byte granularity only).

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

// ─────────────────────────────────────────────────────────────────────────────
//  Memory map
// ─────────────────────────────────────────────────────────────────────────────

pub const MEMORY_SIZE: usize = 0x10000;

/// Host → guest: set to 1 when a key is waiting in `OUTBOX_DATA`.
pub const OUTBOX_FLAG: u16 = 0x0200;
pub const OUTBOX_DATA: u16 = 0x0201;
/// Guest → host: command code, replaced by the reply once serviced.
pub const INBOX_FLAG: u16 = 0x0202;
/// Guest → host: word pointer to the command payload.
pub const INBOX_DATA: u16 = 0x0203;
/// Where `load` and `run` put and start guest code by default.
pub const CODE_START: u16 = 0x0205;

pub const CHARSET_BASE: u16 = 0xF000;
pub const CHARSET_SIZE: usize = 2048;
pub const TILE_MAP_BASE: u16 = 0xF800;
pub const TILE_COLS: usize = 40;
pub const TILE_ROWS: usize = 30;

// 6502 side
pub const NMI_VECTOR_6502: u16 = 0xFFFA;
pub const RESET_VECTOR_6502: u16 = 0xFFFC;
/// Default NMI handler, a lone RTI just past the tile map.
pub const NMI_HANDLER_6502: u16 = 0xFCB0;

// Z80 side
pub const RESET_ENTRY_Z80: u16 = 0x0000;
pub const NMI_ENTRY_Z80: u16 = 0x0066;

// ─────────────────────────────────────────────────────────────────────────────
//  Bus
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MemoryBus {
    cells: Arc<[AtomicU8]>,
}

impl MemoryBus {
    pub fn new() -> Self {
        let cells: Vec<AtomicU8> = (0..MEMORY_SIZE).map(|_| AtomicU8::new(0)).collect();
        Self {
            cells: cells.into(),
        }
    }

    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.cells[addr as usize].load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write(&self, addr: u16, value: u8) {
        self.cells[addr as usize].store(value, Ordering::Relaxed);
    }

    /// Little-endian word; the high byte of 0xFFFF lives at 0x0000.
    pub fn read_u16(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    pub fn write_u16(&self, addr: u16, value: u16) {
        self.write(addr, value as u8);
        self.write(addr.wrapping_add(1), (value >> 8) as u8);
    }

    pub fn write_u32(&self, addr: u16, value: u32) {
        for (i, b) in value.to_le_bytes().iter().enumerate() {
            self.write(addr.wrapping_add(i as u16), *b);
        }
    }

    /// Read a zero-terminated string of at most `max` characters.
    /// Returns `None` if no terminator shows up within `max + 1` bytes.
    pub fn read_str(&self, addr: u16, max: usize) -> Option<String> {
        let mut out = String::new();
        for i in 0..=max {
            let b = self.read(addr.wrapping_add(i as u16));
            if b == 0 {
                return Some(out);
            }
            out.push(b as char);
        }
        None
    }

    /// Write `text` followed by a zero terminator.
    pub fn write_str(&self, addr: u16, text: &str) {
        let mut a = addr;
        for b in text.bytes() {
            self.write(a, b);
            a = a.wrapping_add(1);
        }
        self.write(a, 0);
    }

    /// Copy `data` in starting at `addr`. Stops when the address wraps
    /// back to 0x0000 and returns the number of bytes stored.
    pub fn load(&self, addr: u16, data: &[u8]) -> usize {
        let mut a = addr;
        let mut n = 0;
        for &b in data {
            self.write(a, b);
            n += 1;
            a = a.wrapping_add(1);
            if a == 0 {
                break;
            }
        }
        n
    }

    /// Inclusive range copy-out.
    pub fn dump(&self, start: u16, end: u16) -> Vec<u8> {
        (start..=end).map(|a| self.read(a)).collect()
    }

    pub fn fill(&self, start: u16, len: usize, value: u8) {
        for i in 0..len {
            self.write(start.wrapping_add(i as u16), value);
        }
    }

    pub fn clear(&self) {
        for cell in self.cells.iter() {
            cell.store(0, Ordering::Relaxed);
        }
    }
}

impl Default for MemoryBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_byte_reads_back() {
        let bus = MemoryBus::new();
        for a in 0..=0xFFFFu16 {
            let v = (a as u8) ^ (a >> 8) as u8 ^ 0x5A;
            bus.write(a, v);
            assert_eq!(bus.read(a), v);
        }
    }

    #[test]
    fn words_are_little_endian_and_wrap() {
        let bus = MemoryBus::new();
        bus.write_u16(0x1234, 0xBEEF);
        assert_eq!(bus.read(0x1234), 0xEF);
        assert_eq!(bus.read(0x1235), 0xBE);
        assert_eq!(bus.read_u16(0x1234), 0xBEEF);

        bus.write_u16(0xFFFF, 0xA55A);
        assert_eq!(bus.read(0xFFFF), 0x5A);
        assert_eq!(bus.read(0x0000), 0xA5);
        assert_eq!(bus.read_u16(0xFFFF), 0xA55A);
    }

    #[test]
    fn clones_share_memory() {
        let bus = MemoryBus::new();
        let other = bus.clone();
        other.write(OUTBOX_FLAG, 1);
        assert_eq!(bus.read(OUTBOX_FLAG), 1);
    }

    #[test]
    fn strings_are_bounded() {
        let bus = MemoryBus::new();
        bus.write_str(0x3000, "hello.bin");
        assert_eq!(bus.read_str(0x3000, 38).as_deref(), Some("hello.bin"));
        assert_eq!(bus.read_str(0x3000, 4), None);
        assert_eq!(bus.read_str(0x3000, 9).as_deref(), Some("hello.bin"));
    }

    #[test]
    fn load_stops_at_wrap() {
        let bus = MemoryBus::new();
        let n = bus.load(0xFFFE, &[1, 2, 3, 4]);
        assert_eq!(n, 2);
        assert_eq!(bus.read(0xFFFE), 1);
        assert_eq!(bus.read(0xFFFF), 2);
        assert_eq!(bus.read(0x0000), 0);
    }

    #[test]
    fn u32_is_little_endian() {
        let bus = MemoryBus::new();
        bus.write_u32(0x4000, 0x0102_0304);
        assert_eq!(bus.dump(0x4000, 0x4003), vec![4, 3, 2, 1]);
    }
}
