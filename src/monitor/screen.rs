// Tile-map drawing for the monitor. Coordinates are 1-based cells on the
// 40x30 map, the way the firmware screens were laid out:
//
//   row 1, 26, 30        frame bars
//   col 1, 40            frame bars
//   rows 2-25, cols 2-39 work area
//   row 27               status line
//   row 29               edit line

use crate::machine::charset::BANNER;
use crate::machine::memory::{MemoryBus, TILE_COLS, TILE_MAP_BASE, TILE_ROWS};
use crate::machine::state::{ArchMode, ClockSpeed};
use crate::machine::status::Status;

pub const STATUS_ROW: u8 = 27;
pub const EDIT_ROW: u8 = 29;
pub const FIRST_ROW: u8 = 2;
pub const LAST_ROW: u8 = 25;

const BAR_H: u8 = 3;
const BAR_BOTTOM: u8 = 131;
const BAR_V: u8 = 160;

pub fn put(bus: &MemoryBus, x: u8, y: u8, tile: u8) {
    let x = x.clamp(1, TILE_COLS as u8) as u16;
    let y = y.clamp(1, TILE_ROWS as u8) as u16;
    bus.write(TILE_MAP_BASE + (y - 1) * TILE_COLS as u16 + (x - 1), tile);
}

#[cfg(test)]
pub fn get(bus: &MemoryBus, x: u8, y: u8) -> u8 {
    bus.read(TILE_MAP_BASE + (y as u16 - 1) * TILE_COLS as u16 + (x as u16 - 1))
}

/// Print inside the frame; anything outside columns 2-39 is dropped.
pub fn print(bus: &MemoryBus, x: u8, y: u8, text: &str) {
    for (i, b) in text.bytes().enumerate() {
        let cx = x as usize + i;
        if cx > 1 && cx < TILE_COLS {
            put(bus, cx as u8, y, b);
        }
    }
}

pub fn clear_line(bus: &MemoryBus, y: u8) {
    for x in 2..=39 {
        put(bus, x, y, b' ');
    }
}

/// Clear the work area only.
pub fn cls(bus: &MemoryBus) {
    for y in FIRST_ROW..=LAST_ROW {
        clear_line(bus, y);
    }
}

/// Clear the whole tile map, frame included.
pub fn clear_all(bus: &MemoryBus) {
    bus.fill(TILE_MAP_BASE, TILE_COLS * TILE_ROWS, b' ');
}

pub fn frames(bus: &MemoryBus) {
    for x in 2..=39 {
        put(bus, x, 1, BAR_H);
        put(bus, x, 26, BAR_H);
        put(bus, x, 30, BAR_BOTTOM);
    }
    for y in 1..=30 {
        put(bus, 1, y, BAR_V);
        put(bus, 40, y, BAR_V);
    }
}

pub fn banner(bus: &MemoryBus) {
    for (row, tiles) in BANNER.chunks(38).enumerate() {
        for (col, &t) in tiles.iter().enumerate() {
            put(bus, col as u8 + 2, row as u8 + 3, t);
        }
    }
}

/// What the status line can say.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Status(Status),
    ScrollPrompt,
    Power,
    /// Machine name, CPU and clock.
    Banner(ArchMode, ClockSpeed),
}

pub fn notice(bus: &MemoryBus, n: Notice) {
    match n {
        Notice::Status(s) => center(bus, s.message()),
        Notice::ScrollPrompt => center(bus, "Press a key to scroll, ESC to stop"),
        Notice::Power => center(bus, "Feel the power of Dutch design!!"),
        Notice::Banner(arch, speed) => {
            clear_line(bus, STATUS_ROW);
            let cpu = match arch {
                ArchMode::Mos6502 => "6502, ",
                ArchMode::Z80 => " Z80, ",
            };
            let line = format!("      CERBERUS 2100: {cpu}{} MHz     ", speed.mhz());
            print(bus, 2, STATUS_ROW, &line);
        }
    }
}

fn center(bus: &MemoryBus, text: &str) {
    clear_line(bus, STATUS_ROW);
    let x = 2 + 38usize.saturating_sub(text.len()) / 2;
    print(bus, x as u8, STATUS_ROW, text);
}

/// Read a row of the work area back as text.
#[cfg(test)]
pub fn row_text(bus: &MemoryBus, y: u8) -> String {
    (2..=39).map(|x| get(bus, x, y) as char).collect()
}
