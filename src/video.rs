// Tile map + glyph table → RGBA pixels.
//
// Reads the bus as it is right now. The guest may be writing tiles while
// we read, so a frame can mix old and new cells; nothing here locks.

use crate::machine::memory::{MemoryBus, CHARSET_BASE, TILE_COLS, TILE_MAP_BASE, TILE_ROWS};

pub const WIDTH: usize = TILE_COLS * 8;
pub const HEIGHT: usize = TILE_ROWS * 8;

/// Slot 6 is the background, slot 7 the plain foreground, 0-5 the
/// colour band used by tiles 8..=31.
pub type Palette = [[u8; 4]; 8];

pub const BACKGROUND: usize = 6;
pub const FOREGROUND: usize = 7;

/// Two bits per channel on the real board; expanded to 8 here.
pub const DEFAULT_PALETTE: Palette = [
    [0x00, 0xFF, 0x00, 0xFF], // green
    [0xFF, 0x00, 0x00, 0xFF], // red
    [0x00, 0x00, 0xFF, 0xFF], // blue
    [0xFF, 0xFF, 0x00, 0xFF], // yellow
    [0x00, 0xFF, 0xFF, 0xFF], // cyan
    [0xFF, 0x00, 0xFF, 0xFF], // magenta
    [0x00, 0x00, 0x00, 0xFF], // black
    [0xFF, 0xFF, 0xFF, 0xFF], // white
];

/// One finished raster. Never kept past the draw that consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    /// RGBA8, row-major.
    pub pixels: Vec<u8>,
}

pub fn foreground_slot(tile: u8) -> usize {
    match tile {
        8..=31 => (tile as usize - 8) % 6,
        _ => FOREGROUND,
    }
}

#[derive(Debug, Clone)]
pub struct Raster {
    pub palette: Palette,
    /// Emit every glyph row twice (320x480).
    pub scan_double: bool,
}

impl Default for Raster {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE,
            scan_double: true,
        }
    }
}

impl Raster {
    pub fn new(scan_double: bool) -> Self {
        Self {
            scan_double,
            ..Self::default()
        }
    }

    pub fn height(&self) -> usize {
        if self.scan_double {
            HEIGHT * 2
        } else {
            HEIGHT
        }
    }

    pub fn render(&self, bus: &MemoryBus) -> Frame {
        let height = self.height();
        let mut pixels = vec![0u8; WIDTH * height * 4];
        let bg = self.palette[BACKGROUND];
        let row_bytes = WIDTH * 4;
        let repeat = if self.scan_double { 2 } else { 1 };

        for ty in 0..TILE_ROWS {
            for line in 0..8 {
                let y = (ty * 8 + line) * repeat;
                let row = &mut pixels[y * row_bytes..(y + 1) * row_bytes];

                for tx in 0..TILE_COLS {
                    let tile = bus.read(TILE_MAP_BASE + (ty * TILE_COLS + tx) as u16);
                    let bits = if tile == 0 {
                        0
                    } else {
                        bus.read(CHARSET_BASE + tile as u16 * 8 + line as u16)
                    };
                    let fg = self.palette[foreground_slot(tile)];

                    for p in 0..8 {
                        let colour = if bits & (0x80 >> p) != 0 { fg } else { bg };
                        let at = (tx * 8 + p) * 4;
                        row[at..at + 4].copy_from_slice(&colour);
                    }
                }

                if self.scan_double {
                    pixels.copy_within(y * row_bytes..(y + 1) * row_bytes, (y + 1) * row_bytes);
                }
            }
        }

        Frame {
            width: WIDTH as u32,
            height: height as u32,
            pixels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::charset::CHARSET;

    fn bus_with_charset() -> MemoryBus {
        let bus = MemoryBus::new();
        bus.load(CHARSET_BASE, &CHARSET);
        bus
    }

    fn pixel(f: &Frame, x: usize, y: usize) -> [u8; 4] {
        let at = (y * f.width as usize + x) * 4;
        f.pixels[at..at + 4].try_into().unwrap()
    }

    #[test]
    fn same_memory_same_frame() {
        let bus = bus_with_charset();
        for i in 0..1200u16 {
            bus.write(TILE_MAP_BASE + i, (i % 256) as u8);
        }
        let r = Raster::default();
        assert_eq!(r.render(&bus), r.render(&bus));
    }

    #[test]
    fn colour_band() {
        assert_eq!(foreground_slot(8), 0);
        assert_eq!(foreground_slot(13), 5);
        assert_eq!(foreground_slot(14), 0);
        assert_eq!(foreground_slot(31), (31 - 8) % 6);
        assert_eq!(foreground_slot(7), FOREGROUND);
        assert_eq!(foreground_slot(32), FOREGROUND);
        assert_eq!(foreground_slot(b'A'), FOREGROUND);
    }

    #[test]
    fn tile_zero_is_blank() {
        // Glyph 0 has bits set, but the tile still draws as background.
        let bus = bus_with_charset();
        assert_ne!(CHARSET[..8], [0u8; 8]);
        let f = Raster::new(false).render(&bus);
        assert!(f.pixels.chunks(4).all(|p| p == DEFAULT_PALETTE[BACKGROUND]));
    }

    #[test]
    fn solid_tile_uses_its_colour() {
        let bus = MemoryBus::new();
        bus.fill(CHARSET_BASE + 9 * 8, 8, 0xFF);
        bus.fill(CHARSET_BASE + 200 * 8, 8, 0x80);
        bus.write(TILE_MAP_BASE, 9);
        bus.write(TILE_MAP_BASE + 1, 200);

        let f = Raster::new(false).render(&bus);
        assert_eq!((f.width, f.height), (320, 240));
        assert_eq!(pixel(&f, 0, 0), DEFAULT_PALETTE[1]);
        assert_eq!(pixel(&f, 7, 7), DEFAULT_PALETTE[1]);
        assert_eq!(pixel(&f, 8, 3), DEFAULT_PALETTE[FOREGROUND]);
        assert_eq!(pixel(&f, 9, 3), DEFAULT_PALETTE[BACKGROUND]);
        assert_eq!(pixel(&f, 0, 8), DEFAULT_PALETTE[BACKGROUND]);
    }

    #[test]
    fn doubling_repeats_rows() {
        let bus = MemoryBus::new();
        bus.write(CHARSET_BASE + 65 * 8 + 1, 0xFF);
        bus.write(TILE_MAP_BASE, 65);

        let single = Raster::new(false).render(&bus);
        let double = Raster::new(true).render(&bus);
        assert_eq!(double.height, 480);
        assert_eq!(double.pixels.len(), 320 * 480 * 4);

        let row = 320 * 4;
        for y in 0..240 {
            let src = &single.pixels[y * row..(y + 1) * row];
            assert_eq!(&double.pixels[2 * y * row..(2 * y + 1) * row], src);
            assert_eq!(&double.pixels[(2 * y + 1) * row..(2 * y + 2) * row], src);
        }
        assert_eq!(pixel(&double, 0, 2), DEFAULT_PALETTE[FOREGROUND]);
        assert_eq!(pixel(&double, 0, 3), DEFAULT_PALETTE[FOREGROUND]);
    }
}
