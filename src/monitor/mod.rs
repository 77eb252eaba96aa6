// The resident monitor: a one-line command shell drawn into tile memory.
//
// It only runs while the guest is stopped and drives the machine through
// the same primitives the rest of the host uses (peek/poke, load/save,
// start/stop). All numbers typed at the prompt are hexadecimal.

pub mod screen;

use std::iter::Peekable;

use crate::input::{self, KEY_BACKSPACE, KEY_DOWN, KEY_ENTER, KEY_ESCAPE, KEY_UP};
use crate::machine::memory::CODE_START;
use crate::machine::state::{ArchMode, ClockSpeed};
use crate::machine::status::Status;
use crate::machine::Machine;
use crate::storage::EntryIter;
use screen::{Notice, EDIT_ROW};

/// Tile drawn where the cursor sits.
const CURSOR_TILE: u8 = b'_';

// ─────────────────────────────────────────────────────────────────────────────
//  Edit line
// ─────────────────────────────────────────────────────────────────────────────

pub const LINE_WIDTH: usize = 38;

/// Cell 0 is the prompt; the cursor is a 0 byte at `pos`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditLine {
    cells: [u8; LINE_WIDTH],
    pos: usize,
}

impl EditLine {
    pub fn new() -> Self {
        let mut cells = [b' '; LINE_WIDTH];
        cells[0] = b'>';
        cells[1] = 0;
        Self { cells, pos: 1 }
    }

    pub fn insert(&mut self, ch: u8) {
        self.cells[self.pos] = ch;
        if self.pos < LINE_WIDTH - 1 {
            self.pos += 1;
        }
        self.cells[self.pos] = 0;
    }

    pub fn backspace(&mut self) {
        self.cells[self.pos] = b' ';
        if self.pos > 1 {
            self.pos -= 1;
        }
        self.cells[self.pos] = 0;
    }

    /// Everything typed before the cursor.
    pub fn text(&self) -> String {
        self.cells[1..self.pos].iter().map(|&b| b as char).collect()
    }

    pub fn draw(&self, m: &Machine) {
        for (i, &c) in self.cells.iter().enumerate() {
            let tile = if c == 0 { CURSOR_TILE } else { c };
            screen::put(&m.bus, i as u8 + 2, EDIT_ROW, tile);
        }
    }
}

impl Default for EditLine {
    fn default() -> Self {
        Self::new()
    }
}

/// Words split on spaces and commas.
pub fn words(line: &str) -> Vec<&str> {
    line.split([' ', ','])
        .filter(|w| !w.is_empty())
        .collect()
}

/// Leading hex digits, optional `0x`. Junk parses as 0; wide values keep
/// their low 16 bits.
pub fn parse_hex(s: &str) -> u16 {
    let s = s.trim();
    let s = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    s.chars()
        .map_while(|c| c.to_digit(16))
        .fold(0u32, |acc, d| acc.wrapping_mul(16).wrapping_add(d)) as u16
}

// ─────────────────────────────────────────────────────────────────────────────
//  Monitor
// ─────────────────────────────────────────────────────────────────────────────

/// An in-progress `dir` that is waiting for a key between pages.
struct DirPager {
    entries: Peekable<EntryIter>,
}

pub struct Monitor {
    line: EditLine,
    previous: EditLine,
    pager: Option<DirPager>,
}

impl Monitor {
    pub fn new() -> Self {
        Self {
            line: EditLine::new(),
            previous: EditLine::new(),
            pager: None,
        }
    }

    #[cfg(test)]
    pub fn line(&self) -> &EditLine {
        &self.line
    }

    #[cfg(test)]
    pub fn paging(&self) -> bool {
        self.pager.is_some()
    }

    /// Full monitor screen: frame, banner, status bar, empty prompt.
    pub fn restore(&mut self, m: &Machine) {
        self.pager = None;
        screen::clear_all(&m.bus);
        screen::frames(&m.bus);
        screen::banner(&m.bus);
        screen::notice(&m.bus, Notice::Banner(m.state.arch, m.state.speed));
        self.line = EditLine::new();
        self.line.draw(m);
    }

    pub fn handle_key(&mut self, m: &mut Machine, key: u8) {
        if self.pager.is_some() {
            self.page_key(m, key);
            return;
        }

        match key {
            KEY_ENTER => self.enter(m),
            KEY_UP => {
                self.line = self.previous.clone();
                self.line.draw(m);
            }
            KEY_DOWN => {
                self.line = EditLine::new();
                self.line.draw(m);
            }
            KEY_BACKSPACE => {
                self.line.backspace();
                self.line.draw(m);
            }
            k if input::is_printable(k) => {
                self.line.insert(k);
                self.line.draw(m);
            }
            _ => {}
        }
    }

    fn enter(&mut self, m: &mut Machine) {
        let text = self.line.text();
        let args = words(&text);
        let Some(first) = args.first() else {
            return;
        };
        let cmd = first.to_ascii_lowercase();
        let arg = |i: usize| args.get(i).copied();
        log::debug!("monitor: {text}");

        let result: Option<Notice> = match cmd.as_str() {
            c if c.starts_with("0x") => {
                poke_bytes(m, &args);
                None
            }
            "list" => {
                screen::cls(&m.bus);
                list(m, arg(1).map(parse_hex).unwrap_or(0));
                Some(Notice::Status(Status::Ready))
            }
            "cls" => {
                screen::cls(&m.bus);
                Some(Notice::Status(Status::Ready))
            }
            "6502" => {
                m.set_arch(ArchMode::Mos6502);
                Some(Notice::Status(Status::Ready))
            }
            "z80" => {
                m.set_arch(ArchMode::Z80);
                Some(Notice::Status(Status::Ready))
            }
            "fast" => {
                m.set_speed(ClockSpeed::Fast);
                Some(Notice::Status(Status::Ready))
            }
            "slow" => {
                m.set_speed(ClockSpeed::Slow);
                Some(Notice::Status(Status::Ready))
            }
            "reset" => {
                log::info!("System reset from monitor");
                m.power_on();
                self.restore(m);
                return;
            }
            "dir" => self.start_dir(m),
            "del" => Some(outcome(m.delete_file(arg(1).unwrap_or("")))),
            "load" => {
                let addr = arg(2).map(parse_hex).unwrap_or(CODE_START);
                Some(outcome(m.load_file(arg(1).unwrap_or(""), addr).map(|_| ())))
            }
            "run" => {
                self.previous = self.line.clone();
                self.run(m);
                None
            }
            "basic6502" => self.basic(m, ArchMode::Mos6502, "basic65.bin"),
            "basicz80" => self.basic(m, ArchMode::Z80, "basicz80.bin"),
            "save" => Some(match (arg(1), arg(2)) {
                (Some(start), Some(end)) => outcome(m.save_file(
                    arg(3).unwrap_or(""),
                    parse_hex(start),
                    parse_hex(end),
                )),
                _ => Notice::Status(Status::MissingOperand),
            }),
            "move" => Some(match (arg(1), arg(2), arg(3)) {
                (Some(s), Some(e), Some(d)) => {
                    outcome(move_block(m, parse_hex(s), parse_hex(e), parse_hex(d)))
                }
                _ => Notice::Status(Status::MissingOperand),
            }),
            "help" | "?" => {
                help(m);
                Some(Notice::Power)
            }
            _ => Some(Notice::Status(Status::UnknownCommand)),
        };

        if let Some(n) = result {
            screen::notice(&m.bus, n);
        }
        if !m.state.running {
            self.previous = self.line.clone();
            self.line = EditLine::new();
            if self.pager.is_none() {
                self.line.draw(m);
            }
        }
    }

    fn run(&mut self, m: &mut Machine) {
        screen::clear_all(&m.bus);
        m.start_guest();
    }

    fn basic(&mut self, m: &mut Machine, arch: ArchMode, image: &str) -> Option<Notice> {
        m.set_arch(arch);
        match m.load_file(image, CODE_START) {
            Ok(_) => {
                self.previous = self.line.clone();
                self.run(m);
                None
            }
            Err(e) => Some(Notice::Status(e)),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    //  dir
    // ─────────────────────────────────────────────────────────────────────

    fn start_dir(&mut self, m: &Machine) -> Option<Notice> {
        screen::cls(&m.bus);
        match m.list_directory() {
            Ok(entries) => {
                self.pager = Some(DirPager {
                    entries: entries.peekable(),
                });
                self.next_page(m);
                None
            }
            Err(e) => Some(Notice::Status(e)),
        }
    }

    /// Fill the work area with the next page of entries. Leaves the pager
    /// open (with the scroll prompt up) only if more entries follow.
    fn next_page(&mut self, m: &Machine) {
        let Some(pager) = self.pager.as_mut() else {
            return;
        };
        let mut y = screen::FIRST_ROW;
        while let Some(e) = pager.entries.next() {
            screen::print(&m.bus, 3, y, &e.name);
            screen::print(&m.bus, 20, y, &e.size.to_string());
            if y < screen::LAST_ROW - 1 {
                y += 1;
            } else if pager.entries.peek().is_some() {
                screen::notice(&m.bus, Notice::ScrollPrompt);
                screen::clear_line(&m.bus, EDIT_ROW);
                return;
            }
        }
        self.finish_dir(m);
    }

    fn page_key(&mut self, m: &Machine, key: u8) {
        if key == KEY_ESCAPE {
            self.finish_dir(m);
        } else {
            screen::cls(&m.bus);
            self.next_page(m);
        }
    }

    fn finish_dir(&mut self, m: &Machine) {
        self.pager = None;
        screen::notice(&m.bus, Notice::Status(Status::Ready));
        self.line.draw(m);
    }
}

impl Default for Monitor {
    fn default() -> Self {
        Self::new()
    }
}

fn outcome(r: Result<(), Status>) -> Notice {
    Notice::Status(r.err().unwrap_or(Status::Ready))
}

/// `0xADDR b1 b2 ... [#CHK]`. The checksum is Fletcher-style over the
/// bytes; a mismatch flags the address on the frame bar.
fn poke_bytes(m: &Machine, args: &[&str]) {
    let addr_word = &args[0][2..];
    let mut addr = parse_hex(addr_word);
    let mut chk_a: u8 = 1;
    let mut chk_b: u8 = 0;
    for w in &args[1..] {
        if let Some(sum) = w.strip_prefix('#') {
            let expected = ((chk_a as u16) << 8) | chk_b as u16;
            if parse_hex(sum) != expected {
                log::warn!("checksum mismatch at 0x{addr_word}: want {expected:04X}");
                screen::print(&m.bus, 28, 26, addr_word);
            }
        } else {
            let data = parse_hex(w) as u8;
            m.poke(addr, data);
            chk_a = chk_a.wrapping_add(data);
            chk_b = chk_b.wrapping_add(chk_a);
            addr = addr.wrapping_add(1);
        }
    }
    screen::notice(&m.bus, Notice::Status(Status::Ready));
    screen::print(&m.bus, 28, screen::STATUS_ROW, addr_word);
}

/// Hex dump of the work area, eight bytes per row.
fn list(m: &Machine, start: u16) {
    let mut addr = start;
    for y in screen::FIRST_ROW..screen::LAST_ROW {
        screen::print(&m.bus, 3, y, &format!("0x{addr:04X}"));
        for j in 0..8u8 {
            screen::print(&m.bus, 12 + j * 3, y, &format!("{:02X}", m.peek(addr)));
            addr = addr.wrapping_add(1);
        }
    }
}

/// Copy `start..=end` to `dest`. The destination may not start inside
/// the source range.
fn move_block(m: &Machine, start: u16, end: u16, dest: u16) -> Result<(), Status> {
    if end < start || (start..=end).contains(&dest) {
        return Err(Status::InvalidAddressRange);
    }
    let mut d = dest;
    for a in start..=end {
        m.poke(d, m.peek(a));
        d = d.wrapping_add(1);
    }
    Ok(())
}

fn help(m: &Machine) {
    const LINES: &[(u8, &str)] = &[
        (3, "The Byte Attic's CERBERUS 2100 (tm)"),
        (3, "        AVAILABLE COMMANDS:"),
        (3, " (All numbers must be hexadecimal)"),
        (0, ""),
        (3, "0xADDR BYTE: Writes BYTE at ADDR"),
        (3, "list ADDR: Lists memory from ADDR"),
        (3, "cls: Clears the screen"),
        (3, "6502: Switches to 6502 CPU mode"),
        (3, "z80: Switches to Z80 CPU mode"),
        (3, "fast: Switches to 8MHz mode"),
        (3, "slow: Switches to 4MHz mode"),
        (3, "reset: Resets the system"),
        (3, "dir: Lists files on uSD card"),
        (3, "del FILE: Deletes FILE"),
        (3, "load FILE ADDR: Loads FILE at ADDR"),
        (3, "save ADDR1 ADDR2 FILE: Saves memory"),
        (5, "from ADDR1 to ADDR2 to FILE"),
        (3, "run: Executes code in memory"),
        (3, "move ADDR1 ADDR2 ADDR3: Moves bytes"),
        (5, "between ADDR1 & ADDR2 to ADDR3 on"),
        (3, "help / ?: Shows this help screen"),
        (3, "F12 key: Quits CPU program"),
    ];
    screen::cls(&m.bus);
    for (i, (x, text)) in LINES.iter().enumerate() {
        if *x > 0 {
            screen::print(&m.bus, *x, screen::FIRST_ROW + i as u8, text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::screen::{row_text, STATUS_ROW};
    use super::*;
    use crate::machine::testing::machine;
    use crate::storage::{MemStorage, Storage};

    fn type_line(mon: &mut Monitor, m: &mut Machine, text: &str) {
        for b in text.bytes() {
            mon.handle_key(m, b);
        }
        mon.handle_key(m, KEY_ENTER);
    }

    fn status(m: &Machine) -> String {
        row_text(&m.bus, STATUS_ROW).trim().to_string()
    }

    #[test]
    fn edit_line_keeps_prompt_and_cursor() {
        let mut l = EditLine::new();
        l.backspace();
        assert_eq!(l.text(), "");
        for _ in 0..50 {
            l.insert(b'a');
        }
        assert_eq!(l.text().len(), LINE_WIDTH - 2);
        l.backspace();
        assert_eq!(l.text().len(), LINE_WIDTH - 3);
    }

    #[test]
    fn hex_parsing_is_lenient() {
        assert_eq!(parse_hex("1F"), 0x1F);
        assert_eq!(parse_hex("0x2000"), 0x2000);
        assert_eq!(parse_hex("ffzz"), 0xFF);
        assert_eq!(parse_hex("zz"), 0);
        assert_eq!(parse_hex("12345"), 0x2345);
    }

    #[test]
    fn words_split_on_space_and_comma() {
        assert_eq!(words("  save 200,2ff  f.bin "), vec!["save", "200", "2ff", "f.bin"]);
    }

    #[test]
    fn poke_with_checksum() {
        let (mut m, _, _) = machine(MemStorage::new());
        let mut mon = Monitor::new();
        mon.restore(&m);
        // chkA: 1+0xA9=0xAA, +0x42=0xEC ; chkB: 0xAA, 0xAA+0xEC=0x96
        type_line(&mut mon, &mut m, "0x0300 a9 42 #ec96");
        assert_eq!(m.peek(0x300), 0xA9);
        assert_eq!(m.peek(0x301), 0x42);
        assert_eq!(screen::get(&m.bus, 28, 26), 3); // frame bar untouched
        assert!(status(&m).starts_with("Alright, done!"));

        type_line(&mut mon, &mut m, "0x0400 01 #0000");
        assert_eq!(screen::get(&m.bus, 28, 26), b'0');
    }

    #[test]
    fn unknown_command_and_previous_line() {
        let (mut m, _, _) = machine(MemStorage::new());
        let mut mon = Monitor::new();
        mon.restore(&m);
        type_line(&mut mon, &mut m, "frobnicate");
        assert_eq!(status(&m), "Darn, unrecognized command");
        assert_eq!(mon.line().text(), "");

        mon.handle_key(&mut m, KEY_UP);
        assert_eq!(mon.line().text(), "frobnicate");
        mon.handle_key(&mut m, KEY_DOWN);
        assert_eq!(mon.line().text(), "");
    }

    #[test]
    fn mode_commands() {
        let (mut m, _, _) = machine(MemStorage::new());
        let mut mon = Monitor::new();
        type_line(&mut mon, &mut m, "Z80");
        type_line(&mut mon, &mut m, "slow");
        assert_eq!(m.state.arch, ArchMode::Z80);
        assert_eq!(m.state.speed, ClockSpeed::Slow);
        type_line(&mut mon, &mut m, "6502");
        type_line(&mut mon, &mut m, "fast");
        assert_eq!(m.state.arch, ArchMode::Mos6502);
        assert_eq!(m.state.speed, ClockSpeed::Fast);
    }

    #[test]
    fn load_save_move() {
        let sd = MemStorage::new().with_file("prog.bin", &[1, 2, 3, 4]);
        let (mut m, _, _) = machine(sd.clone());
        let mut mon = Monitor::new();

        type_line(&mut mon, &mut m, "load prog.bin");
        assert_eq!(m.bus.dump(CODE_START, CODE_START + 3), vec![1, 2, 3, 4]);

        type_line(&mut mon, &mut m, "load prog.bin 1000");
        assert_eq!(m.peek(0x1003), 4);

        type_line(&mut mon, &mut m, "load nothing.bin");
        assert_eq!(status(&m), Status::NoSuchFile.message());

        type_line(&mut mon, &mut m, "move 1000 1003 2000");
        assert_eq!(m.bus.dump(0x2000, 0x2003), vec![1, 2, 3, 4]);
        type_line(&mut mon, &mut m, "move 1000 1003 1002");
        assert_eq!(status(&m), Status::InvalidAddressRange.message());
        type_line(&mut mon, &mut m, "move 1000");
        assert_eq!(status(&m), Status::MissingOperand.message());

        type_line(&mut mon, &mut m, "save 2000 2001 copy.bin");
        assert_eq!(sd.contents("copy.bin"), Some(vec![1, 2]));
        type_line(&mut mon, &mut m, "save 2000 2001 copy.bin");
        assert_eq!(status(&m), Status::FileAlreadyExists.message());
        type_line(&mut mon, &mut m, "save 2001 2000 other.bin");
        assert_eq!(status(&m), Status::InvalidAddressRange.message());

        type_line(&mut mon, &mut m, "del copy.bin");
        assert!(!sd.exists("copy.bin"));
        type_line(&mut mon, &mut m, "del");
        assert_eq!(status(&m), Status::MissingOperand.message());
    }

    #[test]
    fn run_hands_over_the_bus() {
        let (mut m, _, _) = machine(MemStorage::new());
        let mut mon = Monitor::new();
        mon.restore(&m);
        type_line(&mut mon, &mut m, "run");
        assert!(m.state.running);
        assert_eq!(row_text(&m.bus, 29).trim(), "");
    }

    #[test]
    fn basic_needs_its_image() {
        let (mut m, _, _) = machine(MemStorage::new());
        let mut mon = Monitor::new();
        type_line(&mut mon, &mut m, "basicz80");
        assert!(!m.state.running);
        assert_eq!(m.state.arch, ArchMode::Z80);

        let (mut m, _, _) = machine(MemStorage::new().with_file("basic65.bin", &[0xEA]));
        type_line(&mut mon, &mut m, "basic6502");
        assert!(m.state.running);
        assert_eq!(m.peek(CODE_START), 0xEA);
    }

    #[test]
    fn dir_pages_and_escape_stops() {
        let mut sd = MemStorage::new();
        for i in 0..30 {
            sd = sd.with_file(&format!("f{i:02}.bin"), &[0; 3]);
        }
        let (mut m, _, _) = machine(sd);
        let mut mon = Monitor::new();
        mon.restore(&m);

        type_line(&mut mon, &mut m, "dir");
        assert!(mon.paging());
        assert!(row_text(&m.bus, 2).starts_with(" f00.bin"));
        assert!(row_text(&m.bus, 24).starts_with(" f22.bin"));
        assert_eq!(status(&m), "Press a key to scroll, ESC to stop");

        mon.handle_key(&mut m, b' ');
        assert!(!mon.paging());
        assert!(row_text(&m.bus, 2).starts_with(" f23.bin"));
        assert_eq!(status(&m), Status::Ready.message());

        type_line(&mut mon, &mut m, "dir");
        mon.handle_key(&mut m, KEY_ESCAPE);
        assert!(!mon.paging());
        assert!(row_text(&m.bus, 2).starts_with(" f00.bin"));
    }

    #[test]
    fn reset_command_powers_on() {
        let (mut m, _, _) = machine(MemStorage::new());
        let mut mon = Monitor::new();
        m.poke(0x1234, 0x55);
        type_line(&mut mon, &mut m, "reset");
        assert_eq!(m.peek(0x1234), 0);
        assert!(row_text(&m.bus, 27).contains("CERBERUS 2100: 6502, 8 MHz"));
    }
}
