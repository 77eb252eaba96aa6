// Symbolic key codes shared by the keyboard front end, the monitor and
// guest programs reading the outbox. Printable ASCII passes through.

use crossbeam_channel::Receiver;

pub const KEY_STOP: u8 = 0x01;
pub const KEY_BACKSPACE: u8 = 0x08;
pub const KEY_LEFT: u8 = 0x08;
pub const KEY_DOWN: u8 = 0x0A;
pub const KEY_UP: u8 = 0x0B;
pub const KEY_ENTER: u8 = 0x0D;
pub const KEY_RIGHT: u8 = 0x15;
pub const KEY_ESCAPE: u8 = 0x1B;

/// Yields at most one key per poll, never blocks.
pub trait InputSource: Send {
    fn poll(&mut self) -> Option<u8>;
}

impl InputSource for Receiver<u8> {
    fn poll(&mut self) -> Option<u8> {
        self.try_recv().ok()
    }
}

pub fn is_printable(key: u8) -> bool {
    (0x20..0x7F).contains(&key)
}
