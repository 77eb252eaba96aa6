// Status codes shared by the monitor's status line and mailbox replies.
// The numeric values are what guest binaries test for.

use std::fmt;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ready,
    UnknownCommand,
    NoSuchFile,
    CannotOpen,
    MissingOperand,
    FileAlreadyExists,
    InvalidAddressRange,
    EndOfDirectory,
}

impl Status {
    pub fn code(self) -> u8 {
        match self {
            Status::Ready => 2,
            Status::UnknownCommand => 3,
            Status::NoSuchFile => 4,
            Status::CannotOpen => 5,
            Status::MissingOperand => 6,
            Status::FileAlreadyExists => 8,
            Status::InvalidAddressRange => 9,
            Status::EndOfDirectory => 11,
        }
    }

    /// Byte written back into the inbox flag when a request fails.
    pub fn reply(self) -> u8 {
        self.code() + 0x80
    }

    pub fn message(self) -> &'static str {
        match self {
            Status::Ready => "Alright, done!",
            Status::UnknownCommand => "Darn, unrecognized command",
            Status::NoSuchFile => "Oops, file doesn't seem to exist",
            Status::CannotOpen => "Oops, couldn't open the file",
            Status::MissingOperand => "Oops, missing an operand!!",
            Status::FileAlreadyExists => "The file already exists!",
            Status::InvalidAddressRange => "Oops, invalid address range!",
            Status::EndOfDirectory => "End of directory",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl From<io::Error> for Status {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => Status::NoSuchFile,
            io::ErrorKind::AlreadyExists => Status::FileAlreadyExists,
            _ => Status::CannotOpen,
        }
    }
}
