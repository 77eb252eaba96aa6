// 6502 backend on top of the `mos6502` crate. The crate has no interrupt
// entry point and no cycle counter, so both are done here.

use mos6502::cpu::CPU;
use mos6502::instruction::Nmos6502;
use mos6502::memory::Bus;
use mos6502::registers::{StackPointer, Status};

use super::CpuBackend;
use crate::machine::memory::{MemoryBus, NMI_VECTOR_6502, RESET_VECTOR_6502};

impl Bus for MemoryBus {
    fn get_byte(&mut self, address: u16) -> u8 {
        self.read(address)
    }

    fn set_byte(&mut self, address: u16, value: u8) {
        self.write(address, value);
    }
}

pub struct Mos6502Cpu {
    cpu: CPU<MemoryBus, Nmos6502>,
    /// Interrupt entry cycles not yet reported by `step_cycles`.
    owed: u32,
}

impl Mos6502Cpu {
    pub fn new(bus: MemoryBus) -> Self {
        let mut me = Self {
            cpu: CPU::new(bus, Nmos6502),
            owed: 0,
        };
        me.reset();
        me
    }

    fn push(&mut self, value: u8) {
        let sp = self.cpu.registers.stack_pointer.0;
        self.cpu.memory.write(0x0100 | sp as u16, value);
        self.cpu.registers.stack_pointer = StackPointer(sp.wrapping_sub(1));
    }
}

impl CpuBackend for Mos6502Cpu {
    fn name(&self) -> &'static str {
        "6502"
    }

    fn reset(&mut self) {
        let bus = self.cpu.memory.clone();
        self.cpu = CPU::new(bus, Nmos6502);
        self.cpu.registers.program_counter = self.cpu.memory.read_u16(RESET_VECTOR_6502);
        self.cpu.registers.stack_pointer = StackPointer(0xFD);
        self.cpu.registers.status.insert(Status::PS_DISABLE_INTERRUPTS);
        self.owed = 0;
    }

    fn step_cycles(&mut self, budget: u32) -> u32 {
        let mut spent = std::mem::take(&mut self.owed);
        while spent < budget {
            let op = self.cpu.memory.read(self.cpu.registers.program_counter);
            spent += OPCODE_CYCLES[op as usize] as u32;
            self.cpu.single_step();
        }
        spent
    }

    /// PC high, PC low, status (B clear), then jump through 0xFFFA.
    fn nmi(&mut self) {
        let pc = self.cpu.registers.program_counter;
        self.push((pc >> 8) as u8);
        self.push(pc as u8);
        let status_byte = (self.cpu.registers.status.bits() | 0x20) & !0x10;
        self.push(status_byte);
        self.cpu.registers.status.insert(Status::PS_DISABLE_INTERRUPTS);
        self.cpu.registers.program_counter = self.cpu.memory.read_u16(NMI_VECTOR_6502);
        self.owed += 7;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
//  Approximate 6502 cycle counts per opcode
// ─────────────────────────────────────────────────────────────────────────────

static OPCODE_CYCLES: [u8; 256] = [
    //0  1  2  3  4  5  6  7  8  9  A  B  C  D  E  F
    7, 6, 2, 8, 3, 3, 5, 5, 3, 2, 2, 2, 4, 4, 6, 6, // 0x
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, // 1x
    6, 6, 2, 8, 3, 3, 5, 5, 4, 2, 2, 2, 4, 4, 6, 6, // 2x
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, // 3x
    6, 6, 2, 8, 3, 3, 5, 5, 3, 2, 2, 2, 3, 4, 6, 6, // 4x
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, // 5x
    6, 6, 2, 8, 3, 3, 5, 5, 4, 2, 2, 2, 5, 4, 6, 6, // 6x
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, // 7x
    2, 6, 2, 6, 3, 3, 3, 3, 2, 2, 2, 2, 4, 4, 4, 4, // 8x
    2, 6, 2, 6, 4, 4, 4, 4, 2, 5, 2, 5, 5, 5, 5, 5, // 9x
    2, 6, 2, 6, 3, 3, 3, 3, 2, 2, 2, 2, 4, 4, 4, 4, // Ax
    2, 5, 2, 5, 4, 4, 4, 4, 2, 4, 2, 4, 4, 4, 4, 4, // Bx
    2, 6, 2, 8, 3, 3, 5, 5, 2, 2, 2, 2, 4, 4, 6, 6, // Cx
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, // Dx
    2, 6, 2, 8, 3, 3, 5, 5, 2, 2, 2, 2, 4, 4, 6, 6, // Ex
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, // Fx
];
