//! Opcode metadata tables for the LR35902.
//!
//! Execution dispatch is the exhaustive match in the CPU module; these
//! tables carry the per-slot metadata that the rest of the crate needs
//! without re-decoding: disassembly mnemonic, instruction length and the
//! documented cycle costs. Conditional control flow has two costs, one for
//! each branch outcome. CB-prefixed entries include the prefix byte in
//! their length and the prefix fetch in their cycle counts.
//!
//! Eleven primary slots are undefined on this CPU (there is no such
//! instruction, and fetching one locks up real hardware). Those slots are
//! populated with an explicit illegal marker so a table lookup is always
//! valid; executing one is a fatal `CpuError::IllegalOpcode`.

/// Static description of one opcode slot.
#[derive(Debug, Clone, Copy)]
pub struct OpInfo {
    /// Disassembly mnemonic, in data-sheet notation.
    pub mnemonic: &'static str,
    /// Instruction length in bytes, including the CB prefix where present.
    pub length: u8,
    /// Base cycle cost; for conditional control flow, the not-taken cost.
    pub cycles: u8,
    /// Taken cost for conditional control flow; equals `cycles` otherwise.
    pub cycles_taken: u8,
}

impl OpInfo {
    /// True for the undefined primary opcodes. Every defined instruction
    /// costs at least 4 cycles, so a zero cost marks an illegal slot.
    pub fn is_illegal(&self) -> bool {
        self.cycles == 0
    }
}

const fn op(mnemonic: &'static str, length: u8, cycles: u8) -> OpInfo {
    OpInfo {
        mnemonic,
        length,
        cycles,
        cycles_taken: cycles,
    }
}

const fn branch(mnemonic: &'static str, length: u8, not_taken: u8, taken: u8) -> OpInfo {
    OpInfo {
        mnemonic,
        length,
        cycles: not_taken,
        cycles_taken: taken,
    }
}

const fn illegal() -> OpInfo {
    OpInfo {
        mnemonic: "ILLEGAL",
        length: 1,
        cycles: 0,
        cycles_taken: 0,
    }
}

pub static OPCODES: [OpInfo; 256] = [
    op("NOP", 1, 4), // 0x00
    op("LD BC,d16", 3, 12), // 0x01
    op("LD (BC),A", 1, 8), // 0x02
    op("INC BC", 1, 8), // 0x03
    op("INC B", 1, 4), // 0x04
    op("DEC B", 1, 4), // 0x05
    op("LD B,d8", 2, 8), // 0x06
    op("RLCA", 1, 4), // 0x07
    op("LD (a16),SP", 3, 20), // 0x08
    op("ADD HL,BC", 1, 8), // 0x09
    op("LD A,(BC)", 1, 8), // 0x0A
    op("DEC BC", 1, 8), // 0x0B
    op("INC C", 1, 4), // 0x0C
    op("DEC C", 1, 4), // 0x0D
    op("LD C,d8", 2, 8), // 0x0E
    op("RRCA", 1, 4), // 0x0F
    op("STOP", 2, 4), // 0x10
    op("LD DE,d16", 3, 12), // 0x11
    op("LD (DE),A", 1, 8), // 0x12
    op("INC DE", 1, 8), // 0x13
    op("INC D", 1, 4), // 0x14
    op("DEC D", 1, 4), // 0x15
    op("LD D,d8", 2, 8), // 0x16
    op("RLA", 1, 4), // 0x17
    op("JR r8", 2, 12), // 0x18
    op("ADD HL,DE", 1, 8), // 0x19
    op("LD A,(DE)", 1, 8), // 0x1A
    op("DEC DE", 1, 8), // 0x1B
    op("INC E", 1, 4), // 0x1C
    op("DEC E", 1, 4), // 0x1D
    op("LD E,d8", 2, 8), // 0x1E
    op("RRA", 1, 4), // 0x1F
    branch("JR NZ,r8", 2, 8, 12), // 0x20
    op("LD HL,d16", 3, 12), // 0x21
    op("LD (HL+),A", 1, 8), // 0x22
    op("INC HL", 1, 8), // 0x23
    op("INC H", 1, 4), // 0x24
    op("DEC H", 1, 4), // 0x25
    op("LD H,d8", 2, 8), // 0x26
    op("DAA", 1, 4), // 0x27
    branch("JR Z,r8", 2, 8, 12), // 0x28
    op("ADD HL,HL", 1, 8), // 0x29
    op("LD A,(HL+)", 1, 8), // 0x2A
    op("DEC HL", 1, 8), // 0x2B
    op("INC L", 1, 4), // 0x2C
    op("DEC L", 1, 4), // 0x2D
    op("LD L,d8", 2, 8), // 0x2E
    op("CPL", 1, 4), // 0x2F
    branch("JR NC,r8", 2, 8, 12), // 0x30
    op("LD SP,d16", 3, 12), // 0x31
    op("LD (HL-),A", 1, 8), // 0x32
    op("INC SP", 1, 8), // 0x33
    op("INC (HL)", 1, 12), // 0x34
    op("DEC (HL)", 1, 12), // 0x35
    op("LD (HL),d8", 2, 12), // 0x36
    op("SCF", 1, 4), // 0x37
    branch("JR C,r8", 2, 8, 12), // 0x38
    op("ADD HL,SP", 1, 8), // 0x39
    op("LD A,(HL-)", 1, 8), // 0x3A
    op("DEC SP", 1, 8), // 0x3B
    op("INC A", 1, 4), // 0x3C
    op("DEC A", 1, 4), // 0x3D
    op("LD A,d8", 2, 8), // 0x3E
    op("CCF", 1, 4), // 0x3F
    op("LD B,B", 1, 4), // 0x40
    op("LD B,C", 1, 4), // 0x41
    op("LD B,D", 1, 4), // 0x42
    op("LD B,E", 1, 4), // 0x43
    op("LD B,H", 1, 4), // 0x44
    op("LD B,L", 1, 4), // 0x45
    op("LD B,(HL)", 1, 8), // 0x46
    op("LD B,A", 1, 4), // 0x47
    op("LD C,B", 1, 4), // 0x48
    op("LD C,C", 1, 4), // 0x49
    op("LD C,D", 1, 4), // 0x4A
    op("LD C,E", 1, 4), // 0x4B
    op("LD C,H", 1, 4), // 0x4C
    op("LD C,L", 1, 4), // 0x4D
    op("LD C,(HL)", 1, 8), // 0x4E
    op("LD C,A", 1, 4), // 0x4F
    op("LD D,B", 1, 4), // 0x50
    op("LD D,C", 1, 4), // 0x51
    op("LD D,D", 1, 4), // 0x52
    op("LD D,E", 1, 4), // 0x53
    op("LD D,H", 1, 4), // 0x54
    op("LD D,L", 1, 4), // 0x55
    op("LD D,(HL)", 1, 8), // 0x56
    op("LD D,A", 1, 4), // 0x57
    op("LD E,B", 1, 4), // 0x58
    op("LD E,C", 1, 4), // 0x59
    op("LD E,D", 1, 4), // 0x5A
    op("LD E,E", 1, 4), // 0x5B
    op("LD E,H", 1, 4), // 0x5C
    op("LD E,L", 1, 4), // 0x5D
    op("LD E,(HL)", 1, 8), // 0x5E
    op("LD E,A", 1, 4), // 0x5F
    op("LD H,B", 1, 4), // 0x60
    op("LD H,C", 1, 4), // 0x61
    op("LD H,D", 1, 4), // 0x62
    op("LD H,E", 1, 4), // 0x63
    op("LD H,H", 1, 4), // 0x64
    op("LD H,L", 1, 4), // 0x65
    op("LD H,(HL)", 1, 8), // 0x66
    op("LD H,A", 1, 4), // 0x67
    op("LD L,B", 1, 4), // 0x68
    op("LD L,C", 1, 4), // 0x69
    op("LD L,D", 1, 4), // 0x6A
    op("LD L,E", 1, 4), // 0x6B
    op("LD L,H", 1, 4), // 0x6C
    op("LD L,L", 1, 4), // 0x6D
    op("LD L,(HL)", 1, 8), // 0x6E
    op("LD L,A", 1, 4), // 0x6F
    op("LD (HL),B", 1, 8), // 0x70
    op("LD (HL),C", 1, 8), // 0x71
    op("LD (HL),D", 1, 8), // 0x72
    op("LD (HL),E", 1, 8), // 0x73
    op("LD (HL),H", 1, 8), // 0x74
    op("LD (HL),L", 1, 8), // 0x75
    op("HALT", 1, 4), // 0x76
    op("LD (HL),A", 1, 8), // 0x77
    op("LD A,B", 1, 4), // 0x78
    op("LD A,C", 1, 4), // 0x79
    op("LD A,D", 1, 4), // 0x7A
    op("LD A,E", 1, 4), // 0x7B
    op("LD A,H", 1, 4), // 0x7C
    op("LD A,L", 1, 4), // 0x7D
    op("LD A,(HL)", 1, 8), // 0x7E
    op("LD A,A", 1, 4), // 0x7F
    op("ADD A,B", 1, 4), // 0x80
    op("ADD A,C", 1, 4), // 0x81
    op("ADD A,D", 1, 4), // 0x82
    op("ADD A,E", 1, 4), // 0x83
    op("ADD A,H", 1, 4), // 0x84
    op("ADD A,L", 1, 4), // 0x85
    op("ADD A,(HL)", 1, 8), // 0x86
    op("ADD A,A", 1, 4), // 0x87
    op("ADC A,B", 1, 4), // 0x88
    op("ADC A,C", 1, 4), // 0x89
    op("ADC A,D", 1, 4), // 0x8A
    op("ADC A,E", 1, 4), // 0x8B
    op("ADC A,H", 1, 4), // 0x8C
    op("ADC A,L", 1, 4), // 0x8D
    op("ADC A,(HL)", 1, 8), // 0x8E
    op("ADC A,A", 1, 4), // 0x8F
    op("SUB B", 1, 4), // 0x90
    op("SUB C", 1, 4), // 0x91
    op("SUB D", 1, 4), // 0x92
    op("SUB E", 1, 4), // 0x93
    op("SUB H", 1, 4), // 0x94
    op("SUB L", 1, 4), // 0x95
    op("SUB (HL)", 1, 8), // 0x96
    op("SUB A", 1, 4), // 0x97
    op("SBC A,B", 1, 4), // 0x98
    op("SBC A,C", 1, 4), // 0x99
    op("SBC A,D", 1, 4), // 0x9A
    op("SBC A,E", 1, 4), // 0x9B
    op("SBC A,H", 1, 4), // 0x9C
    op("SBC A,L", 1, 4), // 0x9D
    op("SBC A,(HL)", 1, 8), // 0x9E
    op("SBC A,A", 1, 4), // 0x9F
    op("AND B", 1, 4), // 0xA0
    op("AND C", 1, 4), // 0xA1
    op("AND D", 1, 4), // 0xA2
    op("AND E", 1, 4), // 0xA3
    op("AND H", 1, 4), // 0xA4
    op("AND L", 1, 4), // 0xA5
    op("AND (HL)", 1, 8), // 0xA6
    op("AND A", 1, 4), // 0xA7
    op("XOR B", 1, 4), // 0xA8
    op("XOR C", 1, 4), // 0xA9
    op("XOR D", 1, 4), // 0xAA
    op("XOR E", 1, 4), // 0xAB
    op("XOR H", 1, 4), // 0xAC
    op("XOR L", 1, 4), // 0xAD
    op("XOR (HL)", 1, 8), // 0xAE
    op("XOR A", 1, 4), // 0xAF
    op("OR B", 1, 4), // 0xB0
    op("OR C", 1, 4), // 0xB1
    op("OR D", 1, 4), // 0xB2
    op("OR E", 1, 4), // 0xB3
    op("OR H", 1, 4), // 0xB4
    op("OR L", 1, 4), // 0xB5
    op("OR (HL)", 1, 8), // 0xB6
    op("OR A", 1, 4), // 0xB7
    op("CP B", 1, 4), // 0xB8
    op("CP C", 1, 4), // 0xB9
    op("CP D", 1, 4), // 0xBA
    op("CP E", 1, 4), // 0xBB
    op("CP H", 1, 4), // 0xBC
    op("CP L", 1, 4), // 0xBD
    op("CP (HL)", 1, 8), // 0xBE
    op("CP A", 1, 4), // 0xBF
    branch("RET NZ", 1, 8, 20), // 0xC0
    op("POP BC", 1, 12), // 0xC1
    branch("JP NZ,a16", 3, 12, 16), // 0xC2
    op("JP a16", 3, 16), // 0xC3
    branch("CALL NZ,a16", 3, 12, 24), // 0xC4
    op("PUSH BC", 1, 16), // 0xC5
    op("ADD A,d8", 2, 8), // 0xC6
    op("RST 00H", 1, 16), // 0xC7
    branch("RET Z", 1, 8, 20), // 0xC8
    op("RET", 1, 16), // 0xC9
    branch("JP Z,a16", 3, 12, 16), // 0xCA
    op("PREFIX CB", 1, 4), // 0xCB
    branch("CALL Z,a16", 3, 12, 24), // 0xCC
    op("CALL a16", 3, 24), // 0xCD
    op("ADC A,d8", 2, 8), // 0xCE
    op("RST 08H", 1, 16), // 0xCF
    branch("RET NC", 1, 8, 20), // 0xD0
    op("POP DE", 1, 12), // 0xD1
    branch("JP NC,a16", 3, 12, 16), // 0xD2
    illegal(), // 0xD3
    branch("CALL NC,a16", 3, 12, 24), // 0xD4
    op("PUSH DE", 1, 16), // 0xD5
    op("SUB d8", 2, 8), // 0xD6
    op("RST 10H", 1, 16), // 0xD7
    branch("RET C", 1, 8, 20), // 0xD8
    op("RETI", 1, 16), // 0xD9
    branch("JP C,a16", 3, 12, 16), // 0xDA
    illegal(), // 0xDB
    branch("CALL C,a16", 3, 12, 24), // 0xDC
    illegal(), // 0xDD
    op("SBC A,d8", 2, 8), // 0xDE
    op("RST 18H", 1, 16), // 0xDF
    op("LDH (a8),A", 2, 12), // 0xE0
    op("POP HL", 1, 12), // 0xE1
    op("LD (C),A", 1, 8), // 0xE2
    illegal(), // 0xE3
    illegal(), // 0xE4
    op("PUSH HL", 1, 16), // 0xE5
    op("AND d8", 2, 8), // 0xE6
    op("RST 20H", 1, 16), // 0xE7
    op("ADD SP,r8", 2, 16), // 0xE8
    op("JP (HL)", 1, 4), // 0xE9
    op("LD (a16),A", 3, 16), // 0xEA
    illegal(), // 0xEB
    illegal(), // 0xEC
    illegal(), // 0xED
    op("XOR d8", 2, 8), // 0xEE
    op("RST 28H", 1, 16), // 0xEF
    op("LDH A,(a8)", 2, 12), // 0xF0
    op("POP AF", 1, 12), // 0xF1
    op("LD A,(C)", 1, 8), // 0xF2
    op("DI", 1, 4), // 0xF3
    illegal(), // 0xF4
    op("PUSH AF", 1, 16), // 0xF5
    op("OR d8", 2, 8), // 0xF6
    op("RST 30H", 1, 16), // 0xF7
    op("LD HL,SP+r8", 2, 12), // 0xF8
    op("LD SP,HL", 1, 8), // 0xF9
    op("LD A,(a16)", 3, 16), // 0xFA
    op("EI", 1, 4), // 0xFB
    illegal(), // 0xFC
    illegal(), // 0xFD
    op("CP d8", 2, 8), // 0xFE
    op("RST 38H", 1, 16), // 0xFF
];

pub static CB_OPCODES: [OpInfo; 256] = [
    op("RLC B", 2, 8), // 0xCB 0x00
    op("RLC C", 2, 8), // 0xCB 0x01
    op("RLC D", 2, 8), // 0xCB 0x02
    op("RLC E", 2, 8), // 0xCB 0x03
    op("RLC H", 2, 8), // 0xCB 0x04
    op("RLC L", 2, 8), // 0xCB 0x05
    op("RLC (HL)", 2, 16), // 0xCB 0x06
    op("RLC A", 2, 8), // 0xCB 0x07
    op("RRC B", 2, 8), // 0xCB 0x08
    op("RRC C", 2, 8), // 0xCB 0x09
    op("RRC D", 2, 8), // 0xCB 0x0A
    op("RRC E", 2, 8), // 0xCB 0x0B
    op("RRC H", 2, 8), // 0xCB 0x0C
    op("RRC L", 2, 8), // 0xCB 0x0D
    op("RRC (HL)", 2, 16), // 0xCB 0x0E
    op("RRC A", 2, 8), // 0xCB 0x0F
    op("RL B", 2, 8), // 0xCB 0x10
    op("RL C", 2, 8), // 0xCB 0x11
    op("RL D", 2, 8), // 0xCB 0x12
    op("RL E", 2, 8), // 0xCB 0x13
    op("RL H", 2, 8), // 0xCB 0x14
    op("RL L", 2, 8), // 0xCB 0x15
    op("RL (HL)", 2, 16), // 0xCB 0x16
    op("RL A", 2, 8), // 0xCB 0x17
    op("RR B", 2, 8), // 0xCB 0x18
    op("RR C", 2, 8), // 0xCB 0x19
    op("RR D", 2, 8), // 0xCB 0x1A
    op("RR E", 2, 8), // 0xCB 0x1B
    op("RR H", 2, 8), // 0xCB 0x1C
    op("RR L", 2, 8), // 0xCB 0x1D
    op("RR (HL)", 2, 16), // 0xCB 0x1E
    op("RR A", 2, 8), // 0xCB 0x1F
    op("SLA B", 2, 8), // 0xCB 0x20
    op("SLA C", 2, 8), // 0xCB 0x21
    op("SLA D", 2, 8), // 0xCB 0x22
    op("SLA E", 2, 8), // 0xCB 0x23
    op("SLA H", 2, 8), // 0xCB 0x24
    op("SLA L", 2, 8), // 0xCB 0x25
    op("SLA (HL)", 2, 16), // 0xCB 0x26
    op("SLA A", 2, 8), // 0xCB 0x27
    op("SRA B", 2, 8), // 0xCB 0x28
    op("SRA C", 2, 8), // 0xCB 0x29
    op("SRA D", 2, 8), // 0xCB 0x2A
    op("SRA E", 2, 8), // 0xCB 0x2B
    op("SRA H", 2, 8), // 0xCB 0x2C
    op("SRA L", 2, 8), // 0xCB 0x2D
    op("SRA (HL)", 2, 16), // 0xCB 0x2E
    op("SRA A", 2, 8), // 0xCB 0x2F
    op("SWAP B", 2, 8), // 0xCB 0x30
    op("SWAP C", 2, 8), // 0xCB 0x31
    op("SWAP D", 2, 8), // 0xCB 0x32
    op("SWAP E", 2, 8), // 0xCB 0x33
    op("SWAP H", 2, 8), // 0xCB 0x34
    op("SWAP L", 2, 8), // 0xCB 0x35
    op("SWAP (HL)", 2, 16), // 0xCB 0x36
    op("SWAP A", 2, 8), // 0xCB 0x37
    op("SRL B", 2, 8), // 0xCB 0x38
    op("SRL C", 2, 8), // 0xCB 0x39
    op("SRL D", 2, 8), // 0xCB 0x3A
    op("SRL E", 2, 8), // 0xCB 0x3B
    op("SRL H", 2, 8), // 0xCB 0x3C
    op("SRL L", 2, 8), // 0xCB 0x3D
    op("SRL (HL)", 2, 16), // 0xCB 0x3E
    op("SRL A", 2, 8), // 0xCB 0x3F
    op("BIT 0,B", 2, 8), // 0xCB 0x40
    op("BIT 0,C", 2, 8), // 0xCB 0x41
    op("BIT 0,D", 2, 8), // 0xCB 0x42
    op("BIT 0,E", 2, 8), // 0xCB 0x43
    op("BIT 0,H", 2, 8), // 0xCB 0x44
    op("BIT 0,L", 2, 8), // 0xCB 0x45
    op("BIT 0,(HL)", 2, 12), // 0xCB 0x46
    op("BIT 0,A", 2, 8), // 0xCB 0x47
    op("BIT 1,B", 2, 8), // 0xCB 0x48
    op("BIT 1,C", 2, 8), // 0xCB 0x49
    op("BIT 1,D", 2, 8), // 0xCB 0x4A
    op("BIT 1,E", 2, 8), // 0xCB 0x4B
    op("BIT 1,H", 2, 8), // 0xCB 0x4C
    op("BIT 1,L", 2, 8), // 0xCB 0x4D
    op("BIT 1,(HL)", 2, 12), // 0xCB 0x4E
    op("BIT 1,A", 2, 8), // 0xCB 0x4F
    op("BIT 2,B", 2, 8), // 0xCB 0x50
    op("BIT 2,C", 2, 8), // 0xCB 0x51
    op("BIT 2,D", 2, 8), // 0xCB 0x52
    op("BIT 2,E", 2, 8), // 0xCB 0x53
    op("BIT 2,H", 2, 8), // 0xCB 0x54
    op("BIT 2,L", 2, 8), // 0xCB 0x55
    op("BIT 2,(HL)", 2, 12), // 0xCB 0x56
    op("BIT 2,A", 2, 8), // 0xCB 0x57
    op("BIT 3,B", 2, 8), // 0xCB 0x58
    op("BIT 3,C", 2, 8), // 0xCB 0x59
    op("BIT 3,D", 2, 8), // 0xCB 0x5A
    op("BIT 3,E", 2, 8), // 0xCB 0x5B
    op("BIT 3,H", 2, 8), // 0xCB 0x5C
    op("BIT 3,L", 2, 8), // 0xCB 0x5D
    op("BIT 3,(HL)", 2, 12), // 0xCB 0x5E
    op("BIT 3,A", 2, 8), // 0xCB 0x5F
    op("BIT 4,B", 2, 8), // 0xCB 0x60
    op("BIT 4,C", 2, 8), // 0xCB 0x61
    op("BIT 4,D", 2, 8), // 0xCB 0x62
    op("BIT 4,E", 2, 8), // 0xCB 0x63
    op("BIT 4,H", 2, 8), // 0xCB 0x64
    op("BIT 4,L", 2, 8), // 0xCB 0x65
    op("BIT 4,(HL)", 2, 12), // 0xCB 0x66
    op("BIT 4,A", 2, 8), // 0xCB 0x67
    op("BIT 5,B", 2, 8), // 0xCB 0x68
    op("BIT 5,C", 2, 8), // 0xCB 0x69
    op("BIT 5,D", 2, 8), // 0xCB 0x6A
    op("BIT 5,E", 2, 8), // 0xCB 0x6B
    op("BIT 5,H", 2, 8), // 0xCB 0x6C
    op("BIT 5,L", 2, 8), // 0xCB 0x6D
    op("BIT 5,(HL)", 2, 12), // 0xCB 0x6E
    op("BIT 5,A", 2, 8), // 0xCB 0x6F
    op("BIT 6,B", 2, 8), // 0xCB 0x70
    op("BIT 6,C", 2, 8), // 0xCB 0x71
    op("BIT 6,D", 2, 8), // 0xCB 0x72
    op("BIT 6,E", 2, 8), // 0xCB 0x73
    op("BIT 6,H", 2, 8), // 0xCB 0x74
    op("BIT 6,L", 2, 8), // 0xCB 0x75
    op("BIT 6,(HL)", 2, 12), // 0xCB 0x76
    op("BIT 6,A", 2, 8), // 0xCB 0x77
    op("BIT 7,B", 2, 8), // 0xCB 0x78
    op("BIT 7,C", 2, 8), // 0xCB 0x79
    op("BIT 7,D", 2, 8), // 0xCB 0x7A
    op("BIT 7,E", 2, 8), // 0xCB 0x7B
    op("BIT 7,H", 2, 8), // 0xCB 0x7C
    op("BIT 7,L", 2, 8), // 0xCB 0x7D
    op("BIT 7,(HL)", 2, 12), // 0xCB 0x7E
    op("BIT 7,A", 2, 8), // 0xCB 0x7F
    op("RES 0,B", 2, 8), // 0xCB 0x80
    op("RES 0,C", 2, 8), // 0xCB 0x81
    op("RES 0,D", 2, 8), // 0xCB 0x82
    op("RES 0,E", 2, 8), // 0xCB 0x83
    op("RES 0,H", 2, 8), // 0xCB 0x84
    op("RES 0,L", 2, 8), // 0xCB 0x85
    op("RES 0,(HL)", 2, 16), // 0xCB 0x86
    op("RES 0,A", 2, 8), // 0xCB 0x87
    op("RES 1,B", 2, 8), // 0xCB 0x88
    op("RES 1,C", 2, 8), // 0xCB 0x89
    op("RES 1,D", 2, 8), // 0xCB 0x8A
    op("RES 1,E", 2, 8), // 0xCB 0x8B
    op("RES 1,H", 2, 8), // 0xCB 0x8C
    op("RES 1,L", 2, 8), // 0xCB 0x8D
    op("RES 1,(HL)", 2, 16), // 0xCB 0x8E
    op("RES 1,A", 2, 8), // 0xCB 0x8F
    op("RES 2,B", 2, 8), // 0xCB 0x90
    op("RES 2,C", 2, 8), // 0xCB 0x91
    op("RES 2,D", 2, 8), // 0xCB 0x92
    op("RES 2,E", 2, 8), // 0xCB 0x93
    op("RES 2,H", 2, 8), // 0xCB 0x94
    op("RES 2,L", 2, 8), // 0xCB 0x95
    op("RES 2,(HL)", 2, 16), // 0xCB 0x96
    op("RES 2,A", 2, 8), // 0xCB 0x97
    op("RES 3,B", 2, 8), // 0xCB 0x98
    op("RES 3,C", 2, 8), // 0xCB 0x99
    op("RES 3,D", 2, 8), // 0xCB 0x9A
    op("RES 3,E", 2, 8), // 0xCB 0x9B
    op("RES 3,H", 2, 8), // 0xCB 0x9C
    op("RES 3,L", 2, 8), // 0xCB 0x9D
    op("RES 3,(HL)", 2, 16), // 0xCB 0x9E
    op("RES 3,A", 2, 8), // 0xCB 0x9F
    op("RES 4,B", 2, 8), // 0xCB 0xA0
    op("RES 4,C", 2, 8), // 0xCB 0xA1
    op("RES 4,D", 2, 8), // 0xCB 0xA2
    op("RES 4,E", 2, 8), // 0xCB 0xA3
    op("RES 4,H", 2, 8), // 0xCB 0xA4
    op("RES 4,L", 2, 8), // 0xCB 0xA5
    op("RES 4,(HL)", 2, 16), // 0xCB 0xA6
    op("RES 4,A", 2, 8), // 0xCB 0xA7
    op("RES 5,B", 2, 8), // 0xCB 0xA8
    op("RES 5,C", 2, 8), // 0xCB 0xA9
    op("RES 5,D", 2, 8), // 0xCB 0xAA
    op("RES 5,E", 2, 8), // 0xCB 0xAB
    op("RES 5,H", 2, 8), // 0xCB 0xAC
    op("RES 5,L", 2, 8), // 0xCB 0xAD
    op("RES 5,(HL)", 2, 16), // 0xCB 0xAE
    op("RES 5,A", 2, 8), // 0xCB 0xAF
    op("RES 6,B", 2, 8), // 0xCB 0xB0
    op("RES 6,C", 2, 8), // 0xCB 0xB1
    op("RES 6,D", 2, 8), // 0xCB 0xB2
    op("RES 6,E", 2, 8), // 0xCB 0xB3
    op("RES 6,H", 2, 8), // 0xCB 0xB4
    op("RES 6,L", 2, 8), // 0xCB 0xB5
    op("RES 6,(HL)", 2, 16), // 0xCB 0xB6
    op("RES 6,A", 2, 8), // 0xCB 0xB7
    op("RES 7,B", 2, 8), // 0xCB 0xB8
    op("RES 7,C", 2, 8), // 0xCB 0xB9
    op("RES 7,D", 2, 8), // 0xCB 0xBA
    op("RES 7,E", 2, 8), // 0xCB 0xBB
    op("RES 7,H", 2, 8), // 0xCB 0xBC
    op("RES 7,L", 2, 8), // 0xCB 0xBD
    op("RES 7,(HL)", 2, 16), // 0xCB 0xBE
    op("RES 7,A", 2, 8), // 0xCB 0xBF
    op("SET 0,B", 2, 8), // 0xCB 0xC0
    op("SET 0,C", 2, 8), // 0xCB 0xC1
    op("SET 0,D", 2, 8), // 0xCB 0xC2
    op("SET 0,E", 2, 8), // 0xCB 0xC3
    op("SET 0,H", 2, 8), // 0xCB 0xC4
    op("SET 0,L", 2, 8), // 0xCB 0xC5
    op("SET 0,(HL)", 2, 16), // 0xCB 0xC6
    op("SET 0,A", 2, 8), // 0xCB 0xC7
    op("SET 1,B", 2, 8), // 0xCB 0xC8
    op("SET 1,C", 2, 8), // 0xCB 0xC9
    op("SET 1,D", 2, 8), // 0xCB 0xCA
    op("SET 1,E", 2, 8), // 0xCB 0xCB
    op("SET 1,H", 2, 8), // 0xCB 0xCC
    op("SET 1,L", 2, 8), // 0xCB 0xCD
    op("SET 1,(HL)", 2, 16), // 0xCB 0xCE
    op("SET 1,A", 2, 8), // 0xCB 0xCF
    op("SET 2,B", 2, 8), // 0xCB 0xD0
    op("SET 2,C", 2, 8), // 0xCB 0xD1
    op("SET 2,D", 2, 8), // 0xCB 0xD2
    op("SET 2,E", 2, 8), // 0xCB 0xD3
    op("SET 2,H", 2, 8), // 0xCB 0xD4
    op("SET 2,L", 2, 8), // 0xCB 0xD5
    op("SET 2,(HL)", 2, 16), // 0xCB 0xD6
    op("SET 2,A", 2, 8), // 0xCB 0xD7
    op("SET 3,B", 2, 8), // 0xCB 0xD8
    op("SET 3,C", 2, 8), // 0xCB 0xD9
    op("SET 3,D", 2, 8), // 0xCB 0xDA
    op("SET 3,E", 2, 8), // 0xCB 0xDB
    op("SET 3,H", 2, 8), // 0xCB 0xDC
    op("SET 3,L", 2, 8), // 0xCB 0xDD
    op("SET 3,(HL)", 2, 16), // 0xCB 0xDE
    op("SET 3,A", 2, 8), // 0xCB 0xDF
    op("SET 4,B", 2, 8), // 0xCB 0xE0
    op("SET 4,C", 2, 8), // 0xCB 0xE1
    op("SET 4,D", 2, 8), // 0xCB 0xE2
    op("SET 4,E", 2, 8), // 0xCB 0xE3
    op("SET 4,H", 2, 8), // 0xCB 0xE4
    op("SET 4,L", 2, 8), // 0xCB 0xE5
    op("SET 4,(HL)", 2, 16), // 0xCB 0xE6
    op("SET 4,A", 2, 8), // 0xCB 0xE7
    op("SET 5,B", 2, 8), // 0xCB 0xE8
    op("SET 5,C", 2, 8), // 0xCB 0xE9
    op("SET 5,D", 2, 8), // 0xCB 0xEA
    op("SET 5,E", 2, 8), // 0xCB 0xEB
    op("SET 5,H", 2, 8), // 0xCB 0xEC
    op("SET 5,L", 2, 8), // 0xCB 0xED
    op("SET 5,(HL)", 2, 16), // 0xCB 0xEE
    op("SET 5,A", 2, 8), // 0xCB 0xEF
    op("SET 6,B", 2, 8), // 0xCB 0xF0
    op("SET 6,C", 2, 8), // 0xCB 0xF1
    op("SET 6,D", 2, 8), // 0xCB 0xF2
    op("SET 6,E", 2, 8), // 0xCB 0xF3
    op("SET 6,H", 2, 8), // 0xCB 0xF4
    op("SET 6,L", 2, 8), // 0xCB 0xF5
    op("SET 6,(HL)", 2, 16), // 0xCB 0xF6
    op("SET 6,A", 2, 8), // 0xCB 0xF7
    op("SET 7,B", 2, 8), // 0xCB 0xF8
    op("SET 7,C", 2, 8), // 0xCB 0xF9
    op("SET 7,D", 2, 8), // 0xCB 0xFA
    op("SET 7,E", 2, 8), // 0xCB 0xFB
    op("SET 7,H", 2, 8), // 0xCB 0xFC
    op("SET 7,L", 2, 8), // 0xCB 0xFD
    op("SET 7,(HL)", 2, 16), // 0xCB 0xFE
    op("SET 7,A", 2, 8), // 0xCB 0xFF
];

/// The documented holes in the primary opcode space.
pub const UNDEFINED_PRIMARY: [u8; 11] = [
    0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
];
