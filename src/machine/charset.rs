// Built-in glyph table and monitor banner.

use super::memory::CHARSET_SIZE;

/// Power-on glyph table, 256 glyphs of 8 rows each (MSB = leftmost pixel).
/// Overlaid at runtime by `chardefs.bin` when storage provides one.
pub const CHARSET: [u8; CHARSET_SIZE] = [
    0x5A, 0x99, 0xE7, 0x5E, 0x5E, 0x24, 0x18, 0x66, // 00
    0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0x00, 0x00, 0x00, // 01
    0x0F, 0x0F, 0x0F, 0x0F, 0x00, 0x00, 0x00, 0x00, // 02
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, // 03
    0x00, 0x00, 0x00, 0x00, 0xF0, 0xF0, 0xF0, 0xF0, // 04
    0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, // 05
    0x0F, 0x0F, 0x0F, 0x0F, 0xF0, 0xF0, 0xF0, 0xF0, // 06
    0xFF, 0xFF, 0xFF, 0xFF, 0xF0, 0xF0, 0xF0, 0xF0, // 07
    0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, // 08
    0x00, 0x00, 0x00, 0x00, 0xAA, 0x55, 0xAA, 0x55, // 09
    0xAA, 0x55, 0xAA, 0x55, 0x00, 0x00, 0x00, 0x00, // 0A
    0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, // 0B
    0x00, 0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00, 0x00, // 0C
    0x18, 0x3C, 0x7E, 0xFF, 0x7E, 0x66, 0x66, 0x66, // 0D
    0x00, 0x08, 0x0C, 0xFF, 0xFF, 0x0C, 0x08, 0x00, // 0E
    0x00, 0x10, 0x30, 0xFF, 0xFF, 0x30, 0x10, 0x00, // 0F
    0x18, 0x18, 0x3C, 0x7E, 0x18, 0x18, 0x18, 0x18, // 10
    0x18, 0x18, 0x18, 0x18, 0x7E, 0x3C, 0x18, 0x18, // 11
    0x7E, 0x99, 0x99, 0xFF, 0xFF, 0x99, 0x99, 0x7E, // 12
    0x18, 0x24, 0x42, 0x99, 0x99, 0x42, 0x24, 0x18, // 13
    0x00, 0x24, 0x24, 0x00, 0x81, 0x42, 0x3C, 0x00, // 14
    0x00, 0x24, 0x24, 0x00, 0x3C, 0x42, 0x81, 0x00, // 15
    0x3C, 0x7E, 0x99, 0xFF, 0xE7, 0x7E, 0x3C, 0x66, // 16
    0x3C, 0x7E, 0x99, 0xDD, 0xFF, 0xFF, 0xFF, 0xDB, // 17
    0x3C, 0x42, 0x84, 0x88, 0x88, 0x84, 0x42, 0x3C, // 18
    0x42, 0x24, 0x7E, 0xDB, 0xFF, 0xBD, 0xA5, 0x18, // 19
    0x18, 0x3C, 0x3C, 0x7E, 0x7E, 0xFF, 0x99, 0x18, // 1A
    0x00, 0x80, 0xE0, 0xBC, 0xFF, 0x78, 0x60, 0x00, // 1B
    0x00, 0x00, 0x24, 0x18, 0x18, 0x24, 0x00, 0x00, // 1C
    0x81, 0x42, 0x24, 0x00, 0x00, 0x24, 0x42, 0x81, // 1D
    0x00, 0x00, 0x3C, 0xC3, 0xC3, 0x3C, 0x00, 0x00, // 1E
    0x18, 0x18, 0x24, 0x24, 0x24, 0x24, 0x18, 0x18, // 1F
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 20
    0x00, 0x10, 0x10, 0x10, 0x10, 0x00, 0x10, 0x00, // 21
    0x00, 0x24, 0x24, 0x00, 0x00, 0x00, 0x00, 0x00, // 22
    0x00, 0x24, 0x7E, 0x24, 0x24, 0x7E, 0x24, 0x00, // 23
    0x00, 0x08, 0x3E, 0x28, 0x3E, 0x0A, 0x3E, 0x08, // 24
    0x00, 0x62, 0x64, 0x08, 0x10, 0x26, 0x46, 0x00, // 25
    0x00, 0x10, 0x28, 0x10, 0x2A, 0x44, 0x3A, 0x00, // 26
    0x00, 0x08, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, // 27
    0x00, 0x04, 0x08, 0x08, 0x08, 0x08, 0x04, 0x00, // 28
    0x00, 0x20, 0x10, 0x10, 0x10, 0x10, 0x20, 0x00, // 29
    0x00, 0x00, 0x14, 0x08, 0x3E, 0x08, 0x14, 0x00, // 2A
    0x00, 0x00, 0x08, 0x08, 0x3E, 0x08, 0x08, 0x00, // 2B
    0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x08, 0x10, // 2C
    0x00, 0x00, 0x00, 0x00, 0x3E, 0x00, 0x00, 0x00, // 2D
    0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00, // 2E
    0x00, 0x00, 0x02, 0x04, 0x08, 0x10, 0x20, 0x00, // 2F
    0x00, 0x3C, 0x46, 0x4A, 0x52, 0x62, 0x3C, 0x00, // 30
    0x00, 0x18, 0x28, 0x08, 0x08, 0x08, 0x3E, 0x00, // 31
    0x00, 0x3C, 0x42, 0x02, 0x3C, 0x40, 0x7E, 0x00, // 32
    0x00, 0x3C, 0x42, 0x0C, 0x02, 0x42, 0x3C, 0x00, // 33
    0x00, 0x08, 0x18, 0x28, 0x48, 0x7E, 0x08, 0x00, // 34
    0x00, 0x7E, 0x40, 0x7C, 0x02, 0x42, 0x3C, 0x00, // 35
    0x00, 0x3C, 0x40, 0x7C, 0x42, 0x42, 0x3C, 0x00, // 36
    0x00, 0x7E, 0x02, 0x04, 0x08, 0x10, 0x10, 0x00, // 37
    0x00, 0x3C, 0x42, 0x3C, 0x42, 0x42, 0x3C, 0x00, // 38
    0x00, 0x3C, 0x42, 0x42, 0x3E, 0x02, 0x3C, 0x00, // 39
    0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00, // 3A
    0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x10, 0x20, // 3B
    0x00, 0x00, 0x04, 0x08, 0x10, 0x08, 0x04, 0x00, // 3C
    0x00, 0x00, 0x00, 0x3E, 0x00, 0x3E, 0x00, 0x00, // 3D
    0x00, 0x00, 0x10, 0x08, 0x04, 0x08, 0x10, 0x00, // 3E
    0x00, 0x3C, 0x42, 0x04, 0x08, 0x00, 0x08, 0x00, // 3F
    0x00, 0x3C, 0x4A, 0x56, 0x5E, 0x40, 0x3C, 0x00, // 40
    0x00, 0x3C, 0x42, 0x42, 0x7E, 0x42, 0x42, 0x00, // 41
    0x00, 0x7C, 0x42, 0x7C, 0x42, 0x42, 0x7C, 0x00, // 42
    0x00, 0x3C, 0x42, 0x40, 0x40, 0x42, 0x3C, 0x00, // 43
    0x00, 0x78, 0x44, 0x42, 0x42, 0x44, 0x78, 0x00, // 44
    0x00, 0x7E, 0x40, 0x7C, 0x40, 0x40, 0x7E, 0x00, // 45
    0x00, 0x7E, 0x40, 0x7C, 0x40, 0x40, 0x40, 0x00, // 46
    0x00, 0x3C, 0x42, 0x40, 0x4E, 0x42, 0x3C, 0x00, // 47
    0x00, 0x42, 0x42, 0x7E, 0x42, 0x42, 0x42, 0x00, // 48
    0x00, 0x3E, 0x08, 0x08, 0x08, 0x08, 0x3E, 0x00, // 49
    0x00, 0x02, 0x02, 0x02, 0x42, 0x42, 0x3C, 0x00, // 4A
    0x00, 0x44, 0x48, 0x70, 0x48, 0x44, 0x42, 0x00, // 4B
    0x00, 0x40, 0x40, 0x40, 0x40, 0x40, 0x7E, 0x00, // 4C
    0x00, 0x42, 0x66, 0x5A, 0x42, 0x42, 0x42, 0x00, // 4D
    0x00, 0x42, 0x62, 0x52, 0x4A, 0x46, 0x42, 0x00, // 4E
    0x00, 0x3C, 0x42, 0x42, 0x42, 0x42, 0x3C, 0x00, // 4F
    0x00, 0x7C, 0x42, 0x42, 0x7C, 0x40, 0x40, 0x00, // 50
    0x00, 0x3C, 0x42, 0x42, 0x52, 0x4A, 0x3C, 0x00, // 51
    0x00, 0x7C, 0x42, 0x42, 0x7C, 0x44, 0x42, 0x00, // 52
    0x00, 0x3C, 0x40, 0x3C, 0x02, 0x42, 0x3C, 0x00, // 53
    0x00, 0xFE, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00, // 54
    0x00, 0x42, 0x42, 0x42, 0x42, 0x42, 0x3C, 0x00, // 55
    0x00, 0x42, 0x42, 0x42, 0x42, 0x24, 0x18, 0x00, // 56
    0x00, 0x42, 0x42, 0x42, 0x42, 0x5A, 0x24, 0x00, // 57
    0x00, 0x42, 0x24, 0x18, 0x18, 0x24, 0x42, 0x00, // 58
    0x00, 0x82, 0x44, 0x28, 0x10, 0x10, 0x10, 0x00, // 59
    0x00, 0x7E, 0x04, 0x08, 0x10, 0x20, 0x7E, 0x00, // 5A
    0x00, 0x0E, 0x08, 0x08, 0x08, 0x08, 0x0E, 0x00, // 5B
    0x00, 0x00, 0x40, 0x20, 0x10, 0x08, 0x04, 0x00, // 5C
    0x00, 0x70, 0x10, 0x10, 0x10, 0x10, 0x70, 0x00, // 5D
    0x00, 0x10, 0x38, 0x54, 0x10, 0x10, 0x10, 0x00, // 5E
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, // 5F
    0x00, 0x10, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, // 60
    0x00, 0x00, 0x38, 0x04, 0x3C, 0x44, 0x3C, 0x00, // 61
    0x00, 0x20, 0x20, 0x3C, 0x22, 0x22, 0x3C, 0x00, // 62
    0x00, 0x00, 0x1C, 0x20, 0x20, 0x20, 0x1C, 0x00, // 63
    0x00, 0x04, 0x04, 0x3C, 0x44, 0x44, 0x3C, 0x00, // 64
    0x00, 0x00, 0x38, 0x44, 0x78, 0x40, 0x3C, 0x00, // 65
    0x00, 0x0C, 0x10, 0x18, 0x10, 0x10, 0x10, 0x00, // 66
    0x00, 0x00, 0x3C, 0x44, 0x44, 0x3C, 0x04, 0x38, // 67
    0x00, 0x40, 0x40, 0x78, 0x44, 0x44, 0x44, 0x00, // 68
    0x00, 0x10, 0x00, 0x30, 0x10, 0x10, 0x38, 0x00, // 69
    0x00, 0x04, 0x00, 0x04, 0x04, 0x04, 0x24, 0x18, // 6A
    0x00, 0x20, 0x28, 0x30, 0x30, 0x28, 0x24, 0x00, // 6B
    0x00, 0x10, 0x10, 0x10, 0x10, 0x10, 0x0C, 0x00, // 6C
    0x00, 0x00, 0x68, 0x54, 0x54, 0x54, 0x54, 0x00, // 6D
    0x00, 0x00, 0x78, 0x44, 0x44, 0x44, 0x44, 0x00, // 6E
    0x00, 0x00, 0x38, 0x44, 0x44, 0x44, 0x38, 0x00, // 6F
    0x00, 0x00, 0x78, 0x44, 0x44, 0x78, 0x40, 0x40, // 70
    0x00, 0x00, 0x3C, 0x44, 0x44, 0x3C, 0x04, 0x06, // 71
    0x00, 0x00, 0x1C, 0x20, 0x20, 0x20, 0x20, 0x00, // 72
    0x00, 0x00, 0x38, 0x40, 0x38, 0x04, 0x78, 0x00, // 73
    0x00, 0x10, 0x38, 0x10, 0x10, 0x10, 0x0C, 0x00, // 74
    0x00, 0x00, 0x44, 0x44, 0x44, 0x44, 0x38, 0x00, // 75
    0x00, 0x00, 0x44, 0x44, 0x28, 0x28, 0x10, 0x00, // 76
    0x00, 0x00, 0x44, 0x54, 0x54, 0x54, 0x28, 0x00, // 77
    0x00, 0x00, 0x44, 0x28, 0x10, 0x28, 0x44, 0x00, // 78
    0x00, 0x00, 0x44, 0x44, 0x44, 0x3C, 0x04, 0x38, // 79
    0x00, 0x00, 0x7C, 0x08, 0x10, 0x20, 0x7C, 0x00, // 7A
    0x00, 0x0E, 0x08, 0x30, 0x08, 0x08, 0x0E, 0x00, // 7B
    0x00, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00, // 7C
    0x00, 0x70, 0x10, 0x0C, 0x10, 0x10, 0x70, 0x00, // 7D
    0x00, 0x14, 0x28, 0x00, 0x00, 0x00, 0x00, 0x00, // 7E
    0x3C, 0x42, 0x99, 0xA1, 0xA1, 0x99, 0x42, 0x3C, // 7F
    0xA5, 0x66, 0x18, 0xA1, 0xA1, 0xDB, 0xE7, 0x99, // 80
    0x0F, 0x0F, 0x0F, 0x0F, 0xFF, 0xFF, 0xFF, 0xFF, // 81
    0xF0, 0xF0, 0xF0, 0xF0, 0xFF, 0xFF, 0xFF, 0xFF, // 82
    0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, // 83
    0xFF, 0xFF, 0xFF, 0xFF, 0x0F, 0x0F, 0x0F, 0x0F, // 84
    0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, // 85
    0xF0, 0xF0, 0xF0, 0xF0, 0x0F, 0x0F, 0x0F, 0x0F, // 86
    0x00, 0x00, 0x00, 0x00, 0x0F, 0x0F, 0x0F, 0x0F, // 87
    0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, // 88
    0xFF, 0xFF, 0xFF, 0xFF, 0x55, 0xAA, 0x55, 0xAA, // 89
    0x55, 0xAA, 0x55, 0xAA, 0xFF, 0xFF, 0xFF, 0xFF, // 8A
    0xE7, 0xE7, 0xE7, 0xE7, 0xE7, 0xE7, 0xE7, 0xE7, // 8B
    0xFF, 0xFF, 0xFF, 0x00, 0x00, 0xFF, 0xFF, 0xFF, // 8C
    0xE7, 0xC3, 0x81, 0x00, 0x81, 0x99, 0x99, 0x99, // 8D
    0xFF, 0xF7, 0xF3, 0x00, 0x00, 0xF3, 0xF7, 0xFF, // 8E
    0xFF, 0xEF, 0xCF, 0x00, 0x00, 0xCF, 0xEF, 0xFF, // 8F
    0xE7, 0xE7, 0xC3, 0x81, 0xE7, 0xE7, 0xE7, 0xE7, // 90
    0xE7, 0xE7, 0xE7, 0xE7, 0x81, 0xC3, 0xE7, 0xE7, // 91
    0x81, 0x66, 0x66, 0x00, 0x00, 0x66, 0x66, 0x81, // 92
    0xE7, 0xDB, 0xBD, 0x66, 0x66, 0xBD, 0xDB, 0xE7, // 93
    0xFF, 0xDB, 0xDB, 0xFF, 0x7E, 0xBD, 0xC3, 0xFF, // 94
    0xFF, 0xDB, 0xDB, 0xFF, 0xC3, 0xBD, 0x7E, 0xFF, // 95
    0xC3, 0x81, 0x66, 0x00, 0x18, 0x81, 0xC3, 0x99, // 96
    0xC3, 0x81, 0x66, 0x22, 0x00, 0x00, 0x00, 0x24, // 97
    0xC3, 0xBD, 0x7B, 0x77, 0x77, 0x7B, 0xBD, 0xC3, // 98
    0xBD, 0xDB, 0x81, 0x24, 0x00, 0x42, 0x5A, 0xE7, // 99
    0xE7, 0xC3, 0xC3, 0x81, 0x81, 0x00, 0x66, 0xE7, // 9A
    0xFF, 0x7F, 0x1F, 0x43, 0x00, 0x87, 0x9F, 0xFF, // 9B
    0xFF, 0xFF, 0xDB, 0xE7, 0xE7, 0xDB, 0xFF, 0xFF, // 9C
    0x7E, 0xBD, 0xDB, 0xFF, 0xFF, 0xDB, 0xBD, 0x7E, // 9D
    0xFF, 0xFF, 0xC3, 0x3C, 0x3C, 0xC3, 0xFF, 0xFF, // 9E
    0xE7, 0xE7, 0xDB, 0xDB, 0xDB, 0xDB, 0xE7, 0xE7, // 9F
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // A0
    0xFF, 0xEF, 0xEF, 0xEF, 0xEF, 0xFF, 0xEF, 0xFF, // A1
    0xFF, 0xDB, 0xDB, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // A2
    0xFF, 0xDB, 0x81, 0xDB, 0xDB, 0x81, 0xDB, 0xFF, // A3
    0xFF, 0xF7, 0xC1, 0xD7, 0xC1, 0xF5, 0xC1, 0xF7, // A4
    0xFF, 0x9D, 0x9B, 0xF7, 0xEF, 0xD9, 0xB9, 0xFF, // A5
    0xFF, 0xEF, 0xD7, 0xEF, 0xD5, 0xBB, 0xC5, 0xFF, // A6
    0xFF, 0xF7, 0xEF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // A7
    0xFF, 0xFB, 0xF7, 0xF7, 0xF7, 0xF7, 0xFB, 0xFF, // A8
    0xFF, 0xDF, 0xEF, 0xEF, 0xEF, 0xEF, 0xDF, 0xFF, // A9
    0xFF, 0xFF, 0xEB, 0xF7, 0xC1, 0xF7, 0xEB, 0xFF, // AA
    0xFF, 0xFF, 0xF7, 0xF7, 0xC1, 0xF7, 0xF7, 0xFF, // AB
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xF7, 0xF7, 0xEF, // AC
    0xFF, 0xFF, 0xFF, 0xFF, 0xC1, 0xFF, 0xFF, 0xFF, // AD
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xE7, 0xE7, 0xFF, // AE
    0xFF, 0xFF, 0xFD, 0xFB, 0xF7, 0xEF, 0xDF, 0xFF, // AF
    0xFF, 0xC3, 0xB9, 0xB5, 0xAD, 0x9D, 0xC3, 0xFF, // B0
    0xFF, 0xE7, 0xD7, 0xF7, 0xF7, 0xF7, 0xC1, 0xFF, // B1
    0xFF, 0xC3, 0xBD, 0xFD, 0xC3, 0xBF, 0x81, 0xFF, // B2
    0xFF, 0xC3, 0xBD, 0xF3, 0xFD, 0xBD, 0xC3, 0xFF, // B3
    0xFF, 0xF7, 0xE7, 0xD7, 0xB7, 0x81, 0xF7, 0xFF, // B4
    0xFF, 0x81, 0xBF, 0x83, 0xFD, 0xBD, 0xC3, 0xFF, // B5
    0xFF, 0xC3, 0xBF, 0x83, 0xBD, 0xBD, 0xC3, 0xFF, // B6
    0xFF, 0x81, 0xFD, 0xFB, 0xF7, 0xEF, 0xEF, 0xFF, // B7
    0xFF, 0xC3, 0xBD, 0xC3, 0xBD, 0xBD, 0xC3, 0xFF, // B8
    0xFF, 0xC3, 0xBD, 0xBD, 0xC1, 0xFD, 0xC3, 0xFF, // B9
    0xFF, 0xFF, 0xFF, 0xEF, 0xFF, 0xFF, 0xEF, 0xFF, // BA
    0xFF, 0xFF, 0xEF, 0xFF, 0xFF, 0xEF, 0xEF, 0xDF, // BB
    0xFF, 0xFF, 0xFB, 0xF7, 0xEF, 0xF7, 0xFB, 0xFF, // BC
    0xFF, 0xFF, 0xFF, 0xC1, 0xFF, 0xC1, 0xFF, 0xFF, // BD
    0xFF, 0xFF, 0xEF, 0xF7, 0xFB, 0xF7, 0xEF, 0xFF, // BE
    0xFF, 0xC3, 0xBD, 0xFB, 0xF7, 0xFF, 0xF7, 0xFF, // BF
    0xFF, 0xC3, 0xB5, 0xA9, 0xA1, 0xBF, 0xC3, 0xFF, // C0
    0xFF, 0xC3, 0xBD, 0xBD, 0x81, 0xBD, 0xBD, 0xFF, // C1
    0xFF, 0x83, 0xBD, 0x83, 0xBD, 0xBD, 0x83, 0xFF, // C2
    0xFF, 0xC3, 0xBD, 0xBF, 0xBF, 0xBD, 0xC3, 0xFF, // C3
    0xFF, 0x87, 0xBB, 0xBD, 0xBD, 0xBB, 0x87, 0xFF, // C4
    0xFF, 0x81, 0xBF, 0x83, 0xBF, 0xBF, 0x81, 0xFF, // C5
    0xFF, 0x81, 0xBF, 0x83, 0xBF, 0xBF, 0xBF, 0xFF, // C6
    0xFF, 0xC3, 0xBD, 0xBF, 0xB1, 0xBD, 0xC3, 0xFF, // C7
    0xFF, 0xBD, 0xBD, 0x81, 0xBD, 0xBD, 0xBD, 0xFF, // C8
    0xFF, 0xC1, 0xF7, 0xF7, 0xF7, 0xF7, 0xC1, 0xFF, // C9
    0xFF, 0xFD, 0xFD, 0xFD, 0xBD, 0xBD, 0xC3, 0xFF, // CA
    0xFF, 0xBB, 0xB7, 0x8F, 0xB7, 0xBB, 0xBD, 0xFF, // CB
    0xFF, 0xBF, 0xBF, 0xBF, 0xBF, 0xBF, 0x81, 0xFF, // CC
    0xFF, 0xBD, 0x99, 0xA5, 0xBD, 0xBD, 0xBD, 0xFF, // CD
    0xFF, 0xBD, 0x9D, 0xAD, 0xB5, 0xB9, 0xBD, 0xFF, // CE
    0xFF, 0xC3, 0xBD, 0xBD, 0xBD, 0xBD, 0xC3, 0xFF, // CF
    0xFF, 0x83, 0xBD, 0xBD, 0x83, 0xBF, 0xBF, 0xFF, // D0
    0xFF, 0xC3, 0xBD, 0xBD, 0xAD, 0xB5, 0xC3, 0xFF, // D1
    0xFF, 0x83, 0xBD, 0xBD, 0x83, 0xBB, 0xBD, 0xFF, // D2
    0xFF, 0xC3, 0xBF, 0xC3, 0xFD, 0xBD, 0xC3, 0xFF, // D3
    0xFF, 0x01, 0xEF, 0xEF, 0xEF, 0xEF, 0xEF, 0xFF, // D4
    0xFF, 0xBD, 0xBD, 0xBD, 0xBD, 0xBD, 0xC3, 0xFF, // D5
    0xFF, 0xBD, 0xBD, 0xBD, 0xBD, 0xDB, 0xE7, 0xFF, // D6
    0xFF, 0xBD, 0xBD, 0xBD, 0xBD, 0xA5, 0xDB, 0xFF, // D7
    0xFF, 0xBD, 0xDB, 0xE7, 0xE7, 0xDB, 0xBD, 0xFF, // D8
    0xFF, 0x7D, 0xBB, 0xD7, 0xEF, 0xEF, 0xEF, 0xFF, // D9
    0xFF, 0x81, 0xFB, 0xF7, 0xEF, 0xDF, 0x81, 0xFF, // DA
    0xFF, 0xF1, 0xF7, 0xF7, 0xF7, 0xF7, 0xF1, 0xFF, // DB
    0xFF, 0xFF, 0xBF, 0xDF, 0xEF, 0xF7, 0xFB, 0xFF, // DC
    0xFF, 0x8F, 0xEF, 0xEF, 0xEF, 0xEF, 0x8F, 0xFF, // DD
    0xFF, 0xEF, 0xC7, 0xAB, 0xEF, 0xEF, 0xEF, 0xFF, // DE
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, // DF
    0xFF, 0xEF, 0xF7, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // E0
    0xFF, 0xFF, 0xC7, 0xFB, 0xC3, 0xBB, 0xC3, 0xFF, // E1
    0xFF, 0xDF, 0xDF, 0xC3, 0xDD, 0xDD, 0xC3, 0xFF, // E2
    0xFF, 0xFF, 0xE3, 0xDF, 0xDF, 0xDF, 0xE3, 0xFF, // E3
    0xFF, 0xFB, 0xFB, 0xC3, 0xBB, 0xBB, 0xC3, 0xFF, // E4
    0xFF, 0xFF, 0xC7, 0xBB, 0x87, 0xBF, 0xC3, 0xFF, // E5
    0xFF, 0xF3, 0xEF, 0xE7, 0xEF, 0xEF, 0xEF, 0xFF, // E6
    0xFF, 0xFF, 0xC3, 0xBB, 0xBB, 0xC3, 0xFB, 0xC7, // E7
    0xFF, 0xBF, 0xBF, 0x87, 0xBB, 0xBB, 0xBB, 0xFF, // E8
    0xFF, 0xEF, 0xFF, 0xCF, 0xEF, 0xEF, 0xC7, 0xFF, // E9
    0xFF, 0xFB, 0xFF, 0xFB, 0xFB, 0xFB, 0xDB, 0xE7, // EA
    0xFF, 0xDF, 0xD7, 0xCF, 0xCF, 0xD7, 0xDB, 0xFF, // EB
    0xFF, 0xEF, 0xEF, 0xEF, 0xEF, 0xEF, 0xF3, 0xFF, // EC
    0xFF, 0xFF, 0x97, 0xAB, 0xAB, 0xAB, 0xAB, 0xFF, // ED
    0xFF, 0xFF, 0x87, 0xBB, 0xBB, 0xBB, 0xBB, 0xFF, // EE
    0xFF, 0xFF, 0xC7, 0xBB, 0xBB, 0xBB, 0xC7, 0xFF, // EF
    0xFF, 0xFF, 0x87, 0xBB, 0xBB, 0x87, 0xBF, 0xBF, // F0
    0xFF, 0xFF, 0xC3, 0xBB, 0xBB, 0xC3, 0xFB, 0xF9, // F1
    0xFF, 0xFF, 0xE3, 0xDF, 0xDF, 0xDF, 0xDF, 0xFF, // F2
    0xFF, 0xFF, 0xC7, 0xBF, 0xC7, 0xFB, 0x87, 0xFF, // F3
    0xFF, 0xEF, 0xC7, 0xEF, 0xEF, 0xEF, 0xF3, 0xFF, // F4
    0xFF, 0xFF, 0xBB, 0xBB, 0xBB, 0xBB, 0xC7, 0xFF, // F5
    0xFF, 0xFF, 0xBB, 0xBB, 0xD7, 0xD7, 0xEF, 0xFF, // F6
    0xFF, 0xFF, 0xBB, 0xAB, 0xAB, 0xAB, 0xD7, 0xFF, // F7
    0xFF, 0xFF, 0xBB, 0xD7, 0xEF, 0xD7, 0xBB, 0xFF, // F8
    0xFF, 0xFF, 0xBB, 0xBB, 0xBB, 0xC3, 0xFB, 0xC7, // F9
    0xFF, 0xFF, 0x83, 0xF7, 0xEF, 0xDF, 0x83, 0xFF, // FA
    0xFF, 0xF1, 0xF7, 0xCF, 0xF7, 0xF7, 0xF1, 0xFF, // FB
    0xFF, 0xF7, 0xF7, 0xF7, 0xF7, 0xF7, 0xF7, 0xFF, // FC
    0xFF, 0x8F, 0xEF, 0xF3, 0xEF, 0xEF, 0x8F, 0xFF, // FD
    0xFF, 0xEB, 0xD7, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // FE
    0xC3, 0xBD, 0x66, 0x5E, 0x5E, 0x66, 0xBD, 0xC3, // FF
];

/// Banner tiles drawn into the work area (38 x 23 cells) when the monitor
/// takes over the screen.
pub const BANNER: [u8; 874] = [
    32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32,
    32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 13, 32, 22, 32, 23, 32, 24, 32, 25, 32, 26, 32, 27, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32,
    32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32,
    32, 32, 95, 95, 95, 32, 95, 95, 95, 32, 95, 95, 95, 32, 32, 95, 95, 95, 32, 95, 95, 95, 32, 95, 95, 95, 32, 95, 32, 32, 32, 95, 32, 95, 95, 95, 32, 32,
    32, 47, 32, 95, 95, 124, 32, 95, 95, 124, 32, 95, 32, 92, 124, 32, 95, 32, 41, 32, 95, 95, 124, 32, 95, 32, 92, 32, 124, 32, 124, 32, 47, 32, 95, 95, 124, 32,
    32, 124, 40, 95, 95, 124, 32, 95, 124, 124, 32, 32, 32, 47, 124, 32, 95, 32, 92, 32, 95, 124, 124, 32, 32, 32, 47, 32, 124, 95, 124, 32, 92, 95, 95, 32, 92, 32,
    32, 92, 95, 95, 95, 124, 95, 95, 95, 124, 95, 124, 95, 92, 124, 95, 95, 95, 47, 95, 95, 95, 124, 95, 124, 95, 92, 92, 95, 95, 95, 47, 124, 95, 95, 95, 124, 32,
    32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32,
    32, 32, 32, 95, 95, 95, 95, 95, 95, 95, 95, 32, 32, 95, 95, 95, 95, 95, 95, 95, 95, 95, 95, 95, 32, 32, 95, 95, 95, 95, 95, 95, 95, 32, 32, 32, 32, 32,
    32, 32, 32, 92, 95, 95, 95, 95, 95, 32, 32, 92, 47, 95, 32, 32, 32, 92, 32, 32, 32, 95, 32, 32, 92, 32, 92, 32, 32, 32, 95, 32, 32, 92, 32, 32, 32, 32,
    32, 32, 32, 32, 47, 32, 32, 95, 95, 95, 95, 47, 32, 124, 32, 32, 32, 47, 32, 32, 47, 32, 92, 32, 32, 92, 47, 32, 32, 47, 32, 92, 32, 32, 92, 32, 32, 32,
    32, 32, 32, 47, 32, 32, 32, 32, 32, 32, 32, 92, 32, 124, 32, 32, 32, 92, 32, 32, 92, 95, 47, 32, 32, 32, 92, 32, 32, 92, 95, 47, 32, 32, 32, 92, 32, 32,
    32, 32, 32, 92, 95, 95, 95, 95, 95, 95, 95, 32, 92, 124, 95, 95, 95, 124, 92, 95, 95, 95, 95, 95, 32, 32, 47, 92, 95, 95, 95, 95, 95, 32, 32, 47, 32, 32,
    32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 92, 47, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 92, 47, 32, 32, 32, 32, 32, 32, 32, 92, 47, 32, 32, 32,
    32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32,
    32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32,
    32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32,
    32, 32, 32, 32, 32, 32, 67, 114, 101, 97, 116, 101, 100, 32, 97, 116, 32, 84, 104, 101, 32, 66, 121, 116, 101, 32, 65, 116, 116, 105, 99, 33, 32, 32, 32, 32, 32, 32,
    32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32,
    32, 32, 32, 32, 32, 84, 121, 112, 101, 32, 98, 97, 115, 105, 99, 122, 56, 48, 32, 102, 111, 114, 32, 90, 56, 48, 32, 66, 65, 83, 73, 67, 32, 32, 32, 32, 32, 32,
    32, 32, 32, 32, 84, 121, 112, 101, 32, 98, 97, 115, 105, 99, 54, 53, 48, 50, 32, 102, 111, 114, 32, 54, 53, 48, 50, 32, 66, 65, 83, 73, 67, 32, 32, 32, 32, 32,
    32, 32, 32, 84, 121, 112, 101, 32, 104, 101, 108, 112, 32, 111, 114, 32, 63, 32, 102, 111, 114, 32, 66, 73, 79, 83, 32, 99, 111, 109, 109, 97, 110, 100, 115, 32, 32, 32,
    32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32,
];
