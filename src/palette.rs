//! Preset swatches offered by the picker.

use crate::hex::Hex;

/// The preset swatches, in display order.
pub const PRESETS: [Hex; 35] = [
    Hex::from_u32(0xFF6B6B),
    Hex::from_u32(0x4ECDC4),
    Hex::from_u32(0x45B7D1),
    Hex::from_u32(0x96CEB4),
    Hex::from_u32(0xFFEAA7),
    Hex::from_u32(0xDDA0DD),
    Hex::from_u32(0x98D8C8),
    Hex::from_u32(0xF7DC6F),
    Hex::from_u32(0xBB8FCE),
    Hex::from_u32(0x85C1E9),
    Hex::from_u32(0xF8C471),
    Hex::from_u32(0x82E0AA),
    Hex::from_u32(0xF1948A),
    Hex::from_u32(0x85929E),
    Hex::from_u32(0xAAB7B8),
    Hex::from_u32(0x2C3E50),
    Hex::from_u32(0x34495E),
    Hex::from_u32(0xE74C3C),
    Hex::from_u32(0x3498DB),
    Hex::from_u32(0x2ECC71),
    Hex::from_u32(0xF39C12),
    Hex::from_u32(0x9B59B6),
    Hex::from_u32(0x1ABC9C),
    Hex::from_u32(0xE67E22),
    Hex::from_u32(0x7F8C8D),
    Hex::from_u32(0xFFFFFF),
    Hex::from_u32(0xF8F9FA),
    Hex::from_u32(0xE9ECEF),
    Hex::from_u32(0xDEE2E6),
    Hex::from_u32(0xCED4DA),
    Hex::from_u32(0xADB5BD),
    Hex::from_u32(0x6C757D),
    Hex::from_u32(0x495057),
    Hex::from_u32(0x343A40),
    Hex::from_u32(0x000000),
];
