/// Logical display width in pixels.
pub const DISPLAY_WIDTH: usize = 64;

/// Logical display height in pixels.
pub const DISPLAY_HEIGHT: usize = 32;

/// Total addressable memory in bytes.
pub const MEMORY_SIZE: usize = 4096;

/// Address at which programs are loaded and execution begins.
pub const PROGRAM_START: u16 = 0x200;

/// Address of the built-in font sprite sheet.
pub const FONT_ADDR: u16 = 0x50;

/// Number of return addresses the call stack can hold.
pub const STACK_DEPTH: usize = 16;

/// Number of keys on the hexadecimal keypad.
pub const KEY_COUNT: usize = 16;

/// Milliseconds after its last press before a key auto-releases.
///
/// Some hosts only deliver key-down events, so a pressed key that never sees
/// an explicit release is dropped once this window elapses.
pub const KEY_DEBOUNCE_MS: u64 = 200;

/// Suggested instruction rate for hosts that drive `step` on a timer, in Hz.
///
/// Timers decrement once per step, so the host cadence directly sets both
/// the instruction rate and the timer decay rate.
pub const DEFAULT_CLOCK_HZ: u32 = 500;

/// Sprites for the hexadecimal digits 0..F, five bytes per glyph.
///
/// Loaded at `FONT_ADDR` on reset so that the font-address lookup opcode can
/// find the glyph for a digit at `FONT_ADDR + digit * 5`.
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
