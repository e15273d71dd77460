use thiserror::Error;

/// Failures surfaced to the host while loading or stepping the machine.
///
/// `UnknownOpcode` is recoverable; the scheduler logs it and keeps running.
/// The memory and stack variants fail the step that raised them so that the
/// faulting operation cannot corrupt unrelated state, and the host decides
/// whether to halt.
#[derive(Debug, Error)]
pub enum Chip8Error {
    #[error("ROM is too large ({size} bytes), max size is {max_size} bytes")]
    RomTooLarge { size: usize, max_size: usize },

    #[error("memory access out of bounds at address {address:#06X}")]
    MemoryOutOfBounds { address: usize },

    #[error("stack overflow: call stack depth of 16 exceeded")]
    StackOverflow,

    #[error("stack underflow: return with an empty call stack")]
    StackUnderflow,

    #[error("unknown opcode {opcode:#06X}")]
    UnknownOpcode { opcode: u16 },

    #[error("unknown key symbol {symbol:?}")]
    UnknownKey { symbol: char },

    #[error("unable to read ROM: {0}")]
    Io(#[from] std::io::Error),
}
