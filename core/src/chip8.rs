use std::io;
use std::time::Instant;

use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, MEMORY_SIZE, PROGRAM_START};
use crate::error::Chip8Error;
use crate::instruction::Instruction;
use crate::keymap::keymap;
use crate::keypad::Keypad;
use crate::operations;
use crate::state::State;

/// Pixel-output port: called with `(x, y, scale, on)` for one logical pixel.
pub type PixelOutput = Box<dyn FnMut(usize, usize, u32, bool)>;

/// Audio trigger port: `true` starts the tone, `false` stops it.
pub type AudioTrigger = Box<dyn FnMut(bool)>;

/// Monotonic millisecond clock, used to stamp and expire key presses.
pub type Clock = Box<dyn FnMut() -> u64>;

/// # Chip-8
/// A Chip-8 virtual machine driven one cycle at a time by its host.
///
/// The host decides when a cycle happens; the machine never schedules its
/// own execution. Each `step` while running performs, in order: the keypad
/// timeout sweep, one instruction fetch (advancing the program counter),
/// one dispatch, one tick of both timers, and a frame flush if the frame
/// buffer changed. Timer decay is therefore tied to the host's step cadence
/// rather than to wall-clock time, and hosts pick their call rate
/// accordingly.
///
/// Pixel output and the audio trigger are ports injected at construction
/// and invoked synchronously during a step; they must not block. The pixel
/// scale is derived from the host's screen size and passed on every pixel
/// call.
///
/// Supplies interfaces for:
/// - loading programs from a byte slice or reader
/// - pressing and releasing keys by their keypad symbol
/// - starting, stopping, and resetting the machine
/// - advancing one cycle
pub struct Chip8 {
    state: State,
    keypad: Keypad,
    running: bool,
    sounding: bool,
    scale: u32,
    clock: Clock,
    pixel_output: PixelOutput,
    audio_trigger: AudioTrigger,
}

impl Chip8 {
    /// Creates a stopped machine whose pixels scale to the host's screen.
    ///
    /// # Arguments
    /// * `screen_width` / `screen_height` the host screen size in pixels
    /// * `pixel_output` sink for logical pixel updates on each frame flush
    /// * `audio_trigger` edge-triggered tone on/off sink
    pub fn new(
        screen_width: u32,
        screen_height: u32,
        pixel_output: PixelOutput,
        audio_trigger: AudioTrigger,
    ) -> Self {
        let scale = u32::min(
            screen_width / DISPLAY_WIDTH as u32,
            screen_height / DISPLAY_HEIGHT as u32,
        );
        let epoch = Instant::now();
        Chip8 {
            state: State::new(),
            keypad: Keypad::new(),
            running: false,
            sounding: false,
            scale,
            clock: Box::new(move || epoch.elapsed().as_millis() as u64),
            pixel_output,
            audio_trigger,
        }
    }

    /// Replaces the monotonic clock, e.g. with a fake for tests.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Copies a program into memory at the load address.
    ///
    /// Fails without touching memory if the program would run past the end.
    pub fn load_program(&mut self, bytes: &[u8]) -> Result<(), Chip8Error> {
        let start = PROGRAM_START as usize;
        let max_size = MEMORY_SIZE - start;
        if bytes.len() > max_size {
            return Err(Chip8Error::RomTooLarge {
                size: bytes.len(),
                max_size,
            });
        }
        self.state.memory[start..start + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    /// Loads a ROM from a byte source.
    ///
    /// # Arguments
    /// * `reader` a reader that yields a ROM image
    pub fn load_rom(&mut self, reader: &mut dyn io::Read) -> Result<(), Chip8Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.load_program(&bytes)
    }

    /// Reinitializes every piece of machine state and halts execution.
    pub fn reset(&mut self) {
        self.state = State::new();
        self.keypad.reset();
        self.running = false;
        self.sounding = false;
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Presses the key named by `symbol`, stamping its activation time.
    ///
    /// # Arguments
    /// * `symbol` one of the 16 keypad symbols (see [`keymap`])
    pub fn key_press(&mut self, symbol: char) -> Result<(), Chip8Error> {
        let key = keymap(symbol).ok_or(Chip8Error::UnknownKey { symbol })?;
        let now = (self.clock)();
        self.keypad.press(key, now);
        Ok(())
    }

    /// Releases the key named by `symbol` immediately.
    pub fn key_release(&mut self, symbol: char) -> Result<(), Chip8Error> {
        let key = keymap(symbol).ok_or(Chip8Error::UnknownKey { symbol })?;
        self.keypad.release(key);
        Ok(())
    }

    /// Advances the machine by a single cycle; a no-op while stopped.
    ///
    /// An unrecognized opcode is logged and skipped, with execution carrying
    /// on at the next instruction. Memory- and stack-safety faults abort the
    /// cycle and are returned for the host to act on; timers and the display
    /// are not ticked for an aborted cycle.
    pub fn step(&mut self) -> Result<(), Chip8Error> {
        if !self.running {
            return Ok(());
        }

        let now = (self.clock)();
        self.keypad.sweep(now);

        let op = self.fetch()?;
        self.state.pc += 0x2;

        match Instruction::decode(op) {
            Ok(instruction) => {
                self.state = operations::execute(instruction, &self.state, self.keypad.snapshot())?;
            }
            Err(err) => log::warn!("{err}"),
        }

        self.tick_timers();

        if self.state.draw_flag {
            self.flush_frame();
            self.state.draw_flag = false;
        }

        Ok(())
    }

    /// Gets the opcode currently pointed at by the pc.
    ///
    /// Memory is stored as bytes, but opcodes are 16 bits so two consecutive
    /// bytes are combined big-endian. Fetching past the end of memory is a
    /// fault; the program counter is never wrapped or masked.
    fn fetch(&self) -> Result<u16, Chip8Error> {
        let pc = self.state.pc as usize;
        if pc + 1 >= MEMORY_SIZE {
            return Err(Chip8Error::MemoryOutOfBounds { address: pc + 1 });
        }
        let left = u16::from(self.state.memory[pc]);
        let right = u16::from(self.state.memory[pc + 1]);
        Ok(left << 8 | right)
    }

    /// Decrements both timers by one unit, floored at zero.
    ///
    /// The audio trigger fires exactly once when the sound timer starts
    /// counting and exactly once when it reaches zero; a timer resting at
    /// zero fires nothing.
    fn tick_timers(&mut self) {
        if self.state.delay_timer > 0 {
            self.state.delay_timer -= 1;
        }

        if self.state.sound_timer > 0 {
            if !self.sounding {
                self.sounding = true;
                (self.audio_trigger)(true);
            }

            self.state.sound_timer -= 1;

            if self.state.sound_timer == 0 {
                self.sounding = false;
                (self.audio_trigger)(false);
            }
        }
    }

    /// Reports every logical pixel's current state through the pixel port.
    fn flush_frame(&mut self) {
        let scale = self.scale;
        for (y, row) in self.state.frame_buffer.iter().enumerate() {
            for (x, &pixel) in row.iter().enumerate() {
                (self.pixel_output)(x, y, scale, pixel == 1);
            }
        }
    }
}
