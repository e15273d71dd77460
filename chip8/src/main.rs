use std::path::PathBuf;

use clap::Parser;

use chip8_core::constants::DEFAULT_CLOCK_HZ;

mod keymap;
mod run;

/// A Chip-8 virtual machine with an SDL2 front end.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to a Chip-8 ROM
    rom: PathBuf,

    /// Instruction rate in steps per second; timers decay at the same rate
    #[arg(long, default_value_t = DEFAULT_CLOCK_HZ)]
    hz: u32,

    /// Window size multiplier for each logical pixel
    #[arg(long, default_value_t = 10)]
    scale: u32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    run::run(args.rom, args.hz, args.scale);
}
