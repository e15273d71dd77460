use std::cell::RefCell;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

use beep::beep;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use chip8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use chip8_core::Chip8;
use chip8_display::Display;

use crate::keymap::keymap;

/// Tone frequency while the sound timer runs.
const BEEP_PITCH: u16 = 2093; // C

pub fn run(rom: PathBuf, hz: u32, scale: u32) {
    // Get SDL2 context
    let sdl: sdl2::Sdl = sdl2::init().unwrap();
    let display = Rc::new(RefCell::new(Display::new(&sdl, scale)));
    let mut events = sdl.event_pump().unwrap();

    // The machine drives the window through its pixel port and the beeper
    // through its audio port
    let pixel_display = Rc::clone(&display);
    let mut chip8: Chip8 = Chip8::new(
        DISPLAY_WIDTH as u32 * scale,
        DISPLAY_HEIGHT as u32 * scale,
        Box::new(move |x, y, scale, on| pixel_display.borrow_mut().draw_pixel(x, y, scale, on)),
        Box::new(|on| {
            let pitch = if on { BEEP_PITCH } else { 0 };
            if beep(pitch).is_err() {
                log::debug!("audio device unavailable, staying silent");
            }
        }),
    );

    // Load ROM
    let file = File::open(&rom).expect("unable to open ROM file");
    let mut reader = BufReader::new(file);
    match chip8.load_rom(&mut reader) {
        Ok(()) => log::info!("loaded {}", rom.display()),
        Err(err) => {
            log::error!("unable to load {}: {err}", rom.display());
            return;
        }
    }
    chip8.start();

    // Set initial timing
    let cycle_time: Duration = Duration::from_secs(1) / hz;
    let mut last_cycle: Instant = Instant::now();

    // Whether or not the configured cycle rate should be respected
    let mut fast_forward: bool = false;

    'event: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(symbol)) => {
                        if let Err(err) = chip8.key_press(symbol) {
                            log::warn!("{err}");
                        }
                    }
                    (Keycode::Space, _) => fast_forward = true,
                    (Keycode::P, _) => {
                        if chip8.is_running() {
                            chip8.stop();
                        } else {
                            chip8.start();
                        }
                    }
                    (Keycode::Escape, _) => break 'event,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(symbol)) => {
                        if let Err(err) = chip8.key_release(symbol) {
                            log::warn!("{err}");
                        }
                    }
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        // Update state
        if let Err(err) = chip8.step() {
            log::error!("halting after failed step: {err}");
            chip8.stop();
        }
        display.borrow_mut().present();

        // Handle timing
        let current_time = Instant::now();
        let elapsed_cycle_time = current_time - last_cycle;
        if !fast_forward && cycle_time > elapsed_cycle_time {
            std::thread::sleep(cycle_time - elapsed_cycle_time);
        }
        last_cycle = current_time;
    }
}
