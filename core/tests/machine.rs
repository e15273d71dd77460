//! End-to-end checks driving the public machine surface with recording
//! stand-ins for the host's pixel and audio ports.

use std::cell::RefCell;
use std::rc::Rc;

use chip8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use chip8_core::{Chip8, Chip8Error};

type PixelEvent = (usize, usize, bool);

/// A machine wired to buffers that capture every port invocation.
fn recording_machine() -> (Chip8, Rc<RefCell<Vec<PixelEvent>>>, Rc<RefCell<Vec<bool>>>) {
    let pixels = Rc::new(RefCell::new(Vec::new()));
    let audio = Rc::new(RefCell::new(Vec::new()));

    let pixel_sink = Rc::clone(&pixels);
    let audio_sink = Rc::clone(&audio);
    let chip8 = Chip8::new(
        640,
        320,
        Box::new(move |x, y, _scale, on| pixel_sink.borrow_mut().push((x, y, on))),
        Box::new(move |on| audio_sink.borrow_mut().push(on)),
    );

    (chip8, pixels, audio)
}

/// Splits the flat pixel event log into per-flush frames.
fn frames(events: &[PixelEvent]) -> Vec<&[PixelEvent]> {
    events.chunks(DISPLAY_WIDTH * DISPLAY_HEIGHT).collect()
}

fn lit(frame: &[PixelEvent]) -> Vec<(usize, usize)> {
    frame
        .iter()
        .filter(|(_, _, on)| *on)
        .map(|&(x, y, _)| (x, y))
        .collect()
}

#[test]
fn draws_the_zero_glyph_from_the_font() {
    let (mut chip8, pixels, _) = recording_machine();

    // A050: point I at the font base; D005: draw the 5-row glyph at (V0, V0)
    chip8.load_program(&[0xA0, 0x50, 0xD0, 0x05]).unwrap();
    chip8.start();
    chip8.step().unwrap();
    chip8.step().unwrap();

    let events = pixels.borrow();
    let flushed = frames(&events);
    assert_eq!(flushed.len(), 1);

    // the glyph bit pattern F0 90 90 90 F0
    let expected = vec![
        (0, 0), (1, 0), (2, 0), (3, 0),
        (0, 1), (3, 1),
        (0, 2), (3, 2),
        (0, 3), (3, 3),
        (0, 4), (1, 4), (2, 4), (3, 4),
    ];
    assert_eq!(lit(flushed[0]), expected);
}

#[test]
fn redrawing_a_sprite_erases_it() {
    let (mut chip8, pixels, _) = recording_machine();

    // draw the top row of the 0 glyph twice at the same spot
    chip8.load_program(&[0xA0, 0x50, 0xD0, 0x01, 0xD0, 0x01]).unwrap();
    chip8.start();
    for _ in 0..3 {
        chip8.step().unwrap();
    }

    let events = pixels.borrow();
    let flushed = frames(&events);
    assert_eq!(flushed.len(), 2);
    assert_eq!(lit(flushed[0]).len(), 4);
    assert!(lit(flushed[1]).is_empty());
}

#[test]
fn sound_timer_raises_and_lowers_the_tone_once() {
    let (mut chip8, _, audio) = recording_machine();

    // 6003: V0 = 3; F018: sound timer = V0; the rest of memory decodes to
    // nothing and is skipped over
    chip8.load_program(&[0x60, 0x03, 0xF0, 0x18]).unwrap();
    chip8.start();
    for _ in 0..6 {
        chip8.step().unwrap();
    }

    assert_eq!(*audio.borrow(), vec![true, false]);
}

#[test]
fn unrecognized_opcodes_do_not_stop_the_machine() {
    let (mut chip8, pixels, _) = recording_machine();

    chip8.load_program(&[0x00, 0x00, 0xA0, 0x50, 0xD0, 0x01]).unwrap();
    chip8.start();
    for _ in 0..3 {
        chip8.step().unwrap();
    }

    let events = pixels.borrow();
    let flushed = frames(&events);
    assert_eq!(flushed.len(), 1);
    assert_eq!(lit(flushed[0]).len(), 4);
}

#[test]
fn returning_with_an_empty_stack_fails_the_step() {
    let (mut chip8, _, _) = recording_machine();

    chip8.load_program(&[0x00, 0xEE]).unwrap();
    chip8.start();
    assert!(matches!(chip8.step(), Err(Chip8Error::StackUnderflow)));
}

#[test]
fn oversized_programs_are_refused() {
    let (mut chip8, _, _) = recording_machine();
    assert!(matches!(
        chip8.load_program(&[0; 4000]),
        Err(Chip8Error::RomTooLarge { .. })
    ));
}

#[test]
fn reset_halts_and_clears_between_programs() {
    let (mut chip8, pixels, _) = recording_machine();

    chip8.load_program(&[0xA0, 0x50, 0xD0, 0x05]).unwrap();
    chip8.start();
    chip8.step().unwrap();
    chip8.step().unwrap();
    chip8.reset();

    // stopped after reset; stepping does nothing
    let flushed_before = pixels.borrow().len();
    chip8.step().unwrap();
    assert_eq!(pixels.borrow().len(), flushed_before);

    // the same program runs identically after a reset and reload
    chip8.load_program(&[0xA0, 0x50, 0xD0, 0x05]).unwrap();
    chip8.start();
    chip8.step().unwrap();
    chip8.step().unwrap();

    let events = pixels.borrow();
    let flushed = frames(&events);
    assert_eq!(flushed.len(), 2);
    assert_eq!(lit(flushed[0]), lit(flushed[1]));
}
