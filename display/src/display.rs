use sdl2::pixels::Color;
use sdl2::rect::Rect;

use chip8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

const BACKGROUND: Color = Color::RGB(0, 0, 0);
const FOREGROUND: Color = Color::RGB(255, 255, 255);

/// # Display
/// An SDL2 window that renders the machine's 64x32 logical pixels as scaled
/// squares.
///
/// The window knows nothing about the machine; it has the same shape as the
/// pixel-output port and is driven one pixel at a time during frame flushes.
/// `present` makes the accumulated pixel writes visible.
// TODO propagate sdl2 failures instead of unwrapping
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
}

impl Display {
    /// Creates a window sized to the logical display times `scale`.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `scale` the size multiplier for each logical pixel
    pub fn new(sdl: &sdl2::Sdl, scale: u32) -> Self {
        let video_subsystem = sdl.video().unwrap();
        let window = video_subsystem
            .window(
                "Chip-8",
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .opengl()
            .build()
            .unwrap();
        let mut canvas = window.into_canvas().build().unwrap();

        canvas.set_draw_color(BACKGROUND);
        canvas.clear();
        canvas.present();

        Display { canvas }
    }

    /// Paints one logical pixel as a `scale`-sized square.
    ///
    /// # Arguments
    /// * `x` / `y` the logical pixel position
    /// * `scale` the size multiplier supplied with every pixel update
    /// * `on` whether the pixel is lit
    pub fn draw_pixel(&mut self, x: usize, y: usize, scale: u32, on: bool) {
        let color = if on { FOREGROUND } else { BACKGROUND };
        self.canvas.set_draw_color(color);
        self.canvas
            .fill_rect(Rect::new(
                (x as u32 * scale) as i32,
                (y as u32 * scale) as i32,
                scale,
                scale,
            ))
            .unwrap();
    }

    /// Presents everything drawn since the last call.
    pub fn present(&mut self) {
        self.canvas.present()
    }
}
