use crate::constants::{KEY_COUNT, KEY_DEBOUNCE_MS};

/// # Keypad
///
/// Tracks the pressed state of the 16 hexadecimal keys along with each key's
/// last activation time. Some hosts only ever deliver key-down events, so a
/// sweep run once per cycle releases any key whose debounce window has
/// elapsed, whether or not an explicit release arrived. Presses, releases,
/// and the sweep all write the same pressed array; the last writer wins.
///
/// Times are milliseconds from the host's monotonic clock.
pub struct Keypad {
    pressed: [bool; KEY_COUNT],
    activated_at: [u64; KEY_COUNT],
}

impl Keypad {
    pub fn new() -> Self {
        Keypad {
            pressed: [false; KEY_COUNT],
            activated_at: [0; KEY_COUNT],
        }
    }

    /// Marks `key` pressed and stamps its activation time.
    pub fn press(&mut self, key: u8, now: u64) {
        self.pressed[key as usize] = true;
        self.activated_at[key as usize] = now;
    }

    /// Marks `key` released immediately.
    pub fn release(&mut self, key: u8) {
        self.pressed[key as usize] = false;
    }

    /// Releases every key whose debounce window has elapsed.
    pub fn sweep(&mut self, now: u64) {
        for key in 0..KEY_COUNT {
            if self.pressed[key] && now.saturating_sub(self.activated_at[key]) >= KEY_DEBOUNCE_MS {
                self.pressed[key] = false;
            }
        }
    }

    /// The pressed state of all 16 keys, for the key-skip operations.
    pub fn snapshot(&self) -> [bool; KEY_COUNT] {
        self.pressed
    }

    pub fn reset(&mut self) {
        *self = Keypad::new();
    }
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut keypad = Keypad::new();
        keypad.press(0x7, 100);
        assert!(keypad.snapshot()[0x7]);
        keypad.release(0x7);
        assert!(!keypad.snapshot()[0x7]);
    }

    #[test]
    fn test_sweep_releases_after_debounce_window() {
        let mut keypad = Keypad::new();
        keypad.press(0x7, 100);
        keypad.sweep(100 + KEY_DEBOUNCE_MS - 1);
        assert!(keypad.snapshot()[0x7]);
        keypad.sweep(100 + KEY_DEBOUNCE_MS);
        assert!(!keypad.snapshot()[0x7]);
    }

    #[test]
    fn test_repress_restarts_the_window() {
        let mut keypad = Keypad::new();
        keypad.press(0x7, 100);
        keypad.press(0x7, 250);
        keypad.sweep(100 + KEY_DEBOUNCE_MS);
        assert!(keypad.snapshot()[0x7]);
    }

    #[test]
    fn test_sweep_only_touches_expired_keys() {
        let mut keypad = Keypad::new();
        keypad.press(0x0, 0);
        keypad.press(0x1, 150);
        keypad.sweep(200);
        let snapshot = keypad.snapshot();
        assert!(!snapshot[0x0]);
        assert!(snapshot[0x1]);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut keypad = Keypad::new();
        keypad.press(0x3, 10);
        keypad.reset();
        assert_eq!(keypad.snapshot(), [false; KEY_COUNT]);
    }
}
