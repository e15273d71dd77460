use sdl2::keyboard::Keycode;

/// Maps SDL2 keycodes onto the machine's keypad symbols.
///
/// The symbols follow the usual 1234/QWER/ASDF/ZXCV layout; the machine
/// translates them to hexadecimal key codes itself.
pub fn keymap(key: Keycode) -> Option<char> {
    match key {
        Keycode::Num1 => Some('1'),
        Keycode::Num2 => Some('2'),
        Keycode::Num3 => Some('3'),
        Keycode::Num4 => Some('4'),
        Keycode::Q => Some('Q'),
        Keycode::W => Some('W'),
        Keycode::E => Some('E'),
        Keycode::R => Some('R'),
        Keycode::A => Some('A'),
        Keycode::S => Some('S'),
        Keycode::D => Some('D'),
        Keycode::F => Some('F'),
        Keycode::Z => Some('Z'),
        Keycode::X => Some('X'),
        Keycode::C => Some('C'),
        Keycode::V => Some('V'),
        _ => None,
    }
}
