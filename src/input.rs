//! Keyboard and mouse state.

use glutin::{ElementState, ModifiersState, VirtualKeyCode};
use vec_map::VecMap;

/// A keyboard key.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Key {
    Unknown,

    // Printable keys
    Space,
    Apostrophe,
    Comma,
    Minus,
    Period,
    Slash,
    Key0,
    Key1,
    Key2,
    Key3,
    Key4,
    Key5,
    Key6,
    Key7,
    Key8,
    Key9,
    Semicolon,
    Equal,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    LeftBracket,
    Backslash,
    RightBracket,
    GraveAccent,
    World1,
    World2,

    // Function keys
    Escape,
    Enter,
    Tab,
    Backspace,
    Insert,
    Delete,
    Right,
    Left,
    Down,
    Up,
    PageUp,
    PageDown,
    Home,
    End,
    CapsLock,
    ScrollLock,
    NumLock,
    PrintScreen,
    Pause,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    F13,
    F14,
    F15,
    F16,
    F17,
    F18,
    F19,
    F20,
    F21,
    F22,
    F23,
    F24,
    F25,

    // Keypad
    Kp0,
    Kp1,
    Kp2,
    Kp3,
    Kp4,
    Kp5,
    Kp6,
    Kp7,
    Kp8,
    Kp9,
    KpDecimal,
    KpDivide,
    KpMultiply,
    KpSubtract,
    KpAdd,
    KpEnter,
    KpEqual,

    // Modifiers
    LeftShift,
    LeftControl,
    LeftAlt,
    LeftSuper,
    RightShift,
    RightControl,
    RightAlt,
    RightSuper,
    Menu,
}

impl Key {
    fn index(self) -> usize {
        self as usize
    }
}

impl From<VirtualKeyCode> for Key {
    fn from(code: VirtualKeyCode) -> Self {
        use glutin::VirtualKeyCode as Vk;
        match code {
            Vk::Key1 => Key::Key1,
            Vk::Key2 => Key::Key2,
            Vk::Key3 => Key::Key3,
            Vk::Key4 => Key::Key4,
            Vk::Key5 => Key::Key5,
            Vk::Key6 => Key::Key6,
            Vk::Key7 => Key::Key7,
            Vk::Key8 => Key::Key8,
            Vk::Key9 => Key::Key9,
            Vk::Key0 => Key::Key0,

            Vk::A => Key::A,
            Vk::B => Key::B,
            Vk::C => Key::C,
            Vk::D => Key::D,
            Vk::E => Key::E,
            Vk::F => Key::F,
            Vk::G => Key::G,
            Vk::H => Key::H,
            Vk::I => Key::I,
            Vk::J => Key::J,
            Vk::K => Key::K,
            Vk::L => Key::L,
            Vk::M => Key::M,
            Vk::N => Key::N,
            Vk::O => Key::O,
            Vk::P => Key::P,
            Vk::Q => Key::Q,
            Vk::R => Key::R,
            Vk::S => Key::S,
            Vk::T => Key::T,
            Vk::U => Key::U,
            Vk::V => Key::V,
            Vk::W => Key::W,
            Vk::X => Key::X,
            Vk::Y => Key::Y,
            Vk::Z => Key::Z,

            Vk::Escape => Key::Escape,
            Vk::F1 => Key::F1,
            Vk::F2 => Key::F2,
            Vk::F3 => Key::F3,
            Vk::F4 => Key::F4,
            Vk::F5 => Key::F5,
            Vk::F6 => Key::F6,
            Vk::F7 => Key::F7,
            Vk::F8 => Key::F8,
            Vk::F9 => Key::F9,
            Vk::F10 => Key::F10,
            Vk::F11 => Key::F11,
            Vk::F12 => Key::F12,
            Vk::F13 => Key::F13,
            Vk::F14 => Key::F14,
            Vk::F15 => Key::F15,

            Vk::Snapshot => Key::PrintScreen,
            Vk::Scroll => Key::ScrollLock,
            Vk::Pause => Key::Pause,
            Vk::Insert => Key::Insert,
            Vk::Home => Key::Home,
            Vk::Delete => Key::Delete,
            Vk::End => Key::End,
            Vk::PageDown => Key::PageDown,
            Vk::PageUp => Key::PageUp,
            Vk::Left => Key::Left,
            Vk::Up => Key::Up,
            Vk::Right => Key::Right,
            Vk::Down => Key::Down,
            Vk::Back => Key::Backspace,
            Vk::Return => Key::Enter,
            Vk::Space => Key::Space,
            Vk::Tab => Key::Tab,
            Vk::Capital => Key::CapsLock,
            Vk::Numlock => Key::NumLock,
            Vk::Apps => Key::Menu,

            Vk::Numpad0 => Key::Kp0,
            Vk::Numpad1 => Key::Kp1,
            Vk::Numpad2 => Key::Kp2,
            Vk::Numpad3 => Key::Kp3,
            Vk::Numpad4 => Key::Kp4,
            Vk::Numpad5 => Key::Kp5,
            Vk::Numpad6 => Key::Kp6,
            Vk::Numpad7 => Key::Kp7,
            Vk::Numpad8 => Key::Kp8,
            Vk::Numpad9 => Key::Kp9,
            Vk::Add => Key::KpAdd,
            Vk::Subtract => Key::KpSubtract,
            Vk::Multiply => Key::KpMultiply,
            Vk::Divide => Key::KpDivide,
            Vk::Decimal => Key::KpDecimal,
            Vk::NumpadEnter => Key::KpEnter,
            Vk::NumpadEquals => Key::KpEqual,

            Vk::Apostrophe => Key::Apostrophe,
            Vk::Backslash => Key::Backslash,
            Vk::Comma => Key::Comma,
            Vk::Equals => Key::Equal,
            Vk::Grave => Key::GraveAccent,
            Vk::LBracket => Key::LeftBracket,
            Vk::RBracket => Key::RightBracket,
            Vk::Minus => Key::Minus,
            Vk::Period => Key::Period,
            Vk::Semicolon => Key::Semicolon,
            Vk::Slash => Key::Slash,

            Vk::LAlt => Key::LeftAlt,
            Vk::LControl => Key::LeftControl,
            Vk::LShift => Key::LeftShift,
            Vk::LWin => Key::LeftSuper,
            Vk::RAlt => Key::RightAlt,
            Vk::RControl => Key::RightControl,
            Vk::RShift => Key::RightShift,
            Vk::RWin => Key::RightSuper,

            _ => Key::Unknown,
        }
    }
}

/// A mouse button.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MouseButton {
    /// Primary button.
    Left,

    /// Secondary button.
    Right,

    /// Wheel button.
    Middle,

    /// Any further button.
    Other(u8),
}

impl MouseButton {
    fn index(self) -> usize {
        match self {
            MouseButton::Left => 0,
            MouseButton::Right => 1,
            MouseButton::Middle => 2,
            MouseButton::Other(n) => 3 + n as usize,
        }
    }
}

impl From<glutin::MouseButton> for MouseButton {
    fn from(button: glutin::MouseButton) -> Self {
        match button {
            glutin::MouseButton::Left => MouseButton::Left,
            glutin::MouseButton::Right => MouseButton::Right,
            glutin::MouseButton::Middle => MouseButton::Middle,
            glutin::MouseButton::Other(n) => MouseButton::Other(n),
        }
    }
}

/// Either a key or a mouse button, for state queries.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Button {
    /// A keyboard key.
    Key(Key),

    /// A mouse button.
    Mouse(MouseButton),
}

impl From<Key> for Button {
    fn from(key: Key) -> Self {
        Button::Key(key)
    }
}

impl From<MouseButton> for Button {
    fn from(button: MouseButton) -> Self {
        Button::Mouse(button)
    }
}

/// What happened to a key or button.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Action {
    /// The key or button went up.
    Released,

    /// The key or button went down.
    Pressed,

    /// The key was held down long enough to repeat.
    Repeated,
}

bitflags::bitflags! {
    /// Modifier keys held, plus the lock key states.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct Modifiers: u8 {
        /// Either shift key.
        const SHIFT = 0x01;
        /// Either control key.
        const CONTROL = 0x02;
        /// Either alt key.
        const ALT = 0x04;
        /// Either super (logo) key.
        const SUPER = 0x08;
        /// Caps lock is on.
        const CAPS_LOCK = 0x10;
        /// Num lock is on.
        const NUM_LOCK = 0x20;
    }
}

impl Modifiers {
    /// Keys reported by the window system on every event.
    const HELD: Modifiers = Modifiers::SHIFT
        .union(Modifiers::CONTROL)
        .union(Modifiers::ALT)
        .union(Modifiers::SUPER);
}

impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        let mut modifiers = Modifiers::empty();
        modifiers.set(Modifiers::SHIFT, state.shift);
        modifiers.set(Modifiers::CONTROL, state.ctrl);
        modifiers.set(Modifiers::ALT, state.alt);
        modifiers.set(Modifiers::SUPER, state.logo);
        modifiers
    }
}

/// Tracks which keys and buttons are held, and where the cursor is.
#[derive(Clone, Debug, Default)]
pub struct Input {
    keys: VecMap<()>,
    buttons: VecMap<()>,
    cursor: glam::DVec2,
    modifiers: Modifiers,
}

impl Input {
    /// Constructor. Nothing held, cursor at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a key transition and classifies it.
    ///
    /// A press of a key that is already held is a repeat. `Key::Unknown`
    /// stands for many physical keys, so it is never held and never repeats.
    pub fn key(&mut self, key: Key, state: ElementState) -> Action {
        if key == Key::Unknown {
            return match state {
                ElementState::Pressed => Action::Pressed,
                ElementState::Released => Action::Released,
            };
        }
        match state {
            ElementState::Pressed => {
                if self.keys.insert(key.index(), ()).is_some() {
                    return Action::Repeated;
                }
                match key {
                    Key::CapsLock => self.modifiers.toggle(Modifiers::CAPS_LOCK),
                    Key::NumLock => self.modifiers.toggle(Modifiers::NUM_LOCK),
                    _ => {}
                }
                Action::Pressed
            }
            ElementState::Released => {
                self.keys.remove(key.index());
                Action::Released
            }
        }
    }

    /// Records a mouse button transition.
    pub fn mouse_button(&mut self, button: MouseButton, state: ElementState) -> Action {
        match state {
            ElementState::Pressed => {
                self.buttons.insert(button.index(), ());
                Action::Pressed
            }
            ElementState::Released => {
                self.buttons.remove(button.index());
                Action::Released
            }
        }
    }

    /// Replaces the held modifier keys, keeping the lock states.
    pub fn set_modifiers(&mut self, held: Modifiers) {
        self.modifiers = (self.modifiers - Modifiers::HELD) | (held & Modifiers::HELD);
    }

    /// Returns the current modifiers.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Records the cursor position.
    pub fn set_cursor(&mut self, position: glam::DVec2) {
        self.cursor = position;
    }

    /// Returns the last cursor position, in window coordinates.
    pub fn cursor(&self) -> glam::DVec2 {
        self.cursor
    }

    /// Returns `true` while `key` is held.
    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.keys.contains_key(key.index())
    }

    /// Returns `true` while `key` is up.
    pub fn is_key_released(&self, key: Key) -> bool {
        !self.is_key_pressed(key)
    }

    /// Returns `true` while `button` is held.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons.contains_key(button.index())
    }

    /// Returns `true` while `button` is up.
    pub fn is_button_released(&self, button: MouseButton) -> bool {
        !self.is_button_pressed(button)
    }

    /// Returns `true` while the key or button is held.
    pub fn is_pressed<B: Into<Button>>(&self, button: B) -> bool {
        match button.into() {
            Button::Key(key) => self.is_key_pressed(key),
            Button::Mouse(button) => self.is_button_pressed(button),
        }
    }

    /// Forgets every held key and button, e.g. when focus is lost.
    pub fn release_all(&mut self) {
        self.keys.clear();
        self.buttons.clear();
        self.modifiers -= Modifiers::HELD;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glutin::ElementState::{Pressed, Released};

    #[test]
    fn key_translation() {
        assert_eq!(Key::Enter, Key::from(VirtualKeyCode::Return));
        assert_eq!(Key::Backspace, Key::from(VirtualKeyCode::Back));
        assert_eq!(Key::Kp7, Key::from(VirtualKeyCode::Numpad7));
        assert_eq!(Key::LeftSuper, Key::from(VirtualKeyCode::LWin));
        assert_eq!(Key::Unknown, Key::from(VirtualKeyCode::Mail));
    }

    #[test]
    fn held_key_repeats() {
        let mut input = Input::new();
        assert_eq!(Action::Pressed, input.key(Key::W, Pressed));
        assert_eq!(Action::Repeated, input.key(Key::W, Pressed));
        assert!(input.is_key_pressed(Key::W));
        assert_eq!(Action::Released, input.key(Key::W, Released));
        assert!(input.is_key_released(Key::W));
        assert_eq!(Action::Pressed, input.key(Key::W, Pressed));
    }

    #[test]
    fn unmapped_keys_never_repeat() {
        let mut input = Input::new();
        let mail = Key::from(VirtualKeyCode::Mail);
        let calculator = Key::from(VirtualKeyCode::Calculator);
        assert_eq!(Action::Pressed, input.key(mail, Pressed));
        assert_eq!(Action::Pressed, input.key(calculator, Pressed));
        assert!(input.is_key_released(Key::Unknown));

        input.key(Key::A, Pressed);
        assert_eq!(Action::Released, input.key(mail, Released));
        assert!(input.is_key_pressed(Key::A));
    }

    #[test]
    fn released_buttons_are_up() {
        let mut input = Input::new();
        assert!(input.is_button_released(MouseButton::Left));
        input.mouse_button(MouseButton::Left, Pressed);
        input.mouse_button(MouseButton::Other(2), Pressed);
        assert!(input.is_button_pressed(MouseButton::Left));
        assert!(!input.is_button_released(MouseButton::Left));
        assert!(input.is_button_released(MouseButton::Right));
        assert_eq!(Action::Released, input.mouse_button(MouseButton::Left, Released));
        assert!(input.is_button_released(MouseButton::Left));
        assert!(input.is_button_pressed(MouseButton::Other(2)));
        assert!(input.is_pressed(MouseButton::Other(2)));
        assert!(!input.is_pressed(Key::A));
    }

    #[test]
    fn lock_keys_toggle_on_press() {
        let mut input = Input::new();
        input.key(Key::CapsLock, Pressed);
        input.key(Key::CapsLock, Pressed);
        assert!(input.modifiers().contains(Modifiers::CAPS_LOCK));
        input.key(Key::CapsLock, Released);
        input.key(Key::CapsLock, Pressed);
        assert!(!input.modifiers().contains(Modifiers::CAPS_LOCK));

        input.key(Key::NumLock, Pressed);
        input.set_modifiers(Modifiers::SHIFT);
        assert_eq!(Modifiers::SHIFT | Modifiers::NUM_LOCK, input.modifiers());
        input.set_modifiers(Modifiers::empty());
        assert_eq!(Modifiers::NUM_LOCK, input.modifiers());
    }

    #[test]
    fn modifier_state_translation() {
        let state = ModifiersState { shift: true, ctrl: false, alt: true, logo: false };
        assert_eq!(Modifiers::SHIFT | Modifiers::ALT, Modifiers::from(state));
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut input = Input::new();
        input.key(Key::A, Pressed);
        input.mouse_button(MouseButton::Middle, Pressed);
        input.set_modifiers(Modifiers::CONTROL);
        input.set_cursor(glam::DVec2::new(3.0, 4.0));
        input.release_all();
        assert!(input.is_key_released(Key::A));
        assert!(input.is_button_released(MouseButton::Middle));
        assert!(input.modifiers().is_empty());
        assert_eq!(glam::DVec2::new(3.0, 4.0), input.cursor());
    }
}
