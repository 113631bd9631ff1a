//! Input identifiers and per-input edge state.
//!
//! Backends report raw "currently held" snapshots indexed by these closed
//! enumerations. The engine turns each snapshot into a [`KeyState`] once per
//! frame; clients only ever see the resulting edge state.

use serde::{Deserialize, Serialize};

use crate::error::{PixengError, Result};

macro_rules! keys {
    ($($(#[$meta:meta])* $name:ident = $scancode:literal,)+) => {
        /// Keyboard keys tracked by the engine.
        ///
        /// Each key maps to its USB HID usage id, which is also the SDL
        /// scancode, so backends can index their keyboard snapshot directly.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum Key {
            $($(#[$meta])* $name,)+
        }

        impl Key {
            /// Every tracked key, in index order.
            pub const ALL: &'static [Key] = &[$(Key::$name,)+];

            /// Number of tracked keys.
            pub const COUNT: usize = Self::ALL.len();

            /// Hardware scancode (USB HID usage id) for this key.
            pub const fn scancode(self) -> u32 {
                match self {
                    $(Key::$name => $scancode,)+
                }
            }

            /// Look up the key for a raw scancode.
            pub const fn from_scancode(scancode: u32) -> Option<Key> {
                match scancode {
                    $($scancode => Some(Key::$name),)+
                    _ => None,
                }
            }
        }
    };
}

keys! {
    A = 4,
    B = 5,
    C = 6,
    D = 7,
    E = 8,
    F = 9,
    G = 10,
    H = 11,
    I = 12,
    J = 13,
    K = 14,
    L = 15,
    M = 16,
    N = 17,
    O = 18,
    P = 19,
    Q = 20,
    R = 21,
    S = 22,
    T = 23,
    U = 24,
    V = 25,
    W = 26,
    X = 27,
    Y = 28,
    Z = 29,
    Num1 = 30,
    Num2 = 31,
    Num3 = 32,
    Num4 = 33,
    Num5 = 34,
    Num6 = 35,
    Num7 = 36,
    Num8 = 37,
    Num9 = 38,
    Num0 = 39,
    Return = 40,
    Escape = 41,
    Backspace = 42,
    Tab = 43,
    Space = 44,
    Right = 79,
    Left = 80,
    Down = 81,
    Up = 82,
}

impl Key {
    /// Dense index into per-key state tables, in `0..Key::COUNT`.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u32> for Key {
    type Error = PixengError;

    fn try_from(scancode: u32) -> Result<Self> {
        Key::from_scancode(scancode)
            .ok_or_else(|| PixengError::UnknownInput(format!("key scancode {scancode}")))
    }
}

/// Mouse buttons tracked by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    X1,
    X2,
}

impl MouseButton {
    pub const ALL: [MouseButton; 5] = [
        MouseButton::Left,
        MouseButton::Middle,
        MouseButton::Right,
        MouseButton::X1,
        MouseButton::X2,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Backend button number (1-based, as SDL numbers them).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }
}

impl TryFrom<u8> for MouseButton {
    type Error = PixengError;

    fn try_from(number: u8) -> Result<Self> {
        match number {
            1..=5 => Ok(MouseButton::ALL[(number - 1) as usize]),
            _ => Err(PixengError::UnknownInput(format!("mouse button {number}"))),
        }
    }
}

/// Edge-triggered state of a single key or mouse button for one frame.
///
/// `pressed` and `released` are one-frame flags recomputed every tick;
/// `held` is the steady state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    /// Became active this frame.
    pub pressed: bool,
    /// Inactive this frame.
    pub released: bool,
    /// Currently active.
    pub held: bool,
}

impl KeyState {
    /// Compute this frame's state from the previous one and the raw
    /// "currently active" flag polled from the backend.
    ///
    /// An inactive input reports `released` on every frame it stays
    /// inactive, not only on the frame it was let go.
    pub const fn next(self, raw: bool) -> KeyState {
        if raw {
            KeyState {
                pressed: !self.held,
                released: false,
                held: true,
            }
        } else {
            KeyState {
                pressed: false,
                released: true,
                held: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_indices_are_dense() {
        for (i, key) in Key::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
        }
        assert_eq!(Key::COUNT, 45);
    }

    #[test]
    fn key_scancodes_match_hid_usage() {
        assert_eq!(Key::A.scancode(), 4);
        assert_eq!(Key::Z.scancode(), 29);
        assert_eq!(Key::Num1.scancode(), 30);
        assert_eq!(Key::Num0.scancode(), 39);
        assert_eq!(Key::Space.scancode(), 44);
        assert_eq!(Key::Up.scancode(), 82);
    }

    #[test]
    fn from_scancode_roundtrips_every_key() {
        for &key in Key::ALL {
            assert_eq!(Key::from_scancode(key.scancode()), Some(key));
        }
    }

    #[test]
    fn unknown_scancode_is_reported() {
        assert_eq!(Key::from_scancode(0), None);
        assert_eq!(Key::from_scancode(45), None);
        let err = Key::try_from(300u32).unwrap_err();
        assert!(matches!(err, PixengError::UnknownInput(_)));
    }

    #[test]
    fn mouse_button_numbers() {
        assert_eq!(MouseButton::Left.number(), 1);
        assert_eq!(MouseButton::X2.number(), 5);
        for button in MouseButton::ALL {
            assert_eq!(MouseButton::try_from(button.number()).unwrap(), button);
        }
    }

    #[test]
    fn mouse_button_out_of_range() {
        assert!(MouseButton::try_from(0u8).is_err());
        assert!(MouseButton::try_from(6u8).is_err());
    }

    #[test]
    fn key_state_default_is_idle() {
        let s = KeyState::default();
        assert!(!s.pressed && !s.released && !s.held);
    }

    #[test]
    fn key_state_transition_sequence() {
        let raw = [false, true, true, false];
        let mut state = KeyState::default();
        let mut seen = Vec::new();
        for r in raw {
            state = state.next(r);
            seen.push((state.pressed, state.released, state.held));
        }
        assert_eq!(
            seen,
            vec![
                (false, true, false),
                (true, false, true),
                (false, false, true),
                (false, true, false),
            ]
        );
    }

    #[test]
    fn pressed_and_released_never_both_set() {
        for prev_held in [false, true] {
            for raw in [false, true] {
                let prev = KeyState {
                    pressed: false,
                    released: false,
                    held: prev_held,
                };
                let next = prev.next(raw);
                assert!(!(next.pressed && next.released));
                assert_eq!(next.held, raw);
            }
        }
    }

    #[test]
    fn key_deserializes_by_name() {
        #[derive(Deserialize)]
        struct Binding {
            key: Key,
        }
        let b: Binding = toml::from_str("key = \"Space\"").unwrap();
        assert_eq!(b.key, Key::Space);
    }

    mod proptests {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn next_tracks_raw_and_never_reports_both_edges(
                raws in proptest::collection::vec(any::<bool>(), 1..64),
            ) {
                let mut state = KeyState::default();
                let mut prev_raw = false;
                for raw in raws {
                    state = state.next(raw);
                    prop_assert_eq!(state.held, raw);
                    prop_assert!(!(state.pressed && state.released));
                    prop_assert_eq!(state.pressed, raw && !prev_raw);
                    prop_assert_eq!(state.released, !raw);
                    prev_raw = raw;
                }
            }

            #[test]
            fn scancode_lookup_inverts_key(index in 0..Key::COUNT) {
                let key = Key::ALL[index];
                prop_assert_eq!(Key::from_scancode(key.scancode()), Some(key));
                prop_assert_eq!(key.index(), index);
            }
        }
    }
}
