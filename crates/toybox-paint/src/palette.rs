use toybox_engine::input::Key;
use toybox_engine::paint::Color;

/// The fixed six-color palette.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Swatch {
    #[default]
    Black,
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
}

impl Swatch {
    pub const ALL: [Swatch; 6] = [
        Swatch::Black,
        Swatch::Red,
        Swatch::Green,
        Swatch::Blue,
        Swatch::Yellow,
        Swatch::Magenta,
    ];

    pub const fn color(self) -> Color {
        match self {
            Swatch::Black => Color::rgb(0, 0, 0),
            Swatch::Red => Color::rgb(255, 0, 0),
            Swatch::Green => Color::rgb(0, 255, 0),
            Swatch::Blue => Color::rgb(0, 0, 255),
            Swatch::Yellow => Color::rgb(255, 255, 0),
            Swatch::Magenta => Color::rgb(255, 0, 255),
        }
    }

    /// K, R, G, B, Y, M.
    pub fn from_key(key: Key) -> Option<Swatch> {
        match key {
            Key::K => Some(Swatch::Black),
            Key::R => Some(Swatch::Red),
            Key::G => Some(Swatch::Green),
            Key::B => Some(Swatch::Blue),
            Key::Y => Some(Swatch::Yellow),
            Key::M => Some(Swatch::Magenta),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_swatch_has_a_key_and_distinct_color() {
        let keys = [Key::K, Key::R, Key::G, Key::B, Key::Y, Key::M];
        let mapped: Vec<Swatch> = keys.iter().filter_map(|&k| Swatch::from_key(k)).collect();
        assert_eq!(mapped, Swatch::ALL.to_vec());

        let colors: HashSet<[u8; 4]> = Swatch::ALL.iter().map(|s| s.color().to_srgb_u8()).collect();
        assert_eq!(colors.len(), Swatch::ALL.len());
    }

    #[test]
    fn unrelated_keys_select_nothing() {
        assert_eq!(Swatch::from_key(Key::Digit1), None);
        assert_eq!(Swatch::from_key(Key::C), None);
    }
}
