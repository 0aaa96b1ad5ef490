//! Square shading.

use std::fmt;

/// The colour of a board square. A1 is dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shade {
    Dark,
    Light,
}

impl Shade {
    /// Return the opposite shade.
    #[inline]
    pub const fn flip(self) -> Shade {
        match self {
            Shade::Dark => Shade::Light,
            Shade::Light => Shade::Dark,
        }
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shade::Dark => write!(f, "dark"),
            Shade::Light => write!(f, "light"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Shade;

    #[test]
    fn flip_roundtrip() {
        assert_eq!(Shade::Dark.flip(), Shade::Light);
        assert_eq!(Shade::Light.flip().flip(), Shade::Light);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Shade::Dark), "dark");
        assert_eq!(format!("{}", Shade::Light), "light");
    }
}
