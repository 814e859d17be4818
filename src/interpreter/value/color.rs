/// One of the nine colors the language knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// `red`
    Red,
    /// `green`
    Green,
    /// `blue`
    Blue,
    /// `yellow`
    Yellow,
    /// `cyan`
    Cyan,
    /// `magenta`
    Magenta,
    /// `black`, the color every run starts with.
    #[default]
    Black,
    /// `white`
    White,
    /// `gray`
    Gray,
}

impl Color {
    /// Looks a color up by name, ignoring case.
    ///
    /// # Example
    /// ```
    /// use geowalle::interpreter::value::color::Color;
    ///
    /// assert_eq!(Color::from_name("Magenta"), Some(Color::Magenta));
    /// assert_eq!(Color::from_name("purple"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "red" => Self::Red,
            "green" => Self::Green,
            "blue" => Self::Blue,
            "yellow" => Self::Yellow,
            "cyan" => Self::Cyan,
            "magenta" => Self::Magenta,
            "black" => Self::Black,
            "white" => Self::White,
            "gray" => Self::Gray,
            _ => return None,
        };
        Some(color)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Cyan => "cyan",
            Self::Magenta => "magenta",
            Self::Black => "black",
            Self::White => "white",
            Self::Gray => "gray",
        };
        write!(f, "{name}")
    }
}
