//! Box-drawing glyph sets.

/// Named border glyph sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderStyle {
    /// `┌─┐│└┘`
    #[default]
    Single,
    /// `╔═╗║╚╝`
    Double,
    /// `╭─╮│╰╯`
    Rounded,
    /// `┏━┓┃┗┛`
    Thick,
    /// `┌┄┐┆└┘`
    Dotted,
    /// `+-+|++`
    Ascii,
}

impl BorderStyle {
    /// Returns the glyphs for this style.
    pub const fn chars(self) -> BorderChars {
        match self {
            Self::Single => BorderChars::SINGLE,
            Self::Double => BorderChars::DOUBLE,
            Self::Rounded => BorderChars::ROUNDED,
            Self::Thick => BorderChars::THICK,
            Self::Dotted => BorderChars::DOTTED,
            Self::Ascii => BorderChars::ASCII,
        }
    }
}

/// Corner and edge glyphs of one border style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderChars {
    /// Top-left corner.
    pub top_left: char,
    /// Top-right corner.
    pub top_right: char,
    /// Bottom-left corner.
    pub bottom_left: char,
    /// Bottom-right corner.
    pub bottom_right: char,
    /// Top and bottom edges.
    pub horizontal: char,
    /// Left and right edges.
    pub vertical: char,
}

impl BorderChars {
    /// Light lines.
    pub const SINGLE: Self = Self::new('┌', '┐', '└', '┘', '─', '│');
    /// Double lines.
    pub const DOUBLE: Self = Self::new('╔', '╗', '╚', '╝', '═', '║');
    /// Light lines with arc corners.
    pub const ROUNDED: Self = Self::new('╭', '╮', '╰', '╯', '─', '│');
    /// Heavy lines.
    pub const THICK: Self = Self::new('┏', '┓', '┗', '┛', '━', '┃');
    /// Light triple-dash edges.
    pub const DOTTED: Self = Self::new('┌', '┐', '└', '┘', '┄', '┆');
    /// Pure ASCII.
    pub const ASCII: Self = Self::new('+', '+', '+', '+', '-', '|');

    const fn new(
        top_left: char,
        top_right: char,
        bottom_left: char,
        bottom_right: char,
        horizontal: char,
        vertical: char,
    ) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
            horizontal,
            vertical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_styles_map_to_glyphs() {
        assert_eq!(BorderStyle::Rounded.chars().top_left, '╭');
        assert_eq!(BorderStyle::Thick.chars().vertical, '┃');
        assert_eq!(BorderStyle::Dotted.chars().horizontal, '┄');
        assert_eq!(BorderStyle::default().chars(), BorderChars::SINGLE);
    }

    #[test]
    fn test_ascii_is_ascii() {
        let c = BorderChars::ASCII;
        for ch in [c.top_left, c.top_right, c.bottom_left, c.bottom_right, c.horizontal, c.vertical] {
            assert!(ch.is_ascii());
        }
    }
}
