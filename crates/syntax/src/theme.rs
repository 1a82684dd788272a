// Chunk: docs/chunks/highlight_theme - Tag to style mapping

//! Syntax themes mapping tags to visual styles.
//!
//! Two themes ship: `classic`, the traditional editor palette built from
//! named ANSI colors, and `catppuccin_mocha`, using 24-bit colors from the
//! Catppuccin Mocha palette.

use hilite_buffer::{Color, NamedColor, Style};

use crate::tag::Tag;

/// Catppuccin Mocha color palette constants.
mod catppuccin {
    use hilite_buffer::Color;

    pub const MAUVE: Color = Color::Rgb {
        r: 0xcb,
        g: 0xa6,
        b: 0xf7,
    }; // #cba6f7
    pub const GREEN: Color = Color::Rgb {
        r: 0xa6,
        g: 0xe3,
        b: 0xa1,
    }; // #a6e3a1
    pub const PINK: Color = Color::Rgb {
        r: 0xf5,
        g: 0xc2,
        b: 0xe7,
    }; // #f5c2e7
    pub const YELLOW: Color = Color::Rgb {
        r: 0xf9,
        g: 0xe2,
        b: 0xaf,
    }; // #f9e2af
    pub const OVERLAY0: Color = Color::Rgb {
        r: 0x6c,
        g: 0x70,
        b: 0x86,
    }; // #6c7086
    pub const TEXT: Color = Color::Rgb {
        r: 0xcd,
        g: 0xd6,
        b: 0xf4,
    }; // #cdd6f4
}

/// A mapping from tags to visual styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTheme {
    /// Indexed by [`Tag::index`].
    styles: [Style; 7],
}

impl Default for SyntaxTheme {
    fn default() -> Self {
        Self::classic()
    }
}

impl SyntaxTheme {
    /// The classic palette: black plain text, dark green italic comments,
    /// blue strings, dark red directives, dark red bold types and blue bold
    /// keywords.
    pub fn classic() -> Self {
        let comment = Style {
            fg: Color::Named(NamedColor::Green),
            italic: true,
            ..Style::default()
        };

        Self::from_styles([
            Style {
                fg: Color::Named(NamedColor::Black),
                ..Style::default()
            },
            comment,
            comment,
            Style {
                fg: Color::Named(NamedColor::Blue),
                ..Style::default()
            },
            Style {
                fg: Color::Named(NamedColor::Red),
                ..Style::default()
            },
            Style {
                fg: Color::Named(NamedColor::Red),
                bold: true,
                ..Style::default()
            },
            Style {
                fg: Color::Named(NamedColor::Blue),
                bold: true,
                ..Style::default()
            },
        ])
    }

    /// The Catppuccin Mocha palette.
    pub fn catppuccin_mocha() -> Self {
        let comment = Style {
            fg: catppuccin::OVERLAY0,
            italic: true,
            ..Style::default()
        };

        Self::from_styles([
            Style {
                fg: catppuccin::TEXT,
                ..Style::default()
            },
            comment,
            comment,
            Style {
                fg: catppuccin::GREEN,
                ..Style::default()
            },
            Style {
                fg: catppuccin::PINK,
                ..Style::default()
            },
            Style {
                fg: catppuccin::YELLOW,
                ..Style::default()
            },
            Style {
                fg: catppuccin::MAUVE,
                ..Style::default()
            },
        ])
    }

    /// Builds a theme from styles in [`Tag::ALL`] order.
    pub fn from_styles(styles: [Style; 7]) -> Self {
        Self { styles }
    }

    pub fn style_for(&self, tag: Tag) -> Style {
        self.styles[tag.index()]
    }

    /// Overrides the style of one tag.
    pub fn set_style(&mut self, tag: Tag, style: Style) {
        self.styles[tag.index()] = style;
    }

    /// The style of a selected character: its base style in inverse video.
    pub fn selection_style(&self, tag: Tag) -> Style {
        let base = self.style_for(tag);
        Style {
            inverse: !base.inverse,
            ..base
        }
    }
}
