//! SGR style state tracking
//!
//! Interprets the numeric parameters of one escape sequence against the
//! previously active style and produces the class labels for the result.
//! State lives only for the duration of a single conversion call.

use crate::palette;

/// Foreground color selection: palette index plus brightness range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Foreground {
    /// Palette index, 0-7.
    pub index: u8,
    /// Whether the color came from the bright range (90-97).
    pub bright: bool,
}

/// The style accumulated from SGR codes seen so far in one conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleState {
    /// Bold flag (SGR 1), cleared only by a full reset.
    pub bold: bool,
    /// Active foreground color, if any.
    pub foreground: Option<Foreground>,
}

impl StyleState {
    /// Apply one escape sequence's parameter list, returning the next style.
    ///
    /// Handled codes: 0 reset, 1 bold, 30-37 standard foreground, 39 clear
    /// foreground, 90-97 bright foreground. Everything else is a silent
    /// no-op, including background codes and the extended-color forms.
    ///
    /// A reset abandons the rest of the sequence: codes after a 0 in the
    /// same parameter list have no effect. This matches the long-observed
    /// behavior that downstream display code depends on.
    pub fn apply(self, codes: &[u16]) -> StyleState {
        let mut next = self;
        for &code in codes {
            match code {
                0 => return StyleState::default(),
                1 => next.bold = true,
                30..=37 => {
                    next.foreground = Some(Foreground {
                        index: (code - 30) as u8,
                        bright: false,
                    });
                }
                39 => next.foreground = None,
                90..=97 => {
                    next.foreground = Some(Foreground {
                        index: (code - 90) as u8,
                        bright: true,
                    });
                }
                _ => {}
            }
        }
        next
    }

    /// Class labels for the active style: color label first, then bold.
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if let Some(fg) = self.foreground {
            classes.push(palette::class_for(fg.index, fg.bright));
        }
        if self.bold {
            classes.push(palette::FONT_BOLD);
        }
        classes
    }

    /// Whether no style is active.
    pub fn is_plain(&self) -> bool {
        !self.bold && self.foreground.is_none()
    }
}
