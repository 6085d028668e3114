//! ANSI styling applied to diagnostic lines.

/// Escape codes for each fragment of a diagnostic line.
///
/// The codes are fixed per palette; [`Palette::plain`] turns every fragment
/// into plain text for capture devices and dumb terminals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Code for source locations (file and line).
    pub location: &'static str,
    /// Code for the failure marker.
    pub failure: &'static str,
    /// Code emphasising the exercised operation name.
    pub bold: &'static str,
    /// Code for the success marker.
    pub success: &'static str,
    /// Code for the subject type name.
    pub subject: &'static str,
    /// Code restoring the default style.
    pub reset: &'static str,
}

impl Palette {
    /// Full colour palette for ANSI terminals.
    pub const fn colored() -> Self {
        Self {
            location: "\x1b[94;1m",
            failure: "\x1b[91m",
            bold: "\x1b[0;1m",
            success: "\x1b[92;1m",
            subject: "\x1b[95;1m",
            reset: "\x1b[0m",
        }
    }

    /// Styling disabled; every code is empty.
    pub const fn plain() -> Self {
        Self {
            location: "",
            failure: "",
            bold: "",
            success: "",
            subject: "",
            reset: "",
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::colored()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_palette_adds_no_bytes() {
        let palette = Palette::plain();
        let styled = format!("{}text{}", palette.subject, palette.reset);
        assert_eq!(styled, "text");
    }

    #[test]
    fn colored_palette_resets() {
        let palette = Palette::colored();
        assert!(palette.success.starts_with('\x1b'));
        assert_eq!(palette.reset, "\x1b[0m");
    }
}
