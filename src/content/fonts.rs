use std::fmt;

/// The sample SHX shape fonts offered by the simulation and converter panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShxFont {
    Simplex,
    Romans,
    Isocp,
    Txt,
    Complex,
}

impl ShxFont {
    pub const ALL: [ShxFont; 5] = [
        ShxFont::Simplex,
        ShxFont::Romans,
        ShxFont::Isocp,
        ShxFont::Txt,
        ShxFont::Complex,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShxFont::Simplex => "simplex.shx",
            ShxFont::Romans => "romans.shx",
            ShxFont::Isocp => "isocp.shx",
            ShxFont::Txt => "txt.shx",
            ShxFont::Complex => "complex.shx",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl Default for ShxFont {
    fn default() -> Self {
        ShxFont::Simplex
    }
}

impl fmt::Display for ShxFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// TrueType replacement fonts offered by the converter panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrueTypeFont {
    Arial,
    TimesNewRoman,
    Calibri,
    Helvetica,
}

impl TrueTypeFont {
    pub const ALL: [TrueTypeFont; 4] = [
        TrueTypeFont::Arial,
        TrueTypeFont::TimesNewRoman,
        TrueTypeFont::Calibri,
        TrueTypeFont::Helvetica,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TrueTypeFont::Arial => "Arial",
            TrueTypeFont::TimesNewRoman => "Times New Roman",
            TrueTypeFont::Calibri => "Calibri",
            TrueTypeFont::Helvetica => "Helvetica",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl Default for TrueTypeFont {
    fn default() -> Self {
        TrueTypeFont::Arial
    }
}

impl fmt::Display for TrueTypeFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
