#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Overview,
    PdfIssues,
    Editing,
    Simulation,
    Converter,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Overview,
        Section::PdfIssues,
        Section::Editing,
        Section::Simulation,
        Section::Converter,
    ];

    /// Heading shown at the top of the content area.
    pub fn title(self) -> &'static str {
        match self {
            Section::Overview => "What is SHX Text?",
            Section::PdfIssues => "PDF Export Issues with SHX Text",
            Section::Editing => "Editing SHX Text in AutoCAD",
            Section::Simulation => "Simulate AutoCAD PDF Export Settings",
            Section::Converter => "SHX to TrueType Font Converter",
        }
    }

    /// Short label for the sidebar.
    pub fn label(self) -> &'static str {
        match self {
            Section::Overview => "What is SHX Text?",
            Section::PdfIssues => "PDF Export Issues",
            Section::Editing => "Edit SHX Text",
            Section::Simulation => "Simulate PDF Settings",
            Section::Converter => "SHX to TrueType Converter",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Section::Overview => "SHX shape fonts and how they differ from TrueType",
            Section::PdfIssues => "Why SHX text misbehaves in PDF exports",
            Section::Editing => "Recognizing and editing SHX text as Mtext",
            Section::Simulation => "Preview how PDFSHX settings affect exports",
            Section::Converter => "Map an SHX font to a TrueType replacement",
        }
    }

    /// Stable key used in the config file and on the CLI.
    pub fn as_key(self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::PdfIssues => "pdf-issues",
            Section::Editing => "editing",
            Section::Simulation => "simulation",
            Section::Converter => "converter",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_key() == key)
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }

    /// True for sections that carry interactive control rows.
    pub fn has_controls(self) -> bool {
        matches!(self, Section::Simulation | Section::Converter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sections_have_distinct_keys() {
        for a in Section::ALL {
            for b in Section::ALL {
                if a != b {
                    assert_ne!(a.as_key(), b.as_key());
                }
            }
        }
    }

    #[test]
    fn from_key_round_trips() {
        for section in Section::ALL {
            assert_eq!(Section::from_key(section.as_key()), Some(section));
        }
        assert_eq!(Section::from_key("nonsense"), None);
        assert_eq!(Section::from_key(""), None);
    }

    #[test]
    fn next_and_prev_cycle() {
        let mut section = Section::Overview;
        for _ in 0..Section::ALL.len() {
            section = section.next();
        }
        assert_eq!(section, Section::Overview);
        assert_eq!(Section::Overview.prev(), Section::Converter);
        assert_eq!(Section::Converter.next(), Section::Overview);
    }

    #[test]
    fn only_simulation_and_converter_have_controls() {
        assert!(Section::Simulation.has_controls());
        assert!(Section::Converter.has_controls());
        assert!(!Section::Overview.has_controls());
        assert!(!Section::PdfIssues.has_controls());
        assert!(!Section::Editing.has_controls());
    }
}
