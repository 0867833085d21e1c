/// Severity of a callout block, mapped to theme colors when rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalloutKind {
    Info,
    Warning,
    Success,
}

/// One unit of renderable page content produced by the selector.
///
/// List items keep their leading marker ("- " or "1. ") as written; the
/// content view only adds wrapping and color, never text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayBlock {
    Heading(String),
    Paragraph(String),
    ListItem(String),
    Callout(CalloutKind, String),
}

impl DisplayBlock {
    pub fn heading(text: impl Into<String>) -> Self {
        DisplayBlock::Heading(text.into())
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        DisplayBlock::Paragraph(text.into())
    }

    pub fn list_item(text: impl Into<String>) -> Self {
        DisplayBlock::ListItem(text.into())
    }

    pub fn info(text: impl Into<String>) -> Self {
        DisplayBlock::Callout(CalloutKind::Info, text.into())
    }

    pub fn warning(text: impl Into<String>) -> Self {
        DisplayBlock::Callout(CalloutKind::Warning, text.into())
    }

    pub fn success(text: impl Into<String>) -> Self {
        DisplayBlock::Callout(CalloutKind::Success, text.into())
    }

    pub fn text(&self) -> &str {
        match self {
            DisplayBlock::Heading(t)
            | DisplayBlock::Paragraph(t)
            | DisplayBlock::ListItem(t)
            | DisplayBlock::Callout(_, t) => t,
        }
    }

    pub fn is_callout(&self, kind: CalloutKind) -> bool {
        matches!(self, DisplayBlock::Callout(k, _) if *k == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_returns_inner_string_for_every_variant() {
        assert_eq!(DisplayBlock::heading("h").text(), "h");
        assert_eq!(DisplayBlock::paragraph("p").text(), "p");
        assert_eq!(DisplayBlock::list_item("- l").text(), "- l");
        assert_eq!(DisplayBlock::warning("w").text(), "w");
    }

    #[test]
    fn is_callout_checks_kind() {
        let block = DisplayBlock::info("tip");
        assert!(block.is_callout(CalloutKind::Info));
        assert!(!block.is_callout(CalloutKind::Warning));
        assert!(!DisplayBlock::paragraph("p").is_callout(CalloutKind::Info));
    }
}
