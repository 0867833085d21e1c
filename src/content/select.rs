use crate::content::block::DisplayBlock;
use crate::content::fonts::{ShxFont, TrueTypeFont};
use crate::content::section::Section;

/// Widget state of the PDF export simulation panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationState {
    pub pdf_shx_enabled: bool,
    pub selected_font: ShxFont,
    pub combine_text_enabled: bool,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            pdf_shx_enabled: true,
            selected_font: ShxFont::default(),
            combine_text_enabled: false,
        }
    }
}

/// Widget state of the SHX to TrueType converter panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConversionMapping {
    pub source: ShxFont,
    pub target: TrueTypeFont,
}

/// Select the content blocks for a section, given the current panel states.
///
/// Pure and total: every input is a closed enum or a pair of bools, so there
/// is no failure path. The match over `Section` is exhaustive with no
/// wildcard arm; adding a section is a compile error until it gets content.
pub fn select(
    section: Section,
    sim: &SimulationState,
    mapping: &ConversionMapping,
) -> Vec<DisplayBlock> {
    match section {
        Section::Overview => overview(),
        Section::PdfIssues => pdf_issues(),
        Section::Editing => editing(),
        Section::Simulation => simulation(sim),
        Section::Converter => converter(mapping),
    }
}

/// Acknowledge a free-text question. The text is never parsed or stored;
/// anything non-blank gets the same fixed reply, blank gets nothing.
pub fn query_response(query: &str) -> Option<DisplayBlock> {
    if query.trim().is_empty() {
        return None;
    }
    Some(DisplayBlock::paragraph(
        "Thanks for your question! For detailed assistance, please provide \
         more context (e.g., specific error, AutoCAD version).",
    ))
}

fn overview() -> Vec<DisplayBlock> {
    vec![
        DisplayBlock::heading(Section::Overview.title()),
        DisplayBlock::paragraph(
            "SHX Text in AutoCAD refers to fonts or shapes stored in SHX (Shape) \
             files. These are vector-based, lightweight files used for text and \
             symbols in drawings. Unlike TrueType fonts, SHX fonts render quickly \
             but can cause issues in PDF exports or when editing.",
        ),
        DisplayBlock::paragraph("Key Characteristics:"),
        DisplayBlock::list_item("- Compiled from `.SHP` (shape) files into `.SHX` format."),
        DisplayBlock::list_item(
            "- Stored in AutoCAD's Fonts folder (e.g., \
             `C:\\Program Files\\Autodesk\\AutoCAD\\Fonts`).",
        ),
        DisplayBlock::list_item("- Common examples: `simplex.shx`, `romans.shx`."),
        DisplayBlock::list_item("- Pros: Fast rendering, small file size."),
        DisplayBlock::list_item(
            "- Cons: Limited PDF compatibility, non-searchable in exports unless configured.",
        ),
        DisplayBlock::info(
            "Tip: Always ensure SHX files are available in your drawing's directory \
             to avoid font substitution.",
        ),
    ]
}

fn pdf_issues() -> Vec<DisplayBlock> {
    vec![
        DisplayBlock::heading(Section::PdfIssues.title()),
        DisplayBlock::paragraph(
            "SHX text often causes problems when exporting AutoCAD drawings to PDF \
             because PDFs don't natively support SHX fonts. Common issues include:",
        ),
        DisplayBlock::list_item(
            "- Non-searchable Text: SHX text converts to geometry (polylines) in \
             PDFs, making it uneditable.",
        ),
        DisplayBlock::list_item(
            "- Comments in PDFs: Since AutoCAD 2016, SHX text may export as \
             searchable text but appears as comments or pop-ups, cluttering the PDF.",
        ),
        DisplayBlock::list_item(
            "- Missing Fonts: If SHX files are missing, AutoCAD substitutes fonts, \
             causing display errors.",
        ),
        DisplayBlock::paragraph("Solutions:"),
        DisplayBlock::list_item("- Set `PDFSHX` to 0 in AutoCAD to exclude SHX text from PDFs."),
        DisplayBlock::list_item("- Replace SHX fonts with TrueType fonts before exporting."),
        DisplayBlock::list_item(
            "- In Adobe Acrobat, print the PDF with \"Document Only\" to remove SHX \
             comments.",
        ),
        DisplayBlock::warning(
            "Flattening PDFs in tools like Bluebeam Revu can also remove SHX-related \
             comments.",
        ),
    ]
}

fn editing() -> Vec<DisplayBlock> {
    vec![
        DisplayBlock::heading(Section::Editing.title()),
        DisplayBlock::paragraph(
            "Editing SHX text can be tricky since it's vector-based geometry. Here's \
             how to handle it. Steps in AutoCAD:",
        ),
        DisplayBlock::list_item(
            "1. Use the Recognize SHX Text tool (Insert tab > Recognition Settings).",
        ),
        DisplayBlock::list_item(
            "2. Adjust settings: recognition threshold (e.g., 50%) and the SHX fonts \
             to match (e.g., `simplex.shx`).",
        ),
        DisplayBlock::list_item("3. Convert recognized text to Mtext."),
        DisplayBlock::list_item("4. Combine Mtext strings using the Combine Text tool."),
        DisplayBlock::paragraph("In PDFs:"),
        DisplayBlock::list_item(
            "1. Convert SHX text to TrueType fonts in AutoCAD before exporting.",
        ),
        DisplayBlock::list_item(
            "2. Use AutoCAD's PDF Import tool to import PDFs and convert SHX geometry \
             to Mtext.",
        ),
        DisplayBlock::paragraph(
            "Best Practice: Replace SHX fonts with TrueType fonts (e.g., Arial) for \
             easier editing and PDF compatibility.",
        ),
        DisplayBlock::success("Pro Tip: Always back up your DWG file before converting text!"),
    ]
}

fn simulation(sim: &SimulationState) -> Vec<DisplayBlock> {
    let mut blocks = vec![
        DisplayBlock::heading(Section::Simulation.title()),
        DisplayBlock::paragraph(
            "Adjust settings below to simulate how SHX text behaves in PDF exports.",
        ),
        DisplayBlock::paragraph("Simulation Result"),
    ];

    if sim.pdf_shx_enabled {
        blocks.push(DisplayBlock::paragraph(format!(
            "Exporting with `{}` as searchable text.",
            sim.selected_font
        )));
        blocks.push(DisplayBlock::warning(
            "SHX text will appear as comments in the PDF, which may clutter the \
             document.",
        ));
    } else {
        blocks.push(DisplayBlock::paragraph(format!(
            "Exporting with `{}` as geometry (non-searchable).",
            sim.selected_font
        )));
        blocks.push(DisplayBlock::info(
            "Set `PDFSHX` to 0 in AutoCAD to achieve this.",
        ));
    }

    if sim.combine_text_enabled {
        blocks.push(DisplayBlock::paragraph(
            "Mtext strings will be combined for easier editing.",
        ));
    }

    blocks.push(DisplayBlock::paragraph(
        "Recommendation: For cleaner PDFs, disable PDFSHX or convert to TrueType \
         fonts.",
    ));

    blocks
}

fn converter(mapping: &ConversionMapping) -> Vec<DisplayBlock> {
    vec![
        DisplayBlock::heading(Section::Converter.title()),
        DisplayBlock::paragraph(
            "Converting SHX text to TrueType fonts ensures PDF compatibility and \
             searchability. Follow these steps in AutoCAD:",
        ),
        DisplayBlock::list_item("1. Select SHX text in the drawing."),
        DisplayBlock::list_item("2. Open the Properties panel."),
        DisplayBlock::list_item("3. Change the font to a TrueType font (e.g., Arial)."),
        DisplayBlock::list_item("4. Export the drawing using DWG to PDF.pc3."),
        DisplayBlock::list_item("5. In the PDF options, ensure \"Capture fonts\" is enabled."),
        DisplayBlock::heading("Conversion Preview"),
        DisplayBlock::paragraph(format!(
            "Converting `{}` to `{}`.",
            mapping.source, mapping.target
        )),
        DisplayBlock::success(format!(
            "Text styled with `{}` will now use `{}` in your drawing and PDF exports.",
            mapping.source, mapping.target
        )),
        DisplayBlock::info("Apply this in AutoCAD's Properties panel for all selected text."),
    ]
}
