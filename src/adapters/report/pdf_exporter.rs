//! PDF report exporter built on `printpdf` and the standard Helvetica faces.
//!
//! Rendering happens in two passes. [`PdfReportExporter::typeset`] flows the
//! report into positioned lines on US-letter pages, then `export` writes
//! those lines through `printpdf`. Keeping layout separate from PDF output
//! lets the page-break logic be tested without parsing PDF bytes.

use printpdf::{BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, Pt, Rgb};
use tracing::debug;

use super::font_metrics::{sanitize, text_width, Face};
use crate::domain::discovery::Report;
use crate::ports::{ExportError, ExportFormat, ReportExporter};

/// US letter, in points.
pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;
pub const MARGIN: f32 = 72.0;

const SECTION_SPACER: f32 = 24.0;
const TITLE_SPACER: f32 = 12.0;

/// Font, size and spacing for one kind of block.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TextStyle {
    face: Face,
    size: f32,
    leading: f32,
    space_after: f32,
    color: (f32, f32, f32),
    centered: bool,
}

const BLACK: (f32, f32, f32) = (0.0, 0.0, 0.0);

// #0066CC
const ACCENT: (f32, f32, f32) = (0.0, 0x66 as f32 / 255.0, 0xCC as f32 / 255.0);

const TITLE: TextStyle = TextStyle {
    face: Face::Bold,
    size: 18.0,
    leading: 22.0,
    space_after: 6.0,
    color: BLACK,
    centered: true,
};

const SECTION_HEADER: TextStyle = TextStyle {
    face: Face::Bold,
    size: 16.0,
    leading: 22.0,
    space_after: 12.0,
    color: ACCENT,
    centered: false,
};

const BODY: TextStyle = TextStyle {
    face: Face::Regular,
    size: 10.0,
    leading: 12.0,
    space_after: 0.0,
    color: BLACK,
    centered: false,
};

/// One line of text placed on a page. Coordinates are in points from the
/// bottom-left corner, `y` being the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub face: Face,
    pub size: f32,
    pub x: f32,
    pub y: f32,
    pub color: (f32, f32, f32),
}

/// Lines placed on a single page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub lines: Vec<PlacedLine>,
}

/// Flows blocks top to bottom, starting a new page when the next line would
/// cross the bottom margin.
struct Typesetter {
    pages: Vec<PageLayout>,
    cursor: f32,
}

impl Typesetter {
    fn new() -> Self {
        Self {
            pages: vec![PageLayout::default()],
            cursor: PAGE_HEIGHT - MARGIN,
        }
    }

    fn frame_width() -> f32 {
        PAGE_WIDTH - 2.0 * MARGIN
    }

    fn new_page(&mut self) {
        self.pages.push(PageLayout::default());
        self.cursor = PAGE_HEIGHT - MARGIN;
    }

    fn at_page_top(&self) -> bool {
        (self.cursor - (PAGE_HEIGHT - MARGIN)).abs() < f32::EPSILON
    }

    /// Vertical space. Dropped at the top of a page and clamped at the bottom.
    fn space(&mut self, amount: f32) {
        if self.at_page_top() {
            return;
        }
        self.cursor = (self.cursor - amount).max(MARGIN);
    }

    fn place_line(&mut self, text: String, style: &TextStyle, indent: f32) {
        if self.cursor - style.leading < MARGIN && !self.at_page_top() {
            self.new_page();
        }

        let x = if style.centered {
            let width = text_width(style.face, &text, style.size);
            MARGIN + ((Self::frame_width() - width) / 2.0).max(0.0)
        } else {
            MARGIN + indent
        };
        let y = self.cursor - style.size;

        if let Some(page) = self.pages.last_mut() {
            page.lines.push(PlacedLine {
                text,
                face: style.face,
                size: style.size,
                x,
                y,
                color: style.color,
            });
        }
        self.cursor -= style.leading;
    }

    /// Sets a paragraph, keeping its line breaks and wrapping long lines.
    fn paragraph(&mut self, text: &str, style: &TextStyle) {
        let text = sanitize(text);
        for source_line in text.split('\n') {
            if source_line.trim().is_empty() {
                self.space(style.leading);
                continue;
            }

            let indent_chars = source_line.len() - source_line.trim_start().len();
            let indent = text_width(style.face, &source_line[..indent_chars], style.size)
                .min(Self::frame_width() / 2.0);
            let width = Self::frame_width() - indent;

            for wrapped in wrap(source_line.trim(), style, width) {
                self.place_line(wrapped, style, indent);
            }
        }
        self.space(style.space_after);
    }

    fn finish(self) -> Vec<PageLayout> {
        self.pages
    }
}

/// Greedy word wrap. Words wider than the line are split by character.
fn wrap(text: &str, style: &TextStyle, max_width: f32) -> Vec<String> {
    let fits = |s: &str| text_width(style.face, s, style.size) <= max_width;
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if fits(&candidate) {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if fits(word) {
            current = word.to_string();
        } else {
            for c in word.chars() {
                current.push(c);
                if !fits(&current) && current.chars().count() > 1 {
                    current.pop();
                    lines.push(std::mem::take(&mut current));
                    current.push(c);
                }
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Renders reports as letter-size PDFs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfReportExporter;

impl PdfReportExporter {
    pub fn new() -> Self {
        Self
    }

    /// Lays the report out into pages without producing PDF bytes.
    pub fn typeset(&self, report: &Report) -> Vec<PageLayout> {
        let mut setter = Typesetter::new();

        setter.paragraph(report.title(), &TITLE);
        setter.space(TITLE_SPACER);
        setter.paragraph(&report.generated_on_line(), &BODY);
        setter.space(SECTION_SPACER);

        setter.paragraph("Product Idea", &SECTION_HEADER);
        setter.paragraph(report.product_idea(), &BODY);
        setter.space(SECTION_SPACER);

        for section in report.sections() {
            setter.paragraph(section.heading, &SECTION_HEADER);
            setter.paragraph(&section.body, &BODY);
            setter.space(SECTION_SPACER);
        }

        setter.finish()
    }

    fn render(&self, title: &str, pages: &[PageLayout]) -> Result<Vec<u8>, ExportError> {
        let page_width: Mm = Pt(PAGE_WIDTH).into();
        let page_height: Mm = Pt(PAGE_HEIGHT).into();

        let (doc, first_page, first_layer) =
            PdfDocument::new(title, page_width, page_height, "Page 1");

        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ExportError::pdf_failed(format!("Failed to load Helvetica: {}", e)))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| {
                ExportError::pdf_failed(format!("Failed to load Helvetica-Bold: {}", e))
            })?;

        for (index, page) in pages.iter().enumerate() {
            let (page_index, layer_index) = if index == 0 {
                (first_page, first_layer)
            } else {
                doc.add_page(page_width, page_height, format!("Page {}", index + 1))
            };
            let layer = doc.get_page(page_index).get_layer(layer_index);

            for line in &page.lines {
                let font: &IndirectFontRef = match line.face {
                    Face::Regular => &regular,
                    Face::Bold => &bold,
                };
                let (r, g, b) = line.color;
                layer.set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));
                layer.use_text(
                    line.text.as_str(),
                    line.size,
                    Pt(line.x).into(),
                    Pt(line.y).into(),
                    font,
                );
            }
        }

        doc.save_to_bytes()
            .map_err(|e| ExportError::pdf_failed(format!("Failed to serialize PDF: {}", e)))
    }
}

impl ReportExporter for PdfReportExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    fn export(&self, report: &Report) -> Result<Vec<u8>, ExportError> {
        let pages = self.typeset(report);
        debug!(pages = pages.len(), "Typeset PDF report");
        self.render(report.title(), &pages)
    }
}
