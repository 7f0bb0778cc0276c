//! PDF rendering of scenario reports.

use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};

use crate::error::{RoiError, RoiResult};

use super::ReportRenderer;
use super::document::ReportDocument;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
const VALUE_COLUMN: f32 = 95.0;
const LINE_HEIGHT: f32 = 7.0;
const DISCLAIMER_WRAP: usize = 95;

/// Renders reports as single-column A4 PDF documents using builtin fonts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfReportRenderer;

impl PdfReportRenderer {
    /// Creates a renderer.
    pub fn new() -> Self {
        Self
    }
}

fn render_error(err: impl std::fmt::Debug) -> RoiError {
    RoiError::Report {
        message: format!("{err:?}"),
    }
}

/// Tracks the write position and starts new pages when one fills up.
struct PageCursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
    pages: usize,
}

impl PageCursor<'_> {
    fn advance(&mut self, by: f32) {
        self.y -= by;
        if self.y < MARGIN {
            self.pages += 1;
            let (page, layer) = self.doc.add_page(
                Mm(PAGE_WIDTH),
                Mm(PAGE_HEIGHT),
                format!("Page {}", self.pages),
            );
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT - MARGIN;
        }
    }

    fn text(&self, text: &str, size: f32, x: f32, font: &IndirectFontRef) {
        self.layer.use_text(text, size, Mm(x), Mm(self.y), font);
    }
}

/// Splits text into lines of at most `width` characters on word boundaries.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

impl ReportRenderer for PdfReportRenderer {
    fn render(&self, document: &ReportDocument) -> RoiResult<Vec<u8>> {
        let (doc, page, layer) = PdfDocument::new(
            document.title.as_str(),
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            "Page 1",
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(render_error)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(render_error)?;
        let oblique = doc
            .add_builtin_font(BuiltinFont::HelveticaOblique)
            .map_err(render_error)?;

        {
            let mut cursor = PageCursor {
                doc: &doc,
                layer: doc.get_page(page).get_layer(layer),
                y: PAGE_HEIGHT - MARGIN,
                pages: 1,
            };

            cursor.text(&document.title, 18.0, MARGIN, &bold);
            cursor.advance(LINE_HEIGHT * 2.0);

            for line in &document.header {
                cursor.text(&line.label, 11.0, MARGIN, &bold);
                cursor.text(&line.value, 11.0, VALUE_COLUMN, &regular);
                cursor.advance(LINE_HEIGHT);
            }

            for section in &document.sections {
                cursor.advance(LINE_HEIGHT);
                cursor.text(&section.heading, 14.0, MARGIN, &bold);
                cursor.advance(LINE_HEIGHT * 1.5);
                for line in &section.lines {
                    cursor.text(&line.label, 11.0, MARGIN, &regular);
                    cursor.text(&line.value, 11.0, VALUE_COLUMN, &regular);
                    cursor.advance(LINE_HEIGHT);
                }
            }

            cursor.advance(LINE_HEIGHT);
            for line in wrap(&document.disclaimer, DISCLAIMER_WRAP) {
                cursor.text(&line, 9.0, MARGIN, &oblique);
                cursor.advance(LINE_HEIGHT * 0.7);
            }
        }

        doc.save_to_bytes().map_err(render_error)
    }

    fn content_type(&self) -> &'static str {
        "application/pdf"
    }

    fn file_extension(&self) -> &'static str {
        "pdf"
    }
}
