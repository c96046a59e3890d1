use chrono::NaiveDate;
use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};

use crate::domain::model::TastingSummary;
use crate::report::{free_bottles_line, generated_line, group_total_line, person_line, REPORT_TITLE};
use crate::utils::error::{AppError, Result};

// A4 portrait, millimetres.
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 20.0;
const TITLE_Y: f32 = 277.0;
const BODY_TOP: f32 = 260.0;
const BODY_BOTTOM: f32 = 20.0;
const LINE_STEP: f32 = 8.0;
const TITLE_SIZE: f32 = 16.0;
const SUBTITLE_SIZE: f32 = 9.0;
const BODY_SIZE: f32 = 12.0;

/// Renders the printable order summary as PDF bytes: the title, one line
/// per person, then the group totals. Breaks to a fresh page when the
/// current one fills.
pub fn render(summary: &TastingSummary, generated_on: NaiveDate) -> Result<Vec<u8>> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(REPORT_TITLE, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "pagina 1");
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| AppError::ReportError {
            message: e.to_string(),
        })?;
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AppError::ReportError {
            message: e.to_string(),
        })?;

    {
        let mut page = Page {
            doc: &doc,
            layer: doc.get_page(first_page).get_layer(first_layer),
            y: BODY_TOP,
            number: 1,
        };

        page.layer
            .use_text(REPORT_TITLE, TITLE_SIZE, Mm(MARGIN_LEFT), Mm(TITLE_Y), &bold);
        page.layer.use_text(
            generated_line(generated_on),
            SUBTITLE_SIZE,
            Mm(MARGIN_LEFT),
            Mm(TITLE_Y - 7.0),
            &regular,
        );

        for row in &summary.per_person {
            page.line(&person_line(row), &regular);
        }

        page.y -= LINE_STEP;
        page.line(&group_total_line(summary), &regular);
        page.line(&free_bottles_line(summary), &regular);
    }

    doc.save_to_bytes().map_err(|e| AppError::ReportError {
        message: e.to_string(),
    })
}

/// Cursor over the current page; opens a follow-up page when a line would
/// fall below the bottom margin.
struct Page<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
    number: usize,
}

impl Page<'_> {
    fn line(&mut self, text: &str, font: &IndirectFontRef) {
        if self.y < BODY_BOTTOM {
            self.number += 1;
            let (page, layer) = self.doc.add_page(
                Mm(PAGE_WIDTH),
                Mm(PAGE_HEIGHT),
                format!("pagina {}", self.number),
            );
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = BODY_TOP;
        }
        self.layer
            .use_text(text, BODY_SIZE, Mm(MARGIN_LEFT), Mm(self.y), font);
        self.y -= LINE_STEP;
    }
}
