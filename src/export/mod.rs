//! Budget-document export: a fixed-layout rendering pass over the budget
//! collection, emitted through the [`PageSink`] seam so the PDF writer (or a
//! recording sink in tests) stays swappable.
//!
//! Coordinates are page units with the origin at the top-left: title once at
//! (20, 20), body text in 10-unit steps, page break when the cursor passes
//! 270. The break is checked only between budgets; a single budget longer
//! than a page renders past the bottom edge.

pub mod pdf;

use std::fs;
use std::path::{Path, PathBuf};

use crate::budget::Budget;
use crate::errors::ExportError;

use pdf::PdfDocument;

/// Fixed name of the exported document.
pub const EXPORT_FILE_NAME: &str = "orcamento_big_refrigeracao.pdf";

const DOCUMENT_TITLE: &str = "Big Refrigeração - Orçamentos";
const TITLE_FONT_SIZE: f64 = 18.0;
const BODY_FONT_SIZE: f64 = 12.0;
const LEFT_MARGIN: f64 = 20.0;
const TITLE_Y: f64 = 20.0;
const FIRST_BUDGET_Y: f64 = 40.0;
const FRESH_PAGE_Y: f64 = 20.0;
const PAGE_BREAK_Y: f64 = 270.0;
const LINE_STEP: f64 = 10.0;

/// Receiver for the exporter's text placements.
pub trait PageSink {
    fn set_font_size(&mut self, size: f64);
    fn place_text(&mut self, x: f64, y: f64, text: &str);
    fn start_page(&mut self);
}

/// Lays the budgets out onto the sink in collection order.
pub fn render(budgets: &[Budget], sink: &mut dyn PageSink) -> Result<(), ExportError> {
    if budgets.is_empty() {
        return Err(ExportError::NoBudgets);
    }

    sink.set_font_size(TITLE_FONT_SIZE);
    sink.place_text(LEFT_MARGIN, TITLE_Y, DOCUMENT_TITLE);
    sink.set_font_size(BODY_FONT_SIZE);

    let mut y = FIRST_BUDGET_Y;
    for budget in budgets {
        sink.place_text(LEFT_MARGIN, y, &format!("Cliente: {}", budget.client_name));
        sink.place_text(
            LEFT_MARGIN,
            y + LINE_STEP,
            &format!("Data: {}", reformat_date(&budget.visit_date)),
        );
        for (i, service) in budget.services.iter().enumerate() {
            sink.place_text(
                LEFT_MARGIN,
                y + 2.0 * LINE_STEP + i as f64 * LINE_STEP,
                &format!("Serviço {}: {} - R$ {}", i + 1, service.name, service.amount),
            );
        }
        let lines = budget.service_count() as f64;
        sink.place_text(
            LEFT_MARGIN,
            y + 3.0 * LINE_STEP + lines * LINE_STEP,
            &format!("Total: R$ {}", budget.total),
        );

        y += 5.0 * LINE_STEP + lines * LINE_STEP;
        if y > PAGE_BREAK_Y {
            sink.start_page();
            y = FRESH_PAGE_Y;
        }
    }
    Ok(())
}

/// Renders the budgets into PDF bytes.
pub fn export_bytes(budgets: &[Budget]) -> Result<Vec<u8>, ExportError> {
    let mut document = PdfDocument::new();
    render(budgets, &mut document)?;
    Ok(document.finish())
}

/// Renders the budgets and writes [`EXPORT_FILE_NAME`] under `dir`.
///
/// The document is built fully in memory and moved into place through a
/// temporary file, so a failed export never leaves a partial document.
pub fn export_to_file(budgets: &[Budget], dir: &Path) -> Result<PathBuf, ExportError> {
    let bytes = export_bytes(budgets)?;
    let path = dir.join(EXPORT_FILE_NAME);
    let tmp = path.with_extension("pdf.tmp");
    fs::write(&tmp, &bytes)?;
    fs::rename(&tmp, &path)?;
    tracing::info!(path = %path.display(), budgets = budgets.len(), "exported budget document");
    Ok(path)
}

/// Reorders "YYYY-MM-DD" into "DD/MM/YYYY".
///
/// Pure field reordering: input that is not three dash-separated fields is
/// passed through unchanged, and the fields themselves are not validated.
pub fn reformat_date(iso: &str) -> String {
    let mut parts = iso.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day)) => format!("{}/{}/{}", day, month, year),
        _ => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_reorder_into_day_month_year() {
        assert_eq!(reformat_date("2024-03-01"), "01/03/2024");
    }

    #[test]
    fn malformed_dates_pass_through() {
        assert_eq!(reformat_date("tomorrow"), "tomorrow");
        assert_eq!(reformat_date(""), "");
    }
}
