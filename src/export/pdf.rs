//! Minimal PDF writer backing the document export.
//!
//! Emits a single-font (Helvetica, WinAnsi-encoded) document with one
//! content stream per page, a classic xref table, and a trailer. The
//! exporter hands it text placements in millimetres from the top-left;
//! conversion to PDF's bottom-left point space happens here.

use super::PageSink;

const PAGE_WIDTH_PT: f64 = 595.28;
const PAGE_HEIGHT_PT: f64 = 841.89;
const MM_TO_PT: f64 = 72.0 / 25.4;
const DEFAULT_FONT_SIZE: f64 = 12.0;

struct TextOp {
    x: f64,
    y: f64,
    size: f64,
    text: String,
}

/// An in-memory PDF document under construction.
pub struct PdfDocument {
    pages: Vec<Vec<TextOp>>,
    font_size: f64,
}

impl PdfDocument {
    pub fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
            font_size: DEFAULT_FONT_SIZE,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Serializes the document.
    pub fn finish(self) -> Vec<u8> {
        let page_count = self.pages.len();
        let mut objects: Vec<Vec<u8>> = Vec::new();

        objects.push(b"<< /Type /Catalog /Pages 2 0 R >>".to_vec());

        let kids = (0..page_count)
            .map(|i| format!("{} 0 R", 4 + 2 * i))
            .collect::<Vec<_>>()
            .join(" ");
        objects.push(
            format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids, page_count).into_bytes(),
        );

        objects.push(
            b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_vec(),
        );

        for (i, ops) in self.pages.iter().enumerate() {
            objects.push(
                format!(
                    "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                     /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
                    PAGE_WIDTH_PT,
                    PAGE_HEIGHT_PT,
                    5 + 2 * i
                )
                .into_bytes(),
            );

            let content = content_stream(ops);
            let mut stream = format!("<< /Length {} >>\nstream\n", content.len()).into_bytes();
            stream.extend_from_slice(&content);
            stream.extend_from_slice(b"\nendstream");
            objects.push(stream);
        }

        let mut out = Vec::new();
        out.extend_from_slice(b"%PDF-1.4\n");
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n", i + 1).as_bytes());
            out.extend_from_slice(body);
            out.extend_from_slice(b"\nendobj\n");
        }

        let xref_offset = out.len();
        out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
        out.extend_from_slice(b"0000000000 65535 f \n");
        for offset in &offsets {
            out.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }
        out.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
                objects.len() + 1,
                xref_offset
            )
            .as_bytes(),
        );
        out
    }
}

impl Default for PdfDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl PageSink for PdfDocument {
    fn set_font_size(&mut self, size: f64) {
        self.font_size = size;
    }

    fn place_text(&mut self, x: f64, y: f64, text: &str) {
        let size = self.font_size;
        if let Some(page) = self.pages.last_mut() {
            page.push(TextOp {
                x,
                y,
                size,
                text: text.to_string(),
            });
        }
    }

    fn start_page(&mut self) {
        self.pages.push(Vec::new());
    }
}

fn content_stream(ops: &[TextOp]) -> Vec<u8> {
    let mut out = Vec::new();
    for op in ops {
        let x_pt = op.x * MM_TO_PT;
        let y_pt = PAGE_HEIGHT_PT - op.y * MM_TO_PT;
        out.extend_from_slice(
            format!("BT /F1 {:.2} Tf {:.2} {:.2} Td (", op.size, x_pt, y_pt).as_bytes(),
        );
        write_literal(&mut out, &op.text);
        out.extend_from_slice(b") Tj ET\n");
    }
    out
}

/// Writes `text` as a PDF literal string body: WinAnsi bytes, with the
/// string delimiters escaped and non-ASCII bytes in octal form.
fn write_literal(out: &mut Vec<u8>, text: &str) {
    for ch in text.chars() {
        let byte = win_ansi_byte(ch);
        match byte {
            b'(' | b')' | b'\\' => {
                out.push(b'\\');
                out.push(byte);
            }
            0x20..=0x7E => out.push(byte),
            _ => out.extend_from_slice(format!("\\{:03o}", byte).as_bytes()),
        }
    }
}

fn win_ansi_byte(ch: char) -> u8 {
    let code = ch as u32;
    match code {
        // ASCII and the Latin-1 block map straight through.
        0x20..=0x7E | 0xA0..=0xFF => code as u8,
        // Win-1252 specials worth carrying.
        0x20AC => 0x80, // €
        0x2018 => 0x91,
        0x2019 => 0x92,
        0x201C => 0x93,
        0x201D => 0x94,
        0x2013 => 0x96,
        0x2014 => 0x97,
        _ => b'?',
    }
}
