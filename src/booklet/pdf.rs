//! PDF serialization of a laid-out [`Document`].

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use super::canvas::{Document, DrawOp, Font, Page, Pt};
use super::constants::{PAGE_HEIGHT_PT, PAGE_WIDTH_PT};
use super::metrics::text_width;
use crate::config::Cmyk;

const REGULAR_FONT: Name<'static> = Name(b"F1");
const BOLD_FONT: Name<'static> = Name(b"F2");

/// Bezier control distance for a quarter circle of unit radius.
const KAPPA: f64 = 0.552_284_749_831;

/// Serialize every page of `doc` into a US Letter PDF.
pub fn write_pdf(doc: &Document) -> Vec<u8> {
    let catalog_id = Ref::new(1);
    let tree_id = Ref::new(2);
    let regular_id = Ref::new(3);
    let bold_id = Ref::new(4);
    let info_id = Ref::new(5);
    let first_page_id = 6;
    let page_ids: Vec<Ref> = (0..doc.pages.len())
        .map(|i| Ref::new(first_page_id + 2 * i as i32))
        .collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(tree_id);
    pdf.pages(tree_id)
        .kids(page_ids.iter().copied())
        .count(page_ids.len() as i32);

    for (page, &page_id) in doc.pages.iter().zip(&page_ids) {
        let content_id = Ref::new(page_id.get() + 1);
        let mut writer = pdf.page(page_id);
        writer.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH_PT, PAGE_HEIGHT_PT));
        writer.parent(tree_id);
        writer.contents(content_id);
        writer
            .resources()
            .fonts()
            .pair(REGULAR_FONT, regular_id)
            .pair(BOLD_FONT, bold_id);
        writer.finish();

        let data = page_content(page);
        pdf.stream(content_id, &data);
    }

    for (id, font) in [(regular_id, Font::Regular), (bold_id, Font::Bold)] {
        pdf.type1_font(id)
            .base_font(Name(font.base_font().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }

    let mut info = pdf.document_info(info_id);
    if let Some(title) = &doc.title {
        info.title(TextStr(title.as_str()));
    }
    info.creator(TextStr("bookletlib"));
    info.finish();

    pdf.finish()
}

fn page_content(page: &Page) -> Vec<u8> {
    let mut content = Content::new();
    for op in &page.ops {
        match op {
            DrawOp::Line { from, to, stroke } => {
                set_stroke(&mut content, *stroke);
                content.move_to(from.x as f32, from.y as f32);
                content.line_to(to.x as f32, to.y as f32);
                content.close_and_stroke();
            }
            DrawOp::Circle { center, radius, stroke } => {
                set_stroke(&mut content, *stroke);
                circle_path(&mut content, *center, *radius);
                content.close_and_stroke();
            }
            DrawOp::Rect { origin, width, height, color } => {
                set_stroke(&mut content, *color);
                set_fill(&mut content, *color);
                content.rect(origin.x as f32, origin.y as f32, *width as f32, *height as f32);
                content.close_fill_nonzero_and_stroke();
            }
            DrawOp::Polygon { points, color } => {
                let Some((first, rest)) = points.split_first() else {
                    continue;
                };
                set_stroke(&mut content, *color);
                set_fill(&mut content, *color);
                content.move_to(first.x as f32, first.y as f32);
                for p in rest {
                    content.line_to(p.x as f32, p.y as f32);
                }
                content.close_fill_nonzero_and_stroke();
            }
            DrawOp::CenteredText { text, anchor, font, size, color } => {
                let x = anchor.x - text_width(text, *font, *size) / 2.0;
                set_fill(&mut content, *color);
                content.begin_text();
                content.set_font(font_resource(*font), *size);
                content.next_line(x as f32, anchor.y as f32);
                content.show(Str(&encode_win_ansi(text)));
                content.end_text();
            }
        }
    }
    content.finish()
}

fn font_resource(font: Font) -> Name<'static> {
    match font {
        Font::Regular => REGULAR_FONT,
        Font::Bold => BOLD_FONT,
    }
}

fn set_stroke(content: &mut Content, c: Cmyk) {
    content.set_stroke_cmyk(c.c, c.m, c.y, c.k);
}

fn set_fill(content: &mut Content, c: Cmyk) {
    content.set_fill_cmyk(c.c, c.m, c.y, c.k);
}

/// Four cubic segments starting at the rightmost point, counter-clockwise.
fn circle_path(content: &mut Content, center: Pt, r: f64) {
    let k = KAPPA * r;
    let (cx, cy) = (center.x, center.y);
    let p = |v: f64| v as f32;
    content.move_to(p(cx + r), p(cy));
    content.cubic_to(p(cx + r), p(cy + k), p(cx + k), p(cy + r), p(cx), p(cy + r));
    content.cubic_to(p(cx - k), p(cy + r), p(cx - r), p(cy + k), p(cx - r), p(cy));
    content.cubic_to(p(cx - r), p(cy - k), p(cx - k), p(cy - r), p(cx), p(cy - r));
    content.cubic_to(p(cx + k), p(cy - r), p(cx + r), p(cy - k), p(cx + r), p(cy));
}

/// Encode text for a WinAnsiEncoding simple font. Unmappable chars become '?'.
pub(crate) fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' | '\u{a0}'..='\u{ff}' => c as u8,
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
}
