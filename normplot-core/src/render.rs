use crate::binning::BinSet;
use crate::density::DensityProfile;
use log::debug;
use normplot_common::{NormplotError, RenderConfig, Result};
use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Everything drawn on the page, in PDF user-space points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub bars: Vec<Bar>,
    pub curve: Vec<(f64, f64)>,
}

impl PageGeometry {
    /// One bar per bin at `edge * scale_x`, and the density curve through
    /// `(center, value * scale_y)`.
    pub fn layout(bins: &BinSet, density: &DensityProfile, cfg: &RenderConfig) -> Self {
        let bars = bins
            .edges
            .iter()
            .zip(&density.values)
            .map(|(&edge, &p)| Bar {
                x: edge as f64 * cfg.scale_x,
                y: cfg.baseline,
                width: cfg.bar_width,
                height: p * cfg.scale_y,
            })
            .collect();
        let curve = bins
            .centers
            .iter()
            .zip(&density.values)
            .map(|(&c, &p)| (c, p * cfg.scale_y))
            .collect();
        Self { bars, curve }
    }
}

const FONT_NAME: Name<'static> = Name(b"F1");

/// Encodes a single-page PDF. Identical input gives identical bytes.
pub fn encode_pdf(geometry: &PageGeometry, cfg: &RenderConfig) -> Vec<u8> {
    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let page_id = Ref::new(3);
    let font_id = Ref::new(4);
    let content_id = Ref::new(5);
    let info_id = Ref::new(6);

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id).kids([page_id]).count(1);

    let mut page = pdf.page(page_id);
    page.media_box(Rect::new(0.0, 0.0, cfg.page_width as f32, cfg.page_height as f32));
    page.parent(page_tree_id);
    page.contents(content_id);
    page.resources().fonts().pair(FONT_NAME, font_id);
    page.finish();

    pdf.type1_font(font_id).base_font(Name(b"Helvetica"));
    pdf.document_info(info_id)
        .title(TextStr(&cfg.title))
        .producer(TextStr("normplot"));

    let content = page_content(geometry, cfg);
    pdf.stream(content_id, &content);
    let bytes = pdf.finish();
    debug!(
        "encoded page: {} bars, {} curve points, {} bytes",
        geometry.bars.len(),
        geometry.curve.len(),
        bytes.len()
    );
    bytes
}

fn page_content(geometry: &PageGeometry, cfg: &RenderConfig) -> Vec<u8> {
    let mut content = Content::new();

    let title = ascii_only(&cfg.title);
    content.begin_text();
    content.set_font(FONT_NAME, cfg.title_size as f32);
    content.next_line(cfg.title_x as f32, cfg.title_y as f32);
    content.show(Str(title.as_bytes()));
    content.end_text();

    let [r, g, b] = cfg.bar_color;
    content.save_state();
    content.set_fill_rgb(r, g, b);
    for bar in &geometry.bars {
        content.rect(bar.x as f32, bar.y as f32, bar.width as f32, bar.height as f32);
    }
    content.fill_nonzero();
    content.restore_state();

    // a single bin still gets its curve path, a lone moveto that strokes as a point
    if let Some(&(x0, y0)) = geometry.curve.first() {
        let [r, g, b] = cfg.curve_color;
        content.save_state();
        content.set_stroke_rgb(r, g, b);
        content.set_line_width(cfg.curve_width as f32);
        content.move_to(x0 as f32, y0 as f32);
        for &(x, y) in &geometry.curve[1..] {
            content.line_to(x as f32, y as f32);
        }
        content.stroke();
        content.restore_state();
    }

    content.finish()
}

// base-14 Helvetica has no embedded glyph table, keep the title to plain ASCII
fn ascii_only(s: &str) -> String {
    s.chars().map(|c| if c.is_ascii() { c } else { '?' }).collect()
}

/// Writes `bytes` to `path` through a temporary file in the same directory.
/// The final name only ever holds a complete, synced file.
pub fn write_pdf(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::Builder::new()
        .prefix(".normplot-")
        .suffix(".pdf.tmp")
        .tempfile_in(dir)
        .map_err(|e| NormplotError::output(dir, e))?;
    tmp.write_all(bytes).map_err(|e| NormplotError::output(path, e))?;
    tmp.as_file().sync_all().map_err(|e| NormplotError::output(path, e))?;
    // on failure the returned PersistError owns the temp file and removes it on drop
    tmp.persist(path).map_err(|e| NormplotError::output(path, e.error))?;
    Ok(())
}
