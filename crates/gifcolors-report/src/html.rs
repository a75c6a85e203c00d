//! HTML page building blocks shared by the image and index pages

use gifcolors_core::ReportModel;

const STYLE: &str = "<style>
  .cc_color { color: white; }
  .cc_img, .cc_colortable { width: 50%; display: inline-block; float: left; }
  .cc_img img { max-width: 100%; }
</style>";

/// Escape text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Document head up to and including `<body>`
pub(crate) fn page_start(title: &str) -> String {
    format!(
        "<!doctype html>\n<html>\n<head><meta charset='utf-8'><title>{}</title>{}</head>\n<body>",
        escape(title),
        STYLE
    )
}

pub(crate) const PAGE_END: &str = "</body></html>";

/// Render the color report of one image as a self-contained page.
///
/// The image itself is referenced by file name, so the page is meant
/// to sit next to the GIF it describes.
pub fn render_image_report(model: &ReportModel) -> String {
    let name = escape(&model.name);
    let mut html = page_start(&model.name);

    html.push_str(&format!(
        "<h2>{}</h2><div>{} Colors, {}x{} Pixels</div>",
        name,
        model.color_count(),
        model.width,
        model.height
    ));
    html.push_str(&format!("<div class='cc_img'><img src='{}'/></div>", name));
    html.push_str(
        "<table class='cc_colortable'><tr><th>Color</th><th>Count</th><th>Percentage</th></tr>",
    );
    for row in &model.rows {
        html.push_str(&format!(
            "<tr><td class='cc_color' bgcolor='{hex}'>{}. #{hex}</td><td>{}</td><td>{}</td></tr>",
            row.display_index,
            row.count,
            row.percentage_text,
            hex = row.hex
        ));
    }
    html.push_str("</table>");
    html.push_str(PAGE_END);
    html
}
