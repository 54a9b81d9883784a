/// Template renderer for the gallery.
///
/// The gallery uses a single HTML template (`studio/assets/gallery.html`)
/// with placeholder tokens like `{{TOKEN}}`, loaded at compile time.  Callers
/// fill page-specific placeholders through a closure; anything left over is
/// blanked so raw `{{TOKEN}}` strings never reach the browser.

const TEMPLATE: &str = include_str!("assets/gallery.html");

/// Renders the full gallery page.
///
/// # Arguments
/// - `total`: number of loaded samples, shown in the header
/// - `fill` : closure that fills the remaining placeholders
pub fn render_page<F>(total: usize, fill: F) -> String
where
    F: FnOnce(String) -> String,
{
    let mut html = TEMPLATE.to_owned();
    html = html.replace("{{TOTAL}}", &total.to_string());
    html = fill(html);
    blank_remaining(html)
}

fn blank_remaining(mut html: String) -> String {
    while let Some(start) = html.find("{{") {
        if let Some(end) = html[start..].find("}}") {
            let abs_end = start + end + 2;
            html.replace_range(start..abs_end, "");
        } else {
            break;
        }
    }
    html
}

/// Minimal HTML escaping for text placed inside elements and attributes.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
     .replace('<', "&lt;")
     .replace('>', "&gt;")
     .replace('"', "&quot;")
}
