//! Self-contained HTML page hosting the report table.

use crate::report::adapter::CONTAINER_ID;
use crate::report::strings::Strings;

const STYLESHEETS: &[&str] = &[
    "https://cdn.datatables.net/1.10.24/css/jquery.dataTables.min.css",
    "https://cdn.datatables.net/buttons/1.7.0/css/buttons.dataTables.min.css",
];

// Order matters: the export plugin needs JSZip and the Buttons core.
const SCRIPTS: &[&str] = &[
    "https://cdn.tailwindcss.com",
    "https://code.jquery.com/jquery-3.6.0.min.js",
    "https://cdn.datatables.net/1.10.24/js/jquery.dataTables.min.js",
    "https://cdn.datatables.net/buttons/1.7.0/js/dataTables.buttons.min.js",
    "https://cdnjs.cloudflare.com/ajax/libs/jszip/3.1.3/jszip.min.js",
    "https://cdn.datatables.net/buttons/1.7.0/js/buttons.html5.min.js",
];

/// Wrap the container markup in a complete HTML document.
pub fn render_page(container_html: &str, strings: &Strings) -> String {
    let stylesheets: String = STYLESHEETS
        .iter()
        .map(|href| format!("    <link rel=\"stylesheet\" href=\"{}\">\n", href))
        .collect();
    let scripts: String = SCRIPTS
        .iter()
        .map(|src| format!("    <script src=\"{}\"></script>\n", src))
        .collect();

    format!(
        r##"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
{stylesheets}{scripts}</head>
<body class="bg-gray-50">
    <main class="container mx-auto p-6">
        <h1 class="text-2xl font-bold mb-4">{title}</h1>
        <div id="{container_id}" class="bg-white shadow rounded-lg p-4">
{container_html}
        </div>
    </main>
</body>
</html>
"##,
        lang = html_escape(&strings.page_lang),
        title = html_escape(&strings.page_title),
        stylesheets = stylesheets,
        scripts = scripts,
        container_id = CONTAINER_ID,
        container_html = container_html,
    )
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
