// HTML views. Every function here is a pure function of its input; handlers
// decide status codes and which view to show.

pub mod error;
pub mod home;
pub mod resume;

pub use error::render_error_page;
pub use home::render_home;
pub use resume::render_resume;

use chrono::{DateTime, Utc};

const STYLE: &str = "\
body{font-family:system-ui,-apple-system,'Segoe UI',Roboto,sans-serif;margin:0;background:#f3f4f6;color:#111827}\
main{max-width:64rem;margin:0 auto;padding:1rem}\
.card{background:#fff;border-radius:.5rem;box-shadow:0 4px 12px rgba(0,0,0,.1);padding:1rem}\
.center{min-height:100vh;display:flex;flex-direction:column;align-items:center;justify-content:center;text-align:center}\
.error{color:#ef4444}\
section{border-bottom:1px solid #d1d5db;padding:1rem 0}\
ul.repos li{display:flex;justify-content:space-between;padding:.75rem .5rem;border-bottom:1px solid #e5e7eb}\
a{color:#3b82f6}";

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// `M/D/YYYY`, e.g. `3/9/2015`.
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%-m/%-d/%Y").to_string()
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        escape(title)
    )
}

fn home_link() -> &'static str {
    r#"<a href="/">Go to home page</a>"#
}
