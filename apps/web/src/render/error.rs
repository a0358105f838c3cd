use crate::render::{escape, home_link, page};

/// Generic error page shown for unmatched routes and unexpected failures.
/// `detail` is the status text or message of the error.
pub fn render_error_page(detail: &str) -> String {
    let body = format!(
        r#"<main class="center">
<h1 class="error">Oops!</h1>
<p>Sorry, an unexpected error has occurred.</p>
<p><i>{}</i></p>
{}
</main>"#,
        escape(detail),
        home_link()
    );

    page("Oops!", &body)
}
