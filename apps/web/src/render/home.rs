use crate::home::HomeForm;
use crate::render::{escape, page};

/// Entry form. Shows the inline error under the input when the last submit
/// was rejected, and keeps the submitted text in the box.
pub fn render_home(form: &HomeForm) -> String {
    let error = form
        .error
        .as_deref()
        .map(|message| format!(r#"<p class="error">{}</p>"#, escape(message)))
        .unwrap_or_default();

    let body = format!(
        r#"<main class="center">
<h1>Input GitHub username to see resume</h1>
<form method="post" action="/" class="card">
<label>
<span>Username</span>
<input type="text" name="username" placeholder="john-doe" value="{}">
{error}
</label>
<button type="submit">Submit</button>
</form>
</main>"#,
        escape(&form.username)
    );

    page("GitHub Resume", &body)
}
