use crate::profile::{FetchState, Resume};
use crate::render::{escape, format_date, home_link, page};

const NO_NAME: &str = "No name provided";

/// Resume view for `username` in whatever state its fetch is in.
pub fn render_resume(username: &str, state: &FetchState) -> String {
    match state {
        FetchState::Loading => page(
            "Loading...",
            r#"<main class="center"><h1>Loading...</h1><div class="loader" role="status"></div></main>"#,
        ),
        FetchState::Failed(reason) => page(
            "Error",
            &format!(
                r#"<main class="center">
<h1 class="error">Error</h1>
<p class="error">{}</p>
{}
</main>"#,
                escape(reason),
                home_link()
            ),
        ),
        FetchState::Loaded(resume) => page(
            &format!("User Resume for {username}"),
            &loaded_body(username, resume),
        ),
    }
}

fn loaded_body(username: &str, resume: &Resume) -> String {
    let user = escape(username);
    let profile = &resume.profile;
    let mut html = String::new();

    html.push_str(&format!(
        r#"<main><div class="card">
<h1>User Resume for {user}</h1>
<section class="identity">
<h2>Personal Information</h2>
<img src="{}" alt="{user} avatar" width="80" height="80">
<p><strong>Name:</strong> {}</p>
<p><strong>Public Repositories:</strong> {}</p>
<p><strong>Member Since:</strong> {}</p>
</section>
"#,
        escape(&profile.avatar_url),
        escape(profile.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(NO_NAME)),
        profile.public_repos,
        format_date(&profile.created_at),
    ));

    html.push_str("<section class=\"languages\">\n<h2>Languages Used</h2>\n<ul>\n");
    for share in resume.tally.percentages() {
        html.push_str(&format!(
            "<li><strong>{}:</strong> {}%</li>\n",
            escape(&share.language),
            share.formatted()
        ));
    }
    html.push_str("</ul>\n</section>\n");

    html.push_str(
        "<section class=\"repositories\">\n<h2>Recent Repositories</h2>\n<ul class=\"repos\">\n",
    );
    for repo in &resume.repos {
        html.push_str(&format!(
            r#"<li><a href="{}" target="_blank" rel="noopener noreferrer"><span>{}</span> (Updated: {})</a></li>"#,
            escape(&repo.html_url),
            escape(&repo.name),
            format_date(&repo.updated_at)
        ));
        html.push('\n');
    }
    html.push_str("</ul>\n</section>\n</div></main>");

    html
}
