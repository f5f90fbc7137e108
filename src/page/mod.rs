//! Profile page renderer.
//!
//! Assembles the single HTML document out of the static profile data, the
//! fetched repository cards and the theme/QR chrome. The document is small
//! enough to build by hand; every upstream-sourced string goes through
//! [`escape_html`] before interpolation.

pub mod links;
pub mod qr;
pub mod theme;

pub use links::{Icon, Link, Profile};
pub use theme::Theme;

use anyhow::Result;

use crate::github::RepoSummary;

/// Shown instead of the card list when there is nothing to display. The
/// same text covers an unconfigured account, a failed fetch and an account
/// with zero repositories.
pub const EMPTY_STATE_TEXT: &str = "Loading repositories, or GITHUB_USERNAME is not set.";

/// Card body used when a repository has no description upstream.
pub const NO_DESCRIPTION_TEXT: &str = "No description provided.";

/// Render the complete profile page.
pub fn render_page(profile: &Profile, public_url: &str, repos: &[RepoSummary]) -> Result<String> {
    let mut html = String::with_capacity(16 * 1024);

    html.push_str("<!doctype html>\n<html lang=\"en\" data-theme=\"");
    html.push_str(Theme::default().key());
    html.push_str("\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>{} | Your Tech Profile</title>\n",
        escape_html(profile.display_name)
    ));
    html.push_str(
        "<meta name=\"description\" content=\"Personal link-in-bio page with recent GitHub projects.\">\n",
    );
    html.push_str("<style>");
    html.push_str(STYLESHEET);
    html.push_str("</style>\n</head>\n<body>\n<main class=\"shell\">\n");

    html.push_str(&render_theme_toggle());
    html.push_str(&format!(
        "<header class=\"profile\">\n<h1>{}</h1>\n<p class=\"tagline\">{}</p>\n</header>\n",
        escape_html(profile.display_name),
        escape_html(profile.tagline)
    ));

    html.push_str("<nav class=\"links\">\n");
    for link in &profile.links {
        html.push_str(&render_link(link));
    }
    html.push_str("</nav>\n");

    html.push_str(&render_repo_section(repos));

    html.push_str("<section class=\"qr\">\n<figure>\n");
    html.push_str(&qr::qr_svg(public_url)?);
    html.push_str("\n<figcaption>Scan to open this page</figcaption>\n</figure>\n</section>\n");

    html.push_str("</main>\n<script>");
    html.push_str(THEME_SCRIPT);
    html.push_str("</script>\n</body>\n</html>\n");

    Ok(html)
}

fn render_link(link: &Link) -> String {
    format!(
        concat!(
            "<a class=\"link\" href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\">",
            "<svg class=\"icon\" viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" ",
            "stroke-width=\"2\" stroke-linecap=\"round\" stroke-linejoin=\"round\" ",
            "aria-hidden=\"true\">{icon}</svg>",
            "<span>{label}</span></a>\n"
        ),
        url = escape_html(&link.url),
        icon = link.icon.svg(),
        label = escape_html(link.label),
    )
}

fn render_repo_section(repos: &[RepoSummary]) -> String {
    let mut html = String::new();
    html.push_str("<section class=\"repos\">\n<h2>Recent Projects</h2>\n");

    if repos.is_empty() {
        html.push_str(&format!(
            "<p class=\"empty-state\">{}</p>\n",
            escape_html(EMPTY_STATE_TEXT)
        ));
    } else {
        for repo in repos {
            html.push_str(&render_card(repo));
        }
    }

    html.push_str("</section>\n");
    html
}

fn render_card(repo: &RepoSummary) -> String {
    let description = repo.description.as_deref().unwrap_or(NO_DESCRIPTION_TEXT);

    let mut card = format!(
        concat!(
            "<article class=\"repo-card\">\n",
            "<a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\">",
            "<h3>{name}</h3></a>\n",
            "<p class=\"repo-description\">{description}</p>\n",
            "<div class=\"repo-meta\">\n",
            "<span class=\"repo-stars\">&#9733; {stars}</span>\n"
        ),
        url = escape_html(&repo.html_url),
        name = escape_html(&repo.name),
        description = escape_html(description),
        stars = repo.stargazers_count,
    );

    // The language badge is omitted entirely when upstream reports none.
    if let Some(language) = repo.language.as_deref() {
        card.push_str(&format!(
            "<span class=\"repo-language\">{}</span>\n",
            escape_html(language)
        ));
    }

    card.push_str("</div>\n</article>\n");
    card
}

fn render_theme_toggle() -> String {
    let mut html = String::from("<div class=\"theme-toggle\" role=\"group\" aria-label=\"Theme\">\n");
    for theme in Theme::ALL {
        html.push_str(&format!(
            "<button type=\"button\" data-set-theme=\"{}\">{}</button>\n",
            theme.key(),
            theme.label()
        ));
    }
    html.push_str("</div>\n");
    html
}

/// Minimal HTML entity escaping for interpolated text and attribute values.
fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const STYLESHEET: &str = r##"
:root {
  --bg: #f8fafc;
  --fg: #0f172a;
  --muted: #64748b;
  --card-bg: #ffffff;
  --card-border: #e2e8f0;
}
html[data-theme="dark"] {
  --bg: #0f172a;
  --fg: #f1f5f9;
  --muted: #94a3b8;
  --card-bg: #1e293b;
  --card-border: #334155;
}
* { box-sizing: border-box; }
body {
  margin: 0;
  font-family: system-ui, sans-serif;
  background: var(--bg);
  color: var(--fg);
  transition: background 0.3s, color 0.3s;
}
.shell {
  max-width: 28rem;
  margin: 0 auto;
  padding: 2rem 1rem;
  text-align: center;
}
.profile h1 { margin: 0.5rem 0 0; }
.tagline { color: var(--muted); margin-top: 0.25rem; }
.links { display: flex; flex-direction: column; gap: 0.75rem; margin: 1.5rem 0; }
.link {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.75rem;
  border: 1px solid var(--card-border);
  border-radius: 0.5rem;
  background: var(--card-bg);
  color: inherit;
  text-decoration: none;
}
.icon { width: 1.25rem; height: 1.25rem; }
.repos { margin-top: 2rem; }
.repo-card {
  text-align: left;
  border: 1px solid var(--card-border);
  border-radius: 0.5rem;
  background: var(--card-bg);
  padding: 1rem;
  margin-bottom: 1rem;
}
.repo-card a { color: inherit; text-decoration: none; }
.repo-card h3 { margin: 0; }
.repo-description { color: var(--muted); font-size: 0.875rem; }
.repo-meta { display: flex; gap: 1rem; font-size: 0.75rem; color: var(--muted); }
.empty-state { color: var(--muted); }
.theme-toggle { display: flex; justify-content: flex-end; gap: 0.25rem; }
.theme-toggle button {
  border: 1px solid var(--card-border);
  background: var(--card-bg);
  color: inherit;
  border-radius: 0.375rem;
  padding: 0.25rem 0.5rem;
  cursor: pointer;
}
.qr { margin-top: 2rem; }
.qr svg { width: 9rem; height: 9rem; }
.qr figcaption { color: var(--muted); font-size: 0.75rem; margin-top: 0.5rem; }
"##;

const THEME_SCRIPT: &str = r##"
(function () {
  function apply(choice) {
    var resolved = choice;
    if (choice === "system") {
      resolved = window.matchMedia("(prefers-color-scheme: dark)").matches
        ? "dark"
        : "light";
    }
    document.documentElement.dataset.theme = resolved;
  }

  var stored = null;
  try {
    stored = localStorage.getItem("theme");
  } catch (e) {}
  apply(stored || "light");

  document.querySelectorAll("[data-set-theme]").forEach(function (button) {
    button.addEventListener("click", function () {
      var choice = button.getAttribute("data-set-theme");
      try {
        localStorage.setItem("theme", choice);
      } catch (e) {}
      apply(choice);
    });
  });
})();
"##;

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, description: Option<&str>, language: Option<&str>) -> RepoSummary {
        RepoSummary {
            id: 1,
            name: name.to_string(),
            description: description.map(str::to_string),
            html_url: format!("https://github.com/octocat/{}", name),
            stargazers_count: 5,
            language: language.map(str::to_string),
        }
    }

    fn render(repos: &[RepoSummary]) -> String {
        let profile = Profile::with_username(Some("octocat"));
        render_page(&profile, "https://devlink.example", repos).unwrap()
    }

    #[test]
    fn test_empty_list_renders_fallback_message() {
        let html = render(&[]);
        assert!(html.contains(EMPTY_STATE_TEXT));
        assert!(!html.contains("<article class=\"repo-card\""));
    }

    #[test]
    fn test_cards_render_in_received_order() {
        let html = render(&[
            repo("newest", Some("first"), Some("Rust")),
            repo("older", Some("second"), Some("Go")),
        ]);

        assert!(!html.contains(EMPTY_STATE_TEXT));
        let first = html.find("newest").unwrap();
        let second = html.find("older").unwrap();
        assert!(first < second);
        assert_eq!(html.matches("<article class=\"repo-card\"").count(), 2);
    }

    #[test]
    fn test_missing_description_falls_back_to_placeholder() {
        let html = render(&[repo("quiet", None, Some("Rust"))]);
        assert!(html.contains(NO_DESCRIPTION_TEXT));
    }

    #[test]
    fn test_missing_language_omits_badge_but_keeps_stars() {
        let html = render(&[repo("polyglot", Some("whatever"), None)]);
        assert!(!html.contains("repo-language"));
        assert!(html.contains("&#9733; 5"));
    }

    #[test]
    fn test_language_badge_rendered_when_present() {
        let html = render(&[repo("tool", Some("whatever"), Some("Rust"))]);
        assert!(html.contains("repo-language"));
        assert!(html.contains("Rust"));
    }

    #[test]
    fn test_upstream_strings_are_escaped() {
        let html = render(&[repo("<script>alert(1)</script>", Some("a & b"), None)]);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("a &amp; b"));
    }

    #[test]
    fn test_static_links_always_present() {
        let html = render(&[]);
        for label in ["GitHub Profile", "LinkedIn", "Portfolio / CV", "Contact"] {
            assert!(html.contains(label), "missing link label {}", label);
        }
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
    }

    #[test]
    fn test_theme_toggle_has_three_states() {
        let html = render(&[]);
        for key in ["light", "dark", "system"] {
            assert!(html.contains(&format!("data-set-theme=\"{}\"", key)));
        }
        assert!(html.contains("data-theme=\"light\""));
    }

    #[test]
    fn test_qr_code_is_embedded() {
        let html = render(&[]);
        assert!(html.contains("<svg"));
        assert!(html.contains("figcaption"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b>&\"'"), "a&lt;b&gt;&amp;&quot;&#39;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
