//! Static profile data: the fixed link list shown above the repository
//! cards. This is configuration, not runtime state; edit the constants in
//! [`Profile::with_username`] to personalize the page.

/// Icon shown next to a profile link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    GitHub,
    LinkedIn,
    Code,
    Mail,
}

impl Icon {
    /// Inner SVG markup for the icon, drawn on a 24x24 grid with
    /// `stroke="currentColor"` inherited from the enclosing element.
    pub fn svg(self) -> &'static str {
        match self {
            Icon::GitHub => {
                r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#
            }
            Icon::LinkedIn => {
                r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#
            }
            Icon::Code => r#"<polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/>"#,
            Icon::Mail => {
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
            }
        }
    }
}

/// One outbound profile link, opened in a new browsing context.
#[derive(Debug, Clone)]
pub struct Link {
    pub label: &'static str,
    pub url: String,
    pub icon: Icon,
}

/// The profile block: identity plus the fixed link list.
#[derive(Debug, Clone)]
pub struct Profile {
    pub display_name: &'static str,
    pub tagline: &'static str,
    pub links: Vec<Link>,
}

impl Profile {
    /// Builds the default profile. The GitHub link points at the
    /// configured account when one is set, at the GitHub front page
    /// otherwise.
    pub fn with_username(username: Option<&str>) -> Self {
        let github_url = match username {
            Some(u) if !u.is_empty() => format!("https://github.com/{}", u),
            _ => "https://github.com".to_string(),
        };

        Self {
            display_name: "DevLink",
            tagline: "Links, projects and contact in one place.",
            links: vec![
                Link {
                    label: "GitHub Profile",
                    url: github_url,
                    icon: Icon::GitHub,
                },
                Link {
                    label: "LinkedIn",
                    url: "https://linkedin.com/in/your-profile".to_string(),
                    icon: Icon::LinkedIn,
                },
                Link {
                    label: "Portfolio / CV",
                    url: "https://your-portfolio.example".to_string(),
                    icon: Icon::Code,
                },
                Link {
                    label: "Contact",
                    url: "mailto:hello@example.com".to_string(),
                    icon: Icon::Mail,
                },
            ],
        }
    }
}
