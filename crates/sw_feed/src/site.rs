/// Selectors and locations for the monitored portal. Defaults target the
/// Social Schools parent portal; every field can be overridden for a
/// different deployment of the same feed layout.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub login_url: String,
    pub username_selector: String,
    pub password_selector: String,
    pub feed_selector: String,
    pub article_selector: String,
    pub title_selector: String,
    pub body_selector: String,
    pub time_selector: String,
    /// Attribute carrying the site-provided stable post id, when present.
    pub id_attribute: String,
    /// Visible label of the "show more" control on truncated posts.
    pub expand_label: String,
    /// Fragment the post-login URL must contain before the run proceeds.
    pub authenticated_url_fragment: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            login_url: "https://app.socialschools.eu/home".to_string(),
            username_selector: "#username".to_string(),
            password_selector: "#Password".to_string(),
            feed_selector: "div[role='feed']".to_string(),
            article_selector: "div[role='article']".to_string(),
            title_selector: "h3".to_string(),
            body_selector: "span[as='div']".to_string(),
            time_selector: "time".to_string(),
            id_attribute: "data-id".to_string(),
            expand_label: "Meer weergeven".to_string(),
            authenticated_url_fragment: "home".to_string(),
        }
    }
}
