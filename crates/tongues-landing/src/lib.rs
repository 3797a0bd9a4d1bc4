//! Root landing page for multi-language sites.
//!
//! The generated `index.html` sends visitors to the locale matching their
//! browser language, then to the locale of the base language (`zh` for
//! `zh-TW`), and finally to the default locale. Without JavaScript a
//! meta refresh redirects to the default locale after three seconds.

mod template;

use std::path::{Path, PathBuf};

use tongues_site::Locale;

pub use template::render_default;

/// Error returned when the landing page cannot be written.
#[derive(Debug, thiserror::Error)]
pub enum LandingError {
    /// I/O error writing the output file.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        /// File being written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Generates the landing page for a set of locales.
#[derive(Clone, Debug)]
pub struct LandingPage {
    locales: Vec<Locale>,
    default_locale: Locale,
}

impl LandingPage {
    /// Create a generator for `locales` redirecting to `default_locale` by default.
    #[must_use]
    pub fn new(locales: &[Locale], default_locale: &Locale) -> Self {
        Self {
            locales: locales.to_vec(),
            default_locale: default_locale.clone(),
        }
    }

    /// Lowercased language codes mapped to locale links.
    ///
    /// Base languages of hyphenated codes are added when not configured
    /// themselves; the first hyphenated locale claims the base language.
    #[must_use]
    pub fn language_map(&self) -> Vec<(String, String)> {
        let mut map: Vec<(String, String)> = Vec::with_capacity(self.locales.len());
        for locale in &self.locales {
            insert_new(&mut map, locale.lang.to_lowercase(), &locale.link);
        }

        let configured = map.len();
        for i in 0..configured {
            let (lang, link) = map[i].clone();
            if let Some((base, _)) = lang.split_once('-') {
                insert_new(&mut map, base.to_owned(), &link);
            }
        }

        map
    }

    /// Render the built-in landing page.
    #[must_use]
    pub fn render_default(&self) -> String {
        render_default(&self.default_locale, &self.language_map())
    }

    /// Render the landing page, preferring a custom template.
    ///
    /// A template that cannot be read is logged and replaced by the
    /// built-in page.
    #[must_use]
    pub fn render(&self, custom_template: Option<&Path>) -> String {
        if let Some(content) = custom_template.and_then(read_custom_template) {
            tracing::info!("Using custom landing page template");
            return content;
        }
        tracing::info!("Generated default landing page with language redirection");
        self.render_default()
    }

    /// Write `index.html` into `site_dir`.
    ///
    /// # Errors
    ///
    /// Returns `LandingError::Io` if the directory or file cannot be written.
    pub fn write(
        &self,
        site_dir: &Path,
        custom_template: Option<&Path>,
    ) -> Result<PathBuf, LandingError> {
        let html = self.render(custom_template);
        let path = site_dir.join("index.html");

        std::fs::create_dir_all(site_dir).map_err(|source| LandingError::Io {
            path: site_dir.to_path_buf(),
            source,
        })?;
        std::fs::write(&path, html).map_err(|source| LandingError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Wrote landing page");
        Ok(path)
    }
}

fn insert_new(map: &mut Vec<(String, String)>, lang: String, link: &str) {
    if !map.iter().any(|(existing, _)| *existing == lang) {
        map.push((lang, link.to_owned()));
    }
}

fn read_custom_template(path: &Path) -> Option<String> {
    if !path.exists() {
        return None;
    }
    match std::fs::read_to_string(path) {
        Ok(content) if !content.is_empty() => Some(content),
        Ok(_) => {
            tracing::warn!(path = %path.display(), "Custom landing template is empty");
            None
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read custom landing template");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn locale(lang: &str) -> Locale {
        Locale::new(lang)
    }

    fn pairs(map: &[(String, String)]) -> Vec<(&str, &str)> {
        map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }

    #[test]
    fn test_language_map_basic() {
        let locales = [locale("en"), locale("zh")];
        let landing = LandingPage::new(&locales, &locales[0]);

        assert_eq!(
            pairs(&landing.language_map()),
            [("en", "/en/"), ("zh", "/zh/")]
        );
    }

    #[test]
    fn test_language_map_adds_base_languages() {
        let locales = [
            locale("en-US").with_link("/en/"),
            locale("zh-TW").with_link("/tw/"),
            locale("zh-CN").with_link("/cn/"),
        ];
        let landing = LandingPage::new(&locales, &locales[0]);

        assert_eq!(
            pairs(&landing.language_map()),
            [
                ("en-us", "/en/"),
                ("zh-tw", "/tw/"),
                ("zh-cn", "/cn/"),
                ("en", "/en/"),
                ("zh", "/tw/"),
            ]
        );
    }

    #[test]
    fn test_language_map_configured_base_wins() {
        let locales = [
            locale("zh-TW").with_link("/tw/"),
            locale("zh").with_link("/zh/"),
        ];
        let landing = LandingPage::new(&locales, &locales[1]);

        assert_eq!(
            pairs(&landing.language_map()),
            [("zh-tw", "/tw/"), ("zh", "/zh/")]
        );
    }

    #[test]
    fn test_render_without_template_uses_default() {
        let locales = [locale("en"), locale("zh")];
        let landing = LandingPage::new(&locales, &locales[1]);

        let html = landing.render(None);

        assert!(html.contains("content=\"3;url=/zh/\""));
        assert!(html.contains(r#""en": "/en/""#));
    }

    #[test]
    fn test_render_missing_template_uses_default() {
        let locales = [locale("en")];
        let landing = LandingPage::new(&locales, &locales[0]);

        let html = landing.render(Some(Path::new("/nonexistent/index.html")));

        assert_eq!(html, landing.render_default());
    }

    #[test]
    fn test_render_custom_template() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("index.html");
        std::fs::write(&template, "<html>custom</html>").unwrap();
        let locales = [locale("en")];
        let landing = LandingPage::new(&locales, &locales[0]);

        let html = landing.render(Some(&template));

        assert_eq!(html, "<html>custom</html>");
    }

    #[test]
    fn test_render_unreadable_template_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        // A directory exists but cannot be read as a file
        let locales = [locale("en")];
        let landing = LandingPage::new(&locales, &locales[0]);

        let html = landing.render(Some(dir.path()));

        assert_eq!(html, landing.render_default());
    }

    #[test]
    fn test_write_creates_index_html() {
        let dir = tempfile::tempdir().unwrap();
        let site_dir = dir.path().join("site");
        let locales = [locale("en"), locale("zh")];
        let landing = LandingPage::new(&locales, &locales[0]);

        let path = landing.write(&site_dir, None).unwrap();

        assert_eq!(path, site_dir.join("index.html"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, landing.render_default());
    }

    #[test]
    fn test_write_error_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("site");
        std::fs::write(&blocker, "not a directory").unwrap();
        let locales = [locale("en")];
        let landing = LandingPage::new(&locales, &locales[0]);

        let err = landing.write(&blocker, None).unwrap_err();

        assert!(err.to_string().contains("site"));
    }
}
