//! Built-in HTML template for the landing page.

use std::fmt::Write;

use tongues_site::Locale;

/// Render the built-in landing page.
///
/// `language_map` pairs lowercased language codes with locale links, in the
/// order they should appear in the script.
#[must_use]
pub fn render_default(default_locale: &Locale, language_map: &[(String, String)]) -> String {
    let default_link = js_string(&default_locale.link);
    let mut html = String::with_capacity(1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n  <head>\n");
    html.push_str("    <meta charset=\"UTF-8\" />\n");
    html.push_str("    <title>Redirecting ...</title>\n\n");
    let _ = writeln!(
        html,
        "    <!-- Redirect to {} after 3s (Which usually happens when JavaScript is disabled) -->",
        escape(&default_locale.lang)
    );
    let _ = writeln!(
        html,
        "    <meta http-equiv=\"refresh\" content=\"3;url={}\" />",
        escape(&default_locale.link)
    );
    html.push_str("  </head>\n  <body>\n    <script>\n      (function () {\n");
    let _ = writeln!(
        html,
        "        const LANGUAGE_MAP = {};\n",
        render_language_map(language_map)
    );
    let _ = writeln!(html, "        const DEFAULT_LANGUAGE = {default_link};\n");
    html.push_str(
        "        const userLang = (\n          navigator.language ||\n          \
         navigator.userLanguage ||\n          navigator.browserLanguage\n        \
         ).toLowerCase();\n\n",
    );
    html.push_str(
        "        window.location.href =\n          LANGUAGE_MAP[userLang] ||\n          \
         LANGUAGE_MAP[userLang.split(\"-\")[0]] ||\n          DEFAULT_LANGUAGE;\n",
    );
    html.push_str("      })();\n    </script>\n  </body>\n</html>");

    html
}

/// Render the language map as a JavaScript object literal.
fn render_language_map(language_map: &[(String, String)]) -> String {
    let items: Vec<String> = language_map
        .iter()
        .map(|(lang, link)| format!("{}: {}", js_string(lang), js_string(link)))
        .collect();
    format!("{{\n          {}\n        }}", items.join(",\n          "))
}

/// Quote a string as a JavaScript literal safe to embed in a script tag.
fn js_string(s: &str) -> String {
    serde_json::to_string(s)
        .unwrap_or_else(|_| "\"\"".to_owned())
        .replace("</", "<\\/")
}

fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
