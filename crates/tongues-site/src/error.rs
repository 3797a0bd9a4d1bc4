//! Error types for locale registration and navigation partitioning.

/// Error returned when the configured locale list cannot form a registry.
///
/// Always fatal: no partitioning happens after one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// No locales were configured.
    #[error("At least one locale must be configured")]
    NoLocales,
    /// A locale's link has no first path segment.
    #[error("Locale '{lang}' has link '{link}' without a leading path segment")]
    EmptyPartitionKey {
        /// Language code of the offending locale.
        lang: String,
        /// The configured link.
        link: String,
    },
    /// Two locales share the same first path segment.
    #[error("Locales '{first}' and '{second}' share the path prefix '{key}'")]
    DuplicatePartitionKey {
        /// The shared first path segment.
        key: String,
        /// Language code of the locale registered first.
        first: String,
        /// Language code of the conflicting locale.
        second: String,
    },
    /// Two locales share the same language code.
    #[error("Language code '{0}' is configured more than once")]
    DuplicateLang(String),
}

/// Error raised while building the navigation of a single locale.
///
/// Only the locale named in the error is affected; see
/// [`Partition::failures`](crate::Partition::failures).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PartitionError {
    /// A custom nav entry points at a missing page or a page of another locale.
    #[error("{}", unknown_reference_message(.lang, .reference, .owner.as_deref()))]
    UnknownPageReference {
        /// Locale whose custom nav contains the reference.
        lang: String,
        /// The reference as written in the nav.
        reference: String,
        /// Language of the locale owning the referenced page, if it exists.
        owner: Option<String>,
    },
    /// A custom nav lists the same page more than once.
    #[error("Nav for locale '{lang}' lists '{reference}' more than once")]
    DuplicatePageReference {
        /// Locale whose custom nav contains the reference.
        lang: String,
        /// The repeated reference as written in the nav.
        reference: String,
    },
    /// A custom nav mapping entry without exactly one title key.
    #[error("Nav entry for locale '{lang}' must have exactly one title, found {keys}")]
    InvalidNavEntry {
        /// Locale whose custom nav contains the entry.
        lang: String,
        /// Number of keys found in the mapping.
        keys: usize,
    },
}

impl PartitionError {
    /// Language code of the locale this error belongs to.
    #[must_use]
    pub fn lang(&self) -> &str {
        match self {
            Self::UnknownPageReference { lang, .. }
            | Self::DuplicatePageReference { lang, .. }
            | Self::InvalidNavEntry { lang, .. } => lang,
        }
    }
}

fn unknown_reference_message(lang: &str, reference: &str, owner: Option<&str>) -> String {
    match owner {
        Some(owner) => format!(
            "Nav for locale '{lang}' references '{reference}', which belongs to locale '{owner}'"
        ),
        None => format!("Nav for locale '{lang}' references unknown page '{reference}'"),
    }
}
