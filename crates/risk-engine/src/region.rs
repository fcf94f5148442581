//! Regional-context inference.
//!
//! Which disclosure rules apply depends on the jurisdiction the site
//! answers to. Detection is coarse: top-level domain first, then in-text
//! location cues.

use url::Url;

use crate::patterns::{contains_any, INDIAN_CONTEXT_KEYWORDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    India,
    Europe,
    Global,
}

impl Region {
    /// Infer the region from the URL's TLD, falling back to in-text cues.
    /// `text_lower` must already be lower-cased.
    pub fn infer(url: &Url, text_lower: &str) -> Self {
        if let Some(host) = url.host_str() {
            if host.ends_with(".in") {
                return Region::India;
            }
            if host.ends_with(".eu") {
                return Region::Europe;
            }
        }
        if contains_any(text_lower, INDIAN_CONTEXT_KEYWORDS) {
            return Region::India;
        }
        Region::Global
    }

    /// Jurisdiction summary embedded in the audit prompt so the model
    /// scores against the right regime.
    pub fn jurisdiction_hint(&self) -> &'static str {
        match self {
            Region::India => "India (IT Rules 2021, DPDP Act 2023, E-Commerce Rules 2020)",
            Region::Europe => "Europe (GDPR, EU AI Act, Digital Services Act)",
            Region::Global => "unknown; apply universal trust standards",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_indian_tld_wins() {
        assert_eq!(Region::infer(&url("https://shop.co.in"), ""), Region::India);
    }

    #[test]
    fn test_european_tld() {
        assert_eq!(Region::infer(&url("https://shop.eu"), ""), Region::Europe);
    }

    #[test]
    fn test_in_text_cues_fall_back_to_india() {
        assert_eq!(
            Region::infer(&url("https://shop.com"), "prices in rupee"),
            Region::India
        );
        assert_eq!(
            Region::infer(&url("https://shop.com"), "shipping across india"),
            Region::India
        );
    }

    #[test]
    fn test_no_cues_is_global() {
        assert_eq!(
            Region::infer(&url("https://shop.com"), "worldwide shipping"),
            Region::Global
        );
    }
}
