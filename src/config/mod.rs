pub mod labels;

use anyhow::{anyhow, Context, Result};
use url::Url;

pub use labels::PanelLabels;

pub const CSRF_TOKEN_META: &str = "_csrf";
pub const CSRF_HEADER_META: &str = "_csrf_header";
pub const ENDPOINT_BASE_META: &str = "_notifications_base";

pub const DEFAULT_CSRF_HEADER: &str = "X-CSRF-TOKEN";
pub const DEFAULT_ENDPOINT_BASE: &str = "/notifications";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsrfToken {
    pub header: String,
    pub value: String,
}

#[derive(Clone, Debug)]
pub struct PanelConfig {
    pub csrf: Option<CsrfToken>,
    pub endpoint_base: Url,
    pub labels: PanelLabels,
}

impl PanelConfig {
    pub fn new(endpoint_base: Url) -> Self {
        Self {
            csrf: None,
            endpoint_base,
            labels: PanelLabels::default(),
        }
    }

    /// Builds the config from page `<meta>` tags. `lookup` maps a meta name
    /// to its `content` attribute.
    pub fn from_meta<F>(origin: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let origin =
            Url::parse(origin).with_context(|| format!("invalid page origin: {}", origin))?;

        let base_path = meta_or(&lookup, ENDPOINT_BASE_META, DEFAULT_ENDPOINT_BASE);
        let endpoint_base = origin
            .join(&base_path)
            .map_err(|err| anyhow!("invalid {}: {}", ENDPOINT_BASE_META, err))?;
        if endpoint_base.cannot_be_a_base() {
            return Err(anyhow!(
                "invalid {}: {} cannot carry path segments",
                ENDPOINT_BASE_META,
                endpoint_base
            ));
        }

        let csrf = match meta_non_empty(&lookup, CSRF_TOKEN_META) {
            Some(value) => {
                let header = meta_or(&lookup, CSRF_HEADER_META, DEFAULT_CSRF_HEADER);
                if !is_header_name(&header) {
                    return Err(anyhow!("invalid {}: {:?}", CSRF_HEADER_META, header));
                }
                Some(CsrfToken { header, value })
            }
            None => None,
        };

        Ok(Self {
            csrf,
            endpoint_base,
            labels: PanelLabels::default(),
        })
    }

    pub fn with_csrf(mut self, header: impl Into<String>, value: impl Into<String>) -> Self {
        self.csrf = Some(CsrfToken {
            header: header.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_labels(mut self, labels: PanelLabels) -> Self {
        self.labels = labels;
        self
    }
}

fn meta_non_empty<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn meta_or<F>(lookup: &F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    meta_non_empty(lookup, name).unwrap_or_else(|| default.to_string())
}

// RFC 9110 token characters.
fn is_header_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b))
}
