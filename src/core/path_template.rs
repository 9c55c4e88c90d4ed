use crate::utils::error::{HelloClientError, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;
use url::Url;

/// Everything outside RFC 3986 "unreserved" is escaped inside a path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub fn encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot,
}

/// A request path with exactly one `{name}` slot occupying a whole segment,
/// e.g. `/service-instances/{applicationName}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    raw: String,
    slot_name: String,
    segments: Vec<Segment>,
}

impl PathTemplate {
    pub fn parse(template: &str) -> Result<Self> {
        let invalid = |reason: &str| HelloClientError::InvalidTemplate {
            template: template.to_string(),
            reason: reason.to_string(),
        };

        if template.is_empty() {
            return Err(invalid("template cannot be empty"));
        }
        let Some(rest) = template.strip_prefix('/') else {
            return Err(invalid("template must start with '/'"));
        };

        let mut segments = Vec::new();
        let mut slot_name: Option<String> = None;

        for part in rest.split('/') {
            if !part.contains(['{', '}']) {
                segments.push(Segment::Literal(part.to_string()));
                continue;
            }

            let name = part
                .strip_prefix('{')
                .and_then(|p| p.strip_suffix('}'))
                .ok_or_else(|| invalid("a slot must occupy a whole path segment"))?;
            if name.is_empty() || name.contains(['{', '}']) {
                return Err(invalid("slot name must be a non-empty identifier"));
            }
            if slot_name.is_some() {
                return Err(invalid("template must contain exactly one slot"));
            }
            slot_name = Some(name.to_string());
            segments.push(Segment::Slot);
        }

        let slot_name = slot_name.ok_or_else(|| invalid("template must contain exactly one slot"))?;

        Ok(Self {
            raw: template.to_string(),
            slot_name,
            segments,
        })
    }

    pub fn slot_name(&self) -> &str {
        &self.slot_name
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Substitutes `value` into the slot and returns the encoded path.
    ///
    /// Literal segments are emitted as written. `.` and `..` are refused
    /// because URL normalization would turn them into a different path.
    pub fn render(&self, value: &str) -> Result<String> {
        if value == "." || value == ".." {
            return Err(HelloClientError::InvalidPathParameter {
                parameter: self.slot_name.clone(),
                value: value.to_string(),
            });
        }

        let encoded = encode_path_segment(value);
        let mut path = String::with_capacity(self.raw.len() + encoded.len());
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Literal(literal) => path.push_str(literal),
                Segment::Slot => path.push_str(&encoded),
            }
        }
        Ok(path)
    }

    /// Renders the path and appends it to `base`, keeping any path prefix
    /// the base already carries (`http://host/ctx` + `/a/b` -> `/ctx/a/b`).
    pub fn expand(&self, base: &Url, value: &str) -> Result<Url> {
        let path = self.render(value)?;
        let prefix = base.path().trim_end_matches('/');

        let mut url = base.clone();
        url.set_path(&format!("{}{}", prefix, path));
        url.set_query(None);
        url.set_fragment(None);
        Ok(url)
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
