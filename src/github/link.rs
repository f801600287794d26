//! `Link` response header parsing (RFC 8288)
//!
//! GitHub paginates list endpoints by returning a header such as:
//!
//! ```text
//! <https://api.github.com/organizations/1/repos?page=2>; rel="next",
//! <https://api.github.com/organizations/1/repos?page=5>; rel="last"
//! ```

/// A single link-value from a `Link` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkValue {
    /// Target URI as written between `<` and `>`
    pub uri: String,
    /// Relation types from the `rel` parameter, lowercased
    pub rels: Vec<String>,
}

impl LinkValue {
    /// Check whether this link carries the given relation type
    pub fn has_rel(&self, rel: &str) -> bool {
        self.rels.iter().any(|r| r.eq_ignore_ascii_case(rel))
    }
}

/// Parse every well-formed link-value in a `Link` header
///
/// Entries without a `<uri>` target are skipped. The `rel` parameter may be
/// quoted or bare and may list several space-separated relation types.
pub fn parse_link_header(header: &str) -> Vec<LinkValue> {
    split_link_values(header)
        .into_iter()
        .filter_map(parse_link_value)
        .collect()
}

/// Return the target of the `rel="next"` link, if any
pub fn next_link(header: &str) -> Option<String> {
    parse_link_header(header)
        .into_iter()
        .find(|link| link.has_rel("next"))
        .map(|link| link.uri)
}

/// Split on commas that are outside `<...>` and quoted strings
fn split_link_values(header: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_uri = false;
    let mut in_quotes = false;
    let mut start = 0;

    for (i, c) in header.char_indices() {
        match c {
            '<' if !in_quotes => in_uri = true,
            '>' if !in_quotes => in_uri = false,
            '"' if !in_uri => in_quotes = !in_quotes,
            ',' if !in_uri && !in_quotes => {
                parts.push(&header[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&header[start..]);
    parts
}

fn parse_link_value(raw: &str) -> Option<LinkValue> {
    let raw = raw.trim();
    let rest = raw.strip_prefix('<')?;
    let end = rest.find('>')?;
    let uri = rest[..end].trim().to_string();
    if uri.is_empty() {
        return None;
    }

    let mut rels = Vec::new();
    for param in rest[end + 1..].split(';') {
        let Some((key, value)) = param.split_once('=') else {
            continue;
        };
        if !key.trim().eq_ignore_ascii_case("rel") {
            continue;
        }
        let value = value.trim().trim_matches('"');
        rels.extend(value.split_whitespace().map(|r| r.to_ascii_lowercase()));
        // Only the first rel parameter counts
        break;
    }

    Some(LinkValue { uri, rels })
}
