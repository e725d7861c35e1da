//! Query-string filter helpers
//!
//! Storefront filters (category, cuisine, page) live in the URL. Clicking a
//! filter toggles one key and keeps every other parameter.

use std::collections::BTreeMap;

/// Flat query-string parameters, kept sorted so generated URLs are stable
pub type QueryParams = BTreeMap<String, String>;

/// Parse `a=1&b=two%20words` into a parameter map.
///
/// Later duplicates win; pairs without `=` map to an empty value.
pub fn parse_query(query: &str) -> QueryParams {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(k), decode(v))
        })
        .collect()
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .unwrap_or(spaced)
}

/// Encode parameters as `a=1&b=two%20words` (sorted by key)
pub fn encode_query(params: &QueryParams) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Append parameters to a path, omitting `?` when there are none
pub fn stringify_url(base_path: &str, params: &QueryParams) -> String {
    if params.is_empty() {
        base_path.to_string()
    } else {
        format!("{}?{}", base_path, encode_query(params))
    }
}

/// Build the URL reached by clicking the `key=value` filter.
///
/// If `key` is already set to `value` the filter is removed, otherwise it is
/// set (replacing any other value). All other parameters are kept.
pub fn build_filter_url(base_path: &str, current: &QueryParams, key: &str, value: &str) -> String {
    let mut next = current.clone();
    if next.get(key).map(String::as_str) == Some(value) {
        next.remove(key);
    } else {
        next.insert(key.to_string(), value.to_string());
    }
    stringify_url(base_path, &next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_toggle_sets_missing_filter() {
        let url = build_filter_url("/menu", &QueryParams::new(), "category", "Pizza");
        assert_eq!(url, "/menu?category=Pizza");
    }

    #[test]
    fn test_toggle_removes_active_filter() {
        let current = params(&[("category", "Pizza"), ("cuisine", "Italian")]);
        let url = build_filter_url("/menu", &current, "category", "Pizza");
        assert_eq!(url, "/menu?cuisine=Italian");
    }

    #[test]
    fn test_toggle_replaces_other_value_and_keeps_params() {
        let current = params(&[("category", "Pizza"), ("cuisine", "Italian")]);
        let url = build_filter_url("/menu", &current, "category", "Ice Cream");
        assert_eq!(url, "/menu?category=Ice%20Cream&cuisine=Italian");
    }

    #[test]
    fn test_toggle_keeps_page() {
        let current = params(&[("page", "3")]);
        assert_eq!(
            build_filter_url("/restaurants", &current, "cuisine", "Thai"),
            "/restaurants?cuisine=Thai&page=3"
        );
    }

    #[test]
    fn test_removing_last_filter_drops_question_mark() {
        let current = params(&[("category", "Pizza")]);
        assert_eq!(build_filter_url("/menu", &current, "category", "Pizza"), "/menu");
    }

    #[test]
    fn test_parse_query() {
        let parsed = parse_query("?category=Ice+Cream&cuisine=Caf%C3%A9&flag");
        assert_eq!(parsed.get("category").unwrap(), "Ice Cream");
        assert_eq!(parsed.get("cuisine").unwrap(), "Café");
        assert_eq!(parsed.get("flag").unwrap(), "");
        assert!(parse_query("").is_empty());
    }

    #[test]
    fn test_idempotent_for_same_inputs() {
        let current = params(&[("cuisine", "Thai")]);
        let a = build_filter_url("/menu", &current, "category", "Soup");
        let b = build_filter_url("/menu", &current, "category", "Soup");
        assert_eq!(a, b);
    }
}
