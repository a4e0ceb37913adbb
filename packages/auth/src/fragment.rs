//! URL-fragment parameter parsing.

use std::collections::HashMap;

/// Parse the fragment of `href` into a parameter map.
///
/// The fragment is the text between the first and second `#`. It is split on
/// `&` into pairs and each pair on `=`; a pair with no `=` maps to an empty
/// value. Repeated keys keep the last value seen.
///
/// An href without a `#` yields an empty map.
pub fn parse_fragment(href: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    let Some(fragment) = href.split('#').nth(1) else {
        return params;
    };
    for pair in fragment.split('&') {
        let mut halves = pair.split('=');
        let key = halves.next().unwrap_or_default();
        let value = halves.next().unwrap_or_default();
        params.insert(key.to_owned(), value.to_owned());
    }
    params
}
