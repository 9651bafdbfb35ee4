use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

pub const SEARCH_ENDPOINT: &str = "/search_client";
pub const QUERY_PARAM: &str = "query";

/// Bytes escaped by a browser's `encodeURIComponent`: everything except
/// ASCII alphanumerics and `-_.!~*'()`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_query_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// Path and query string for a search. The raw query is passed through
/// untouched apart from encoding, so an empty query still yields `query=`.
pub fn search_path(query: &str) -> String {
    format!(
        "{}?{}={}",
        SEARCH_ENDPOINT,
        QUERY_PARAM,
        encode_query_component(query)
    )
}
