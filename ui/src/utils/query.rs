/// Percent-encodes the characters that would change the meaning of a query
/// value (`%`, `&`, `#`, `+`, space). Everything else, `@` included, is kept
/// as typed so the sign-in link stays readable.
pub fn encode_query_value(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '%' => encoded.push_str("%25"),
            '&' => encoded.push_str("%26"),
            '#' => encoded.push_str("%23"),
            '+' => encoded.push_str("%2B"),
            ' ' => encoded.push_str("%20"),
            other => encoded.push(other),
        }
    }
    encoded
}
