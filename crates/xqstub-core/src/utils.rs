/// Convert a `separator`-delimited name to camelCase.
///
/// The first non-empty segment is lowercased, every later non-empty segment gets
/// its first character uppercased (the rest is kept as written). Empty segments,
/// produced by leading, trailing or doubled separators, are emitted as the
/// separator itself.
///
/// # Examples
/// ```
/// use xqstub_core::utils::separated_to_camel_case;
/// assert_eq!(separated_to_camel_case("get_element_by_id", '_'), "getElementById");
/// assert_eq!(separated_to_camel_case("a__b", '_'), "a_B");
/// ```
pub fn separated_to_camel_case(s: &str, separator: char) -> String {
    let mut result = String::with_capacity(s.len());
    let mut seen_first = false;

    for segment in s.split(separator) {
        if segment.is_empty() {
            result.push(separator);
            continue;
        }
        if seen_first {
            result.push_str(&capitalize_first(segment));
        } else {
            result.push_str(&segment.to_lowercase());
            seen_first = true;
        }
    }
    result
}

/// Convert kebab-case to camelCase.
///
/// # Examples
/// ```
/// use xqstub_core::utils::hyphen_to_camel_case;
/// assert_eq!(hyphen_to_camel_case("get-element-by-id"), "getElementById");
/// assert_eq!(hyphen_to_camel_case("foo"), "foo");
/// ```
pub fn hyphen_to_camel_case(s: &str) -> String {
    separated_to_camel_case(s, '-')
}

/// Uppercase the first character of the whole string, keep the remainder unchanged.
///
/// Internal separators are not touched: `title_case("my-ns")` is `"My-ns"`.
///
/// # Examples
/// ```
/// use xqstub_core::utils::title_case;
/// assert_eq!(title_case("my"), "My");
/// assert_eq!(title_case(""), "");
/// ```
pub fn title_case(s: &str) -> String {
    capitalize_first(s)
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
