//! Parser for Postgres-style array cells: `{a,b,"c d"}`.

/// Parse an array cell into its elements.
///
/// Empty cells, `{}`, and whitespace-only cells yield an empty vec.
/// Double-quoted elements may contain commas; quotes are stripped from the
/// result. Empty elements are dropped.
pub fn parse_array_field(cell: &str) -> Vec<String> {
    let trimmed = cell.trim();
    if trimmed.is_empty() || trimmed == "{}" {
        return Vec::new();
    }

    let inner = trimmed
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .unwrap_or(trimmed);

    let mut elements = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in inner.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                push_element(&mut elements, &mut current);
            }
            _ => current.push(ch),
        }
    }
    push_element(&mut elements, &mut current);

    elements
}

/// Variant for photo columns: keeps only `http…` elements.
pub fn parse_url_array_field(cell: &str) -> Vec<String> {
    parse_array_field(cell)
        .into_iter()
        .filter(|v| v.starts_with("http"))
        .collect()
}

fn push_element(elements: &mut Vec<String>, current: &mut String) {
    let element = current.trim().trim_matches('"').trim().to_string();
    current.clear();
    if !element.is_empty() {
        elements.push(element);
    }
}
