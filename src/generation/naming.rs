//! Identifier derivation for generated code.
//!
//! Operation names are a pure function of an endpoint's method and path, so
//! adding an unrelated operation to the schema can never rename an existing
//! one.

use crate::openapi::HttpMethod;

/// Converts a string to snake_case.
///
/// Handles camelCase, PascalCase, kebab-case and dotted segments, so both
/// `zoneId` and `frames.png` come out as valid identifier material.
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let mut prev_is_lowercase = false;

    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 && prev_is_lowercase {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
            prev_is_lowercase = false;
        } else if ch.is_alphanumeric() {
            result.push(ch);
            prev_is_lowercase = ch.is_lowercase();
        } else if matches!(ch, '-' | '_' | '.' | ' ') {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            prev_is_lowercase = false;
        }
    }

    result.trim_matches('_').to_string()
}

/// Converts a string to UpperCamelCase for type names.
pub fn to_proper_case(s: &str) -> String {
    to_snake_case(s)
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect()
}

/// Sanitizes a string into a valid Rust field name, escaping keywords.
pub fn sanitize_field_name(s: &str) -> String {
    let snake = to_snake_case(s);
    match snake.as_str() {
        "as" | "break" | "const" | "continue" | "crate" | "else" | "enum" | "extern" | "false"
        | "fn" | "for" | "if" | "impl" | "in" | "let" | "loop" | "match" | "mod" | "move"
        | "mut" | "pub" | "ref" | "return" | "self" | "static" | "struct" | "super" | "trait"
        | "true" | "type" | "unsafe" | "use" | "where" | "while" | "async" | "await" | "dyn"
        | "box" | "final" | "macro" | "override" | "try" | "yield" => format!("{snake}_"),
        _ => snake,
    }
}

/// Derives the operation name for a method + path pair.
///
/// Shape: `verb '_' segments [ '_by_' params ]`, where the verb comes from
/// the HTTP method, segments are the non-parameter path components with
/// `strip_prefix` removed, and params are the path-parameter names in path
/// order.
pub fn operation_name(method: HttpMethod, path: &str, strip_prefix: &str) -> String {
    let trimmed = path.strip_prefix(strip_prefix).unwrap_or(path);

    let verb = match method {
        HttpMethod::Get => "get",
        HttpMethod::Post => "create",
        HttpMethod::Put => "update",
        HttpMethod::Delete => "delete",
    };

    let mut parts = vec![verb.to_string()];
    let mut params = Vec::new();
    for segment in trimmed.split('/').filter(|s| !s.is_empty()) {
        if let Some(param) = segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            params.push(to_snake_case(param));
        } else {
            parts.push(to_snake_case(segment));
        }
    }

    let mut name = parts.join("_");
    if !params.is_empty() {
        name.push_str("_by_");
        name.push_str(&params.join("_"));
    }
    name
}
