//! Validation for values that end up inside injected CSS and JavaScript.
//!
//! Only allows safe formats:
//! - Hex colors: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - `rgb(r, g, b)` / `rgba(r, g, b, a)` with numeric arguments
//! - `data-*` attribute names made of lowercase letters, digits and `-`
//!
//! Rejects anything containing: `expression(`, `url(`, `javascript:`,
//! `eval(`, `import`, `;`, `}`, `{`, `<`, `>`

// =============================================================================
// VALIDATION
// =============================================================================

/// Validate a CSS color value.
///
/// Named colors are rejected; only hex and `rgb()`/`rgba()` pass.
pub fn validate_css_color(value: &str) -> Result<(), String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err("Empty CSS color value".to_string());
    }

    check_injection_patterns(trimmed)?;

    if trimmed.starts_with('#') {
        return validate_hex_color(trimmed);
    }

    if trimmed.starts_with("rgba(") || trimmed.starts_with("rgb(") {
        return validate_rgb_function(trimmed);
    }

    Err(format!(
        "Invalid CSS color: only hex (#rrggbb) and rgb()/rgba() allowed, got '{trimmed}'"
    ))
}

/// Validate the marker attribute placed on the fullscreen element.
///
/// It is interpolated into attribute selectors and `setAttribute` calls,
/// so it must be a plain `data-*` name.
pub fn validate_attribute_name(name: &str) -> Result<(), String> {
    let Some(suffix) = name.strip_prefix("data-") else {
        return Err(format!("Attribute name must start with 'data-', got '{name}'"));
    };

    if suffix.is_empty() {
        return Err("Attribute name has an empty 'data-' suffix".to_string());
    }

    if let Some(ch) = name
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        return Err(format!("Invalid character '{ch}' in attribute name '{name}'"));
    }

    Ok(())
}

// =============================================================================
// HELPERS
// =============================================================================

/// Check for common CSS injection patterns.
fn check_injection_patterns(value: &str) -> Result<(), String> {
    let lower = value.to_lowercase();

    let dangerous = [
        "expression(",
        "url(",
        "javascript:",
        "eval(",
        "import",
        "behavior:",
        "-moz-binding",
    ];

    for pattern in &dangerous {
        if lower.contains(pattern) {
            return Err(format!("CSS injection blocked: contains '{pattern}'"));
        }
    }

    for ch in [';', '{', '}', '<', '>', '\'', '"', '\\'] {
        if value.contains(ch) {
            return Err(format!("CSS injection blocked: contains '{ch}'"));
        }
    }

    Ok(())
}

/// Validate a hex color string.
fn validate_hex_color(value: &str) -> Result<(), String> {
    let hex = &value[1..];

    if !matches!(hex.len(), 3 | 4 | 6 | 8) {
        return Err(format!(
            "Invalid hex color length: expected 3/4/6/8 digits, got {} in '{value}'",
            hex.len()
        ));
    }

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("Invalid hex color: non-hex character in '{value}'"));
    }

    Ok(())
}

/// Validate an `rgb()` or `rgba()` function call.
fn validate_rgb_function(value: &str) -> Result<(), String> {
    let inner = value
        .strip_prefix("rgba(")
        .or_else(|| value.strip_prefix("rgb("))
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| format!("Malformed rgb/rgba: '{value}'"))?;

    let parts: Vec<&str> = inner.split(',').map(|s| s.trim()).collect();

    let expected_count = if value.starts_with("rgba(") { 4 } else { 3 };
    if parts.len() != expected_count {
        return Err(format!(
            "Expected {expected_count} arguments in '{value}', got {}",
            parts.len()
        ));
    }

    for (i, part) in parts.iter().enumerate() {
        if part.parse::<f64>().is_err() {
            return Err(format!(
                "Non-numeric argument at position {i} in '{value}': '{part}'"
            ));
        }
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_hex_colors() {
        assert!(validate_css_color("#000").is_ok());
        assert!(validate_css_color("#000a").is_ok());
        assert!(validate_css_color("#000000").is_ok());
        assert!(validate_css_color("#11182780").is_ok());
    }

    #[test]
    fn invalid_hex_colors() {
        assert!(validate_css_color("#ff").is_err());
        assert!(validate_css_color("#fffff").is_err());
        assert!(validate_css_color("#gggggg").is_err());
    }

    #[test]
    fn valid_rgb_functions() {
        assert!(validate_css_color("rgb(0, 0, 0)").is_ok());
        assert!(validate_css_color("rgba(0,0,0,0.85)").is_ok());
    }

    #[test]
    fn invalid_rgb_functions() {
        assert!(validate_css_color("rgba(0, 0, 0)").is_err());
        assert!(validate_css_color("rgb(0, 0)").is_err());
        assert!(validate_css_color("rgba(red, 0, 0, 1)").is_err());
    }

    #[test]
    fn rejects_injection_attempts() {
        assert!(validate_css_color("expression(alert(1))").is_err());
        assert!(validate_css_color("url(https://evil.com)").is_err());
        assert!(validate_css_color("#000; } body { display: none").is_err());
        assert!(validate_css_color("#000' + alert(1) + '").is_err());
    }

    #[test]
    fn rejects_named_colors_and_empty() {
        assert!(validate_css_color("black").is_err());
        assert!(validate_css_color("transparent").is_err());
        assert!(validate_css_color("   ").is_err());
    }

    #[test]
    fn valid_attribute_names() {
        assert!(validate_attribute_name("data-custom-fullscreen").is_ok());
        assert!(validate_attribute_name("data-fs2").is_ok());
    }

    #[test]
    fn invalid_attribute_names() {
        assert!(validate_attribute_name("custom-fullscreen").is_err());
        assert!(validate_attribute_name("data-").is_err());
        assert!(validate_attribute_name("data-Upper").is_err());
        assert!(validate_attribute_name("data-x\"]{}").is_err());
        assert!(validate_attribute_name("data-a b").is_err());
    }
}
