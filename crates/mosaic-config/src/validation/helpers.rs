//! Shared range-validation helpers used by all domain validators.

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push the sanitizer's reason, prefixed with the field name, on failure.
pub(crate) fn push_err(errors: &mut Vec<String>, name: &str, result: Result<(), String>) {
    if let Err(reason) = result {
        errors.push(format!("{name}: {reason}"));
    }
}
