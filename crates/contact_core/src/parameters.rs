pub const DEFAULT_STAGE: &str = "dev";
pub const DEFAULT_PARAMETER_NAMESPACE: &str = "collaction";

/// Falls back to [`DEFAULT_STAGE`] when the invoking context carries none.
pub fn resolve_stage(stage: Option<&str>) -> &str {
    match stage {
        Some(value) if !value.is_empty() => value,
        _ => DEFAULT_STAGE,
    }
}

pub fn contact_email_parameter_name(namespace: &str, stage: &str) -> String {
    let trimmed = namespace.trim_matches('/');
    format!("/{trimmed}/{stage}/contact/email")
}
