use contact_core::error::ConfigError;
use contact_core::parameters::contact_email_parameter_name;

pub trait ParameterStore {
    fn get_parameter(&self, name: &str) -> Result<String, String>;
}

/// Looks up the contact mailbox for `stage`. One store round trip per call;
/// nothing is cached between invocations.
pub fn resolve_contact_address(
    store: &dyn ParameterStore,
    namespace: &str,
    stage: &str,
) -> Result<String, ConfigError> {
    let parameter_name = contact_email_parameter_name(namespace, stage);
    let value = store
        .get_parameter(&parameter_name)
        .map_err(ConfigError::Lookup)?;
    if value.is_empty() {
        return Err(ConfigError::MissingValue { parameter_name });
    }
    Ok(value)
}
