use crate::paths::validate_target_name;

/// Validate a target name for use as an output file stem.
pub fn validate_target(s: &str) -> Result<String, String> {
    validate_target_name(s)
        .map(str::to_string)
        .map_err(|err| err.to_string())
}
