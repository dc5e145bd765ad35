use crate::sanitize::SanitizedInput;

/// A hypnotic or sedative was given this shift.
pub fn sedative(input: &SanitizedInput) -> bool {
    input.sedative_administered
}
