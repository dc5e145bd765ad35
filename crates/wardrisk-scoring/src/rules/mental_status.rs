use crate::sanitize::SanitizedInput;

pub fn altered(input: &SanitizedInput) -> bool {
    !input.mental_status.is_alert()
}
