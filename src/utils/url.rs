use base64::{prelude::BASE64_STANDARD, Engine};

/// Builds a base64 `data:` URL for the given payload
pub fn create_data_url(media_type: &str, data: &[u8]) -> String {
    format!("data:{};base64,{}", media_type, BASE64_STANDARD.encode(data))
}

/// Checks whether a reference is already inlined
pub fn is_data_url(reference: &str) -> bool {
    starts_with_ignore_ascii_case(reference, "data:")
}

fn starts_with_ignore_ascii_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .map_or(false, |head| head.eq_ignore_ascii_case(prefix))
}
