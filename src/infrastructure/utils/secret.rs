/// Compares a presented secret with the expected one without exiting early
/// on the first mismatching byte.
pub fn secrets_match(presented: &[u8], expected: &[u8]) -> bool {
    if presented.len() != expected.len() {
        return false;
    }

    presented
        .iter()
        .zip(expected)
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_identical_secrets() {
        assert!(secrets_match(b"s3cret-admin-key!", b"s3cret-admin-key!"));
    }

    #[test]
    fn rejects_different_or_truncated_secrets() {
        assert!(!secrets_match(b"s3cret-admin-key?", b"s3cret-admin-key!"));
        assert!(!secrets_match(b"s3cret", b"s3cret-admin-key!"));
        assert!(!secrets_match(b"", b"s3cret-admin-key!"));
    }
}
