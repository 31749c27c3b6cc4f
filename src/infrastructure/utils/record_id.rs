use uuid::Uuid;

/// Parses a record id taken from a request path. Ids the store could never
/// have issued yield `None`.
pub fn parse_record_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_issued_ids() {
        let id = Uuid::new_v4();
        assert_eq!(parse_record_id(&id.to_string()), Some(id));
    }

    #[test]
    fn rejects_foreign_ids() {
        assert_eq!(parse_record_id("64b7f0c2e4b0a1a2b3c4d5e6"), None);
        assert_eq!(parse_record_id(""), None);
    }
}
