use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LegacyError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        LegacyError::catalog("x")
            .to_string()
            .contains("catalog error:")
    );
    assert!(
        LegacyError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LegacyError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_convert() {
    let err: LegacyError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, LegacyError::Serde(_)));
}
