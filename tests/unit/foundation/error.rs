use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BlockiconError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        BlockiconError::encode("x")
            .to_string()
            .contains("encoding error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BlockiconError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
