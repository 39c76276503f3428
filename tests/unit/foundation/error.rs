use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SwingcapError::missing_input("x")
            .to_string()
            .contains("missing input:")
    );
    assert!(SwingcapError::parse("x").to_string().contains("parse error:"));
    assert!(
        SwingcapError::boundary("x")
            .to_string()
            .contains("frame out of bounds:")
    );
    assert!(
        SwingcapError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SwingcapError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
