use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ContribError::geometry("x")
            .to_string()
            .contains("geometry error:")
    );
    assert!(
        ContribError::settings("x")
            .to_string()
            .contains("settings error:")
    );
    assert!(ContribError::scene("x").to_string().contains("scene error:"));
    assert!(
        ContribError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(ContribError::io("x").to_string().contains("io error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ContribError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
