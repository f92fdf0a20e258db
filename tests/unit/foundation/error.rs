use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SpinError::config("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(SpinError::decode("x").to_string().contains("decode error:"));
    assert!(SpinError::render("x").to_string().contains("render error:"));
    assert!(SpinError::encode("x").to_string().contains("encode error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SpinError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
