use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(MuvError::config("x").to_string().contains("config error:"));
    assert!(MuvError::markup("x").to_string().contains("markup error:"));
    assert!(MuvError::host("x").to_string().contains("host error:"));
    assert!(
        MuvError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MuvError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: MuvError = serde_json::from_str::<serde_json::Value>("{")
        .unwrap_err()
        .into();
    assert!(matches!(err, MuvError::Serde(_)));
}

#[test]
fn other_keeps_outer_context() {
    let err: MuvError = anyhow::anyhow!("TypeError: not a constructor")
        .context("construct IntersectionObserver")
        .into();
    assert!(matches!(err, MuvError::Other(_)));
    assert_eq!(err.to_string(), "construct IntersectionObserver");
}
