use super::*;

// =============================================================
// Data-URL stripping
// =============================================================

#[test]
fn from_data_url_strips_media_type_prefix() {
    let sketch = Sketch::from_data_url("data:image/png;base64,iVBORw0KGgo=").unwrap();
    assert_eq!(sketch.base64, "iVBORw0KGgo=");
}

#[test]
fn from_data_url_accepts_bare_base64() {
    let sketch = Sketch::from_data_url("iVBORw0KGgo=").unwrap();
    assert_eq!(sketch.base64, "iVBORw0KGgo=");
}

#[test]
fn from_data_url_rejects_empty_payload() {
    assert!(Sketch::from_data_url("").is_none());
    assert!(Sketch::from_data_url("data:image/png;base64,").is_none());
}

// =============================================================
// Export policy
// =============================================================

#[test]
fn export_dimension_is_fixed() {
    assert_eq!(SKETCH_SIZE, 512);
}
