//! Rasterized sketch payload and the export port.

#[cfg(test)]
#[path = "sketch_test.rs"]
mod sketch_test;

/// Fixed export dimension (both axes). Every export is downscaled to this
/// size regardless of the source surface, bounding payload size and backend
/// cost.
pub const SKETCH_SIZE: u32 = 512;

/// A rasterized PNG of the drawing surface, base64-encoded with the data-URL
/// media-type prefix already stripped. Ephemeral: regenerated on every send,
/// never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sketch {
    pub base64: String,
}

impl Sketch {
    #[must_use]
    pub fn new(base64: impl Into<String>) -> Self {
        Self { base64: base64.into() }
    }

    /// Build a sketch from a `data:*;base64,` URL, stripping the prefix.
    /// A string without a prefix is taken as bare base64. Returns `None` for
    /// an empty payload.
    #[must_use]
    pub fn from_data_url(url: &str) -> Option<Self> {
        let payload = match url.split_once(',') {
            Some((_, rest)) => rest,
            None => url,
        };
        if payload.is_empty() {
            return None;
        }
        Some(Self::new(payload))
    }
}

/// Rasterizes the current drawing scene into a [`Sketch`].
///
/// `None` means the scene has zero drawable elements — an expected state
/// (nothing drawn yet), not an error. Stateless per call: the adapter never
/// caches prior exports.
pub trait SketchExporter {
    fn export(&self) -> Option<Sketch>;
}
