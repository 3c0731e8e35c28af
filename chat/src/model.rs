//! Conversation transcript model and generation modes.
//!
//! Entries are append-only; chronological order is display order. The
//! conversation id belongs to the backend: it is absent until the first reply
//! and immutable once adopted.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

/// Who authored a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// Structured commentary the backend attaches to a generated design.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub detail: String,
}

/// A single transcript entry, serde-compatible with the backend message
/// format. Unknown or missing wire fields degrade to defaults rather than
/// failing the whole reply.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationEntry {
    pub sender: Sender,
    #[serde(default)]
    pub prompt: String,
    /// Reference to the generated design image, when the backend produced one.
    #[serde(default, rename = "imageAI", skip_serializing_if = "Option::is_none")]
    pub generated_image: Option<String>,
    /// Pipeline code this entry was generated with.
    #[serde(default)]
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
}

impl ConversationEntry {
    /// The locally-synthesized echo of the user's own prompt, appended
    /// optimistically before the request goes out.
    #[must_use]
    pub fn user_echo(prompt: &str, mode: GenerationMode) -> Self {
        Self {
            sender: Sender::User,
            prompt: prompt.to_owned(),
            generated_image: None,
            model: mode.code().to_owned(),
            analysis: None,
        }
    }

    /// The assistant greeting every fresh transcript starts with.
    #[must_use]
    pub fn greeting() -> Self {
        Self {
            sender: Sender::Assistant,
            prompt: "Hi, I am The Architect. Sketch an idea or describe the space \
                     you have in mind, then press Generate."
                .to_owned(),
            generated_image: None,
            model: String::new(),
            analysis: None,
        }
    }
}

/// A server-tracked sequence of prompt/response exchanges.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Backend-assigned identifier; `None` until the first reply.
    pub id: Option<String>,
    pub entries: Vec<ConversationEntry>,
}

impl Conversation {
    /// A fresh transcript seeded with the assistant greeting.
    #[must_use]
    pub fn with_greeting() -> Self {
        Self { id: None, entries: vec![ConversationEntry::greeting()] }
    }

    /// Adopt the backend-assigned identifier. First write wins: once assigned
    /// the id never changes for the conversation's lifetime.
    pub fn adopt_id(&mut self, id: impl Into<String>) {
        if self.id.is_none() {
            self.id = Some(id.into());
        }
    }

    pub fn append(&mut self, entry: ConversationEntry) {
        self.entries.push(entry);
    }

    /// Merge server-returned entries. Purely additive: local entries are never
    /// reconciled against what the backend sends back.
    pub fn extend(&mut self, entries: Vec<ConversationEntry>) {
        self.entries.extend(entries);
    }
}

/// The selected backend pipeline. Determines whether a rasterized sketch is
/// required before a send may go out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationMode {
    /// Sketch-guided generation; refuses to send without a drawn scene.
    #[default]
    SketchToImage,
    /// Prompt-only generation.
    TextToImage,
    /// Refine the previously generated image.
    ImageToImage,
}

impl GenerationMode {
    pub const ALL: [Self; 3] = [Self::SketchToImage, Self::TextToImage, Self::ImageToImage];

    /// Wire code sent in the request envelope's `model` field.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::SketchToImage => "controlNet",
            Self::TextToImage => "text_to_image",
            Self::ImageToImage => "image_to_image",
        }
    }

    /// Human-readable picker label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SketchToImage => "Sketch to Design",
            Self::TextToImage => "Text to Design",
            Self::ImageToImage => "Refine Design",
        }
    }

    /// Backend diffusion model driving this pipeline.
    #[must_use]
    pub fn backend_model(self) -> &'static str {
        match self {
            Self::SketchToImage | Self::ImageToImage => "realistic-vision-v5-1",
            Self::TextToImage => "sdxl-v1-0",
        }
    }

    /// Controlnet preprocessor, for the sketch-guided pipeline only.
    #[must_use]
    pub fn controlnet(self) -> &'static str {
        match self {
            Self::SketchToImage => "scribble-1.1",
            Self::TextToImage | Self::ImageToImage => "",
        }
    }

    /// Whether a send in this mode must carry a rasterized sketch.
    #[must_use]
    pub fn requires_sketch(self) -> bool {
        matches!(self, Self::SketchToImage)
    }

    /// Parse a wire code back into a mode.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.code() == code)
    }
}
