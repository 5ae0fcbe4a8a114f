use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One image in the ambient background rotation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryImage {
    pub id: Uuid,
    pub src: String,
    pub alt: Option<String>,
}

/// What the wizard renders behind itself. A failed or empty gallery fetch
/// degrades to the gradient; it never blocks the wizard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase", tag = "kind", content = "images")]
pub enum Backdrop {
    Rotation(Vec<GalleryImage>),
    Gradient,
}
