use async_trait::async_trait;
use lustre_shared::{Backdrop, GalleryImage};

#[derive(Debug, thiserror::Error)]
#[error("gallery fetch failed: {0}")]
pub struct GalleryError(pub String);

/// Ambient background image collaborator.
#[async_trait]
pub trait GallerySource: Send + Sync {
    async fn images(&self) -> Result<Vec<GalleryImage>, GalleryError>;
}

/// A fixed image roster.
pub struct StaticGallerySource {
    images: Vec<GalleryImage>,
}

impl StaticGallerySource {
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Self { images }
    }
}

#[async_trait]
impl GallerySource for StaticGallerySource {
    async fn images(&self) -> Result<Vec<GalleryImage>, GalleryError> {
        Ok(self.images.clone())
    }
}

/// Load the wizard backdrop. A failed or empty gallery never blocks the
/// wizard: it logs and degrades to the neutral gradient.
pub async fn load_backdrop(source: &dyn GallerySource) -> Backdrop {
    match source.images().await {
        Ok(images) if !images.is_empty() => Backdrop::Rotation(images),
        Ok(_) => Backdrop::Gradient,
        Err(err) => {
            tracing::warn!(error = %err, "gallery unavailable, using gradient backdrop");
            Backdrop::Gradient
        }
    }
}
