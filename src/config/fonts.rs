use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::font::{FontResource, FontStyle};
use crate::guid::Guid;
use crate::resolver::Resolver;

/// Per-request memo of resolver font lookups.
///
/// Failed lookups are stored as their fallback so the resolver is asked at most
/// once per GUID for each kind.
#[derive(Debug, Default)]
pub struct FontCache {
    resources: HashMap<Guid, Arc<FontResource>>,
    styles: HashMap<Guid, FontStyle>,
}

impl FontCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resource(&mut self, resolver: &dyn Resolver, guid: &Guid) -> Arc<FontResource> {
        if let Some(resource) = self.resources.get(guid) {
            return Arc::clone(resource);
        }
        debug!(%guid, "resolving font resource");
        let resource = Arc::new(resolver.font_resource(guid).unwrap_or_else(|err| {
            warn!(%guid, error = %err, "font resource lookup failed");
            FontResource::default()
        }));
        self.resources.insert(*guid, Arc::clone(&resource));
        resource
    }

    pub fn style(&mut self, resolver: &dyn Resolver, guid: &Guid) -> FontStyle {
        if let Some(style) = self.styles.get(guid) {
            return style.clone();
        }
        debug!(%guid, "resolving font style");
        let style = resolver.font_style(guid).unwrap_or_else(|err| {
            warn!(%guid, error = %err, "font style lookup failed");
            FontStyle::fallback()
        });
        self.styles.insert(*guid, style.clone());
        style
    }

    /// Number of cached resources and styles.
    #[must_use]
    pub fn counts(&self) -> (usize, usize) {
        (self.resources.len(), self.styles.len())
    }
}
