//! Request-scoped rendering context
//!
//! [`ViewEnvironment`] owns the long-lived collaborators (settings, locale
//! catalog, icons, partials). [`ViewContext`] borrows an environment for one
//! request and adds the current record and whether the caller is signed in.

use crate::config::{CatalogConfig, Routes, Settings};
use crate::errors::RenderError;
use crate::i18n::Translations;
use crate::models::GeoDocument;
use crate::renderers::{IconRegistry, PartialRenderer};

/// Collaborators shared across requests
#[derive(Debug)]
pub struct ViewEnvironment {
    pub settings: Settings,
    pub catalog: CatalogConfig,
    pub routes: Routes,
    pub translations: Translations,
    pub icons: IconRegistry,
    pub partials: PartialRenderer,
}

impl ViewEnvironment {
    /// Environment with default routes, no icons, and the built-in partials
    pub fn new(settings: Settings, translations: Translations) -> Result<Self, RenderError> {
        Ok(Self {
            settings,
            catalog: CatalogConfig::default(),
            routes: Routes::default(),
            translations,
            icons: IconRegistry::new(),
            partials: PartialRenderer::new()?,
        })
    }

    pub fn with_catalog(mut self, catalog: CatalogConfig) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_routes(mut self, routes: Routes) -> Self {
        self.routes = routes;
        self
    }

    pub fn with_icons(mut self, icons: IconRegistry) -> Self {
        self.icons = icons;
        self
    }

    pub fn with_partials(mut self, partials: PartialRenderer) -> Self {
        self.partials = partials;
        self
    }

    /// Start a request context over this environment
    pub fn context(&self) -> ViewContext<'_> {
        ViewContext::new(self)
    }
}

/// One request's view of the environment
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    env: &'a ViewEnvironment,
    document: Option<&'a dyn GeoDocument>,
    user_signed_in: bool,
}

impl<'a> ViewContext<'a> {
    pub fn new(env: &'a ViewEnvironment) -> Self {
        Self {
            env,
            document: None,
            user_signed_in: false,
        }
    }

    /// Set the record the item page is showing
    pub fn with_document(mut self, document: &'a dyn GeoDocument) -> Self {
        self.document = Some(document);
        self
    }

    pub fn signed_in(mut self, user_signed_in: bool) -> Self {
        self.user_signed_in = user_signed_in;
        self
    }

    pub fn env(&self) -> &'a ViewEnvironment {
        self.env
    }

    pub fn document(&self) -> Option<&'a dyn GeoDocument> {
        self.document
    }

    pub fn user_signed_in(&self) -> bool {
        self.user_signed_in
    }

    pub(crate) fn settings(&self) -> &'a Settings {
        &self.env.settings
    }

    pub(crate) fn t(&self, key: &str, vars: &[(&str, &str)]) -> String {
        self.env.translations.t(key, vars)
    }
}

impl std::fmt::Debug for ViewContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewContext")
            .field("document", &self.document.map(|d| d.id().to_string()))
            .field("user_signed_in", &self.user_signed_in)
            .finish()
    }
}
