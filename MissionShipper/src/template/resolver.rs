//! Template context registry
//!
//! Every `.j2` file in the template tree must be registered here with the
//! function that builds its render context. Rendering an unregistered
//! template is an error rather than a render against an empty context.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::layout::MISSIONS_CONFIG_TEMPLATE;
use crate::mission::{Mission, scan_missions};
use crate::utils::relative_path;

/// Inputs a context provider may read from
#[derive(Debug, Clone)]
pub struct ContextSources {
    /// Source directory of the raw mission folders
    pub missions_path: PathBuf,
}

/// Builds the render context of one template
pub type ContextProvider = fn(&ContextSources) -> Result<tera::Context>;

/// Maps template paths (relative to the template root) to context providers
#[derive(Debug, Clone)]
pub struct ContextResolver {
    template_root: PathBuf,
    sources: ContextSources,
    providers: HashMap<String, ContextProvider>,
}

impl ContextResolver {
    /// Create a resolver with no registered templates
    pub fn new(template_root: impl Into<PathBuf>, sources: ContextSources) -> Self {
        Self {
            template_root: template_root.into(),
            sources,
            providers: HashMap::new(),
        }
    }

    /// Create a resolver knowing every template shipped with the mod
    pub fn with_defaults(template_root: impl Into<PathBuf>, sources: ContextSources) -> Self {
        let mut resolver = Self::new(template_root, sources);
        resolver.register(MISSIONS_CONFIG_TEMPLATE, missions_context);
        resolver
    }

    /// Register `provider` for the template at `key` (forward slashes,
    /// relative to the template root)
    pub fn register(&mut self, key: impl Into<String>, provider: ContextProvider) -> &mut Self {
        self.providers.insert(key.into(), provider);
        self
    }

    /// Registry key of a template file
    pub fn template_key(&self, template_path: &Path) -> Result<String> {
        relative_path(template_path, &self.template_root).ok_or_else(|| {
            Error::InvalidPath(format!(
                "template {} is outside template root {}",
                template_path.display(),
                self.template_root.display()
            ))
        })
    }

    /// Build the render context for the template at `template_path`
    pub fn resolve(&self, template_path: &Path) -> Result<tera::Context> {
        let key = self.template_key(template_path)?;
        let provider = self
            .providers
            .get(&key)
            .ok_or(Error::UnregisteredTemplate { template: key })?;
        provider(&self.sources)
    }
}

#[derive(Serialize)]
struct MissionsContext {
    missions: Vec<Mission>,
}

/// Context of `config.cpp.j2`: `{ missions: [Mission, ...] }`
pub fn missions_context(sources: &ContextSources) -> Result<tera::Context> {
    let missions = scan_missions(&sources.missions_path)?;
    tracing::info!("Found {} missions in {}", missions.len(), sources.missions_path.display());
    tera::Context::from_serialize(MissionsContext { missions }).map_err(Error::ContextSerialization)
}
