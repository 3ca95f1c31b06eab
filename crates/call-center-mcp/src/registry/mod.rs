//! Tool and resource registration and lookup.

pub mod catalog;

use std::sync::Arc;

use serde_json::Value;

use call_center::{CallCenterDesk, DeskError};

use crate::types::{ContentBlock, ResourceDefinition, ToolDefinition};

pub use catalog::{Catalog, Keyed};

/// Failure reported by a tool or resource handler.
#[derive(thiserror::Error, Debug)]
#[error("{0}")]
pub struct HandlerError(pub String);

impl From<DeskError> for HandlerError {
    fn from(e: DeskError) -> Self {
        HandlerError(e.to_string())
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(e: serde_json::Error) -> Self {
        HandlerError(e.to_string())
    }
}

pub type HandlerResult = Result<Vec<ContentBlock>, HandlerError>;

/// Invoked with arguments that already passed schema validation.
pub type ToolHandler = Box<dyn Fn(&Value) -> HandlerResult + Send + Sync>;

/// Invoked with the URI being read.
pub type ResourceHandler = Box<dyn Fn(&str) -> HandlerResult + Send + Sync>;

/// Setup-time registry failures. These are fatal and never occur mid-session.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RegistryError {
    #[error("Tool already registered: {0}")]
    DuplicateTool(String),

    #[error("Resource already registered: {0}")]
    DuplicateResource(String),
}

pub struct RegisteredTool {
    pub definition: ToolDefinition,
    handler: ToolHandler,
}

impl RegisteredTool {
    pub fn invoke(&self, arguments: &Value) -> HandlerResult {
        (self.handler)(arguments)
    }
}

impl Keyed for RegisteredTool {
    fn key(&self) -> &str {
        &self.definition.name
    }
}

pub struct RegisteredResource {
    pub definition: ResourceDefinition,
    handler: ResourceHandler,
}

impl RegisteredResource {
    pub fn read(&self) -> HandlerResult {
        (self.handler)(&self.definition.uri)
    }
}

impl Keyed for RegisteredResource {
    fn key(&self) -> &str {
        &self.definition.uri
    }
}

/// Every tool and resource the server exposes.
///
/// Built once at startup and then shared read-only, typically behind an
/// `Arc`, so sessions never need to lock it.
#[derive(Default)]
pub struct Registry {
    tools: Catalog<RegisteredTool>,
    resources: Catalog<RegisteredResource>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_tool<F>(
        &mut self,
        definition: ToolDefinition,
        handler: F,
    ) -> Result<(), RegistryError>
    where
        F: Fn(&Value) -> HandlerResult + Send + Sync + 'static,
    {
        tracing::debug!("Registering tool {}", definition.name);
        self.tools
            .insert(RegisteredTool {
                definition,
                handler: Box::new(handler),
            })
            .map_err(|entry| RegistryError::DuplicateTool(entry.definition.name))
    }

    pub fn register_resource<F>(
        &mut self,
        definition: ResourceDefinition,
        handler: F,
    ) -> Result<(), RegistryError>
    where
        F: Fn(&str) -> HandlerResult + Send + Sync + 'static,
    {
        tracing::debug!("Registering resource {}", definition.uri);
        self.resources
            .insert(RegisteredResource {
                definition,
                handler: Box::new(handler),
            })
            .map_err(|entry| RegistryError::DuplicateResource(entry.definition.uri))
    }

    /// Tool definitions in registration order.
    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition.clone()).collect()
    }

    /// Resource definitions in registration order.
    pub fn list_resources(&self) -> Vec<ResourceDefinition> {
        self.resources.iter().map(|r| r.definition.clone()).collect()
    }

    pub fn resolve_tool(&self, name: &str) -> Option<&RegisteredTool> {
        self.tools.get(name)
    }

    pub fn resolve_resource(&self, uri: &str) -> Option<&RegisteredResource> {
        self.resources.get(uri)
    }

    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }
}

/// Build the call-center registry: every tool and resource bound to `desk`.
pub fn build_registry(desk: Arc<CallCenterDesk>) -> Result<Registry, RegistryError> {
    let mut registry = Registry::new();
    crate::resources::register_all(&mut registry, &desk)?;
    crate::tools::register_all(&mut registry, &desk)?;

    tracing::info!(
        "Registry ready: {} tools, {} resources",
        registry.tool_count(),
        registry.resource_count()
    );
    Ok(registry)
}
