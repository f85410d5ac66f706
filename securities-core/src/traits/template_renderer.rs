//! Template rendering collaborator Trait

use crate::error::CoreResult;
use crate::types::{RenderedTemplate, TemplateData};

/// Renders template text against a security's template data.
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template: &str, data: &TemplateData) -> CoreResult<RenderedTemplate>;
}
