//! Module-text emission.
//!
//! The single client-module template is embedded in the binary; rendering is
//! a pure function of the context, so repeated renders of the same catalog
//! are byte-identical.

use tera::Tera;

use crate::generation::GenerationError;
use crate::generation::context::ModuleContext;

const CLIENT_MODULE_TEMPLATE: &str = include_str!("templates/client_module.rs.tera");
const TEMPLATE_NAME: &str = "client_module.rs";

/// Render the client module for a prepared context.
pub fn render_module(context: &ModuleContext) -> Result<String, GenerationError> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, CLIENT_MODULE_TEMPLATE)
        .map_err(|e| GenerationError::Render(format!("failed to load template: {e}")))?;

    let tera_context = tera::Context::from_serialize(context)
        .map_err(|e| GenerationError::Render(format!("failed to build context: {e}")))?;

    tera.render(TEMPLATE_NAME, &tera_context)
        .map_err(|e| GenerationError::Render(format!("failed to render module: {e}")))
}
