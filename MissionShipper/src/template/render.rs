//! Template rendering

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::template::resolver::ContextResolver;

/// Render template `source` against `context`.
///
/// Output is not escaped. CRLF line endings are read as LF and a single
/// trailing newline of the source is dropped, so templates written for the
/// previous Jinja2 based tooling render byte for byte the same.
pub fn render_str(name: &str, source: &str, context: &tera::Context) -> Result<String> {
    let normalized = source.replace("\r\n", "\n");
    let body = normalized.strip_suffix('\n').unwrap_or(&normalized);

    tera::Tera::one_off(body, context, false).map_err(|source| Error::TemplateRender {
        template: name.to_string(),
        source,
    })
}

/// Render the template file at `template_path` into `destination`
pub fn render_file(
    resolver: &ContextResolver,
    template_path: &Path,
    destination: &Path,
) -> Result<()> {
    let name = resolver.template_key(template_path)?;
    let context = resolver.resolve(template_path)?;
    let source = fs::read_to_string(template_path)?;
    let rendered = render_str(&name, &source, &context)?;

    fs::write(destination, rendered)?;
    Ok(())
}
