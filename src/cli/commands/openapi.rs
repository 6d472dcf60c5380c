use anyhow::Result;
use utoipa::OpenApi;

use crate::schemas::ApiDoc;

/// Print the generated OpenAPI document to stdout, for CI checks and
/// client generation.
pub fn print_openapi() -> Result<()> {
    let spec = ApiDoc::openapi().to_pretty_json()?;
    println!("{}", spec);
    Ok(())
}
