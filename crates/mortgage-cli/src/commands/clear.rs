use serde_json::Value;

use mortgage_core::session::form;

use crate::session::SessionContext;

pub fn run_clear(ctx: &SessionContext) -> Result<Value, Box<dyn std::error::Error>> {
    let mut store = ctx.open_store()?;
    form::clear(&mut store)?;
    Ok(serde_json::json!({
        "cleared": true,
        "state_file": store.path().display().to_string(),
    }))
}
