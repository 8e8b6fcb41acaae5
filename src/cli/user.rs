//! User CLI command

use super::Context;
use crate::display::format_detail;
use crate::error::ClinabResult;

/// Show the user owning the API token
pub fn handle_user_command(ctx: &Context) -> ClinabResult<()> {
    let user = ctx.client.get_user()?;
    ctx.emit(&user, || format_detail(&[("User ID", user.id.clone())]))
}
