use crate::state::AppContext;
use async_graphql::{Context, ErrorExtensions, Guard, Result};

/// Requires a principal resolved by the transport layer. A missing or
/// rejected credential is a reported error, never a silent no-op.
pub struct AuthGuard;

impl Guard for AuthGuard {
    async fn check(&self, ctx: &Context<'_>) -> Result<()> {
        let app_ctx = ctx.data::<AppContext>().map_err(|_| "AppContext missing")?;
        if app_ctx.principal().is_some() {
            Ok(())
        } else {
            Err(async_graphql::Error::new("Unauthorized")
                .extend_with(|_, e| e.set("code", "UNAUTHORIZED")))
        }
    }
}
