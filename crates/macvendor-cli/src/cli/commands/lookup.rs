//! `macvendor --mac <MAC>` - Resolve a MAC address to its vendor.

use std::io::Write;

use anyhow::Result;
use macvendor::{LookupRequest, Resolver};
use tracing::{debug, info};

use super::Context;
use crate::output;

pub async fn execute(ctx: Context, request: LookupRequest) -> Result<()> {
    let client = ctx.client()?;
    let mut out = std::io::stdout();

    execute_with(&ctx, &client, &request, &mut out).await?;
    out.flush()?;

    Ok(())
}

/// Resolve `request` with `resolver` and write the rendered result to `out`.
pub async fn execute_with<R, W>(
    ctx: &Context,
    resolver: &R,
    request: &LookupRequest,
    out: &mut W,
) -> Result<()>
where
    R: Resolver + ?Sized,
    W: Write,
{
    let mac = request.mac_address();
    debug!(%mac, base_url = %ctx.base_url, "resolving MAC address");

    let result = resolver.resolve(request).await?;

    if let Some(vendor) = result.vendor_name() {
        info!(%mac, vendor, "MAC address resolved");
    }

    output::render(out, ctx.output_format, ctx.verbose, ctx.color, mac, &result)
}
