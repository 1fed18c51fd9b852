use atl_core::entities::Lookup;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LookupArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `atl lookups`.
pub async fn handle(args: &LookupArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kind = args.kind.kind();
    let rows: Vec<Lookup> = ctx.client.get_json(kind.as_str()).await?;
    output(&rows, flags.format)
}
