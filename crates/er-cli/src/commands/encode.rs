use er_codec::Encoded;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct EncodeResponse {
    #[serde(flatten)]
    encoded: Encoded,
    lossless: bool,
}

/// Handle `exr encode`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = ctx.snapshot()?;
    let encoded = er_codec::encode(&snapshot, &ctx.codec);
    for warning in &encoded.warnings {
        tracing::warn!(%warning, "export code stores an approximation");
    }

    output(
        &EncodeResponse {
            lossless: encoded.is_lossless(),
            encoded,
        },
        flags.format,
    )
}
