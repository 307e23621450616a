use grn_core::responses::ValidateResponse;
use grn_validate::{RunContext, validate_all, validate_session};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ValidateArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `grn validate`.
///
/// Findings are data: the exit code stays 0 however many issues come back.
pub async fn handle(
    args: &ValidateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let spinner = Progress::spinner("fetching program snapshot");
    let project = ctx.fetch_snapshot().await?;
    spinner.finish_clear();

    let meeting = project.metadata.meeting.clone();
    let run = RunContext::new(project)?;

    let (issues, sessions_checked) = if let Some(number) = args.session {
        (validate_session(&run, &ctx.resolver, number).await?, 1)
    } else {
        let spinner = Progress::spinner("validating sessions");
        let issues = validate_all(&run, &ctx.resolver).await?;
        spinner.finish_clear();
        (issues, u32::try_from(run.project().sessions.len())?)
    };

    output(&ValidateResponse { meeting, sessions_checked, issues }, flags.format)
}
