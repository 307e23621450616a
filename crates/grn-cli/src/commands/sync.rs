use anyhow::Context;

use grn_core::responses::{SyncPlan, SyncResponse};
use grn_validate::{RunContext, reconcile_labels, validate_session};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SyncArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `grn sync`: validate, reconcile, and (with `--apply`) mutate.
///
/// Sessions are processed one at a time; a session whose add succeeded but
/// whose remove failed is left over-labeled and converges on the next run.
pub async fn handle(args: &SyncArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let previous_body = args
        .previous_body_file
        .as_deref()
        .map(|path| {
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read previous body from {}", path.display()))
        })
        .transpose()?;

    let spinner = Progress::spinner("fetching program snapshot");
    let project = ctx.fetch_snapshot().await?;
    spinner.finish_clear();

    let meeting = project.metadata.meeting.clone();
    let run = RunContext::new(project)?;

    let numbers: Vec<u64> = match args.session {
        Some(number) => vec![number],
        None => {
            let mut numbers = Vec::new();
            for session in &run.project().sessions {
                if !numbers.contains(&session.number) {
                    numbers.push(session.number);
                }
            }
            numbers
        }
    };

    let bar = Progress::bar(numbers.len() as u64, "reconciling labels");
    let mut plans = Vec::with_capacity(numbers.len());
    for number in numbers {
        bar.set_message(&format!("session #{number}"));
        let issues = validate_session(&run, &ctx.resolver, number).await?;
        let session = run
            .project()
            .session(number)
            .context("session disappeared from the snapshot mid-run")?;
        let changes = reconcile_labels(
            &run,
            session,
            &issues,
            &run.project().labels,
            previous_body.as_deref(),
        )?;

        if args.apply && !changes.is_noop() {
            ctx.github
                .mutate_labels(&session.id, &changes.add_ids(), &changes.remove_ids())
                .await
                .with_context(|| format!("failed to mutate labels of session #{number}"))?;
        }

        plans.push(SyncPlan {
            session: number,
            add: changes.add_names(),
            remove: changes.remove_names(),
            applied: args.apply,
        });
        bar.inc(1);
    }
    bar.finish_clear();

    output(&SyncResponse { meeting, plans }, flags.format)
}
