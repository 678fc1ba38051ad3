use anyhow::bail;
use dx_core::enums::WizardStep;
use dx_core::responses::DashboardView;
use dx_core::session::DiagnosisSession;

use crate::cli::GlobalFlags;
use crate::commands::shared::guard::require;
use crate::context::AppContext;
use crate::output::dashboard::render_dashboard;
use crate::output::output;

/// Handle `dxw dashboard`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.store.load()?;
    let view = view(&session)?;
    show(&view, flags)
}

/// Dashboard data for a session that has reached the dashboard step.
pub fn view(session: &DiagnosisSession) -> anyhow::Result<DashboardView> {
    require(session, WizardStep::Dashboard)?;
    let (Some(user_id), Some(result)) = (session.user_id(), session.result()) else {
        bail!("the session has no diagnosis result; run 'dxw questionnaire'");
    };
    Ok(DashboardView::new(user_id, session.profile().cloned(), result))
}

pub fn show(view: &DashboardView, flags: &GlobalFlags) -> anyhow::Result<()> {
    if flags.human() {
        println!("{}", render_dashboard(view));
        Ok(())
    } else {
        output(view, flags.format)
    }
}
