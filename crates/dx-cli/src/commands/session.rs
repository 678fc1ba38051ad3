use crate::cli::GlobalFlags;
use crate::cli::subcommands::SessionCommands;
use crate::context::AppContext;
use crate::output::dashboard::render_session;
use crate::output::output;
use crate::ui;

/// Handle `dxw session`.
pub fn handle(action: &SessionCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        SessionCommands::Show => {
            let view = ctx.store.load()?.view();
            if flags.human() {
                println!("{}", render_session(&view));
                Ok(())
            } else {
                output(&view, flags.format)
            }
        }
        SessionCommands::Reset => {
            let existed = ctx.store.clear()?;
            tracing::info!(path = %ctx.store.path().display(), existed, "session reset");
            if flags.human() {
                let message = if existed {
                    "Session cleared. Start again with 'dxw start' or 'dxw identity'."
                } else {
                    "No saved session."
                };
                ui::hint(flags, message);
                Ok(())
            } else {
                output(&serde_json::json!({ "reset": existed }), flags.format)
            }
        }
    }
}
