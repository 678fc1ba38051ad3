use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Start(args) => commands::start::handle(&args, ctx, flags).await,
        Commands::Identity(args) => commands::identity::handle(&args, ctx, flags).await,
        Commands::Hypothesis { action } => commands::hypothesis::handle(&action, ctx, flags).await,
        Commands::Questionnaire(args) => commands::questionnaire::handle(&args, ctx, flags).await,
        Commands::Dashboard => commands::dashboard::handle(ctx, flags),
        Commands::Export(args) => commands::export::handle(&args, ctx, flags).await,
        Commands::Results(args) => commands::results::handle(&args, ctx, flags).await,
        Commands::Users { action } => commands::users::handle(&action, ctx, flags).await,
        Commands::Session { action } => commands::session::handle(&action, ctx, flags),
    }
}
