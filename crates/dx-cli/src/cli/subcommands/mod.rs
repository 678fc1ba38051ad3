mod hypothesis;
mod session;
mod users;

pub use hypothesis::HypothesisCommands;
pub use session::SessionCommands;
pub use users::UsersCommands;
