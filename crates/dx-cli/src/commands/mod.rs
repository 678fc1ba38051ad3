pub mod dashboard;
pub mod dispatch;
pub mod export;
pub mod hypothesis;
pub mod identity;
pub mod questionnaire;
pub mod results;
pub mod session;
pub mod shared;
pub mod start;
pub mod users;
