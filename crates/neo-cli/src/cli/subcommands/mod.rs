mod user;
mod watch;

pub use user::UserCommands;
pub use watch::WatchCommands;
