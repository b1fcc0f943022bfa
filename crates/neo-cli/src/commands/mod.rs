pub mod alerts;
pub mod dispatch;
pub mod feed;
pub mod monitor;
pub mod threat;
pub mod user;
pub mod watch;
