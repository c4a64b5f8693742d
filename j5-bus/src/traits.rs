mod command_sender;
mod status_feed;

pub use command_sender::*;
pub use status_feed::*;
