mod channel_names;
pub use channel_names::*;

mod motd;
pub use motd::*;

mod lusers;
pub use lusers::*;

mod numeric_utils;
pub use numeric_utils::*;
