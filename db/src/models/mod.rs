mod choice;
mod question;
mod user;

pub use self::choice::*;
pub use self::question::*;
pub use self::user::*;
