use std::fmt;

mod account;
mod poll;
mod vote;

pub use self::account::*;
pub use self::poll::*;
pub use self::vote::*;

/// A rejected submission the page can branch on by `kind` and show by `Display`.
pub trait FormError: fmt::Display {
    fn kind(&self) -> &'static str;
}
