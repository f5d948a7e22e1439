pub mod board;
pub mod book;
pub mod calendar;
pub mod cancel;
pub mod floor;
pub mod login;
pub mod reset;
