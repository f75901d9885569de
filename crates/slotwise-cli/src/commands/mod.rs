pub mod busy;
pub mod check;
pub mod dump;
pub mod find;
pub mod free;
