pub mod evaluation;
pub mod question;
