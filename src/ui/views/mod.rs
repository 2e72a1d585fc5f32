pub mod not_found;
pub mod question;
pub mod speech_test;
pub mod subjects;
