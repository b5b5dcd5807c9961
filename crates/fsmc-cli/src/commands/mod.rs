pub mod dump;
pub mod input;
pub mod run;
