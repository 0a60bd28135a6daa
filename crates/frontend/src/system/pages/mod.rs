pub mod documentation;
pub mod login;
pub mod settings;
