pub mod admin;
pub mod login;
pub mod logout;
pub mod professor;
pub mod register;
pub mod student;
pub mod whoami;
