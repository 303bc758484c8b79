pub mod init;
pub mod pick;
pub mod score;
pub mod session;
pub mod validate;
