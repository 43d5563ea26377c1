pub mod add;
pub mod config;
pub mod del;
pub mod edit;
pub mod executable;
pub mod init;
pub mod list;
pub mod log;
pub mod seed;
pub mod show;
