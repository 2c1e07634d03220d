pub mod add;
pub mod config;
pub mod db;
pub mod del;
pub mod init;
pub mod list;
pub mod notify;
pub mod recipes;
pub mod suggest;
pub mod watch;
