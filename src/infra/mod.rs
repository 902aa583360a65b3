pub mod db;
pub mod discord;
pub mod mail;
