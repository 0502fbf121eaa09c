//! Main module for skitscript library functionality

pub mod config;
pub mod formats;
pub mod lexical;
