//! Kittens library.
//!
//! A small web application that fetches random kittens from the Awww
//! subreddit and either shows them on a page or emails them to a
//! submitted address.

pub mod components;
pub mod config;
pub mod mail;
pub mod reddit;
pub mod web;
