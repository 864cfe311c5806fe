#![allow(dead_code)]

pub mod fetch_server;
