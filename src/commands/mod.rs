#![allow(clippy::needless_pass_by_value)]

pub mod get;
pub mod new;
pub mod show;
