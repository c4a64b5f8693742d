mod command_builder;
mod config;
mod relay;
mod status_observer;

pub use crate::{command_builder::*, config::*, relay::*, status_observer::*};
