pub(super) use crate::{api::ApiClient, config::*, controllers::user};
pub(super) use anyhow::{Context, Result};
pub(super) use clap::{Parser, Subcommand};
pub(super) use colored::Colorize;

pub mod whoami;
pub mod workspace;
