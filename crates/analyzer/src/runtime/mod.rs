//! Runtime module — process lifecycle: boot, command line, pipeline run.

pub mod boot;
pub mod cli;
pub mod run;
