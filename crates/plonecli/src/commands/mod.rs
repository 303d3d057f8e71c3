//! CLI command implementations

pub mod add;
pub mod build;
pub mod buildout;
pub mod create;
pub mod debug;
pub mod instance;
pub mod requirements;
pub mod serve;
pub mod virtualenv;
pub mod zeopack;
pub mod zeoserver;
