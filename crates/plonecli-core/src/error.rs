//! Error types for plonecli-core

use thiserror::Error;

/// Result type alias using plonecli-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for the Plone CLI
///
/// Failures of delegated external tools are deliberately absent: a non-zero
/// child exit is mirrored as the CLI's own exit status, never wrapped in an
/// `Error`.
#[derive(Error, Debug)]
pub enum Error {
    /// Command requires a package root but none was detected
    #[error("'{command}' must be run from inside a Plone package (no bobtemplate.cfg found in the current directory or its parents)")]
    NotInPackage { command: String },

    /// Command must be run outside of an existing package
    #[error("'{command}' must be run outside of an existing Plone package (found one at {root}; use 'plonecli add' to extend it)")]
    InsidePackage { command: String, root: String },

    /// Template alias did not resolve
    #[error("'{command}' got an unknown template '{value}'. Registered templates: {}", possibilities.join(", "))]
    NoSuchTemplate {
        command: String,
        value: String,
        possibilities: Vec<String>,
    },

    /// Zope/ZEO console scripts are not installed
    #[error("'{command}' requires the Zope/ZEO console scripts (zconsole, runzeo, zeopack), which were not found on PATH")]
    ServerUnavailable { command: String },

    /// Two registry entries share an alias
    #[error("duplicate template alias '{alias}' in registry")]
    DuplicateAlias { alias: String },

    /// Two registry entries share a qualified template id
    #[error("duplicate template id '{qualified_id}' in registry")]
    DuplicateTemplate { qualified_id: String },

    /// A sub-template references an alias that was never registered
    #[error("template '{alias}' depends on unregistered alias '{depends_on}'")]
    DanglingDependency { alias: String, depends_on: String },

    /// A sub-template references another sub-template
    #[error("template '{alias}' depends on '{depends_on}', which is itself a sub-template (dependency chains are one level deep)")]
    NestedDependency { alias: String, depends_on: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a not-in-package error naming the failing command
    pub fn not_in_package(command: impl Into<String>) -> Self {
        Self::NotInPackage {
            command: command.into(),
        }
    }

    /// Create an inside-package error naming the failing command
    pub fn inside_package(command: impl Into<String>, root: impl Into<String>) -> Self {
        Self::InsidePackage {
            command: command.into(),
            root: root.into(),
        }
    }

    /// Create an unknown-template error carrying the valid aliases
    pub fn no_such_template(
        command: impl Into<String>,
        value: impl Into<String>,
        possibilities: Vec<String>,
    ) -> Self {
        Self::NoSuchTemplate {
            command: command.into(),
            value: value.into(),
            possibilities,
        }
    }

    /// Create a server-unavailable error naming the failing command
    pub fn server_unavailable(command: impl Into<String>) -> Self {
        Self::ServerUnavailable {
            command: command.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_such_template_message_lists_possibilities() {
        let err = Error::no_such_template(
            "create",
            "blog",
            vec!["addon".to_string(), "theme".to_string()],
        );
        let msg = err.to_string();
        assert!(msg.contains("'create'"));
        assert!(msg.contains("'blog'"));
        assert!(msg.contains("addon, theme"));
    }

    #[test]
    fn test_not_in_package_names_command() {
        let err = Error::not_in_package("serve");
        assert!(err.to_string().contains("'serve'"));
    }
}
