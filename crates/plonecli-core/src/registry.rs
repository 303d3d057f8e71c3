//! Template registry: the fixed table of mr.bob templates the CLI knows about
//!
//! Each entry maps a short command-line alias (e.g. `theme`) to the
//! fully-qualified template id handed to `mrbob`
//! (e.g. `bobtemplates.plone:theme`). Standalone templates create a new
//! package; sub-templates (those with `depends_on` set) only make sense
//! inside a package created by their parent template.

use crate::error::{Error, Result};

/// One scaffolding template known to the CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    /// Fully-qualified template id passed to mrbob
    pub qualified_id: String,
    /// Short user-facing alias used on the command line
    pub alias: String,
    /// Alias of the standalone template this one extends, if any
    pub depends_on: Option<String>,
}

impl TemplateEntry {
    /// Create a standalone template entry
    pub fn standalone(qualified_id: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            qualified_id: qualified_id.into(),
            alias: alias.into(),
            depends_on: None,
        }
    }

    /// Create a sub-template entry extending `parent`
    pub fn sub(
        qualified_id: impl Into<String>,
        alias: impl Into<String>,
        parent: impl Into<String>,
    ) -> Self {
        Self {
            qualified_id: qualified_id.into(),
            alias: alias.into(),
            depends_on: Some(parent.into()),
        }
    }

    /// Whether this template can create a brand-new package
    pub fn is_standalone(&self) -> bool {
        self.depends_on.is_none()
    }
}

/// Immutable table of registered templates, built once at startup
///
/// Registration order determines listing order.
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    entries: Vec<TemplateEntry>,
}

impl TemplateRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the canonical built-in template table
    ///
    /// This is the superset table; the historical smaller registration set
    /// is not reproduced. The table is fixed at compile time, so
    /// registration cannot fail here.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        let entries = [
            TemplateEntry::standalone("bobtemplates.plone:addon", "addon"),
            TemplateEntry::standalone("bobtemplates.plone:theme_package", "theme_package"),
            TemplateEntry::standalone("bobtemplates.plone:buildout", "run_buildout"),
            TemplateEntry::sub("bobtemplates.plone:sub_buildout", "buildout", "addon"),
            TemplateEntry::sub("bobtemplates.plone:theme", "theme", "addon"),
            TemplateEntry::sub("bobtemplates.plone:content_type", "content_type", "addon"),
            TemplateEntry::sub("bobtemplates.plone:vocabulary", "vocabulary", "addon"),
        ];
        for entry in entries {
            registry
                .register(entry)
                .expect("built-in template table is internally consistent");
        }
        registry
    }

    /// Register one template entry
    ///
    /// Fails on duplicate aliases or template ids, on a `depends_on`
    /// referencing an alias that is not registered yet, and on dependency
    /// chains deeper than one level.
    pub fn register(&mut self, entry: TemplateEntry) -> Result<()> {
        if self.get(&entry.alias).is_some() {
            return Err(Error::DuplicateAlias { alias: entry.alias });
        }
        if self
            .entries
            .iter()
            .any(|e| e.qualified_id == entry.qualified_id)
        {
            return Err(Error::DuplicateTemplate {
                qualified_id: entry.qualified_id,
            });
        }
        if let Some(parent_alias) = &entry.depends_on {
            let parent = self.get(parent_alias).ok_or_else(|| Error::DanglingDependency {
                alias: entry.alias.clone(),
                depends_on: parent_alias.clone(),
            })?;
            if !parent.is_standalone() {
                return Err(Error::NestedDependency {
                    alias: entry.alias.clone(),
                    depends_on: parent_alias.clone(),
                });
            }
        }
        self.entries.push(entry);
        Ok(())
    }

    /// All registered aliases, in registration order
    pub fn aliases(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.alias.clone()).collect()
    }

    /// Exact-match alias lookup returning the qualified template id
    ///
    /// Resolution is total: an unknown alias yields `None`, never an error.
    pub fn resolve(&self, alias: &str) -> Option<&str> {
        self.get(alias).map(|e| e.qualified_id.as_str())
    }

    /// Exact-match alias lookup returning the full entry
    pub fn get(&self, alias: &str) -> Option<&TemplateEntry> {
        self.entries.iter().find(|e| e.alias == alias)
    }

    /// Number of registered templates
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no templates
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_resolves_every_alias() {
        let registry = TemplateRegistry::builtin();
        for alias in registry.aliases() {
            assert!(
                registry.resolve(&alias).is_some(),
                "alias '{}' should resolve",
                alias
            );
        }
    }

    #[test]
    fn test_builtin_aliases_are_distinct_and_ordered() {
        let registry = TemplateRegistry::builtin();
        let aliases = registry.aliases();
        assert_eq!(aliases.first().map(String::as_str), Some("addon"));
        let mut sorted = aliases.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), aliases.len(), "aliases must be pairwise distinct");
        assert_eq!(registry.len(), aliases.len());
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = TemplateRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_resolve_known_aliases() {
        let registry = TemplateRegistry::builtin();
        assert_eq!(registry.resolve("addon"), Some("bobtemplates.plone:addon"));
        assert_eq!(
            registry.resolve("run_buildout"),
            Some("bobtemplates.plone:buildout")
        );
        assert_eq!(registry.resolve("theme"), Some("bobtemplates.plone:theme"));
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let registry = TemplateRegistry::builtin();
        assert_eq!(registry.resolve("Addon"), None);
        assert_eq!(registry.resolve("THEME"), None);
    }

    #[test]
    fn test_resolve_unknown_alias_returns_none() {
        let registry = TemplateRegistry::builtin();
        assert_eq!(registry.resolve("nonexistent-alias"), None);
        assert_eq!(registry.resolve(""), None);
    }

    #[test]
    fn test_sub_templates_depend_on_standalone_parents() {
        let registry = TemplateRegistry::builtin();
        for alias in registry.aliases() {
            let entry = registry.get(&alias).unwrap();
            if let Some(parent) = &entry.depends_on {
                let parent_entry = registry
                    .get(parent)
                    .expect("depends_on must reference a registered alias");
                assert!(parent_entry.is_standalone());
            }
        }
    }

    #[test]
    fn test_register_duplicate_alias_fails() {
        let mut registry = TemplateRegistry::new();
        registry
            .register(TemplateEntry::standalone("ns:one", "addon"))
            .unwrap();
        let err = registry
            .register(TemplateEntry::standalone("ns:two", "addon"))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateAlias { .. }), "got: {:?}", err);
    }

    #[test]
    fn test_register_duplicate_template_id_fails() {
        let mut registry = TemplateRegistry::new();
        registry
            .register(TemplateEntry::standalone("ns:one", "addon"))
            .unwrap();
        let err = registry
            .register(TemplateEntry::standalone("ns:one", "other"))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateTemplate { .. }), "got: {:?}", err);
    }

    #[test]
    fn test_register_dangling_dependency_fails() {
        let mut registry = TemplateRegistry::new();
        let err = registry
            .register(TemplateEntry::sub("ns:theme", "theme", "missing"))
            .unwrap_err();
        assert!(
            matches!(err, Error::DanglingDependency { .. }),
            "got: {:?}",
            err
        );
    }

    #[test]
    fn test_register_nested_dependency_fails() {
        let mut registry = TemplateRegistry::new();
        registry
            .register(TemplateEntry::standalone("ns:addon", "addon"))
            .unwrap();
        registry
            .register(TemplateEntry::sub("ns:theme", "theme", "addon"))
            .unwrap();
        let err = registry
            .register(TemplateEntry::sub("ns:barceloneta", "barceloneta", "theme"))
            .unwrap_err();
        assert!(
            matches!(err, Error::NestedDependency { .. }),
            "got: {:?}",
            err
        );
    }
}
