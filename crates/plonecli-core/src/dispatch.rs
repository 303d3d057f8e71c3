//! Command dispatcher: plans the external argument vector for every operation
//!
//! Planning is pure — no process is spawned and no filesystem is touched
//! here. Each function validates its preconditions (package context, alias
//! resolution), then returns the `CommandSpec`(s) the handler executes.

use crate::context::InvocationContext;
use crate::error::{Error, Result};
use crate::exec::CommandSpec;
use crate::registry::TemplateRegistry;

/// Plan `create <template> <name>`: scaffold a new package with mrbob
///
/// Only legal outside an existing package. The output directory is derived
/// from the current directory and `name` by mrbob's `-O` option.
pub fn create(
    registry: &TemplateRegistry,
    ctx: &InvocationContext,
    template: &str,
    name: &str,
) -> Result<CommandSpec> {
    if let Some(root) = &ctx.target_dir {
        return Err(Error::inside_package("create", root.as_str()));
    }
    let qualified_id = resolve(registry, "create", template)?;
    Ok(CommandSpec::new("mrbob")
        .arg(qualified_id)
        .args(["-O", name]))
}

/// Plan `add <template>`: apply a sub-template inside the current package
///
/// Runs in place, so no output-directory argument is passed.
pub fn add(
    registry: &TemplateRegistry,
    ctx: &InvocationContext,
    template: &str,
) -> Result<CommandSpec> {
    ctx.require_target_dir("add")?;
    let qualified_id = resolve(registry, "add", template)?;
    Ok(CommandSpec::new("mrbob").arg(qualified_id))
}

/// Plan `virtualenv`: create or update the package virtualenv
pub fn virtualenv(ctx: &InvocationContext, clean: bool) -> Result<CommandSpec> {
    let target_dir = ctx.require_target_dir("virtualenv")?;
    let mut spec = CommandSpec::new("virtualenv").arg(".").cwd(target_dir);
    if clean {
        spec = spec.arg("--clear");
    }
    Ok(spec)
}

/// Plan `requirements`: install the package requirements
pub fn requirements(ctx: &InvocationContext) -> Result<CommandSpec> {
    let target_dir = ctx.require_target_dir("requirements")?;
    Ok(CommandSpec::new("./bin/pip")
        .args(["install", "-r", "requirements.txt", "--upgrade"])
        .cwd(target_dir))
}

/// Plan `buildout`: run the package buildout
pub fn buildout(ctx: &InvocationContext, clean: bool) -> Result<CommandSpec> {
    let target_dir = ctx.require_target_dir("buildout")?;
    let mut spec = CommandSpec::new("./bin/buildout").cwd(target_dir);
    if clean {
        spec = spec.arg("-n");
    }
    Ok(spec)
}

/// Plan `serve`: run the Plone instance in the foreground
pub fn serve(ctx: &InvocationContext) -> Result<CommandSpec> {
    let target_dir = ctx.require_target_dir("serve")?;
    Ok(CommandSpec::new("./bin/instance").arg("fg").cwd(target_dir))
}

/// Plan `debug`: run the Plone instance in debug mode
pub fn debug(ctx: &InvocationContext) -> Result<CommandSpec> {
    let target_dir = ctx.require_target_dir("debug")?;
    Ok(CommandSpec::new("./bin/instance").arg("debug").cwd(target_dir))
}

/// Plan `build`: virtualenv, then requirements, then buildout
///
/// The clean flag is forwarded only to the virtualenv step. Buildout always
/// runs incrementally here, matching the historical front end (pinned by a
/// regression test below).
pub fn build(ctx: &InvocationContext, clean: bool) -> Result<Vec<CommandSpec>> {
    ctx.require_target_dir("build")?;
    Ok(vec![
        virtualenv(ctx, clean)?,
        requirements(ctx)?,
        buildout(ctx, false)?,
    ])
}

fn resolve<'r>(
    registry: &'r TemplateRegistry,
    command: &str,
    template: &str,
) -> Result<&'r str> {
    registry
        .resolve(template)
        .ok_or_else(|| Error::no_such_template(command, template, registry.aliases()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn outside() -> InvocationContext {
        InvocationContext::with_target_dir(None)
    }

    fn inside() -> InvocationContext {
        InvocationContext::with_target_dir(Some(Utf8PathBuf::from("/work/collective.todo")))
    }

    #[test]
    fn test_create_plans_mrbob_with_output_dir() {
        let registry = TemplateRegistry::builtin();
        let spec = create(&registry, &outside(), "addon", "collective.todo").unwrap();
        assert_eq!(spec.program, "mrbob");
        assert_eq!(
            spec.args,
            vec!["bobtemplates.plone:addon", "-O", "collective.todo"]
        );
        assert_eq!(spec.cwd, None);
    }

    #[test]
    fn test_create_inside_package_is_rejected() {
        let registry = TemplateRegistry::builtin();
        let err = create(&registry, &inside(), "addon", "foo").unwrap_err();
        assert!(
            matches!(err, Error::InsidePackage { ref command, .. } if command == "create"),
            "got: {:?}",
            err
        );
    }

    #[test]
    fn test_create_unknown_template_lists_aliases() {
        let registry = TemplateRegistry::builtin();
        let err = create(&registry, &outside(), "nonexistent", "foo").unwrap_err();
        match err {
            Error::NoSuchTemplate {
                command,
                value,
                possibilities,
            } => {
                assert_eq!(command, "create");
                assert_eq!(value, "nonexistent");
                assert_eq!(possibilities, registry.aliases());
            }
            other => panic!("expected NoSuchTemplate, got: {:?}", other),
        }
    }

    #[test]
    fn test_add_plans_mrbob_without_output_dir() {
        let registry = TemplateRegistry::builtin();
        let spec = add(&registry, &inside(), "theme").unwrap();
        assert_eq!(spec.program, "mrbob");
        assert_eq!(spec.args, vec!["bobtemplates.plone:theme"]);
    }

    #[test]
    fn test_add_outside_package_is_rejected() {
        let registry = TemplateRegistry::builtin();
        let err = add(&registry, &outside(), "theme").unwrap_err();
        assert!(
            matches!(err, Error::NotInPackage { ref command } if command == "add"),
            "got: {:?}",
            err
        );
    }

    #[test]
    fn test_virtualenv_clean_appends_clear() {
        let spec = virtualenv(&inside(), false).unwrap();
        assert_eq!(spec.args, vec!["."]);
        assert_eq!(
            spec.cwd,
            Some(Utf8PathBuf::from("/work/collective.todo"))
        );

        let spec = virtualenv(&inside(), true).unwrap();
        assert_eq!(spec.args, vec![".", "--clear"]);
    }

    #[test]
    fn test_requirements_vector() {
        let spec = requirements(&inside()).unwrap();
        assert_eq!(spec.program, "./bin/pip");
        assert_eq!(
            spec.args,
            vec!["install", "-r", "requirements.txt", "--upgrade"]
        );
    }

    #[test]
    fn test_buildout_clean_appends_n() {
        let spec = buildout(&inside(), false).unwrap();
        assert!(spec.args.is_empty());

        let spec = buildout(&inside(), true).unwrap();
        assert_eq!(spec.args, vec!["-n"]);
    }

    #[test]
    fn test_serve_and_debug_vectors() {
        let spec = serve(&inside()).unwrap();
        assert_eq!(spec.program, "./bin/instance");
        assert_eq!(spec.args, vec!["fg"]);

        let spec = debug(&inside()).unwrap();
        assert_eq!(spec.args, vec!["debug"]);
    }

    #[test]
    fn test_build_clean_is_forwarded_only_to_virtualenv() {
        let steps = build(&inside(), true).unwrap();
        assert_eq!(steps.len(), 3);
        assert!(steps[0].args.contains(&"--clear".to_string()));
        assert_eq!(steps[1].program, "./bin/pip");
        assert_eq!(steps[2].program, "./bin/buildout");
        assert!(
            !steps[2].args.contains(&"-n".to_string()),
            "clean must not reach the buildout step"
        );
    }

    #[test]
    fn test_build_outside_package_is_rejected() {
        let err = build(&outside(), false).unwrap_err();
        assert!(
            matches!(err, Error::NotInPackage { ref command } if command == "build"),
            "got: {:?}",
            err
        );
    }
}
