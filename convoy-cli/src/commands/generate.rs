//! Generate command handler
//!
//! Scaffolds a starter pipeline definition into the .convoy directory so a
//! repository can get its first Git-event pipeline without writing the
//! definition from scratch.

use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::Path;

/// Handle the generate command
///
/// Writes a starter pipeline definition for the given event type and
/// target branch into `.convoy/` under the output directory, refusing to
/// overwrite an existing file unless `force` is set.
pub async fn handle_generate_command(
    event_type: &str,
    branch: &str,
    output: &str,
    force: bool,
) -> Result<()> {
    let directory = Path::new(output).join(".convoy");
    if !directory.exists() {
        fs::create_dir_all(&directory)
            .with_context(|| format!("Failed to create directory {}", directory.display()))?;
        println!("  {} {}", "Created".green(), directory.display());
    }

    let path = directory.join(definition_file_name(event_type));
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists, pass --force to overwrite it",
            path.display()
        );
    }

    let definition = starter_pipeline(event_type, branch);
    fs::write(&path, definition)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!(
        "{}",
        format!("✓ Starter pipeline written to {}", path.display())
            .green()
            .bold()
    );
    println!();
    println!("{}", "Next steps:".bold());
    println!("  1. Adjust the steps to build and test your project");
    println!("  2. Commit the file and push it to trigger a first run");
    println!(
        "  3. Use {} to follow the recorded runs",
        "convoy repository describe".cyan()
    );

    Ok(())
}

/// File name for an event type's definition, e.g. "pull-request.yaml".
fn definition_file_name(event_type: &str) -> String {
    format!("{}.yaml", event_type.replace('_', "-"))
}

/// Render the starter pipeline definition for an event type and branch.
fn starter_pipeline(event_type: &str, branch: &str) -> String {
    format!(
        r#"apiVersion: convoy.dev/v1alpha1
kind: Pipeline
metadata:
  name: {name}
  annotations:
    convoy.dev/on-event: "[{event_type}]"
    convoy.dev/on-target-branch: "[{branch}]"
spec:
  steps:
    - name: unit-tests
      image: alpine:3
      script: |
        echo "replace this step with your build and test commands"
"#,
        name = event_type.replace('_', "-"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_pipeline_substitutes_event_and_branch() {
        let definition = starter_pipeline("pull_request", "main");

        assert!(definition.contains("name: pull-request"));
        assert!(definition.contains(r#"convoy.dev/on-event: "[pull_request]""#));
        assert!(definition.contains(r#"convoy.dev/on-target-branch: "[main]""#));
    }

    #[test]
    fn test_definition_file_name_dashes_event_type() {
        assert_eq!(definition_file_name("pull_request"), "pull-request.yaml");
        assert_eq!(definition_file_name("push"), "push.yaml");
    }
}
