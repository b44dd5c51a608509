//! Validate command implementation.
//!
//! Resolves the rule set, runs the readiness engine against the workspace
//! and renders the report.

use std::path::{Path, PathBuf};

use crate::check::{FindingKind, ReadinessEngine, ValidationOutcome, ValidationReport};
use crate::cli::args::ValidateArgs;
use crate::config::resolve_rules;
use crate::error::{Result, SitecheckError};
use crate::report::{render, HumanFormatter, JsonFormatter, OutputFormat};
use crate::ui::UserInterface;

use super::command::{Command, CommandResult};

/// The validate command implementation.
pub struct ValidateCommand {
    project_root: PathBuf,
    args: ValidateArgs,
}

impl ValidateCommand {
    /// Create a new validate command.
    pub fn new(project_root: &Path, args: ValidateArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    fn show_human(&self, report: &ValidationReport, ui: &mut dyn UserInterface) {
        let details = ui.output_mode().shows_details();

        ui.show_header("Site readiness check");

        if let Some(marker) = report.marker.as_ref().filter(|_| details) {
            ui.message(&format!("Vertical:    {} ({})", marker.name, marker.vertical));
            ui.message(&format!("Category:    {}", marker.category));
            ui.message(&format!("Initialized: {}", marker.initialized_at));
            ui.message("");

            if report
                .findings_of(FindingKind::MissingVerticalConfig)
                .next()
                .is_none()
            {
                ui.success("Vertical configuration found");
            }
            for file in report.files.iter().filter(|f| f.present) {
                ui.success(&file.path.display().to_string());
            }
            if !report.scanned.is_empty()
                && report
                    .findings_of(FindingKind::PlaceholderDetected)
                    .next()
                    .is_none()
            {
                ui.success("No obvious placeholder content detected");
            }
            ui.message("");
        }

        let output = render(&HumanFormatter::new(), report);
        for line in output.lines() {
            if line.starts_with("error") {
                ui.error(line);
            } else if line.starts_with("warning") {
                ui.warning(line);
            } else {
                ui.message(line);
            }
        }

        match report.outcome {
            ValidationOutcome::Pass => {
                ui.success(&format!("Validation {}", report.outcome));
                ui.message("Ready to build.");
            }
            ValidationOutcome::PassWithWarnings => {
                ui.warning(&format!("Validation {}", report.outcome));
                ui.message("The site will build, but resolve the warnings above before launch.");
            }
            ValidationOutcome::Fail => {
                ui.error(&format!(
                    "Validation {} - fix required issues above",
                    report.outcome
                ));
            }
        }
    }

    fn show_malformed_marker(
        &self,
        error: &str,
        launch_command: &str,
        ui: &mut dyn UserInterface,
    ) {
        let suggestion = format!("Run: {} <vertical> --force", launch_command);
        match self.args.format {
            OutputFormat::Json => {
                let mut buf = Vec::new();
                let formatter = JsonFormatter::new(self.args.strict);
                if formatter.format_error(error, &suggestion, &mut buf).is_ok() {
                    ui.emit(String::from_utf8_lossy(&buf).trim_end());
                }
            }
            OutputFormat::Human => {
                ui.error(error);
                ui.message(&format!("   {}", suggestion));
            }
        }
    }
}

impl Command for ValidateCommand {
    /// Run the check.
    ///
    /// The rule set is resolved before the workspace is inspected, because
    /// `.sitecheck.yml` may move the marker itself. A broken override file
    /// therefore fails the run even in an uninitialized workspace.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let rules = resolve_rules(&self.project_root, self.args.config.as_deref())?;
        let launch_command = rules.launch_command.clone();
        let engine = ReadinessEngine::new(rules)?;

        let report = match engine.validate(&self.project_root) {
            Ok(report) => report,
            Err(e @ SitecheckError::MarkerParseError { .. }) => {
                self.show_malformed_marker(&e.to_string(), &launch_command, ui);
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        match self.args.format {
            OutputFormat::Json => {
                let output = render(&JsonFormatter::new(self.args.strict), &report);
                ui.emit(output.trim_end());
            }
            OutputFormat::Human => self.show_human(&report, ui),
        }

        Ok(CommandResult::from_exit_code(
            report.outcome.exit_code(self.args.strict),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use tempfile::TempDir;

    const MARKER: &str = r#"{"name":"Acme","vertical":"hvac","category":"home-services","initializedAt":"2024-01-01"}"#;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn setup_workspace() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(root, ".vertical", MARKER);
        write(root, "src/config/vertical.ts", "export const vertical = {};");
        write(root, "src/config/site.ts", "export const siteConfig = {};");
        write(root, "public/favicon.svg", "<svg/>");
        write(root, "public/images/logo.png", "png");
        write(root, "public/og-image.png", "png");
        temp
    }

    fn run(root: &Path, args: ValidateArgs, ui: &mut MockUI) -> CommandResult {
        ValidateCommand::new(root, args).execute(ui).unwrap()
    }

    #[test]
    fn passing_workspace_succeeds() {
        let temp = setup_workspace();
        let mut ui = MockUI::new();

        let result = run(temp.path(), ValidateArgs::default(), &mut ui);

        assert!(result.success);
        assert!(ui.has_message("Vertical:    Acme (hvac)"));
        assert!(ui
            .successes()
            .contains(&"Vertical configuration found".to_string()));
        assert!(ui.successes().contains(&"public/favicon.svg".to_string()));
        assert!(ui.successes().contains(&"Validation PASSED".to_string()));
        assert!(ui.errors().is_empty());
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn uninitialized_workspace_fails_with_hint() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = run(temp.path(), ValidateArgs::default(), &mut ui);

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("error[missing-initialization]"));
        assert!(ui.has_message("= help: Run: npm run launch <vertical>"));
        assert!(ui.has_error("Validation FAILED"));
    }

    #[test]
    fn warnings_pass_unless_strict() {
        let temp = setup_workspace();
        fs::remove_file(temp.path().join("public/og-image.png")).unwrap();

        let mut ui = MockUI::new();
        let result = run(temp.path(), ValidateArgs::default(), &mut ui);
        assert!(result.success);
        assert!(ui.has_warning("warning[missing-optional-file]"));
        assert!(ui.has_warning("Validation PASSED with warnings"));

        let mut ui = MockUI::new();
        let strict = ValidateArgs {
            strict: true,
            ..Default::default()
        };
        let result = run(temp.path(), strict, &mut ui);
        assert!(!result.success);
    }

    #[test]
    fn malformed_marker_reports_remediation() {
        let temp = setup_workspace();
        write(temp.path(), ".vertical", "not json");
        let mut ui = MockUI::new();

        let result = run(temp.path(), ValidateArgs::default(), &mut ui);

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Malformed vertical marker"));
        assert!(ui.has_message("Run: npm run launch <vertical> --force"));
    }

    #[test]
    fn json_format_emits_single_document() {
        let temp = setup_workspace();
        write(temp.path(), "src/config/site.ts", "url: 'https://example.com'");
        let mut ui = MockUI::new();
        let args = ValidateArgs {
            format: OutputFormat::Json,
            ..Default::default()
        };

        let result = run(temp.path(), args, &mut ui);

        assert!(result.success);
        assert_eq!(ui.emitted().len(), 1);
        assert!(ui.messages().is_empty());
        let parsed: serde_json::Value = serde_json::from_str(&ui.emitted()[0]).unwrap();
        assert_eq!(parsed["outcome"], "pass_with_warnings");
        assert_eq!(parsed["exit_code"], 0);
        assert_eq!(parsed["findings"][0]["category"], "placeholder-detected");
        assert!(ui.headers().is_empty());
    }

    #[test]
    fn json_format_malformed_marker_emits_error_document() {
        let temp = setup_workspace();
        write(temp.path(), ".vertical", "{");
        let mut ui = MockUI::new();
        let args = ValidateArgs {
            format: OutputFormat::Json,
            ..Default::default()
        };

        let result = run(temp.path(), args, &mut ui);

        assert_eq!(result.exit_code, 1);
        assert!(ui.messages().is_empty());
        assert!(ui.errors().is_empty());
        assert_eq!(ui.emitted().len(), 1);
        let parsed: serde_json::Value = serde_json::from_str(&ui.emitted()[0]).unwrap();
        assert_eq!(parsed["outcome"], "fail");
        assert_eq!(parsed["exit_code"], 1);
        assert!(parsed["error"]
            .as_str()
            .unwrap()
            .contains("Malformed vertical marker"));
        assert_eq!(
            parsed["suggestion"],
            "Run: npm run launch <vertical> --force"
        );
    }

    #[test]
    fn clean_scan_reported_despite_missing_optional_file() {
        let temp = setup_workspace();
        fs::remove_file(temp.path().join("public/images/logo.png")).unwrap();
        let mut ui = MockUI::new();

        run(temp.path(), ValidateArgs::default(), &mut ui);

        assert!(ui
            .successes()
            .contains(&"No obvious placeholder content detected".to_string()));
    }

    #[test]
    fn placeholder_hit_suppresses_clean_scan_line() {
        let temp = setup_workspace();
        write(temp.path(), "src/config/site.ts", "city: 'Springfield'");
        let mut ui = MockUI::new();

        run(temp.path(), ValidateArgs::default(), &mut ui);

        assert!(!ui
            .successes()
            .contains(&"No obvious placeholder content detected".to_string()));
    }

    #[test]
    fn override_file_is_read_before_marker() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), ".sitecheck.yml", "bogus: 1\n");

        let err = ValidateCommand::new(temp.path(), ValidateArgs::default())
            .execute(&mut MockUI::new())
            .unwrap_err();
        assert!(matches!(err, SitecheckError::ConfigParseError { .. }));
    }

    #[test]
    fn quiet_mode_skips_file_listing() {
        let temp = setup_workspace();
        let mut ui = MockUI::with_mode(OutputMode::Quiet);

        run(temp.path(), ValidateArgs::default(), &mut ui);

        assert!(!ui.successes().contains(&"public/favicon.svg".to_string()));
        assert!(ui.successes().contains(&"Validation PASSED".to_string()));
    }

    #[test]
    fn rule_override_file_is_applied() {
        let temp = setup_workspace();
        write(
            temp.path(),
            ".sitecheck.yml",
            "required_files:\n  - path: public/robots.txt\n    description: Robots file\n",
        );
        let mut ui = MockUI::new();

        let result = run(temp.path(), ValidateArgs::default(), &mut ui);

        assert!(!result.success);
        assert!(ui.has_error("Robots file is missing (required)"));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let temp = setup_workspace();
        let args = ValidateArgs {
            config: Some(temp.path().join("nope.yml")),
            ..Default::default()
        };

        let err = ValidateCommand::new(temp.path(), args)
            .execute(&mut MockUI::new())
            .unwrap_err();
        assert!(matches!(err, SitecheckError::ConfigNotFound { .. }));
    }
}
