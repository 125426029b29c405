pub mod outcome;

use std::path::{Path, PathBuf};

use console::style;
use filetime::FileTime;

use crate::detect;
use crate::discovery::{self, DiscoveredTemplates, TEMPLATE_FILE};
use crate::error::{DeployError, Result};
use crate::paths::PathExpander;
use crate::prompt::Prompter;
use crate::registry::{lookup, TemplateEntry, REGISTRY};

pub use outcome::{DeploymentResults, TemplateOutcome};

#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Directory whose subdirectories hold `CLAUDE.md` templates.
    pub templates_dir: PathBuf,
    /// Report what would happen without touching the filesystem.
    pub dry_run: bool,
    /// Prompt for missing targets and overwrites instead of skipping.
    pub interactive: bool,
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self {
            templates_dir: PathBuf::from("."),
            dry_run: false,
            interactive: true,
        }
    }
}

/// Discovers templates, finds where each belongs, and copies them there.
///
/// Templates are processed one at a time in key order. Nothing that goes
/// wrong with one template affects the others.
pub struct Deployer<P> {
    templates_dir: PathBuf,
    dry_run: bool,
    interactive: bool,
    registry: &'static [TemplateEntry],
    expander: PathExpander,
    prompter: P,
}

impl<P: Prompter> Deployer<P> {
    pub fn new(options: DeployOptions, prompter: P) -> Self {
        let expander = PathExpander::from_env();
        let templates_dir = expander.expand(&options.templates_dir.to_string_lossy());
        Self {
            templates_dir,
            dry_run: options.dry_run,
            interactive: options.interactive,
            registry: REGISTRY,
            expander,
            prompter,
        }
    }

    pub fn with_registry(mut self, registry: &'static [TemplateEntry]) -> Self {
        self.registry = registry;
        self
    }

    /// Replace the expander, e.g. to resolve `~` against a different home.
    pub fn with_expander(mut self, expander: PathExpander) -> Self {
        self.expander = expander;
        self
    }

    pub fn find_templates(&self) -> Result<DiscoveredTemplates> {
        discovery::find_templates(&self.templates_dir)
    }

    pub fn detect_target_path(&self, key: &str) -> Option<PathBuf> {
        detect::detect_target_path(self.registry, key, &self.expander)
    }

    /// Ask the operator where `key` should go. Only used after detection failed.
    ///
    /// Returns `None` when not interactive, when the answer is empty or
    /// cancelled, or when a missing directory is not (or cannot be) created.
    pub fn prompt_for_path(&mut self, key: &str) -> Option<PathBuf> {
        if !self.interactive {
            return None;
        }

        let entry = lookup(self.registry, key);
        let description = entry.map_or(key, |e| e.description);

        println!(
            "\n   {} Could not auto-detect path for: {}",
            style("✗").red().bold(),
            style(key).bold()
        );
        println!("   Description: {description}");
        if let Some(entry) = entry {
            println!("   Tried looking for:");
            for pattern in entry.patterns {
                println!("     - {pattern}");
            }
        }

        let answer = self
            .prompter
            .ask_path("Path (leave empty to skip):")?
            .trim()
            .to_string();
        if answer.is_empty() {
            return None;
        }

        let path = self.expander.expand(&answer);
        if path.exists() {
            return Some(path);
        }

        println!(
            "   {} Path does not exist: {}",
            style("warning:").yellow().bold(),
            path.display()
        );
        if !self.prompter.confirm("Create it?") {
            return None;
        }

        if self.dry_run {
            println!(
                "   {} [DRY RUN] Would create directory: {}",
                style("ℹ").blue().bold(),
                path.display()
            );
            return Some(path);
        }

        match std::fs::create_dir_all(&path) {
            Ok(()) => {
                println!(
                    "   {} Created directory: {}",
                    style("✓").green().bold(),
                    path.display()
                );
                Some(path)
            }
            Err(e) => {
                report(DeployError::TargetCreation { path, source: e });
                None
            }
        }
    }

    /// Copy `template_path` to `<target_path>/CLAUDE.md`.
    ///
    /// An existing target file is only replaced after the operator confirms;
    /// without prompts it is always left alone.
    pub fn deploy_template(
        &mut self,
        key: &str,
        template_path: &Path,
        target_path: &Path,
    ) -> TemplateOutcome {
        let target_file = target_path.join(TEMPLATE_FILE);

        if target_file.exists() {
            println!(
                "   {} {TEMPLATE_FILE} already exists at: {}",
                style("warning:").yellow().bold(),
                target_file.display()
            );

            if !self.interactive {
                println!("   Skipped (existing files are not overwritten without prompts)");
                return TemplateOutcome::Skipped;
            }

            if !self.prompter.confirm("Overwrite?") {
                println!("   Skipped");
                return TemplateOutcome::Skipped;
            }
        }

        if self.dry_run {
            println!("   {} [DRY RUN] Would copy:", style("ℹ").blue().bold());
            println!("      From: {}", template_path.display());
            println!("      To:   {}", target_file.display());
            return TemplateOutcome::Deployed;
        }

        match copy_preserving_times(template_path, &target_file) {
            Ok(()) => {
                tracing::info!("{key}: deployed to {}", target_file.display());
                println!(
                    "   {} Deployed to: {}",
                    style("✓").green().bold(),
                    style(target_file.display()).cyan()
                );
                TemplateOutcome::Deployed
            }
            Err(e) => {
                report(e);
                TemplateOutcome::Failed
            }
        }
    }

    /// Process every discovered template and print a summary.
    ///
    /// Only failing to read the templates directory is an error; per-template
    /// problems end up as `Skipped` or `Failed` outcomes.
    pub fn run(&mut self) -> Result<DeploymentResults> {
        println!(
            "{} CLAUDE.md template deployment",
            style("==>").cyan().bold()
        );

        let templates = self.find_templates()?;
        let mut results = DeploymentResults::default();

        if templates.is_empty() {
            println!(
                "{} No templates found in: {}",
                style("warning:").yellow().bold(),
                self.templates_dir.display()
            );
            return Ok(results);
        }

        println!("\nFound {} template(s):", templates.len());
        for key in templates.keys() {
            println!("   - {key}");
        }

        if self.dry_run {
            println!(
                "\n{} Dry run: no changes will be made",
                style("ℹ").blue().bold()
            );
        }

        for (key, template_path) in &templates {
            println!("\n{} Processing: {}", style("==>").cyan(), style(key).bold());
            let outcome = self.process(key, template_path);
            tracing::debug!("{key}: {outcome}");
            results.record(key.as_str(), outcome);
        }

        results.print_summary();
        Ok(results)
    }

    fn process(&mut self, key: &str, template_path: &Path) -> TemplateOutcome {
        let target = match self.detect_target_path(key) {
            Some(path) => {
                println!("   Auto-detected path: {}", style(path.display()).cyan());
                path
            }
            None => {
                println!("   Could not auto-detect path");
                match self.prompt_for_path(key) {
                    Some(path) => path,
                    None => {
                        println!("   Skipped");
                        return TemplateOutcome::Skipped;
                    }
                }
            }
        };

        self.deploy_template(key, template_path, &target)
    }
}

/// `std::fs::copy` keeps permissions; access and modification times are
/// carried over separately. Failing to set times is not a failed deployment.
fn copy_preserving_times(from: &Path, to: &Path) -> Result<()> {
    std::fs::copy(from, to).map_err(|e| DeployError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source: e,
    })?;

    match std::fs::metadata(from) {
        Ok(meta) => {
            let atime = FileTime::from_last_access_time(&meta);
            let mtime = FileTime::from_last_modification_time(&meta);
            if let Err(e) = filetime::set_file_times(to, atime, mtime) {
                tracing::warn!("could not preserve timestamps on {}: {e}", to.display());
            }
        }
        Err(e) => tracing::warn!("could not read metadata of {}: {e}", from.display()),
    }

    Ok(())
}

fn report(err: DeployError) {
    eprintln!("{:?}", miette::Report::new(err));
}
