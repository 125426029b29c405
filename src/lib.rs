pub mod config;
pub mod deploy;
pub mod detect;
pub mod discovery;
pub mod error;
pub mod paths;
pub mod prompt;
pub mod registry;

pub use deploy::{DeployOptions, Deployer, DeploymentResults, TemplateOutcome};
pub use discovery::{find_templates, DiscoveredTemplates, TEMPLATE_FILE};
pub use error::{DeployError, Result};
pub use paths::PathExpander;
pub use prompt::{InquirePrompter, LinePrompter, Prompter};
