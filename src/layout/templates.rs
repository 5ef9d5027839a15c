//! Shell command templates seeded into layout panes.

use crate::config::ProjectConfig;

/// Values substituted into pane commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandContext {
    pub project_dir: String,
    pub prod_server: String,
    pub prod_dir: String,
    pub project_name: String,
}

impl CommandContext {
    pub fn from_project(project: &ProjectConfig) -> Self {
        Self {
            project_dir: project.dir.display().to_string(),
            prod_server: project.prod_server.clone(),
            prod_dir: project.prod_dir.clone(),
            project_name: project.name.clone(),
        }
    }

    /// `cd '<project_dir>' && ` prefix shared by local commands.
    pub fn local_prefix(&self) -> String {
        format!("cd {} && ", shell_quote(&self.project_dir))
    }

    /// `make <target>` from the project root.
    pub fn make_target(&self, target: &str) -> String {
        format!("{}make {target}", self.local_prefix())
    }

    /// `./scripts/<script>` from the project root.
    pub fn local_script(&self, script: &str) -> String {
        format!("{}./scripts/{script}", self.local_prefix())
    }

    /// Follow one production container's logs over ssh.
    pub fn remote_logs(&self, service: &str) -> String {
        self.remote(&format!(
            "./scripts/dx-logs.sh {}_{service}",
            self.project_name
        ))
    }

    /// Production status dashboard over ssh.
    pub fn remote_prod_status(&self) -> String {
        self.remote("./scripts/dx-prod-status.sh")
    }

    /// Prefix any command with the local `cd`.
    pub fn from_project_dir(&self, command: &str) -> String {
        format!("{}{command}", self.local_prefix())
    }

    fn remote(&self, script: &str) -> String {
        format!(
            "ssh {} 'cd {} && {script}'",
            self.prod_server, self.prod_dir
        )
    }
}

/// Single-quote `s` for POSIX shells.
pub(crate) fn shell_quote(s: &str) -> String {
    if s.is_empty() {
        "''".into()
    } else {
        format!("'{}'", s.replace('\'', "'\\''"))
    }
}
