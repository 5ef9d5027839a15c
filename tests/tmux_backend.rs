//! On-demand tmux backend regression tests.
//!
//! Ignored by default: they need a `tmux` binary and start a real server on a
//! private `-L` socket, which is killed when the test finishes.

use devgrid::config::TmuxConfig;
use devgrid::layout::{build_layout, full_layout, BuildOptions, CommandContext};
use devgrid::terminal::{TerminalApp, TmuxApp, LAYOUT_TAG, ROLE_TAG};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

type HarnessResult<T> = Result<T, String>;

/// Private tmux server, killed on drop if the test did not already do so.
struct TmuxServer {
    socket: String,
    killed: bool,
}

impl TmuxServer {
    fn new() -> HarnessResult<Self> {
        command_exists("tmux")?;
        Ok(Self {
            socket: format!("devgrid-test-{}", unique_suffix()),
            killed: false,
        })
    }

    fn app(&self) -> TmuxApp {
        TmuxApp::new(&TmuxConfig {
            socket: Some(self.socket.clone()),
            ..TmuxConfig::default()
        })
    }

    fn run(&self, args: &[&str]) -> HarnessResult<String> {
        let output = Command::new("tmux")
            .arg("-L")
            .arg(&self.socket)
            .args(args)
            .output()
            .map_err(|e| format!("failed to run tmux {args:?}: {e}"))?;
        if !output.status.success() {
            return Err(format!(
                "tmux {args:?} failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            ));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn kill(&mut self) -> HarnessResult<()> {
        self.killed = true;
        self.run(&["kill-server"]).map(|_| ())
    }
}

impl Drop for TmuxServer {
    fn drop(&mut self) {
        if !self.killed {
            let _ = self.run(&["kill-server"]);
        }
    }
}

fn command_exists(name: &str) -> HarnessResult<()> {
    let status = Command::new(name)
        .arg("-V")
        .output()
        .map_err(|e| format!("`{name}` is required for this test: {e}"))?
        .status;
    if status.success() {
        Ok(())
    } else {
        Err(format!("`{name} -V` exited with {status}"))
    }
}

fn unique_suffix() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    format!("{}-{now}", std::process::id())
}

#[tokio::test]
#[ignore = "on-demand tmux backend regression"]
async fn full_layout_on_private_socket() {
    let mut server = TmuxServer::new().expect("tmux server");
    let app = server.app();
    let project_dir = std::env::temp_dir();
    let spec = full_layout(&CommandContext {
        project_dir: project_dir.display().to_string(),
        prod_server: "deploy@devgrid.invalid".to_string(),
        prod_dir: "app".to_string(),
        project_name: "demo".to_string(),
    });

    let built = build_layout(
        &app,
        &spec,
        &BuildOptions {
            window_name: "devgrid-demo-full".to_string(),
            working_dir: project_dir.clone(),
            size: Some((200, 50)),
        },
    )
    .await
    .expect("build full layout");

    let windows = app.windows().await.expect("list windows");
    assert_eq!(windows.len(), 1);
    let window = &windows[0];
    assert_eq!(window.id, built.window.window_id);
    assert_eq!(window.tabs.len(), spec.tabs.len());

    for (tab_index, (tab, tab_spec)) in window.tabs.iter().zip(&spec.tabs).enumerate() {
        let built_tab = &built.tabs[tab_index];
        assert_eq!(tab.id, built_tab.tab_id);

        let ids: Vec<&str> = tab.sessions.iter().map(|s| s.id.as_str()).collect();
        let built_ids: Vec<&str> = built_tab
            .sessions
            .iter()
            .map(|s| s.session_id.as_str())
            .collect();
        assert_eq!(ids, built_ids, "tab {tab_index} session order");

        let roles: Vec<Option<&str>> = tab.sessions.iter().map(|s| s.tag(ROLE_TAG)).collect();
        let expected: Vec<Option<&str>> = tab_spec.panes.iter().map(|p| Some(p.role)).collect();
        assert_eq!(roles, expected, "tab {tab_index} roles");
        assert!(tab.sessions.iter().all(|s| s.tag(LAYOUT_TAG) == Some("full")));

        let border = server
            .run(&[
                "show-options",
                "-w",
                "-v",
                "-t",
                &tab.id,
                "pane-border-status",
            ])
            .expect("pane-border-status");
        assert_eq!(border, "top", "tab {tab_index} pane borders");
    }

    server.kill().expect("kill-server");
}
