//! Replays a [`LayoutSpec`] against a terminal application.

use std::path::PathBuf;
use tracing::debug;

use super::{LayoutSpec, PaneSpec};
use crate::error::AutomationError;
use crate::terminal::{CreatedWindow, TerminalApp, WindowRequest, LAYOUT_TAG, ROLE_TAG};

/// Window-level parameters for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub window_name: String,
    pub working_dir: PathBuf,
    pub size: Option<(u16, u16)>,
}

/// Handles of everything a build created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltLayout {
    pub window: CreatedWindow,
    pub tabs: Vec<BuiltTab>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltTab {
    pub tab_id: String,
    pub title: &'static str,
    pub sessions: Vec<BuiltSession>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltSession {
    pub role: &'static str,
    pub session_id: String,
}

impl BuiltLayout {
    pub fn session_count(&self) -> usize {
        self.tabs.iter().map(|tab| tab.sessions.len()).sum()
    }
}

/// Create the window, its tabs and panes, then select the first tab.
///
/// Every call is awaited in order. The first failure aborts the build and is
/// returned; whatever was created so far stays open.
pub async fn build_layout(
    app: &dyn TerminalApp,
    spec: &LayoutSpec,
    options: &BuildOptions,
) -> Result<BuiltLayout, AutomationError> {
    let window = app
        .create_window(&WindowRequest {
            name: options.window_name.clone(),
            working_dir: options.working_dir.clone(),
            size: options.size,
            show_session_names: true,
        })
        .await?;
    debug!(window = %window.window_id, name = %window.name, "created window");

    let mut tabs = Vec::with_capacity(spec.tabs.len());
    for (tab_index, tab) in spec.tabs.iter().enumerate() {
        let (tab_id, first_session) = if tab_index == 0 {
            (window.tab_id.clone(), window.session_id.clone())
        } else {
            let created = app.create_tab(&window.window_id, &options.working_dir).await?;
            (created.tab_id, created.session_id)
        };
        debug!(tab = %tab_id, title = tab.title, "building tab");

        let mut sessions: Vec<BuiltSession> = Vec::with_capacity(tab.panes.len());
        for (pane_index, pane) in tab.panes.iter().enumerate() {
            let session_id = match pane.split {
                None if pane_index == 0 => first_session.clone(),
                None => {
                    return Err(AutomationError::UnknownTarget(format!(
                        "pane `{}` has no split source",
                        pane.role
                    )))
                }
                Some(split) => {
                    let source = sessions.get(split.from).ok_or_else(|| {
                        AutomationError::UnknownTarget(format!(
                            "pane `{}` splits missing pane #{}",
                            pane.role, split.from
                        ))
                    })?;
                    app.split_session(&source.session_id, split.direction, &options.working_dir)
                        .await?
                }
            };
            seed_session(app, &session_id, pane, spec.kind.name()).await?;
            sessions.push(BuiltSession {
                role: pane.role,
                session_id,
            });
        }

        tabs.push(BuiltTab {
            tab_id,
            title: tab.title,
            sessions,
        });
    }

    app.activate_window(&window.window_id).await?;
    if let Some(first) = tabs.first() {
        app.select_tab(&first.tab_id).await?;
    }

    Ok(BuiltLayout { window, tabs })
}

async fn seed_session(
    app: &dyn TerminalApp,
    session_id: &str,
    pane: &PaneSpec,
    layout: &str,
) -> Result<(), AutomationError> {
    debug!(session = session_id, role = pane.role, command = %pane.command, "seeding pane");
    app.set_session_name(session_id, pane.label).await?;
    app.set_session_tag(session_id, ROLE_TAG, pane.role).await?;
    app.set_session_tag(session_id, LAYOUT_TAG, layout).await?;
    app.send_text(session_id, &format!("{}\n", pane.command))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{dev_layout, full_layout, CommandContext, LayoutKind, PaneSplit, TabLayout};
    use crate::terminal::SplitDirection;
    use crate::testsupport::{Call, FakeTerminal};

    fn ctx() -> CommandContext {
        CommandContext {
            project_dir: "/tmp/proj".to_string(),
            prod_server: "deploy@example.com".to_string(),
            prod_dir: "app".to_string(),
            project_name: "demo".to_string(),
        }
    }

    fn options() -> BuildOptions {
        BuildOptions {
            window_name: "demo-full".to_string(),
            working_dir: PathBuf::from("/tmp/proj"),
            size: Some((200, 50)),
        }
    }

    #[tokio::test]
    async fn full_layout_builds_two_tabs_in_creation_order() {
        let fake = FakeTerminal::new();
        let built = build_layout(&fake, &full_layout(&ctx()), &options())
            .await
            .expect("build");

        assert_eq!(built.tabs.len(), 2);
        assert_eq!(built.session_count(), 10);

        let windows = fake.snapshot();
        assert_eq!(windows.len(), 1);
        let local: Vec<&str> = windows[0].tabs[0]
            .sessions
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(
            local,
            vec![
                "🤖 Bot",
                "⚡ API",
                "📊 DB Logs",
                "🎨 Frontend",
                "🌐 Tunnel",
                "📋 Status"
            ]
        );
        assert_eq!(
            windows[0].tabs[1].sessions[3].tag(ROLE_TAG),
            Some("prod-status")
        );
        assert_eq!(windows[0].tabs[1].sessions[3].tag(LAYOUT_TAG), Some("full"));
    }

    #[tokio::test]
    async fn splits_follow_the_grid_recipe() {
        let fake = FakeTerminal::new();
        let built = build_layout(&fake, &full_layout(&ctx()), &options())
            .await
            .expect("build");
        let ids: Vec<&str> = built.tabs[0]
            .sessions
            .iter()
            .map(|s| s.session_id.as_str())
            .collect();

        let splits: Vec<(String, SplitDirection)> = fake
            .calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Split {
                    session, direction, ..
                } => Some((session, direction)),
                _ => None,
            })
            .take(5)
            .collect();
        assert_eq!(
            splits,
            vec![
                (ids[0].to_string(), SplitDirection::SideBySide),
                (ids[1].to_string(), SplitDirection::SideBySide),
                (ids[0].to_string(), SplitDirection::Stacked),
                (ids[1].to_string(), SplitDirection::Stacked),
                (ids[2].to_string(), SplitDirection::Stacked),
            ]
        );
    }

    #[tokio::test]
    async fn each_pane_gets_its_command_followed_by_newline() {
        let fake = FakeTerminal::new();
        let built = build_layout(&fake, &dev_layout(&ctx()), &options())
            .await
            .expect("build");
        let bot = &built.tabs[0].sessions[0];
        assert_eq!(bot.role, "bot");
        assert_eq!(
            fake.sent_text(&bot.session_id),
            "cd '/tmp/proj' && make bot\n"
        );
    }

    #[tokio::test]
    async fn build_ends_by_selecting_the_first_tab() {
        let fake = FakeTerminal::new();
        let built = build_layout(&fake, &full_layout(&ctx()), &options())
            .await
            .expect("build");
        let calls = fake.calls();
        assert_eq!(
            calls.last(),
            Some(&Call::SelectTab {
                tab: built.tabs[0].tab_id.clone()
            })
        );
        assert!(matches!(
            calls.first(),
            Some(Call::CreateWindow {
                size: Some((200, 50)),
                ..
            })
        ));
    }

    #[tokio::test]
    async fn broken_split_reference_aborts() {
        let mut layout = dev_layout(&ctx());
        layout.tabs = vec![TabLayout {
            title: "Broken",
            panes: vec![
                layout.tabs[0].panes[0].clone(),
                PaneSpec {
                    split: Some(PaneSplit {
                        from: 7,
                        direction: SplitDirection::Stacked,
                    }),
                    ..layout.tabs[0].panes[1].clone()
                },
            ],
        }];
        assert_eq!(layout.kind, LayoutKind::Dev);
        let fake = FakeTerminal::new();
        let err = build_layout(&fake, &layout, &options())
            .await
            .expect_err("bad split");
        assert!(err.to_string().contains("missing pane #7"), "got: {err}");
    }
}
