//! Session-name classification used by stop.

/// Tab index holding production monitoring panes.
pub const PROD_TAB_INDEX: usize = 1;

/// Display label for a session name, or `None` if it is not a devgrid pane.
///
/// Patterns are checked in order; the first hit decides the label.
pub fn classify_session_name(name: &str, tab_index: usize) -> Option<&'static str> {
    const TABLE: [(&str, &str); 7] = [
        ("(bot)", "🤖 Bot"),
        ("(api)", "⚡ API"),
        ("(docker-compose)", "📊 DB Logs"),
        ("(node)", "🎨 Frontend"),
        ("(docker)", "📋 Status"),
        ("(bash)", "🔔 Deploy"),
        ("(sleep)", "🔔 Deploy"),
    ];
    if let Some((_, label)) = TABLE.iter().find(|(pattern, _)| name.contains(pattern)) {
        return Some(label);
    }
    if name.contains("(ssh)") {
        return Some(if tab_index == PROD_TAB_INDEX {
            "🌐 Prod Monitor"
        } else {
            "🌐 SSH"
        });
    }
    None
}

/// The session's foreground job is a bare interactive shell.
pub fn runs_idle_shell(name: &str) -> bool {
    name.ends_with("(bash)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_shell_is_only_a_trailing_bash_job() {
        assert!(runs_idle_shell("🤖 Bot (bash)"));
        assert!(!runs_idle_shell("🤖 Bot (bot)"));
        assert!(!runs_idle_shell("(bash) (node)"));
    }

    #[test]
    fn bot_is_bot_in_any_tab() {
        for tab in 0..3 {
            assert_eq!(classify_session_name("🤖 Bot (bot)", tab), Some("🤖 Bot"));
        }
    }

    #[test]
    fn ssh_label_depends_on_tab() {
        assert_eq!(classify_session_name("x (ssh)", 1), Some("🌐 Prod Monitor"));
        assert_eq!(classify_session_name("x (ssh)", 0), Some("🌐 SSH"));
        assert_eq!(classify_session_name("x (ssh)", 2), Some("🌐 SSH"));
    }

    #[test]
    fn compose_is_not_mistaken_for_docker() {
        assert_eq!(
            classify_session_name("📊 DB Logs (docker-compose)", 0),
            Some("📊 DB Logs")
        );
        assert_eq!(
            classify_session_name("📋 Status (docker)", 0),
            Some("📋 Status")
        );
    }

    #[test]
    fn first_pattern_wins() {
        assert_eq!(classify_session_name("(api) (node)", 0), Some("⚡ API"));
        assert_eq!(classify_session_name("deploy (sleep)", 0), Some("🔔 Deploy"));
    }

    #[test]
    fn unrelated_names_are_ignored() {
        assert_eq!(classify_session_name("vim", 0), None);
        assert_eq!(classify_session_name("bot", 0), None);
    }
}
