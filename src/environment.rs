use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

/// External tools the post-generation steps rely on
#[derive(Debug, Clone)]
pub struct Environment {
    pub tools: HashMap<String, ToolInfo>,
    /// Editor command from `$VISUAL`/`$EDITOR`, `vi` otherwise
    pub editor: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInfo {
    pub available: bool,
    pub path: Option<PathBuf>,
}

impl Environment {
    pub fn detect() -> Self {
        let editor = editor_command();
        let mut env = Environment {
            tools: HashMap::new(),
            editor,
        };

        // The editor may carry arguments ("code --wait"); look up the program only
        let editor_program = env
            .editor
            .split_whitespace()
            .next()
            .unwrap_or("vi")
            .to_string();
        env.detect_tool("git");
        env.detect_tool(&editor_program);

        env
    }

    fn detect_tool(&mut self, name: &str) {
        let info = match which::which(name) {
            Ok(path) => ToolInfo {
                available: true,
                path: Some(path),
            },
            Err(_) => ToolInfo {
                available: false,
                path: None,
            },
        };
        tracing::debug!(tool = name, available = info.available, "detected tool");
        self.tools.insert(name.to_string(), info);
    }

    pub fn has(&self, tool: &str) -> bool {
        self.tools.get(tool).is_some_and(|info| info.available)
    }

    /// Resolved location of `tool`, when it was found
    pub fn tool_path(&self, tool: &str) -> Option<&Path> {
        self.tools.get(tool).and_then(|info| info.path.as_deref())
    }

    pub fn has_git(&self) -> bool {
        self.has("git")
    }

    pub fn has_editor(&self) -> bool {
        self.editor
            .split_whitespace()
            .next()
            .is_some_and(|program| self.has(program))
    }
}

fn editor_command() -> String {
    ["VISUAL", "EDITOR"]
        .iter()
        .filter_map(|var| env::var(var).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| "vi".to_string())
}
