//! Human-readable status line for a tool call the assistant is making.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolInvocationState {
    PartialCall,
    Call,
    Result,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInvocation {
    pub tool_call_id: String,
    pub tool_name: String,
    pub state: ToolInvocationState,
    #[serde(default)]
    pub args: Option<Map<String, Value>>,
    #[serde(default)]
    pub result: Option<Value>,
}

impl ToolInvocation {
    pub fn is_complete(&self) -> bool {
        self.state == ToolInvocationState::Result
    }

    fn arg_str(&self, key: &str) -> Option<&str> {
        self.args.as_ref()?.get(key)?.as_str()
    }
}

/// What the chat UI needs to draw the status badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolBadge {
    pub label: String,
    pub complete: bool,
}

pub fn tool_badge(invocation: &ToolInvocation) -> ToolBadge {
    ToolBadge {
        label: tool_label(invocation),
        complete: invocation.is_complete(),
    }
}

#[derive(Debug, Clone, Copy)]
enum FileAction {
    Create,
    Edit,
    View,
    Rename,
    Delete,
}

impl FileAction {
    fn from_call(tool_name: &str, command: &str) -> Option<Self> {
        match (tool_name, command) {
            ("str_replace_editor", "create") => Some(Self::Create),
            ("str_replace_editor", "str_replace" | "insert") => Some(Self::Edit),
            ("str_replace_editor", "view") => Some(Self::View),
            ("file_manager", "rename") => Some(Self::Rename),
            ("file_manager", "delete") => Some(Self::Delete),
            _ => None,
        }
    }

    /// (in progress, done)
    fn verbs(self) -> (&'static str, &'static str) {
        match self {
            Self::Create => ("Creating", "Created"),
            Self::Edit => ("Editing", "Edited"),
            Self::View => ("Viewing", "Viewed"),
            Self::Rename => ("Renaming", "Renamed"),
            Self::Delete => ("Deleting", "Deleted"),
        }
    }
}

pub fn tool_label(invocation: &ToolInvocation) -> String {
    let complete = invocation.is_complete();

    let file_action = invocation
        .arg_str("command")
        .and_then(|command| FileAction::from_call(&invocation.tool_name, command))
        .zip(invocation.arg_str("path").filter(|path| !path.is_empty()));

    if let Some((action, path)) = file_action {
        let (ongoing, done) = action.verbs();
        let verb = if complete { done } else { ongoing };
        return format!("{verb} {}", basename(path));
    }

    if complete {
        format!("Ran {}", invocation.tool_name)
    } else {
        format!("Running {}", invocation.tool_name)
    }
}

/// Last path segment, accepting both separators. Falls back to the input when
/// the path ends in a separator.
fn basename(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    match normalized.rsplit('/').next() {
        Some(last) if !last.is_empty() => last.to_owned(),
        _ => path.to_owned(),
    }
}
