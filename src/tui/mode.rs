use std::path::PathBuf;

// State local to the tui: the bind-a-sound flow. Pressing 'm' opens a path
// prompt; Enter confirms it and the next pad key picks the pad, mirroring the
// original choose-file-then-map flow. Everything else lives in the session.
#[derive(Debug, Default)]
pub struct TuiState {
    /// Path being typed, while the prompt is open.
    pub prompt: Option<String>,
    /// Confirmed path waiting for a pad key.
    pub pending_bind: Option<PathBuf>,
}

impl TuiState {
    pub fn prompt_line(&self) -> Option<String> {
        if let Some(buf) = &self.prompt {
            return Some(format!("bind sound file: {buf}_"));
        }
        self.pending_bind
            .as_ref()
            .map(|p| format!("press a pad to bind {}", p.display()))
    }
}
