use super::Sequence;

/// A frozen copy of a current sequence, identified by its save time.
/// Never mutated or deleted after creation.
#[derive(Clone, Debug)]
pub struct SavedSequence {
    pub id: String,
    pub actions: Sequence,
}

// In-memory store of saved sequences plus the playback/export selection.
// Selection `None` means the current (unsaved) sequence.
#[derive(Debug, Default)]
pub struct SequenceStore {
    saved: Vec<SavedSequence>,
    selected: Option<usize>,
}

impl SequenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Freeze a copy of `current`. Empty sequences are not saved.
    /// Returns the new id.
    pub fn save(&mut self, current: &Sequence) -> Option<String> {
        if current.is_empty() {
            return None;
        }
        let mut id = chrono::Local::now()
            .format("%Y%m%d-%H%M%S%.3f")
            .to_string();
        // two saves inside the same millisecond still need distinct ids
        while self.saved.iter().any(|s| s.id == id) {
            id.push('+');
        }
        self.saved.push(SavedSequence {
            id: id.clone(),
            actions: current.clone(),
        });
        Some(id)
    }

    pub fn selected(&self) -> Option<&SavedSequence> {
        self.selected.map(|i| &self.saved[i])
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_label(&self) -> String {
        match self.selected() {
            Some(s) => s.id.clone(),
            None => "current".to_string(),
        }
    }

    // cycle: current -> saved[0] -> ... -> saved[n-1] -> current
    pub fn select_next(&mut self) {
        self.selected = match self.selected {
            None if self.saved.is_empty() => None,
            None => Some(0),
            Some(i) if i + 1 < self.saved.len() => Some(i + 1),
            Some(_) => None,
        };
    }

    pub fn select_prev(&mut self) {
        self.selected = match self.selected {
            None if self.saved.is_empty() => None,
            None => Some(self.saved.len() - 1),
            Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    pub fn ids(&self) -> Vec<String> {
        self.saved.iter().map(|s| s.id.clone()).collect()
    }
}
