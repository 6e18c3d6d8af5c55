/// Which movie, if any, is open in the detail view.
#[derive(Debug, Default)]
pub struct Selection {
    active_id: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// Toggle semantics: selecting the already-active id deselects it.
    /// Returns true when the id is now active.
    pub fn select(&mut self, imdb_id: &str) -> bool {
        if self.active_id.as_deref() == Some(imdb_id) {
            self.active_id = None;
            false
        } else {
            self.active_id = Some(imdb_id.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.active_id = None;
    }
}
