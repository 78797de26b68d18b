/// View state for the analyzer page. Only one request can be in flight at a
/// time: the view drops the submit handler while `loading` is true.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerState {
    pub input_text: String,
    pub result: Option<String>,
    pub error_message: Option<String>,
    pub loading: bool,
}

impl AnalyzerState {
    /// Start a submission. Returns the trimmed text to send, or `None` when
    /// the input is empty after trimming (a validation error is surfaced and
    /// no request should be made).
    pub fn begin_submit(&mut self) -> Option<String> {
        let trimmed = self.input_text.trim();
        if trimmed.is_empty() {
            self.error_message = Some("Please enter a comment to analyze".to_string());
            return None;
        }
        let text = trimmed.to_string();
        self.result = None;
        self.error_message = None;
        self.loading = true;
        Some(text)
    }

    /// Apply the outcome of a finished request. Clears `loading` on both arms.
    pub fn apply_outcome(&mut self, outcome: Result<String, String>) {
        match outcome {
            Ok(label) => self.result = Some(label),
            Err(message) => self.error_message = Some(message),
        }
        self.loading = false;
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && !self.input_text.trim().is_empty()
    }
}
