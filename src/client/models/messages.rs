#[derive(Debug, Clone)]
pub enum Message {
    None,
    InputChanged(String),
    SubmitAnalysis,
    AnalysisResult { success: bool, message: String },
}
