use iced::{Application, Command, Element, Theme};
use std::sync::Arc;

use crate::client::models::app_state::AnalyzerState;
use crate::client::models::messages::Message;
use crate::client::services::sentiment_service::SentimentService;
use crate::config::ClientConfig;

pub struct AnalyzerApp {
    pub state: AnalyzerState,
    pub service: Arc<SentimentService>,
}

impl Application for AnalyzerApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ();

    fn new(_flags: ()) -> (Self, Command<Message>) {
        let cfg = ClientConfig::from_env();
        log::info!("[APP] expecting sentiment service at {}", cfg.base_url());
        let app = AnalyzerApp {
            state: AnalyzerState::default(),
            service: Arc::new(SentimentService::new(&cfg)),
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        "Sentiment Analyzer".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::InputChanged(text) => {
                self.state.input_text = text;
                Command::none()
            }
            Message::SubmitAnalysis => {
                // Validation failures never reach the network; begin_submit
                // surfaces the error and returns None.
                match self.state.begin_submit() {
                    Some(text) => {
                        let svc = self.service.clone();
                        Command::perform(
                            async move {
                                match svc.analyze(&text).await {
                                    Ok(label) => Message::AnalysisResult {
                                        success: true,
                                        message: label,
                                    },
                                    Err(e) => {
                                        log::error!("[APP] analysis failed: {}", e);
                                        Message::AnalysisResult {
                                            success: false,
                                            message: e.to_string(),
                                        }
                                    }
                                }
                            },
                            |msg| msg,
                        )
                    }
                    None => Command::none(),
                }
            }
            Message::AnalysisResult { success, message } => {
                self.state.apply_outcome(if success { Ok(message) } else { Err(message) });
                Command::none()
            }
            Message::None => Command::none(),
        }
    }

    fn view(&self) -> Element<Message> {
        crate::client::gui::views::analyzer::view(&self.state)
    }
}
