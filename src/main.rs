use iced::Application;

fn main() -> iced::Result {
    // load environment from .env (optional)
    let _ = dotenvy::dotenv();
    env_logger::init();
    sentimento::client::gui::app::AnalyzerApp::run(iced::Settings {
        window: iced::window::Settings {
            size: iced::Size::new(760.0, 680.0),
            ..Default::default()
        },
        ..Default::default()
    })
}
