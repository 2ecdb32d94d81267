//! Passform Linux App
//!
//! This is the Linux desktop app for passform, built with the Iced GUI
//! framework. It presents the sign-up form with live password strength
//! feedback, confirm-password matching, and a visibility toggle.

use iced::{
    widget::{column, container, svg, text, text_input, Space},
    Alignment, Element, Length, Size, Task, Theme,
};
use tracing::{error, info};

mod config;
mod logging;
mod ui;

use config::{AppConfig, ConfigManager};
use passform_shared::StrengthEvaluator;
use ui::theme;
use ui::{create_passform_theme, utils};
use ui::{SignUpMessage, SignUpView};

/// Main application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Configuration
    ConfigLoaded(Result<AppConfig, String>),

    // Sign-up view messages
    SignUp(SignUpMessage),
}

/// Application state
#[derive(Debug)]
enum AppState {
    Loading,
    SignUpActive(SignUpView),
    Error(String),
}

/// Main application structure
struct PassformApp {
    state: AppState,
    theme: Theme,
}

impl PassformApp {
    fn new() -> (Self, Task<Message>) {
        info!("Initializing passform Linux app");

        let app = Self {
            state: AppState::Loading,
            theme: create_passform_theme(),
        };

        let load_config_task = Task::perform(Self::load_config_async(), Message::ConfigLoaded);

        (app, load_config_task)
    }

    fn title(&self) -> String {
        match &self.state {
            AppState::Loading => "Passform - Loading...".to_string(),
            AppState::SignUpActive(view) if view.is_complete() => "Passform - Welcome".to_string(),
            AppState::SignUpActive(_) => "Passform - Sign Up".to_string(),
            AppState::Error(_) => "Passform - Error".to_string(),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ConfigLoaded(Ok(config)) => {
                info!("Configuration loaded successfully");

                // Initialize typography with the configured font size
                utils::typography::init_font_size(config.ui.font_size);

                let evaluator = StrengthEvaluator::new(config.policy.strength_policy());
                self.state = AppState::SignUpActive(SignUpView::new(evaluator));

                text_input::focus(text_input::Id::new("first_name"))
            }

            Message::ConfigLoaded(Err(message)) => {
                error!("Failed to load configuration: {}", message);
                self.state = AppState::Error(format!("Configuration error: {}", message));
                Task::none()
            }

            Message::SignUp(sign_up_message) => {
                if let AppState::SignUpActive(view) = &mut self.state {
                    view.update(sign_up_message).map(Message::SignUp)
                } else {
                    Task::none()
                }
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        match &self.state {
            AppState::Loading => centered(
                text("Loading...")
                    .size(utils::typography::medium_text_size())
                    .into(),
            ),

            AppState::SignUpActive(view) => view.view().map(Message::SignUp),

            AppState::Error(message) => centered(
                column![
                    svg(theme::error_icon())
                        .width(Length::Fixed(48.0))
                        .height(Length::Fixed(48.0)),
                    Space::with_height(Length::Fixed(10.0)),
                    text("Something went wrong").size(utils::typography::header_text_size()),
                    text(message).size(utils::typography::normal_text_size()),
                ]
                .spacing(10)
                .align_x(Alignment::Center)
                .into(),
            ),
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    async fn load_config_async() -> Result<AppConfig, String> {
        ConfigManager::new()
            .map(|manager| manager.config().clone())
            .map_err(|e| e.to_string())
    }
}

/// Center content in the window
fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .into()
}

fn main() -> anyhow::Result<()> {
    logging::initialize_default_logging()?;

    info!("Starting passform Linux app");

    iced::application(PassformApp::title, PassformApp::update, PassformApp::view)
        .theme(PassformApp::theme)
        .window(iced::window::Settings {
            size: Size::new(520.0, 720.0),
            min_size: Some(Size::new(420.0, 560.0)),
            position: iced::window::Position::Centered,
            ..Default::default()
        })
        .run_with(PassformApp::new)?;

    Ok(())
}
