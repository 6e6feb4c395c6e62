//! The desktop window.
//!
//! A fixed bordered frame shows the current image, two buttons step through
//! the gallery, and a scrollable "Featured News" list opens articles in the
//! system browser when a title is clicked.
//!
//! - [`carousel`]: the wrapping image index
//! - [`render`]: decode and fit-to-frame scaling

pub mod carousel;
pub mod render;

use crate::config::DashboardConfig;
use crate::models::NewsItem;
use carousel::Carousel;
use iced::widget::image::Handle;
use iced::widget::{Column, Image, Space, button, column, container, row, scrollable, text};
use iced::{Border, Color, Element, Length, Task, Theme};
use std::path::PathBuf;
use tracing::{debug, info, warn};

pub const WINDOW_TITLE: &str = "NASA Image & News Dashboard";

const LINK_COLOR: Color = Color::from_rgb(0.0, 0.0, 1.0);

/// Dashboard state
pub struct Dashboard {
    images: Vec<PathBuf>,
    news: Vec<NewsItem>,
    carousel: Carousel,
    frame_width: u32,
    frame_height: u32,
    /// Scaled pixels for the current image; `None` renders an empty frame
    current: Option<Handle>,
}

/// Dashboard events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
    /// A news title was clicked
    OpenLink(Option<String>),
}

impl Dashboard {
    pub fn new(images: Vec<PathBuf>, news: Vec<NewsItem>, frame_width: u32, frame_height: u32) -> Self {
        let mut dashboard = Self {
            carousel: Carousel::new(images.len()),
            images,
            news,
            frame_width,
            frame_height,
            current: None,
        };
        dashboard.refresh_image();
        info!(
            images = dashboard.images.len(),
            news = dashboard.news.len(),
            "Dashboard initialized"
        );
        dashboard
    }

    #[cfg(test)]
    fn current_index(&self) -> usize {
        self.carousel.index()
    }

    fn refresh_image(&mut self) {
        if self.carousel.is_empty() {
            return;
        }
        let path = &self.images[self.carousel.index()];
        self.current = render::load_scaled(path, self.frame_width, self.frame_height);
    }

    /// Handle a message and update state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Next => {
                if self.carousel.next() {
                    debug!(index = self.carousel.index(), "Next image");
                    self.refresh_image();
                }
            }
            Message::Previous => {
                if self.carousel.previous() {
                    debug!(index = self.carousel.index(), "Previous image");
                    self.refresh_image();
                }
            }
            Message::OpenLink(Some(url)) => {
                info!(%url, "Opening article in browser");
                if let Err(e) = open::that(&url) {
                    warn!(%url, error = %e, "Failed to open browser");
                }
            }
            Message::OpenLink(None) => {
                warn!("News item has no link; nothing to open");
            }
        }

        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let picture: Element<'_, Message> = match &self.current {
            Some(handle) => Image::new(handle.clone()).into(),
            None => Space::new(Length::Shrink, Length::Shrink).into(),
        };

        let frame = container(picture)
            .center_x(Length::Fixed(self.frame_width as f32))
            .center_y(Length::Fixed(self.frame_height as f32))
            .style(|_theme: &Theme| container::Style {
                border: Border {
                    color: Color::BLACK,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..container::Style::default()
            });

        let navigation = row![
            button("← Previous")
                .on_press(Message::Previous)
                .width(Length::Fill),
            button("Next →").on_press(Message::Next).width(Length::Fill),
        ]
        .spacing(10);

        let news = self
            .news
            .iter()
            .fold(Column::new().padding(5), |list, item| {
                list.push(
                    button(text(item.title.as_str()).color(LINK_COLOR))
                        .style(button::text)
                        .padding(5)
                        .on_press(Message::OpenLink(item.url.clone())),
                )
                .push(text(item.description.as_str()))
                .push(Space::with_height(20))
            });

        column![
            frame,
            navigation,
            text("Featured News").size(18),
            scrollable(news).height(Length::Fill),
        ]
        .spacing(10)
        .padding(20)
        .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Open the window and block until it is closed.
pub fn run(config: &DashboardConfig, images: Vec<PathBuf>, news: Vec<NewsItem>) -> iced::Result {
    let dashboard = Dashboard::new(images, news, config.frame_width, config.frame_height);

    iced::application(WINDOW_TITLE, Dashboard::update, Dashboard::view)
        .theme(Dashboard::theme)
        .window_size((config.window_width as f32, config.window_height as f32))
        .centered()
        .run_with(move || (dashboard, Task::none()))
}
