//! Core application state and iced implementation
//!
//! Elm-architecture product search card: the catalog loads once at
//! boot, the filter runs on explicit trigger only, and the view is a
//! pure function of the state cells {catalog, query, results, error}.

use std::collections::HashMap;

use iced::widget::{column, container, image, keyed_column, scrollable, text, Space};
use iced::{Background, Border, Element, Length, Task, Theme};
use reqwest::Client;

use crate::catalog::loader::{self, CatalogSource, LoadError};
use crate::catalog::types::Product;
use crate::search;
use crate::ui::product_card::product_card;
use crate::ui::search_bar::search_section;
use crate::ui::theme::DarkTheme;

// ============================================================================
// Application State
// ============================================================================

pub struct App {
    client: Client,
    catalog: Vec<Product>,
    query: String,
    results: Vec<Product>,
    error: Option<String>,
    images: HashMap<u32, image::Handle>,
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    SearchSubmitted,
    CatalogLoaded(Result<Vec<Product>, LoadError>),
    ImageFetched(u32, Option<image::Handle>),
}

impl App {
    fn new() -> Self {
        Self {
            client: Client::new(),
            catalog: Vec::new(),
            query: String::new(),
            results: Vec::new(),
            error: None,
            images: HashMap::new(),
        }
    }

    /// Initial state plus the one-shot catalog load.
    pub fn boot(source: CatalogSource) -> (Self, Task<Message>) {
        let app = Self::new();
        let client = app.client.clone();
        let task = Task::perform(
            async move { loader::fetch_catalog(&client, &source).await },
            Message::CatalogLoaded,
        );
        (app, task)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                // Editing never filters; only the explicit trigger does.
                self.query = query;
                Task::none()
            }

            Message::SearchSubmitted => {
                let matches = search::filter_products(&self.catalog, &self.query);
                if matches.is_empty() {
                    self.results.clear();
                    self.error = Some(search::NO_MATCH_MESSAGE.to_string());
                } else {
                    self.results = matches;
                    self.error = None;
                }
                Task::none()
            }

            Message::CatalogLoaded(Ok(products)) => {
                tracing::info!("catalog loaded: {} products", products.len());
                let fetches = self.stage_images(&products);
                self.catalog = products;
                Task::batch(fetches)
            }

            Message::CatalogLoaded(Err(error)) => {
                // Loader failures never reach the user; the catalog
                // just stays empty.
                tracing::error!("{error}");
                Task::none()
            }

            Message::ImageFetched(id, Some(handle)) => {
                self.images.insert(id, handle);
                Task::none()
            }

            Message::ImageFetched(_, None) => Task::none(),
        }
    }

    /// Local image paths resolve to handles immediately; remote URLs
    /// get one fetch task each.
    fn stage_images(&mut self, products: &[Product]) -> Vec<Task<Message>> {
        let mut fetches = Vec::new();

        for product in products {
            if product.image.is_empty() {
                continue;
            }

            if product.image.starts_with("http://") || product.image.starts_with("https://") {
                let client = self.client.clone();
                let id = product.id;
                let url = product.image.clone();
                fetches.push(Task::perform(
                    async move { (id, loader::fetch_image(&client, &url).await) },
                    |(id, handle)| Message::ImageFetched(id, handle),
                ));
            } else {
                self.images
                    .insert(product.id, image::Handle::from_path(&product.image));
            }
        }

        fetches
    }

    // ========================================================================
    // View
    // ========================================================================

    pub fn view(&self) -> Element<'_, Message> {
        let heading = text("Product Search").size(26).color(DarkTheme::TEXT);

        let card = container(
            column![
                search_section(&self.query, Message::QueryChanged, Message::SearchSubmitted),
                self.results_section(),
            ]
            .spacing(16),
        )
        .padding(16)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            border: Border {
                color: DarkTheme::BORDER,
                width: 1.0,
                radius: 12.0.into(),
            },
            ..Default::default()
        });

        container(column![heading, card].spacing(14))
            .padding(20)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Background::Color(DarkTheme::BACKGROUND)),
                ..Default::default()
            })
            .into()
    }

    /// Cards when the last search matched, the error line when it did
    /// not, and nothing at all before the first search.
    fn results_section(&self) -> Element<'_, Message> {
        if !self.results.is_empty() {
            let cards = keyed_column(self.results.iter().map(|product| {
                (
                    product.id,
                    product_card(product, self.images.get(&product.id)),
                )
            }))
            .spacing(10);

            scrollable(cards).height(Length::Fill).into()
        } else if let Some(error) = &self.error {
            container(text(error).size(14).color(DarkTheme::ERROR))
                .width(Length::Fill)
                .center_x(Length::Fill)
                .padding(12)
                .into()
        } else {
            Space::with_height(Length::Fill).into()
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}
