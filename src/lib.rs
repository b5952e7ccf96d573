mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{dataset, theme};

use crate::domain::use_cases::catalog::CatalogHandler;
use crate::infrastructure::dataset::Dataset;
use crate::infrastructure::theme::ThemeStore;
use crate::interfaces::repositories::in_memory::InMemoryCatalog;

pub struct AppState {
    pub catalog: AppCatalogHandler,
    pub theme: ThemeStore,
}

pub type AppCatalogHandler = CatalogHandler<InMemoryCatalog>;

impl AppState {
    pub fn new(config: &settings::AppConfig, dataset: Dataset) -> Self {
        let repo = InMemoryCatalog::new(dataset);
        let catalog = CatalogHandler::new(repo);

        AppState {
            catalog,
            theme: ThemeStore::new(config.initial_theme()),
        }
    }
}
