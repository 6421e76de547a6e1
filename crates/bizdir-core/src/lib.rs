pub mod app_config;
pub mod category;
pub mod config;
pub mod criteria;
mod error;
pub mod model;
pub mod projection;

pub use app_config::AppConfig;
pub use category::map_category;
pub use config::{load_app_config, load_app_config_from_env};
pub use criteria::{MinRating, SearchCriteria, SortKey};
pub use error::ConfigError;
pub use model::BusinessRecord;
pub use projection::{project, ProjectionCache};
