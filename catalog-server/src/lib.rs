//! Cafe Catalog Server
//!
//! Catalog service for cafes and their menu items: slug-addressed CRUD,
//! active-only filtering, substring search and offset/limit paging over an
//! embedded SurrealDB store.
//!
//! # Module structure
//!
//! ```text
//! catalog-server/src/
//! ├── core/          # configuration, state, HTTP server
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # store, models, repositories, query layer, slugs
//! └── utils/         # errors, logging, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use self::core::{Config, Server, ServerState};
pub use db::DbService;
pub use db::models::{Cafe, CafeCreate, CafeUpdate, MenuItem, MenuItemCreate, MenuItemUpdate};
pub use db::repository::{CafeRepository, Crud, MenuItemRepository, RepoError, RepoResult};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   ______      ____
  / ____/___ _/ __/__
 / /   / __ `/ /_/ _ \
/ /___/ /_/ / __/  __/
\____/\__,_/_/  \___/
   ______      __        __
  / ____/___ _/ /_____ _/ /___  ____ _
 / /   / __ `/ __/ __ `/ / __ \/ __ `/
/ /___/ /_/ / /_/ /_/ / / /_/ / /_/ /
\____/\__,_/\__/\__,_/_/\____/\__, /
                             /____/
    "#
    );
}
