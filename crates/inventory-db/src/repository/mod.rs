//! # Repository Module
//!
//! Database access for the inventory system.
//!
//! ## Store Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Front end command                                                     │
//! │       │                                                                 │
//! │       │  db.products().search("wid")                                   │
//! │       ▼                                                                 │
//! │  ProductStore                                                          │
//! │  ├── create / get_by_id / update / delete                              │
//! │  ├── list / list_low_stock / search                                    │
//! │  └── count / stats / delete_all                                        │
//! │       │                                                                 │
//! │       │  one SQL statement per call                                    │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Stores
//!
//! - [`ProductStore`](product::ProductStore) - Product CRUD, search and aggregates

pub mod product;
