//! serein-feed: feed de afirmaciones estilo "swipe".
//!
//! Construye un feed barajado (Fisher–Yates) a partir del catálogo, con
//! fondo asignado cíclicamente por posición, filtrado por categoría y por
//! acceso premium. Favoritos y el flag "ya vio la pista de swipe" persisten
//! mediante el mismo seam `StateStore` del core.

pub mod backgrounds;
pub mod catalog;
pub mod feed;

pub use backgrounds::{background_for_index, BackgroundConfig};
pub use catalog::{builtin_catalog, Affirmation};
pub use feed::{build_feed, FeedItem, FeedPrefs};
