pub mod links;
pub mod map;
pub mod model;
pub mod normalize;
pub mod selection;
pub mod store;
pub mod view;

pub use links::{LinkSpan, Span, linkify};
pub use map::{Location, LocationKind, MapView, derive_map};
pub use model::{DayRecord, Language, RouteOption};
pub use normalize::normalize_days;
pub use selection::{DaySelection, Viewport, viewport_for};
pub use store::{DataLoader, Dataset, ItineraryStore, LoadError};
pub use view::{Switch, ViewState};
