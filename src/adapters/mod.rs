// Adapters layer: concrete presenters that hand a scene to the outside world.

pub mod json;
pub mod text;

pub use json::JsonPresenter;
pub use text::TextPresenter;
