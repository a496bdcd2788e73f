pub mod layout;

pub use layout::SceneLayout;
