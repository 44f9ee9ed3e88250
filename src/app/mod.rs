pub mod scene;
pub mod visualizer;

pub use scene::PlotScene;
pub use visualizer::Visualizer;
