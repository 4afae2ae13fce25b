mod logger;
pub mod palette;
pub mod progress;

pub use logger::init_logger;
pub use palette::Palette;
pub use progress::ProgressManager;
