pub mod error;
pub mod preprocess;
pub mod stamp;
pub mod traits;

pub use error::Error;
pub use traits::{RegionCapturer, RowAppender, TextRecognizer};
