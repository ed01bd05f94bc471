pub mod deepgram;
pub mod segment;
pub mod turn;

pub use deepgram::*;
pub use segment::*;
pub use turn::*;
