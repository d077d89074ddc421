mod outcome;
mod step;
mod user;
mod wizard;

pub use outcome::*;
pub use step::*;
pub use user::*;
pub use wizard::*;
