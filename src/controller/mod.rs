mod format;
mod health_check;
mod logout;
mod password;
mod profile;

pub use format::*;
pub use health_check::*;
pub use logout::*;
pub use password::*;
pub use profile::*;
