pub mod analysis_request;
pub mod analysis_result;
pub mod attempt_state;
pub mod meal_input;
pub mod user_profile;

pub use analysis_request::*;
pub use analysis_result::*;
pub use attempt_state::*;
pub use meal_input::*;
pub use user_profile::*;
