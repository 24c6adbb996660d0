//! Grocery list screen: display mode, category picker, draft input and the
//! capacity notice.

mod intent;
mod reducer;
mod render;
mod state;

pub use intent::ListIntent;
pub use reducer::ListReducer;
pub use render::{limit_notice, render_rows, LIMIT_NOTICE_MESSAGE, LIMIT_NOTICE_TITLE};
pub use state::ListScreenState;
