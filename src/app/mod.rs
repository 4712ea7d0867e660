pub mod narrative;
pub mod page;
pub mod server;
mod state;

pub use page::render_page;
pub use server::{router, serve};
pub use state::App;
