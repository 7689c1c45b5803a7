//! Orchestration services for the command surface.

mod handler;
mod render;

pub use handler::CommandService;
pub use render::ReplyRenderer;
