#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod editor;
pub mod error;
pub mod export;
pub mod input;
pub mod panels;
pub mod raster;
pub mod renderer;
pub mod state;
pub mod stroke;
pub mod style;
pub mod surface;
pub mod text;
pub mod tools;
pub mod util;
pub mod view;

pub use app::SketchApp;
pub use command::{Command, HistoryLog, MAX_HISTORY};
pub use config::SketchConfig;
pub use editor::Editor;
pub use error::{PaintError, PaintResult};
pub use renderer::Renderer;
pub use stroke::StrokeSession;
pub use style::{FillMode, Style};
pub use surface::{Snapshot, Surface};
pub use text::{TextEntryRequest, TextRenderer};
pub use tools::ToolKind;
pub use view::ViewTransform;
