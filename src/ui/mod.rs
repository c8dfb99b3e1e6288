//! UI 控件系统

mod widget;
mod panel;
mod button;
mod label;
mod progress_bar;
mod icon;
pub mod icons;
mod tree;

pub use widget::{render_widget, Style, Widget, WidgetId};
pub use panel::Panel;
pub use button::Button;
pub use label::Label;
pub use progress_bar::ProgressBar;
pub use icon::Icon;
pub use icons::IconSet;
pub use tree::{Selection, WidgetTree};
