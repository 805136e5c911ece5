mod central_panel;
mod controls_panel;
mod top_bar;

pub use central_panel::central_panel;
pub use controls_panel::controls_panel;
pub use top_bar::top_bar;
