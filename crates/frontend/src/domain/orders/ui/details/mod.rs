mod view;

pub use view::OrderDetailsPanel;
