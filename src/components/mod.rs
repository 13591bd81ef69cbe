//! Canvas engine and the form controls that feed it.

pub mod canvas;
mod edge_list_input;
mod grid_size_picker;
mod header;
mod route_form;

pub(crate) use canvas::SegmentCanvas;
pub(crate) use edge_list_input::EdgeListInput;
pub(crate) use grid_size_picker::GridSizePicker;
pub(crate) use header::Header;
pub(crate) use route_form::RouteForm;
