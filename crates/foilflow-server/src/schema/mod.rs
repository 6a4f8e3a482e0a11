//! API request and response types.
//!
//! Wizard endpoints answer with [`foilflow_core::WizardView`] and the
//! inspector with [`foilflow_layout::InspectorView`] directly; the types here
//! cover request bodies and the responses that wrap more than one value.

pub mod content;
pub mod map;
pub mod wizard;
