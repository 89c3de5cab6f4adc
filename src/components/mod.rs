//! Widget UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render view state and forward user intent through callbacks;
//! storage and network work stays in `app` and `state`.

pub mod favorites_panel;
pub mod result_list;
pub mod result_row;
pub mod search_box;
