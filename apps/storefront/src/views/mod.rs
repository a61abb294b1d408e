//! # Views
//!
//! Headless view-models for the product grid and the detail overlay. They
//! read the catalog and hand every cart mutation to
//! [`crate::commands::cart`]; none of them hold cart state.

mod product_detail;
mod product_list;

pub use product_detail::ProductDetailView;
pub use product_list::ProductListView;
