//! Projection of statement stores into rectangular tables
//!
//! - `table`: the generic subject-per-row, predicate-per-column projection
//! - `bag`: member lists of `rdf:Bag` collections in numeric member order

pub mod bag;
pub mod table;

pub use bag::{collections_table, flatten_bag, member_index};
pub use table::{join_objects, project, Table};
