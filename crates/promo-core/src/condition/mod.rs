//! Condition tree definitions
//!
//! A rule's condition is a rooted tree. Each node is either a *combine*
//! node (a boolean aggregator over an ordered list of child nodes) or a
//! *leaf* node (one entity attribute compared against a configured value).
//! Leaf and combine nodes are structurally interchangeable from the
//! parent's perspective.
//!
//! # Serialized form
//!
//! ```yaml
//! conditions:
//!   type: combine
//!   aggregator: all
//!   children:
//!     - type: cart
//!       attribute: base_subtotal
//!       operator: gteq
//!       value: 100
//!     - type: combine
//!       aggregator: any
//!       children:
//!         - type: product
//!           attribute: sku
//!           operator: in
//!           value: ["WS-01", "WS-02"]
//! ```
//!
//! # Supported operators
//! - `eq` / `neq` (equality)
//! - `gt` / `gteq` / `lt` / `lteq` (numeric comparison)
//! - `in` / `notin` (set membership)
//! - `contains` (substring / element containment)

mod operator;
mod tree;

pub use operator::Operator;
pub use tree::{Aggregator, Combine, Condition, Leaf, Scope};
