//! Testing utilities for code built on ironcollect.
//!
//! - **Assertions**: compare collections with expected results, with
//!   messages that print both sides
//! - **Fixtures**: small JSON record sets used throughout the test suite
//!
//! # Quick Start
//!
//! ```
//! use ironcollect::*;
//! use ironcollect::testing::*;
//!
//! let orders = sample_orders();
//! let open = orders.where_is("status", &serde_json::json!("open"));
//! assert_all(open.as_slice(), |o| o["status"] == "open");
//! assert_partition(
//!     orders.as_slice(),
//!     open.as_slice(),
//!     orders.where_is("status", &serde_json::json!("closed")).as_slice(),
//! );
//! ```

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
