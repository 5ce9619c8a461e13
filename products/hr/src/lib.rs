//! HR module: the employee roster shown by the directory viewer.
//!
//! [`Roster`] owns the displayed rows and is only ever mutated through
//! [`Roster::replace_all`]. [`start_load`] runs the fetch off the caller's task
//! and hands the single outcome back through [`PendingLoad`].

mod load;
mod roster;

pub use load::{LoadError, PendingLoad, apply, start_load};
pub use roster::{EmployeeRow, Roster, RosterChange, RosterState, RowIndexError};
