//! Pure data structures shared by the catalog, the order store, the auth stub, and the
//! HTTP layer. [`Order`] is additionally an [`ActorEntity`](crate::framework::ActorEntity).

pub mod menu;
pub mod order;
pub mod user;

pub use menu::*;
pub use order::*;
pub use user::*;
