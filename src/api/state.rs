use crate::{auth::AuthStub, catalog::MenuCatalog, clients::OrderClient};

/// Shared state of the HTTP layer. Cheap to clone: the catalog is reference counted
/// and the order client is a channel handle.
#[derive(Clone)]
pub struct AppState {
    pub catalog: MenuCatalog,
    pub auth: AuthStub,
    pub orders: OrderClient,
}
