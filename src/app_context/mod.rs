use crate::map::locations::LocationPool;
use crate::storage::interface::IRoundStorage;
use crate::storage::rounds::HashMapRoundsStorage;
use crate::view::models::ViewConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext<RS: IRoundStorage> {
    pub rounds: RS,
    pub locations: Arc<LocationPool>,
    pub view: Arc<ViewConfig>,
}

pub struct RequestContext {
    pub session_id: String,
}

pub fn init(locations: LocationPool, view: ViewConfig) -> AppContext<HashMapRoundsStorage> {
    AppContext {
        rounds: HashMapRoundsStorage::default(),
        locations: Arc::new(locations),
        view: Arc::new(view),
    }
}
