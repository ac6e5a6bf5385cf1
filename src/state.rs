use std::sync::Arc;

use crate::auth::AuthService;
use crate::config::Config;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub auth: AuthService,
    pub config: Config,
}
