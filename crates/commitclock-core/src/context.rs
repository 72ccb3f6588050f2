use commitclock_config::Config;
use commitclock_ghapi_interface::ApiService;

use crate::CoreModule;

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub api_service: &'a (dyn ApiService + 'a),
}
