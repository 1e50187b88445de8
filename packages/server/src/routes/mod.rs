use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::config::AppConfig;
use crate::handlers;
use crate::state::AppState;

pub fn api_routes(config: &AppConfig) -> OpenApiRouter<AppState> {
    let mut router = OpenApiRouter::new()
        .routes(routes!(handlers::dish::add_delicious))
        .routes(routes!(handlers::dish::get_delicious_data))
        .routes(routes!(handlers::dish::menu_data))
        .routes(routes!(handlers::dish::delete_menu))
        .routes(routes!(handlers::vote::add_like))
        .routes(routes!(handlers::vote::today_menu))
        .routes(routes!(handlers::credential::get_psw_data))
        .routes(routes!(handlers::credential::add_psw_account))
        .routes(routes!(handlers::credential::delete_psw_account));

    if config.login.mock_enabled {
        router = router.routes(routes!(handlers::login::login));
    }

    let upload = OpenApiRouter::new()
        .routes(routes!(handlers::image::upload_image))
        .layer(handlers::image::upload_body_limit(
            config.storage.max_upload_size,
        ));

    router.merge(upload)
}
