//! App Router

use salvo::Router;

use crate::{healthcheck, menu_items};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("v1/menu-items")
                .get(menu_items::index::handler)
                .post(menu_items::create::handler)
                .push(
                    Router::with_path("{menu_item}")
                        .get(menu_items::get::handler)
                        .patch(menu_items::update::handler)
                        .delete(menu_items::delete::handler),
                ),
        )
}
