//! App Router

use salvo::Router;

use crate::{company_codes, healthcheck, queries};

/// Every application route. Static segments are registered before `{id}` so
/// that they are not parsed as identifiers.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("health").get(healthcheck::handler))
        .push(
            Router::with_path("api")
                .push(
                    Router::with_path("company-codes")
                        .get(company_codes::index::handler)
                        .post(company_codes::create::handler)
                        .push(Router::with_path("stats").get(company_codes::stats::handler))
                        .push(Router::with_path("options").get(company_codes::options::handler))
                        .push(
                            Router::with_path("search/{company_code}")
                                .get(company_codes::search::handler),
                        )
                        .push(
                            Router::with_path("{id}")
                                .get(company_codes::get::handler)
                                .put(company_codes::update::handler)
                                .delete(company_codes::delete::handler),
                        ),
                )
                .push(
                    Router::with_path("sql")
                        .push(Router::with_path("execute").post(queries::execute::handler))
                        .push(Router::with_path("schema").get(queries::schema::handler)),
                ),
        )
}
