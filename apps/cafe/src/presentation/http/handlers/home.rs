use axum::response::Response;

use crate::presentation::http::{context::PageContext, views};

pub async fn homepage(ctx: PageContext) -> Response {
    ctx.render("Home", &views::home::homepage())
}
