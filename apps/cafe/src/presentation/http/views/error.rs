use axum::http::StatusCode;

use super::{SITE_NAME, escape};

/// Bare error page. Rendered without the navbar because it may be produced
/// before the session has been read.
pub fn error_page(status: StatusCode, message: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{code} {reason} | {site}</title>
  <link rel="stylesheet" href="/static/css/style.css">
</head>
<body>
  <main class="container error-page">
    <h1>{code} {reason}</h1>
    <p>{message}</p>
    <p><a href="/">Back to {site}</a></p>
  </main>
</body>
</html>
"#,
        code = status.as_u16(),
        reason = reason,
        site = SITE_NAME,
        message = escape(message),
    )
}
