//! Server-rendered HTML.
//!
//! Pages are assembled from small string builders. Every interpolated value
//! goes through [`escape`].

pub mod auth;
pub mod cafes;
pub mod error;
pub mod home;
pub mod profile;

use crate::domain::errors::FieldErrors;
use crate::presentation::http::context::PageContext;

pub const SITE_NAME: &str = "Cafe Directory";

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

fn navbar(ctx: &PageContext) -> String {
    let account = match &ctx.user {
        Some(user) => format!(
            r#"<li class="user-name">{}</li>
      <li><a href="/profile">Profile</a></li>
      <li><form method="POST" action="/logout" class="inline"><button type="submit" class="link">Log Out</button></form></li>"#,
            escape(&user.full_name())
        ),
        None => r#"<li><a href="/signup">Sign Up</a></li>
      <li><a href="/login">Log In</a></li>"#
            .to_string(),
    };

    format!(
        r#"<nav class="navbar">
    <a class="brand" href="/">{site}</a>
    <ul>
      <li><a href="/cafes">Cafes</a></li>
      {account}
    </ul>
  </nav>"#,
        site = SITE_NAME,
        account = account,
    )
}

pub fn layout(ctx: &PageContext, title: &str, body: &str) -> String {
    let flash = ctx
        .flash
        .as_deref()
        .map(|m| format!(r#"<div class="alert">{}</div>"#, escape(m)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title} | {site}</title>
  <link rel="stylesheet" href="/static/css/style.css">
</head>
<body>
  {navbar}
  <main class="container">
    {flash}
    {body}
  </main>
</body>
</html>
"#,
        title = escape(title),
        site = SITE_NAME,
        navbar = navbar(ctx),
        flash = flash,
        body = body,
    )
}

fn field_errors(name: &str, errors: &FieldErrors) -> String {
    errors
        .get(name)
        .iter()
        .map(|m| format!(r#"<small class="error">{}</small>"#, escape(m)))
        .collect()
}

pub(crate) fn input(kind: &str, name: &str, label: &str, value: &str, errors: &FieldErrors) -> String {
    format!(
        r#"<div class="field">
      <label for="{name}">{label}</label>
      <input type="{kind}" id="{name}" name="{name}" value="{value}">
      {errors}
    </div>"#,
        kind = kind,
        name = name,
        label = escape(label),
        value = escape(value),
        errors = field_errors(name, errors),
    )
}

pub(crate) fn textarea(name: &str, label: &str, value: &str, errors: &FieldErrors) -> String {
    format!(
        r#"<div class="field">
      <label for="{name}">{label}</label>
      <textarea id="{name}" name="{name}">{value}</textarea>
      {errors}
    </div>"#,
        name = name,
        label = escape(label),
        value = escape(value),
        errors = field_errors(name, errors),
    )
}

/// `<select>` with `(value, label)` choices.
pub(crate) fn select(
    name: &str,
    label: &str,
    choices: &[(String, String)],
    selected: &str,
    errors: &FieldErrors,
) -> String {
    let options: String = choices
        .iter()
        .map(|(value, text)| {
            let marker = if value == selected { " selected" } else { "" };
            format!(
                r#"<option{} value="{}">{}</option>"#,
                marker,
                escape(value),
                escape(text)
            )
        })
        .collect();

    format!(
        r#"<div class="field">
      <label for="{name}">{label}</label>
      <select id="{name}" name="{name}">{options}</select>
      {errors}
    </div>"#,
        name = name,
        label = escape(label),
        options = options,
        errors = field_errors(name, errors),
    )
}
