use crate::application::cafes::dto::CafeForm;
use crate::domain::cafe::entity::{Cafe, CafeDetail};
use crate::domain::city::entity::City;
use crate::domain::errors::FieldErrors;

use super::{escape, input, select, textarea};

pub fn cafe_list(cafes: &[Cafe]) -> String {
    let items: String = if cafes.is_empty() {
        r#"<li class="empty">No cafes yet.</li>"#.to_string()
    } else {
        cafes
            .iter()
            .map(|cafe| {
                format!(
                    r#"<li class="cafe-item">
        <img src="{img}" alt="">
        <a href="/cafes/{id}">{name}</a>
      </li>"#,
                    img = escape(&cafe.image_url),
                    id = cafe.id,
                    name = escape(&cafe.name),
                )
            })
            .collect()
    };

    format!(
        r#"<h1>Our Cafes</h1>
    <ul class="cafe-list">
      {items}
    </ul>
    <p><a class="btn" href="/cafes/add">Add Cafe</a></p>"#
    )
}

/// Detail page. Like buttons are only rendered for a logged-in viewer and are
/// toggled by `cafe_like.js` once it has asked the API for the current state.
pub fn cafe_detail(detail: &CafeDetail, logged_in: bool) -> String {
    let cafe = &detail.cafe;

    let description = cafe
        .description
        .as_deref()
        .map(|d| format!(r#"<p class="description">{}</p>"#, escape(d)))
        .unwrap_or_default();

    let url = cafe
        .url
        .as_deref()
        .map(|u| format!(r#"<p><a href="{0}" rel="noopener">{0}</a></p>"#, escape(u)))
        .unwrap_or_default();

    let like_controls = if logged_in {
        r#"<div class="like-controls">
        <button id="like" class="btn" hidden>Like</button>
        <button id="unlike" class="btn" hidden>Unlike</button>
      </div>
      <script src="/static/js/cafe_like.js"></script>"#
    } else {
        ""
    };

    format!(
        r#"<article class="cafe-detail">
      <input type="hidden" id="cafe-id" value="{id}">
      <img class="cafe-image" src="{img}" alt="{name}">
      <h1>{name}</h1>
      {description}
      {url}
      <p class="address">{address}<br>{city_state}</p>
      {like_controls}
      <p><a href="/cafes/{id}/edit">Edit Cafe</a></p>
    </article>"#,
        id = cafe.id,
        img = escape(&cafe.image_url),
        name = escape(&cafe.name),
        description = description,
        url = url,
        address = escape(&cafe.address),
        city_state = escape(&detail.city_state()),
        like_controls = like_controls,
    )
}

/// Shared add/edit form.
pub fn cafe_form(
    heading: &str,
    action: &str,
    submit: &str,
    form: &CafeForm,
    cities: &[City],
    errors: &FieldErrors,
    message: Option<&str>,
) -> String {
    let choices: Vec<(String, String)> = cities
        .iter()
        .map(|c| (c.code.clone(), c.name.clone()))
        .collect();

    let message = message
        .map(|m| format!(r#"<p class="form-error">{}</p>"#, escape(m)))
        .unwrap_or_default();

    format!(
        r#"<h1>{heading}</h1>
    {message}
    <form method="POST" action="{action}" class="cafe-form">
      {name}
      {description}
      {url}
      {address}
      {city}
      {image}
      <button type="submit" class="btn">{submit}</button>
    </form>"#,
        heading = escape(heading),
        message = message,
        action = escape(action),
        name = input("text", "name", "Name", &form.name, errors),
        description = textarea(
            "description",
            "Description",
            form.description.as_deref().unwrap_or_default(),
            errors
        ),
        url = input("text", "url", "URL", form.url.as_deref().unwrap_or_default(), errors),
        address = input("text", "address", "Address", &form.address, errors),
        city = select("city_code", "City", &choices, &form.city_code, errors),
        image = input(
            "text",
            "image_url",
            "Image URL",
            form.image_url.as_deref().unwrap_or_default(),
            errors
        ),
        submit = escape(submit),
    )
}
