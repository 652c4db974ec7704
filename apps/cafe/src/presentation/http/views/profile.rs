use crate::application::profile::dto::ProfileForm;
use crate::domain::cafe::entity::Cafe;
use crate::domain::errors::FieldErrors;
use crate::domain::user::entity::User;

use super::{escape, input, textarea};

pub fn profile_page(user: &User, liked: &[Cafe]) -> String {
    let likes: String = if liked.is_empty() {
        "<p>You have no liked cafes!</p>".to_string()
    } else {
        let items: String = liked
            .iter()
            .map(|cafe| {
                format!(
                    r#"<li><a href="/cafes/{}">You like {}</a></li>"#,
                    cafe.id,
                    escape(&cafe.name)
                )
            })
            .collect();
        format!(r#"<ul class="liked-cafes">{items}</ul>"#)
    };

    let description = user
        .description
        .as_deref()
        .map(|d| format!("<p>{}</p>", escape(d)))
        .unwrap_or_default();

    format!(
        r#"<section class="profile">
      <img class="profile-image" src="{img}" alt="">
      <h1>{full_name}</h1>
      <p class="username">@{username}</p>
      <p>{email}</p>
      {description}
      <p><a class="btn" href="/profile/edit">Edit Your Profile</a></p>
      <h2>Liked Cafes</h2>
      {likes}
    </section>"#,
        img = escape(&user.image_url),
        full_name = escape(&user.full_name()),
        username = escape(&user.username),
        email = escape(&user.email),
        description = description,
        likes = likes,
    )
}

pub fn profile_edit_page(form: &ProfileForm, errors: &FieldErrors, message: Option<&str>) -> String {
    let message = message
        .map(|m| format!(r#"<p class="form-error">{}</p>"#, escape(m)))
        .unwrap_or_default();

    format!(
        r#"<h1>Edit Profile</h1>
    {message}
    <form method="POST" action="/profile/edit" class="profile-form">
      {first_name}
      {last_name}
      {description}
      {email}
      {image}
      <button type="submit" class="btn">Save</button>
    </form>"#,
        message = message,
        first_name = input("text", "first_name", "First Name", &form.first_name, errors),
        last_name = input("text", "last_name", "Last Name", &form.last_name, errors),
        description = textarea(
            "description",
            "Description",
            form.description.as_deref().unwrap_or_default(),
            errors
        ),
        email = input("email", "email", "Email", &form.email, errors),
        image = input(
            "text",
            "image_url",
            "Image URL",
            form.image_url.as_deref().unwrap_or_default(),
            errors
        ),
    )
}
