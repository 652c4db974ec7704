use crate::application::auth::dto::{LoginForm, SignupForm};
use crate::domain::errors::FieldErrors;

use super::{escape, input, textarea};

fn form_message(message: Option<&str>) -> String {
    message
        .map(|m| format!(r#"<p class="form-error">{}</p>"#, escape(m)))
        .unwrap_or_default()
}

pub fn signup_page(form: &SignupForm, errors: &FieldErrors, message: Option<&str>) -> String {
    format!(
        r#"<h1>Sign Up</h1>
    {message}
    <form method="POST" action="/signup" class="auth-form">
      {username}
      {first_name}
      {last_name}
      {description}
      {email}
      {password}
      {image}
      <button type="submit" class="btn">Sign Up</button>
    </form>"#,
        message = form_message(message),
        username = input("text", "username", "Username", &form.username, errors),
        first_name = input("text", "first_name", "First Name", &form.first_name, errors),
        last_name = input("text", "last_name", "Last Name", &form.last_name, errors),
        description = textarea(
            "description",
            "Description",
            form.description.as_deref().unwrap_or_default(),
            errors
        ),
        email = input("email", "email", "Email", &form.email, errors),
        // Never echo the password back.
        password = input("password", "password", "Password", "", errors),
        image = input(
            "text",
            "image_url",
            "Image URL",
            form.image_url.as_deref().unwrap_or_default(),
            errors
        ),
    )
}

pub fn login_page(form: &LoginForm, errors: &FieldErrors, message: Option<&str>) -> String {
    format!(
        r#"<h1>Welcome Back!</h1>
    {message}
    <form method="POST" action="/login" class="auth-form">
      {username}
      {password}
      <button type="submit" class="btn">Login</button>
    </form>"#,
        message = form_message(message),
        username = input("text", "username", "Username", &form.username, errors),
        password = input("password", "password", "Password", "", errors),
    )
}
