use cafe::application::{
    auth::dto::SignupForm, cafes::dto::CafeForm, likes::dto::LikeRequest,
    profile::dto::ProfileForm,
};
use cafe::domain::{
    cafe::entity::DEFAULT_CAFE_IMAGE_URL,
    errors::{DomainError, FieldErrors},
    user::entity::{DEFAULT_USER_IMAGE_URL, User},
};
use validator::Validate;

#[test]
fn cafe_form_trims_and_blanks_optional_fields() {
    let form: CafeForm = serde_urlencoded::from_str(
        "name=++Test+Cafe++&description=&url=&address=500+Sansome+St&city_code=sf&image_url=",
    )
    .unwrap();
    assert_eq!(form.name, "Test Cafe");
    assert_eq!(form.description, None);
    assert_eq!(form.url, None);
    assert!(form.validate().is_ok());
    assert_eq!(form.into_fields().image_url, DEFAULT_CAFE_IMAGE_URL);
}

#[test]
fn signup_form_rejects_long_username() {
    let form: SignupForm = serde_urlencoded::from_str(&format!(
        "username={}&first_name=T&last_name=M&email=t%40test.com&password=secret",
        "a".repeat(31)
    ))
    .unwrap();
    let errors = FieldErrors::from(form.validate().unwrap_err());
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["username"]);
}

#[test]
fn profile_form_round_trips_user_fields() {
    let user = User {
        id: 1,
        username: "test".into(),
        email: "test@test.com".into(),
        first_name: "Testy".into(),
        last_name: "MacTest".into(),
        description: None,
        image_url: DEFAULT_USER_IMAGE_URL.into(),
        hashed_password: String::new(),
    };
    let fields = ProfileForm::from(&user).into_fields();
    assert_eq!(fields.first_name, "Testy");
    assert_eq!(fields.image_url, DEFAULT_USER_IMAGE_URL);
}

#[test]
fn like_request_rejects_missing_id() {
    assert!(serde_json::from_str::<LikeRequest>("{}").is_err());
    assert!(serde_json::from_str::<LikeRequest>(r#"{"cafe_id": null}"#).is_err());
}

#[test]
fn store_constraint_errors_are_integrity_failures() {
    assert!(DomainError::UniqueViolation("users_username_key".into()).is_integrity());
    assert!(DomainError::IntegrityViolation("cafes_city_code_fkey".into()).is_integrity());
    assert!(!DomainError::NotFound("cafe 1".into()).is_integrity());
}
