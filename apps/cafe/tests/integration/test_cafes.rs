use super::helpers::{TestClient, insert_cafe, insert_city, location, read_text, unique};
use axum::http::StatusCode;

#[tokio::test]
async fn cafe_list_is_ordered_by_name() {
    let app = app_or_skip!();
    let city = insert_city(&app.db, "Testville").await;
    let suffix = unique("");
    let zed = format!("Zzz Roasters {}", suffix);
    let abe = format!("Aaa Espresso {}", suffix);
    insert_cafe(&app.db, &zed, &city).await;
    insert_cafe(&app.db, &abe, &city).await;

    let mut client = TestClient::new(&app);
    let res = client.get("/cafes").await;
    assert_eq!(res.status(), StatusCode::OK);
    let html = read_text(res).await;

    let a = html.find(&abe).expect("first cafe listed");
    let z = html.find(&zed).expect("second cafe listed");
    assert!(a < z, "cafes should be listed alphabetically");
}

#[tokio::test]
async fn cafe_detail_shows_city_and_like_hook() {
    let app = app_or_skip!();
    let city = insert_city(&app.db, "Testville").await;
    let name = unique("Detail Cafe ");
    let id = insert_cafe(&app.db, &name, &city).await;

    let mut client = TestClient::new(&app);
    let res = client.get(&format!("/cafes/{}", id)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let html = read_text(res).await;
    assert!(html.contains(&name));
    assert!(html.contains("Testville, CA"));
    assert!(html.contains(&format!(r#"id="cafe-id" value="{}""#, id)));
}

#[tokio::test]
async fn missing_cafe_is_404_page() {
    let app = app_or_skip!();
    let mut client = TestClient::new(&app);

    let res = client.get(&format!("/cafes/{}", i32::MAX)).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let html = read_text(res).await;
    assert!(html.contains("404"));
}

#[tokio::test]
async fn add_form_lists_cities() {
    let app = app_or_skip!();
    let city = insert_city(&app.db, "Formtown").await;
    let mut client = TestClient::new(&app);

    let html = read_text(client.get("/cafes/add").await).await;
    assert!(html.contains("Add Cafe"));
    assert!(html.contains(&format!(r#"<option value="{}">Formtown</option>"#, city)));
}

#[tokio::test]
async fn add_cafe_redirects_with_flash_once() {
    let app = app_or_skip!();
    let city = insert_city(&app.db, "Testville").await;
    let name = unique("New Cafe ");
    let mut client = TestClient::new(&app);

    let res = client
        .post_form(
            "/cafes/add",
            &[
                ("name", name.as_str()),
                ("description", "Test description"),
                ("url", "http://testcafe.com/"),
                ("address", "500 Sansome St"),
                ("city_code", city.as_str()),
                ("image_url", ""),
            ],
        )
        .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    let to = location(&res);
    assert!(to.starts_with("/cafes/"));

    let html = read_text(client.follow(res).await).await;
    assert!(html.contains(&format!("{} added.", name)));
    assert!(html.contains("/static/images/default-cafe.svg"));

    let again = read_text(client.get(&to).await).await;
    assert!(!again.contains(&format!("{} added.", name)));

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cafes WHERE name = $1")
        .bind(&name)
        .fetch_one(&app.db)
        .await
        .unwrap();
    assert_eq!(stored, 1);
}

#[tokio::test]
async fn invalid_cafe_form_is_rerendered() {
    let app = app_or_skip!();
    let mut client = TestClient::new(&app);

    let res = client
        .post_form(
            "/cafes/add",
            &[
                ("name", ""),
                ("address", "500 Sansome St"),
                ("city_code", "no-such-city"),
                ("url", "not a url"),
            ],
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let html = read_text(res).await;
    assert!(html.contains("This field is required."));
    assert!(html.contains("Not a valid choice."));
    assert!(html.contains("Invalid URL."));
}

#[tokio::test]
async fn edit_cafe_updates_in_place() {
    let app = app_or_skip!();
    let city = insert_city(&app.db, "Testville").await;
    let name = unique("Old Name ");
    let id = insert_cafe(&app.db, &name, &city).await;
    let mut client = TestClient::new(&app);

    let form_html = read_text(client.get(&format!("/cafes/{}/edit", id)).await).await;
    assert!(form_html.contains(&format!("Edit {}", name)));
    assert!(form_html.contains(r#"value="500 Sansome St""#));

    let new_name = unique("New Name ");
    let res = client
        .post_form(
            &format!("/cafes/{}/edit", id),
            &[
                ("name", new_name.as_str()),
                ("description", "Changed"),
                ("url", ""),
                ("address", "1 Market St"),
                ("city_code", city.as_str()),
                ("image_url", ""),
            ],
        )
        .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), format!("/cafes/{}", id));

    let html = read_text(client.follow(res).await).await;
    assert!(html.contains(&format!("{} edited.", new_name)));

    let (stored_name, address): (String, String) =
        sqlx::query_as("SELECT name, address FROM cafes WHERE id = $1")
            .bind(id)
            .fetch_one(&app.db)
            .await
            .unwrap();
    assert_eq!(stored_name, new_name);
    assert_eq!(address, "1 Market St");
}

#[tokio::test]
async fn edit_missing_cafe_is_404() {
    let app = app_or_skip!();
    let mut client = TestClient::new(&app);
    let res = client.get(&format!("/cafes/{}/edit", i32::MAX)).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
