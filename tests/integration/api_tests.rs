use crate::client_for;
use oasis_sitegen::api::{group_by_category, ContactFormData, ReservationForm};
use oasis_sitegen::ApiError;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn contact_form() -> ContactFormData {
    ContactFormData {
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        phone: "+351 900 000 000".to_string(),
        message: "Do you host birthdays?".to_string(),
    }
}

#[tokio::test]
async fn test_fetch_menu_returns_items() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/restaurant/get-all-menu/"))
        .and(query_param("id", "store-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "menuList": [
                    { "_id": "m1", "id": "m1", "name": "Bruschetta", "description": "Tomato, basil", "price": 8.5, "category": "Starters" },
                    { "_id": "m2", "name": "Risotto", "description": "Mushroom", "price": 18, "category": "Mains",
                      "dietary": { "vegetarian": true } },
                    { "_id": "m3", "name": "Olives", "description": "", "price": 4, "category": "Starters" }
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let items = client_for(&server).fetch_menu().await;

    assert_eq!(items.len(), 3);
    assert_eq!(items[0].id, "m1");
    assert_eq!(items[1].price, 18.0);
    assert!(items[1].dietary.as_ref().unwrap().vegetarian);

    let groups = group_by_category(&items);
    assert_eq!(groups[0].0, "Starters");
    assert_eq!(groups[0].1.len(), 2);
    assert_eq!(groups[1].0, "Mains");
}

#[tokio::test]
async fn test_fetch_menu_degrades_to_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/restaurant/get-all-menu/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server);

    assert!(client.fetch_menu().await.is_empty());
    assert!(matches!(
        client.try_fetch_menu().await,
        Err(ApiError::Status { status: 503, .. })
    ));
}

#[tokio::test]
async fn test_contact_form_captures_number_for_site_address() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact-number"))
        .and(body_json(json!({
            "phone": "+351 900 000 000",
            "storeId": "store-42",
            "toEmail": "info@casa-verde.example"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "message": "saved" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/email/contact-form"))
        .and(body_json(json!({
            "name": "Ana",
            "email": "ana@example.com",
            "phone": "+351 900 000 000",
            "message": "Do you host birthdays?",
            "storeId": "store-42",
            "toEmail": "owner@example.com"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": true, "message": "Message sent" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .submit_contact_form(&contact_form(), "owner@example.com", "info@casa-verde.example")
        .await
        .unwrap();

    assert!(response.success);
    assert_eq!(response.message, "Message sent");
}

#[tokio::test]
async fn test_contact_form_not_sent_when_number_capture_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact-number"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/email/contact-form"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .submit_contact_form(&contact_form(), "owner@example.com", "info@casa-verde.example")
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Status { status: 500, .. }));
}

#[tokio::test]
async fn test_reservation_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/email/reservation-form"))
        .and(body_json(json!({
            "name": "Ana",
            "email": "ana@example.com",
            "phone": "+351 900 000 000",
            "date": "2026-11-02",
            "time": "19:30",
            "guests": 4,
            "message": "Reservation request",
            "storeId": "store-42",
            "toEmail": "owner@example.com"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let form = ReservationForm {
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        phone: "+351 900 000 000".to_string(),
        date: "2026-11-02".to_string(),
        time: "19:30".to_string(),
        guests: 4,
        occasion: None,
        special_requests: None,
    };

    let response = client_for(&server)
        .submit_reservation(&form, "owner@example.com")
        .await
        .unwrap();

    assert_eq!(response, json!({ "ok": true }));
}
