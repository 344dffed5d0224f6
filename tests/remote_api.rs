//! Exercises the HTTP adapters against a mock backend.

use std::sync::Arc;

use httpmock::prelude::*;
use serde_json::json;

use hdmonks_lib::application::services::{
    AdminGateway, SettingsEditor, SettingsProvider, SiteApi, FALLBACK_TITLE, SAVE_SUCCEEDED,
};
use hdmonks_lib::domain::{ContactInquiry, DomainError, Settings};
use hdmonks_lib::infrastructure::{
    HeadDocument, NotificationLog, RemoteAdminGateway, RemoteSiteApi, StaticCredentials,
};

#[test]
fn public_settings_are_fetched_from_api_prefix() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/settings");
        then.status(200).json_body(json!({
            "success": true,
            "data": {
                "company_name": "HD MONKS",
                "favicon_url": "https://cdn.example.com/fav.png",
                "company_phone": null
            }
        }));
    });

    let patch = RemoteSiteApi::new(server.base_url())
        .public_settings()
        .unwrap();

    mock.assert();
    assert_eq!(patch.company_name.as_deref(), Some("HD MONKS"));
    assert_eq!(patch.company_phone, None);
    assert_eq!(patch.site_title, None);
}

#[test]
fn provider_applies_favicon_and_fallback_title_from_backend() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/settings");
        then.status(200).json_body(json!({
            "success": true,
            "data": { "favicon_url": "https://cdn.example.com/fav.png" }
        }));
    });
    let provider = SettingsProvider::new(Arc::new(RemoteSiteApi::new(server.base_url())));
    let mut head = HeadDocument::default();

    let settings = provider.load(&mut head);

    mock.assert();
    assert_eq!(settings.company_email, "contact@hdmonks.com");
    assert_eq!(head.title(), FALLBACK_TITLE);
    assert_eq!(head.favicon_href(), Some("https://cdn.example.com/fav.png"));
    assert!(!provider.is_loading());
}

#[test]
fn unsuccessful_stage_envelope_is_rejected() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/stages");
        then.status(200)
            .json_body(json!({ "success": false, "data": [] }));
    });

    let err = RemoteSiteApi::new(server.base_url()).stages().unwrap_err();

    mock.assert();
    assert!(matches!(err, DomainError::Rejected(_)));
}

#[test]
fn stages_decode_into_domain_types() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/stages");
        then.status(200).json_body(json!({
            "success": true,
            "data": [{
                "id": 1,
                "title": "Foundation",
                "subtitle": "Start right",
                "services": [{
                    "id": "svc-1",
                    "service_id": "reg",
                    "name": "Registration",
                    "description": "Company incorporation",
                    "icon": "Building2",
                    "relevant_for": ["startup"]
                }]
            }]
        }));
    });

    let stages = RemoteSiteApi::new(server.base_url()).stages().unwrap();

    mock.assert();
    assert_eq!(stages.len(), 1);
    assert_eq!(stages[0].id.to_string(), "1");
    assert_eq!(stages[0].services[0].id.to_string(), "svc-1");
    assert_eq!(stages[0].services[0].service_id, "reg");
}

#[test]
fn contact_is_posted_as_json() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/contact")
            .header("content-type", "application/json")
            .json_body(json!({
                "full_name": "Asha Rao",
                "email": "asha@example.com",
                "phone": "+91 98765 43210",
                "business_type": "startup",
                "message": "Need GST registration"
            }));
        then.status(200).json_body(json!({ "success": true }));
    });
    let inquiry = ContactInquiry {
        full_name: "Asha Rao".into(),
        email: "asha@example.com".into(),
        phone: "+91 98765 43210".into(),
        business_type: "startup".into(),
        message: "Need GST registration".into(),
    };

    RemoteSiteApi::new(server.base_url())
        .submit_contact(&inquiry)
        .unwrap();

    mock.assert();
}

#[test]
fn admin_load_sends_bearer_token() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/admin/settings")
            .header("authorization", "Bearer tok-123");
        then.status(200).json_body(json!({
            "data": { "company_name": "HD MONKS", "smtp_host": "smtp.gmail.com" }
        }));
    });
    let gateway = RemoteAdminGateway::new(
        server.base_url(),
        Arc::new(StaticCredentials::new("tok-123")),
    );

    let patch = gateway.load_settings().unwrap();

    mock.assert();
    assert_eq!(patch.mail.smtp_host.as_deref(), Some("smtp.gmail.com"));
    assert_eq!(patch.mail.smtp_port, None);
}

#[test]
fn admin_load_without_token_sends_nothing() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/admin/settings");
        then.status(200).json_body(json!({ "data": {} }));
    });
    let gateway = RemoteAdminGateway::new(server.base_url(), Arc::new(StaticCredentials::none()));

    let err = gateway.load_settings().unwrap_err();

    assert!(matches!(err, DomainError::Unauthorized(_)));
    assert_eq!(mock.calls(), 0);
}

#[test]
fn editor_saves_whole_draft_with_put() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/admin/settings")
            .header("authorization", "Bearer tok-123")
            .json_body(serde_json::to_value(Settings::blank()).unwrap());
        then.status(200).json_body(json!({ "success": true }));
    });
    let gateway = Arc::new(RemoteAdminGateway::new(
        server.base_url(),
        Arc::new(StaticCredentials::new("tok-123")),
    ));
    let log = Arc::new(NotificationLog::default());
    let editor = SettingsEditor::new(gateway, log.clone());

    editor.save().unwrap();

    mock.assert();
    assert_eq!(log.messages(), vec![SAVE_SUCCEEDED.to_string()]);
}

#[test]
fn unknown_admin_keys_survive_a_round_trip() {
    let server = MockServer::start();
    let load = server.mock(|when, then| {
        when.method(GET).path("/api/admin/settings");
        then.status(200).json_body(json!({
            "data": { "company_name": "HD MONKS", "maintenance_mode": true }
        }));
    });
    let save = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/admin/settings")
            .body_includes("\"maintenance_mode\":true");
        then.status(200).json_body(json!({ "success": true }));
    });
    let gateway = Arc::new(RemoteAdminGateway::new(
        server.base_url(),
        Arc::new(StaticCredentials::new("tok-123")),
    ));
    let mut editor = SettingsEditor::new(gateway, Arc::new(NotificationLog::default()));

    editor.load().unwrap();
    editor.save().unwrap();

    load.assert();
    save.assert();
}

#[test]
fn expired_token_maps_to_status_error() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT).path("/api/admin/settings");
        then.status(401).json_body(json!({ "detail": "Token expired" }));
    });
    let gateway = RemoteAdminGateway::new(server.base_url(), Arc::new(StaticCredentials::new("old")));

    let err = gateway.save_settings(&Settings::blank()).unwrap_err();

    mock.assert();
    match err {
        DomainError::Status { code, message } => {
            assert_eq!(code, 401);
            assert_eq!(message, "Token expired");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
