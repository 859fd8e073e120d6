use crate::{
    domain::{LookupRequest, LookupResult, VideoDetails},
    protocol::LookupResponse,
};

fn parse(body: &str) -> LookupResult {
    serde_json::from_str::<LookupResponse>(body)
        .expect("json")
        .into_result()
}

#[test]
fn success_with_payload_maps_to_details() {
    let result = parse(
        r#"{"success":true,"data":{"title":"t","videoId":"abc123","description":"line1\nline2"}}"#,
    );
    assert_eq!(
        result,
        LookupResult::Success(VideoDetails {
            title: "t".into(),
            video_id: "abc123".into(),
            description: "line1\nline2".into(),
        })
    );
}

#[test]
fn explicit_failure_keeps_service_message() {
    let result = parse(r#"{"success":false,"message":"URLが無効、または非公開です"}"#);
    assert_eq!(result, LookupResult::failure("URLが無効、または非公開です"));
}

#[test]
fn success_without_data_is_a_failure_without_message() {
    assert_eq!(parse(r#"{"success":true}"#), LookupResult::Failure { message: None });
    assert_eq!(
        parse(r#"{"success":true,"data":null}"#),
        LookupResult::Failure { message: None }
    );
}

#[test]
fn payload_without_video_id_counts_as_missing() {
    let result = parse(r#"{"success":true,"data":{"title":"t","description":"d"}}"#);
    assert_eq!(result, LookupResult::Failure { message: None });
}

#[test]
fn missing_success_flag_and_empty_message_are_falsy() {
    assert_eq!(parse(r#"{"message":""}"#), LookupResult::Failure { message: None });
}

#[test]
fn wire_names_use_camel_case_video_id() {
    let body = serde_json::to_value(LookupResponse::found(VideoDetails {
        title: "t".into(),
        video_id: "abc".into(),
        description: "d".into(),
    }))
    .expect("json");
    assert_eq!(body["data"]["videoId"], "abc");
    assert!(body.get("message").is_none());
}

#[test]
fn request_reads_v_from_query() {
    let url = url::Url::parse("https://example.com/watch?x=1&v=abc123&v=other").expect("url");
    assert_eq!(LookupRequest::from_page_url(&url).video_id(), Some("abc123"));
    assert_eq!(LookupRequest::from_query("?v=a%20b").video_id(), Some("a b"));
}

#[test]
fn request_treats_empty_or_absent_v_as_missing() {
    assert_eq!(LookupRequest::from_query("?v=").video_id(), None);
    assert_eq!(LookupRequest::from_query("").video_id(), None);
    let url = url::Url::parse("https://example.com/").expect("url");
    assert_eq!(LookupRequest::from_page_url(&url).video_id(), None);
}

#[test]
fn null_title_or_description_still_renders_content() {
    let result = parse(r#"{"success":true,"data":{"title":null,"videoId":"x","description":"d"}}"#);
    assert_eq!(
        result,
        LookupResult::Success(VideoDetails {
            title: String::new(),
            video_id: "x".into(),
            description: "d".into(),
        })
    );

    let result = parse(r#"{"success":true,"data":{"title":"t","videoId":"x","description":null}}"#);
    assert!(matches!(result, LookupResult::Success(VideoDetails { ref description, .. }) if description.is_empty()));
}

#[test]
fn null_video_id_counts_as_missing_payload() {
    let result = parse(r#"{"success":true,"data":{"title":"t","videoId":null},"message":null}"#);
    assert_eq!(result, LookupResult::Failure { message: None });
}
