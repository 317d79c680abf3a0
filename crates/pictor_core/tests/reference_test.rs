use base64::{engine::general_purpose::STANDARD, Engine as _};
use pictor_core::{DescriptionRequest, DetailLevel, ImageReference, DESCRIBE_INSTRUCTION};

#[test]
fn remote_url_passes_through_verbatim() {
    let reference = ImageReference::Remote {
        url: "https://example.com/cat.png".to_string(),
    };
    assert_eq!(reference.to_url(), "https://example.com/cat.png");
    assert!(!reference.is_inline());
}

#[test]
fn jpeg_markers_encode_to_data_uri() {
    let reference = ImageReference::Inline {
        media_type: "image/jpeg".to_string(),
        data: vec![0xFF, 0xD8, 0xFF, 0xD9],
    };
    assert_eq!(reference.to_url(), "data:image/jpeg;base64,/9j/2Q==");
}

#[test]
fn data_uri_payload_decodes_to_original_bytes() {
    let data: Vec<u8> = (0..=255).collect();
    let reference = ImageReference::Inline {
        media_type: "image/webp".to_string(),
        data: data.clone(),
    };

    let url = reference.to_url();
    let payload = url
        .strip_prefix("data:image/webp;base64,")
        .expect("data URI prefix");
    let decoded = STANDARD.decode(payload).expect("valid base64");

    assert_eq!(decoded, data);
}

#[test]
fn empty_inline_data_still_forms_a_data_uri() {
    let reference = ImageReference::Inline {
        media_type: "image/png".to_string(),
        data: Vec::new(),
    };
    assert_eq!(reference.to_url(), "data:image/png;base64,");
}

#[test]
fn request_defaults_to_fixed_instruction_and_high_detail() {
    let request = DescriptionRequest::builder()
        .model("gpt-4o-mini")
        .reference(ImageReference::Remote {
            url: "https://example.com/cat.png".to_string(),
        })
        .build()
        .expect("valid request");

    assert_eq!(request.model(), "gpt-4o-mini");
    assert_eq!(request.instruction_text(), DESCRIBE_INSTRUCTION);
    assert_eq!(*request.detail_level(), DetailLevel::High);
}

#[test]
fn request_requires_a_reference() {
    let result = DescriptionRequest::builder().model("gpt-4o-mini").build();
    assert!(result.is_err());
}

#[test]
fn detail_level_serializes_lowercase() {
    let json = serde_json::to_string(&DetailLevel::High).expect("serialize");
    assert_eq!(json, "\"high\"");
}
