//! Tests for local and remote image resolution.

use pictor_core::ImageReference;
use pictor_media::ReferenceResolver;
use tempfile::TempDir;

#[tokio::test]
async fn test_remote_urls_skip_filesystem() {
    // Base dir does not exist; any filesystem access would fail
    let resolver = ReferenceResolver::new("/definitely/not/a/real/dir");

    for url in ["https://example.com/cat.png", "http://example.com/dog.jpg"] {
        let reference = resolver.resolve(url).await.unwrap();
        assert_eq!(
            reference,
            ImageReference::Remote {
                url: url.to_string()
            }
        );
    }
}

#[tokio::test]
async fn test_relative_path_reads_inline_jpeg() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("photo.jpg"), [0xFF, 0xD8, 0xFF, 0xD9]).unwrap();
    let resolver = ReferenceResolver::new(temp_dir.path());

    let reference = resolver.resolve("./photo.jpg").await.unwrap();

    assert_eq!(
        reference,
        ImageReference::Inline {
            media_type: "image/jpeg".to_string(),
            data: vec![0xFF, 0xD8, 0xFF, 0xD9],
        }
    );
    assert_eq!(reference.to_url(), "data:image/jpeg;base64,/9j/2Q==");
}

#[tokio::test]
async fn test_absolute_path_ignores_base_dir() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("diagram.png");
    std::fs::write(&path, b"not really a png").unwrap();
    let resolver = ReferenceResolver::new("/somewhere/else");

    let reference = resolver.resolve(path.to_str().unwrap()).await.unwrap();

    match reference {
        ImageReference::Inline { media_type, data } => {
            assert_eq!(media_type, "image/png");
            assert_eq!(data, b"not really a png");
        }
        other => panic!("Expected inline reference, got {:?}", other),
    }
}

#[tokio::test]
async fn test_uppercase_scheme_is_local() {
    let temp_dir = TempDir::new().unwrap();
    let resolver = ReferenceResolver::new(temp_dir.path());

    let result = resolver.resolve("HTTPS://example.com/cat.png").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_missing_file_is_unreadable() {
    let temp_dir = TempDir::new().unwrap();
    let resolver = ReferenceResolver::new(temp_dir.path());

    let err = resolver.resolve("./missing.png").await.unwrap_err();

    let expected = temp_dir.path().join("missing.png");
    assert!(err.message.starts_with(&format!("{}: ", expected.display())));
    assert!(!err.message.contains("/./"));
}

#[tokio::test]
async fn test_empty_input_is_unreadable() {
    let temp_dir = TempDir::new().unwrap();
    let resolver = ReferenceResolver::new(temp_dir.path());

    // Resolves to the base directory itself, which cannot be read as a file
    let result = resolver.resolve("").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_directory_is_unreadable() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir(temp_dir.path().join("album.png")).unwrap();
    let resolver = ReferenceResolver::new(temp_dir.path());

    assert!(resolver.resolve("album.png").await.is_err());
}

#[tokio::test]
async fn test_missing_extension_defaults_to_jpeg() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("snapshot"), [1, 2, 3]).unwrap();
    let resolver = ReferenceResolver::new(temp_dir.path());

    let reference = resolver.resolve("snapshot").await.unwrap();

    match reference {
        ImageReference::Inline { media_type, .. } => assert_eq!(media_type, "image/jpeg"),
        other => panic!("Expected inline reference, got {:?}", other),
    }
}

#[tokio::test]
async fn test_resolving_twice_is_identical() {
    let temp_dir = TempDir::new().unwrap();
    let data: Vec<u8> = (0..4096u32).map(|i| (i % 251) as u8).collect();
    std::fs::write(temp_dir.path().join("noise.gif"), &data).unwrap();
    let resolver = ReferenceResolver::new(temp_dir.path());

    let first = resolver.resolve("noise.gif").await.unwrap();
    let second = resolver.resolve("noise.gif").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.to_url(), second.to_url());
}

#[test]
fn test_absolute_path_joins_relative_inputs() {
    let resolver = ReferenceResolver::new("/srv/images");
    assert_eq!(
        resolver.absolute_path("cats/tabby.png"),
        std::path::PathBuf::from("/srv/images/cats/tabby.png")
    );
    assert_eq!(
        resolver.absolute_path("/tmp/x.png"),
        std::path::PathBuf::from("/tmp/x.png")
    );
}

#[test]
fn test_absolute_path_folds_dot_segments() {
    let resolver = ReferenceResolver::new("/srv/images");
    assert_eq!(
        resolver.absolute_path("./missing.png"),
        std::path::PathBuf::from("/srv/images/missing.png")
    );
    assert_eq!(
        resolver.absolute_path("cats/../dogs/./rex.jpg"),
        std::path::PathBuf::from("/srv/images/dogs/rex.jpg")
    );
    assert_eq!(
        resolver.absolute_path("/tmp/./shots/../x.png"),
        std::path::PathBuf::from("/tmp/x.png")
    );
}
