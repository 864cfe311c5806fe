//! Tests for link validation and classification.

use super::*;

#[test]
fn unparseable_inputs_are_rejected() {
    for input in ["", "not a url", "youtube.com/watch?v=abc", "://x.com", "https://"] {
        assert!(!validate(input), "expected {input:?} to be rejected");
    }
}

#[test]
fn unparseable_input_reports_parse_error() {
    assert!(matches!(
        LinkValidator::default().check("not a url"),
        Err(LinkError::Parse(_))
    ));
    assert!(matches!(
        LinkValidator::default().check(""),
        Err(LinkError::Parse(_))
    ));
}

#[test]
fn url_without_host_is_rejected() {
    assert_eq!(
        LinkValidator::default().check("mailto:someone@instagram.com"),
        Err(LinkError::MissingHost)
    );
}

#[test]
fn every_allow_listed_domain_validates() {
    for domain in allow_list() {
        let url = format!("https://{domain}/some/path");
        assert!(validate(&url), "expected {url} to validate");
    }
}

#[test]
fn unsupported_host_reports_host() {
    assert_eq!(
        LinkValidator::default().check("https://example.com/video"),
        Err(LinkError::Unsupported {
            host: "example.com".to_string()
        })
    );
    assert!(!validate("https://vimeo.com/123"));
}

#[test]
fn uppercase_host_is_normalized() {
    assert_eq!(
        classify_platform("https://WWW.YouTube.COM/watch?v=abc"),
        SupportedPlatform::YouTube
    );
}

#[test]
fn classification_per_platform() {
    let cases = [
        ("https://www.instagram.com/p/abc/", SupportedPlatform::Instagram),
        ("https://m.youtube.com/watch?v=1", SupportedPlatform::YouTube),
        ("https://youtu.be/abc", SupportedPlatform::YouTube),
        ("https://twitter.com/user/status/1", SupportedPlatform::TwitterX),
        ("https://x.com/user/status/1", SupportedPlatform::TwitterX),
        ("https://www.facebook.com/watch/?v=2", SupportedPlatform::Facebook),
        ("https://pinterest.com/pin/3", SupportedPlatform::Pinterest),
        ("https://example.com/video", SupportedPlatform::Unknown),
        ("not a url", SupportedPlatform::Unknown),
        ("", SupportedPlatform::Unknown),
    ];
    for (input, expected) in cases {
        assert_eq!(classify_platform(input), expected, "input {input:?}");
    }
}

#[test]
fn classification_is_idempotent() {
    for input in ["https://youtu.be/abc", "garbage", "https://example.com"] {
        assert_eq!(classify_platform(input), classify_platform(input));
    }
}

#[test]
fn instagram_wins_over_youtube() {
    let input = "https://youtube.com.instagram.com/reel/1";
    assert!(validate(input));
    assert_eq!(classify_platform(input), SupportedPlatform::Instagram);

    let input = "https://instagram.com.youtube.com/watch?v=1";
    assert_eq!(classify_platform(input), SupportedPlatform::Instagram);
}

#[test]
fn youtube_wins_over_twitter() {
    // "youtube.com.x.com" contains both tokens.
    assert_eq!(
        classify_platform("https://youtube.com.x.com/a"),
        SupportedPlatform::YouTube
    );
}

#[test]
fn substring_matching_is_permissive() {
    assert!(validate("https://notinstagram.com.evil.net/reel"));
    assert_eq!(
        classify_platform("https://notinstagram.com.evil.net/reel"),
        SupportedPlatform::Instagram
    );
    // "dropbox.com" contains "x.com".
    assert_eq!(
        classify_platform("https://www.dropbox.com/s/file"),
        SupportedPlatform::TwitterX
    );
}

#[test]
fn suffix_matching_rejects_spoofed_hosts() {
    let v = LinkValidator::new(HostMatch::Suffix);
    assert!(!v.validate("https://notinstagram.com.evil.net/reel"));
    assert!(!v.validate("https://notinstagram.com/reel"));
    assert!(!v.validate("https://www.dropbox.com/s/file"));
    assert_eq!(
        v.classify_platform("https://www.dropbox.com/s/file"),
        SupportedPlatform::Unknown
    );
}

#[test]
fn suffix_matching_accepts_real_hosts() {
    let v = LinkValidator::new(HostMatch::Suffix);
    assert_eq!(v.classify_platform("https://instagram.com/reel/xyz"), SupportedPlatform::Instagram);
    assert_eq!(v.classify_platform("https://www.youtube.com/watch?v=a"), SupportedPlatform::YouTube);
    assert_eq!(v.classify_platform("https://mobile.x.com/u"), SupportedPlatform::TwitterX);
    assert_eq!(v.classify_platform("https://youtu.be./abc"), SupportedPlatform::YouTube);
}

#[test]
fn host_match_toml_names() {
    #[derive(serde::Deserialize)]
    struct Wrap {
        m: HostMatch,
    }
    let w: Wrap = toml::from_str("m = \"suffix\"").unwrap();
    assert_eq!(w.m, HostMatch::Suffix);
    let w: Wrap = toml::from_str("m = \"substring\"").unwrap();
    assert_eq!(w.m, HostMatch::Substring);
    assert_eq!(HostMatch::default(), HostMatch::Substring);
}
