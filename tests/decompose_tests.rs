//! Integration tests for decomposition against the bundled suffix list
//! and against injected tables.

#![cfg(feature = "bundled")]

use std::sync::Arc;
use std::thread;

use suffix_engine::{
    decompose, get_subdomain, Decomposer, DecompositionResult, LoadOptions, SuffixTable, TldError,
};

fn sample_hosts() -> Vec<&'static str> {
    vec![
        "www.google.com.hk",
        "www.discuz.net",
        "com",
        "www.discuz.vip",
        "www.ritto.shiga.jp",
        "ritto.shiga.jp",
        "mp.weixin.qq.com",
        "jonsen.yang.cn",
    ]
}

#[test]
fn test_sample_hosts_all_resolve() {
    for host in sample_hosts() {
        let result = decompose(host, 0);
        assert!(result.is_ok(), "{} should resolve: {:?}", host, result);
        let (_, _, suffix) = get_subdomain(host, 2);
        assert!(!suffix.is_empty(), "{} should have a suffix", host);
    }
}

#[test]
fn test_single_label_present() {
    for tld in ["com", "net", "cn", "jp", "uk", "vip"] {
        let result = decompose(tld, 0).unwrap();
        assert_eq!(result.suffix, tld);
        assert_eq!(result.domain, "");
        assert_eq!(result.subdomain, "");
        assert_eq!(result.label_count, 1);
    }
}

#[test]
fn test_single_label_absent() {
    for label in ["localhost", "zzzinvalid", "intranet"] {
        let err = decompose(label, 0).unwrap_err();
        assert!(
            matches!(&err, TldError::SuffixNotFound { input } if input == label),
            "got {:?}",
            err
        );
    }
}

#[test]
fn test_multi_label_suffix() {
    let result = decompose("ritto.shiga.jp", 0).unwrap();
    assert_eq!(result.suffix, "shiga.jp");
    assert_eq!(result.domain, "ritto.shiga.jp");
    assert_eq!(result.label_count, 3);
}

#[test]
fn test_simple_suffix() {
    let result = decompose("www.discuz.net", 0).unwrap();
    assert_eq!(result.suffix, "net");
    assert_eq!(result.domain, "discuz.net");

    let result = decompose("www.discuz.net", 1).unwrap();
    assert_eq!(result.subdomain, "www.discuz.net");
}

#[test]
fn test_deep_subdomain_with_level() {
    let result = decompose("mp.weixin.qq.com", 0).unwrap();
    assert_eq!(result.domain, "qq.com");
    assert_eq!(result.subdomain, "qq.com");

    let result = decompose("mp.weixin.qq.com", 1).unwrap();
    assert_eq!(result.domain, "qq.com");
    assert_eq!(result.subdomain, "weixin.qq.com");
}

#[test]
fn test_garbage_suffix() {
    let err = decompose("notarealhost.zzzinvalid", 0).unwrap_err();
    assert!(err.is_not_found());

    assert_eq!(
        get_subdomain("notarealhost.zzzinvalid", 0),
        (String::new(), String::new(), String::new())
    );
}

#[test]
fn test_level_larger_than_labels() {
    for level in [3, 10, usize::MAX] {
        let result = decompose("www.discuz.net", level).unwrap();
        assert_eq!(result.subdomain, "www.discuz.net", "level {}", level);
        assert_eq!(result.domain, "discuz.net");
    }
}

#[test]
fn test_idempotent() {
    for host in sample_hosts() {
        let first = decompose(host, 1).unwrap();
        let second = decompose(host, 1).unwrap();
        assert_eq!(first, second, "{}", host);
    }
}

#[test]
fn test_scheme_prefixed_input_is_not_normalized() {
    // the engine takes the scheme as part of the leftmost label
    let result = decompose("https://www.baidu.com", 1).unwrap();
    assert_eq!(result.domain, "baidu.com");
    assert_eq!(result.subdomain, "https://www.baidu.com");

    let result = suffix_engine::decompose_link("https://www.baidu.com", 1).unwrap();
    assert_eq!(result.subdomain, "www.baidu.com");
}

#[test]
fn test_injected_table() {
    let table = SuffixTable::parse("example\nco.example").unwrap();
    let engine = Decomposer::new(&table);

    let result = engine.decompose("shop.acme.co.example", 0).unwrap();
    assert_eq!(result.suffix, "co.example");
    assert_eq!(result.domain, "acme.co.example");

    // "com" is unknown to this table
    assert!(engine.decompose("www.discuz.com", 0).is_err());
}

#[test]
fn test_injected_table_case_handling() {
    let text = "COM\nNet";
    let lowered = SuffixTable::parse(text).unwrap();
    assert!(Decomposer::new(&lowered).decompose("a.com", 0).is_ok());

    let options = LoadOptions::new().with_lowercase(false);
    let verbatim = SuffixTable::parse_with_options(text, &options).unwrap();
    assert!(Decomposer::new(&verbatim).decompose("a.com", 0).is_err());
    assert!(Decomposer::new(&verbatim).decompose("a.COM", 0).is_ok());
}

#[test]
fn test_concurrent_reads() {
    let table = Arc::new(SuffixTable::bundled().unwrap());
    let expected: Vec<DecompositionResult> = sample_hosts()
        .into_iter()
        .map(|host| Decomposer::new(&table).decompose(host, 1).unwrap())
        .collect();
    let expected = Arc::new(expected);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let table = Arc::clone(&table);
            let expected = Arc::clone(&expected);
            thread::spawn(move || {
                let engine = Decomposer::new(&table);
                for _ in 0..100 {
                    for (host, want) in sample_hosts().into_iter().zip(expected.iter()) {
                        assert_eq!(&engine.decompose(host, 1).unwrap(), want);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_bundled_registry_and_private_suffixes() {
    let hosts = [
        ("www.example.co.za", "example.co.za", "co.za"),
        ("shop.co.id", "shop.co.id", "co.id"),
        ("user.github.io", "user.github.io", "github.io"),
        ("www.example.co.uk", "example.co.uk", "co.uk"),
    ];
    for (host, domain, suffix) in hosts {
        let result = decompose(host, 0).unwrap();
        assert_eq!(result.suffix, suffix, "{}", host);
        assert_eq!(result.domain, domain, "{}", host);
    }
}
