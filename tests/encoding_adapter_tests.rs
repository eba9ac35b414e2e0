//! Encoding adapter integration tests / 编码适配器集成测试

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use workbench_adapters::encoding::{
    Base64Facade, FacadeError, FacadeRegistry, RemoteCall, RemoteInvoker, BASE64_FACADE,
};
use workbench_adapters::{Base64Adapter, EncodingError};

#[test]
fn test_round_trip_of_arbitrary_bytes() {
    let adapter = Base64Adapter::in_process();
    let bytes: Vec<u8> = (0..=255).collect();

    let encoded = adapter.encode(bytes.clone()).unwrap().unwrap();
    assert_eq!(adapter.decode(Some(encoded.as_str())).unwrap(), Some(bytes));
}

#[test]
fn test_known_vectors() {
    let adapter = Base64Adapter::in_process();
    for (plain, encoded) in [
        ("", ""),
        ("f", "Zg=="),
        ("fo", "Zm8="),
        ("foo", "Zm9v"),
        ("foobar", "Zm9vYmFy"),
    ] {
        assert_eq!(adapter.encode(plain).unwrap().as_deref(), Some(encoded));
        assert_eq!(
            adapter.decode(Some(encoded)).unwrap().as_deref(),
            Some(plain.as_bytes())
        );
    }
}

#[test]
fn test_decode_of_absent_input_is_absent() {
    let adapter = Base64Adapter::in_process();
    assert_eq!(adapter.decode(None).unwrap(), None);
}

#[test]
fn test_registry_without_base64_facade_fails() {
    let adapter = Base64Adapter::new(Arc::new(FacadeRegistry::new()));
    let err = adapter.encode("x").unwrap_err();
    assert!(matches!(
        err,
        EncodingError::Facade(FacadeError::UnknownFacade { .. })
    ));
}

#[test]
fn test_facade_registered_under_another_name() {
    let registry = FacadeRegistry::new().register("legacy.Base64", Arc::new(Base64Facade));
    let adapter = Base64Adapter::with_facade(Arc::new(registry), "legacy.Base64");
    assert_eq!(adapter.encode("hi").unwrap().as_deref(), Some("aGk="));
}

#[test]
fn test_each_call_reaches_the_facade_once() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let counting = move |call: &RemoteCall| {
        counter.fetch_add(1, Ordering::SeqCst);
        Base64Facade.invoke(call)
    };
    let registry = FacadeRegistry::new().register(BASE64_FACADE, Arc::new(counting));
    let adapter = Base64Adapter::new(Arc::new(registry));

    let encoded = adapter.encode("abc").unwrap();
    adapter.decode(encoded.as_deref()).unwrap();
    adapter.decode(None).unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[test]
fn test_adapter_shared_across_threads() {
    let adapter = Base64Adapter::in_process();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let adapter = adapter.clone();
            std::thread::spawn(move || {
                let text = format!("payload-{}", i);
                let encoded = adapter.encode(text.as_str()).unwrap();
                let decoded = adapter.decode(encoded.as_deref()).unwrap().unwrap();
                assert_eq!(decoded, text.into_bytes());
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
}
